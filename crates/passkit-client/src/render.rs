use std::cell::{Cell, RefCell};
use std::io::{IsTerminal, Write};

use colored::{ColoredString, Colorize};

use crate::orchestrator::Operation;
use crate::presenter::{FeedbackItem, Presentation, Severity, StrengthSummary};
use crate::view::View;

const METER_WIDTH: usize = 20;

fn paint(text: &str, summary: &StrengthSummary) -> ColoredString {
    let rgb = summary.color.rgb();
    text.truecolor(rgb.r, rgb.g, rgb.b)
}

pub fn format_summary(summary: &StrengthSummary) -> String {
    let rgb = summary.color.rgb();
    let badge = format!(" {} ", summary.headline)
        .white()
        .bold()
        .on_truecolor(rgb.r, rgb.g, rgb.b);

    let filled = summary.meter.filled_cells(METER_WIDTH);
    let meter = format!(
        "{}{}",
        paint(&"█".repeat(filled), summary),
        "░".repeat(METER_WIDTH - filled).dimmed()
    );

    format!("  {}\n  {}\n  {}", badge, meter, summary.details.dimmed())
}

fn format_item(item: &FeedbackItem) -> String {
    match item.severity {
        Severity::Good => format!("  {} {}", item.severity.icon().green(), item.text),
        Severity::Warning => format!("  {} {}", item.severity.icon().yellow(), item.text),
        Severity::Error => format!(
            "  {} {}",
            item.severity.icon().red().bold(),
            item.text.red()
        ),
    }
}

pub fn format_presentation(presentation: &Presentation) -> String {
    let mut lines = vec![format_summary(&presentation.summary)];
    if !presentation.items.is_empty() {
        lines.push(String::new());
        lines.extend(presentation.items.iter().map(format_item));
    }
    lines.join("\n")
}

/// Terminal rendition of the password page.
///
/// The result section is buffered by the `render_*` calls and only written
/// to stdout by [`View::show_results`]. The busy indicator goes to stderr
/// and is only drawn on a terminal.
pub struct TerminalView {
    show_analyzed: bool,
    pending: RefCell<Option<String>>,
    spinner_drawn: Cell<bool>,
}

impl TerminalView {
    /// `show_analyzed` echoes the analyzed password in the result section.
    pub fn new(show_analyzed: bool) -> Self {
        Self {
            show_analyzed,
            pending: RefCell::new(None),
            spinner_drawn: Cell::new(false),
        }
    }
}

impl View for TerminalView {
    fn show_loading(&self, operation: Operation) {
        let mut stderr = std::io::stderr();
        if stderr.is_terminal() {
            let _ = write!(stderr, "  {}", operation.progress_label().dimmed());
            let _ = stderr.flush();
            self.spinner_drawn.set(true);
        }
    }

    fn hide_loading(&self, _operation: Operation) {
        if self.spinner_drawn.replace(false) {
            let mut stderr = std::io::stderr();
            let _ = write!(stderr, "\r\x1b[2K");
            let _ = stderr.flush();
        }
    }

    fn hide_results(&self) {
        self.pending.borrow_mut().take();
    }

    fn show_results(&self) {
        if let Some(section) = self.pending.borrow_mut().take() {
            println!("\n{}\n", section);
        }
    }

    fn render_generated(&self, password: &str, presentation: &Presentation) {
        let section = format!(
            "  {}\n\n{}",
            password.bright_white().bold(),
            format_presentation(presentation)
        );
        *self.pending.borrow_mut() = Some(section);
    }

    fn render_analysis(&self, password: &str, presentation: &Presentation) {
        let body = format_presentation(presentation);
        let section = if self.show_analyzed {
            format!("  {}\n\n{}", password.bright_white(), body)
        } else {
            body
        };
        *self.pending.borrow_mut() = Some(section);
    }

    fn notify(&self, message: &str) {
        eprintln!("\n {} {}", "✖".red(), message.red());
    }
}

#[cfg(test)]
mod tests {
    use passkit_common::AnalysisResult;

    use super::*;
    use crate::presenter::present;

    fn weak() -> AnalysisResult {
        AnalysisResult {
            length: 8,
            entropy: 18.3,
            score: 3,
            strength: "Weak".to_string(),
            strength_class: "weak".to_string(),
            feedback: vec!["Contains numbers".to_string()],
            warnings: vec![
                "Missing symbols".to_string(),
                "This is a very common password - DO NOT USE!".to_string(),
            ],
            color: None,
            char_types: None,
        }
    }

    #[test]
    fn test_presentation_text() {
        colored::control::set_override(false);
        let text = format_presentation(&present(&weak()));
        let meter = format!("  {}{}", "█".repeat(5), "░".repeat(15));
        let expected = [
            "   Weak (3/10) ",
            meter.as_str(),
            "  Length: 8 characters | Entropy: 18.3 bits",
            "",
            "  ✔ Contains numbers",
            "  ⚠ Missing symbols",
            "  ✖ This is a very common password - DO NOT USE!",
        ]
        .join("\n");
        assert_eq!(text, expected);
    }

    #[test]
    fn test_summary_without_items_has_no_trailing_block() {
        colored::control::set_override(false);
        let mut analysis = weak();
        analysis.feedback.clear();
        analysis.warnings.clear();
        let text = format_presentation(&present(&analysis));
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn test_results_are_buffered_until_shown() {
        let view = TerminalView::new(false);
        view.render_analysis("secret", &present(&weak()));
        assert!(view.pending.borrow().is_some());
        view.hide_results();
        assert!(view.pending.borrow().is_none());
    }

    #[test]
    fn test_analyzed_password_hidden_unless_requested() {
        colored::control::set_override(false);
        let hidden = TerminalView::new(false);
        hidden.render_analysis("s3cret-value", &present(&weak()));
        assert!(!hidden.pending.borrow().as_ref().unwrap().contains("s3cret-value"));

        let shown = TerminalView::new(true);
        shown.render_analysis("s3cret-value", &present(&weak()));
        assert!(shown.pending.borrow().as_ref().unwrap().contains("s3cret-value"));
    }
}
