//! Turns an [`AnalysisResult`] into presentation fragments.
//!
//! Everything here is pure: the same analysis always yields the same
//! [`Presentation`]. Rendering the fragments is the view's job.

use passkit_common::{AnalysisResult, StrengthClass};

/// Warning substrings that escalate a warning to error severity.
/// Case-sensitive; they mirror the backend's wording.
const ELEVATED_MARKERS: [&str; 2] = ["DO NOT USE", "very common"];

/// RGB color values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Badge color for a strength class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthColor {
    Red,
    Orange,
    Green,
    Emerald,
    /// Fallback for classes this client does not know.
    Gray,
}

impl StrengthColor {
    pub fn for_class(class: Option<StrengthClass>) -> Self {
        match class {
            Some(StrengthClass::Weak) => StrengthColor::Red,
            Some(StrengthClass::Moderate) => StrengthColor::Orange,
            Some(StrengthClass::Strong) => StrengthColor::Green,
            Some(StrengthClass::VeryStrong) => StrengthColor::Emerald,
            None => StrengthColor::Gray,
        }
    }

    pub fn rgb(self) -> Rgb {
        match self {
            StrengthColor::Red => Rgb::new(239, 68, 68),
            StrengthColor::Orange => Rgb::new(249, 115, 22),
            StrengthColor::Green => Rgb::new(34, 197, 94),
            StrengthColor::Emerald => Rgb::new(16, 185, 129),
            StrengthColor::Gray => Rgb::new(107, 114, 128),
        }
    }
}

/// Strength meter filled in proportion to the class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Meter {
    pub class: Option<StrengthClass>,
    pub fill_percent: u8,
}

impl Meter {
    pub fn for_class(class: Option<StrengthClass>) -> Self {
        let fill_percent = match class {
            Some(StrengthClass::Weak) => 25,
            Some(StrengthClass::Moderate) => 50,
            Some(StrengthClass::Strong) => 75,
            Some(StrengthClass::VeryStrong) => 100,
            None => 0,
        };
        Self {
            class,
            fill_percent,
        }
    }

    /// Number of filled cells out of `width`, rounded down.
    pub fn filled_cells(self, width: usize) -> usize {
        width * usize::from(self.fill_percent) / 100
    }
}

/// Headline block of a result
#[derive(Debug, Clone, PartialEq)]
pub struct StrengthSummary {
    /// e.g. `Weak (3/10)`
    pub headline: String,
    pub color: StrengthColor,
    pub meter: Meter,
    /// e.g. `Length: 8 characters | Entropy: 18.3 bits`
    pub details: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Good,
    Warning,
    Error,
}

impl Severity {
    pub fn icon(self) -> &'static str {
        match self {
            Severity::Good => "✔",
            Severity::Warning => "⚠",
            Severity::Error => "✖",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackItem {
    pub severity: Severity,
    pub text: String,
}

/// Everything the view needs to show one analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct Presentation {
    pub summary: StrengthSummary,
    pub items: Vec<FeedbackItem>,
}

pub fn present(analysis: &AnalysisResult) -> Presentation {
    Presentation {
        summary: summarize(analysis),
        items: detail_items(analysis),
    }
}

pub fn summarize(analysis: &AnalysisResult) -> StrengthSummary {
    let class = analysis.class();
    StrengthSummary {
        headline: format!("{} ({}/10)", analysis.strength, analysis.score),
        color: StrengthColor::for_class(class),
        meter: Meter::for_class(class),
        details: format!(
            "Length: {} characters | Entropy: {:.1} bits",
            analysis.length, analysis.entropy
        ),
    }
}

/// Feedback first, then warnings, each list in backend order.
pub fn detail_items(analysis: &AnalysisResult) -> Vec<FeedbackItem> {
    let good = analysis.feedback.iter().map(|text| FeedbackItem {
        severity: Severity::Good,
        text: text.clone(),
    });
    let warnings = analysis.warnings.iter().map(|text| FeedbackItem {
        severity: classify_warning(text),
        text: text.clone(),
    });
    good.chain(warnings).collect()
}

pub fn classify_warning(text: &str) -> Severity {
    if ELEVATED_MARKERS.iter().any(|marker| text.contains(marker)) {
        Severity::Error
    } else {
        Severity::Warning
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analysis(strength_class: &str) -> AnalysisResult {
        AnalysisResult {
            length: 8,
            entropy: 18.3,
            score: 3,
            strength: "Weak".to_string(),
            strength_class: strength_class.to_string(),
            feedback: vec![],
            warnings: vec!["This is a very common password".to_string()],
            color: None,
            char_types: None,
        }
    }

    #[test]
    fn test_weak_common_password_scenario() {
        let presentation = present(&analysis("weak"));
        assert_eq!(presentation.summary.headline, "Weak (3/10)");
        assert_eq!(presentation.summary.color, StrengthColor::Red);
        assert_eq!(
            presentation.summary.details,
            "Length: 8 characters | Entropy: 18.3 bits"
        );
        assert_eq!(
            presentation.items,
            vec![FeedbackItem {
                severity: Severity::Error,
                text: "This is a very common password".to_string(),
            }]
        );
    }

    #[test]
    fn test_class_colors() {
        for (tag, color) in [
            ("weak", StrengthColor::Red),
            ("moderate", StrengthColor::Orange),
            ("strong", StrengthColor::Green),
            ("very-strong", StrengthColor::Emerald),
        ] {
            assert_eq!(summarize(&analysis(tag)).color, color, "class {tag}");
        }
    }

    #[test]
    fn test_unknown_class_falls_back_to_gray() {
        for tag in ["", "Weak", "very_strong", "excellent"] {
            let summary = summarize(&analysis(tag));
            assert_eq!(summary.color, StrengthColor::Gray);
            assert_eq!(summary.color.rgb(), Rgb::new(107, 114, 128));
            assert_eq!(summary.meter.fill_percent, 0);
        }
    }

    #[test]
    fn test_meter_follows_class() {
        assert_eq!(summarize(&analysis("weak")).meter.fill_percent, 25);
        assert_eq!(summarize(&analysis("moderate")).meter.fill_percent, 50);
        assert_eq!(summarize(&analysis("strong")).meter.fill_percent, 75);
        let meter = summarize(&analysis("very-strong")).meter;
        assert_eq!(meter.fill_percent, 100);
        assert_eq!(meter.filled_cells(20), 20);
        assert_eq!(Meter::for_class(Some(StrengthClass::Moderate)).filled_cells(20), 10);
    }

    #[test]
    fn test_entropy_is_rounded_to_one_decimal() {
        let mut a = analysis("strong");
        a.entropy = 155.12567;
        a.length = 16;
        assert_eq!(
            summarize(&a).details,
            "Length: 16 characters | Entropy: 155.1 bits"
        );
        a.entropy = 0.0;
        assert!(summarize(&a).details.ends_with("Entropy: 0.0 bits"));
    }

    #[test]
    fn test_elevated_markers_are_case_sensitive() {
        assert_eq!(
            classify_warning("This is a very common password - DO NOT USE!"),
            Severity::Error
        );
        assert_eq!(classify_warning("DO NOT USE"), Severity::Error);
        assert_eq!(classify_warning("a very common pattern"), Severity::Error);
        assert_eq!(classify_warning("do not use"), Severity::Warning);
        assert_eq!(classify_warning("Very Common"), Severity::Warning);
        assert_eq!(classify_warning("Missing symbols"), Severity::Warning);
        assert_eq!(classify_warning(""), Severity::Warning);
    }

    #[test]
    fn test_feedback_precedes_warnings_in_supplied_order() {
        let mut a = analysis("moderate");
        a.feedback = vec!["b good".to_string(), "a good".to_string()];
        a.warnings = vec![
            "Missing symbols".to_string(),
            "DO NOT USE".to_string(),
            "Contains repeated characters".to_string(),
        ];
        let items = detail_items(&a);
        let texts: Vec<&str> = items.iter().map(|i| i.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "b good",
                "a good",
                "Missing symbols",
                "DO NOT USE",
                "Contains repeated characters"
            ]
        );
        let severities: Vec<Severity> = items.iter().map(|i| i.severity).collect();
        assert_eq!(
            severities,
            vec![
                Severity::Good,
                Severity::Good,
                Severity::Warning,
                Severity::Error,
                Severity::Warning
            ]
        );
    }

    #[test]
    fn test_reordering_input_reorders_output() {
        let mut a = analysis("weak");
        a.warnings = vec!["x".to_string(), "y very common".to_string()];
        let mut b = a.clone();
        b.warnings.reverse();

        let mut forward = detail_items(&a);
        forward.reverse();
        assert_eq!(forward, detail_items(&b));
    }

    #[test]
    fn test_present_is_idempotent() {
        let a = analysis("strong");
        assert_eq!(present(&a), present(&a));
    }
}
