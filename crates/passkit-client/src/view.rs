use crate::orchestrator::Operation;
use crate::presenter::Presentation;

/// Handle on whatever displays the page: busy indicator, result section,
/// notices. Methods take `&self`; implementations keep their own state.
pub trait View {
    fn show_loading(&self, operation: Operation);
    fn hide_loading(&self, operation: Operation);

    fn hide_results(&self);
    /// Reveal the result section with its entrance transition.
    fn show_results(&self);

    /// Write a generated password and its analysis into the result section.
    fn render_generated(&self, password: &str, presentation: &Presentation);
    /// Write an analysis into the result section.
    fn render_analysis(&self, password: &str, presentation: &Presentation);

    /// User-visible notice: validation, backend and transport failures.
    fn notify(&self, message: &str);
}
