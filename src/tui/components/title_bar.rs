//! # TitleBar Component
//!
//! Top status bar showing where in the app the user is.
//!
//! Stateless: receives the current screen title and a transient status
//! message as props and renders a single line. Priority order keeps the most
//! important information visible on narrow terminals.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

pub struct TitleBar {
    /// Current screen title (e.g. "Discover", "Category: Food")
    pub screen_title: String,
    /// Transient status (e.g. "Loading..", an error summary)
    pub status_message: String,
}

impl TitleBar {
    pub fn new(screen_title: String, status_message: String) -> Self {
        Self {
            screen_title,
            status_message,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title_text = if self.status_message.is_empty() {
            format!("Wayfarer ({})", self.screen_title)
        } else {
            format!("Wayfarer ({}) | {}", self.screen_title, self.status_message)
        };

        frame.render_widget(Span::raw(title_text), area);
    }
}
