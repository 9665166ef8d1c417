use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

use crate::tui::Screen;
use crate::tui::component::Component;
use crate::tui::components::TitleBar;

/// Full-frame layout: one-line title bar, the active screen, one-line key
/// hints. Only the top of the screen stack renders.
pub fn draw_ui(frame: &mut Frame, stack: &mut [Screen], spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, help_area] = layout.areas(frame.area());

    let screen = stack.last_mut().expect("screen stack is never empty");

    let mut title_bar = TitleBar::new(screen.title(), screen.status());
    title_bar.render(frame, title_area);

    screen.render(frame, main_area, spinner_frame);

    let help = Paragraph::new(screen.help_text()).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, help_area);
}
