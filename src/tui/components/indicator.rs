//! Loading and error affordances shared by every detail screen.
//!
//! Each screen renders exactly one of: spinner while the fetch is in flight,
//! error notice once it fails, or its own content once it succeeds. The
//! spinner frame index is computed by the event loop from wall-clock time
//! and passed down, so all screens animate in step.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::api::FetchError;
use crate::core::LoadState;

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Title-bar status for a detail screen: in-flight and failed fetches are
/// worth a word up top, success speaks through the content.
pub fn status_line<T>(state: &LoadState<T>) -> String {
    match state {
        LoadState::Idle | LoadState::Loading => "Loading..".to_string(),
        LoadState::Failure(error) => error.to_string(),
        LoadState::Success(_) => String::new(),
    }
}

/// Centered spinner + "Loading.." text.
pub fn draw_loading(frame: &mut Frame, area: Rect, spinner_frame: usize) {
    let glyph = SPINNER_FRAMES[spinner_frame % SPINNER_FRAMES.len()];
    let text = format!("{glyph} Loading..");

    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, centered(area, 20, 1));
}

/// Terminal failure notice. The screen takes no corrective action; the
/// message is the whole affordance.
pub fn draw_error(frame: &mut Frame, area: Rect, error: &FetchError) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(" Error ");

    let lines = vec![
        Line::from("Could not load this screen."),
        Line::from(error.to_string()),
    ];

    let paragraph = Paragraph::new(lines)
        .style(Style::default().fg(Color::Red))
        .alignment(Alignment::Center)
        .block(block);

    frame.render_widget(paragraph, centered(area, 60, 4));
}

fn centered(outer: Rect, width: u16, height: u16) -> Rect {
    let [area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(outer);
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    area
}
