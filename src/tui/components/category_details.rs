//! # Category Details Screen
//!
//! Fetches and lists the places of one category. The fetch starts when the
//! screen is constructed; the screen renders whatever state its view model
//! has published.

use std::sync::Arc;

use log::info;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding};
use unicode_width::UnicodeWidthStr;

use crate::api::{DiscoveryApi, Place};
use crate::core::{LoadState, ResourceViewModel};
use crate::tui::components::indicator::{self, status_line};
use crate::tui::event::TuiEvent;

pub struct CategoryDetailsState {
    pub name: String,
    vm: ResourceViewModel<Vec<Place>>,
    selected: usize,
}

impl CategoryDetailsState {
    pub fn new(api: Arc<dyn DiscoveryApi>, name: &str) -> Self {
        info!("opening category details, fetching places for '{name}'");
        let fetch_name = name.to_string();
        let vm = ResourceViewModel::spawn(async move { api.category_places(&fetch_name).await });
        Self {
            name: name.to_string(),
            vm,
            selected: 0,
        }
    }

    pub fn pump(&mut self) -> bool {
        self.vm.pump()
    }

    pub fn is_loading(&self) -> bool {
        self.vm.state().is_loading()
    }

    pub fn status(&self) -> String {
        status_line(self.vm.state())
    }

    pub fn handle_event(&mut self, event: &TuiEvent) {
        let LoadState::Success(places) = self.vm.state() else {
            return;
        };
        if places.is_empty() {
            return;
        }
        match event {
            TuiEvent::CursorUp => self.selected = self.selected.saturating_sub(1),
            TuiEvent::CursorDown => self.selected = (self.selected + 1).min(places.len() - 1),
            _ => {}
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, spinner_frame: usize) {
        match self.vm.state() {
            LoadState::Idle | LoadState::Loading => {
                indicator::draw_loading(frame, area, spinner_frame);
            }
            LoadState::Failure(error) => indicator::draw_error(frame, area, error),
            LoadState::Success(places) => self.render_places(frame, area, places),
        }
    }

    fn render_places(&self, frame: &mut Frame, area: Rect, places: &[Place]) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" {} ", self.name))
            .padding(Padding::horizontal(1));

        if places.is_empty() {
            let empty = ratatui::widgets::Paragraph::new("Nothing here yet.")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let inner_width = area.width.saturating_sub(4) as usize;
        let items: Vec<ListItem> = places
            .iter()
            .enumerate()
            .map(|(i, place)| {
                let style = if i == self.selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default().fg(Color::Gray)
                };
                let name_width = place.name.width();
                let thumb = truncate_str(
                    &place.thumbnail,
                    inner_width.saturating_sub(name_width + 3),
                );
                ListItem::new(Line::from(vec![
                    Span::styled(place.name.clone(), style),
                    Span::raw("   "),
                    Span::styled(thumb, Style::default().fg(Color::DarkGray)),
                ]))
            })
            .collect();

        let mut list_state = ListState::default();
        list_state.select(Some(self.selected));
        frame.render_stateful_widget(List::new(items).block(block), area, &mut list_state);
    }
}

/// Truncate a string to fit `max_width` display columns, adding "..." if
/// needed. Width-aware so multi-column characters don't overflow the row.
fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > max_width - 3 {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}
