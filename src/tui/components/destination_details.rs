//! # Destination Details Screen
//!
//! Photo pager on top (the destination's header carousel), description and
//! coordinates below. The pager is built once, when the fetch resolves.

use std::sync::Arc;

use log::info;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::api::{image_refs, DestinationDetails, DiscoveryApi};
use crate::core::catalog;
use crate::core::{LoadState, ResourceViewModel};
use crate::tui::components::indicator::{self, status_line};
use crate::tui::components::photo_pager::{PhotoPager, PhotoPagerState};
use crate::tui::event::TuiEvent;

pub struct DestinationDetailsState {
    pub destination: &'static catalog::Destination,
    vm: ResourceViewModel<DestinationDetails>,
    pager: Option<PhotoPagerState>,
    scroll: u16,
}

impl DestinationDetailsState {
    pub fn new(api: Arc<dyn DiscoveryApi>, destination: &'static catalog::Destination) -> Self {
        info!("opening destination details for '{}'", destination.name);
        let name = destination.name.to_string();
        let vm = ResourceViewModel::spawn(async move { api.destination_details(&name).await });
        Self {
            destination,
            vm,
            pager: None,
            scroll: 0,
        }
    }

    pub fn pump(&mut self) -> bool {
        let changed = self.vm.pump();
        if changed && let LoadState::Success(details) = self.vm.state() {
            // The carousel opens on the first photo, like the header pager.
            self.pager = Some(PhotoPagerState::new(image_refs(&details.photos), 0));
        }
        changed
    }

    pub fn is_loading(&self) -> bool {
        self.vm.state().is_loading()
    }

    pub fn status(&self) -> String {
        status_line(self.vm.state())
    }

    pub fn handle_event(&mut self, event: &TuiEvent) {
        if let Some(pager) = &mut self.pager && pager.handle_event(event) {
            return;
        }
        match event {
            TuiEvent::CursorUp => self.scroll = self.scroll.saturating_sub(1),
            TuiEvent::CursorDown => self.scroll = self.scroll.saturating_add(1),
            _ => {}
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, spinner_frame: usize) {
        match self.vm.state() {
            LoadState::Idle | LoadState::Loading => {
                indicator::draw_loading(frame, area, spinner_frame);
            }
            LoadState::Failure(error) => indicator::draw_error(frame, area, error),
            LoadState::Success(details) => {
                let [pager_area, header_area, body_area] = Layout::vertical([
                    Constraint::Length(8),
                    Constraint::Length(3),
                    Constraint::Min(0),
                ])
                .areas(area);

                if let Some(pager) = &self.pager {
                    PhotoPager::new(pager).render(frame, pager_area);
                }

                let header = vec![
                    Line::from(Span::styled(
                        self.destination.name,
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(
                        format!(
                            "{}  ({:.3}, {:.3})",
                            self.destination.country,
                            self.destination.latitude,
                            self.destination.longitude
                        ),
                        Style::default().fg(Color::DarkGray),
                    )),
                ];
                frame.render_widget(Paragraph::new(header), header_area);

                let description = Paragraph::new(details.description.clone())
                    .style(Style::default().fg(Color::Gray))
                    .wrap(Wrap { trim: true })
                    .scroll((self.scroll, 0));
                frame.render_widget(description, body_area);
            }
        }
    }
}
