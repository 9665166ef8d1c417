//! # Restaurant Details Screen
//!
//! The longest screen: photo pager, location and description, popular
//! dishes, customer reviews. Everything below the pager lives in a scroll
//! view sized from the rendered line count.

use std::sync::Arc;

use log::info;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::api::{image_refs, DiscoveryApi, RestaurantDetails};
use crate::core::{LoadState, ResourceViewModel};
use crate::tui::components::indicator::{self, status_line};
use crate::tui::components::photo_pager::{PhotoPager, PhotoPagerState};
use crate::tui::event::TuiEvent;

pub struct RestaurantDetailsState {
    pub name: &'static str,
    vm: ResourceViewModel<RestaurantDetails>,
    pager: Option<PhotoPagerState>,
    scroll_state: ScrollViewState,
}

impl RestaurantDetailsState {
    pub fn new(api: Arc<dyn DiscoveryApi>, id: u32, name: &'static str) -> Self {
        info!("opening restaurant details for '{name}' (id={id})");
        let vm = ResourceViewModel::spawn(async move { api.restaurant_details(id).await });
        Self {
            name,
            vm,
            pager: None,
            scroll_state: ScrollViewState::default(),
        }
    }

    pub fn pump(&mut self) -> bool {
        let changed = self.vm.pump();
        if changed && let LoadState::Success(details) = self.vm.state() {
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
            TuiEvent::CursorUp | TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::CursorDown | TuiEvent::ScrollDown => self.scroll_state.scroll_down(),
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
                let [pager_area, body_area] =
                    Layout::vertical([Constraint::Length(8), Constraint::Min(0)]).areas(area);

                if let Some(pager) = &self.pager {
                    PhotoPager::new(pager).render(frame, pager_area);
                }

                let content_width = body_area.width.saturating_sub(1);
                let body = Paragraph::new(body_lines(self.name, details))
                    .wrap(Wrap { trim: false });
                let content_height = body.line_count(content_width) as u16;

                let mut scroll_view = ScrollView::new(Size::new(content_width, content_height))
                    .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
                    .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
                scroll_view.render_widget(body, Rect::new(0, 0, content_width, content_height));
                frame.render_stateful_widget(scroll_view, body_area, &mut self.scroll_state);
            }
        }
    }
}

fn body_lines(name: &str, details: &RestaurantDetails) -> Vec<Line<'static>> {
    let heading = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);
    let dim = Style::default().fg(Color::DarkGray);
    let body = Style::default().fg(Color::Gray);

    let mut lines = vec![
        Line::from(Span::styled(name.to_string(), heading)),
        Line::from(vec![
            Span::styled(format!("{}, {}", details.city, details.country), body),
            Span::raw("  "),
            Span::styled("$$$$$", Style::default().fg(Color::Yellow)),
        ]),
        Line::raw(""),
        Line::from(Span::styled(details.description.clone(), body)),
        Line::raw(""),
        Line::from(Span::styled("Popular Dishes".to_string(), heading)),
    ];

    for dish in &details.popular_dishes {
        lines.push(Line::from(vec![
            Span::styled(dish.name.clone(), body),
            Span::raw("  "),
            Span::styled(dish.price.clone(), Style::default().fg(Color::Yellow)),
            Span::styled(format!("  {} photos", dish.num_photos), dim),
        ]));
        lines.push(Line::from(Span::styled(format!("  {}", dish.photo), dim)));
    }

    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        "Customer Reviews".to_string(),
        heading,
    )));

    for review in &details.reviews {
        let full = usize::from(review.rating.min(5));
        let stars = format!("{}{}", "★".repeat(full), "☆".repeat(5 - full));
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} {}", review.user.first_name, review.user.last_name),
                Style::default().fg(Color::White),
            ),
            Span::raw("  "),
            Span::styled(stars, Style::default().fg(Color::Yellow)),
        ]));
        lines.push(Line::from(Span::styled(review.text.clone(), body)));
        lines.push(Line::raw(""));
    }

    lines
}
