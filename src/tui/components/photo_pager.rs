//! # Photo Pager Component
//!
//! Horizontal pager over a destination's or restaurant's photo set.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `PhotoPagerState` lives in the owning screen state
//! - `PhotoPager` is created each frame with borrowed state
//!
//! The split of responsibilities matters here: `PagedCarousel` only resolves
//! neighbors; this adapter owns the cursor (which photo is front-facing and
//! where the indicator sits) and advances it when a neighbor exists. A
//! Left/Right press on the first/last page is a no-op, not an error.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph};

use crate::api::ImageRef;
use crate::core::PagedCarousel;
use crate::tui::event::TuiEvent;

// Page indicator tint. Process-wide cosmetic constants, set once.
const INDICATOR_CURRENT: Color = Color::Magenta;
const INDICATOR_REST: Color = Color::DarkGray;

/// Persistent pager state for one photo set.
pub struct PhotoPagerState {
    carousel: PagedCarousel<ImageRef>,
    current: Option<ImageRef>,
    position: usize,
}

impl PhotoPagerState {
    /// Opens on `start_index` (clamped by the carousel). An empty photo set
    /// produces a pager with nothing to navigate.
    pub fn new(photos: Vec<ImageRef>, start_index: usize) -> Self {
        let carousel = PagedCarousel::new(photos, start_index);
        let current = carousel.starting_item().cloned();
        let position = carousel.presentation_index();
        Self {
            carousel,
            current,
            position,
        }
    }

    /// Handle a key event. Returns true when the visible page changed.
    pub fn handle_event(&mut self, event: &TuiEvent) -> bool {
        match event {
            TuiEvent::PageLeft => self.page_back(),
            TuiEvent::PageRight => self.page_forward(),
            _ => false,
        }
    }

    pub fn page_count(&self) -> usize {
        self.carousel.presentation_count()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn current(&self) -> Option<&ImageRef> {
        self.current.as_ref()
    }

    fn page_back(&mut self) -> bool {
        let Some(current) = &self.current else {
            return false;
        };
        match self.carousel.item_before(current) {
            Some(previous) => {
                self.current = Some(previous.clone());
                self.position -= 1;
                true
            }
            None => false,
        }
    }

    fn page_forward(&mut self) -> bool {
        let Some(current) = &self.current else {
            return false;
        };
        match self.carousel.item_after(current) {
            Some(next) => {
                self.current = Some(next.clone());
                self.position += 1;
                true
            }
            None => false,
        }
    }
}

/// Transient render wrapper for the pager.
pub struct PhotoPager<'a> {
    state: &'a PhotoPagerState,
}

impl<'a> PhotoPager<'a> {
    pub fn new(state: &'a PhotoPagerState) -> Self {
        Self { state }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Photos ")
            .padding(Padding::horizontal(1));

        let Some(current) = self.state.current() else {
            let empty = Paragraph::new("No photos")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        };

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [card_area, indicator_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

        // The terminal has no image decoder; the card shows the resource
        // reference the external loader would resolve.
        let card_width = card_area.width.saturating_sub(2).max(8) as usize;
        let wrapped = textwrap::fill(
            current.url(),
            textwrap::Options::new(card_width).break_words(true),
        );
        let card = Paragraph::new(wrapped)
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        frame.render_widget(card, card_area);

        frame.render_widget(
            Paragraph::new(self.indicator_line()).alignment(Alignment::Center),
            indicator_area,
        );
    }

    fn indicator_line(&self) -> Line<'static> {
        let mut spans = vec![Span::styled("◀ ", Style::default().fg(INDICATOR_REST))];
        for page in 0..self.state.page_count() {
            let (dot, color) = if page == self.state.position() {
                ("●", INDICATOR_CURRENT)
            } else {
                ("○", INDICATOR_REST)
            };
            spans.push(Span::styled(dot, Style::default().fg(color)));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled("▶", Style::default().fg(INDICATOR_REST)));
        Line::from(spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::image_refs;

    fn photos() -> Vec<ImageRef> {
        image_refs(&[
            "https://img.example/1.jpg".to_string(),
            "https://img.example/2.jpg".to_string(),
            "https://img.example/3.jpg".to_string(),
        ])
    }

    #[test]
    fn test_opens_on_start_index() {
        let pager = PhotoPagerState::new(photos(), 1);

        assert_eq!(pager.position(), 1);
        assert_eq!(pager.current().unwrap().url(), "https://img.example/2.jpg");
        assert_eq!(pager.page_count(), 3);
    }

    #[test]
    fn test_paging_moves_cursor_and_indicator_together() {
        let mut pager = PhotoPagerState::new(photos(), 0);

        assert!(pager.handle_event(&TuiEvent::PageRight));
        assert_eq!(pager.position(), 1);
        assert_eq!(pager.current().unwrap().url(), "https://img.example/2.jpg");

        assert!(pager.handle_event(&TuiEvent::PageLeft));
        assert_eq!(pager.position(), 0);
        assert_eq!(pager.current().unwrap().url(), "https://img.example/1.jpg");
    }

    #[test]
    fn test_boundary_presses_are_no_ops() {
        let mut pager = PhotoPagerState::new(photos(), 0);

        assert!(!pager.handle_event(&TuiEvent::PageLeft));
        assert_eq!(pager.position(), 0);

        pager.handle_event(&TuiEvent::PageRight);
        pager.handle_event(&TuiEvent::PageRight);
        assert_eq!(pager.position(), 2);
        assert!(!pager.handle_event(&TuiEvent::PageRight));
        assert_eq!(pager.position(), 2);
    }

    #[test]
    fn test_empty_photo_set_navigates_nowhere() {
        let mut pager = PhotoPagerState::new(Vec::new(), 0);

        assert_eq!(pager.page_count(), 0);
        assert!(pager.current().is_none());
        assert!(!pager.handle_event(&TuiEvent::PageLeft));
        assert!(!pager.handle_event(&TuiEvent::PageRight));
    }

    #[test]
    fn test_start_index_clamped_to_last_page() {
        let pager = PhotoPagerState::new(photos(), 99);

        assert_eq!(pager.position(), 2);
        assert_eq!(pager.current().unwrap().url(), "https://img.example/3.jpg");
    }

    #[test]
    fn test_other_events_do_not_page() {
        let mut pager = PhotoPagerState::new(photos(), 1);

        assert!(!pager.handle_event(&TuiEvent::CursorUp));
        assert!(!pager.handle_event(&TuiEvent::Submit));
        assert_eq!(pager.position(), 1);
    }
}
