//! # Discover Screen
//!
//! Landing screen over the static catalogs: categories, popular
//! destinations, popular restaurants, trending creators. Tab moves between
//! sections, Up/Down (or j/k) moves the selection, Enter opens the detail
//! screen for the selected entry. Only detail screens touch the network.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding};

use crate::core::catalog::{self, CATEGORIES, CREATORS, DESTINATIONS, RESTAURANTS};
use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Categories,
    Destinations,
    Restaurants,
    Creators,
}

impl Section {
    fn next(self) -> Self {
        match self {
            Section::Categories => Section::Destinations,
            Section::Destinations => Section::Restaurants,
            Section::Restaurants => Section::Creators,
            Section::Creators => Section::Categories,
        }
    }

    fn title(self) -> &'static str {
        match self {
            Section::Categories => " Categories ",
            Section::Destinations => " Popular destinations ",
            Section::Restaurants => " Popular places to eat ",
            Section::Creators => " Trending creators ",
        }
    }

    fn len(self) -> usize {
        match self {
            Section::Categories => CATEGORIES.len(),
            Section::Destinations => DESTINATIONS.len(),
            Section::Restaurants => RESTAURANTS.len(),
            Section::Creators => CREATORS.len(),
        }
    }
}

/// What the user chose to open.
pub enum DiscoverEvent {
    OpenCategory(&'static str),
    OpenDestination(&'static catalog::Destination),
    OpenRestaurant(&'static catalog::Restaurant),
    OpenCreator(&'static catalog::Creator),
}

/// Persistent selection state for the discover screen.
pub struct DiscoverState {
    pub section: Section,
    pub selected: usize,
}

impl DiscoverState {
    pub fn new() -> Self {
        Self {
            section: Section::Categories,
            selected: 0,
        }
    }
}

impl EventHandler for DiscoverState {
    type Event = DiscoverEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<DiscoverEvent> {
        match event {
            TuiEvent::NextSection => {
                self.section = self.section.next();
                self.selected = 0;
                None
            }
            TuiEvent::CursorUp | TuiEvent::PageLeft => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            TuiEvent::CursorDown | TuiEvent::PageRight => {
                self.selected = (self.selected + 1).min(self.section.len() - 1);
                None
            }
            TuiEvent::Submit => Some(match self.section {
                Section::Categories => {
                    DiscoverEvent::OpenCategory(CATEGORIES[self.selected].name)
                }
                Section::Destinations => {
                    DiscoverEvent::OpenDestination(&DESTINATIONS[self.selected])
                }
                Section::Restaurants => {
                    DiscoverEvent::OpenRestaurant(&RESTAURANTS[self.selected])
                }
                Section::Creators => DiscoverEvent::OpenCreator(&CREATORS[self.selected]),
            }),
            _ => None,
        }
    }
}

impl Default for DiscoverState {
    fn default() -> Self {
        Self::new()
    }
}

/// Transient render wrapper for the discover screen.
pub struct Discover<'a> {
    state: &'a DiscoverState,
}

impl<'a> Discover<'a> {
    pub fn new(state: &'a DiscoverState) -> Self {
        Self { state }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let [categories_area, destinations_area, restaurants_area, creators_area] =
            Layout::vertical([
                Constraint::Length(3),
                Constraint::Length(DESTINATIONS.len() as u16 + 2),
                Constraint::Length(RESTAURANTS.len() as u16 + 2),
                Constraint::Length(CREATORS.len() as u16 + 2),
            ])
            .areas(area);

        self.render_categories(frame, categories_area);
        self.render_list(
            frame,
            destinations_area,
            Section::Destinations,
            DESTINATIONS
                .iter()
                .map(|d| format!("{}, {}", d.name, d.country))
                .collect(),
        );
        self.render_list(
            frame,
            restaurants_area,
            Section::Restaurants,
            RESTAURANTS.iter().map(|r| r.name.to_string()).collect(),
        );
        self.render_list(
            frame,
            creators_area,
            Section::Creators,
            CREATORS.iter().map(|c| c.name.to_string()).collect(),
        );
    }

    fn section_block(&self, section: Section) -> Block<'static> {
        let focused = self.state.section == section;
        let border_style = if focused {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(section.title())
            .title_style(border_style)
            .padding(Padding::horizontal(1))
    }

    // Categories render as one horizontal row, matching how the app leads
    // with them; the other sections are short vertical lists.
    fn render_categories(&self, frame: &mut Frame, area: Rect) {
        let focused = self.state.section == Section::Categories;
        let mut spans = Vec::new();
        for (i, category) in CATEGORIES.iter().enumerate() {
            let style = if focused && i == self.state.selected {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(format!(" {} ", category.name), style));
            spans.push(Span::raw("  "));
        }

        let block = self.section_block(Section::Categories);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(
            ratatui::widgets::Paragraph::new(Line::from(spans)),
            inner,
        );
    }

    fn render_list(&self, frame: &mut Frame, area: Rect, section: Section, rows: Vec<String>) {
        let focused = self.state.section == section;
        let items: Vec<ListItem> = rows
            .into_iter()
            .enumerate()
            .map(|(i, row)| {
                let style = if focused && i == self.state.selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default().fg(Color::Gray)
                };
                ListItem::new(Line::from(Span::styled(row, style)))
            })
            .collect();

        let mut list_state = ListState::default();
        if focused {
            list_state.select(Some(self.state.selected));
        }
        frame.render_stateful_widget(
            List::new(items).block(self.section_block(section)),
            area,
            &mut list_state,
        );
    }
}
