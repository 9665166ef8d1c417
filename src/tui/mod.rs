//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI, and
//! routes keyboard events to the active screen.
//!
//! This is the only module that knows about ratatui and crossterm; the core
//! state machines underneath could be re-fronted by a different adapter.
//!
//! ## Screen stack
//!
//! Navigation is a stack: the discover screen sits at the bottom and pushes
//! one detail screen at a time. Esc pops; Esc on the discover screen quits.
//! Each detail screen owns its view model, so popping a screen drops its
//! in-flight fetch with it; the late completion lands on a closed channel
//! and is discarded.
//!
//! ## Redraw strategy
//!
//! Conditional redraw, the same split as the rest of the loop:
//!
//! - **Animating** (a fetch in flight): draws every ~80ms so the spinner runs.
//! - **Idle**: sleeps up to 500ms and only redraws on events.
//!
//! Resolved fetches are applied by pumping the top screen's view model at the
//! head of every loop turn; all observable state mutation happens on this
//! thread.

mod component;
mod components;
mod event;
mod ui;

use std::sync::Arc;
use std::time::{Duration, Instant};

use log::info;

use crate::api::{DiscoveryApi, DiscoveryClient};
use crate::core::config::ResolvedConfig;
use crate::tui::component::EventHandler;
use crate::tui::components::discover::{Discover, DiscoverEvent, DiscoverState};
use crate::tui::components::{
    CategoryDetailsState, DestinationDetailsState, RestaurantDetailsState, UserDetailsState,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// One entry in the navigation stack.
pub enum Screen {
    Discover(DiscoverState),
    Category(CategoryDetailsState),
    Destination(DestinationDetailsState),
    Restaurant(RestaurantDetailsState),
    User(UserDetailsState),
}

impl Screen {
    /// Applies a resolved fetch, if any. Discover has nothing to pump.
    fn pump(&mut self) -> bool {
        match self {
            Screen::Discover(_) => false,
            Screen::Category(state) => state.pump(),
            Screen::Destination(state) => state.pump(),
            Screen::Restaurant(state) => state.pump(),
            Screen::User(state) => state.pump(),
        }
    }

    fn is_loading(&self) -> bool {
        match self {
            Screen::Discover(_) => false,
            Screen::Category(state) => state.is_loading(),
            Screen::Destination(state) => state.is_loading(),
            Screen::Restaurant(state) => state.is_loading(),
            Screen::User(state) => state.is_loading(),
        }
    }

    pub fn title(&self) -> String {
        match self {
            Screen::Discover(_) => "Discover".to_string(),
            Screen::Category(state) => format!("Category: {}", state.name),
            Screen::Destination(state) => state.destination.name.to_string(),
            Screen::Restaurant(state) => state.name.to_string(),
            Screen::User(state) => state.name.to_string(),
        }
    }

    pub fn status(&self) -> String {
        match self {
            Screen::Discover(_) => String::new(),
            Screen::Category(state) => state.status(),
            Screen::Destination(state) => state.status(),
            Screen::Restaurant(state) => state.status(),
            Screen::User(state) => state.status(),
        }
    }

    fn help_text(&self) -> &'static str {
        match self {
            Screen::Discover(_) => " Tab Section  ↑↓ Select  Enter Open  Esc Quit",
            Screen::Category(_) => " ↑↓ Select  Esc Back",
            Screen::Destination(_) | Screen::Restaurant(_) => {
                " ←→ Photos  ↑↓ Scroll  Esc Back"
            }
            Screen::User(_) => " ↑↓ Scroll  Esc Back",
        }
    }

    fn render(&mut self, frame: &mut ratatui::Frame, area: ratatui::layout::Rect, spinner_frame: usize) {
        match self {
            Screen::Discover(state) => Discover::new(state).render(frame, area),
            Screen::Category(state) => state.render(frame, area, spinner_frame),
            Screen::Destination(state) => state.render(frame, area, spinner_frame),
            Screen::Restaurant(state) => state.render(frame, area, spinner_frame),
            Screen::User(state) => state.render(frame, area, spinner_frame),
        }
    }

    /// Only the discover screen produces navigation; detail screens handle
    /// their own paging and scrolling.
    fn handle_event(&mut self, event: &TuiEvent) -> Option<DiscoverEvent> {
        match self {
            Screen::Discover(state) => state.handle_event(event),
            Screen::Category(state) => {
                state.handle_event(event);
                None
            }
            Screen::Destination(state) => {
                state.handle_event(event);
                None
            }
            Screen::Restaurant(state) => {
                state.handle_event(event);
                None
            }
            Screen::User(state) => {
                state.handle_event(event);
                None
            }
        }
    }
}

/// Builds the detail screen for a discover choice. Constructing the screen
/// state starts its fetch.
fn open_screen(choice: DiscoverEvent, api: Arc<dyn DiscoveryApi>) -> Screen {
    match choice {
        DiscoverEvent::OpenCategory(name) => {
            Screen::Category(CategoryDetailsState::new(api, name))
        }
        DiscoverEvent::OpenDestination(destination) => {
            Screen::Destination(DestinationDetailsState::new(api, destination))
        }
        DiscoverEvent::OpenRestaurant(restaurant) => Screen::Restaurant(
            RestaurantDetailsState::new(api, restaurant.id, restaurant.name),
        ),
        DiscoverEvent::OpenCreator(creator) => {
            Screen::User(UserDetailsState::new(api, creator.id, creator.name))
        }
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    info!("starting TUI against {}", config.base_url);
    let api: Arc<dyn DiscoveryApi> = Arc::new(DiscoveryClient::new(config.base_url));

    let mut stack: Vec<Screen> = vec![Screen::Discover(DiscoverState::new())];
    let mut terminal = ratatui::init();

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        // Apply any resolved fetch on this thread before drawing.
        if let Some(screen) = stack.last_mut()
            && screen.pump()
        {
            needs_redraw = true;
        }

        let animating = stack.last().is_some_and(Screen::is_loading);
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let elapsed = start_time.elapsed().as_secs_f32();
            let spinner_frame = (elapsed * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &mut stack, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short while a spinner runs, long when idle
        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match event {
                // Resize just needs a redraw (already flagged above)
                TuiEvent::Resize => {}
                TuiEvent::ForceQuit => should_quit = true,
                TuiEvent::Back => {
                    if stack.len() > 1 {
                        stack.pop();
                    } else {
                        should_quit = true;
                    }
                }
                other => {
                    if let Some(screen) = stack.last_mut()
                        && let Some(choice) = screen.handle_event(&other)
                    {
                        stack.push(open_screen(choice, api.clone()));
                    }
                }
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}
