use crossterm::event::{self, Event, KeyCode, KeyModifiers, MouseEventKind};

/// TUI-specific input events
pub enum TuiEvent {
    /// Ctrl+C: quit from anywhere.
    ForceQuit,
    /// Esc: leave the current screen (quits from the discover screen).
    Back,
    Submit,
    CursorUp,
    CursorDown,
    /// Left/Right: photo paging on detail screens.
    PageLeft,
    PageRight,
    /// Tab: cycle discover sections.
    NextSection,
    ScrollUp,
    ScrollDown,
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

/// Poll for an event with timeout
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if event::poll(timeout).unwrap() {
        match event::read().unwrap() {
            Event::Key(key_event) => {
                log::debug!(
                    "Key event: {:?} with modifiers {:?}",
                    key_event.code,
                    key_event.modifiers
                );
                match (key_event.modifiers, key_event.code) {
                    (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                    (_, KeyCode::Char('q')) => Some(TuiEvent::ForceQuit),
                    (_, KeyCode::Esc) => Some(TuiEvent::Back),
                    (_, KeyCode::Enter) => Some(TuiEvent::Submit),
                    (_, KeyCode::Up | KeyCode::Char('k')) => Some(TuiEvent::CursorUp),
                    (_, KeyCode::Down | KeyCode::Char('j')) => Some(TuiEvent::CursorDown),
                    (_, KeyCode::Left | KeyCode::Char('h')) => Some(TuiEvent::PageLeft),
                    (_, KeyCode::Right | KeyCode::Char('l')) => Some(TuiEvent::PageRight),
                    (_, KeyCode::Tab) => Some(TuiEvent::NextSection),
                    (_, KeyCode::PageUp) => Some(TuiEvent::ScrollUp),
                    (_, KeyCode::PageDown) => Some(TuiEvent::ScrollDown),
                    _ => None,
                }
            }
            Event::Mouse(mouse_event) => match mouse_event.kind {
                MouseEventKind::ScrollUp => Some(TuiEvent::ScrollUp),
                MouseEventKind::ScrollDown => Some(TuiEvent::ScrollDown),
                _ => None,
            },
            Event::Resize(_, _) => Some(TuiEvent::Resize),
            _ => None,
        }
    } else {
        None
    }
}
