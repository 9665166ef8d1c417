//! # User Details Screen
//!
//! Creator profile: counters up top, then the post list with view counts
//! and hashtags.

use std::sync::Arc;

use log::info;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::api::{DiscoveryApi, UserDetails};
use crate::core::{LoadState, ResourceViewModel};
use crate::tui::components::indicator::{self, status_line};
use crate::tui::event::TuiEvent;

pub struct UserDetailsState {
    pub name: &'static str,
    vm: ResourceViewModel<UserDetails>,
    scroll: u16,
}

impl UserDetailsState {
    pub fn new(api: Arc<dyn DiscoveryApi>, id: u32, name: &'static str) -> Self {
        info!("opening user details for '{name}' (id={id})");
        let vm = ResourceViewModel::spawn(async move { api.user_details(id).await });
        Self {
            name,
            vm,
            scroll: 0,
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
        match event {
            TuiEvent::CursorUp | TuiEvent::ScrollUp => self.scroll = self.scroll.saturating_sub(1),
            TuiEvent::CursorDown | TuiEvent::ScrollDown => {
                self.scroll = self.scroll.saturating_add(1)
            }
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
                let paragraph = Paragraph::new(profile_lines(details))
                    .wrap(Wrap { trim: false })
                    .scroll((self.scroll, 0));
                frame.render_widget(paragraph, area);
            }
        }
    }
}

fn profile_lines(details: &UserDetails) -> Vec<Line<'static>> {
    let heading = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);
    let dim = Style::default().fg(Color::DarkGray);
    let body = Style::default().fg(Color::Gray);

    let mut lines = vec![
        Line::from(Span::styled(
            format!("{} {}", details.first_name, details.last_name),
            heading,
        )),
        Line::from(Span::styled(format!("@{}", details.username), dim)),
        Line::from(Span::styled(
            format!(
                "{} followers · {} following · {} posts",
                details.followers,
                details.following,
                details.posts.len()
            ),
            body,
        )),
        Line::raw(""),
        Line::from(Span::styled("Posts".to_string(), heading)),
    ];

    for post in &details.posts {
        let hashtags = post
            .hashtags
            .iter()
            .map(|tag| format!("#{tag}"))
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(Line::from(vec![
            Span::styled(post.title.clone(), Style::default().fg(Color::White)),
            Span::styled(format!("  {} views", post.views), dim),
        ]));
        lines.push(Line::from(Span::styled(format!("  {}", post.image_url), dim)));
        lines.push(Line::from(Span::styled(
            format!("  {hashtags}"),
            Style::default().fg(Color::Cyan),
        )));
        lines.push(Line::raw(""));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{sample_user_details, StubApi};

    async fn settled_state(api: StubApi) -> UserDetailsState {
        let mut state = UserDetailsState::new(Arc::new(api), 0, "Amy Adams");
        tokio::time::timeout(std::time::Duration::from_secs(1), async {
            while state.is_loading() {
                state.pump();
                tokio::task::yield_now().await;
            }
        })
        .await
        .expect("fetch never settled");
        state
    }

    #[tokio::test]
    async fn test_profile_settles_with_posts() {
        let state = settled_state(StubApi::ok()).await;

        match state.vm.state() {
            LoadState::Success(details) => {
                assert_eq!(details.username, sample_user_details().username);
                assert!(!details.posts.is_empty());
            }
            other => panic!("expected success, got {other:?}"),
        }
    }

    #[test]
    fn test_profile_lines_include_counters_and_hashtags() {
        let details = sample_user_details();
        let lines = profile_lines(&details);
        let text: String = lines
            .iter()
            .map(|l| {
                l.spans
                    .iter()
                    .map(|s| s.content.as_ref())
                    .collect::<String>()
                    + "\n"
            })
            .collect();

        assert!(text.contains("followers"));
        assert!(text.contains(&format!("@{}", details.username)));
        assert!(text.contains('#'));
        assert!(text.contains("views"));
    }

    #[tokio::test]
    async fn test_error_state_has_no_posts_to_scroll() {
        let mut state = settled_state(StubApi::failing_with_status(404)).await;

        assert_eq!(state.status(), "bad status: HTTP 404");
        // Scrolling is harmless even in the error state.
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.scroll, 1);
    }
}
