//! Installer profile overlay (display only).

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::OverlayUpdate;
use super::render_utils::{overlay_area, render_container};
use crate::state::TuiState;

#[derive(Debug, Default)]
pub struct ProfileState;

impl ProfileState {
    pub fn open() -> Self {
        Self
    }

    pub fn handle_key(&mut self, _tui: &TuiState, key: KeyEvent) -> OverlayUpdate {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => OverlayUpdate::close(),
            _ => OverlayUpdate::stay(),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, tui: &TuiState) {
        let popup = overlay_area(area, 52, 11);
        let inner = render_container(frame, popup, "Certified Installer", Color::Cyan);

        let Some(profile) = tui
            .session
            .user()
            .and_then(|user| user.installer_profile.as_ref())
        else {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    "No installer profile on this account.",
                    Style::default().fg(Color::Gray),
                ))),
                inner,
            );
            return;
        };

        let row = |label: &str, value: String| {
            Line::from(vec![
                Span::styled(format!("{label:<16}"), Style::default().fg(Color::DarkGray)),
                Span::styled(value, Style::default().fg(Color::White)),
            ])
        };

        let lines = vec![
            row("Name", profile.name.clone()),
            row("Company", profile.company.clone()),
            row("Region", profile.region.clone()),
            row("Certified since", profile.certified_since.to_string()),
            row("Phone", profile.phone.clone()),
            Line::default(),
            Line::from(Span::styled(
                "Esc close",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        frame.render_widget(Paragraph::new(lines), inner);
    }
}
