//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState` by immutable reference, draw to a ratatui
//! Frame, and never mutate state or return effects.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::features::{catalog, statusline};
use crate::state::{AppState, TuiState};

/// Height of the brand header (title row + rule).
const HEADER_HEIGHT: u16 = 2;

/// Height of the status line below the body.
const STATUS_HEIGHT: u16 = 1;

/// Spinner frames for the busy animation.
pub const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

/// Renders the entire portal to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(area);

    render_header(&app.tui, frame, chunks[0]);

    let body = catalog::body_lines(&app.tui, chunks[1].width as usize);
    frame.render_widget(Paragraph::new(body), chunks[1]);

    statusline::render_status_line(&app.tui, frame, chunks[2]);

    // Modal overlay on top, centered over the full frame.
    if let Some(overlay) = &app.overlay {
        overlay.render(frame, area, &app.tui);
    }
}

fn render_header(tui: &TuiState, frame: &mut Frame, area: Rect) {
    let brand = " NORDVIK ONE";
    let tagline = " · Direct Platform";

    let account = match tui.session.user() {
        Some(user) => format!("{} · {} ", user.username, user.role.label()),
        None => "not signed in ".to_string(),
    };
    let gap = area
        .width
        .saturating_sub((brand.len() + tagline.len() + account.chars().count()) as u16)
        as usize;

    let title = Line::from(vec![
        Span::styled(
            brand,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(tagline, Style::default().fg(Color::DarkGray)),
        Span::raw(" ".repeat(gap)),
        Span::styled(account, Style::default().fg(Color::Cyan)),
    ]);
    let rule = Line::from(Span::styled(
        "─".repeat(area.width as usize),
        Style::default().fg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(vec![title, rule]), area);
}
