//! Status line rendering.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::common::truncate_with_ellipsis;
use crate::state::TuiState;

/// Renders the bottom status bar: key hints on the left, the most recent
/// notice on the right.
pub fn render_status_line(tui: &TuiState, frame: &mut Frame, area: Rect) {
    let hints = if tui.session.is_authenticated() {
        "q quit · ↑↓ select · Enter open · a accounts · w warranty · p profile · o sign out"
    } else {
        "q quit · ↑↓ select · Enter open · l sign in"
    };

    let notice = tui.notice.as_deref().unwrap_or("");
    let notice_width = (area.width as usize).saturating_sub(hints.width() + 3);
    let notice = truncate_with_ellipsis(notice, notice_width);
    let gap = (area.width as usize).saturating_sub(hints.width() + notice.width() + 2);

    let line = Line::from(vec![
        Span::styled(format!(" {hints}"), Style::default().fg(Color::DarkGray)),
        Span::raw(" ".repeat(gap)),
        Span::styled(notice, Style::default().fg(Color::Yellow)),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
