//! Shared rendering utilities for overlays.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear};

use crate::common::TextField;

/// Centers a popup of the requested size inside `area`, clamped to fit.
pub fn overlay_area(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

/// Clears the popup area and draws the bordered container with a title.
/// Returns the inner content area.
pub fn render_container(frame: &mut Frame, area: Rect, title: &str, accent: Color) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent))
        .title(format!(" {title} "));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    Rect {
        x: inner.x + 1,
        y: inner.y,
        width: inner.width.saturating_sub(2),
        height: inner.height,
    }
}

/// Renders a labeled form field with a cursor when focused.
pub fn field_line(label: &str, field: &TextField, focused: bool, masked: bool) -> Line<'static> {
    let label_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let value_style = Style::default().fg(Color::White);

    let shown = if masked {
        field.masked()
    } else {
        field.value().to_string()
    };

    let mut spans = vec![Span::styled(format!("{label:<10}"), label_style)];
    if focused {
        let chars: Vec<char> = shown.chars().collect();
        let cursor = field.cursor().min(chars.len());
        let before: String = chars[..cursor].iter().collect();
        let at: String = chars
            .get(cursor)
            .map_or_else(|| " ".to_string(), char::to_string);
        let after: String = if cursor < chars.len() {
            chars[cursor + 1..].iter().collect()
        } else {
            String::new()
        };
        spans.push(Span::styled(before, value_style));
        spans.push(Span::styled(
            at,
            value_style.add_modifier(Modifier::REVERSED),
        ));
        spans.push(Span::styled(after, value_style));
    } else {
        spans.push(Span::styled(shown, value_style));
    }
    Line::from(spans)
}
