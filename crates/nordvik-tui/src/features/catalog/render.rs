//! Card/section rendering for the portal body.

use nordvik_core::catalog::{ServiceCategory, ServiceLink};
use nordvik_core::user::UserRole;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::common::text::{pad_to_width, truncate_with_ellipsis};
use crate::state::TuiState;

/// Width of the card title column.
const TITLE_WIDTH: usize = 22;

/// Builds the full portal body: hero, card sections, partner banner.
pub fn body_lines(tui: &TuiState, width: usize) -> Vec<Line<'static>> {
    let role = tui.session.role();
    let mut lines = vec![Line::default()];

    lines.extend(hero_lines(tui));

    let visible = tui.catalog.visible(role);
    let mut row = 0usize;
    for category in ServiceCategory::all() {
        let section: Vec<&ServiceLink> = visible
            .iter()
            .copied()
            .filter(|link| link.category == *category)
            .collect();
        if section.is_empty() {
            continue;
        }

        lines.push(Line::default());
        lines.push(section_heading(category.heading(), width));
        for link in section {
            lines.push(card_line(link, role, row == tui.catalog.selected, width));
            row += 1;
        }
    }

    if role == UserRole::Guest {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "  Join the Nordvik partner network — press l to create an account.",
            Style::default().fg(Color::DarkGray),
        )));
    }

    lines
}

fn hero_lines(tui: &TuiState) -> Vec<Line<'static>> {
    match tui.session.user() {
        Some(user) => vec![Line::from(vec![
            Span::styled("  Welcome back, ", Style::default().fg(Color::White)),
            Span::styled(
                user.username.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(".", Style::default().fg(Color::White)),
        ])],
        None => vec![
            Line::from(Span::styled(
                "  Access the world of Nordvik.",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "  Every system, configurator and support channel of the premium door factory in one place.",
                Style::default().fg(Color::Gray),
            )),
        ],
    }
}

fn section_heading(heading: &str, width: usize) -> Line<'static> {
    let label = format!("  {} ", heading.to_uppercase());
    let rule_width = width.saturating_sub(label.chars().count() + 2);
    Line::from(vec![
        Span::styled(
            label,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("─".repeat(rule_width), Style::default().fg(Color::DarkGray)),
    ])
}

fn card_line(link: &ServiceLink, role: UserRole, selected: bool, width: usize) -> Line<'static> {
    let marker = if selected { "› " } else { "  " };
    let title_style = if selected {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let gate = gate_suffix(link, role);
    let used = 2 + TITLE_WIDTH + gate.chars().count();
    let description = truncate_with_ellipsis(&link.description, width.saturating_sub(used + 4));

    let mut spans = vec![
        Span::styled(marker.to_string(), title_style),
        Span::styled(pad_to_width(&link.title, TITLE_WIDTH), title_style),
        Span::styled(description, Style::default().fg(Color::Gray)),
    ];
    if !gate.is_empty() {
        spans.push(Span::styled(
            format!("  {gate}"),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

fn gate_suffix(link: &ServiceLink, role: UserRole) -> &'static str {
    if link.requires_admin && role != UserRole::Admin {
        "· admin"
    } else if link.requires_auth && role == UserRole::Guest {
        "· sign-in"
    } else if link.is_placeholder() {
        "· soon"
    } else {
        ""
    }
}
