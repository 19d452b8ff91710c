//! Warranty door registration overlay.
//!
//! Lists the user's registered doors with their protection window and offers
//! an add form (model + serial). Registration is one-way: doors are never
//! removed here.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use nordvik_core::user::WarrantyDoor;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::OverlayUpdate;
use super::render_utils::{field_line, overlay_area, render_container};
use crate::common::TextField;
use crate::mutations::{SessionMutation, StateMutation};
use crate::state::TuiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Browse,
    Adding,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AddField {
    Model,
    Serial,
}

#[derive(Debug)]
pub struct WarrantyState {
    mode: Mode,
    model: TextField,
    serial: TextField,
    focus: AddField,
}

impl WarrantyState {
    pub fn open() -> Self {
        Self {
            mode: Mode::Browse,
            model: TextField::new(),
            serial: TextField::new(),
            focus: AddField::Model,
        }
    }

    fn doors<'a>(tui: &'a TuiState) -> &'a [WarrantyDoor] {
        tui.session
            .user()
            .map_or(&[], |user| user.warranty_doors.as_slice())
    }

    pub fn handle_key(&mut self, _tui: &TuiState, key: KeyEvent) -> OverlayUpdate {
        match self.mode {
            Mode::Browse => match key.code {
                KeyCode::Esc => OverlayUpdate::close(),
                KeyCode::Char('a') => {
                    self.mode = Mode::Adding;
                    self.focus = AddField::Model;
                    self.model.clear();
                    self.serial.clear();
                    OverlayUpdate::stay()
                }
                _ => OverlayUpdate::stay(),
            },
            Mode::Adding => self.handle_adding_key(key),
        }
    }

    fn handle_adding_key(&mut self, key: KeyEvent) -> OverlayUpdate {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => {
                self.mode = Mode::Browse;
                OverlayUpdate::stay()
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Tab => {
                self.focus = match self.focus {
                    AddField::Model => AddField::Serial,
                    AddField::Serial => AddField::Model,
                };
                OverlayUpdate::stay()
            }
            KeyCode::Enter => {
                let mutations = vec![StateMutation::Session(SessionMutation::AddWarrantyDoor {
                    model: self.model.value().to_string(),
                    serial: self.serial.value().to_string(),
                })];
                self.mode = Mode::Browse;
                OverlayUpdate::stay().with_mutations(mutations)
            }
            KeyCode::Backspace => {
                self.focused_field().backspace();
                OverlayUpdate::stay()
            }
            KeyCode::Left => {
                self.focused_field().move_left();
                OverlayUpdate::stay()
            }
            KeyCode::Right => {
                self.focused_field().move_right();
                OverlayUpdate::stay()
            }
            KeyCode::Char(ch) if !ctrl => {
                self.focused_field().insert_char(ch);
                OverlayUpdate::stay()
            }
            _ => OverlayUpdate::stay(),
        }
    }

    fn focused_field(&mut self) -> &mut TextField {
        match self.focus {
            AddField::Model => &mut self.model,
            AddField::Serial => &mut self.serial,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, tui: &TuiState) {
        let popup = overlay_area(area, 66, 14);
        let inner = render_container(frame, popup, "Warranty Doors", Color::Cyan);

        let mut lines: Vec<Line<'static>> = Vec::new();
        let doors = Self::doors(tui);

        if doors.is_empty() {
            lines.push(Line::from(Span::styled(
                "No registered doors yet.",
                Style::default().fg(Color::Gray),
            )));
        }
        for door in doors {
            let status_color = match door.status {
                nordvik_core::user::DoorStatus::Active => Color::Green,
                nordvik_core::user::DoorStatus::Expired => Color::Red,
            };
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {}  ", door.model),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    format!(
                        "SN {}  {} → {}  ",
                        door.serial, door.purchase_date, door.warranty_until
                    ),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(door.status.label(), Style::default().fg(status_color)),
            ]));
        }

        lines.push(Line::default());
        match self.mode {
            Mode::Browse => {
                lines.push(Line::from(Span::styled(
                    "a register door · Esc close",
                    Style::default().fg(Color::DarkGray),
                )));
            }
            Mode::Adding => {
                lines.push(field_line(
                    "Model",
                    &self.model,
                    self.focus == AddField::Model,
                    false,
                ));
                lines.push(field_line(
                    "Serial",
                    &self.serial,
                    self.focus == AddField::Serial,
                    false,
                ));
                lines.push(Line::default());
                lines.push(Line::from(Span::styled(
                    "Enter register · Tab fields · Esc back",
                    Style::default().fg(Color::DarkGray),
                )));
            }
        }

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

#[cfg(test)]
mod tests {
    use nordvik_core::config::Config;
    use nordvik_core::user::{DoorStatus, User, UserRole};

    use super::*;
    use crate::session;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn test_register_door_round_trip() {
        let mut tui = TuiState::new(&Config::default());
        tui.session.login(User::new(
            "u-1",
            "Partner",
            "partner@example.com",
            UserRole::User,
        ));
        let mut state = WarrantyState::open();

        state.handle_key(&tui, key(KeyCode::Char('a')));
        for ch in "Thermo 75 Premium".chars() {
            state.handle_key(&tui, key(KeyCode::Char(ch)));
        }
        state.handle_key(&tui, key(KeyCode::Tab));
        for ch in "ND-2026-001".chars() {
            state.handle_key(&tui, key(KeyCode::Char(ch)));
        }
        let update = state.handle_key(&tui, key(KeyCode::Enter));

        for mutation in update.mutations {
            if let StateMutation::Session(m) = mutation {
                session::apply(&mut tui.session, m);
            }
        }
        let doors = &tui.session.user().unwrap().warranty_doors;
        assert_eq!(doors.len(), 1);
        assert_eq!(doors[0].model, "Thermo 75 Premium");
        assert_eq!(doors[0].status, DoorStatus::Active);
    }
}
