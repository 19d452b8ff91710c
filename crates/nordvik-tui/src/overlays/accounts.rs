//! Linked-accounts manager overlay.
//!
//! Lists the user's linked order-management accounts (with their
//! sub-accounts) and offers an add form and removal by selection. The add
//! action is forwarded to the session slice; blank fields make it a silent
//! no-op there.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use nordvik_core::user::LinkedAccount;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
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
    Login,
    Secret,
}

#[derive(Debug)]
pub struct AccountsState {
    mode: Mode,
    pub selected: usize,
    login: TextField,
    secret: TextField,
    focus: AddField,
}

impl AccountsState {
    pub fn open() -> Self {
        Self {
            mode: Mode::Browse,
            selected: 0,
            login: TextField::new(),
            secret: TextField::new(),
            focus: AddField::Login,
        }
    }

    fn accounts<'a>(tui: &'a TuiState) -> &'a [LinkedAccount] {
        tui.session
            .user()
            .map_or(&[], |user| user.linked_accounts.as_slice())
    }

    pub fn handle_key(&mut self, tui: &TuiState, key: KeyEvent) -> OverlayUpdate {
        match self.mode {
            Mode::Browse => self.handle_browse_key(tui, key),
            Mode::Adding => self.handle_adding_key(key),
        }
    }

    fn handle_browse_key(&mut self, tui: &TuiState, key: KeyEvent) -> OverlayUpdate {
        let accounts = Self::accounts(tui);
        match key.code {
            KeyCode::Esc => OverlayUpdate::close(),
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                OverlayUpdate::stay()
            }
            KeyCode::Down => {
                if !accounts.is_empty() && self.selected + 1 < accounts.len() {
                    self.selected += 1;
                }
                OverlayUpdate::stay()
            }
            KeyCode::Char('a') => {
                self.mode = Mode::Adding;
                self.focus = AddField::Login;
                self.login.clear();
                self.secret.clear();
                OverlayUpdate::stay()
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                let Some(account) = accounts.get(self.selected) else {
                    return OverlayUpdate::stay();
                };
                let mutations = vec![
                    StateMutation::Session(SessionMutation::RemoveLinkedAccount {
                        id: account.id.clone(),
                    }),
                    StateMutation::SetNotice(Some(format!(
                        "Removed linked account {}.",
                        account.login
                    ))),
                ];
                // Keep the cursor valid once the entry is gone.
                self.selected = self.selected.min(accounts.len().saturating_sub(2));
                OverlayUpdate::stay().with_mutations(mutations)
            }
            _ => OverlayUpdate::stay(),
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
                    AddField::Login => AddField::Secret,
                    AddField::Secret => AddField::Login,
                };
                OverlayUpdate::stay()
            }
            KeyCode::Enter => {
                let mutations = vec![StateMutation::Session(SessionMutation::AddLinkedAccount {
                    login: self.login.value().to_string(),
                    secret: self.secret.value().to_string(),
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
            AddField::Login => &mut self.login,
            AddField::Secret => &mut self.secret,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, tui: &TuiState) {
        let popup = overlay_area(area, 62, 16);
        let inner = render_container(frame, popup, "Linked Accounts", Color::Cyan);

        let mut lines: Vec<Line<'static>> = Vec::new();
        let accounts = Self::accounts(tui);

        if accounts.is_empty() {
            lines.push(Line::from(Span::styled(
                "No linked accounts yet.",
                Style::default().fg(Color::Gray),
            )));
        }
        for (idx, account) in accounts.iter().enumerate() {
            let marker = if idx == self.selected && self.mode == Mode::Browse {
                "› "
            } else {
                "  "
            };
            let style = if idx == self.selected && self.mode == Mode::Browse {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            lines.push(Line::from(vec![
                Span::styled(format!("{marker}{}", account.login), style),
                Span::styled(
                    format!("  {}  {}", account.password_mask, account.kind.label()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));
            for sub in &account.sub_accounts {
                lines.push(Line::from(Span::styled(
                    format!("    └ {} ({})", sub.name, sub.login),
                    Style::default().fg(Color::Gray),
                )));
            }
        }

        lines.push(Line::default());
        match self.mode {
            Mode::Browse => {
                lines.push(Line::from(Span::styled(
                    "a add · d remove · ↑↓ select · Esc close",
                    Style::default().fg(Color::DarkGray),
                )));
            }
            Mode::Adding => {
                lines.push(field_line(
                    "Login",
                    &self.login,
                    self.focus == AddField::Login,
                    false,
                ));
                lines.push(field_line(
                    "Password",
                    &self.secret,
                    self.focus == AddField::Secret,
                    true,
                ));
                lines.push(Line::default());
                lines.push(Line::from(Span::styled(
                    "Enter add · Tab fields · Esc back",
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
    use nordvik_core::user::{User, UserRole};

    use super::*;
    use crate::session;

    fn tui_with_accounts() -> TuiState {
        let mut tui = TuiState::new(&Config::default());
        let mut user = User::new("u-1", "Partner", "partner@example.com", UserRole::User);
        user.add_linked_account("orders-01", "secret");
        user.add_linked_account("orders-02", "secret");
        tui.session.login(user);
        tui
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn test_remove_emits_mutation_for_selected_account() {
        let tui = tui_with_accounts();
        let mut state = AccountsState::open();
        state.handle_key(&tui, key(KeyCode::Down));

        let update = state.handle_key(&tui, key(KeyCode::Char('d')));

        let expected = tui.session.user().unwrap().linked_accounts[1].id.clone();
        assert!(matches!(
            update.mutations.first(),
            Some(StateMutation::Session(SessionMutation::RemoveLinkedAccount { id })) if *id == expected
        ));
    }

    #[test]
    fn test_remove_with_no_accounts_is_noop() {
        let mut tui = TuiState::new(&Config::default());
        tui.session.login(User::new(
            "u-1",
            "Partner",
            "partner@example.com",
            UserRole::User,
        ));
        let mut state = AccountsState::open();

        let update = state.handle_key(&tui, key(KeyCode::Char('d')));
        assert!(update.mutations.is_empty());
    }

    #[test]
    fn test_add_form_round_trip() {
        let mut tui = tui_with_accounts();
        let mut state = AccountsState::open();

        state.handle_key(&tui, key(KeyCode::Char('a')));
        for ch in "west-orders".chars() {
            state.handle_key(&tui, key(KeyCode::Char(ch)));
        }
        state.handle_key(&tui, key(KeyCode::Tab));
        for ch in "secret".chars() {
            state.handle_key(&tui, key(KeyCode::Char(ch)));
        }
        let update = state.handle_key(&tui, key(KeyCode::Enter));

        // Apply the returned mutations to the session and observe the append.
        for mutation in update.mutations {
            if let StateMutation::Session(m) = mutation {
                session::apply(&mut tui.session, m);
            }
        }
        let accounts = &tui.session.user().unwrap().linked_accounts;
        assert_eq!(accounts.len(), 3);
        assert_eq!(accounts[2].login, "west-orders");
    }

    #[test]
    fn test_add_with_blank_secret_leaves_list_unchanged() {
        let mut tui = tui_with_accounts();
        let mut state = AccountsState::open();

        state.handle_key(&tui, key(KeyCode::Char('a')));
        for ch in "west-orders".chars() {
            state.handle_key(&tui, key(KeyCode::Char(ch)));
        }
        let update = state.handle_key(&tui, key(KeyCode::Enter));

        for mutation in update.mutations {
            if let StateMutation::Session(m) = mutation {
                session::apply(&mut tui.session, m);
            }
        }
        assert_eq!(tui.session.user().unwrap().linked_accounts.len(), 2);
    }
}
