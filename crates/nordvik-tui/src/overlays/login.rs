//! Sign-in / registration form overlay.
//!
//! Mirrors the behavior of the portal's login card: two modes sharing the
//! email field, a per-form busy flag while the simulated round trip runs,
//! and inline error / "account created" notices. Submitting is ignored
//! while busy; closing the overlay does not cancel an in-flight attempt
//! (there is nothing to cancel - the later result simply wins).

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use nordvik_core::auth::Credentials;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::OverlayUpdate;
use super::render_utils::{field_line, overlay_area, render_container};
use crate::common::TextField;
use crate::effects::UiEffect;
use crate::mutations::{SessionMutation, StateMutation};
use crate::render::SPINNER_FRAMES;
use crate::state::TuiState;

/// Which form the overlay is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Login,
    Register,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormField {
    Email,
    Password,
}

#[derive(Debug)]
pub struct LoginState {
    pub mode: FormMode,
    focus: FormField,
    email: TextField,
    password: TextField,
    /// A round trip is in flight; submission is ignored until it resolves.
    pub busy: bool,
    pub error: Option<String>,
    /// Show the "account created" notice in sign-in mode.
    pub registered: bool,
}

impl LoginState {
    pub fn open() -> Self {
        Self {
            mode: FormMode::Login,
            focus: FormField::Email,
            email: TextField::new(),
            password: TextField::new(),
            busy: false,
            error: None,
            registered: false,
        }
    }

    /// Called by the reducer when registration completed: switch to sign-in
    /// mode, keep the email for convenience, clear the secret.
    pub fn on_registered(&mut self) {
        self.busy = false;
        self.mode = FormMode::Login;
        self.registered = true;
        self.error = None;
        self.password.clear();
    }

    /// Called by the reducer when an attempt failed.
    pub fn on_error(&mut self, message: String) {
        self.busy = false;
        self.error = Some(message);
    }

    fn focused_field(&mut self) -> &mut TextField {
        match self.focus {
            FormField::Email => &mut self.email,
            FormField::Password => &mut self.password,
        }
    }

    fn credentials(&self) -> Credentials {
        Credentials::new(self.email.value(), self.password.value())
    }

    pub fn handle_key(&mut self, _tui: &TuiState, key: KeyEvent) -> OverlayUpdate {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => OverlayUpdate::close()
                .with_mutations(vec![StateMutation::Session(SessionMutation::HideLoginView)]),
            KeyCode::Tab | KeyCode::BackTab => {
                self.mode = match self.mode {
                    FormMode::Login => FormMode::Register,
                    FormMode::Register => FormMode::Login,
                };
                self.error = None;
                OverlayUpdate::stay()
            }
            KeyCode::Up => {
                self.focus = FormField::Email;
                OverlayUpdate::stay()
            }
            KeyCode::Down => {
                self.focus = FormField::Password;
                OverlayUpdate::stay()
            }
            KeyCode::Enter => {
                if self.busy {
                    return OverlayUpdate::stay();
                }
                self.busy = true;
                self.error = None;
                let credentials = self.credentials();
                let effect = match self.mode {
                    FormMode::Login => UiEffect::SpawnLogin { credentials },
                    FormMode::Register => UiEffect::SpawnRegister { credentials },
                };
                OverlayUpdate::stay().with_ui_effects(vec![effect])
            }
            KeyCode::Backspace => {
                self.focused_field().backspace();
                OverlayUpdate::stay()
            }
            KeyCode::Delete => {
                self.focused_field().delete();
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
            KeyCode::Home => {
                self.focused_field().move_home();
                OverlayUpdate::stay()
            }
            KeyCode::End => {
                self.focused_field().move_end();
                OverlayUpdate::stay()
            }
            KeyCode::Char(ch) if !ctrl => {
                self.focused_field().insert_char(ch);
                OverlayUpdate::stay()
            }
            _ => OverlayUpdate::stay(),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, tui: &TuiState) {
        let popup = overlay_area(area, 56, 14);
        let title = match self.mode {
            FormMode::Login => "Nordvik One — Sign In",
            FormMode::Register => "Nordvik One — New Account",
        };
        let inner = render_container(frame, popup, title, Color::Cyan);

        let mut lines = vec![self.mode_tabs(), Line::default()];

        lines.push(Line::from(Span::styled(
            match self.mode {
                FormMode::Login => "Sign in to your service hub.",
                FormMode::Register => "Create a profile in Nordvik One.",
            },
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::default());
        lines.push(field_line(
            "E-mail",
            &self.email,
            self.focus == FormField::Email,
            false,
        ));
        lines.push(field_line(
            "Password",
            &self.password,
            self.focus == FormField::Password,
            true,
        ));
        lines.push(Line::default());
        lines.push(self.status_line(tui));
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Enter submit · Tab switch mode · ↑↓ fields · Esc cancel",
            Style::default().fg(Color::DarkGray),
        )));

        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn mode_tabs(&self) -> Line<'static> {
        let active = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
        let inactive = Style::default().fg(Color::DarkGray);
        let (login_style, register_style) = match self.mode {
            FormMode::Login => (active, inactive),
            FormMode::Register => (inactive, active),
        };
        Line::from(vec![
            Span::styled("01 Sign in", login_style),
            Span::raw("   "),
            Span::styled("02 New account", register_style),
        ])
    }

    fn status_line(&self, tui: &TuiState) -> Line<'static> {
        if self.busy {
            let spinner = SPINNER_FRAMES[tui.spinner_frame % SPINNER_FRAMES.len()];
            let message = match self.mode {
                FormMode::Login => "Checking credentials…",
                FormMode::Register => "Creating account…",
            };
            return Line::from(Span::styled(
                format!("{spinner} {message}"),
                Style::default().fg(Color::Yellow),
            ));
        }
        if let Some(error) = &self.error {
            return Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            ));
        }
        if self.registered && self.mode == FormMode::Login {
            return Line::from(Span::styled(
                "Account created. You can sign in now.",
                Style::default().fg(Color::Green),
            ));
        }
        Line::default()
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent};
    use nordvik_core::config::Config;

    use super::*;
    use crate::overlays::OverlayTransition;

    fn tui() -> TuiState {
        TuiState::new(&Config::default())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    fn type_text(state: &mut LoginState, tui: &TuiState, text: &str) {
        for ch in text.chars() {
            state.handle_key(tui, key(KeyCode::Char(ch)));
        }
    }

    #[test]
    fn test_enter_submits_credentials_and_sets_busy() {
        let tui = tui();
        let mut state = LoginState::open();
        type_text(&mut state, &tui, "partner@nordvik-doors.com");
        state.handle_key(&tui, key(KeyCode::Down));
        type_text(&mut state, &tui, "secret");

        let update = state.handle_key(&tui, key(KeyCode::Enter));

        assert!(state.busy);
        assert_eq!(
            update.effects,
            vec![UiEffect::SpawnLogin {
                credentials: Credentials::new("partner@nordvik-doors.com", "secret"),
            }]
        );
    }

    #[test]
    fn test_enter_while_busy_is_ignored() {
        let tui = tui();
        let mut state = LoginState::open();
        state.busy = true;

        let update = state.handle_key(&tui, key(KeyCode::Enter));
        assert!(update.effects.is_empty());
    }

    #[test]
    fn test_tab_switches_mode_and_clears_error() {
        let tui = tui();
        let mut state = LoginState::open();
        state.error = Some("Invalid email or password.".to_string());

        state.handle_key(&tui, key(KeyCode::Tab));

        assert_eq!(state.mode, FormMode::Register);
        assert!(state.error.is_none());

        let update = state.handle_key(&tui, key(KeyCode::Enter));
        assert!(matches!(
            update.effects.first(),
            Some(UiEffect::SpawnRegister { .. })
        ));
    }

    #[test]
    fn test_esc_closes_and_hides_login_view() {
        let tui = tui();
        let mut state = LoginState::open();

        let update = state.handle_key(&tui, key(KeyCode::Esc));

        assert!(matches!(update.transition, OverlayTransition::Close));
        assert!(matches!(
            update.mutations.as_slice(),
            [StateMutation::Session(SessionMutation::HideLoginView)]
        ));
    }

    #[test]
    fn test_on_registered_switches_to_login_and_keeps_email() {
        let tui = tui();
        let mut state = LoginState::open();
        state.handle_key(&tui, key(KeyCode::Tab));
        type_text(&mut state, &tui, "partner1");
        state.handle_key(&tui, key(KeyCode::Down));
        type_text(&mut state, &tui, "pass1234");
        state.busy = true;

        state.on_registered();

        assert_eq!(state.mode, FormMode::Login);
        assert!(state.registered);
        assert!(!state.busy);
        assert_eq!(state.credentials().email, "partner1");
        assert!(state.credentials().password.is_empty());
    }
}
