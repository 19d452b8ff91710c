//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.
//!
//! This is the single source of truth for how events modify state.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::mutations::{SessionMutation, StateMutation};
use crate::overlays::{self, AccountsState, LoginState, Overlay, OverlayTransition, ProfileState, WarrantyState};
use crate::state::{AppState, TuiState};
use crate::{catalog, session};

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            app.tui.spinner_frame = app.tui.spinner_frame.wrapping_add(1);
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::LoginResult { result } => {
            let (mutations, action) = session::handle_login_result(result);
            apply_mutations(&mut app.tui, mutations);
            apply_login_overlay_action(app, action);
            sync_after_session_change(app);
            vec![]
        }
        UiEvent::RegisterResult { result } => {
            let (mutations, action) = session::handle_register_result(result);
            apply_mutations(&mut app.tui, mutations);
            apply_login_overlay_action(app, action);
            vec![]
        }
    }
}

// ============================================================================
// StateMutation Dispatcher
// ============================================================================

fn apply_mutations(tui: &mut TuiState, mutations: Vec<StateMutation>) {
    for mutation in mutations {
        match mutation {
            StateMutation::Session(mutation) => session::apply(&mut tui.session, mutation),
            StateMutation::SetNotice(notice) => tui.notice = notice,
        }
    }
}

fn apply_login_overlay_action(app: &mut AppState, action: session::LoginOverlayAction) {
    match action {
        session::LoginOverlayAction::Close => {
            if matches!(app.overlay, Some(Overlay::Login(_))) {
                app.overlay = None;
            }
        }
        session::LoginOverlayAction::ShowError(message) => {
            if let Some(Overlay::Login(state)) = &mut app.overlay {
                state.on_error(message);
            }
        }
        session::LoginOverlayAction::Registered => {
            if let Some(Overlay::Login(state)) = &mut app.overlay {
                state.on_registered();
            }
        }
    }
}

/// Keeps overlay presence and catalog selection coherent with the session
/// after its flags may have changed.
///
/// The `login_visible` flag on the session drives the login overlay: any
/// path that sets the flag (key binding, gated card activation) gets the
/// overlay opened here, in one place.
fn sync_after_session_change(app: &mut AppState) {
    app.tui.catalog.clamp_selection(app.tui.session.role());
    if app.overlay.is_none() && app.tui.session.login_visible() {
        app.overlay = Some(Overlay::Login(LoginState::open()));
    }
}

// ============================================================================
// Terminal Event Handlers
// ============================================================================

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) => handle_key(app, key),
        // Resize redraws on the next tick.
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    // Try to dispatch to the active overlay first.
    if let Some(mut update) = overlays::handle_overlay_key(&app.tui, &mut app.overlay, key) {
        apply_mutations(&mut app.tui, std::mem::take(&mut update.mutations));
        if matches!(update.transition, OverlayTransition::Close) {
            app.overlay = None;
        }
        sync_after_session_change(app);
        return update.effects;
    }

    match key.code {
        KeyCode::Char('q') => vec![UiEffect::Quit],
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            vec![UiEffect::Quit]
        }
        KeyCode::Up => {
            app.tui.catalog.select_prev();
            vec![]
        }
        KeyCode::Down => {
            let role = app.tui.session.role();
            app.tui.catalog.select_next(role);
            vec![]
        }
        KeyCode::Enter => {
            let role = app.tui.session.role();
            let Some(link) = app.tui.catalog.selected_link(role).cloned() else {
                return vec![];
            };
            let (mutations, effects) = catalog::activate(&link, role);
            apply_mutations(&mut app.tui, mutations);
            sync_after_session_change(app);
            effects
        }
        KeyCode::Char('l') => {
            if app.tui.session.is_authenticated() {
                app.tui.notice = Some("Already signed in. Press o to sign out.".to_string());
            } else {
                app.tui.session.show_login_view();
                sync_after_session_change(app);
            }
            vec![]
        }
        KeyCode::Char('o') => {
            if app.tui.session.is_authenticated() {
                apply_mutations(
                    &mut app.tui,
                    vec![
                        StateMutation::Session(SessionMutation::Logout),
                        StateMutation::SetNotice(Some("Signed out.".to_string())),
                    ],
                );
                sync_after_session_change(app);
            }
            vec![]
        }
        KeyCode::Char('a') => {
            if app.tui.session.is_authenticated() {
                app.overlay = Some(Overlay::Accounts(AccountsState::open()));
            } else {
                app.tui.notice = Some("Sign in to manage linked accounts.".to_string());
            }
            vec![]
        }
        KeyCode::Char('w') => {
            if app.tui.session.is_authenticated() {
                app.overlay = Some(Overlay::Warranty(WarrantyState::open()));
            } else {
                app.tui.notice = Some("Sign in to register warranty doors.".to_string());
            }
            vec![]
        }
        KeyCode::Char('p') => {
            let has_profile = app
                .tui
                .session
                .user()
                .is_some_and(|user| user.installer_profile.is_some());
            if has_profile {
                app.overlay = Some(Overlay::Profile(ProfileState::open()));
            } else if app.tui.session.is_authenticated() {
                app.tui.notice = Some("No installer profile on this account.".to_string());
            } else {
                app.tui.notice = Some("Sign in to view the installer profile.".to_string());
            }
            vec![]
        }
        KeyCode::Esc => {
            app.tui.notice = None;
            vec![]
        }
        _ => vec![],
    }
}

#[cfg(test)]
mod tests {
    use nordvik_core::auth::AuthError;
    use nordvik_core::config::Config;
    use nordvik_core::user::{User, UserRole};

    use super::*;
    use crate::overlays::FormMode;

    fn app() -> AppState {
        AppState::new(&Config::default())
    }

    fn press(app: &mut AppState, code: KeyCode) -> Vec<UiEffect> {
        update(app, UiEvent::Terminal(Event::Key(KeyEvent::from(code))))
    }

    fn partner() -> User {
        User::new("u-1", "Partner", "partner@example.com", UserRole::User)
    }

    #[test]
    fn test_quit_effect_on_q() {
        let mut app = app();
        assert_eq!(press(&mut app, KeyCode::Char('q')), vec![UiEffect::Quit]);
    }

    #[test]
    fn test_l_opens_login_overlay_and_sets_flag() {
        let mut app = app();
        press(&mut app, KeyCode::Char('l'));

        assert!(app.tui.session.login_visible());
        assert!(matches!(app.overlay, Some(Overlay::Login(_))));
    }

    #[test]
    fn test_login_result_signs_in_and_closes_overlay() {
        let mut app = app();
        press(&mut app, KeyCode::Char('l'));

        update(
            &mut app,
            UiEvent::LoginResult {
                result: Ok(partner()),
            },
        );

        assert!(app.tui.session.is_authenticated());
        assert!(!app.tui.session.login_visible());
        assert!(app.overlay.is_none());
        assert!(app.tui.notice.as_deref().unwrap().contains("Signed in"));
    }

    #[test]
    fn test_login_failure_shows_error_in_form() {
        let mut app = app();
        press(&mut app, KeyCode::Char('l'));

        update(
            &mut app,
            UiEvent::LoginResult {
                result: Err(AuthError::InvalidCredentials),
            },
        );

        assert!(!app.tui.session.is_authenticated());
        let Some(Overlay::Login(state)) = &app.overlay else {
            panic!("login overlay should stay open");
        };
        assert_eq!(state.error.as_deref(), Some("Invalid email or password."));
        assert!(!state.busy);
    }

    #[test]
    fn test_late_login_result_overwrites_even_after_overlay_closed() {
        let mut app = app();
        press(&mut app, KeyCode::Char('l'));
        press(&mut app, KeyCode::Esc); // close form while "in flight"
        assert!(app.overlay.is_none());

        // The attempt still resolves; the later result wins.
        update(
            &mut app,
            UiEvent::LoginResult {
                result: Ok(partner()),
            },
        );

        assert!(app.tui.session.is_authenticated());
    }

    #[test]
    fn test_logout_clears_user_and_is_idempotent() {
        let mut app = app();
        app.tui.session.login(partner());

        press(&mut app, KeyCode::Char('o'));
        assert!(!app.tui.session.is_authenticated());

        press(&mut app, KeyCode::Char('o'));
        assert!(!app.tui.session.is_authenticated());
        assert!(!app.tui.session.login_visible());
    }

    #[test]
    fn test_register_result_switches_form_to_login_mode() {
        let mut app = app();
        press(&mut app, KeyCode::Char('l'));
        if let Some(Overlay::Login(state)) = &mut app.overlay {
            state.handle_key(&app.tui, KeyEvent::from(KeyCode::Tab));
        }

        update(&mut app, UiEvent::RegisterResult { result: Ok(()) });

        let Some(Overlay::Login(state)) = &app.overlay else {
            panic!("login overlay should stay open");
        };
        assert_eq!(state.mode, FormMode::Login);
        assert!(state.registered);
    }

    #[test]
    fn test_enter_on_gated_card_prompts_login() {
        let mut app = app();
        // Walk down to the warranty card (first requires_auth entry).
        let warranty_row = app
            .tui
            .catalog
            .visible(UserRole::Guest)
            .iter()
            .position(|l| l.id == "warranty")
            .unwrap();
        for _ in 0..warranty_row {
            press(&mut app, KeyCode::Down);
        }

        let effects = press(&mut app, KeyCode::Enter);

        assert!(effects.is_empty());
        assert!(app.tui.session.login_visible());
        assert!(matches!(app.overlay, Some(Overlay::Login(_))));
    }

    #[test]
    fn test_enter_on_open_card_emits_browser_effect() {
        let mut app = app();
        let effects = press(&mut app, KeyCode::Enter);
        assert!(matches!(
            effects.as_slice(),
            [UiEffect::OpenBrowser { url }] if url.starts_with("https://")
        ));
    }

    #[test]
    fn test_member_overlays_require_sign_in() {
        let mut app = app();
        press(&mut app, KeyCode::Char('a'));
        assert!(app.overlay.is_none());
        assert!(app.tui.notice.is_some());

        app.tui.session.login(partner());
        press(&mut app, KeyCode::Char('a'));
        assert!(matches!(app.overlay, Some(Overlay::Accounts(_))));
    }

    #[test]
    fn test_admin_section_selection_survives_logout() {
        let mut app = app();
        let admin = User::new("admin", "Administrator", "admin@nordvik.no", UserRole::Admin);
        app.tui.session.login(admin);

        let admin_rows = app.tui.catalog.visible(UserRole::Admin).len();
        for _ in 0..admin_rows {
            press(&mut app, KeyCode::Down);
        }

        press(&mut app, KeyCode::Char('o'));

        // Selection clamped to the guest-visible list.
        assert!(
            app.tui
                .catalog
                .selected_link(app.tui.session.role())
                .is_some()
        );
    }
}
