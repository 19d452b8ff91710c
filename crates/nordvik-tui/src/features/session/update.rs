//! Session feature reducer.
//!
//! All session transitions funnel through [`apply`]; the async sign-in and
//! registration results are translated here into mutations plus an
//! instruction for the login overlay.

use nordvik_core::auth::AuthError;
use nordvik_core::session::Session;
use nordvik_core::user::User;

use crate::mutations::{SessionMutation, StateMutation};

/// What the login overlay should do after an auth result was processed.
#[derive(Debug, PartialEq, Eq)]
pub enum LoginOverlayAction {
    /// Sign-in succeeded: close the overlay.
    Close,
    /// Show an error inside the form and stop the busy spinner.
    ShowError(String),
    /// Registration succeeded: switch the form to sign-in mode.
    Registered,
}

/// Applies a session mutation to the owned session store.
pub fn apply(session: &mut Session, mutation: SessionMutation) {
    match mutation {
        SessionMutation::Login(user) => session.login(user),
        SessionMutation::Logout => session.logout(),
        SessionMutation::ShowLoginView => session.show_login_view(),
        SessionMutation::HideLoginView => session.hide_login_view(),
        SessionMutation::AddLinkedAccount { login, secret } => {
            if let Some(user) = session.user_mut() {
                user.add_linked_account(&login, &secret);
            }
        }
        SessionMutation::RemoveLinkedAccount { id } => {
            if let Some(user) = session.user_mut() {
                user.remove_linked_account(&id);
            }
        }
        SessionMutation::AddWarrantyDoor { model, serial } => {
            if let Some(user) = session.user_mut() {
                user.add_warranty_door(&model, &serial);
            }
        }
    }
}

/// Handles the result of an async sign-in attempt.
pub fn handle_login_result(
    result: Result<User, AuthError>,
) -> (Vec<StateMutation>, LoginOverlayAction) {
    match result {
        Ok(user) => {
            let notice = format!("Signed in as {} ({}).", user.username, user.role.label());
            (
                vec![
                    StateMutation::Session(SessionMutation::Login(user)),
                    StateMutation::SetNotice(Some(notice)),
                ],
                LoginOverlayAction::Close,
            )
        }
        Err(err) => (vec![], LoginOverlayAction::ShowError(err.to_string())),
    }
}

/// Handles the result of an async registration attempt.
pub fn handle_register_result(
    result: Result<(), AuthError>,
) -> (Vec<StateMutation>, LoginOverlayAction) {
    match result {
        Ok(()) => (vec![], LoginOverlayAction::Registered),
        Err(err) => (vec![], LoginOverlayAction::ShowError(err.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use nordvik_core::user::UserRole;

    use super::*;

    fn partner() -> User {
        User::new("u-1", "Partner", "partner@example.com", UserRole::User)
    }

    #[test]
    fn test_login_result_produces_login_mutation_and_close() {
        let (mutations, action) = handle_login_result(Ok(partner()));

        assert_eq!(action, LoginOverlayAction::Close);
        assert!(matches!(
            mutations.first(),
            Some(StateMutation::Session(SessionMutation::Login(_)))
        ));
    }

    #[test]
    fn test_login_failure_keeps_session_untouched() {
        let (mutations, action) = handle_login_result(Err(AuthError::InvalidCredentials));

        assert!(mutations.is_empty());
        assert_eq!(
            action,
            LoginOverlayAction::ShowError("Invalid email or password.".to_string())
        );
    }

    #[test]
    fn test_register_result_switches_form_mode() {
        let (mutations, action) = handle_register_result(Ok(()));
        assert!(mutations.is_empty());
        assert_eq!(action, LoginOverlayAction::Registered);
    }

    #[test]
    fn test_apply_account_mutations_target_current_user() {
        let mut session = Session::new();
        apply(&mut session, SessionMutation::Login(partner()));

        apply(
            &mut session,
            SessionMutation::AddLinkedAccount {
                login: "orders-01".to_string(),
                secret: "secret".to_string(),
            },
        );
        assert_eq!(session.user().unwrap().linked_accounts.len(), 1);

        let id = session.user().unwrap().linked_accounts[0].id.clone();
        apply(&mut session, SessionMutation::RemoveLinkedAccount { id });
        assert!(session.user().unwrap().linked_accounts.is_empty());
    }

    #[test]
    fn test_apply_mutators_without_user_are_noops() {
        let mut session = Session::new();
        apply(
            &mut session,
            SessionMutation::AddWarrantyDoor {
                model: "Thermo 75".to_string(),
                serial: "ND-1".to_string(),
            },
        );
        assert!(!session.is_authenticated());
    }
}
