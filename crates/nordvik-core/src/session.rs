//! Session/view state holder.
//!
//! The portal's entire mutable state is this one owned value: the current
//! user (if any) and whether the sign-in view is showing. Two flags, four
//! reachable UI states. Created empty at startup, never persisted, discarded
//! on exit.
//!
//! This layer performs no validation; it trusts whatever `User` value the
//! authenticator hands it, and none of its operations can fail.

use crate::user::{User, UserRole};

/// The single owned session object.
///
/// All mutation goes through the methods below so ownership and state
/// transitions stay traceable (and testable without any rendering).
#[derive(Debug, Default)]
pub struct Session {
    user: Option<User>,
    login_visible: bool,
}

impl Session {
    /// Creates an empty, signed-out session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current user and hides the sign-in view.
    pub fn login(&mut self, user: User) {
        self.user = Some(user);
        self.login_visible = false;
    }

    /// Clears the user and hides the sign-in view. Idempotent.
    pub fn logout(&mut self) {
        self.user = None;
        self.login_visible = false;
    }

    /// Flips the sign-in view flag.
    pub fn toggle_login_view(&mut self) {
        self.login_visible = !self.login_visible;
    }

    pub fn show_login_view(&mut self) {
        self.login_visible = true;
    }

    pub fn hide_login_view(&mut self) {
        self.login_visible = false;
    }

    pub fn login_visible(&self) -> bool {
        self.login_visible
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn user_mut(&mut self) -> Option<&mut User> {
        self.user.as_mut()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.role() == UserRole::Admin
    }

    /// Effective role for gating decisions; signed-out viewers are guests.
    pub fn role(&self) -> UserRole {
        self.user.as_ref().map_or(UserRole::Guest, |u| u.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn partner() -> User {
        User::new("u-1", "Partner", "partner@example.com", UserRole::User)
    }

    #[test]
    fn test_starts_empty_and_hidden() {
        let session = Session::new();
        assert!(!session.is_authenticated());
        assert!(!session.login_visible());
        assert_eq!(session.role(), UserRole::Guest);
    }

    #[test]
    fn test_login_replaces_user_and_hides_login_view() {
        let mut session = Session::new();
        session.show_login_view();

        session.login(partner());

        assert!(session.is_authenticated());
        assert!(!session.login_visible());

        // A second login replaces the user outright.
        session.login(User::new("u-2", "Other", "other@example.com", UserRole::Admin));
        assert_eq!(session.user().unwrap().id, "u-2");
        assert!(session.is_admin());
    }

    #[test]
    fn test_logout_is_idempotent() {
        let mut session = Session::new();
        session.login(partner());
        session.show_login_view();

        session.logout();
        let after_first = (session.user().cloned(), session.login_visible());
        session.logout();

        assert_eq!(after_first, (None, false));
        assert!(!session.is_authenticated());
        assert!(!session.login_visible());
    }

    #[test]
    fn test_toggle_login_view() {
        let mut session = Session::new();
        session.toggle_login_view();
        assert!(session.login_visible());
        session.toggle_login_view();
        assert!(!session.login_visible());
    }
}
