//! Mock authentication service.
//!
//! Simulates a sign-in/registration round trip against constants held in
//! memory. There is no backend and no real credential check: beyond the
//! fixed admin pair and the single in-session registration slot, any
//! sufficiently long credential pair is accepted. That heuristic is
//! placeholder logic, kept only so the portal can be driven end to end; it
//! is not a security model. The `Authenticator` trait is the seam where a
//! real identity provider would replace all of this without touching
//! session or view code.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::seed;
use crate::user::{User, UserRole};

/// Fixed literal admin pair. Always yields an ADMIN user.
pub const ADMIN_EMAIL: &str = "admin@nordvik.no";
pub const ADMIN_PASSWORD: &str = "admin";

/// The identifier must exceed this many characters for the mock heuristic.
const MIN_EMAIL_CHARS: usize = 5;
/// The secret must exceed this many characters for the mock heuristic.
const MIN_PASSWORD_CHARS: usize = 3;

/// A credential pair as typed into the sign-in form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    fn is_incomplete(&self) -> bool {
        self.email.trim().is_empty() || self.password.trim().is_empty()
    }
}

/// The only error class the mock can produce.
///
/// Messages are the user-facing form strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Rejected before the artificial delay.
    #[error("Enter your sign-in details.")]
    MissingCredentials,
    /// Rejected after the artificial delay.
    #[error("Invalid email or password.")]
    InvalidCredentials,
}

/// Capability interface for authentication.
///
/// A real implementation (password hashing, remote identity provider) can be
/// substituted here without touching the rest of the portal.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate(&self, credentials: &Credentials) -> Result<User, AuthError>;
    async fn register(&self, credentials: &Credentials) -> Result<(), AuthError>;
}

/// The in-memory mock.
///
/// Cloning shares the registration slot: every clone sees the most recent
/// registration, and only that one. There is no uniqueness check; a new
/// registration overwrites the slot.
#[derive(Debug, Clone)]
pub struct MockAuthenticator {
    delay: Duration,
    registered: Arc<Mutex<Option<Credentials>>>,
}

impl MockAuthenticator {
    /// Creates a mock with the given artificial round-trip delay.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            registered: Arc::new(Mutex::new(None)),
        }
    }

    fn passes_length_heuristic(credentials: &Credentials) -> bool {
        credentials.email.chars().count() > MIN_EMAIL_CHARS
            && credentials.password.chars().count() > MIN_PASSWORD_CHARS
    }

    fn is_admin_pair(credentials: &Credentials) -> bool {
        credentials.email == ADMIN_EMAIL && credentials.password == ADMIN_PASSWORD
    }
}

#[async_trait]
impl Authenticator for MockAuthenticator {
    async fn authenticate(&self, credentials: &Credentials) -> Result<User, AuthError> {
        if credentials.is_incomplete() {
            return Err(AuthError::MissingCredentials);
        }

        // The simulated round trip. Not cancellable: overlapping attempts
        // each run to completion and the later result wins.
        tokio::time::sleep(self.delay).await;

        if Self::is_admin_pair(credentials) {
            tracing::info!(email = %credentials.email, "mock sign-in as administrator");
            return Ok(admin_user());
        }

        let registered = self
            .registered
            .lock()
            .await
            .as_ref()
            .is_some_and(|slot| slot == credentials);

        if registered || Self::passes_length_heuristic(credentials) {
            tracing::info!(email = %credentials.email, registered, "mock sign-in accepted");
            Ok(partner_user(&credentials.email))
        } else {
            tracing::debug!(email = %credentials.email, "mock sign-in rejected");
            Err(AuthError::InvalidCredentials)
        }
    }

    async fn register(&self, credentials: &Credentials) -> Result<(), AuthError> {
        if credentials.is_incomplete() {
            return Err(AuthError::MissingCredentials);
        }

        tokio::time::sleep(self.delay).await;

        // Single slot: the most recent registration overwrites any earlier one.
        *self.registered.lock().await = Some(credentials.clone());
        tracing::info!(email = %credentials.email, "mock registration recorded");
        Ok(())
    }
}

fn admin_user() -> User {
    User::new("admin", "Administrator", ADMIN_EMAIL, UserRole::Admin)
}

/// Fabricates a partner user from the identifier, with the demo dataset
/// attached.
fn partner_user(email: &str) -> User {
    let mut user = User::new(
        Uuid::new_v4().to_string(),
        display_name(email),
        email,
        UserRole::User,
    );
    seed::attach_partner_data(&mut user);
    user
}

/// Derives a display name from the identifier's local part, first letter
/// uppercased.
fn display_name(email: &str) -> String {
    let local = email.split('@').next().unwrap_or(email);
    let mut chars = local.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => local.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock() -> MockAuthenticator {
        MockAuthenticator::new(Duration::from_millis(1_000))
    }

    #[tokio::test(start_paused = true)]
    async fn test_admin_pair_yields_admin_role() {
        let auth = mock();
        let user = auth
            .authenticate(&Credentials::new(ADMIN_EMAIL, ADMIN_PASSWORD))
            .await
            .unwrap();

        assert_eq!(user.role, UserRole::Admin);
        assert_eq!(user.username, "Administrator");
        assert!(user.linked_accounts.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_long_enough_pair_yields_user_with_derived_name() {
        let auth = mock();
        let user = auth
            .authenticate(&Credentials::new("partner@nordvik-doors.com", "pass"))
            .await
            .unwrap();

        assert_eq!(user.role, UserRole::User);
        assert_eq!(user.username, "Partner");
        // Partner users come with the seeded demo data.
        assert!(!user.linked_accounts.is_empty());
        assert!(!user.warranty_doors.is_empty());
        assert!(user.installer_profile.is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_heuristic_boundaries_are_exclusive() {
        let auth = mock();

        // Exactly 5-char identifier / exactly 3-char secret: both too short.
        let err = auth
            .authenticate(&Credentials::new("ab@de", "abc"))
            .await
            .unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);

        // One character over on both: accepted.
        assert!(
            auth.authenticate(&Credentials::new("ab@def", "abcd"))
                .await
                .is_ok()
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_short_pair_is_rejected_with_no_user() {
        let auth = mock();
        let result = auth.authenticate(&Credentials::new("a@b", "x")).await;
        assert_eq!(result, Err(AuthError::InvalidCredentials));
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_fields_rejected_before_delay() {
        let auth = mock();
        let before = tokio::time::Instant::now();

        let result = auth.authenticate(&Credentials::new("", "secret")).await;

        assert_eq!(result, Err(AuthError::MissingCredentials));
        // No virtual time consumed: the delay never ran.
        assert_eq!(tokio::time::Instant::now(), before);
    }

    #[tokio::test(start_paused = true)]
    async fn test_round_trip_consumes_artificial_delay() {
        let auth = mock();
        let before = tokio::time::Instant::now();

        auth.authenticate(&Credentials::new(ADMIN_EMAIL, ADMIN_PASSWORD))
            .await
            .unwrap();

        assert_eq!(
            tokio::time::Instant::now() - before,
            Duration::from_millis(1_000)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_registration_overrides_length_heuristic() {
        let auth = mock();
        // Boundary-length pair that fails the heuristic on its own.
        let creds = Credentials::new("ab@de", "abc");
        assert!(auth.authenticate(&creds).await.is_err());

        auth.register(&creds).await.unwrap();

        let user = auth.authenticate(&creds).await.unwrap();
        assert_eq!(user.role, UserRole::User);
    }

    #[tokio::test(start_paused = true)]
    async fn test_registration_named_pair_succeeds() {
        let auth = mock();
        let creds = Credentials::new("partner1", "pass1234");

        auth.register(&creds).await.unwrap();

        assert!(auth.authenticate(&creds).await.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_only_latest_registration_is_remembered() {
        let auth = mock();
        let first = Credentials::new("ab@de", "abc");
        let second = Credentials::new("cd@ef", "xyz");

        auth.register(&first).await.unwrap();
        auth.register(&second).await.unwrap();

        assert!(auth.authenticate(&first).await.is_err());
        assert!(auth.authenticate(&second).await.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_register_rejects_empty_fields() {
        let auth = mock();
        let result = auth.register(&Credentials::new("partner1", "  ")).await;
        assert_eq!(result, Err(AuthError::MissingCredentials));
    }

    #[test]
    fn test_display_name_derivation() {
        assert_eq!(display_name("anna.berg@example.com"), "Anna.berg");
        assert_eq!(display_name("partner1"), "Partner1");
        assert_eq!(display_name("@example.com"), "");
    }
}
