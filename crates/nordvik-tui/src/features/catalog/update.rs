//! Catalog activation: what Enter does for the selected card.

use nordvik_core::catalog::{LinkAction, ServiceLink};
use nordvik_core::user::UserRole;

use crate::effects::UiEffect;
use crate::mutations::{SessionMutation, StateMutation};

/// Resolves activation of a card into mutations and effects.
///
/// Gating flags only influence click behavior: redirect to the sign-in view
/// or navigate.
pub fn activate(link: &ServiceLink, role: UserRole) -> (Vec<StateMutation>, Vec<UiEffect>) {
    match LinkAction::resolve(link, role) {
        LinkAction::Open(url) => (
            vec![StateMutation::SetNotice(Some(format!(
                "Opening {}…",
                link.title
            )))],
            vec![UiEffect::OpenBrowser { url }],
        ),
        LinkAction::PromptLogin => (
            vec![
                StateMutation::Session(SessionMutation::ShowLoginView),
                StateMutation::SetNotice(Some(format!("Sign in to open {}.", link.title))),
            ],
            vec![],
        ),
        LinkAction::Locked => (
            vec![StateMutation::SetNotice(Some(format!(
                "{} is available to administrators only.",
                link.title
            )))],
            vec![],
        ),
        LinkAction::Unavailable => (
            vec![StateMutation::SetNotice(Some(format!(
                "{} is coming soon.",
                link.title
            )))],
            vec![],
        ),
    }
}

#[cfg(test)]
mod tests {
    use nordvik_core::catalog::builtin_links;

    use super::*;

    fn link(id: &str) -> ServiceLink {
        builtin_links()
            .into_iter()
            .find(|l| l.id == id)
            .expect("builtin link")
    }

    #[test]
    fn test_activate_open_emits_browser_effect() {
        let (mutations, effects) = activate(&link("studio"), UserRole::Guest);
        assert_eq!(effects.len(), 1);
        assert!(matches!(&effects[0], UiEffect::OpenBrowser { url } if url.contains("studio")));
        assert!(matches!(
            mutations.as_slice(),
            [StateMutation::SetNotice(Some(_))]
        ));
    }

    #[test]
    fn test_activate_gated_link_shows_login_view() {
        let (mutations, effects) = activate(&link("warranty"), UserRole::Guest);
        assert!(effects.is_empty());
        assert!(matches!(
            mutations.first(),
            Some(StateMutation::Session(SessionMutation::ShowLoginView))
        ));
    }

    #[test]
    fn test_activate_placeholder_sets_notice_only() {
        let (mutations, effects) = activate(&link("admin-panel"), UserRole::Admin);
        assert!(effects.is_empty());
        assert!(matches!(
            mutations.as_slice(),
            [StateMutation::SetNotice(Some(notice))] if notice.contains("coming soon")
        ));
    }
}
