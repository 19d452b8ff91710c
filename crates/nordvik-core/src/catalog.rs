//! Static catalog of outbound service links.
//!
//! Immutable configuration data, not user data: each entry carries a
//! category tag and optional gating flags that only influence what happens
//! on activation (navigate, prompt for sign-in, or stay locked).

use serde::{Deserialize, Serialize};

use crate::user::UserRole;

/// Section a service link is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceCategory {
    Main,
    Tools,
    Support,
    Admin,
}

impl ServiceCategory {
    /// Section heading shown in the portal.
    pub fn heading(self) -> &'static str {
        match self {
            ServiceCategory::Main => "Services",
            ServiceCategory::Tools => "Tools & Systems",
            ServiceCategory::Support => "Support",
            ServiceCategory::Admin => "Portal Administration",
        }
    }

    /// The category tag as written in config and CLI arguments.
    pub fn name(self) -> &'static str {
        match self {
            ServiceCategory::Main => "main",
            ServiceCategory::Tools => "tools",
            ServiceCategory::Support => "support",
            ServiceCategory::Admin => "admin",
        }
    }

    /// Parses a category tag. Case-insensitive.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "main" => Some(ServiceCategory::Main),
            "tools" => Some(ServiceCategory::Tools),
            "support" => Some(ServiceCategory::Support),
            "admin" => Some(ServiceCategory::Admin),
            _ => None,
        }
    }

    /// Display order of the sections.
    pub fn all() -> &'static [ServiceCategory] {
        &[
            ServiceCategory::Main,
            ServiceCategory::Tools,
            ServiceCategory::Support,
            ServiceCategory::Admin,
        ]
    }
}

/// One entry in the service catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceLink {
    pub id: String,
    pub title: String,
    pub description: String,
    pub url: String,
    pub category: ServiceCategory,
    #[serde(default)]
    pub requires_auth: bool,
    #[serde(default)]
    pub requires_admin: bool,
}

impl ServiceLink {
    /// Whether the entry is listed at all for the given role.
    ///
    /// Admin-section links are hidden (not just locked) from everyone else.
    pub fn visible_to(&self, role: UserRole) -> bool {
        self.category != ServiceCategory::Admin || role == UserRole::Admin
    }

    /// Placeholder entries point nowhere yet.
    pub fn is_placeholder(&self) -> bool {
        self.url.is_empty() || self.url == "#"
    }
}

/// What activating a link should do for the given role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkAction {
    /// Navigate to the target URL.
    Open(String),
    /// Sign-in required first; show the sign-in view.
    PromptLogin,
    /// Admin-gated and the viewer is not an admin.
    Locked,
    /// Placeholder URL; nothing to open.
    Unavailable,
}

impl LinkAction {
    /// Resolves the click behavior for a link and viewer role.
    pub fn resolve(link: &ServiceLink, role: UserRole) -> Self {
        if link.requires_admin && role != UserRole::Admin {
            return LinkAction::Locked;
        }
        if link.requires_auth && role == UserRole::Guest {
            return LinkAction::PromptLogin;
        }
        if link.is_placeholder() {
            return LinkAction::Unavailable;
        }
        LinkAction::Open(link.url.clone())
    }
}

/// The built-in catalog. Config may append entries but never removes these.
pub fn builtin_links() -> Vec<ServiceLink> {
    fn link(
        id: &str,
        title: &str,
        description: &str,
        url: &str,
        category: ServiceCategory,
    ) -> ServiceLink {
        ServiceLink {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            url: url.to_string(),
            category,
            requires_auth: false,
            requires_admin: false,
        }
    }

    vec![
        link(
            "nordvik-com",
            "Nordvik.com",
            "Company site of the Nordvik door factory.",
            "https://nordvik-doors.com/",
            ServiceCategory::Main,
        ),
        link(
            "studio",
            "Nordvik Studio",
            "Door configurator - design your dream entrance.",
            "https://studio.nordvik-doors.com/",
            ServiceCategory::Main,
        ),
        link(
            "showrooms",
            "Showrooms",
            "Find the nearest Nordvik sales showroom.",
            "https://where-to-buy.nordvik-doors.com/",
            ServiceCategory::Main,
        ),
        link(
            "dimensions",
            "Dimensions",
            "Installation dimension and opening calculator.",
            "https://calculator.nordvik-doors.com/",
            ServiceCategory::Tools,
        ),
        ServiceLink {
            requires_auth: true,
            ..link(
                "warranty",
                "Warranty",
                "Register a product or check warranty status.",
                "https://zone.nordvik-doors.com/sign-in",
                ServiceCategory::Support,
            )
        },
        ServiceLink {
            requires_auth: true,
            ..link(
                "installer-zone",
                "Installer Zone",
                "Portal dedicated to professional installers.",
                "https://zone.nordvik-doors.com/installer",
                ServiceCategory::Support,
            )
        },
        link(
            "academy",
            "Become an Installer",
            "Nordvik Academy - training and certification for professionals.",
            "https://academy.nordvik-doors.com/",
            ServiceCategory::Support,
        ),
        ServiceLink {
            requires_admin: true,
            ..link(
                "admin-panel",
                "Admin Panel",
                "Nordvik One system administration (administrators only).",
                "#",
                ServiceCategory::Admin,
            )
        },
    ]
}
