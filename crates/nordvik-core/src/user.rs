//! Portal user model.
//!
//! `User` values are fabricated by the authenticator and mutated in place by
//! the in-portal actions (linked accounts, warranty doors). List fields are
//! normalized to concrete `Vec`s at construction, so downstream code never
//! has to default a missing list.

use chrono::{Months, NaiveDate, Utc};
use uuid::Uuid;

/// Warranty protection window granted at registration (5 years).
pub const WARRANTY_MONTHS: u32 = 60;

/// Placeholder stored in place of a linked account's secret.
pub const PASSWORD_MASK: &str = "••••••••";

/// Role of the signed-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    User,
    Admin,
    Guest,
}

impl UserRole {
    /// Short display label for the role.
    pub fn label(self) -> &'static str {
        match self {
            UserRole::User => "Partner",
            UserRole::Admin => "Administrator",
            UserRole::Guest => "Guest",
        }
    }
}

/// Classification of a linked order-management account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    Distributor,
    Reseller,
}

impl AccountKind {
    pub fn label(self) -> &'static str {
        match self {
            AccountKind::Distributor => "Distributor",
            AccountKind::Reseller => "Reseller",
        }
    }
}

/// Display-only child of a distributor account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubAccount {
    pub id: String,
    pub name: String,
    pub login: String,
}

/// A secondary external credential attached to a user's profile.
///
/// Invariant: ids are unique within a user's account list (ids are
/// generated UUIDs, removal is by id).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkedAccount {
    pub id: String,
    pub login: String,
    /// The secret is never stored; only this placeholder is kept.
    pub password_mask: String,
    pub kind: AccountKind,
    pub sub_accounts: Vec<SubAccount>,
}

impl LinkedAccount {
    /// Creates a reseller account with a generated id and masked secret.
    pub fn new(login: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            login: login.into(),
            password_mask: PASSWORD_MASK.to_string(),
            kind: AccountKind::Reseller,
            sub_accounts: Vec::new(),
        }
    }
}

/// Warranty status, fixed when the door is registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoorStatus {
    Active,
    Expired,
}

impl DoorStatus {
    pub fn label(self) -> &'static str {
        match self {
            DoorStatus::Active => "active",
            DoorStatus::Expired => "expired",
        }
    }
}

/// A registered product instance with a computed protection window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarrantyDoor {
    pub model: String,
    pub serial: String,
    pub purchase_date: NaiveDate,
    pub warranty_until: NaiveDate,
    pub status: DoorStatus,
}

impl WarrantyDoor {
    /// Computes the warranty window and the status as of `today`.
    ///
    /// The status is derived from the date comparison once, here, and never
    /// re-evaluated afterwards.
    pub fn new(
        model: impl Into<String>,
        serial: impl Into<String>,
        purchase_date: NaiveDate,
        today: NaiveDate,
    ) -> Self {
        // Date overflow is unreachable for real purchase dates.
        let warranty_until = purchase_date
            .checked_add_months(Months::new(WARRANTY_MONTHS))
            .unwrap_or(purchase_date);
        let status = if warranty_until >= today {
            DoorStatus::Active
        } else {
            DoorStatus::Expired
        };
        Self {
            model: model.into(),
            serial: serial.into(),
            purchase_date,
            warranty_until,
            status,
        }
    }
}

/// Static record describing a certified third-party installer.
///
/// Display only; the portal never edits these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallerProfile {
    pub name: String,
    pub company: String,
    pub region: String,
    pub certified_since: NaiveDate,
    pub phone: String,
}

/// A signed-in portal user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: UserRole,
    pub linked_accounts: Vec<LinkedAccount>,
    pub warranty_doors: Vec<WarrantyDoor>,
    pub installer_profile: Option<InstallerProfile>,
}

impl User {
    /// Creates a user with empty (but present) list fields.
    pub fn new(
        id: impl Into<String>,
        username: impl Into<String>,
        email: impl Into<String>,
        role: UserRole,
    ) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            email: email.into(),
            role,
            linked_accounts: Vec::new(),
            warranty_doors: Vec::new(),
            installer_profile: None,
        }
    }

    /// Appends a linked account with a generated id and masked secret.
    ///
    /// Silent no-op when either field is blank.
    pub fn add_linked_account(&mut self, login: &str, secret: &str) {
        if login.trim().is_empty() || secret.trim().is_empty() {
            return;
        }
        self.linked_accounts.push(LinkedAccount::new(login.trim()));
    }

    /// Removes a linked account by id. Unknown ids are a no-op.
    pub fn remove_linked_account(&mut self, id: &str) {
        self.linked_accounts.retain(|account| account.id != id);
    }

    /// Registers a warranty door purchased today.
    ///
    /// Silent no-op when either field is blank.
    pub fn add_warranty_door(&mut self, model: &str, serial: &str) {
        if model.trim().is_empty() || serial.trim().is_empty() {
            return;
        }
        let today = Utc::now().date_naive();
        self.warranty_doors
            .push(WarrantyDoor::new(model.trim(), serial.trim(), today, today));
    }
}
