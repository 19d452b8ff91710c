//! Demo dataset attached to freshly signed-in partner accounts.
//!
//! The portal has no backing store; these constants stand in for the
//! order-management data a partner would see after a real sign-in. They are
//! seeded once at user construction and then mutated in memory like any
//! other list.

use chrono::NaiveDate;

use crate::user::{
    AccountKind, InstallerProfile, LinkedAccount, PASSWORD_MASK, SubAccount, User, WarrantyDoor,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    // All call sites pass valid literals.
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// One distributor account with two reseller sub-accounts.
pub fn linked_accounts() -> Vec<LinkedAccount> {
    vec![LinkedAccount {
        id: "seed-dist-01".to_string(),
        login: "orders@bergen-doors.no".to_string(),
        password_mask: PASSWORD_MASK.to_string(),
        kind: AccountKind::Distributor,
        sub_accounts: vec![
            SubAccount {
                id: "seed-sub-01".to_string(),
                name: "Bergen Doors West".to_string(),
                login: "west@bergen-doors.no".to_string(),
            },
            SubAccount {
                id: "seed-sub-02".to_string(),
                name: "Bergen Doors Nord".to_string(),
                login: "nord@bergen-doors.no".to_string(),
            },
        ],
    }]
}

/// One door registered well inside its protection window.
pub fn warranty_doors() -> Vec<WarrantyDoor> {
    let purchase = date(2023, 5, 12);
    vec![WarrantyDoor::new(
        "Thermo 75 Premium",
        "ND-2023-04178",
        purchase,
        purchase,
    )]
}

pub fn installer_profile() -> InstallerProfile {
    InstallerProfile {
        name: "Jonas Lie".to_string(),
        company: "Lie Montasje AS".to_string(),
        region: "Vestland".to_string(),
        certified_since: date(2019, 9, 2),
        phone: "+47 913 44 020".to_string(),
    }
}

/// Attaches the full demo dataset to a partner user.
pub fn attach_partner_data(user: &mut User) {
    user.linked_accounts = linked_accounts();
    user.warranty_doors = warranty_doors();
    user.installer_profile = Some(installer_profile());
}
