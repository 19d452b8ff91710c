//! Catalog selection state.

use nordvik_core::catalog::{ServiceCategory, ServiceLink};
use nordvik_core::user::UserRole;

/// Service catalog state: the immutable link list plus a cursor over the
/// links visible to the current role.
///
/// The selection index always refers to the flattened, section-ordered list
/// returned by [`CatalogState::visible`]; it is clamped whenever the role
/// changes (signing out shrinks the list for admins).
pub struct CatalogState {
    links: Vec<ServiceLink>,
    pub selected: usize,
}

impl CatalogState {
    pub fn new(links: Vec<ServiceLink>) -> Self {
        Self { links, selected: 0 }
    }

    /// Links visible to `role`, flattened in section display order.
    pub fn visible(&self, role: UserRole) -> Vec<&ServiceLink> {
        ServiceCategory::all()
            .iter()
            .flat_map(|category| {
                self.links
                    .iter()
                    .filter(move |link| link.category == *category && link.visible_to(role))
            })
            .collect()
    }

    pub fn selected_link(&self, role: UserRole) -> Option<&ServiceLink> {
        self.visible(role).get(self.selected).copied()
    }

    pub fn select_next(&mut self, role: UserRole) {
        let count = self.visible(role).len();
        if count > 0 && self.selected + 1 < count {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Clamps the selection after the visible set changed (role switch).
    pub fn clamp_selection(&mut self, role: UserRole) {
        let count = self.visible(role).len();
        self.selected = self.selected.min(count.saturating_sub(1));
    }
}
