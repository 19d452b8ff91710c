//! Catalog feature slice: the card grid of service links.
//!
//! - `state.rs`: selection over the role-visible links
//! - `update.rs`: activation (what Enter does for the selected card)
//! - `render.rs`: section/card rendering

mod render;
mod state;
mod update;

pub use render::body_lines;
pub use state::CatalogState;
pub use update::activate;
