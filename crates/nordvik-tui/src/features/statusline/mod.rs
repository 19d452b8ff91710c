//! Status line feature slice: the single-row bar at the bottom.

mod render;

pub use render::render_status_line;
