// Timeline geometry: waypoints, the connecting road and label placement.
// Pure functions of the entry order; recomputed by the session whenever the
// key sequence changes.

pub mod labels;
pub mod path;

pub use path::{compute_layout, PathLayout};
