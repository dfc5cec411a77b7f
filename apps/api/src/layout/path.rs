//! Path Layout Engine — turns the ordered entry sequence into waypoints and an SVG road.
//!
//! Every coordinate is a pure function of the entry index. Entry content is
//! never read; only the key sequence matters, so identical sequences always
//! produce bit-identical geometry.

use serde::Serialize;

use crate::layout::labels::{label_for, Label};

// ────────────────────────────────────────────────────────────────────────────
// Geometry constants (view-box units)
// ────────────────────────────────────────────────────────────────────────────

pub const VIEWBOX_WIDTH: f64 = 500.0;
pub const CENTER_X: f64 = VIEWBOX_WIDTH / 2.0;
/// Vertical distance between consecutive waypoints.
pub const NODE_SPACING: f64 = 160.0;
/// Horizontal amplitude of the wave.
pub const SWING: f64 = 70.0;
/// Phase step per index, in radians.
pub const WAVE_FREQUENCY: f64 = 0.9;
pub const PADDING_TOP: f64 = 80.0;
pub const PADDING_BOTTOM: f64 = 120.0;
pub const MIN_HEIGHT: f64 = 600.0;
/// Radius of the invisible click target around each marker.
pub const MARKER_HIT_RADIUS: f64 = 40.0;

/// Control points sit half a spacing away from their endpoint vertically...
const CONTROL_Y_FRACTION: f64 = 0.5;
/// ...and pulled 10% of the horizontal delta toward the other endpoint.
const CONTROL_X_FRACTION: f64 = 0.1;

// ────────────────────────────────────────────────────────────────────────────
// Output types
// ────────────────────────────────────────────────────────────────────────────

/// A computed 2-D position for one entry along the path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Waypoint {
    pub index: usize,
    pub key: String,
    pub x: f64,
    pub y: f64,
    pub label: Label,
}

/// Full geometry of the rendered timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathLayout {
    pub width: f64,
    pub height: f64,
    pub waypoints: Vec<Waypoint>,
    /// SVG path data (`M ... C ...`). Empty when there are no entries.
    pub path: String,
}

impl Default for PathLayout {
    fn default() -> Self {
        compute_layout::<&str>(&[])
    }
}

impl PathLayout {
    /// Returns the key of the marker containing `(x, y)`, if any.
    ///
    /// Markers never overlap: spacing is larger than two hit radii.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<&str> {
        self.waypoints
            .iter()
            .find(|w| (w.x - x).hypot(w.y - y) <= MARKER_HIT_RADIUS)
            .map(|w| w.key.as_str())
    }

    /// Key sequence this layout was computed from.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.waypoints.iter().map(|w| w.key.as_str())
    }

    /// True when `keys` has the same length and order as this layout.
    pub fn matches<S: AsRef<str>>(&self, keys: &[S]) -> bool {
        self.waypoints.len() == keys.len()
            && self.keys().zip(keys).all(|(a, b)| a == b.as_ref())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Computation
// ────────────────────────────────────────────────────────────────────────────

/// Position of the waypoint at `index`.
pub fn position(index: usize) -> (f64, f64) {
    let i = index as f64;
    let y = PADDING_TOP + i * NODE_SPACING;
    let x = CENTER_X + (i * WAVE_FREQUENCY).sin() * SWING;
    (x, y)
}

/// Canvas height needed to fit `count` waypoints plus padding.
pub fn canvas_height(count: usize) -> f64 {
    MIN_HEIGHT.max(count as f64 * NODE_SPACING + PADDING_TOP + PADDING_BOTTOM)
}

/// Computes waypoints, labels and the connecting path for an ordered key sequence.
pub fn compute_layout<S: AsRef<str>>(keys: &[S]) -> PathLayout {
    let waypoints: Vec<Waypoint> = keys
        .iter()
        .enumerate()
        .map(|(index, key)| {
            let (x, y) = position(index);
            Waypoint {
                index,
                key: key.as_ref().to_string(),
                x,
                y,
                label: label_for(index, x, y),
            }
        })
        .collect();

    PathLayout {
        width: VIEWBOX_WIDTH,
        height: canvas_height(keys.len()),
        path: build_path(&waypoints),
        waypoints,
    }
}

/// Builds the SVG path: a move to the first waypoint followed by one cubic
/// segment per consecutive pair.
fn build_path(waypoints: &[Waypoint]) -> String {
    let Some(first) = waypoints.first() else {
        return String::new();
    };

    let mut d = format!("M {} {}", first.x, first.y);
    for pair in waypoints.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        let dx = b.x - a.x;
        let cp1x = a.x + dx * CONTROL_X_FRACTION;
        let cp1y = a.y + NODE_SPACING * CONTROL_Y_FRACTION;
        let cp2x = b.x - dx * CONTROL_X_FRACTION;
        let cp2y = b.y - NODE_SPACING * CONTROL_Y_FRACTION;
        d.push_str(&format!(
            " C {cp1x} {cp1y}, {cp2x} {cp2y}, {} {}",
            b.x, b.y
        ));
    }
    d
}
