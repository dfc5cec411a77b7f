use serde::Serialize;

/// Width of the label box beside each marker.
pub const LABEL_WIDTH: f64 = 160.0;
/// Horizontal gap between marker and label box.
pub const LABEL_OFFSET_X: f64 = 55.0;
pub const LABEL_OFFSET_Y: f64 = -35.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelSide {
    Left,
    Right,
}

/// Top-left corner of an entry's label box, relative to the view box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Label {
    pub side: LabelSide,
    pub x: f64,
    pub y: f64,
    pub width: f64,
}

/// Even indices label to the right, odd to the left, so neighbours never collide.
pub fn label_for(index: usize, x: f64, y: f64) -> Label {
    let side = if index % 2 == 0 {
        LabelSide::Right
    } else {
        LabelSide::Left
    };
    let label_x = match side {
        LabelSide::Right => x + LABEL_OFFSET_X,
        LabelSide::Left => x - LABEL_OFFSET_X - LABEL_WIDTH,
    };
    Label {
        side,
        x: label_x,
        y: y + LABEL_OFFSET_Y,
        width: LABEL_WIDTH,
    }
}
