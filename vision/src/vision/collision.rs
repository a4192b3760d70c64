/// Axis-aligned box in resized-frame pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl BoundingBox {
    /// Negative sizes are clamped to zero.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width: width.max(0),
            height: height.max(0),
        }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Strict intersection test. Boxes that only share an edge do not overlap.
    pub fn overlaps(&self, other: &BoundingBox) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// True when `other` lies entirely above, below, left or right of `self`
    /// with a gap of at least one pixel between the edges.
    pub fn is_separated_from(&self, other: &BoundingBox) -> bool {
        other.bottom() < self.y
            || other.y > self.bottom()
            || other.right() < self.x
            || other.x > self.right()
    }
}

/// Both boxes are needed for a collision; a missing detection is never one.
pub fn detect_collision(blue: Option<&BoundingBox>, orange: Option<&BoundingBox>) -> bool {
    match (blue, orange) {
        (Some(blue), Some(orange)) => blue.overlaps(orange),
        _ => false,
    }
}
