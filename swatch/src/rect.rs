/// A rectangle in cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub const fn right(&self) -> u16 {
        self.x + self.width
    }

    pub const fn bottom(&self) -> u16 {
        self.y + self.height
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Map a point onto `[0, 1] x [0, 1]` relative to this rectangle.
    ///
    /// The first cell maps to 0 and the last cell maps to 1. Points outside
    /// the rectangle are clamped onto its edge.
    pub fn normalize(&self, x: u16, y: u16) -> (f64, f64) {
        (
            normalize_axis(x, self.x, self.width),
            normalize_axis(y, self.y, self.height),
        )
    }

    /// Inverse of [`Rect::normalize`]: the cell closest to a normalized point.
    pub fn denormalize(&self, nx: f64, ny: f64) -> (u16, u16) {
        (
            denormalize_axis(nx, self.x, self.width),
            denormalize_axis(ny, self.y, self.height),
        )
    }
}

fn normalize_axis(pos: u16, start: u16, len: u16) -> f64 {
    let span = len.saturating_sub(1);
    if span == 0 {
        return 0.0;
    }
    let offset = f64::from(pos) - f64::from(start);
    (offset / f64::from(span)).clamp(0.0, 1.0)
}

fn denormalize_axis(n: f64, start: u16, len: u16) -> u16 {
    let span = f64::from(len.saturating_sub(1));
    start + (n.clamp(0.0, 1.0) * span).round() as u16
}
