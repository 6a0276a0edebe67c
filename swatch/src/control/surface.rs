use super::{Control, DragState};
use crate::event::{Key, Modifiers};
use crate::rect::Rect;

const SMALL_STEP: f64 = 1.0;
const LARGE_STEP: f64 = 10.0;

/// A point on the saturation/value surface, both in percent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SurfacePoint {
    pub s: f64,
    pub v: f64,
}

impl SurfacePoint {
    pub fn new(s: f64, v: f64) -> Self {
        Self {
            s: s.clamp(0.0, 100.0),
            v: v.clamp(0.0, 100.0),
        }
    }
}

/// The 2-D picker surface: saturation runs left to right, value runs bottom
/// to top (the top edge is full brightness).
#[derive(Debug, Clone, Default)]
pub struct SaturationValueSurface {
    bounds: Option<Rect>,
    state: DragState,
}

impl SaturationValueSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cell that displays `point`, for drawing the thumb.
    pub fn thumb_position(&self, point: SurfacePoint) -> Option<(u16, u16)> {
        let bounds = self.bounds?;
        Some(bounds.denormalize(point.s / 100.0, 1.0 - point.v / 100.0))
    }
}

impl Control for SaturationValueSurface {
    type Value = SurfacePoint;

    fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    fn set_bounds(&mut self, rect: Rect) {
        self.bounds = Some(rect);
    }

    fn drag_state(&self) -> DragState {
        self.state
    }

    fn drag_state_mut(&mut self) -> &mut DragState {
        &mut self.state
    }

    fn value_at(&self, bounds: Rect, x: u16, y: u16) -> SurfacePoint {
        let (nx, ny) = bounds.normalize(x, y);
        SurfacePoint::new(nx * 100.0, (1.0 - ny) * 100.0)
    }

    fn step(&self, key: Key, modifiers: Modifiers, current: SurfacePoint) -> Option<SurfacePoint> {
        let step = if modifiers.shift { LARGE_STEP } else { SMALL_STEP };
        let SurfacePoint { s, v } = current;

        let next = match key {
            Key::Left => SurfacePoint::new(s - step, v),
            Key::Right => SurfacePoint::new(s + step, v),
            Key::Up => SurfacePoint::new(s, v + step),
            Key::Down => SurfacePoint::new(s, v - step),
            Key::PageUp => SurfacePoint::new(s, v + LARGE_STEP),
            Key::PageDown => SurfacePoint::new(s, v - LARGE_STEP),
            Key::Home => SurfacePoint::new(0.0, 100.0),
            Key::End => SurfacePoint::new(100.0, 0.0),
            _ => return None,
        };
        Some(next)
    }
}
