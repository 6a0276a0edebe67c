use super::{Control, DragState};
use crate::event::{Key, Modifiers};
use crate::rect::Rect;

/// A horizontal slider over `[0, max]`.
///
/// Arrow keys move by 1% of `max`, Shift+arrow and PageUp/PageDown by 10%,
/// Home/End jump to the ends.
#[derive(Debug, Clone)]
pub struct Slider {
    max: f64,
    bounds: Option<Rect>,
    state: DragState,
}

impl Slider {
    pub fn new(max: f64) -> Self {
        Self {
            max,
            bounds: None,
            state: DragState::default(),
        }
    }

    /// Hue slider, `0..=360` degrees.
    pub fn hue() -> Self {
        Self::new(360.0)
    }

    /// Alpha slider, `0..=1`.
    pub fn alpha() -> Self {
        Self::new(1.0)
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    fn clamp(&self, value: f64) -> f64 {
        value.clamp(0.0, self.max)
    }

    /// Column that displays `value`, for drawing the thumb.
    pub fn thumb_position(&self, value: f64) -> Option<u16> {
        let bounds = self.bounds?;
        let ratio = if self.max > 0.0 { value / self.max } else { 0.0 };
        Some(bounds.denormalize(ratio, 0.0).0)
    }
}

impl Control for Slider {
    type Value = f64;

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

    fn value_at(&self, bounds: Rect, x: u16, y: u16) -> f64 {
        let (nx, _) = bounds.normalize(x, y);
        self.clamp(nx * self.max)
    }

    fn step(&self, key: Key, modifiers: Modifiers, current: f64) -> Option<f64> {
        let small = self.max / 100.0;
        let large = self.max / 10.0;
        let step = if modifiers.shift { large } else { small };

        let next = match key {
            Key::Right | Key::Up => current + step,
            Key::Left | Key::Down => current - step,
            Key::PageUp => current + large,
            Key::PageDown => current - large,
            Key::Home => 0.0,
            Key::End => self.max,
            _ => return None,
        };
        Some(self.clamp(next))
    }
}
