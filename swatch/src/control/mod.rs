//! Continuous drag/step controls.
//!
//! A control turns pointer gestures and key presses into a bounded value.
//! It knows nothing about color; the picker decides what the value means.
//!
//! Pointer handling follows one rule set for every control:
//!
//! - a left-button press inside the bounds captures the pointer and emits,
//! - moves are honored only while captured, wherever the pointer is,
//! - release and cancel always drop the capture and never emit.
//!
//! Values are clamped before they are returned, so nothing out of range ever
//! leaves a control.

mod slider;
mod surface;

pub use slider::Slider;
pub use surface::{SaturationValueSurface, SurfacePoint};

use crate::event::{Key, Modifiers, MouseButton, PointerEvent, PointerKind};
use crate::rect::Rect;

/// Per-control interaction flags, used for visual feedback only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DragState {
    dragging: bool,
    focused: bool,
}

impl DragState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Start a captured gesture.
    pub fn capture(&mut self) {
        self.dragging = true;
    }

    /// End the captured gesture. Returns true if one was active.
    pub fn release(&mut self) -> bool {
        std::mem::replace(&mut self.dragging, false)
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }
}

/// A bounded value driven by pointer and keyboard.
pub trait Control {
    type Value: Copy + std::fmt::Debug;

    /// The rect this control was last rendered into, if any.
    fn bounds(&self) -> Option<Rect>;

    /// Record the rendered rect (called by the renderer every frame).
    fn set_bounds(&mut self, rect: Rect);

    fn drag_state(&self) -> DragState;

    fn drag_state_mut(&mut self) -> &mut DragState;

    /// Value for a pointer position. Positions outside `bounds` clamp to
    /// the nearest edge.
    fn value_at(&self, bounds: Rect, x: u16, y: u16) -> Self::Value;

    /// Value after a key press, or `None` if the key means nothing here.
    fn step(&self, key: Key, modifiers: Modifiers, current: Self::Value) -> Option<Self::Value>;

    /// Feed a pointer event. Returns the value to emit, if any.
    fn handle_pointer(&mut self, event: PointerEvent) -> Option<Self::Value> {
        match event.kind {
            PointerKind::Up | PointerKind::Cancel => {
                if self.drag_state_mut().release() {
                    log::trace!("pointer released at ({}, {})", event.x, event.y);
                }
                None
            }
            PointerKind::Down(MouseButton::Left) => {
                let bounds = self.bounds()?;
                if !bounds.contains(event.x, event.y) {
                    return None;
                }
                let state = self.drag_state_mut();
                state.capture();
                state.focus();
                Some(self.value_at(bounds, event.x, event.y))
            }
            PointerKind::Down(_) => None,
            PointerKind::Move => {
                if !self.drag_state().is_dragging() {
                    return None;
                }
                let bounds = self.bounds()?;
                Some(self.value_at(bounds, event.x, event.y))
            }
        }
    }

    /// Feed a key press. Returns the value to emit, if any.
    fn handle_key(
        &mut self,
        key: Key,
        modifiers: Modifiers,
        current: Self::Value,
    ) -> Option<Self::Value> {
        self.step(key, modifiers, current)
    }

    fn is_dragging(&self) -> bool {
        self.drag_state().is_dragging()
    }

    fn is_focused(&self) -> bool {
        self.drag_state().is_focused()
    }
}
