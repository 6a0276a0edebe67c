//! The color picker controller.
//!
//! `ColorPicker` holds the color string that crosses the component boundary
//! and derives every other view from it on each read. Interactions are
//! turned into new color strings, which are adopted as the new value and
//! handed to the `on_change` callback.
//!
//! # Example
//!
//! ```
//! use swatch::picker::{ColorPicker, PickerConfig};
//!
//! let mut picker = ColorPicker::new("#ff5500", PickerConfig::default());
//! picker.open();
//! let hsv = picker.derive().hsv;
//! assert_eq!(hsv.h.round(), 20.0);
//! assert_eq!(picker.select_preset("#000000").as_deref(), Some("#000000"));
//! ```

mod config;
mod fields;
mod listeners;

pub use config::{PickerConfig, TriggerMode, DEFAULT_PRESETS};
pub use fields::{is_hex_draft, read_field, Field, FieldInput};
pub use listeners::{GlobalEvent, ListenerKind, ListenerRegistry, PickerId, Subscription};

use self::listeners::DismissListeners;
use crate::color::parse::{is_color_string, parse_hsla, parse_rgba};
use crate::color::{
    hex_to_rgba, hsv_to_rgb, rgb_to_hsv, rgba_to_hex, round_alpha, DisplayFormat, Hsla, Hsv, Rgba,
};
use crate::control::{Control, SaturationValueSurface, Slider, SurfacePoint};
use crate::event::{Key, Modifiers, MouseButton, PointerEvent, PointerKind};
use crate::rect::Rect;

/// Value used by the derivation chain when the current string is not a color.
const FALLBACK_COLOR: &str = "#000000";

/// Callback invoked with every emitted color string.
pub type ChangeHandler = Box<dyn FnMut(&str)>;

/// Every view of the current color, computed in one pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Derived {
    pub rgba: Rgba,
    pub hsv: Hsv,
    pub hsla: Hsla,
    pub hex: String,
}

/// The interactive parts of an open picker that take keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Part {
    Surface,
    Hue,
    Alpha,
}

enum PickerState {
    Closed,
    Open(DismissListeners),
}

/// A color picker: trigger swatch plus popover with a saturation/value
/// surface, hue and alpha sliders, format fields and presets.
pub struct ColorPicker {
    id: PickerId,
    value: String,
    config: PickerConfig,
    format: DisplayFormat,
    state: PickerState,
    registry: ListenerRegistry,
    surface: SaturationValueSurface,
    hue: Slider,
    alpha: Slider,
    focused: Option<Part>,
    /// Raw hex text while the user is typing into the hex field.
    hex_draft: Option<String>,
    /// HSV point last set by the surface or hue slider, with the value it
    /// produced. Used in place of the re-derived HSV while that value stands.
    working_hsv: Option<(String, Hsv)>,
    trigger_bounds: Option<Rect>,
    popover_bounds: Option<Rect>,
    on_change: Option<ChangeHandler>,
}

impl std::fmt::Debug for ColorPicker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColorPicker")
            .field("id", &self.id)
            .field("value", &self.value)
            .field("format", &self.format)
            .field("open", &self.is_open())
            .field("focused", &self.focused)
            .field("hex_draft", &self.hex_draft)
            .finish_non_exhaustive()
    }
}

impl ColorPicker {
    /// Create a closed picker with its own listener registry.
    pub fn new(value: impl Into<String>, config: PickerConfig) -> Self {
        Self::with_registry(value, config, ListenerRegistry::new())
    }

    /// Create a closed picker that subscribes to a shared registry.
    pub fn with_registry(
        value: impl Into<String>,
        config: PickerConfig,
        registry: ListenerRegistry,
    ) -> Self {
        let value = value.into();
        Self {
            id: PickerId::new(),
            format: DisplayFormat::detect(&value),
            value,
            config,
            state: PickerState::Closed,
            registry,
            surface: SaturationValueSurface::new(),
            hue: Slider::hue(),
            alpha: Slider::alpha(),
            focused: None,
            hex_draft: None,
            working_hsv: None,
            trigger_bounds: None,
            popover_bounds: None,
            on_change: None,
        }
    }

    /// Set the callback invoked with every emitted value.
    pub fn on_change(mut self, handler: impl FnMut(&str) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }

    pub fn id(&self) -> PickerId {
        self.id
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub fn registry(&self) -> &ListenerRegistry {
        &self.registry
    }

    // -------------------------------------------------------------------------
    // Value
    // -------------------------------------------------------------------------

    /// The current external color string, exactly as last set or emitted.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the value from outside. Does not emit and does not touch the
    /// display format, even while open.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Recompute every view of the current value.
    ///
    /// Strings that do not look like a hex, rgb or hsl color are read as
    /// opaque black. While the value is the one the surface or hue slider
    /// last emitted, `hsv` is the unquantized point that produced it, so
    /// hue survives grays and single steps are never rounded away.
    pub fn derive(&self) -> Derived {
        let source = if is_color_string(&self.value) {
            self.value.trim()
        } else {
            FALLBACK_COLOR
        };
        let rgba = parse_rgba(source);
        Derived {
            rgba,
            hsv: self
                .working_hsv()
                .unwrap_or_else(|| rgb_to_hsv(rgba.rgb())),
            hsla: parse_hsla(source),
            hex: rgba_to_hex(rgba),
        }
    }

    fn working_hsv(&self) -> Option<Hsv> {
        self.working_hsv
            .as_ref()
            .filter(|(value, _)| *value == self.value)
            .map(|(_, hsv)| *hsv)
    }

    /// Text for a text-mode trigger.
    pub fn trigger_label(&self) -> Option<String> {
        if !self.config.trigger_mode.shows_text() {
            return None;
        }
        if self.value.trim().is_empty() {
            Some(self.derive().hex)
        } else {
            Some(self.value.clone())
        }
    }

    // -------------------------------------------------------------------------
    // Open/close state
    // -------------------------------------------------------------------------

    pub fn is_open(&self) -> bool {
        matches!(self.state, PickerState::Open(_))
    }

    /// Open the popover. The display format is re-detected from the value
    /// here and only here.
    pub fn open(&mut self) {
        if self.is_open() {
            return;
        }
        self.format = DisplayFormat::detect(&self.value);
        self.hex_draft = None;
        self.working_hsv = None;
        self.state = PickerState::Open(DismissListeners::install(&self.registry, self.id));
        log::debug!("{} opened as {} with {:?}", self.id, self.format, self.value);
    }

    /// Close the popover, dropping its screen-wide listeners and any drag.
    pub fn close(&mut self) {
        if let PickerState::Open(listeners) = std::mem::replace(&mut self.state, PickerState::Closed)
        {
            drop(listeners);
            self.surface.drag_state_mut().release();
            self.hue.drag_state_mut().release();
            self.alpha.drag_state_mut().release();
            self.set_focus(None);
            self.hex_draft = None;
            self.working_hsv = None;
            log::debug!("{} closed with {:?}", self.id, self.value);
        }
    }

    pub fn toggle(&mut self) {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    /// The trigger was clicked.
    pub fn activate_trigger(&mut self) {
        self.toggle();
    }

    /// A key was pressed while the trigger has focus. Enter and Space toggle.
    pub fn handle_trigger_key(&mut self, key: Key) -> bool {
        match key {
            Key::Enter | Key::Char(' ') => {
                self.toggle();
                true
            }
            _ => false,
        }
    }

    /// Screen-wide event. Only acted on while open: a press outside both the
    /// trigger and the popover, or Escape, closes the picker.
    ///
    /// Returns true if the picker closed.
    pub fn handle_global(&mut self, event: &GlobalEvent) -> bool {
        if !self.is_open() {
            return false;
        }
        let dismiss = match *event {
            GlobalEvent::PointerDown { x, y } => {
                let inside = |rect: Option<Rect>| rect.is_some_and(|r| r.contains(x, y));
                !inside(self.trigger_bounds) && !inside(self.popover_bounds)
            }
            GlobalEvent::Key { key, .. } => key == Key::Escape,
        };
        if dismiss {
            self.close();
        }
        dismiss
    }

    // -------------------------------------------------------------------------
    // Layout (called by the renderer)
    // -------------------------------------------------------------------------

    pub fn set_trigger_bounds(&mut self, rect: Rect) {
        self.trigger_bounds = Some(rect);
    }

    pub fn set_popover_bounds(&mut self, rect: Rect) {
        self.popover_bounds = Some(rect);
    }

    pub fn trigger_bounds(&self) -> Option<Rect> {
        self.trigger_bounds
    }

    pub fn popover_bounds(&self) -> Option<Rect> {
        self.popover_bounds
    }

    pub fn surface(&self) -> &SaturationValueSurface {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut SaturationValueSurface {
        &mut self.surface
    }

    pub fn hue_slider(&self) -> &Slider {
        &self.hue
    }

    pub fn hue_slider_mut(&mut self) -> &mut Slider {
        &mut self.hue
    }

    pub fn alpha_slider(&self) -> &Slider {
        &self.alpha
    }

    pub fn alpha_slider_mut(&mut self) -> &mut Slider {
        &mut self.alpha
    }

    // -------------------------------------------------------------------------
    // Focus
    // -------------------------------------------------------------------------

    pub fn focused(&self) -> Option<Part> {
        self.focused
    }

    /// Give keyboard focus to one part (or none).
    pub fn set_focus(&mut self, part: Option<Part>) {
        self.focused = part;
        let flag = |p: Part| part == Some(p);
        for (p, state) in [
            (Part::Surface, self.surface.drag_state_mut()),
            (Part::Hue, self.hue.drag_state_mut()),
            (Part::Alpha, self.alpha.drag_state_mut()),
        ] {
            if flag(p) {
                state.focus();
            } else {
                state.blur();
            }
        }
    }

    fn focus_order(&self) -> Vec<Part> {
        let mut parts = vec![Part::Surface, Part::Hue];
        if self.config.show_alpha {
            parts.push(Part::Alpha);
        }
        parts
    }

    fn cycle_focus(&mut self, forward: bool) {
        let order = self.focus_order();
        let next = match self.focused.and_then(|p| order.iter().position(|o| *o == p)) {
            None if forward => 0,
            None => order.len() - 1,
            Some(i) if forward => (i + 1) % order.len(),
            Some(i) => (i + order.len() - 1) % order.len(),
        };
        self.set_focus(Some(order[next]));
    }

    // -------------------------------------------------------------------------
    // Routing
    // -------------------------------------------------------------------------

    /// Route a pointer event to the trigger or whichever control it belongs to.
    ///
    /// A control that captured the pointer gets every event until release,
    /// wherever the pointer is.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Option<String> {
        if self.surface.is_dragging() {
            return self.handle_surface_pointer(event);
        }
        if self.hue.is_dragging() {
            return self.handle_hue_pointer(event);
        }
        if self.alpha.is_dragging() {
            return self.handle_alpha_pointer(event);
        }

        if event.kind != PointerKind::Down(MouseButton::Left) {
            return None;
        }
        if self.trigger_bounds.is_some_and(|r| r.contains(event.x, event.y)) {
            self.activate_trigger();
            return None;
        }
        if !self.is_open() {
            return None;
        }

        let hit = |bounds: Option<Rect>| bounds.is_some_and(|r| r.contains(event.x, event.y));
        if hit(self.surface.bounds()) {
            self.set_focus(Some(Part::Surface));
            self.handle_surface_pointer(event)
        } else if hit(self.hue.bounds()) {
            self.set_focus(Some(Part::Hue));
            self.handle_hue_pointer(event)
        } else if self.config.show_alpha && hit(self.alpha.bounds()) {
            self.set_focus(Some(Part::Alpha));
            self.handle_alpha_pointer(event)
        } else {
            None
        }
    }

    /// Route a key press to the focused control. Tab and Shift+Tab move
    /// focus between controls.
    pub fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> Option<String> {
        if !self.is_open() {
            return None;
        }
        match key {
            Key::Tab => {
                self.cycle_focus(!modifiers.shift);
                None
            }
            Key::BackTab => {
                self.cycle_focus(false);
                None
            }
            _ => match self.focused? {
                Part::Surface => self.handle_surface_key(key, modifiers),
                Part::Hue => self.handle_hue_key(key, modifiers),
                Part::Alpha => self.handle_alpha_key(key, modifiers),
            },
        }
    }

    // -------------------------------------------------------------------------
    // Saturation/value surface
    // -------------------------------------------------------------------------

    pub fn handle_surface_pointer(&mut self, event: PointerEvent) -> Option<String> {
        let point = self.surface.handle_pointer(event)?;
        self.apply_surface(point)
    }

    pub fn handle_surface_key(&mut self, key: Key, modifiers: Modifiers) -> Option<String> {
        let hsv = self.derive().hsv;
        let point = self
            .surface
            .handle_key(key, modifiers, SurfacePoint::new(hsv.s, hsv.v))?;
        self.apply_surface(point)
    }

    fn apply_surface(&mut self, point: SurfacePoint) -> Option<String> {
        let derived = self.derive();
        self.emit_hsv(Hsv::new(derived.hsv.h, point.s, point.v), derived.rgba.a)
    }

    // -------------------------------------------------------------------------
    // Hue slider
    // -------------------------------------------------------------------------

    pub fn handle_hue_pointer(&mut self, event: PointerEvent) -> Option<String> {
        let hue = self.hue.handle_pointer(event)?;
        self.apply_hue(hue)
    }

    pub fn handle_hue_key(&mut self, key: Key, modifiers: Modifiers) -> Option<String> {
        let current = self.derive().hsv.h;
        let hue = self.hue.handle_key(key, modifiers, current)?;
        self.apply_hue(hue)
    }

    fn apply_hue(&mut self, hue: f64) -> Option<String> {
        let derived = self.derive();
        self.emit_hsv(Hsv::new(hue, derived.hsv.s, derived.hsv.v), derived.rgba.a)
    }

    // -------------------------------------------------------------------------
    // Alpha slider
    // -------------------------------------------------------------------------

    pub fn handle_alpha_pointer(&mut self, event: PointerEvent) -> Option<String> {
        if !self.config.show_alpha {
            return None;
        }
        let alpha = self.alpha.handle_pointer(event)?;
        self.apply_alpha(alpha)
    }

    pub fn handle_alpha_key(&mut self, key: Key, modifiers: Modifiers) -> Option<String> {
        if !self.config.show_alpha {
            return None;
        }
        let current = self.derive().rgba.a;
        let alpha = self.alpha.handle_key(key, modifiers, current)?;
        self.apply_alpha(alpha)
    }

    fn apply_alpha(&mut self, alpha: f64) -> Option<String> {
        let alpha = round_alpha(alpha);
        let derived = self.derive();
        let working = self.working_hsv();
        let emitted = match self.format {
            DisplayFormat::Hsl => self.emit(Hsla { a: alpha, ..derived.hsla }.to_css()),
            DisplayFormat::Hex | DisplayFormat::Rgb => {
                self.emit_color(derived.rgba.with_alpha(alpha))
            }
        };
        if let Some(hsv) = working {
            self.working_hsv = Some((self.value.clone(), hsv));
        }
        emitted
    }

    // -------------------------------------------------------------------------
    // Format and fields
    // -------------------------------------------------------------------------

    pub fn format(&self) -> DisplayFormat {
        self.format
    }

    /// Change the display format. Never emits; the color is untouched.
    pub fn switch_format(&mut self, format: DisplayFormat) {
        if self.format != format {
            log::debug!("{} format {} -> {}", self.id, self.format, format);
        }
        self.format = format;
        self.hex_draft = None;
    }

    /// Numeric fields visible in the current format.
    pub fn fields(&self) -> &'static [Field] {
        Field::for_format(self.format, self.config.show_alpha)
    }

    /// Current text of a numeric field.
    pub fn field_text(&self, field: Field) -> String {
        let derived = self.derive();
        match field {
            Field::Red => derived.rgba.r.to_string(),
            Field::Green => derived.rgba.g.to_string(),
            Field::Blue => derived.rgba.b.to_string(),
            Field::Hue => derived.hsla.h.to_string(),
            Field::Saturation => derived.hsla.s.to_string(),
            Field::Lightness => derived.hsla.l.to_string(),
            Field::Alpha => match self.format {
                DisplayFormat::Hsl => derived.hsla.a.to_string(),
                _ => derived.rgba.a.to_string(),
            },
        }
    }

    /// Apply the text of a numeric field.
    ///
    /// Text that cannot become a number is ignored; "" and "." wait for more
    /// input. Otherwise the value is clamped into range and the full
    /// `rgba(...)` or `hsla(...)` string is emitted with the other fields
    /// unchanged.
    pub fn edit_field(&mut self, field: Field, text: &str) -> Option<String> {
        let value = match read_field(field, text) {
            FieldInput::Value(value) => value,
            FieldInput::Pending => return None,
            FieldInput::Invalid => {
                log::debug!("{} ignoring {:?} for field {}", self.id, text, field.label());
                return None;
            }
        };

        let derived = self.derive();
        let mut rgba = derived.rgba;
        let mut hsla = derived.hsla;
        let as_hsla = match field {
            Field::Red | Field::Green | Field::Blue => {
                let channel = value as u8;
                match field {
                    Field::Red => rgba.r = channel,
                    Field::Green => rgba.g = channel,
                    _ => rgba.b = channel,
                }
                false
            }
            Field::Hue => {
                hsla.h = value;
                true
            }
            Field::Saturation => {
                hsla.s = value;
                true
            }
            Field::Lightness => {
                hsla.l = value;
                true
            }
            Field::Alpha => {
                rgba.a = value;
                hsla.a = value;
                self.format == DisplayFormat::Hsl
            }
        };

        if as_hsla {
            self.emit(hsla.to_css())
        } else {
            self.emit(rgba.to_css())
        }
    }

    /// Text for the hex field: the raw draft while typing, otherwise the
    /// canonical hex of the current value.
    pub fn hex_text(&self) -> String {
        self.hex_draft.clone().unwrap_or_else(|| self.derive().hex)
    }

    pub fn is_editing_hex(&self) -> bool {
        self.hex_draft.is_some()
    }

    /// Apply the text of the hex field.
    ///
    /// Anything that is not a hex draft (stray characters, a second `#`,
    /// more than nine characters) is ignored. A draft is kept as typed and
    /// only emits once it parses as a full 3, 6 or 8 digit color.
    pub fn edit_hex(&mut self, text: &str) -> Option<String> {
        if !is_hex_draft(text) {
            log::debug!("{} ignoring hex input {:?}", self.id, text);
            return None;
        }
        self.hex_draft = Some(text.to_string());
        let rgba = hex_to_rgba(text)?;
        self.emit_color(rgba)
    }

    /// The hex field lost focus; show the canonical hex again.
    pub fn end_hex_edit(&mut self) {
        self.hex_draft = None;
    }

    // -------------------------------------------------------------------------
    // Presets
    // -------------------------------------------------------------------------

    pub fn presets(&self) -> &[String] {
        &self.config.presets
    }

    /// Emit a preset exactly as given, whatever the display format.
    pub fn select_preset(&mut self, preset: &str) -> Option<String> {
        if !self.config.show_presets {
            return None;
        }
        self.hex_draft = None;
        self.emit(preset.to_string())
    }

    /// Emit the preset at `index` in the configured list.
    pub fn select_preset_index(&mut self, index: usize) -> Option<String> {
        let preset = self.config.presets.get(index)?.clone();
        self.select_preset(&preset)
    }

    // -------------------------------------------------------------------------
    // Emission
    // -------------------------------------------------------------------------

    /// Emit a surface or hue change: hex in HEX mode, `rgba(...)` otherwise.
    /// The HSV point is kept for the next step.
    fn emit_hsv(&mut self, hsv: Hsv, alpha: f64) -> Option<String> {
        let rgba = hsv_to_rgb(hsv).with_alpha(alpha);
        let emitted = match self.format {
            DisplayFormat::Hex => self.emit(rgba_to_hex(rgba)),
            DisplayFormat::Rgb | DisplayFormat::Hsl => self.emit(rgba.to_css()),
        };
        self.working_hsv = Some((self.value.clone(), hsv));
        emitted
    }

    /// Emit a color in the active display format.
    fn emit_color(&mut self, rgba: Rgba) -> Option<String> {
        let value = self.format.format(rgba);
        self.emit(value)
    }

    fn emit(&mut self, value: String) -> Option<String> {
        log::trace!("{} emits {:?}", self.id, value);
        self.working_hsv = None;
        self.value.clone_from(&value);
        if let Some(handler) = self.on_change.as_mut() {
            handler(&value);
        }
        Some(value)
    }
}
