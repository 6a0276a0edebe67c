//! Layout and drawing of the picker.
//!
//! The closed picker is a trigger on the first row. The open picker adds a
//! popover below it with, top to bottom: the saturation/value surface, the
//! hue slider, the alpha slider, format tabs, input fields and presets.

use swatch::color::parse::parse_rgba;
use swatch::{
    hsv_to_rgb, ColorPicker, Control, DisplayFormat, Field, Hsv, Rect, Rgb, Rgba, SurfacePoint,
};

use crate::buffer::{Buffer, Cell};

const PANEL_BG: Rgb = Rgb::new(30, 30, 36);
const TEXT: Rgb = Rgb::new(220, 220, 220);
const MUTED: Rgb = Rgb::new(130, 130, 140);
const ACCENT: Rgb = Rgb::new(97, 175, 239);
const INPUT_BG: Rgb = Rgb::new(48, 48, 56);
const CHECKER_LIGHT: Rgb = Rgb::new(204, 204, 204);
const CHECKER_DARK: Rgb = Rgb::new(153, 153, 153);

const POPOVER_MAX_WIDTH: u16 = 48;
const SURFACE_MIN_HEIGHT: u16 = 4;
const SURFACE_MAX_HEIGHT: u16 = 12;
const TAB_WIDTH: u16 = 5;
const FIELD_WIDTH: u16 = 5;
const HEX_FIELD_WIDTH: u16 = 10;
const PRESET_WIDTH: u16 = 2;

/// An input box the user can type into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSlot {
    Hex,
    Field(Field),
}

/// Where everything goes this frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout {
    pub trigger: Rect,
    pub popover: Option<Rect>,
    pub surface: Rect,
    pub hue: Rect,
    pub alpha: Option<Rect>,
    pub tabs: Vec<(DisplayFormat, Rect)>,
    pub inputs: Vec<(InputSlot, Rect)>,
    pub presets: Vec<(usize, Rect)>,
}

impl Layout {
    /// Lay the picker out in a `width` x `height` screen.
    pub fn compute(width: u16, height: u16, picker: &ColorPicker) -> Self {
        let config = picker.config();
        let mut trigger_width = 0;
        if config.trigger_mode.shows_swatch() {
            trigger_width += 2;
        }
        if let Some(label) = picker.trigger_label() {
            trigger_width += 1 + label.chars().count() as u16;
        }

        let mut layout = Self {
            trigger: Rect::new(1, 1, trigger_width, 1),
            ..Default::default()
        };
        if !picker.is_open() {
            return layout;
        }

        let px = 1;
        let py = 3;
        let pw = width.saturating_sub(2).min(POPOVER_MAX_WIDTH);
        let ix = px + 1;
        let iw = pw.saturating_sub(2);

        // Rows below the surface: hue, alpha, tabs, inputs, presets, padding
        let mut fixed_rows = 2 + 2 + 2 + 2;
        if config.show_alpha {
            fixed_rows += 2;
        }
        let preset_rows = if config.show_presets {
            preset_rows(config.presets.len(), iw)
        } else {
            0
        };
        fixed_rows += preset_rows * 2;
        let surface_height = height
            .saturating_sub(py + 1 + fixed_rows)
            .clamp(SURFACE_MIN_HEIGHT, SURFACE_MAX_HEIGHT);

        let mut y = py + 1;
        layout.surface = Rect::new(ix, y, iw, surface_height);
        y += surface_height + 1;

        layout.hue = Rect::new(ix, y, iw, 1);
        y += 2;

        if config.show_alpha {
            layout.alpha = Some(Rect::new(ix, y, iw, 1));
            y += 2;
        }

        let mut x = ix;
        for format in DisplayFormat::ALL {
            layout.tabs.push((format, Rect::new(x, y, TAB_WIDTH, 1)));
            x += TAB_WIDTH + 1;
        }
        y += 2;

        // Inputs sit after a two-cell label: "# " or "R "
        x = ix;
        match picker.format() {
            DisplayFormat::Hex => {
                layout.inputs.push((InputSlot::Hex, Rect::new(x + 2, y, HEX_FIELD_WIDTH, 1)));
            }
            DisplayFormat::Rgb | DisplayFormat::Hsl => {
                for field in picker.fields() {
                    let slot = InputSlot::Field(*field);
                    layout.inputs.push((slot, Rect::new(x + 2, y, FIELD_WIDTH, 1)));
                    x += 2 + FIELD_WIDTH + 2;
                }
            }
        }
        y += 2;

        if config.show_presets {
            let per_row = presets_per_row(iw);
            for index in 0..config.presets.len() {
                let row = (index / per_row) as u16;
                let col = (index % per_row) as u16;
                let rect = Rect::new(ix + col * (PRESET_WIDTH + 1), y + row * 2, PRESET_WIDTH, 1);
                layout.presets.push((index, rect));
            }
            y += preset_rows * 2;
        }

        layout.popover = Some(Rect::new(px, py, pw, y - py));
        layout
    }

    /// Push the rendered bounds into the picker so hit-testing and dragging
    /// see this frame's geometry.
    pub fn apply(&self, picker: &mut ColorPicker) {
        picker.set_trigger_bounds(self.trigger);
        if let Some(popover) = self.popover {
            picker.set_popover_bounds(popover);
            picker.surface_mut().set_bounds(self.surface);
            picker.hue_slider_mut().set_bounds(self.hue);
            if let Some(alpha) = self.alpha {
                picker.alpha_slider_mut().set_bounds(alpha);
            }
        }
    }

    pub fn tab_at(&self, x: u16, y: u16) -> Option<DisplayFormat> {
        hit(&self.tabs, x, y)
    }

    pub fn input_at(&self, x: u16, y: u16) -> Option<InputSlot> {
        hit(&self.inputs, x, y)
    }

    pub fn preset_at(&self, x: u16, y: u16) -> Option<usize> {
        hit(&self.presets, x, y)
    }
}

fn hit<T: Copy>(items: &[(T, Rect)], x: u16, y: u16) -> Option<T> {
    items
        .iter()
        .find(|(_, rect)| rect.contains(x, y))
        .map(|(item, _)| *item)
}

fn presets_per_row(inner_width: u16) -> usize {
    usize::from((inner_width + 1) / (PRESET_WIDTH + 1)).max(1)
}

fn preset_rows(count: usize, inner_width: u16) -> u16 {
    count.div_ceil(presets_per_row(inner_width)) as u16
}

// -------------------------------------------------------------------------
// Drawing
// -------------------------------------------------------------------------

/// Paint the whole picker. `editing` is the input being typed into and its
/// raw text.
pub fn draw(
    buf: &mut Buffer,
    picker: &ColorPicker,
    layout: &Layout,
    editing: Option<(InputSlot, &str)>,
) {
    let derived = picker.derive();
    draw_trigger(buf, picker, layout.trigger, derived.rgba);

    let Some(popover) = layout.popover else {
        draw_help(buf, "enter: open  q: quit");
        return;
    };
    buf.fill(popover, PANEL_BG);

    draw_surface(buf, picker, layout.surface, derived.hsv);
    draw_hue(buf, picker, layout.hue, derived.hsv.h);
    if let Some(alpha) = layout.alpha {
        draw_alpha(buf, picker, alpha, derived.rgba);
    }

    for (format, rect) in &layout.tabs {
        let active = *format == picker.format();
        let fg = if active { ACCENT } else { MUTED };
        let text = format!("{:^width$}", format.label(), width = rect.width as usize);
        buf.put_str(rect.x, rect.y, &text, fg, active);
    }

    for (slot, rect) in &layout.inputs {
        let label = match slot {
            InputSlot::Hex => "#",
            InputSlot::Field(field) => field.label(),
        };
        buf.put_str(rect.x.saturating_sub(2), rect.y, label, MUTED, false);

        let (text, active) = match editing {
            Some((edited, text)) if edited == *slot => (text.to_string(), true),
            _ => (input_text(picker, *slot), false),
        };
        buf.fill(*rect, INPUT_BG);
        let visible: String = text.chars().take(rect.width as usize).collect();
        buf.put_str(rect.x, rect.y, &visible, if active { ACCENT } else { TEXT }, active);
    }

    for (index, rect) in &layout.presets {
        let Some(preset) = picker.presets().get(*index) else {
            continue;
        };
        let color = parse_rgba(preset);
        for x in rect.x..rect.right() {
            buf.set(x, rect.y, Cell::new(' ').with_bg(over_checker(color, x)));
        }
    }

    draw_help(buf, "tab: focus  f: format  e: edit  1-9: preset  esc: close  q: quit");
}

/// Text shown in an input that is not being edited.
fn input_text(picker: &ColorPicker, slot: InputSlot) -> String {
    match slot {
        // The label already shows the '#'
        InputSlot::Hex => picker.hex_text().trim_start_matches('#').to_string(),
        InputSlot::Field(field) => picker.field_text(field),
    }
}

fn draw_trigger(buf: &mut Buffer, picker: &ColorPicker, rect: Rect, color: Rgba) {
    let mut x = rect.x;
    if picker.config().trigger_mode.shows_swatch() {
        for col in x..x + 2 {
            buf.set(col, rect.y, Cell::new(' ').with_bg(over_checker(color, col)));
        }
        x += 2;
    }
    if let Some(label) = picker.trigger_label() {
        buf.put_str(x + 1, rect.y, &label, TEXT, picker.is_open());
    }
}

fn draw_surface(buf: &mut Buffer, picker: &ColorPicker, rect: Rect, hsv: Hsv) {
    for y in rect.y..rect.bottom() {
        for x in rect.x..rect.right() {
            let (nx, ny) = rect.normalize(x, y);
            let color = hsv_to_rgb(Hsv::new(hsv.h, nx * 100.0, (1.0 - ny) * 100.0));
            buf.set(x, y, Cell::new(' ').with_bg(color));
        }
    }

    let surface = picker.surface();
    if let Some((x, y)) = surface.thumb_position(SurfacePoint::new(hsv.s, hsv.v)) {
        let fg = if hsv.v > 50.0 {
            Rgb::new(0, 0, 0)
        } else {
            Rgb::new(255, 255, 255)
        };
        let bg = hsv_to_rgb(hsv);
        let thumb = if surface.is_dragging() { 'O' } else { 'o' };
        buf.set(x, y, Cell::new(thumb).with_fg(fg).with_bg(bg).bold(surface.is_focused()));
    }
}

fn draw_hue(buf: &mut Buffer, picker: &ColorPicker, rect: Rect, hue: f64) {
    for x in rect.x..rect.right() {
        let (nx, _) = rect.normalize(x, rect.y);
        let color = hsv_to_rgb(Hsv::new(nx * 360.0, 100.0, 100.0));
        buf.set(x, rect.y, Cell::new(' ').with_bg(color));
    }
    let slider = picker.hue_slider();
    draw_thumb(buf, slider.thumb_position(hue), rect.y, slider.is_focused());
}

fn draw_alpha(buf: &mut Buffer, picker: &ColorPicker, rect: Rect, color: Rgba) {
    for x in rect.x..rect.right() {
        let (nx, _) = rect.normalize(x, rect.y);
        buf.set(x, rect.y, Cell::new(' ').with_bg(over_checker(color.with_alpha(nx), x)));
    }
    let slider = picker.alpha_slider();
    draw_thumb(buf, slider.thumb_position(color.a), rect.y, slider.is_focused());
}

fn draw_thumb(buf: &mut Buffer, column: Option<u16>, y: u16, focused: bool) {
    let Some(x) = column else { return };
    let Some(bg) = buf.get(x, y).map(|cell| cell.bg) else {
        return;
    };
    buf.set(x, y, Cell::new('|').with_fg(contrast(bg)).with_bg(bg).bold(focused));
}

fn draw_help(buf: &mut Buffer, text: &str) {
    let y = buf.height().saturating_sub(1);
    buf.put_str(1, y, text, MUTED, false);
}

/// Composite a translucent color over a two-tone checkerboard.
fn over_checker(color: Rgba, x: u16) -> Rgb {
    let checker = if x % 2 == 0 { CHECKER_LIGHT } else { CHECKER_DARK };
    let a = color.a.clamp(0.0, 1.0);
    let mix = |c: u8, under: u8| (f64::from(c) * a + f64::from(under) * (1.0 - a)).round() as u8;
    Rgb::new(
        mix(color.r, checker.r),
        mix(color.g, checker.g),
        mix(color.b, checker.b),
    )
}

/// Black or white, whichever reads better on `bg`.
fn contrast(bg: Rgb) -> Rgb {
    let luma = 0.299 * f64::from(bg.r) + 0.587 * f64::from(bg.g) + 0.114 * f64::from(bg.b);
    if luma > 128.0 {
        Rgb::new(0, 0, 0)
    } else {
        Rgb::new(255, 255, 255)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swatch::PickerConfig;

    fn open_picker(value: &str, config: PickerConfig) -> ColorPicker {
        let mut picker = ColorPicker::new(value, config);
        picker.open();
        picker
    }

    #[test]
    fn test_closed_layout_has_only_trigger() {
        let picker = ColorPicker::new("#ff5500", PickerConfig::default());
        let layout = Layout::compute(80, 40, &picker);

        // Swatch, space, "#ff5500"
        assert_eq!(layout.trigger, Rect::new(1, 1, 10, 1));
        assert_eq!(layout.popover, None);
        assert!(layout.tabs.is_empty());
    }

    #[test]
    fn test_open_layout_stacks_rows() {
        let picker = open_picker("#ff5500", PickerConfig::default());
        let layout = Layout::compute(80, 40, &picker);

        let popover = layout.popover.unwrap();
        assert_eq!(popover.width, POPOVER_MAX_WIDTH);
        assert!(layout.surface.height >= SURFACE_MIN_HEIGHT);
        assert!(layout.hue.y > layout.surface.bottom());
        let alpha = layout.alpha.unwrap();
        assert!(alpha.y > layout.hue.y);
        assert!(layout.tabs[0].1.y > alpha.y);
        assert_eq!(layout.inputs.len(), 1);
        assert_eq!(layout.presets.len(), swatch::DEFAULT_PRESETS.len());

        let last_preset = layout.presets.last().unwrap().1;
        assert!(popover.contains(last_preset.x, last_preset.y));
    }

    #[test]
    fn test_layout_without_alpha_or_presets() {
        let config = PickerConfig::default().show_alpha(false).show_presets(false);
        let picker = open_picker("rgb(1, 2, 3)", config);
        let layout = Layout::compute(80, 40, &picker);

        assert_eq!(layout.alpha, None);
        assert!(layout.presets.is_empty());
        let slots: Vec<_> = layout.inputs.iter().map(|(slot, _)| *slot).collect();
        assert_eq!(
            slots,
            vec![
                InputSlot::Field(Field::Red),
                InputSlot::Field(Field::Green),
                InputSlot::Field(Field::Blue)
            ]
        );
    }

    #[test]
    fn test_hit_lookups() {
        let picker = open_picker("#ff5500", PickerConfig::default());
        let layout = Layout::compute(80, 40, &picker);

        let (format, rect) = layout.tabs[1];
        assert_eq!(layout.tab_at(rect.x, rect.y), Some(format));
        let (_, rect) = layout.presets[3];
        assert_eq!(layout.preset_at(rect.x + 1, rect.y), Some(3));
        let (slot, rect) = layout.inputs[0];
        assert_eq!(layout.input_at(rect.x, rect.y), Some(slot));
        assert_eq!(layout.tab_at(0, 0), None);
    }

    #[test]
    fn test_draw_paints_surface_corners() {
        let mut picker = open_picker("#ff0000", PickerConfig::default());
        let layout = Layout::compute(60, 40, &picker);
        layout.apply(&mut picker);

        let mut buf = Buffer::new(60, 40);
        draw(&mut buf, &picker, &layout, None);

        let surface = layout.surface;
        // Top-left is white, bottom row is black
        let top_left = buf.get(surface.x, surface.y).unwrap();
        assert_eq!(top_left.bg, Rgb::new(255, 255, 255));
        let bottom_left = buf.get(surface.x, surface.bottom() - 1).unwrap();
        assert_eq!(bottom_left.bg, Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_draw_shows_editing_text() {
        let picker = open_picker("#ff5500", PickerConfig::default());
        let layout = Layout::compute(60, 40, &picker);
        let mut buf = Buffer::new(60, 40);
        draw(&mut buf, &picker, &layout, Some((InputSlot::Hex, "1a")));

        let rect = layout.inputs[0].1;
        let text: String = (rect.x..rect.x + 2)
            .filter_map(|x| buf.get(x, rect.y).map(|c| c.char))
            .collect();
        assert_eq!(text, "1a");
    }

    #[test]
    fn test_over_checker() {
        let opaque = Rgba::opaque(10, 20, 30);
        assert_eq!(over_checker(opaque, 0), Rgb::new(10, 20, 30));
        let clear = Rgba::new(10, 20, 30, 0.0);
        assert_eq!(over_checker(clear, 0), CHECKER_LIGHT);
        assert_eq!(over_checker(clear, 1), CHECKER_DARK);
    }
}
