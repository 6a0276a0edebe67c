use super::{Hsla, Hsv, Rgb, Rgba};

/// Parse `#rgb`, `#rrggbb` or `#rrggbbaa` (the `#` is optional).
///
/// The 3-digit form doubles each nibble. In the 8-digit form the trailing
/// byte is alpha, scaled to `[0, 1]` and rounded to two decimals.
pub fn hex_to_rgba(hex: &str) -> Option<Rgba> {
    let hex = hex.trim();
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    let nibble = |i: usize| u8::from_str_radix(&digits[i..=i], 16).ok().map(|n| n * 17);

    match digits.len() {
        3 => Some(Rgba::opaque(nibble(0)?, nibble(1)?, nibble(2)?)),
        6 => Some(Rgba::opaque(byte(0)?, byte(2)?, byte(4)?)),
        8 => {
            let alpha = round_alpha(f64::from(byte(6)?) / 255.0);
            Some(Rgba::new(byte(0)?, byte(2)?, byte(4)?, alpha))
        }
        _ => None,
    }
}

/// Serialize to lowercase hex. The alpha byte is left out entirely for opaque
/// colors, so `#rrggbbff` never comes back out.
pub fn rgba_to_hex(rgba: Rgba) -> String {
    let Rgba { r, g, b, a } = rgba;
    if a >= 1.0 || a.is_nan() {
        format!("#{r:02x}{g:02x}{b:02x}")
    } else {
        let alpha = (a.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{r:02x}{g:02x}{b:02x}{alpha:02x}")
    }
}

/// Convert to HSL with whole-degree hue and whole-percent saturation and
/// lightness. Achromatic colors get `h = 0, s = 0`.
pub fn rgba_to_hsla(rgba: Rgba) -> Hsla {
    let r = f64::from(rgba.r) / 255.0;
    let g = f64::from(rgba.g) / 255.0;
    let b = f64::from(rgba.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsla::new(0.0, 0.0, (l * 100.0).round(), rgba.a);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };
    let h = hue_sector(r, g, b, max, d) * 60.0;

    Hsla::new(
        normalize_degrees(h.round()),
        (s * 100.0).round(),
        (l * 100.0).round(),
        rgba.a,
    )
}

/// Convert HSL to RGB. Out-of-range inputs are wrapped (hue) or clamped
/// (saturation, lightness) first.
pub fn hsla_to_rgba(hsla: Hsla) -> Rgba {
    let h = normalize_degrees(hsla.h);
    let s = hsla.s.clamp(0.0, 100.0) / 100.0;
    let l = hsla.l.clamp(0.0, 100.0) / 100.0;

    let a = s * l.min(1.0 - l);
    let f = |n: f64| {
        let k = (n + h / 30.0) % 12.0;
        l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0)
    };

    Rgba::new(to_channel(f(0.0)), to_channel(f(8.0)), to_channel(f(4.0)), hsla.a)
}

/// Convert HSV (saturation and value in percent) to RGB.
pub fn hsv_to_rgb(hsv: Hsv) -> Rgb {
    let h = normalize_degrees(hsv.h);
    let s = hsv.s.clamp(0.0, 100.0) / 100.0;
    let v = hsv.v.clamp(0.0, 100.0) / 100.0;

    let f = |n: f64| {
        let k = (n + h / 60.0) % 6.0;
        v - v * s * k.min(4.0 - k).min(1.0).max(0.0)
    };

    Rgb::new(to_channel(f(5.0)), to_channel(f(3.0)), to_channel(f(1.0)))
}

/// Convert RGB to HSV. The result is not rounded.
pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let d = max - min;

    let s = if max == 0.0 { 0.0 } else { d / max };
    let h = if d == 0.0 {
        0.0
    } else {
        normalize_degrees(hue_sector(r, g, b, max, d) * 60.0)
    };

    Hsv::new(h, s * 100.0, max * 100.0)
}

/// Clamp alpha into `[0, 1]` and round it to two decimals. NaN becomes 1.
pub fn round_alpha(a: f64) -> f64 {
    if a.is_nan() {
        return 1.0;
    }
    (a.clamp(0.0, 1.0) * 100.0).round() / 100.0
}

/// Hue in sixths of a turn, picked by the dominant channel.
fn hue_sector(r: f64, g: f64, b: f64, max: f64, d: f64) -> f64 {
    if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    }
}

fn normalize_degrees(h: f64) -> f64 {
    if h.is_finite() {
        h.rem_euclid(360.0)
    } else {
        0.0
    }
}

fn to_channel(unit: f64) -> u8 {
    (unit * 255.0).round().clamp(0.0, 255.0) as u8
}
