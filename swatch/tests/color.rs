use palette::IntoColor;
use swatch::{
    hex_to_rgba, hsla_to_rgba, hsv_to_rgb, rgb_to_hsv, rgba_to_hex, rgba_to_hsla, DisplayFormat,
    Hsla, Hsv, Rgb, Rgba,
};

fn channels() -> impl Iterator<Item = u8> + Clone {
    (0..=255u8).step_by(15).chain(std::iter::once(254))
}

fn hue_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(360.0);
    d.min(360.0 - d)
}

// ============================================================================
// HSV
// ============================================================================

#[test]
fn test_hsv_round_trip_within_one_unit() {
    for r in channels() {
        for g in channels() {
            for b in channels() {
                let rgb = Rgb::new(r, g, b);
                let back = hsv_to_rgb(rgb_to_hsv(rgb));
                assert!(
                    back.r.abs_diff(r) <= 1 && back.g.abs_diff(g) <= 1 && back.b.abs_diff(b) <= 1,
                    "{rgb:?} came back as {back:?}"
                );
            }
        }
    }
}

#[test]
fn test_rgb_to_hsv_orange() {
    let hsv = rgb_to_hsv(Rgb::new(255, 85, 0));
    assert!((hsv.h - 20.0).abs() < 1e-9);
    assert!((hsv.s - 100.0).abs() < 1e-9);
    assert!((hsv.v - 100.0).abs() < 1e-9);
}

#[test]
fn test_rgb_to_hsv_black_and_grey() {
    assert_eq!(rgb_to_hsv(Rgb::new(0, 0, 0)), Hsv::new(0.0, 0.0, 0.0));

    let grey = rgb_to_hsv(Rgb::new(128, 128, 128));
    assert_eq!(grey.h, 0.0);
    assert_eq!(grey.s, 0.0);
}

#[test]
fn test_hsv_to_rgb_known_values() {
    assert_eq!(hsv_to_rgb(Hsv::new(20.0, 100.0, 100.0)), Rgb::new(255, 85, 0));
    assert_eq!(hsv_to_rgb(Hsv::new(36.0, 100.0, 100.0)), Rgb::new(255, 153, 0));
    assert_eq!(hsv_to_rgb(Hsv::new(0.0, 0.0, 100.0)), Rgb::new(255, 255, 255));
    // 360 wraps to red
    assert_eq!(hsv_to_rgb(Hsv::new(360.0, 100.0, 100.0)), Rgb::new(255, 0, 0));
}

#[test]
fn test_hsv_to_rgb_clamps_inputs() {
    assert_eq!(hsv_to_rgb(Hsv::new(0.0, 150.0, 120.0)), Rgb::new(255, 0, 0));
    assert_eq!(hsv_to_rgb(Hsv::new(0.0, -10.0, -10.0)), Rgb::new(0, 0, 0));
}

#[test]
fn test_rgb_to_hsv_matches_palette() {
    for r in channels() {
        for g in channels() {
            for b in channels() {
                let ours = rgb_to_hsv(Rgb::new(r, g, b));
                let theirs: palette::Hsv<palette::encoding::Srgb, f64> = palette::Srgb::new(
                    f64::from(r) / 255.0,
                    f64::from(g) / 255.0,
                    f64::from(b) / 255.0,
                )
                .into_color();

                assert!((ours.s - theirs.saturation * 100.0).abs() < 1e-6);
                assert!((ours.v - theirs.value * 100.0).abs() < 1e-6);
                if ours.s > 0.0 {
                    let hue = theirs.hue.into_positive_degrees();
                    assert!(hue_distance(ours.h, hue) < 1e-6, "({r}, {g}, {b})");
                }
            }
        }
    }
}

// ============================================================================
// HSL
// ============================================================================

#[test]
fn test_rgba_to_hsla_orange() {
    let hsla = rgba_to_hsla(Rgba::new(255, 85, 0, 0.5));
    assert_eq!(hsla, Hsla::new(20.0, 100.0, 50.0, 0.5));
}

#[test]
fn test_rgba_to_hsla_achromatic() {
    let hsla = rgba_to_hsla(Rgba::opaque(128, 128, 128));
    assert_eq!(hsla.h, 0.0);
    assert_eq!(hsla.s, 0.0);
    assert_eq!(hsla.l, 50.0);
}

#[test]
fn test_rgba_to_hsla_hue_is_whole_degrees() {
    for r in channels() {
        for g in channels() {
            let hsla = rgba_to_hsla(Rgba::opaque(r, g, 77));
            assert_eq!(hsla.h, hsla.h.round());
            assert!((0.0..360.0).contains(&hsla.h));
            assert_eq!(hsla.s, hsla.s.round());
            assert_eq!(hsla.l, hsla.l.round());
        }
    }
}

#[test]
fn test_rgba_to_hsla_matches_palette() {
    for r in channels() {
        for g in channels() {
            for b in channels() {
                let ours = rgba_to_hsla(Rgba::opaque(r, g, b));
                let theirs: palette::Hsl<palette::encoding::Srgb, f64> = palette::Srgb::new(
                    f64::from(r) / 255.0,
                    f64::from(g) / 255.0,
                    f64::from(b) / 255.0,
                )
                .into_color();

                assert!((ours.s - theirs.saturation * 100.0).abs() <= 0.5 + 1e-6);
                assert!((ours.l - theirs.lightness * 100.0).abs() <= 0.5 + 1e-6);
                if ours.s > 0.0 {
                    let hue = theirs.hue.into_positive_degrees();
                    assert!(hue_distance(ours.h, hue) <= 0.5 + 1e-6, "({r}, {g}, {b})");
                }
            }
        }
    }
}

#[test]
fn test_hsla_to_rgba_primaries() {
    assert_eq!(
        hsla_to_rgba(Hsla::new(0.0, 100.0, 50.0, 1.0)),
        Rgba::opaque(255, 0, 0)
    );
    assert_eq!(
        hsla_to_rgba(Hsla::new(120.0, 100.0, 50.0, 1.0)),
        Rgba::opaque(0, 255, 0)
    );
    assert_eq!(
        hsla_to_rgba(Hsla::new(240.0, 100.0, 50.0, 0.25)),
        Rgba::new(0, 0, 255, 0.25)
    );
}

#[test]
fn test_hsla_to_rgba_extremes() {
    assert_eq!(
        hsla_to_rgba(Hsla::new(200.0, 80.0, 0.0, 1.0)),
        Rgba::opaque(0, 0, 0)
    );
    assert_eq!(
        hsla_to_rgba(Hsla::new(200.0, 80.0, 100.0, 1.0)),
        Rgba::opaque(255, 255, 255)
    );
}

// ============================================================================
// Hex
// ============================================================================

#[test]
fn test_hex_to_rgba_forms() {
    assert_eq!(hex_to_rgba("#ff5500"), Some(Rgba::opaque(255, 85, 0)));
    assert_eq!(hex_to_rgba("#f50"), Some(Rgba::opaque(255, 85, 0)));
    assert_eq!(hex_to_rgba("FF5500"), Some(Rgba::opaque(255, 85, 0)));
    assert_eq!(hex_to_rgba("#ff550080"), Some(Rgba::new(255, 85, 0, 0.5)));
}

#[test]
fn test_hex_to_rgba_rejects_bad_input() {
    assert_eq!(hex_to_rgba(""), None);
    assert_eq!(hex_to_rgba("#"), None);
    assert_eq!(hex_to_rgba("#ff55"), None);
    assert_eq!(hex_to_rgba("#gggggg"), None);
    assert_eq!(hex_to_rgba("#ff5500ff00"), None);
}

#[test]
fn test_rgba_to_hex_omits_opaque_alpha() {
    assert_eq!(rgba_to_hex(Rgba::opaque(255, 85, 0)), "#ff5500");
    assert_eq!(rgba_to_hex(Rgba::new(255, 85, 0, 0.5)), "#ff550080");
    assert_eq!(rgba_to_hex(Rgba::new(0, 0, 0, 0.0)), "#00000000");
}

#[test]
fn test_hex_round_trip_with_alpha() {
    for hundredths in 0..100 {
        let a = f64::from(hundredths) / 100.0;
        let rgba = Rgba::new(12, 200, 99, a);
        assert_eq!(hex_to_rgba(&rgba_to_hex(rgba)), Some(rgba), "alpha {a}");
    }
}

#[test]
fn test_hex_round_trip_opaque() {
    let rgba = Rgba::opaque(1, 2, 3);
    let hex = rgba_to_hex(rgba);
    assert_eq!(hex.len(), 7);
    assert_eq!(hex_to_rgba(&hex).map(|c| c.a), Some(1.0));
}

// ============================================================================
// Display format
// ============================================================================

#[test]
fn test_display_format_detect() {
    assert_eq!(DisplayFormat::detect("rgba(1, 2, 3, 1)"), DisplayFormat::Rgb);
    assert_eq!(DisplayFormat::detect("rgb(1, 2, 3)"), DisplayFormat::Rgb);
    assert_eq!(DisplayFormat::detect("HSL(1, 2%, 3%)"), DisplayFormat::Hsl);
    assert_eq!(DisplayFormat::detect("#abcdef"), DisplayFormat::Hex);
    assert_eq!(DisplayFormat::detect("banana"), DisplayFormat::Hex);
    assert_eq!(DisplayFormat::detect(""), DisplayFormat::Hex);
}

#[test]
fn test_display_format_renders_each_shape() {
    let orange = Rgba::opaque(255, 85, 0);
    assert_eq!(DisplayFormat::Hex.format(orange), "#ff5500");
    assert_eq!(DisplayFormat::Rgb.format(orange), "rgba(255, 85, 0, 1)");
    assert_eq!(DisplayFormat::Hsl.format(orange), "hsla(20, 100%, 50%, 1)");
}

#[test]
fn test_css_serialization() {
    assert_eq!(Rgba::new(10, 20, 30, 0.5).to_css(), "rgba(10, 20, 30, 0.5)");
    assert_eq!(
        Hsla::new(200.0, 50.0, 40.0, 1.0).to_css(),
        "hsla(200, 50%, 40%, 1)"
    );
}

#[test]
fn test_display_format_serde_names() {
    let json = serde_json::to_string(&DisplayFormat::Hsl).unwrap();
    assert_eq!(json, "\"hsl\"");
    let format: DisplayFormat = serde_json::from_str("\"rgb\"").unwrap();
    assert_eq!(format, DisplayFormat::Rgb);
}
