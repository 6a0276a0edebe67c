use swatch::color::parse::{
    is_color_string, parse_hsla, parse_hsla_components, parse_rgba, parse_rgba_components,
    HslaComponents, RgbaComponents,
};
use swatch::{Hsla, ParseColorError, Rgba};

fn rgba_fields(r: &str, g: &str, b: &str, a: &str) -> RgbaComponents {
    RgbaComponents {
        r: r.to_string(),
        g: g.to_string(),
        b: b.to_string(),
        a: a.to_string(),
    }
}

fn hsla_fields(h: &str, s: &str, l: &str, a: &str) -> HslaComponents {
    HslaComponents {
        h: h.to_string(),
        s: s.to_string(),
        l: l.to_string(),
        a: a.to_string(),
    }
}

// ============================================================================
// Tolerant RGBA
// ============================================================================

#[test]
fn test_parse_rgba_components_direct_match() {
    assert_eq!(
        parse_rgba_components("rgba(10,20,30,0.5)"),
        rgba_fields("10", "20", "30", "0.5")
    );
    assert_eq!(
        parse_rgba_components("rgb(10, 20, 30)"),
        rgba_fields("10", "20", "30", "1")
    );
}

#[test]
fn test_parse_rgba_components_empty_groups_default() {
    assert_eq!(parse_rgba_components("rgb(,,)"), rgba_fields("0", "0", "0", "1"));
    assert_eq!(
        parse_rgba_components("rgba(5, , 7, )"),
        rgba_fields("5", "0", "7", "1")
    );
}

#[test]
fn test_parse_rgba_components_falls_back_to_hex() {
    assert_eq!(
        parse_rgba_components("#ff5500"),
        rgba_fields("255", "85", "0", "1")
    );
    assert_eq!(
        parse_rgba_components("#ff550080"),
        rgba_fields("255", "85", "0", "0.5")
    );
}

#[test]
fn test_parse_rgba_components_falls_back_to_hsl() {
    assert_eq!(
        parse_rgba_components("hsl(120, 100%, 50%)"),
        rgba_fields("0", "255", "0", "1")
    );
}

#[test]
fn test_parse_rgba_components_garbage_is_black() {
    assert_eq!(
        parse_rgba_components("not-a-color"),
        rgba_fields("0", "0", "0", "1")
    );
    assert_eq!(parse_rgba_components(""), rgba_fields("0", "0", "0", "1"));
}

#[test]
fn test_parse_rgba_clamps_channels() {
    assert_eq!(parse_rgba("rgba(300, 20, 20, 2)"), Rgba::opaque(255, 20, 20));
    assert_eq!(parse_rgba("rgba(10.6, 20, 20, 0.333)"), Rgba::new(11, 20, 20, 0.33));
}

// ============================================================================
// Tolerant HSLA
// ============================================================================

#[test]
fn test_parse_hsla_components_direct_match() {
    assert_eq!(
        parse_hsla_components("hsla(200, 50%, 40%, 0.3)"),
        hsla_fields("200", "50", "40", "0.3")
    );
    assert_eq!(
        parse_hsla_components("hsl(200deg, 50%, 40%)"),
        hsla_fields("200", "50", "40", "1")
    );
}

#[test]
fn test_parse_hsla_components_falls_back_to_hex_and_rgb() {
    assert_eq!(
        parse_hsla_components("#ff5500"),
        hsla_fields("20", "100", "50", "1")
    );
    assert_eq!(
        parse_hsla_components("rgba(255, 85, 0, 0.5)"),
        hsla_fields("20", "100", "50", "0.5")
    );
}

#[test]
fn test_parse_hsla_components_garbage_is_black() {
    assert_eq!(
        parse_hsla_components("garbage"),
        hsla_fields("0", "0", "0", "1")
    );
}

#[test]
fn test_parse_hsla_clamps_fields() {
    assert_eq!(
        parse_hsla("hsla(400, 150%, 40%, 1)"),
        Hsla::new(360.0, 100.0, 40.0, 1.0)
    );
}

// ============================================================================
// Sniffing
// ============================================================================

#[test]
fn test_is_color_string() {
    assert!(is_color_string("#fff"));
    assert!(is_color_string("#ff5500"));
    assert!(is_color_string("#ff550080"));
    assert!(is_color_string("rgb(1, 2, 3)"));
    assert!(is_color_string("hsla(1, 2%, 3%, 0.4)"));
    assert!(is_color_string("  #abc  "));

    assert!(!is_color_string("#ff"));
    assert!(!is_color_string("ff5500"));
    assert!(!is_color_string("banana"));
    assert!(!is_color_string(""));
}

// ============================================================================
// Strict parsing
// ============================================================================

#[test]
fn test_strict_parse_accepts_every_shape() {
    assert_eq!("#ff5500".parse::<Rgba>(), Ok(Rgba::opaque(255, 85, 0)));
    assert_eq!("ff5500".parse::<Rgba>(), Ok(Rgba::opaque(255, 85, 0)));
    assert_eq!(
        "rgba(255, 85, 0, 0.5)".parse::<Rgba>(),
        Ok(Rgba::new(255, 85, 0, 0.5))
    );
    assert_eq!(
        "hsl(120, 100%, 50%)".parse::<Rgba>(),
        Ok(Rgba::opaque(0, 255, 0))
    );
}

#[test]
fn test_strict_parse_errors() {
    assert_eq!("".parse::<Rgba>(), Err(ParseColorError::Empty));
    assert_eq!(
        "nope".parse::<Rgba>(),
        Err(ParseColorError::Unrecognized("nope".to_string()))
    );
    assert_eq!(
        "#ff55".parse::<Rgba>(),
        Err(ParseColorError::Unrecognized("#ff55".to_string()))
    );
    assert!(matches!(
        "rgb(256, 0, 0)".parse::<Rgba>(),
        Err(ParseColorError::OutOfRange { component: "red", .. })
    ));
    assert!(matches!(
        "rgba(0, 0, 0, 1.5)".parse::<Rgba>(),
        Err(ParseColorError::OutOfRange { component: "alpha", .. })
    ));
}

#[test]
fn test_parse_error_messages() {
    let err = "rgb(256, 0, 0)".parse::<Rgba>().unwrap_err();
    assert_eq!(err.to_string(), "red out of range: 256 (expected 0..=255)");
    assert_eq!(ParseColorError::Empty.to_string(), "empty color string");
}
