//! End-to-end checks of the public API surface, the way a UI caller uses it.

use color_shades::{
    Mode, ShadeRequest, best_text_color, contrast_ratio_display, generate_shades, parse_color,
    random_hex,
};

#[test]
fn random_base_color_flows_through_generation_and_display() {
    let base = random_hex();

    let shades = generate_shades(&ShadeRequest::basic(&base, 12)).expect("valid random base");
    assert_eq!(shades.len(), 12);

    for shade in shades {
        // Every shade must be displayable: four formats, a text color, and a
        // contrast ratio against that text color.
        let formats = shade.formats();
        assert_eq!(formats.hex, shade.hex());
        assert!(formats.rgb.starts_with("rgb("));
        assert!(formats.hsl.starts_with("hsl("));
        assert!(formats.hsv.starts_with("hsv("));

        let text = best_text_color(shade);
        let ratio: f32 = contrast_ratio_display(shade, text.color())
            .parse()
            .expect("two-decimal ratio");
        assert!((1.0..=21.0).contains(&ratio));
    }
}

#[test]
fn shade_request_deserializes_from_ui_json() {
    let request: ShadeRequest = serde_json::from_str(
        r##"{"base_color": "#b656cd", "count": 25, "mode": "tinted", "hue": 200, "saturation_mod": 70}"##,
    )
    .unwrap();
    assert_eq!(request.mode, Mode::Tinted);

    let shades = generate_shades(&request).unwrap();
    assert_eq!(shades.first().unwrap().hex(), "#ffffff");
    assert_eq!(shades.last().unwrap().hex(), "#000000");
}

#[test]
fn invalid_input_fails_without_side_effects() {
    assert!(parse_color("definitely-not-a-color").is_err());
    let result = generate_shades(&ShadeRequest::basic("definitely-not-a-color", 10));
    assert!(result.is_err());
}

#[test]
fn same_request_yields_the_same_palette() {
    let request = ShadeRequest::tinted("#3498db", 30, 320, 120);
    assert_eq!(
        generate_shades(&request).unwrap(),
        generate_shades(&request).unwrap()
    );
}
