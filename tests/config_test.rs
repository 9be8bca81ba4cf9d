//! Settings: compiled defaults and TOML overlays

use astview::Settings;

#[test]
fn given_no_overrides_when_loading_defaults_then_classic_diagram_style_applies() {
    let settings = Settings::default();

    assert_eq!(settings.canvas.width, 800.0);
    assert_eq!(settings.canvas.height, 600.0);
    assert_eq!(settings.box_spec.width, 150.0);
    assert_eq!(settings.box_spec.height, 50.0);
    assert_eq!(settings.box_spec.corner_radius, 10.0);
    assert_eq!(settings.margin, 20.0);
    assert_eq!(settings.font_size, 12.0);
    assert_eq!(settings.palette.fill, "#3AA");
    assert_eq!(settings.palette.stroke, "#FFF");
    assert_eq!(settings.palette.text, "#FFF");
    assert_eq!(settings.palette.line, "#CCC");
}

#[test]
fn given_partial_toml_when_deserializing_then_missing_keys_keep_defaults() {
    let settings: Settings = toml::from_str(
        r##"
        margin = 40.0

        [palette]
        fill = "#000"
        "##,
    )
    .unwrap();

    assert_eq!(settings.margin, 40.0);
    assert_eq!(settings.palette.fill, "#000");
    assert_eq!(settings.palette.stroke, "#FFF");
    assert_eq!(settings.box_spec.width, 150.0);
}

#[test]
fn given_box_section_when_deserializing_then_it_maps_to_box_spec() {
    let settings: Settings = toml::from_str(
        r#"
        [box]
        width = 100.0
        "#,
    )
    .unwrap();

    assert_eq!(settings.box_spec.width, 100.0);
    assert_eq!(settings.box_spec.height, 50.0);
}

#[test]
fn given_settings_when_round_tripping_through_toml_then_they_are_unchanged() {
    let settings = Settings::default();
    let serialized = toml::to_string(&settings).unwrap();
    let restored: Settings = toml::from_str(&serialized).unwrap();
    assert_eq!(restored, settings);
}

#[test]
fn given_settings_when_building_layout_context_then_dimensions_carry_over() {
    let mut settings = Settings::default();
    settings.canvas.width = 1024.0;
    settings.margin = 30.0;

    let context = settings.layout_context();
    assert_eq!(context.canvas.width, 1024.0);
    assert_eq!(context.margin, 30.0);
    assert_eq!(context.box_spec, settings.box_spec);
}
