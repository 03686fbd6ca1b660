use hexsurf::{
    ColourMapType, ColourOrder, Error, FieldConfig, GridConfig, LinearScale,
    MeshStyle, RenderConfig, Surface, SurfaceConfig, SurfaceRenderer,
};
use validator::ValidationErrors;

/// Grab the sorted names of the top-level fields that failed validation
fn error_fields(err: Error) -> (Vec<&'static str>, ValidationErrors) {
    let validation_errors = match err {
        Error::InvalidConfig(errors) => errors,
        other => panic!("expected validation errors, got {:?}", other),
    };
    let mut error_fields = validation_errors
        .errors()
        .keys()
        .copied()
        .collect::<Vec<&str>>();
    error_fields.sort_unstable();
    (error_fields, validation_errors)
}

#[test]
fn test_surface_config_validation() {
    let config = SurfaceConfig {
        grid: GridConfig {
            radius: 201,      // invalid (too big)
            hex_spacing: 0.0, // invalid
        },
        field: FieldConfig {
            seed: 0,
            octaves: 0,        // invalid
            frequency: -1.0,   // invalid
            lacunarity: -1.0,  // valid (but weird)
            persistence: -1.0, // valid (but weird)
            exponent: 1.0,     // valid
        },
        render: RenderConfig::default(),
    };

    // This is a bit of a lazy check but it works well enough
    let (fields, validation_errors) =
        error_fields(Surface::generate(config).unwrap_err());
    assert_eq!(
        fields,
        vec!["field", "grid"],
        "incorrect validation errors in {:#?}",
        validation_errors
    );
}

#[test]
fn test_render_config_validation() {
    let render_config = RenderConfig {
        colour_map: ColourMapType::Monochrome, // valid
        hue: -0.5,                             // invalid
        colour_order: ColourOrder::Bgr,        // valid
        scale: LinearScale::IDENTITY,          // valid
        mesh_style: MeshStyle::Hexes,          // valid
    };

    let (fields, validation_errors) =
        error_fields(SurfaceRenderer::new(render_config).unwrap_err());
    assert_eq!(
        fields,
        vec!["hue"],
        "incorrect validation errors in {:#?}",
        validation_errors
    );
}

#[test]
fn test_config_from_json() {
    let config: SurfaceConfig = serde_json::from_str(
        r#"{
            "grid": {"radius": 3},
            "field": {"seed": "hello"},
            "render": {"colour_map": "monochrome_green", "mesh_style": "triangles"}
        }"#,
    )
    .unwrap();
    assert_eq!(config.grid.radius, 3);
    // Missing fields fall back to defaults
    assert_eq!(config.grid.hex_spacing, GridConfig::default().hex_spacing);
    // Non-numeric seeds get hashed
    assert_ne!(config.field.seed, 0);
    assert_eq!(config.render.colour_map, ColourMapType::MonochromeGreen);
    assert_eq!(config.render.mesh_style, MeshStyle::Triangles);

    let surface = Surface::generate(config).unwrap();
    assert_eq!(surface.data().len(), 37);
}

#[test]
fn test_numeric_string_seed() {
    let config: FieldConfig =
        serde_json::from_str(r#"{"seed": "1234"}"#).unwrap();
    assert_eq!(config.seed, 1234);
    assert!(serde_json::from_str::<FieldConfig>(r#"{"seed": -1}"#).is_err());
}
