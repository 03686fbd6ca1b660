use crate::ui::section;
use bevy::{
    ecs::error::Result,
    prelude::{trace, Res, ResMut, Resource},
};
use bevy_egui::{
    egui::{DragValue, Slider, Ui, Window},
    EguiContexts,
};
use hexsurf::SurfaceConfig;
use std::ops::{Deref, RangeInclusive};

/// Standard slider range for exponent fields
const EXPONENT_RANGE: RangeInclusive<f64> = 0.0..=3.0;
/// Standard slider step size for exponent fields
const EXPONENT_STEP: f64 = 0.1;

#[derive(Default, Resource)]
pub struct SurfaceConfigUiState {
    /// Raw JSON editor for the surface config
    config_json: String,
}

impl SurfaceConfigUiState {
    /// Reset UI state to match the current surface config
    fn reset(&mut self, surface_config: &SurfaceConfig) {
        // Serializing a config can't fail, it's all numbers and enums
        self.config_json =
            serde_json::to_string_pretty(surface_config).unwrap_or_default();
    }
}

/// Initialize UI state to match the initial surface config
pub(super) fn init_surface_config_ui(
    surface_config: Res<SurfaceConfig>,
    mut ui_state: ResMut<SurfaceConfigUiState>,
) {
    ui_state.reset(&surface_config);
}

/// UI for editing the grid and field config, plus a raw JSON editor for the
/// whole surface config
pub(super) fn surface_config_ui(
    mut contexts: EguiContexts,
    mut surface_config: ResMut<SurfaceConfig>,
    mut ui_state: ResMut<SurfaceConfigUiState>,
) -> Result {
    // Did the JSON editor change on this frame?
    let mut json_changed = false;

    // Any mutable access to the config will mark it as changed, which
    // triggers a rebuild. Edit a copy and only write it back if it differs.
    let mut controls_config = *surface_config;

    Window::new("Surface Config")
        .vscroll(true)
        .show(contexts.ctx_mut()?, |ui| {
            ui.collapsing("JSON", |ui| {
                json_changed =
                    ui.text_edit_multiline(&mut ui_state.config_json).changed();
            });

            controls_ui(ui, &mut controls_config);

            if ui.button("Reset to Default").clicked() {
                controls_config = SurfaceConfig::default();
            }
        });

    if surface_config.deref() != &controls_config {
        *surface_config = controls_config;
        trace!("Surface config changed, syncing JSON text: {surface_config:?}");
        ui_state.reset(&surface_config);
    } else if json_changed {
        // If deserialization fails, assume the user is still typing
        if let Ok(deserialized_config) =
            serde_json::from_str(&ui_state.config_json)
        {
            trace!(
                "JSON text changed, using deserialized config: {:?}",
                deserialized_config
            );
            *surface_config = deserialized_config;
        }
    }
    Ok(())
}

fn controls_ui(ui: &mut Ui, surface_config: &mut SurfaceConfig) {
    // ===== Grid =====
    ui.scope(section("Grid", |ui| {
        ui.add(
            Slider::new(&mut surface_config.grid.radius, 0..=200)
                .step_by(1.0)
                .text("Radius"),
        );
        ui.add(
            Slider::new(&mut surface_config.grid.hex_spacing, 0.01..=1.0)
                .step_by(0.01)
                .text("Hex Spacing"),
        );
    }));

    // ===== Field =====
    ui.scope(section("Field", |ui| {
        let field = &mut surface_config.field;
        ui.horizontal(|ui| {
            ui.label("Seed");
            ui.add(DragValue::new(&mut field.seed));
        });

        ui.add(
            Slider::new(&mut field.octaves, 1..=10)
                .step_by(1.0)
                .text("Octaves"),
        );
        ui.add(
            Slider::new(&mut field.frequency, 0.1..=5.0)
                .step_by(0.1)
                .text("Frequency"),
        );
        ui.add(
            Slider::new(&mut field.lacunarity, 0.5..=10.0)
                .step_by(0.5)
                .text("Lacunarity"),
        );
        ui.add(
            Slider::new(&mut field.persistence, 0.0..=2.0)
                .step_by(0.1)
                .text("Persistence"),
        );
        ui.add(
            Slider::new(&mut field.exponent, EXPONENT_RANGE)
                .step_by(EXPONENT_STEP)
                .text("Exponent"),
        );
    }));
}
