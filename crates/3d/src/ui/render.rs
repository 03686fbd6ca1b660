use crate::ui::{enum_radio_select, section};
use bevy::{ecs::error::Result, prelude::ResMut};
use bevy_egui::{
    egui::{Slider, Ui, Window},
    EguiContexts,
};
use hexsurf::{
    ColourMapType, ColourOrder, MeshStyle, RenderConfig, SurfaceConfig,
};
use strum::IntoEnumIterator;

/// UI for editing render config
pub fn render_config_ui(
    mut contexts: EguiContexts,
    mut surface_config: ResMut<SurfaceConfig>,
) -> Result {
    // Edit a copy, so we only trigger change detection (and a mesh rebuild)
    // when something actually changed
    let mut render_config = surface_config.render;

    Window::new("Render Config")
        .vscroll(true)
        .show(contexts.ctx_mut()?, |ui| {
            controls_ui(ui, &mut render_config);
            if ui.button("Reset to Default").clicked() {
                render_config = RenderConfig::default();
            }
        });

    if render_config != surface_config.render {
        surface_config.render = render_config;
    }
    Ok(())
}

fn controls_ui(ui: &mut Ui, render_config: &mut RenderConfig) {
    // ===== Colour =====
    ui.scope(section("Colour Map", |ui| {
        ui.vertical(enum_radio_select(
            &mut render_config.colour_map,
            ColourMapType::iter(),
        ));

        // Fixed-hue schemes ignore this, so don't pretend it does anything
        ui.add_enabled(
            render_config.colour_map.accepts_hue(),
            Slider::new(&mut render_config.hue, 0.0..=1.0)
                .step_by(0.01)
                .text("Hue"),
        );

        ui.label("Channel Order");
        ui.horizontal(enum_radio_select(
            &mut render_config.colour_order,
            ColourOrder::iter(),
        ));
    }));

    // ===== Scale =====
    ui.scope(section("Scale", |ui| {
        let scale = &mut render_config.scale;
        ui.add(
            Slider::new(&mut scale.height_gradient, -2.0..=2.0)
                .step_by(0.05)
                .text("Height Gradient"),
        );
        ui.add(
            Slider::new(&mut scale.height_offset, -2.0..=2.0)
                .step_by(0.05)
                .text("Height Offset"),
        );
        ui.add(
            Slider::new(&mut scale.colour_gradient, -5.0..=5.0)
                .step_by(0.05)
                .text("Colour Gradient"),
        );
        ui.add(
            Slider::new(&mut scale.colour_offset, -2.0..=2.0)
                .step_by(0.05)
                .text("Colour Offset"),
        );
    }));

    // ===== Mesh =====
    ui.scope(section("Mesh Style", |ui| {
        ui.horizontal(enum_radio_select(
            &mut render_config.mesh_style,
            MeshStyle::iter(),
        ));
    }));
}
