mod diagnostics;
mod render;
mod surface;

use crate::ui::surface::SurfaceConfigUiState;
use bevy::prelude::{App, IntoScheduleConfigs, Plugin, Startup};
use bevy_egui::{
    egui::{RichText, Ui},
    EguiPlugin, EguiPrimaryContextPass,
};
use std::fmt::Display;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin::default())
            .init_resource::<SurfaceConfigUiState>()
            .add_systems(Startup, surface::init_surface_config_ui)
            .add_systems(
                EguiPrimaryContextPass,
                (
                    surface::surface_config_ui,
                    render::render_config_ui,
                    diagnostics::diagnostics_ui,
                )
                    .chain(),
            );
    }
}

/// Create a radio select widget for an enum. There will be one option for each
/// given enum variant.
fn enum_radio_select<'a, T: Display + PartialEq>(
    value: &'a mut T,
    options: impl Iterator<Item = T> + 'a,
) -> impl FnOnce(&mut Ui) + 'a {
    move |ui| {
        for option in options {
            let label = option.to_string();
            ui.radio_value::<T>(value, option, label);
        }
    }
}

fn section(
    heading: impl Into<String>,
    add_contents: impl FnOnce(&mut Ui),
) -> impl FnOnce(&mut Ui) {
    move |ui| {
        ui.group(|ui| {
            ui.label(RichText::new(heading).heading());
            add_contents(ui);
        });
    }
}
