mod camera;
mod surface;
mod ui;

use crate::{camera::CameraPlugin, surface::SurfacePlugin, ui::UiPlugin};
use bevy::{
    diagnostic::FrameTimeDiagnosticsPlugin,
    log::LogPlugin,
    prelude::{default, App, PluginGroup, Window, WindowPlugin},
    DefaultPlugins,
};

fn main() {
    App::new()
        .add_plugins(
            DefaultPlugins
                .set(LogPlugin {
                    filter: "info,wgpu_core=warn,wgpu_hal=warn,hexsurf=debug,\
                        hexsurf_3d=debug"
                        .into(),
                    level: bevy::log::Level::DEBUG,
                    ..default()
                })
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Hexsurf".into(),
                        ..default()
                    }),
                    ..default()
                }),
        )
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        .add_plugins((UiPlugin, SurfacePlugin, CameraPlugin))
        .run();
}
