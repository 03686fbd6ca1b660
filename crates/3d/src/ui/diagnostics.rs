use bevy::{
    diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin},
    ecs::error::Result,
    prelude::Res,
};
use bevy_egui::{
    egui::{Align2, Area, Color32, Id, TextWrapMode},
    EguiContexts,
};

/// Frame rate overlay in the top right corner
pub fn diagnostics_ui(
    mut contexts: EguiContexts,
    diagnostics: Res<DiagnosticsStore>,
) -> Result {
    Area::new(Id::new("diagnostics"))
        .anchor(Align2::RIGHT_TOP, (0.0, 0.0))
        .movable(false)
        .show(contexts.ctx_mut()?, |ui| {
            ui.visuals_mut().override_text_color = Some(Color32::WHITE);
            ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);

            if let Some(fps) = diagnostics
                .get(&FrameTimeDiagnosticsPlugin::FPS)
                .and_then(|fps| fps.smoothed())
            {
                ui.label(format!("{fps:.1} FPS"));
            }
        });
    Ok(())
}
