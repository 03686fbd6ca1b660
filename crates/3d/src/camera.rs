use crate::surface::SurfaceModel;
use bevy::{
    app::AppExit,
    input::mouse::{MouseScrollUnit, MouseWheel},
    math::Mat4,
    prelude::{
        debug, default, App, ButtonInput, Camera3d, Commands, DetectChanges,
        IntoScheduleConfigs, KeyCode, MessageReader, MessageWriter,
        MouseButton, PerspectiveProjection, Plugin, Projection, Query, Res,
        ResMut, Resource, Startup, Transform, Update, With,
    },
    window::{CursorMoved, WindowResized},
};
use bevy_egui::input::EguiWantsInput;
use hexsurf::{InputEvent, ViewerButton, ViewerKey, ViewerState};

/// Scroll events measured in pixels get divided by this to approximate one
/// wheel notch
const PIXELS_PER_SCROLL_LINE: f32 = 20.0;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Viewer>()
            .add_systems(Startup, init_camera)
            .add_systems(
                Update,
                (forward_input, apply_view, exit_when_finished).chain(),
            );
    }
}

/// Wrapper to put the viewer's camera state into the ECS
#[derive(Debug, Default, Resource)]
struct Viewer(ViewerState);

/// The camera sits still at the origin, looking down -Z. All movement is
/// applied to the surface instead.
fn init_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: ViewerState::FOV,
            near: ViewerState::Z_NEAR,
            far: ViewerState::Z_FAR,
            ..default()
        }),
        Transform::default(),
    ));
}

/// Translate bevy input into viewer input events. Input that egui is using
/// (e.g. dragging a slider) doesn't reach the viewer.
#[allow(clippy::too_many_arguments)]
fn forward_input(
    mut viewer: ResMut<Viewer>,
    egui_wants_input: Res<EguiWantsInput>,
    keys: Res<ButtonInput<KeyCode>>,
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mut cursor_events: MessageReader<CursorMoved>,
    mut scroll_events: MessageReader<MouseWheel>,
    mut resize_events: MessageReader<WindowResized>,
) {
    let viewer = &mut viewer.0;

    for event in resize_events.read() {
        viewer.handle(InputEvent::Resized {
            width: event.width as u32,
            height: event.height as u32,
        });
    }

    // Cursor moves go first so a release in the same frame pans to the
    // latest position
    for event in cursor_events.read() {
        viewer.handle(InputEvent::CursorMoved {
            x: event.position.x,
            y: event.position.y,
        });
    }

    if !egui_wants_input.wants_any_pointer_input() {
        for (mouse_button, button) in [
            (MouseButton::Left, ViewerButton::Primary),
            (MouseButton::Right, ViewerButton::Secondary),
        ] {
            if mouse_buttons.just_pressed(mouse_button) {
                viewer.handle(InputEvent::MouseButton {
                    button,
                    pressed: true,
                });
            }
            if mouse_buttons.just_released(mouse_button) {
                viewer.handle(InputEvent::MouseButton {
                    button,
                    pressed: false,
                });
            }
        }

        for event in scroll_events.read() {
            let (dx, dy) = match event.unit {
                MouseScrollUnit::Line => (event.x, event.y),
                MouseScrollUnit::Pixel => (
                    event.x / PIXELS_PER_SCROLL_LINE,
                    event.y / PIXELS_PER_SCROLL_LINE,
                ),
            };
            viewer.handle(InputEvent::Scroll { dx, dy });
        }
    } else {
        // Drop scrolling that egui consumed
        scroll_events.clear();
    }

    if !egui_wants_input.wants_any_keyboard_input() {
        if keys.just_pressed(KeyCode::KeyX) || keys.just_pressed(KeyCode::Escape)
        {
            viewer.handle(InputEvent::Key(ViewerKey::Exit));
        }
        if keys.just_pressed(KeyCode::KeyA) {
            viewer.handle(InputEvent::Key(ViewerKey::ResetView));
        }
    }
}

/// Copy the viewer's model-view transform onto the surface
fn apply_view(
    viewer: Res<Viewer>,
    mut model_query: Query<&mut Transform, With<SurfaceModel>>,
) {
    if !viewer.is_changed() {
        return;
    }
    let model_view = viewer.0.model_view();
    let matrix = Mat4::from_cols_slice(model_view.as_slice());
    for mut transform in model_query.iter_mut() {
        *transform = Transform::from_matrix(matrix);
    }
}

fn exit_when_finished(
    viewer: Res<Viewer>,
    mut exit: MessageWriter<AppExit>,
) {
    if viewer.0.is_ready_to_finish() {
        debug!("Viewer finished, exiting");
        exit.write(AppExit::Success);
    }
}
