//! Camera bookkeeping for an interactive surface viewer.
//!
//! [ViewerState] owns the scene transform (translation + rotation) and the
//! projection, and updates them from plain [InputEvent] values. The windowing
//! layer holds the state and forwards each input event to
//! [ViewerState::handle], then reads the transforms back out when drawing.
//!
//! The camera sits at the origin looking down -Z. The scene is pushed away
//! from it by the scene translation, so zooming means moving the scene along
//! Z.

use crate::util::unit::Point2;
use log::{debug, warn};
use nalgebra::{
    Matrix4, Perspective3, Translation3, Unit, UnitQuaternion, Vector3,
    Vector4,
};
use std::f32::consts::FRAC_PI_2;

/// Keys the viewer reacts to. Mapping physical keys onto these is up to the
/// windowing layer.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ViewerKey {
    /// Ask the viewer to shut down
    Exit,
    /// Put the scene back where it started
    ResetView,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ViewerButton {
    /// Drag to rotate
    Primary,
    /// Drag and release to pan
    Secondary,
}

/// A single input event, in window coordinates (pixels, origin at the top
/// left, Y pointing down).
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// A key was pressed
    Key(ViewerKey),
    MouseButton { button: ViewerButton, pressed: bool },
    CursorMoved { x: f32, y: f32 },
    /// Scroll wheel or trackpad offsets, typically +/-1 per notch
    Scroll { dx: f32, dy: f32 },
    Resized { width: u32, height: u32 },
}

/// Interactive camera state. See the module-level docs.
#[derive(Clone, Debug)]
pub struct ViewerState {
    width: u32,
    height: u32,
    cursor: Point2,
    /// Where the cursor was when a button was last pressed
    press_position: Point2,
    /// Where the cursor was when we last applied a rotation step
    drag_anchor: Point2,
    rotate_mode: bool,
    translate_mode: bool,
    ready_to_finish: bool,

    scene_translation: Vector3<f32>,
    default_translation: Vector3<f32>,
    /// Distance the scene moves per scroll notch
    step_size: f32,
    rotation: UnitQuaternion<f32>,
    rotation_axis: Unit<Vector3<f32>>,
}

impl ViewerState {
    /// Vertical field of view, in radians
    pub const FOV: f32 = FRAC_PI_2;
    pub const Z_NEAR: f32 = 1.0;
    pub const Z_FAR: f32 = 8.0;
    /// Cursor travel (in pixels) that rotates the scene by one radian
    const ROTATION_DIVISOR: f32 = 100.0;

    pub fn new(width: u32, height: u32) -> Self {
        let default_translation = Vector3::new(0.0, 0.0, -5.0);
        Self {
            width,
            height,
            cursor: Point2::default(),
            press_position: Point2::default(),
            drag_anchor: Point2::default(),
            rotate_mode: false,
            translate_mode: false,
            ready_to_finish: false,
            scene_translation: default_translation,
            default_translation,
            step_size: 0.1,
            rotation: UnitQuaternion::identity(),
            rotation_axis: Vector3::z_axis(),
        }
    }

    /// Change the translation that the scene starts at, and returns to when the
    /// view is reset. This also moves the scene there immediately.
    pub fn with_default_translation(
        mut self,
        translation: Vector3<f32>,
    ) -> Self {
        self.default_translation = translation;
        self.scene_translation = translation;
        self
    }

    /// Change how far each scroll notch moves the scene
    pub fn with_step_size(mut self, step_size: f32) -> Self {
        self.step_size = step_size;
        self
    }

    /// Update the state from one input event
    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::Key(ViewerKey::Exit) => {
                debug!("Exit requested");
                self.ready_to_finish = true;
            }
            InputEvent::Key(ViewerKey::ResetView) => {
                debug!("Resetting to default view");
                self.reset_view();
            }
            InputEvent::MouseButton { button, pressed } => {
                self.on_button(button, pressed)
            }
            InputEvent::CursorMoved { x, y } => self.on_cursor_moved(x, y),
            InputEvent::Scroll { dx, dy } => self.on_scroll(dx, dy),
            InputEvent::Resized { width, height } => {
                self.width = width;
                self.height = height;
            }
        }
    }

    pub fn reset_view(&mut self) {
        self.scene_translation = self.default_translation;
        self.rotation = UnitQuaternion::identity();
    }

    fn on_button(&mut self, button: ViewerButton, pressed: bool) {
        if pressed {
            self.press_position = self.cursor;
            self.drag_anchor = self.cursor;
        } else if button == ViewerButton::Secondary {
            self.pan(self.cursor - self.press_position);
        }

        match button {
            ViewerButton::Primary => self.rotate_mode = pressed,
            ViewerButton::Secondary => self.translate_mode = pressed,
        }
    }

    fn on_cursor_moved(&mut self, x: f32, y: f32) {
        self.cursor = Point2::new(x, y);
        if self.rotate_mode {
            let diff = self.cursor - self.drag_anchor;
            self.drag_anchor = self.cursor;
            self.rotate(diff);
        }
    }

    /// Rotate about an axis perpendicular to the drag. The axis is blended
    /// into the previous one so successive steps of a drag are smooth.
    fn rotate(&mut self, diff: Point2) {
        let drag = Vector3::new(diff.y, diff.x, 0.0);
        let amount = drag.norm() / Self::ROTATION_DIVISOR;
        let n = match Unit::try_new(drag, f32::EPSILON) {
            Some(n) => n,
            None => return,
        };
        if let Some(axis) = Unit::try_new(
            self.rotation_axis.into_inner() + n.into_inner() * amount,
            f32::EPSILON,
        ) {
            self.rotation_axis = axis;
        }
        self.rotation =
            UnitQuaternion::from_axis_angle(&self.rotation_axis, amount)
                * self.rotation;
    }

    /// Move the scene by a cursor displacement, converted from pixels into
    /// scene units through the inverse of the current view-projection.
    fn pan(&mut self, diff: Point2) {
        let screen = Vector4::new(
            2.0 * diff.x / self.width.max(1) as f32,
            2.0 * diff.y / self.height.max(1) as f32,
            self.scene_translation.z,
            0.0,
        );
        match self.view_projection().try_inverse() {
            Some(inverse) => {
                let v = inverse * screen;
                self.scene_translation.x += v.x;
                self.scene_translation.y -= v.y;
                debug!("Panned to {:?}", self.scene_translation);
            }
            None => warn!("View-projection is singular, can't pan"),
        }
    }

    fn on_scroll(&mut self, dx: f32, dy: f32) {
        self.scene_translation.x -= dx * self.step_size;
        if self.translate_mode {
            self.scene_translation.y += dy * self.step_size;
        } else {
            self.scene_translation.z += dy * self.step_size;
        }
    }

    /// Has the user asked to close the viewer?
    pub fn is_ready_to_finish(&self) -> bool {
        self.ready_to_finish
    }

    pub fn scene_translation(&self) -> Vector3<f32> {
        self.scene_translation
    }

    pub fn rotation(&self) -> UnitQuaternion<f32> {
        self.rotation
    }

    pub fn window_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }

    pub fn projection(&self) -> Perspective3<f32> {
        Perspective3::new(self.aspect(), Self::FOV, Self::Z_NEAR, Self::Z_FAR)
    }

    /// The scene transform: rotate first, then translate away from the camera
    pub fn model_view(&self) -> Matrix4<f32> {
        Translation3::from(self.scene_translation).to_homogeneous()
            * self.rotation.to_homogeneous()
    }

    pub fn view_projection(&self) -> Matrix4<f32> {
        self.projection().as_matrix() * self.model_view()
    }
}

impl Default for ViewerState {
    fn default() -> Self {
        Self::new(800, 800)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    fn press(state: &mut ViewerState, button: ViewerButton, pressed: bool) {
        state.handle(InputEvent::MouseButton { button, pressed });
    }

    fn move_to(state: &mut ViewerState, x: f32, y: f32) {
        state.handle(InputEvent::CursorMoved { x, y });
    }

    #[test]
    fn test_exit() {
        let mut state = ViewerState::default();
        assert!(!state.is_ready_to_finish());
        state.handle(InputEvent::Key(ViewerKey::Exit));
        assert!(state.is_ready_to_finish());
    }

    #[test]
    fn test_scroll_zooms() {
        let mut state = ViewerState::default();
        state.handle(InputEvent::Scroll { dx: 0.0, dy: 1.0 });
        assert_approx_eq!(state.scene_translation().z, -4.9);
        state.handle(InputEvent::Scroll { dx: 2.0, dy: 0.0 });
        assert_approx_eq!(state.scene_translation().x, -0.2);
    }

    #[test]
    fn test_scroll_while_panning() {
        let mut state = ViewerState::default();
        press(&mut state, ViewerButton::Secondary, true);
        state.handle(InputEvent::Scroll { dx: 0.0, dy: 1.0 });
        assert_approx_eq!(state.scene_translation().y, 0.1);
        assert_approx_eq!(state.scene_translation().z, -5.0);
    }

    #[test]
    fn test_drag_rotates() {
        let mut state = ViewerState::default();
        move_to(&mut state, 100.0, 100.0);
        // Moving without a button held does nothing
        move_to(&mut state, 150.0, 100.0);
        assert_eq!(state.rotation(), UnitQuaternion::identity());

        press(&mut state, ViewerButton::Primary, true);
        move_to(&mut state, 200.0, 100.0);
        assert_approx_eq!(state.rotation().angle(), 0.5, 1e-4);
        press(&mut state, ViewerButton::Primary, false);

        let rotation = state.rotation();
        move_to(&mut state, 300.0, 300.0);
        assert_eq!(state.rotation(), rotation);
    }

    #[test]
    fn test_pan_on_release() {
        let mut state = ViewerState::new(400, 400);
        move_to(&mut state, 200.0, 200.0);
        press(&mut state, ViewerButton::Secondary, true);
        // Half the window to the right. The camera has a 90° fov on a square
        // window, so that's one unit of scene space.
        move_to(&mut state, 400.0, 200.0);
        assert_approx_eq!(state.scene_translation().x, 0.0);
        press(&mut state, ViewerButton::Secondary, false);
        assert_approx_eq!(state.scene_translation().x, 1.0, 1e-4);
        assert_approx_eq!(state.scene_translation().y, 0.0, 1e-4);
        assert_approx_eq!(state.scene_translation().z, -5.0);
    }

    #[test]
    fn test_reset_view() {
        let mut state = ViewerState::default();
        press(&mut state, ViewerButton::Primary, true);
        move_to(&mut state, 30.0, 40.0);
        state.handle(InputEvent::Scroll { dx: 1.0, dy: 3.0 });
        assert_ne!(state.rotation(), UnitQuaternion::identity());

        state.handle(InputEvent::Key(ViewerKey::ResetView));
        assert_eq!(state.rotation(), UnitQuaternion::identity());
        assert_eq!(state.scene_translation(), Vector3::new(0.0, 0.0, -5.0));
    }

    #[test]
    fn test_resize() {
        let mut state = ViewerState::new(100, 100);
        assert_approx_eq!(state.aspect(), 1.0);
        state.handle(InputEvent::Resized {
            width: 200,
            height: 100,
        });
        assert_eq!(state.window_size(), (200, 100));
        assert_approx_eq!(state.aspect(), 2.0);
        // A minimized window shouldn't divide by zero
        state.handle(InputEvent::Resized {
            width: 200,
            height: 0,
        });
        assert!(state.aspect().is_finite());
    }
}
