use glam::Vec3;
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton, MouseScrollDelta};

use crate::camera::Camera;

/// Fraction of the remaining distance to the target covered per update.
pub const DAMPING_FACTOR: f32 = 0.05;

/// Radians of orbit per pixel of pointer drag.
const ROTATE_SPEED: f32 = 0.005;

/// Zoom multiplier per scroll-wheel line.
const ZOOM_STEP: f32 = 0.95;

/// Keep the pitch off the poles so the view basis stays well-defined.
const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.01;

const MIN_DISTANCE: f32 = 0.2;
const MAX_DISTANCE: f32 = 20.0;

/// Orbit controls: pointer drag rotates the camera around a fixed target,
/// scroll zooms. Input moves *target* angles; `update` eases the live
/// angles toward them each frame, which gives the inertial feel.
pub struct OrbitControls {
    yaw: f32,
    pitch: f32,
    distance: f32,

    target_yaw: f32,
    target_pitch: f32,
    target_distance: f32,

    dragging: bool,
    last_cursor: Option<PhysicalPosition<f64>>,
}

impl OrbitControls {
    /// Start orbiting from the camera's current position around its target.
    pub fn new(camera: &Camera) -> Self {
        let offset = camera.position - camera.target;
        let distance = offset.length().max(MIN_DISTANCE);
        let yaw = offset.x.atan2(offset.z);
        let pitch = (offset.y / distance).clamp(-1.0, 1.0).asin();

        Self {
            yaw,
            pitch,
            distance,
            target_yaw: yaw,
            target_pitch: pitch,
            target_distance: distance,
            dragging: false,
            last_cursor: None,
        }
    }

    pub fn on_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        if button == MouseButton::Left {
            self.dragging = state.is_pressed();
            if !self.dragging {
                self.last_cursor = None;
            }
        }
    }

    pub fn on_cursor_moved(&mut self, position: PhysicalPosition<f64>) {
        if self.dragging {
            if let Some(last) = self.last_cursor {
                let dx = (position.x - last.x) as f32;
                let dy = (position.y - last.y) as f32;
                self.target_yaw -= dx * ROTATE_SPEED;
                self.target_pitch = (self.target_pitch + dy * ROTATE_SPEED)
                    .clamp(-PITCH_LIMIT, PITCH_LIMIT);
            }
        }
        self.last_cursor = Some(position);
    }

    pub fn on_scroll(&mut self, delta: MouseScrollDelta) {
        let lines = match delta {
            MouseScrollDelta::LineDelta(_, y) => y,
            MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 50.0,
        };
        self.target_distance =
            (self.target_distance * ZOOM_STEP.powf(lines)).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    /// Advance the orbit state one step toward its targets and reposition
    /// the camera. Called once per rendered frame.
    pub fn update(&mut self, camera: &mut Camera) {
        self.yaw += (self.target_yaw - self.yaw) * DAMPING_FACTOR;
        self.pitch += (self.target_pitch - self.pitch) * DAMPING_FACTOR;
        self.distance += (self.target_distance - self.distance) * DAMPING_FACTOR;

        let offset = Vec3::new(
            self.pitch.cos() * self.yaw.sin(),
            self.pitch.sin(),
            self.pitch.cos() * self.yaw.cos(),
        ) * self.distance;

        camera.position = camera.target + offset;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera {
        Camera::new(16.0 / 9.0)
    }

    fn drag(controls: &mut OrbitControls, from: (f64, f64), to: (f64, f64)) {
        controls.on_mouse_button(MouseButton::Left, ElementState::Pressed);
        controls.on_cursor_moved(PhysicalPosition::new(from.0, from.1));
        controls.on_cursor_moved(PhysicalPosition::new(to.0, to.1));
        controls.on_mouse_button(MouseButton::Left, ElementState::Released);
    }

    #[test]
    fn idle_controls_leave_camera_in_place() {
        let mut camera = camera();
        let mut controls = OrbitControls::new(&camera);
        let before = camera.position;
        for _ in 0..10 {
            controls.update(&mut camera);
        }
        assert!((camera.position - before).length() < 1e-5);
    }

    #[test]
    fn drag_orbits_toward_target_with_damping() {
        let mut camera = camera();
        let mut controls = OrbitControls::new(&camera);
        drag(&mut controls, (100.0, 100.0), (300.0, 100.0));

        controls.update(&mut camera);
        let after_one = camera.position;
        // One step only covers the damping fraction of the requested orbit.
        assert!((after_one - Vec3::new(0.0, 0.0, 1.5)).length() > 1e-4);

        for _ in 0..500 {
            controls.update(&mut camera);
        }
        // Converged: a -1 radian yaw at distance 1.5 around the origin.
        let expected_yaw = -200.0 * ROTATE_SPEED;
        let expected = Vec3::new(expected_yaw.sin(), 0.0, expected_yaw.cos()) * 1.5;
        assert!((camera.position - expected).length() < 1e-3);
    }

    #[test]
    fn distance_from_target_is_preserved_while_orbiting() {
        let mut camera = camera();
        let mut controls = OrbitControls::new(&camera);
        drag(&mut controls, (0.0, 0.0), (150.0, 80.0));
        for _ in 0..50 {
            controls.update(&mut camera);
            let d = (camera.position - camera.target).length();
            assert!((d - 1.5).abs() < 1e-4);
        }
    }

    #[test]
    fn pitch_is_clamped_short_of_the_pole() {
        let mut camera = camera();
        let mut controls = OrbitControls::new(&camera);
        // Huge vertical drag, far past the pole.
        drag(&mut controls, (0.0, 0.0), (0.0, 10000.0));
        for _ in 0..1000 {
            controls.update(&mut camera);
        }
        let offset = camera.position - camera.target;
        // Horizontal component never collapses to zero.
        assert!(Vec3::new(offset.x, 0.0, offset.z).length() > 1e-3);
    }

    #[test]
    fn scroll_zooms_in_and_clamps() {
        let mut camera = camera();
        let mut controls = OrbitControls::new(&camera);

        controls.on_scroll(MouseScrollDelta::LineDelta(0.0, 3.0));
        for _ in 0..500 {
            controls.update(&mut camera);
        }
        let d = (camera.position - camera.target).length();
        assert!(d < 1.5);
        assert!((d - 1.5 * ZOOM_STEP.powi(3)).abs() < 1e-3);

        // Zooming out a huge amount hits the clamp.
        controls.on_scroll(MouseScrollDelta::LineDelta(0.0, -10000.0));
        for _ in 0..2000 {
            controls.update(&mut camera);
        }
        let d = (camera.position - camera.target).length();
        assert!(d <= MAX_DISTANCE + 1e-2);
    }

    #[test]
    fn cursor_moves_without_drag_do_nothing() {
        let mut camera = camera();
        let mut controls = OrbitControls::new(&camera);
        controls.on_cursor_moved(PhysicalPosition::new(10.0, 10.0));
        controls.on_cursor_moved(PhysicalPosition::new(500.0, 500.0));
        for _ in 0..10 {
            controls.update(&mut camera);
        }
        assert!((camera.position - Vec3::new(0.0, 0.0, 1.5)).length() < 1e-5);
    }
}
