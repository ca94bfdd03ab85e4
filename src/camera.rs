use glam::{Mat4, Vec3};

/// Vertical field of view, degrees.
pub const FOV_Y_DEGREES: f32 = 75.0;
pub const NEAR_PLANE: f32 = 0.1;
pub const FAR_PLANE: f32 = 100.0;

/// Initial camera position: straight back from the card.
pub const INITIAL_POSITION: Vec3 = Vec3::new(0.0, 0.0, 1.5);

/// Perspective camera.
///
/// Projection parameters are fixed except for `aspect`, which the viewport
/// manager recomputes on every resize. Position and orientation are driven
/// by the orbit controls; the camera always looks at `target`.
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    pub fn new(aspect: f32) -> Self {
        Self {
            position: INITIAL_POSITION,
            target: Vec3::ZERO,
            fov_y: FOV_Y_DEGREES.to_radians(),
            aspect,
            near: NEAR_PLANE,
            far: FAR_PLANE,
        }
    }

    /// Refresh the projection aspect ratio. Called on every viewport resize.
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection() * self.view()
    }
}
