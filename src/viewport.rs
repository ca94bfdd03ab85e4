/// Highest device pixel ratio the render surface will honor. High-density
/// displays report 3x and beyond; rendering above 2x costs pixels without
/// visible benefit for this scene.
pub const MAX_PIXEL_RATIO: f64 = 2.0;

/// Current viewport state: logical size plus the device scale factor.
///
/// Drives both the camera aspect ratio and the render surface extent.
/// `resize` may fire arbitrarily often; identical events yield identical
/// state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: f64,
    height: f64,
    scale_factor: f64,
}

impl Viewport {
    /// Create from a physical size and the scale factor that produced it.
    pub fn from_physical(physical_width: u32, physical_height: u32, scale_factor: f64) -> Self {
        let sf = if scale_factor > 0.0 { scale_factor } else { 1.0 };
        Self {
            width: physical_width as f64 / sf,
            height: physical_height as f64 / sf,
            scale_factor: sf,
        }
    }

    pub fn resize(&mut self, physical_width: u32, physical_height: u32, scale_factor: f64) {
        *self = Self::from_physical(physical_width, physical_height, scale_factor);
    }

    /// Pixel ratio actually applied to the surface: the device's reported
    /// ratio clamped to [`MAX_PIXEL_RATIO`].
    pub fn pixel_ratio(&self) -> f64 {
        self.scale_factor.min(MAX_PIXEL_RATIO)
    }

    /// Render surface extent in pixels: logical size times the clamped ratio.
    pub fn surface_extent(&self) -> (u32, u32) {
        let ratio = self.pixel_ratio();
        (
            (self.width * ratio).round() as u32,
            (self.height * ratio).round() as u32,
        )
    }

    /// Camera aspect ratio, width over height.
    pub fn aspect(&self) -> f32 {
        if self.height == 0.0 {
            1.0
        } else {
            (self.width / self.height) as f32
        }
    }

    /// True when the window is minimized or degenerate; skip rendering.
    pub fn is_zero(&self) -> bool {
        let (w, h) = self.surface_extent();
        w == 0 || h == 0
    }
}
