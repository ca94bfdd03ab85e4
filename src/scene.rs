use glam::Vec3;

/// Convert an 8-bit sRGB color to linear RGB.
///
/// Clear and material colors are specified as designer-facing sRGB hex, but
/// the pipeline shades in linear space.
pub fn srgb_to_linear(rgb: [u8; 3]) -> [f32; 3] {
    let channel = |c: u8| {
        let c = c as f32 / 255.0;
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    [channel(rgb[0]), channel(rgb[1]), channel(rgb[2])]
}

/// Mesh vertex: position + normal, both in object-local space.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    pub const fn new(position: [f32; 3], normal: [f32; 3]) -> Self {
        Self { position, normal }
    }
}

/// CPU-side triangle mesh. Uploaded to the GPU once per scene object.
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.indices.is_empty()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Solid material with standard-material-style knobs.
#[derive(Copy, Clone, Debug)]
pub struct Material {
    /// Linear RGB base color.
    pub color: [f32; 3],
    pub roughness: f32,
    pub metalness: f32,
}

impl Material {
    /// Standard-material defaults: fully rough, non-metallic.
    pub fn with_color(color: [f32; 3]) -> Self {
        Self {
            color,
            roughness: 1.0,
            metalness: 0.0,
        }
    }
}

/// Single point light with fixed position and intensity.
#[derive(Copy, Clone, Debug)]
pub struct PointLight {
    pub position: Vec3,
    pub intensity: f32,
}

/// A visual object: geometry + material + world position.
///
/// Immutable after insertion into the scene; only the camera moves.
#[derive(Clone, Debug)]
pub struct SceneObject {
    pub mesh: Mesh,
    pub material: Material,
    pub position: Vec3,
}

/// Page background, sRGB #0d1117.
pub const BACKGROUND_SRGB: [u8; 3] = [0x0d, 0x11, 0x17];

/// The scene graph: background color, one point light, and an ordered list
/// of objects.
///
/// The object list is append-only for the lifetime of the process. The
/// renderer relies on this: an object's index never changes once inserted,
/// so GPU buffers uploaded for it stay valid.
pub struct Scene {
    pub background: [f32; 3],
    pub light: PointLight,
    objects: Vec<SceneObject>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            background: srgb_to_linear(BACKGROUND_SRGB),
            light: PointLight {
                position: Vec3::new(0.0, 1.0, 1.0),
                intensity: 2.0,
            },
            objects: Vec::new(),
        }
    }

    /// Append an object. Objects are never removed or repositioned.
    pub fn add(&mut self, object: SceneObject) {
        self.objects.push(object);
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Total scene-graph node count: visual objects plus the light.
    pub fn node_count(&self) -> usize {
        self.objects.len() + 1
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
