use glam::Vec3;

use crate::scene::{Material, Mesh, SceneObject, Vertex, srgb_to_linear};

/// Panel dimensions: a thin card, 2.0 wide, 1.1 tall, 0.01 deep.
pub const PANEL_SIZE: [f32; 3] = [2.0, 1.1, 0.01];

/// Panel base color, sRGB #161b22.
pub const PANEL_SRGB: [u8; 3] = [0x16, 0x1b, 0x22];

/// Build an axis-aligned box mesh centered on the origin, with per-face
/// normals (24 vertices, 12 triangles).
pub fn box_mesh(width: f32, height: f32, depth: f32) -> Mesh {
    let (hw, hh, hd) = (width / 2.0, height / 2.0, depth / 2.0);

    // One quad per face, counter-clockwise when viewed from outside.
    let faces: [([f32; 3], [[f32; 3]; 4]); 6] = [
        // +Z
        (
            [0.0, 0.0, 1.0],
            [
                [-hw, -hh, hd],
                [hw, -hh, hd],
                [hw, hh, hd],
                [-hw, hh, hd],
            ],
        ),
        // -Z
        (
            [0.0, 0.0, -1.0],
            [
                [hw, -hh, -hd],
                [-hw, -hh, -hd],
                [-hw, hh, -hd],
                [hw, hh, -hd],
            ],
        ),
        // +X
        (
            [1.0, 0.0, 0.0],
            [
                [hw, -hh, hd],
                [hw, -hh, -hd],
                [hw, hh, -hd],
                [hw, hh, hd],
            ],
        ),
        // -X
        (
            [-1.0, 0.0, 0.0],
            [
                [-hw, -hh, -hd],
                [-hw, -hh, hd],
                [-hw, hh, hd],
                [-hw, hh, -hd],
            ],
        ),
        // +Y
        (
            [0.0, 1.0, 0.0],
            [
                [-hw, hh, hd],
                [hw, hh, hd],
                [hw, hh, -hd],
                [-hw, hh, -hd],
            ],
        ),
        // -Y
        (
            [0.0, -1.0, 0.0],
            [
                [-hw, -hh, -hd],
                [hw, -hh, -hd],
                [hw, -hh, hd],
                [-hw, -hh, hd],
            ],
        ),
    ];

    let mut mesh = Mesh::default();
    for (normal, corners) in faces {
        let base = mesh.vertices.len() as u32;
        for corner in corners {
            mesh.vertices.push(Vertex::new(corner, normal));
        }
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    mesh
}

/// The portfolio card: a flat dark panel at the origin.
pub fn panel() -> SceneObject {
    let [w, h, d] = PANEL_SIZE;
    SceneObject {
        mesh: box_mesh(w, h, d),
        material: Material {
            color: srgb_to_linear(PANEL_SRGB),
            roughness: 0.5,
            metalness: 0.6,
        },
        position: Vec3::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_mesh_has_24_vertices_12_triangles() {
        let mesh = box_mesh(2.0, 1.1, 0.01);
        assert_eq!(mesh.vertices.len(), 24);
        assert_eq!(mesh.indices.len(), 36);
        assert_eq!(mesh.triangle_count(), 12);
    }

    #[test]
    fn box_mesh_normals_are_axis_aligned_units() {
        let mesh = box_mesh(1.0, 1.0, 1.0);
        for v in &mesh.vertices {
            let n = Vec3::from_array(v.normal);
            assert!((n.length() - 1.0).abs() < 1e-6);
            // Exactly one non-zero component.
            let nonzero = v.normal.iter().filter(|c| **c != 0.0).count();
            assert_eq!(nonzero, 1);
        }
    }

    #[test]
    fn box_mesh_extents_match_dimensions() {
        let mesh = box_mesh(2.0, 1.1, 0.01);
        let mut min = Vec3::splat(f32::INFINITY);
        let mut max = Vec3::splat(f32::NEG_INFINITY);
        for v in &mesh.vertices {
            let p = Vec3::from_array(v.position);
            min = min.min(p);
            max = max.max(p);
        }
        let extent = max - min;
        assert!((extent.x - 2.0).abs() < 1e-6);
        assert!((extent.y - 1.1).abs() < 1e-6);
        assert!((extent.z - 0.01).abs() < 1e-6);
        // Centered on the origin.
        assert!((min + max).length() < 1e-6);
    }

    #[test]
    fn panel_sits_at_origin() {
        let panel = panel();
        assert_eq!(panel.position, Vec3::ZERO);
        assert_eq!(panel.material.roughness, 0.5);
        assert_eq!(panel.material.metalness, 0.6);
    }
}
