//! Fill tessellation and extrusion of glyph outlines.
//!
//! A glyph path is first filled into a flat 2D triangle mesh (lyon), then
//! extruded along +Z: the fill becomes front and back caps, and side walls
//! are stitched along the outline's boundary edges.

use std::collections::HashSet;

use lyon::path::Path;
use lyon::tessellation::{
    BuffersBuilder, FillOptions, FillRule, FillTessellator, FillVertex, FillVertexConstructor,
    VertexBuffers,
};

use crate::scene::{Mesh, Vertex};

/// Flat fill of an outline: 2D positions plus triangle indices.
#[derive(Clone, Debug, Default)]
pub struct FlatMesh {
    pub positions: Vec<[f32; 2]>,
    pub indices: Vec<u32>,
}

struct PositionCtor;

impl FillVertexConstructor<[f32; 2]> for PositionCtor {
    fn new_vertex(&mut self, v: FillVertex) -> [f32; 2] {
        let p = v.position();
        [p.x, p.y]
    }
}

/// Fill-tessellate an outline path.
///
/// Glyph outlines are authored for non-zero winding; holes (counters) come
/// out as interior boundaries of the fill.
pub fn tessellate(path: &Path, tolerance: f32) -> anyhow::Result<FlatMesh> {
    let mut tess = FillTessellator::new();
    let mut buffers: VertexBuffers<[f32; 2], u32> = VertexBuffers::new();

    let options = FillOptions::tolerance(tolerance).with_fill_rule(FillRule::NonZero);
    tess.tessellate_path(
        path,
        &options,
        &mut BuffersBuilder::new(&mut buffers, PositionCtor),
    )
    .map_err(|e| anyhow::anyhow!("fill tessellation failed: {e:?}"))?;

    Ok(FlatMesh {
        positions: buffers.vertices,
        indices: buffers.indices,
    })
}

/// Directed boundary edges of a flat mesh: edges that appear in exactly one
/// triangle. For a fill these trace the outline contours, holes included.
pub fn boundary_edges(flat: &FlatMesh) -> Vec<(u32, u32)> {
    let mut directed: HashSet<(u32, u32)> = HashSet::new();
    for tri in flat.indices.chunks_exact(3) {
        directed.insert((tri[0], tri[1]));
        directed.insert((tri[1], tri[2]));
        directed.insert((tri[2], tri[0]));
    }

    let mut boundary: Vec<(u32, u32)> = directed
        .iter()
        .copied()
        .filter(|(a, b)| !directed.contains(&(*b, *a)))
        .collect();
    // Deterministic output regardless of hash order.
    boundary.sort_unstable();
    boundary
}

/// Extrude a flat fill into a solid mesh spanning z in [0, depth].
///
/// - Front cap at z = depth, normal +Z (faces the camera).
/// - Back cap at z = 0, normal -Z, winding reversed.
/// - One flat-shaded quad per boundary edge, outward normal in the XY plane.
pub fn extrude(flat: &FlatMesh, depth: f32) -> Mesh {
    let mut mesh = Mesh::default();
    if flat.positions.is_empty() || flat.indices.is_empty() {
        return mesh;
    }

    let n = flat.positions.len() as u32;

    // Front cap.
    for p in &flat.positions {
        mesh.vertices
            .push(Vertex::new([p[0], p[1], depth], [0.0, 0.0, 1.0]));
    }
    mesh.indices.extend_from_slice(&flat.indices);

    // Back cap, reversed winding.
    for p in &flat.positions {
        mesh.vertices
            .push(Vertex::new([p[0], p[1], 0.0], [0.0, 0.0, -1.0]));
    }
    for tri in flat.indices.chunks_exact(3) {
        mesh.indices
            .extend_from_slice(&[n + tri[0], n + tri[2], n + tri[1]]);
    }

    // Side walls. Each boundary edge belongs to exactly one triangle; the
    // outward normal is the edge perpendicular that points away from that
    // triangle's interior, which keeps holes correct without assuming a
    // winding convention.
    let mut opposite: std::collections::HashMap<(u32, u32), u32> = std::collections::HashMap::new();
    for tri in flat.indices.chunks_exact(3) {
        opposite.insert((tri[0], tri[1]), tri[2]);
        opposite.insert((tri[1], tri[2]), tri[0]);
        opposite.insert((tri[2], tri[0]), tri[1]);
    }

    for (ia, ib) in boundary_edges(flat) {
        let a = flat.positions[ia as usize];
        let b = flat.positions[ib as usize];
        let edge = [b[0] - a[0], b[1] - a[1]];
        let len = (edge[0] * edge[0] + edge[1] * edge[1]).sqrt();
        if len <= f32::EPSILON {
            continue;
        }

        let mut normal = [edge[1] / len, -edge[0] / len];
        if let Some(&ic) = opposite.get(&(ia, ib)) {
            let c = flat.positions[ic as usize];
            let mid = [(a[0] + b[0]) * 0.5, (a[1] + b[1]) * 0.5];
            let to_interior = [c[0] - mid[0], c[1] - mid[1]];
            if normal[0] * to_interior[0] + normal[1] * to_interior[1] > 0.0 {
                normal = [-normal[0], -normal[1]];
            }
        }
        let normal = [normal[0], normal[1], 0.0];

        let base = mesh.vertices.len() as u32;
        mesh.vertices.push(Vertex::new([a[0], a[1], 0.0], normal));
        mesh.vertices.push(Vertex::new([b[0], b[1], 0.0], normal));
        mesh.vertices.push(Vertex::new([b[0], b[1], depth], normal));
        mesh.vertices.push(Vertex::new([a[0], a[1], depth], normal));
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use lyon::math::point;

    fn square_path(size: f32) -> Path {
        let mut b = Path::builder();
        b.begin(point(0.0, 0.0));
        b.line_to(point(size, 0.0));
        b.line_to(point(size, size));
        b.line_to(point(0.0, size));
        b.end(true);
        b.build()
    }

    fn ring_path(outer: f32, inner: f32) -> Path {
        let mut b = Path::builder();
        b.begin(point(-outer, -outer));
        b.line_to(point(outer, -outer));
        b.line_to(point(outer, outer));
        b.line_to(point(-outer, outer));
        b.end(true);
        // Hole, opposite winding.
        b.begin(point(-inner, -inner));
        b.line_to(point(-inner, inner));
        b.line_to(point(inner, inner));
        b.line_to(point(inner, -inner));
        b.end(true);
        b.build()
    }

    #[test]
    fn square_tessellates_to_two_triangles() {
        let flat = tessellate(&square_path(10.0), 0.1).unwrap();
        assert_eq!(flat.positions.len(), 4);
        assert_eq!(flat.indices.len(), 6);
        assert_eq!(boundary_edges(&flat).len(), 4);
    }

    #[test]
    fn ring_has_inner_and_outer_boundaries() {
        let flat = tessellate(&ring_path(10.0, 4.0), 0.1).unwrap();
        let boundary = boundary_edges(&flat);
        // 4 outer edges + 4 inner edges.
        assert_eq!(boundary.len(), 8);
    }

    #[test]
    fn extrusion_counts_add_up() {
        let flat = tessellate(&square_path(10.0), 0.1).unwrap();
        let boundary = boundary_edges(&flat).len();
        let mesh = extrude(&flat, 0.01);

        assert_eq!(
            mesh.vertices.len(),
            2 * flat.positions.len() + 4 * boundary
        );
        assert_eq!(mesh.indices.len(), 2 * flat.indices.len() + 6 * boundary);
    }

    #[test]
    fn caps_sit_at_zero_and_depth() {
        let flat = tessellate(&square_path(5.0), 0.1).unwrap();
        let mesh = extrude(&flat, 0.01);
        for v in &mesh.vertices {
            assert!(v.position[2] == 0.0 || (v.position[2] - 0.01).abs() < 1e-7);
        }
        // Front cap normals point +Z, back cap -Z.
        let n = flat.positions.len();
        for v in &mesh.vertices[..n] {
            assert_eq!(v.normal, [0.0, 0.0, 1.0]);
        }
        for v in &mesh.vertices[n..2 * n] {
            assert_eq!(v.normal, [0.0, 0.0, -1.0]);
        }
    }

    #[test]
    fn side_normals_are_horizontal_units_pointing_outward() {
        let flat = tessellate(&square_path(10.0), 0.1).unwrap();
        let mesh = extrude(&flat, 0.01);
        let caps = 2 * flat.positions.len();
        for v in &mesh.vertices[caps..] {
            let [nx, ny, nz] = v.normal;
            assert_eq!(nz, 0.0);
            assert!((nx * nx + ny * ny - 1.0).abs() < 1e-5);
            // Outward from the square [0,10]^2: the normal points away from
            // the center (5,5).
            let to_vertex = [v.position[0] - 5.0, v.position[1] - 5.0];
            assert!(nx * to_vertex[0] + ny * to_vertex[1] > 0.0);
        }
    }

    #[test]
    fn hole_walls_point_into_the_hole() {
        let flat = tessellate(&ring_path(10.0, 4.0), 0.1).unwrap();
        let mesh = extrude(&flat, 1.0);
        let caps = 2 * flat.positions.len();
        for v in &mesh.vertices[caps..] {
            let [nx, ny, _] = v.normal;
            let px = v.position[0];
            let py = v.position[1];
            let on_inner = px.abs() <= 4.0 + 1e-4 && py.abs() <= 4.0 + 1e-4;
            if on_inner {
                // Inner wall: normal points toward the hole center.
                assert!(nx * px + ny * py < 0.0);
            } else {
                assert!(nx * px + ny * py > 0.0);
            }
        }
    }

    #[test]
    fn empty_fill_extrudes_to_empty_mesh() {
        let mesh = extrude(&FlatMesh::default(), 0.01);
        assert!(mesh.is_empty());
    }
}
