//! Wireframe meshes for the floating shapes.
//!
//! Each builder produces unique vertices plus a line list containing every
//! triangle edge exactly once, which is what a wireframe material draws.

use glam::Vec3;
use std::collections::BTreeSet;
use std::f32::consts::TAU;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct WireVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

#[derive(Clone, Debug, Default)]
pub struct WireMesh {
    pub vertices: Vec<WireVertex>,
    /// Pairs of vertex indices, one pair per edge.
    pub indices: Vec<u32>,
}

impl WireMesh {
    pub fn edge_count(&self) -> usize {
        self.indices.len() / 2
    }

    fn from_triangles(vertices: Vec<WireVertex>, triangles: &[[u32; 3]]) -> Self {
        let mut edges = BTreeSet::new();
        for tri in triangles {
            for k in 0..3 {
                let (a, b) = (tri[k], tri[(k + 1) % 3]);
                edges.insert((a.min(b), a.max(b)));
            }
        }
        let indices = edges.into_iter().flat_map(|(a, b)| [a, b]).collect();
        Self { vertices, indices }
    }
}

/// Ring torus in the XY plane around the Z axis.
pub fn torus(radius: f32, tube: f32, radial_segments: u32, tubular_segments: u32) -> WireMesh {
    let radial = radial_segments.max(2);
    let tubular = tubular_segments.max(3);
    let mut vertices = Vec::with_capacity(((radial + 1) * (tubular + 1)) as usize);
    for j in 0..=radial {
        let v = j as f32 / radial as f32 * TAU;
        for i in 0..=tubular {
            let u = i as f32 / tubular as f32 * TAU;
            let position = Vec3::new(
                (radius + tube * v.cos()) * u.cos(),
                (radius + tube * v.cos()) * u.sin(),
                tube * v.sin(),
            );
            let center = Vec3::new(radius * u.cos(), radius * u.sin(), 0.0);
            vertices.push(WireVertex {
                position: position.to_array(),
                normal: (position - center).normalize_or_zero().to_array(),
            });
        }
    }
    let row = tubular + 1;
    let mut triangles = Vec::with_capacity((radial * tubular * 2) as usize);
    for j in 1..=radial {
        for i in 1..=tubular {
            let a = row * j + i - 1;
            let b = row * (j - 1) + i - 1;
            let c = row * (j - 1) + i;
            let d = row * j + i;
            triangles.push([a, b, d]);
            triangles.push([b, c, d]);
        }
    }
    WireMesh::from_triangles(vertices, &triangles)
}

pub fn tetrahedron(radius: f32) -> WireMesh {
    const VERTS: [[f32; 3]; 4] = [
        [1.0, 1.0, 1.0],
        [-1.0, -1.0, 1.0],
        [-1.0, 1.0, -1.0],
        [1.0, -1.0, -1.0],
    ];
    const FACES: [[u32; 3]; 4] = [[2, 1, 0], [0, 3, 2], [1, 3, 0], [2, 3, 1]];
    polyhedron(&VERTS, &FACES, radius)
}

pub fn octahedron(radius: f32) -> WireMesh {
    const VERTS: [[f32; 3]; 6] = [
        [1.0, 0.0, 0.0],
        [-1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, -1.0, 0.0],
        [0.0, 0.0, 1.0],
        [0.0, 0.0, -1.0],
    ];
    const FACES: [[u32; 3]; 8] = [
        [0, 2, 4],
        [0, 4, 3],
        [0, 3, 5],
        [0, 5, 2],
        [1, 2, 5],
        [1, 5, 3],
        [1, 3, 4],
        [1, 4, 2],
    ];
    polyhedron(&VERTS, &FACES, radius)
}

pub fn icosahedron(radius: f32) -> WireMesh {
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
    let verts = [
        [-1.0, t, 0.0],
        [1.0, t, 0.0],
        [-1.0, -t, 0.0],
        [1.0, -t, 0.0],
        [0.0, -1.0, t],
        [0.0, 1.0, t],
        [0.0, -1.0, -t],
        [0.0, 1.0, -t],
        [t, 0.0, -1.0],
        [t, 0.0, 1.0],
        [-t, 0.0, -1.0],
        [-t, 0.0, 1.0],
    ];
    const FACES: [[u32; 3]; 20] = [
        [0, 11, 5],
        [0, 5, 1],
        [0, 1, 7],
        [0, 7, 10],
        [0, 10, 11],
        [1, 5, 9],
        [5, 11, 4],
        [11, 10, 2],
        [10, 7, 6],
        [7, 1, 8],
        [3, 9, 4],
        [3, 4, 2],
        [3, 2, 6],
        [3, 6, 8],
        [3, 8, 9],
        [4, 9, 5],
        [2, 4, 11],
        [6, 2, 10],
        [8, 6, 7],
        [9, 8, 1],
    ];
    polyhedron(&verts, &FACES, radius)
}

// Vertices are projected onto the sphere of the given radius.
fn polyhedron(verts: &[[f32; 3]], faces: &[[u32; 3]], radius: f32) -> WireMesh {
    let vertices = verts
        .iter()
        .map(|v| {
            let n = Vec3::from_array(*v).normalize();
            WireVertex {
                position: (n * radius).to_array(),
                normal: n.to_array(),
            }
        })
        .collect();
    WireMesh::from_triangles(vertices, faces)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_on_sphere(mesh: &WireMesh, radius: f32) {
        for v in &mesh.vertices {
            let len = Vec3::from_array(v.position).length();
            assert!((len - radius).abs() < 1e-4, "vertex at radius {len}");
        }
    }

    fn assert_indices_in_range(mesh: &WireMesh) {
        let n = mesh.vertices.len() as u32;
        assert!(mesh.indices.iter().all(|&i| i < n));
        assert_eq!(mesh.indices.len() % 2, 0);
    }

    #[test]
    fn platonic_solids_have_expected_edges() {
        let tet = tetrahedron(5.0);
        assert_eq!((tet.vertices.len(), tet.edge_count()), (4, 6));
        let oct = octahedron(5.0);
        assert_eq!((oct.vertices.len(), oct.edge_count()), (6, 12));
        let ico = icosahedron(5.0);
        assert_eq!((ico.vertices.len(), ico.edge_count()), (12, 30));
        for mesh in [&tet, &oct, &ico] {
            assert_on_sphere(mesh, 5.0);
            assert_indices_in_range(mesh);
        }
    }

    #[test]
    fn torus_grid_topology() {
        let mesh = torus(5.0, 2.0, 16, 100);
        assert_eq!(mesh.vertices.len(), 17 * 101);
        // rows + columns + one diagonal per quad
        assert_eq!(mesh.edge_count(), 17 * 100 + 101 * 16 + 16 * 100);
        assert_indices_in_range(&mesh);
    }

    #[test]
    fn torus_vertices_lie_on_tube_surface() {
        let mesh = torus(5.0, 2.0, 8, 12);
        for v in &mesh.vertices {
            let p = Vec3::from_array(v.position);
            let ring = Vec3::new(p.x, p.y, 0.0).normalize() * 5.0;
            assert!(((p - ring).length() - 2.0).abs() < 1e-4);
            assert!((Vec3::from_array(v.normal).length() - 1.0).abs() < 1e-4);
        }
    }
}
