//! Test meshes.

use planecut_mesh::TriangleMesh;

/// Regular icosahedron centred on the origin, 12 vertices, 20 faces.
///
/// Four vertices lie on z = 0.
pub fn icosahedron() -> TriangleMesh {
    let phi = (1.0 + 5.0f32.sqrt()) / 2.0;
    let vertices = vec![
        -1.0, phi, 0.0, //
        1.0, phi, 0.0, //
        -1.0, -phi, 0.0, //
        1.0, -phi, 0.0, //
        0.0, -1.0, phi, //
        0.0, 1.0, phi, //
        0.0, -1.0, -phi, //
        0.0, 1.0, -phi, //
        phi, 0.0, -1.0, //
        phi, 0.0, 1.0, //
        -phi, 0.0, -1.0, //
        -phi, 0.0, 1.0,
    ];
    let indices = vec![
        0, 11, 5, 0, 5, 1, 0, 1, 7, 0, 7, 10, 0, 10, 11, //
        1, 5, 9, 5, 11, 4, 11, 10, 2, 10, 7, 6, 7, 1, 8, //
        3, 9, 4, 3, 4, 2, 3, 2, 6, 3, 6, 8, 3, 8, 9, //
        4, 9, 5, 2, 4, 11, 6, 2, 10, 8, 6, 7, 9, 8, 1,
    ];
    TriangleMesh::from_buffers(vertices, indices)
}

/// Two icosahedra, the second shifted by `dx` along x.
pub fn two_icosahedra(dx: f32) -> TriangleMesh {
    let mut mesh = icosahedron();
    let mut other = icosahedron();
    for xyz in other.vertices.chunks_exact_mut(3) {
        xyz[0] += dx;
    }
    mesh.merge(&other);
    mesh
}

/// Corner tetrahedron with apex (0, 0, 1).
pub fn tetrahedron() -> TriangleMesh {
    TriangleMesh::from_buffers(
        vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
        vec![0, 2, 1, 0, 1, 3, 1, 2, 3, 2, 0, 3],
    )
}

/// Open triangle fan: apex (0, 0, 1) over a unit rim of `segments` vertices
/// at z = 0. The rim edges are the mesh boundary.
///
/// Rim vertex `i` (mesh vertex `i + 1`) sits at angle `(i + 0.5) * 2π / segments`
/// so no rim vertex lies on the x or y axis.
pub fn dome(segments: u32) -> TriangleMesh {
    let mut vertices = vec![0.0, 0.0, 1.0];
    for i in 0..segments {
        let angle = (i as f32 + 0.5) * std::f32::consts::TAU / segments as f32;
        vertices.extend_from_slice(&[angle.cos(), angle.sin(), 0.0]);
    }
    let mut indices = Vec::with_capacity(segments as usize * 3);
    for i in 0..segments {
        indices.extend_from_slice(&[0, 1 + i, 1 + (i + 1) % segments]);
    }
    TriangleMesh::from_buffers(vertices, indices)
}

/// Three unit-square fins hinged on the z axis edge (0,0,0)-(0,0,1), so
/// that edge has three incident triangles.
///
/// Fin `k` is triangles `(0, 1, a)` and `(1, b, a)` with `a` on the floor
/// and `b` above it at z = 1.
pub fn fins() -> TriangleMesh {
    let mut vertices = vec![0.0, 0.0, 0.0, 0.0, 0.0, 1.0];
    let mut indices = Vec::new();
    for k in 0..3u32 {
        let angle = k as f32 * std::f32::consts::TAU / 3.0;
        let (s, c) = angle.sin_cos();
        vertices.extend_from_slice(&[c, s, 0.0, c, s, 1.0]);
        let a = 2 + 2 * k;
        let b = a + 1;
        indices.extend_from_slice(&[0, 1, a, 1, b, a]);
    }
    TriangleMesh::from_buffers(vertices, indices)
}
