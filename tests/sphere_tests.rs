// Host-side tests for the inward-facing panorama sphere mesh.

mod sphere {
    include!("../src/core/sphere.rs");
}

use sphere::*;

fn mesh() -> SphereMesh {
    build_inward_sphere(500.0, 60, 40)
}

#[test]
fn vertex_and_index_counts() {
    let m = mesh();
    assert_eq!(m.vertices.len(), 61 * 41);
    // 60 * 40 quads, minus one triangle per quad on each pole row
    assert_eq!(m.indices.len(), 60 * 40 * 6 - 2 * 60 * 3);
    assert_eq!(m.indices.len() % 3, 0);
}

#[test]
fn vertices_sit_on_the_radius() {
    for v in &mesh().vertices {
        let [x, y, z] = v.position;
        let r = (x * x + y * y + z * z).sqrt();
        assert!((r - 500.0).abs() < 0.01, "radius {}", r);
        assert!((0.0..=1.0).contains(&v.uv[0]));
        assert!((0.0..=1.0).contains(&v.uv[1]));
    }
}

#[test]
fn indices_are_in_range() {
    let m = mesh();
    let n = m.vertices.len() as u32;
    assert!(m.indices.iter().all(|&i| i < n));
}

#[test]
fn poles_and_equator() {
    let m = mesh();
    let north = m.vertices[0];
    assert!((north.position[1] - 500.0).abs() < 1e-3);
    assert_eq!(north.uv[1], 0.0);
    let south = m.vertices[40 * 61];
    assert!((south.position[1] + 500.0).abs() < 1e-3);
    assert_eq!(south.uv[1], 1.0);

    // u = 0 on the equator lands on +X after the mirror.
    let seam = m.vertices[20 * 61];
    assert!((seam.position[0] - 500.0).abs() < 1e-3);
    assert!(seam.position[1].abs() < 1e-3);
    assert!(seam.position[2].abs() < 1e-3);
}

#[test]
fn degenerate_segment_counts_are_raised() {
    let m = build_inward_sphere(1.0, 0, 0);
    assert_eq!(m.vertices.len(), 4 * 3);
    assert!(!m.indices.is_empty());
}

#[test]
fn vertex_is_tightly_packed() {
    assert_eq!(std::mem::size_of::<SphereVertex>(), 20);
    let m = mesh();
    let bytes: &[u8] = bytemuck::cast_slice(&m.vertices);
    assert_eq!(bytes.len(), m.vertices.len() * 20);
}
