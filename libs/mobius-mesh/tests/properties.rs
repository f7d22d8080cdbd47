//! Whole-pipeline properties of the generated band.

use std::collections::HashSet;

use approx::assert_relative_eq;
use mobius_mesh::grid::ParameterGrid;
use mobius_mesh::{generate, generate_mobius_mesh, Face, GridConfig, MeshError};

const SIZES: &[(u32, u32)] = &[(2, 1), (2, 2), (3, 1), (3, 3), (4, 2), (5, 4), (8, 5), (13, 7), (100, 20)];

#[test]
fn vertex_count_and_index_range() {
    for &(u_steps, v_steps) in SIZES {
        for triangulate in [false, true] {
            let mesh = generate_mobius_mesh(u_steps, v_steps, triangulate).unwrap();
            assert_eq!(mesh.vertex_count(), (u_steps * (v_steps + 1)) as usize);
            for face in mesh.faces() {
                assert!(face
                    .indices()
                    .iter()
                    .all(|&i| (i as usize) < mesh.vertex_count()));
            }
        }
    }
}

#[test]
fn triangulation_doubles_face_count() {
    for &(u_steps, v_steps) in SIZES {
        let quads = generate_mobius_mesh(u_steps, v_steps, false).unwrap();
        let triangles = generate_mobius_mesh(u_steps, v_steps, true).unwrap();
        assert_eq!(2 * quads.face_count(), triangles.face_count());
        assert_eq!(quads.vertices(), triangles.vertices());
        assert!(quads.faces().iter().all(|f| matches!(f, Face::Quad(_))));
        assert!(triangles.faces().iter().all(|f| matches!(f, Face::Triangle(_))));
    }
}

#[test]
fn generation_is_bit_identical() {
    for &(u_steps, v_steps) in SIZES {
        let a = generate_mobius_mesh(u_steps, v_steps, false).unwrap();
        let b = generate_mobius_mesh(u_steps, v_steps, false).unwrap();
        assert_eq!(a.faces(), b.faces());
        let bits = |m: &mobius_mesh::Mesh| -> Vec<[u64; 3]> {
            m.vertices()
                .iter()
                .map(|v| [v.x.to_bits(), v.y.to_bits(), v.z.to_bits()])
                .collect()
        };
        assert_eq!(bits(&a), bits(&b));
    }
}

#[test]
fn even_example_faces() {
    let mesh = generate_mobius_mesh(4, 2, false).unwrap();
    assert_eq!(mesh.vertex_count(), 12);
    let faces: Vec<Vec<u32>> = mesh.faces().iter().map(|f| f.indices().to_vec()).collect();
    let expected = vec![
        vec![0, 1, 5, 4],
        vec![1, 2, 6, 5],
        vec![2, 3, 7, 6],
        vec![3, 4, 0, 7],
        vec![4, 8, 9, 5],
        vec![5, 9, 10, 6],
        vec![6, 10, 11, 7],
        vec![7, 0, 4, 3],
    ];
    assert_eq!(faces, expected);
    for face in mesh.faces() {
        let unique: HashSet<u32> = face.indices().iter().copied().collect();
        assert_eq!(unique.len(), face.indices().len());
    }
}

#[test]
fn odd_minimal_closing_face() {
    let mesh = generate_mobius_mesh(3, 1, false).unwrap();
    assert_eq!(mesh.face_count(), 3);
    let closing = mesh.faces().last().unwrap().indices();
    assert_eq!(closing, &[2, 5, 3, 0]);
    let unique: HashSet<u32> = closing.iter().copied().collect();
    assert_eq!(unique.len(), 4);
    assert!(closing.iter().all(|&i| (i as usize) < mesh.vertex_count()));
}

/// Area of a polygon in `(u, v)` parameter space, summed over the
/// `(P1, P2, P3)` / `(P1, P3, P4)` split.
fn parameter_area(grid: &ParameterGrid, points: &[u32]) -> f64 {
    let uv = |i: u32| {
        let s = grid.samples()[i as usize];
        (s.u, s.v)
    };
    let tri = |a: u32, b: u32, c: u32| {
        let (a, b, c) = (uv(a), uv(b), uv(c));
        0.5 * ((b.0 - a.0) * (c.1 - a.1) - (c.0 - a.0) * (b.1 - a.1)).abs()
    };
    tri(points[0], points[1], points[2]) + tri(points[0], points[2], points[3])
}

#[test]
fn minimum_u_steps_seam_face_is_not_degenerate() {
    let grid = ParameterGrid::new(2, 2).unwrap();
    let mesh = generate_mobius_mesh(2, 2, false).unwrap();
    // last column sits exactly on u_max instead of wrapping to 0
    assert_relative_eq!(grid.samples()[1].u, std::f64::consts::TAU, epsilon = 1.0e-12);

    // the first seam face follows the single quad of row 0
    let seam = mesh.face(1);
    assert_eq!(seam.indices(), &[1, 2, 0, 3]);
    let unique: HashSet<u32> = seam.indices().iter().copied().collect();
    assert_eq!(unique.len(), 4);
    assert!(parameter_area(&grid, seam.indices()) > 1.0);
}

// =============================================================================
// NON-ORIENTABILITY
// =============================================================================

fn has_edge(faces: &[Face], a: u32, b: u32) -> bool {
    faces.iter().any(|face| {
        let p = face.indices();
        (0..p.len()).any(|i| {
            let (x, y) = (p[i], p[(i + 1) % p.len()]);
            (x, y) == (a, b) || (x, y) == (b, a)
        })
    })
}

/// Walks row `row` from column 0 to the last column along shared face
/// edges, then crosses the seam to the column-0 vertex that follows the
/// row's end in a face on another row. Returns that vertex's row.
fn loop_once(faces: &[Face], columns: u32, row: u32) -> u32 {
    for col in 0..columns - 1 {
        let a = row * columns + col;
        assert!(has_edge(faces, a, a + 1), "missing edge {a}-{}", a + 1);
    }
    let end = row * columns + columns - 1;
    let next = faces
        .iter()
        .find_map(|face| {
            let p = face.indices();
            let at = p.iter().position(|&i| i == end)?;
            let succ = p[(at + 1) % p.len()];
            (succ % columns == 0 && succ / columns != row).then_some(succ)
        })
        .unwrap_or_else(|| panic!("no seam face leaves vertex {end}"));
    next / columns
}

#[test]
fn seam_closes_after_two_loops_with_v_flipped() {
    for (u_steps, v_steps) in [(3, 3), (4, 4), (8, 5), (13, 7), (100, 20)] {
        let grid = ParameterGrid::new(u_steps, v_steps).unwrap();
        let mesh = generate_mobius_mesh(u_steps, v_steps, false).unwrap();
        let v_of = |row: u32| grid.sample(row, 0).v;

        let start = v_steps - 1;
        let after_one = loop_once(mesh.faces(), u_steps, start);
        let after_two = loop_once(mesh.faces(), u_steps, after_one);

        // one loop lands on the other side of the strip
        assert_ne!(after_one, start);
        assert!(v_of(start) * v_of(after_one) < 0.0, "{u_steps}x{v_steps}");
        // the second loop returns to the starting vertex
        assert_eq!(after_two, start);
    }
}

#[test]
fn two_row_band_closes_after_two_loops() {
    let mesh = generate_mobius_mesh(5, 2, false).unwrap();
    let after_one = loop_once(mesh.faces(), 5, 1);
    assert_eq!(after_one, 0);
    assert_eq!(loop_once(mesh.faces(), 5, after_one), 1);
}

#[test]
fn invalid_configuration_is_rejected() {
    for (u_steps, v_steps) in [(0, 2), (1, 2), (4, 0)] {
        let err = generate_mobius_mesh(u_steps, v_steps, false).unwrap_err();
        assert!(matches!(err, MeshError::InvalidConfig(_)));
    }
}

#[test]
fn hand_built_configuration_is_rejected() {
    for u_steps in [0, 1] {
        for triangulate in [false, true] {
            let config = GridConfig {
                u_steps,
                v_steps: 2,
                triangulate,
            };
            assert!(matches!(generate(&config), Err(MeshError::InvalidConfig(_))));
        }
    }
}
