//! Per-panel placement for each arrangement.
//!
//! Positions are computed in f64 and narrowed once, so the sphere radius and
//! helix strands hold to f32 precision.

use bevy::prelude::{Dir3, Transform, Vec3};
use std::f64::consts::PI;

use super::LayoutTransform;

// Table: 20 columns x 10 rows, wrapping past 200 panels
pub const TABLE_COLUMNS: usize = 20;
pub const TABLE_ROWS: usize = 10;
pub const TABLE_COLUMN_SPACING: f64 = 160.0;
pub const TABLE_ROW_SPACING: f64 = 200.0;
pub const TABLE_X_OFFSET: f64 = 1500.0;
pub const TABLE_Y_OFFSET: f64 = 800.0;

pub const SPHERE_RADIUS: f64 = 800.0;

pub const HELIX_ANGLE_STEP: f64 = 0.35;
pub const HELIX_INNER_RADIUS: f64 = 500.0;
pub const HELIX_OUTER_RADIUS: f64 = 650.0;
pub const HELIX_RISE: f64 = 8.0;
pub const HELIX_Y_OFFSET: f64 = 400.0;

// Grid: 5 x 4 per layer, a new z layer every 20 panels
pub const GRID_X: usize = 5;
pub const GRID_Y: usize = 4;
pub const GRID_LAYER: usize = GRID_X * GRID_Y;
pub const GRID_SPACING: f64 = 400.0;
pub const GRID_OFFSET: f64 = 800.0;

fn vec3(x: f64, y: f64, z: f64) -> Vec3 {
    Vec3::new(x as f32, y as f32, z as f32)
}

pub fn table(i: usize) -> LayoutTransform {
    let column = (i % TABLE_COLUMNS) as f64;
    let row = ((i / TABLE_COLUMNS) % TABLE_ROWS) as f64;

    LayoutTransform::at(vec3(
        column * TABLE_COLUMN_SPACING - TABLE_X_OFFSET,
        -row * TABLE_ROW_SPACING + TABLE_Y_OFFSET,
        0.0,
    ))
}

/// Point `i` of `count` on a golden-spiral-like sphere, front face outward
///
/// A lone panel sits at the pole (phi = 0).
pub fn sphere(i: usize, count: usize) -> LayoutTransform {
    let n = count as f64;
    let phi = if count <= 1 {
        0.0
    } else {
        (-1.0 + 2.0 * i as f64 / n).acos()
    };
    let theta = (n * PI).sqrt() * phi;

    let position = spherical_to_cartesian(SPHERE_RADIUS, phi, theta);
    // Bevy aims -Z at the target; aiming it at the center leaves the
    // front face (+Z, the side the camera sees at rest) pointing outward
    let rotation = Transform::from_translation(position)
        .looking_at(Vec3::ZERO, Dir3::Y)
        .rotation;

    LayoutTransform {
        position,
        orientation: Some(rotation),
    }
}

/// Y-up spherical coordinates: phi from +Y, theta around Y starting at +Z
fn spherical_to_cartesian(radius: f64, phi: f64, theta: f64) -> Vec3 {
    let ring = radius * phi.sin();
    vec3(ring * theta.sin(), radius * phi.cos(), ring * theta.cos())
}

/// Two interleaved strands: even panels inside, odd panels outside
pub fn helix(i: usize) -> LayoutTransform {
    let angle = i as f64 * HELIX_ANGLE_STEP;
    let radius = if i % 2 == 0 {
        HELIX_INNER_RADIUS
    } else {
        HELIX_OUTER_RADIUS
    };

    LayoutTransform::at(vec3(
        angle.sin() * radius,
        i as f64 * HELIX_RISE - HELIX_Y_OFFSET,
        angle.cos() * radius,
    ))
}

pub fn grid(i: usize) -> LayoutTransform {
    let x = (i % GRID_X) as f64;
    let y = ((i / GRID_X) % GRID_Y) as f64;
    let z = (i / GRID_LAYER) as f64;

    LayoutTransform::at(vec3(
        x * GRID_SPACING - GRID_OFFSET,
        -y * GRID_SPACING + GRID_OFFSET,
        z * GRID_SPACING - GRID_OFFSET,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{LayoutKind, generate_layouts};

    fn length_f64(v: Vec3) -> f64 {
        let (x, y, z) = (v.x as f64, v.y as f64, v.z as f64);
        (x * x + y * y + z * z).sqrt()
    }

    #[test]
    fn test_table_first_cell_and_row_break() {
        let first = table(0).position;
        assert_eq!(first, Vec3::new(-1500.0, 800.0, 0.0));
        assert_eq!(table(19).position, Vec3::new(1540.0, 800.0, 0.0));

        // Item 20 starts the second row, back in the first column
        let second_row = table(20).position;
        assert_eq!(second_row.x, first.x);
        assert_eq!(second_row.y, first.y - 200.0);
        assert_eq!(second_row.z, 0.0);
    }

    #[test]
    fn test_table_wraps_after_two_hundred() {
        let layouts = generate_layouts(201);
        let table = layouts.get(LayoutKind::Table);

        assert_eq!(table[199].position, Vec3::new(1540.0, -1000.0, 0.0));
        assert_eq!(table[200].position, table[0].position);
    }

    #[test]
    fn test_sphere_points_on_radius() {
        for count in [2, 3, 10, 57, 200] {
            let layouts = generate_layouts(count);
            for (i, t) in layouts.get(LayoutKind::Sphere).iter().enumerate() {
                let r = length_f64(t.position);
                assert!(
                    ((r - SPHERE_RADIUS) / SPHERE_RADIUS).abs() < 1e-6,
                    "point {} of {} at radius {}",
                    i,
                    count,
                    r
                );
            }
        }
    }

    #[test]
    fn test_sphere_degenerate_counts() {
        assert!(generate_layouts(0).get(LayoutKind::Sphere).is_empty());

        let single = generate_layouts(1);
        let single = single.get(LayoutKind::Sphere);
        assert_eq!(single.len(), 1);
        // phi = 0 puts the lone panel on the +Y pole
        assert!(single[0].position.abs_diff_eq(Vec3::new(0.0, 800.0, 0.0), 1e-3));
    }

    #[test]
    fn test_sphere_panels_face_outward() {
        for count in [1, 8, 40] {
            for i in 0..count {
                let t = sphere(i, count);
                let front = t.orientation.unwrap() * Vec3::Z;
                let outward = t.position.normalize();
                assert!(
                    front.dot(outward) > 0.9999,
                    "panel {} of {} faces {:?}, expected {:?}",
                    i,
                    count,
                    front,
                    outward
                );
            }
        }
    }

    #[test]
    fn test_sphere_spans_both_poles() {
        let layouts = generate_layouts(50);
        let sphere = layouts.get(LayoutKind::Sphere);
        // phi = acos(-1) for the first panel: the -Y pole
        assert!(sphere[0].position.abs_diff_eq(Vec3::new(0.0, -800.0, 0.0), 1e-3));
        assert!(sphere[49].position.y > 700.0);
    }

    #[test]
    fn test_helix_strands_and_ascent() {
        let layouts = generate_layouts(120);
        let helix = layouts.get(LayoutKind::Helix);

        for (i, t) in helix.iter().enumerate() {
            let p = t.position;
            let radius = ((p.x as f64).powi(2) + (p.z as f64).powi(2)).sqrt();
            let expected = if i % 2 == 0 { 500.0 } else { 650.0 };
            assert!(
                (radius - expected).abs() < 1e-3,
                "panel {} at radius {}",
                i,
                radius
            );
        }

        for pair in helix.windows(2) {
            assert!(pair[1].position.y > pair[0].position.y);
        }
        assert_eq!(helix[0].position.y, -400.0);
        assert_eq!(helix[100].position.y, 400.0);
    }

    #[test]
    fn test_grid_layers_and_axes() {
        let layouts = generate_layouts(100);
        let grid = layouts.get(LayoutKind::Grid);

        assert_eq!(grid[0].position, Vec3::new(-800.0, 800.0, -800.0));

        // A new z layer every 20 panels
        assert_ne!(grid[19].position.z, grid[20].position.z);
        assert_eq!(grid[20].position.z, grid[0].position.z + 400.0);

        // Neighbours in a row differ only in x
        assert_ne!(grid[0].position.x, grid[1].position.x);
        assert_eq!(grid[0].position.y, grid[1].position.y);
        assert_eq!(grid[0].position.z, grid[1].position.z);

        // Every 5 panels starts a new y row in the same layer
        assert_eq!(grid[0].position.x, grid[5].position.x);
        assert_eq!(grid[5].position.y, grid[0].position.y - 400.0);
        assert_eq!(grid[0].position.z, grid[5].position.z);

        assert_eq!(grid[99].position, Vec3::new(800.0, -400.0, 800.0));
    }
}
