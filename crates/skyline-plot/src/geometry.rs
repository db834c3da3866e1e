//! Solid bar geometry.
//!
//! Bar charts cannot lean on a renderer's built-in 3D bar primitive (none of
//! the common trace formats have one), so each bar is synthesized as an
//! explicit rectangular prism: 8 vertices and 12 triangular faces.

use glam::DVec3;
use skyline_core::math::packed;

use crate::color::Color;
use crate::palette::Palette;
use crate::point::Point3D;

/// Local vertex numbering: 0-3 bottom ring, 4-7 top ring, both
/// counter-clockwise seen from +z starting at (-x, -y).
const FACES: [[u32; 3]; 12] = [
    // bottom (facing -z)
    [0, 2, 1],
    [0, 3, 2],
    // top (facing +z)
    [4, 5, 6],
    [4, 6, 7],
    // front (-y)
    [0, 1, 5],
    [0, 5, 4],
    // right (+x)
    [1, 2, 6],
    [1, 6, 5],
    // back (+y)
    [2, 3, 7],
    [2, 7, 6],
    // left (-x)
    [3, 0, 4],
    [3, 4, 7],
];

/// Explicit geometry for one 3D bar.
///
/// Always exactly 8 vertices and 12 faces, whatever the height's sign or
/// magnitude. The bar spans from the z = 0 baseline to the value; negative
/// values extend below the baseline while `height_value` keeps the sign for
/// display.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSolid {
    pub vertices: [DVec3; 8],
    pub faces: [[u32; 3]; 12],
    pub color: Color,
    /// The signed value this bar displays.
    pub height_value: f64,
}

impl BarSolid {
    /// Build the prism for a point: footprint `width x depth` centered on
    /// `(point.x, point.y)`, extent from the baseline to `point.z`.
    ///
    /// `normalized_height` is `|z| / max|z|` over the dataset and selects the
    /// gradient color; the caller passes 0.0 when `max|z|` is zero so the
    /// degenerate all-flat dataset never divides by zero.
    pub fn build(
        point: &Point3D,
        width: f64,
        depth: f64,
        normalized_height: f64,
        palette: &Palette,
    ) -> Self {
        let hw = width / 2.0;
        let hd = depth / 2.0;
        let (x, y, h) = (point.x, point.y, point.z);
        let z0 = h.min(0.0);
        let z1 = h.max(0.0);

        let vertices = [
            DVec3::new(x - hw, y - hd, z0),
            DVec3::new(x + hw, y - hd, z0),
            DVec3::new(x + hw, y + hd, z0),
            DVec3::new(x - hw, y + hd, z0),
            DVec3::new(x - hw, y - hd, z1),
            DVec3::new(x + hw, y - hd, z1),
            DVec3::new(x + hw, y + hd, z1),
            DVec3::new(x - hw, y + hd, z1),
        ];

        Self {
            vertices,
            faces: FACES,
            color: palette.grade(normalized_height),
            height_value: h,
        }
    }

    /// Vertex coordinates split into parallel `x`/`y`/`z` arrays, the layout
    /// mesh-style trace formats expect.
    pub fn coordinate_arrays(&self) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        let x = self.vertices.iter().map(|v| v.x).collect();
        let y = self.vertices.iter().map(|v| v.y).collect();
        let z = self.vertices.iter().map(|v| v.z).collect();
        (x, y, z)
    }

    /// Vertices packed for direct GPU buffer upload.
    pub fn packed_vertices(&self) -> [packed::Vec3; 8] {
        self.vertices.map(packed::Vec3::from)
    }
}

/// `max |z|` over a point set, the divisor for bar color normalization.
pub fn max_abs_height(points: &[Point3D]) -> f64 {
    points.iter().fold(0.0, |acc, p| acc.max(p.z.abs()))
}

/// Normalize a height against the dataset maximum; 0.0 when the maximum is
/// zero so flat datasets color every bar with the first gradient step.
pub fn normalized_height(z: f64, max_abs: f64) -> f64 {
    if max_abs == 0.0 { 0.0 } else { z.abs() / max_abs }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::FieldValue;

    fn point(z: f64) -> Point3D {
        Point3D::new(
            2.0,
            3.0,
            z,
            FieldValue::Number(2.0),
            FieldValue::Number(3.0),
            FieldValue::Number(z),
            0,
        )
    }

    fn build(z: f64) -> BarSolid {
        BarSolid::build(&point(z), 0.8, 0.8, 0.5, Palette::default_palette())
    }

    #[test]
    fn test_vertex_and_face_counts() {
        for height in [-100.0, 0.0, 0.0001, 1e6] {
            let solid = build(height);
            assert_eq!(solid.vertices.len(), 8);
            assert_eq!(solid.faces.len(), 12);
        }
    }

    #[test]
    fn test_faces_reference_local_vertices() {
        let solid = build(42.0);
        for face in &solid.faces {
            for &idx in face {
                assert!(idx < 8);
            }
        }
    }

    #[test]
    fn test_positive_height_spans_baseline_to_value() {
        let solid = build(10.0);
        for v in &solid.vertices[0..4] {
            assert_eq!(v.z, 0.0);
        }
        for v in &solid.vertices[4..8] {
            assert_eq!(v.z, 10.0);
        }
        assert_eq!(solid.height_value, 10.0);
    }

    #[test]
    fn test_negative_height_mirrors_below_baseline() {
        let solid = build(-7.5);
        for v in &solid.vertices[0..4] {
            assert_eq!(v.z, -7.5);
        }
        for v in &solid.vertices[4..8] {
            assert_eq!(v.z, 0.0);
        }
        // Displayed value keeps its sign.
        assert_eq!(solid.height_value, -7.5);
    }

    #[test]
    fn test_footprint_centered() {
        let solid = build(1.0);
        let xs: Vec<f64> = solid.vertices.iter().map(|v| v.x).collect();
        let ys: Vec<f64> = solid.vertices.iter().map(|v| v.y).collect();
        assert_eq!(xs.iter().cloned().fold(f64::INFINITY, f64::min), 1.6);
        assert_eq!(xs.iter().cloned().fold(f64::NEG_INFINITY, f64::max), 2.4);
        assert_eq!(ys.iter().cloned().fold(f64::INFINITY, f64::min), 2.6);
        assert_eq!(ys.iter().cloned().fold(f64::NEG_INFINITY, f64::max), 3.4);
    }

    #[test]
    fn test_zero_max_height_grades_to_first_step() {
        assert_eq!(normalized_height(0.0, 0.0), 0.0);
        let palette = Palette::default_palette();
        let solid = BarSolid::build(&point(0.0), 1.0, 1.0, normalized_height(0.0, 0.0), palette);
        assert_eq!(solid.color, palette.gradient[0]);
    }

    #[test]
    fn test_max_abs_height() {
        let pts = vec![point(3.0), point(-9.0), point(4.0)];
        assert_eq!(max_abs_height(&pts), 9.0);
    }
}
