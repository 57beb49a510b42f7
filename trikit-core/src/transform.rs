/// Matrix-vector helpers for moving vertices between spaces
use nalgebra::{Matrix4, Point3, Vector3, Vector4};

use crate::geometry::Triangle;

/// Multiply a homogeneous vector by `matrix` and keep x, y, z.
///
/// No perspective division happens here: w is dropped, not divided out.
#[inline(always)]
pub fn transform_point(matrix: &Matrix4<f32>, vector: &Vector4<f32>) -> Vector3<f32> {
    (matrix * vector).xyz()
}

/// Transform a position (w = 1), so translation applies
pub fn transform_position(matrix: &Matrix4<f32>, position: &Point3<f32>) -> Point3<f32> {
    Point3::from(transform_point(matrix, &position.to_homogeneous()))
}

/// Transform a direction or normal (w = 0), so translation is ignored
pub fn transform_direction(matrix: &Matrix4<f32>, direction: &Vector3<f32>) -> Vector3<f32> {
    transform_point(matrix, &direction.push(0.0))
}

/// Transform all three positions, keeping vertex order
pub fn transform_triangle(matrix: &Matrix4<f32>, triangle: &Triangle) -> Triangle {
    Triangle {
        vertices: triangle.vertices.map(|v| transform_position(matrix, &v)),
    }
}
