/// Attribute interpolation over barycentric weights
///
/// Every routine computes `alpha * a0 + beta * a1 + gamma * a2`. The weights
/// come from screen-space areas, so results are exact for affine quantities
/// under orthographic projection only. Attributes of a triangle that went
/// through a perspective projection are interpolated without 1/w correction;
/// callers needing perspective-correct values must divide by w themselves.

use std::ops::{Add, Mul};

use nalgebra::{Vector2, Vector3};

use crate::barycentric::Barycentric;
use crate::geometry::Triangle;

/// Weighted sum of a per-vertex attribute triple.
///
/// `attrs` must be ordered like the triangle the weights were computed for.
#[inline(always)]
pub fn interpolate<T>(bary: &Barycentric, attrs: [T; 3]) -> T
where
    T: Copy + Add<Output = T> + Mul<f32, Output = T>,
{
    attrs[0] * bary.alpha + attrs[1] * bary.beta + attrs[2] * bary.gamma
}

/// Depth at the weighted point, from the vertices' z components
#[inline(always)]
pub fn interpolate_depth(bary: &Barycentric, triangle: &Triangle) -> f32 {
    interpolate(bary, triangle.vertices.map(|v| v.z))
}

/// Interpolated normal. Not renormalized.
pub fn interpolate_normal(bary: &Barycentric, normals: [Vector3<f32>; 3]) -> Vector3<f32> {
    interpolate(bary, normals)
}

pub fn interpolate_color(bary: &Barycentric, colors: [Vector3<f32>; 3]) -> Vector3<f32> {
    interpolate(bary, colors)
}

pub fn interpolate_texcoord(bary: &Barycentric, texcoords: [Vector2<f32>; 3]) -> Vector2<f32> {
    interpolate(bary, texcoords)
}
