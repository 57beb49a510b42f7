/// Triangle primitives: bounding boxes, signed area and face normals
use nalgebra::{Point2, Point3, Vector3};

use crate::error::{Error, Result};

/// Triangles whose absolute signed area falls below this are treated as degenerate
pub const DEGENERATE_AREA_EPSILON: f32 = 1e-6;

/// Three vertex positions in a consistent winding order.
///
/// Only the x and y components take part in area and barycentric
/// computations; z is carried along as depth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub vertices: [Point3<f32>; 3],
}

impl Triangle {
    pub fn new(v0: Point3<f32>, v1: Point3<f32>, v2: Point3<f32>) -> Self {
        Self {
            vertices: [v0, v1, v2],
        }
    }

    /// Build a triangle from nine packed floats `[x0, y0, z0, x1, y1, z1, x2, y2, z2]`
    pub fn from_flat(data: &[f32]) -> Result<Self> {
        if data.len() != 9 {
            return Err(Error::FlatLength {
                expected: 9,
                actual: data.len(),
            });
        }

        Ok(Self::new(
            Point3::new(data[0], data[1], data[2]),
            Point3::new(data[3], data[4], data[5]),
            Point3::new(data[6], data[7], data[8]),
        ))
    }

    /// Screen-space (x, y) projection of each vertex
    pub fn xy(&self) -> [Point2<f32>; 3] {
        self.vertices.map(|v| v.xy())
    }
}

/// Axis aligned bounding box. `min <= max` holds component-wise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Point3<f32>,
    pub max: Point3<f32>,
}

impl Aabb {
    /// Closed containment test on all three axes
    pub fn contains(&self, point: &Point3<f32>) -> bool {
        (0..3).all(|i| point[i] >= self.min[i] && point[i] <= self.max[i])
    }

    pub fn extent(&self) -> Vector3<f32> {
        self.max - self.min
    }
}

/// Component-wise min and max over the three vertices.
///
/// The rasterizer uses the x/y extent to bound its pixel loop.
pub fn bounding_box(triangle: &Triangle) -> Aabb {
    let [a, b, c] = triangle.vertices;

    Aabb {
        min: Point3::new(
            a.x.min(b.x).min(c.x),
            a.y.min(b.y).min(c.y),
            a.z.min(b.z).min(c.z),
        ),
        max: Point3::new(
            a.x.max(b.x).max(c.x),
            a.y.max(b.y).max(c.y),
            a.z.max(b.z).max(c.z),
        ),
    }
}

/// Signed area of the triangle's (x, y) projection.
///
/// The sign encodes winding order. Collinear vertices give exactly zero.
pub fn signed_area(triangle: &Triangle) -> f32 {
    let [a, b, c] = triangle.xy();
    signed_area_xy(a, b, c)
}

/// Shoelace area for three points in the plane
#[inline(always)]
pub(crate) fn signed_area_xy(a: Point2<f32>, b: Point2<f32>, c: Point2<f32>) -> f32 {
    0.5 * ((c.x - a.x) * (b.y - a.y) - (b.x - a.x) * (c.y - a.y))
}

pub fn is_degenerate(triangle: &Triangle) -> bool {
    signed_area(triangle).abs() < DEGENERATE_AREA_EPSILON
}

/// Unit face normal from the cross product of the two edges leaving vertex 0.
///
/// Returns the zero vector when the edges are parallel.
pub fn face_normal(triangle: &Triangle) -> Vector3<f32> {
    let [v0, v1, v2] = triangle.vertices;
    let edge1 = v1 - v0;
    let edge2 = v2 - v0;

    edge1
        .cross(&edge2)
        .try_normalize(f32::EPSILON)
        .unwrap_or_else(Vector3::zeros)
}
