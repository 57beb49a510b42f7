/// Barycentric coordinates and the coverage test
///
/// Weights are ratios of sub-triangle signed areas to the full signed area,
/// computed on the (x, y) projection only. They always sum to one, inside
/// or outside the triangle.

use nalgebra::{Point2, Vector3};

use crate::geometry::{is_degenerate, signed_area_xy, Triangle};

/// Weights of a point relative to a triangle's three vertices.
///
/// `alpha` belongs to vertex 0, `beta` to vertex 1, `gamma` to vertex 2.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Barycentric {
    pub alpha: f32,
    pub beta: f32,
    pub gamma: f32,
}

impl Barycentric {
    pub fn new(alpha: f32, beta: f32, gamma: f32) -> Self {
        Self { alpha, beta, gamma }
    }

    pub fn weights(&self) -> [f32; 3] {
        [self.alpha, self.beta, self.gamma]
    }

    pub fn as_vector(&self) -> Vector3<f32> {
        Vector3::new(self.alpha, self.beta, self.gamma)
    }

    pub fn is_finite(&self) -> bool {
        self.weights().iter().all(|w| w.is_finite())
    }
}

/// Barycentric coordinates of `point` with respect to `triangle`.
///
/// A degenerate triangle divides by zero and yields non-finite weights;
/// callers that cannot rule that out should use [`try_barycentric`].
pub fn barycentric(triangle: &Triangle, point: Point2<f32>) -> Barycentric {
    let [v0, v1, v2] = triangle.xy();
    let area = signed_area_xy(v0, v1, v2);

    let beta = signed_area_xy(v0, point, v2) / area;
    let gamma = signed_area_xy(v0, v1, point) / area;
    let alpha = 1.0 - beta - gamma;

    Barycentric::new(alpha, beta, gamma)
}

/// Like [`barycentric`], but returns `None` for degenerate triangles
pub fn try_barycentric(triangle: &Triangle, point: Point2<f32>) -> Option<Barycentric> {
    if is_degenerate(triangle) {
        tracing::trace!(?triangle, "skipping degenerate triangle");
        return None;
    }
    Some(barycentric(triangle, point))
}

/// True iff every weight lies in the closed interval [0, 1].
///
/// NaN weights compare false, so results from degenerate triangles are
/// never inside.
#[inline(always)]
pub fn is_inside(bary: &Barycentric) -> bool {
    bary.weights().iter().all(|w| (0.0..=1.0).contains(w))
}
