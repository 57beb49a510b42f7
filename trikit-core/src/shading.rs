/// Per-vertex records and fragment shading
///
/// [`ShadedTriangle`] bundles each position with its normal, color and
/// texcoord, so attributes can never be paired with the wrong vertex.

use nalgebra::{Point2, Point3, Vector2, Vector3};

use crate::barycentric::{is_inside, try_barycentric, Barycentric};
use crate::geometry::Triangle;
use crate::interpolate::{
    interpolate_color, interpolate_depth, interpolate_normal, interpolate_texcoord,
};
use crate::texture::TextureView;

/// A vertex with position and shading attributes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: Point3<f32>,
    pub normal: Vector3<f32>,
    pub color: Vector3<f32>,
    pub texcoord: Vector2<f32>,
}

impl Vertex {
    /// White, untextured vertex
    pub fn new(position: Point3<f32>, normal: Vector3<f32>) -> Self {
        Self {
            position,
            normal,
            color: Vector3::repeat(1.0),
            texcoord: Vector2::zeros(),
        }
    }

    pub fn with_color(mut self, color: Vector3<f32>) -> Self {
        self.color = color;
        self
    }

    pub fn with_texcoord(mut self, texcoord: Vector2<f32>) -> Self {
        self.texcoord = texcoord;
        self
    }
}

/// Interpolated attributes at a covered point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fragment {
    pub barycentric: Barycentric,
    pub depth: f32,
    pub normal: Vector3<f32>,
    pub color: Vector3<f32>,
    pub texcoord: Vector2<f32>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadedTriangle {
    pub vertices: [Vertex; 3],
}

impl ShadedTriangle {
    pub fn new(v0: Vertex, v1: Vertex, v2: Vertex) -> Self {
        Self {
            vertices: [v0, v1, v2],
        }
    }

    /// Positions only
    pub fn geometry(&self) -> Triangle {
        Triangle {
            vertices: self.vertices.map(|v| v.position),
        }
    }

    /// Shade `point` if the triangle covers it.
    ///
    /// Returns `None` for uncovered points and for degenerate triangles.
    pub fn shade(&self, point: Point2<f32>) -> Option<Fragment> {
        let triangle = self.geometry();
        let bary = try_barycentric(&triangle, point)?;
        if !is_inside(&bary) {
            return None;
        }

        Some(Fragment {
            barycentric: bary,
            depth: interpolate_depth(&bary, &triangle),
            normal: interpolate_normal(&bary, self.vertices.map(|v| v.normal)),
            color: interpolate_color(&bary, self.vertices.map(|v| v.color)),
            texcoord: interpolate_texcoord(&bary, self.vertices.map(|v| v.texcoord)),
        })
    }

    /// Like [`shade`](Self::shade), with color sampled from `texture` at the
    /// interpolated texcoord
    pub fn shade_textured(&self, point: Point2<f32>, texture: &TextureView) -> Option<Fragment> {
        self.shade(point).map(|fragment| Fragment {
            color: texture.sample(fragment.texcoord),
            ..fragment
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::barycentric::barycentric;

    const EPS: f32 = 1e-5;

    fn rgb_triangle() -> ShadedTriangle {
        let up = Vector3::new(0.0, 0.0, 1.0);
        ShadedTriangle::new(
            Vertex::new(Point3::new(0.0, 0.0, 0.0), up)
                .with_color(Vector3::new(1.0, 0.0, 0.0))
                .with_texcoord(Vector2::new(0.0, 0.0)),
            Vertex::new(Point3::new(6.0, 0.0, 3.0), up)
                .with_color(Vector3::new(0.0, 1.0, 0.0))
                .with_texcoord(Vector2::new(1.0, 0.0)),
            Vertex::new(Point3::new(0.0, 6.0, 6.0), up)
                .with_color(Vector3::new(0.0, 0.0, 1.0))
                .with_texcoord(Vector2::new(0.0, 1.0)),
        )
    }

    #[test]
    fn test_vertex_defaults() {
        let v = Vertex::new(Point3::origin(), Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(v.color, Vector3::new(1.0, 1.0, 1.0));
        assert_eq!(v.texcoord, Vector2::zeros());
    }

    #[test]
    fn test_shade_centroid() {
        let fragment = rgb_triangle().shade(Point2::new(2.0, 2.0)).unwrap();
        let third = 1.0 / 3.0;
        assert!((fragment.depth - 3.0).abs() < EPS);
        assert!((fragment.color - Vector3::new(third, third, third)).norm() < EPS);
        assert!((fragment.texcoord - Vector2::new(third, third)).norm() < EPS);
        assert!((fragment.normal - Vector3::new(0.0, 0.0, 1.0)).norm() < EPS);
    }

    #[test]
    fn test_shade_matches_free_functions() {
        let tri = rgb_triangle();
        let point = Point2::new(1.0, 3.5);
        let fragment = tri.shade(point).unwrap();
        let bary = barycentric(&tri.geometry(), point);

        assert_eq!(fragment.barycentric, bary);
        assert_eq!(fragment.depth, interpolate_depth(&bary, &tri.geometry()));
        assert_eq!(
            fragment.color,
            interpolate_color(&bary, tri.vertices.map(|v| v.color))
        );
    }

    #[test]
    fn test_shade_outside() {
        assert!(rgb_triangle().shade(Point2::new(5.0, 5.0)).is_none());
        assert!(rgb_triangle().shade(Point2::new(-0.5, 1.0)).is_none());
    }

    #[test]
    fn test_shade_degenerate() {
        let n = Vector3::new(0.0, 0.0, 1.0);
        let tri = ShadedTriangle::new(
            Vertex::new(Point3::new(0.0, 0.0, 0.0), n),
            Vertex::new(Point3::new(1.0, 1.0, 0.0), n),
            Vertex::new(Point3::new(2.0, 2.0, 0.0), n),
        );
        assert!(tri.shade(Point2::new(1.0, 1.0)).is_none());
    }

    #[test]
    fn test_shade_textured() {
        // 2x2 RGB: top-left red, top-right green, bottom-left blue, bottom-right white
        let data = [
            255u8, 0, 0, 0, 255, 0, //
            0, 0, 255, 255, 255, 255,
        ];
        let texture = TextureView::new(&data, 2, 2, 3).unwrap();
        let tri = rgb_triangle();

        // Near vertex 1, texcoord ~ (1, 0) wraps toward column 1, row 0
        let fragment = tri.shade_textured(Point2::new(5.0, 0.5), &texture).unwrap();
        assert!((fragment.color - Vector3::new(0.0, 1.0, 0.0)).norm() < EPS);

        // Near vertex 2, texcoord ~ (0, 1) lands in row 1, column 0
        let fragment = tri.shade_textured(Point2::new(0.5, 5.0), &texture).unwrap();
        assert!((fragment.color - Vector3::new(0.0, 0.0, 1.0)).norm() < EPS);
    }
}
