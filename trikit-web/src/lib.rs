/// trikit web - WASM exports of the triangle core
///
/// Triangles cross the boundary as nine packed floats
/// `[x0, y0, z0, x1, y1, z1, x2, y2, z2]`; vectors come back as flat arrays.
/// Each export wraps a native function so the same math is tested on the host.

use nalgebra::{Point2, Vector2};
use trikit_core::{Barycentric, Result, TextureView, Triangle};
use wasm_bindgen::prelude::*;

fn to_js(err: trikit_core::Error) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// `[min.x, min.y, min.z, max.x, max.y, max.z]`
pub fn bounding_box_native(triangle: &[f32]) -> Result<Vec<f32>> {
    let aabb = trikit_core::bounding_box(&Triangle::from_flat(triangle)?);
    Ok(aabb.min.coords.iter().chain(aabb.max.coords.iter()).copied().collect())
}

pub fn signed_area_native(triangle: &[f32]) -> Result<f32> {
    Ok(trikit_core::signed_area(&Triangle::from_flat(triangle)?))
}

/// `[alpha, beta, gamma]`
pub fn barycentric_native(triangle: &[f32], x: f32, y: f32) -> Result<Vec<f32>> {
    let triangle = Triangle::from_flat(triangle)?;
    Ok(trikit_core::barycentric(&triangle, Point2::new(x, y))
        .weights()
        .to_vec())
}

/// Depth at `(x, y)`, or NaN when the point is not covered
pub fn interpolate_depth_native(triangle: &[f32], x: f32, y: f32) -> Result<f32> {
    let triangle = Triangle::from_flat(triangle)?;
    let depth = trikit_core::try_barycentric(&triangle, Point2::new(x, y))
        .filter(trikit_core::is_inside)
        .map_or(f32::NAN, |bary| trikit_core::interpolate_depth(&bary, &triangle));
    Ok(depth)
}

/// `[r, g, b]` in [0, 1]
pub fn sample_texture_native(
    data: &[u8],
    u: f32,
    v: f32,
    width: usize,
    height: usize,
    stride: usize,
) -> Result<Vec<f32>> {
    let texture = TextureView::new(data, width, height, stride)?;
    Ok(texture.sample(Vector2::new(u, v)).iter().copied().collect())
}

#[wasm_bindgen(js_name = boundingBox)]
pub fn bounding_box(triangle: &[f32]) -> std::result::Result<Vec<f32>, JsValue> {
    bounding_box_native(triangle).map_err(to_js)
}

#[wasm_bindgen(js_name = signedArea)]
pub fn signed_area(triangle: &[f32]) -> std::result::Result<f32, JsValue> {
    signed_area_native(triangle).map_err(to_js)
}

#[wasm_bindgen]
pub fn barycentric(triangle: &[f32], x: f32, y: f32) -> std::result::Result<Vec<f32>, JsValue> {
    barycentric_native(triangle, x, y).map_err(to_js)
}

#[wasm_bindgen(js_name = isInside)]
pub fn is_inside(alpha: f32, beta: f32, gamma: f32) -> bool {
    trikit_core::is_inside(&Barycentric::new(alpha, beta, gamma))
}

#[wasm_bindgen(js_name = interpolateDepth)]
pub fn interpolate_depth(triangle: &[f32], x: f32, y: f32) -> std::result::Result<f32, JsValue> {
    interpolate_depth_native(triangle, x, y).map_err(to_js)
}

#[wasm_bindgen(js_name = sampleTexture)]
pub fn sample_texture(
    data: &[u8],
    u: f32,
    v: f32,
    width: usize,
    height: usize,
    stride: usize,
) -> std::result::Result<Vec<f32>, JsValue> {
    sample_texture_native(data, u, v, width, height, stride).map_err(to_js)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRI: [f32; 9] = [0.0, 0.0, 0.0, 4.0, 0.0, 1.0, 2.0, 3.0, 2.0];

    #[test]
    fn test_bounding_box() {
        let aabb = bounding_box_native(&TRI).unwrap();
        assert_eq!(aabb, vec![0.0, 0.0, 0.0, 4.0, 3.0, 2.0]);
    }

    #[test]
    fn test_signed_area() {
        assert!((signed_area_native(&TRI).unwrap().abs() - 6.0).abs() < 1e-6);
    }

    #[test]
    fn test_barycentric() {
        let weights = barycentric_native(&TRI, 4.0, 0.0).unwrap();
        assert!((weights[0]).abs() < 1e-6);
        assert!((weights[1] - 1.0).abs() < 1e-6);
        assert!((weights[2]).abs() < 1e-6);
        assert!(is_inside(weights[0], weights[1], weights[2]));
        assert!(!is_inside(-0.5, 1.0, 0.5));
    }

    #[test]
    fn test_interpolate_depth() {
        let depth = interpolate_depth_native(&TRI, 2.0, 1.0).unwrap();
        assert!((depth - 1.0).abs() < 1e-5);
        assert!(interpolate_depth_native(&TRI, 10.0, 10.0).unwrap().is_nan());
    }

    #[test]
    fn test_sample_texture() {
        let data = [0u8, 51, 255, 255, 255, 255];
        let rgb = sample_texture_native(&data, 0.25, 0.0, 2, 1, 3).unwrap();
        assert!((rgb[0]).abs() < 1e-6);
        assert!((rgb[1] - 0.2).abs() < 1e-6);
        assert!((rgb[2] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_malformed_input() {
        assert_eq!(
            barycentric_native(&[0.0; 4], 0.0, 0.0).unwrap_err(),
            trikit_core::Error::FlatLength {
                expected: 9,
                actual: 4
            }
        );
        assert!(sample_texture_native(&[0u8; 3], 0.0, 0.0, 2, 2, 3).is_err());
        assert_eq!(
            sample_texture_native(&[0u8; 3], 0.0, 0.0, usize::MAX, 2, 4).unwrap_err(),
            trikit_core::Error::SizeOverflow {
                width: usize::MAX,
                height: 2,
                stride: 4
            }
        );
    }
}
