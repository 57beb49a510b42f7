/// Nearest-neighbor texture sampling with repeat addressing
///
/// Textures are caller-owned, row-major, interleaved byte buffers. The core
/// only reads the first three channels of each texel.

use nalgebra::{Vector2, Vector3};

use crate::error::{Error, Result};

/// Sample a texture at normalized coordinates.
///
/// Texel indices are `floor(width * u) mod width` and
/// `floor(height * v) mod height`, so coordinates outside [0, 1] (including
/// negative ones) wrap around. Each channel is returned in [0, 1].
///
/// The buffer must hold at least `width * height * stride` bytes and
/// `stride` must be at least 3. Violations panic on the slice index; use
/// [`TextureView`] to check the contract once up front.
pub fn sample_texture(
    data: &[u8],
    texcoord: Vector2<f32>,
    width: usize,
    height: usize,
    stride: usize,
) -> Vector3<f32> {
    debug_assert!(width > 0 && height > 0);
    debug_assert!(stride >= 3);
    debug_assert!(texture_len(width, height, stride).is_some_and(|len| data.len() >= len));

    let x = wrap(texcoord.x, width);
    let y = wrap(texcoord.y, height);
    read_texel(data, x + y * width, stride)
}

/// Bytes needed for a `width x height` texture, or `None` if that overflows `usize`
fn texture_len(width: usize, height: usize, stride: usize) -> Option<usize> {
    width.checked_mul(height)?.checked_mul(stride)
}

#[inline(always)]
fn wrap(coord: f32, size: usize) -> usize {
    let texel = (size as f32 * coord).floor() as i64;
    texel.rem_euclid(size as i64) as usize
}

#[inline(always)]
fn read_texel(data: &[u8], index: usize, stride: usize) -> Vector3<f32> {
    let offset = index * stride;
    let texel = &data[offset..offset + 3];
    Vector3::new(texel[0], texel[1], texel[2]).map(|c| c as f32 / 255.0)
}

/// A borrowed texture whose size contract has been validated
#[derive(Debug, Clone, Copy)]
pub struct TextureView<'a> {
    data: &'a [u8],
    width: usize,
    height: usize,
    stride: usize,
}

impl<'a> TextureView<'a> {
    pub fn new(data: &'a [u8], width: usize, height: usize, stride: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            tracing::debug!(width, height, "rejecting empty texture");
            return Err(Error::ZeroDimension { width, height });
        }
        if stride < 3 {
            tracing::debug!(stride, "rejecting texture with fewer than 3 channels");
            return Err(Error::StrideTooSmall(stride));
        }

        let Some(expected) = texture_len(width, height, stride) else {
            tracing::debug!(width, height, stride, "texture size overflows");
            return Err(Error::SizeOverflow {
                width,
                height,
                stride,
            });
        };
        if data.len() < expected {
            tracing::debug!(expected, actual = data.len(), "texture buffer too small");
            return Err(Error::BufferTooSmall {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            data,
            width,
            height,
            stride,
        })
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Nearest-neighbor sample with wraparound, see [`sample_texture`]
    pub fn sample(&self, texcoord: Vector2<f32>) -> Vector3<f32> {
        sample_texture(self.data, texcoord, self.width, self.height, self.stride)
    }

    /// Read a texel by integer coordinates, wrapping out-of-range indices
    pub fn texel(&self, x: usize, y: usize) -> Vector3<f32> {
        let index = (x % self.width) + (y % self.height) * self.width;
        read_texel(self.data, index, self.stride)
    }
}
