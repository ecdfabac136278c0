use crate::foundation::error::{RasterFxError, RasterFxResult};

/// One of the four interleaved components of a pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Red.
    R,
    /// Green.
    G,
    /// Blue.
    B,
    /// Alpha.
    A,
}

impl Channel {
    /// Byte offset of this channel inside one RGBA pixel.
    pub fn offset(self) -> usize {
        match self {
            Self::R => 0,
            Self::G => 1,
            Self::B => 2,
            Self::A => 3,
        }
    }
}

/// An RGBA8 raster held in memory.
///
/// Pixels are tightly packed, row-major, top-left origin, with straight (not premultiplied)
/// alpha. The length invariant `data.len() == width * height * 4` holds for every value of this
/// type; it is checked by the constructors and cannot be broken through the mutable accessors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap decoded RGBA8 bytes, validating their length against the dimensions.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> RasterFxResult<Self> {
        let expected_len = rgba_len(width, height)?;
        if data.len() != expected_len {
            return Err(RasterFxError::invalid_buffer(format!(
                "{width}x{height} image expects {expected_len} bytes, got {}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Allocate a buffer with every channel (alpha included) set to zero.
    pub fn zeroed(width: u32, height: u32) -> RasterFxResult<Self> {
        let len = rgba_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![0u8; len],
        })
    }

    /// Allocate a zeroed buffer with the same dimensions as `self`.
    pub fn zeroed_like(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            data: vec![0u8; self.data.len()],
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether the buffer holds no pixels (either dimension is zero).
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Whether `other` has the same width and height.
    pub fn same_dimensions(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Raw RGBA8 bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable raw RGBA8 bytes. The slice length is fixed, so the length invariant holds.
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the buffer and return its bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Value of `channel` at `(x, y)`, or `None` outside the image.
    pub fn channel(&self, x: u32, y: u32, channel: Channel) -> Option<u8> {
        let idx = self.pixel_offset(x, y)?;
        Some(self.data[idx + channel.offset()])
    }

    /// RGBA value at `(x, y)`, or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let idx = self.pixel_offset(x, y)?;
        let px = &self.data[idx..idx + 4];
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Overwrite the RGBA value at `(x, y)`. Returns `false` outside the image.
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) -> bool {
        match self.pixel_offset(x, y) {
            Some(idx) => {
                self.data[idx..idx + 4].copy_from_slice(&rgba);
                true
            }
            None => false,
        }
    }

    /// Bytes of one row. Rows are `width * 4` bytes long.
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let stride = self.stride();
        let start = (y as usize) * stride;
        Some(&self.data[start..start + stride])
    }

    pub(crate) fn stride(&self) -> usize {
        (self.width as usize) * 4
    }

    fn pixel_offset(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(((y as usize) * (self.width as usize) + (x as usize)) * 4)
    }
}

fn rgba_len(width: u32, height: u32) -> RasterFxResult<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| RasterFxError::invalid_buffer("pixel buffer size overflow"))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/buffer.rs"]
mod tests;
