//! Lightweight grayscale and interleaved-BGR image buffers.
//!
//! The detector operates on borrowed views so callers can keep pixel data in
//! whatever container they like; the owned variants exist for synthesis and
//! tests.

use thiserror::Error;

/// Errors from constructing a view over a caller-supplied buffer.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageError {
    #[error("invalid image buffer length (expected {expected} bytes, got {got})")]
    BadBufferLength { expected: usize, got: usize },
    #[error("invalid image dimensions (width={width}, height={height})")]
    BadDimensions { width: usize, height: usize },
}

/// Borrowed single-channel 8-bit image, row-major, `len == w*h`.
#[derive(Clone, Copy, Debug)]
pub struct GrayImageView<'a> {
    pub width: usize,
    pub height: usize,
    pub data: &'a [u8],
}

impl<'a> GrayImageView<'a> {
    /// Wrap a raw buffer, validating its length against the dimensions.
    pub fn from_buffer(width: usize, height: usize, data: &'a [u8]) -> Result<Self, ImageError> {
        let expected = width
            .checked_mul(height)
            .ok_or(ImageError::BadDimensions { width, height })?;
        if data.len() != expected {
            return Err(ImageError::BadBufferLength {
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    #[inline]
    pub fn at(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.width + x]
    }
}

/// Owned single-channel 8-bit image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrayImage {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

impl GrayImage {
    /// Image filled with a constant intensity.
    pub fn filled(width: usize, height: usize, value: u8) -> Self {
        Self {
            width,
            height,
            data: vec![value; width * height],
        }
    }

    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Result<Self, ImageError> {
        let expected = width
            .checked_mul(height)
            .ok_or(ImageError::BadDimensions { width, height })?;
        if data.len() != expected {
            return Err(ImageError::BadBufferLength {
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    #[inline]
    pub fn view(&self) -> GrayImageView<'_> {
        GrayImageView {
            width: self.width,
            height: self.height,
            data: &self.data,
        }
    }

    #[inline]
    pub fn at(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.width + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: u8) {
        self.data[y * self.width + x] = value;
    }
}

/// Borrowed interleaved 3-channel 8-bit image in B,G,R order, `len == w*h*3`.
#[derive(Clone, Copy, Debug)]
pub struct BgrImageView<'a> {
    pub width: usize,
    pub height: usize,
    pub data: &'a [u8],
}

impl<'a> BgrImageView<'a> {
    /// Wrap a raw interleaved buffer, validating its length.
    pub fn from_buffer(width: usize, height: usize, data: &'a [u8]) -> Result<Self, ImageError> {
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(3))
            .ok_or(ImageError::BadDimensions { width, height })?;
        if data.len() != expected {
            return Err(ImageError::BadBufferLength {
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    #[inline]
    pub fn at(&self, x: usize, y: usize) -> [u8; 3] {
        let i = (y * self.width + x) * 3;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }
}

/// Owned interleaved 3-channel 8-bit image in B,G,R order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BgrImage {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

impl BgrImage {
    /// Image filled with a constant color.
    pub fn filled(width: usize, height: usize, bgr: [u8; 3]) -> Self {
        let mut data = Vec::with_capacity(width * height * 3);
        for _ in 0..width * height {
            data.extend_from_slice(&bgr);
        }
        Self {
            width,
            height,
            data,
        }
    }

    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Result<Self, ImageError> {
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(3))
            .ok_or(ImageError::BadDimensions { width, height })?;
        if data.len() != expected {
            return Err(ImageError::BadBufferLength {
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    #[inline]
    pub fn view(&self) -> BgrImageView<'_> {
        BgrImageView {
            width: self.width,
            height: self.height,
            data: &self.data,
        }
    }

    #[inline]
    pub fn at(&self, x: usize, y: usize) -> [u8; 3] {
        let i = (y * self.width + x) * 3;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, bgr: [u8; 3]) {
        let i = (y * self.width + x) * 3;
        self.data[i..i + 3].copy_from_slice(&bgr);
    }

    /// Fill the axis-aligned rectangle `[x0, x0+w) × [y0, y0+h)`, clipped to
    /// the image bounds.
    pub fn fill_rect(&mut self, x0: usize, y0: usize, w: usize, h: usize, bgr: [u8; 3]) {
        let x1 = (x0 + w).min(self.width);
        let y1 = (y0 + h).min(self.height);
        for y in y0..y1 {
            for x in x0..x1 {
                self.set(x, y, bgr);
            }
        }
    }

    /// Copy `src` into this image with its top-left corner at `(x0, y0)`.
    /// The source must fit entirely inside the destination.
    pub fn blit(&mut self, x0: usize, y0: usize, src: &BgrImage) {
        debug_assert!(x0 + src.width <= self.width && y0 + src.height <= self.height);
        for y in 0..src.height {
            let dst_i = ((y0 + y) * self.width + x0) * 3;
            let src_i = y * src.width * 3;
            self.data[dst_i..dst_i + src.width * 3]
                .copy_from_slice(&src.data[src_i..src_i + src.width * 3]);
        }
    }

    /// Luma conversion (BT.601): `Y = 0.299 R + 0.587 G + 0.114 B`, rounded.
    pub fn to_gray(&self) -> GrayImage {
        let mut data = Vec::with_capacity(self.width * self.height);
        for px in self.data.chunks_exact(3) {
            let y = 0.114f32 * px[0] as f32 + 0.587f32 * px[1] as f32 + 0.299f32 * px[2] as f32;
            data.push(y.round().clamp(0.0, 255.0) as u8);
        }
        GrayImage {
            width: self.width,
            height: self.height,
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gray_view_rejects_bad_buffer() {
        let buf = vec![0u8; 11];
        let err = GrayImageView::from_buffer(3, 4, &buf).unwrap_err();
        assert_eq!(
            err,
            ImageError::BadBufferLength {
                expected: 12,
                got: 11
            }
        );
        assert!(GrayImageView::from_buffer(3, 4, &buf[..3]).is_err());
    }

    #[test]
    fn bgr_view_rejects_bad_buffer() {
        let buf = vec![0u8; 3 * 4 * 3 + 1];
        assert!(BgrImageView::from_buffer(3, 4, &buf).is_err());
        assert!(BgrImageView::from_buffer(3, 4, &buf[..36]).is_ok());
    }

    #[test]
    fn fill_rect_clips_to_bounds() {
        let mut img = BgrImage::filled(4, 4, [0, 0, 0]);
        img.fill_rect(2, 2, 10, 10, [1, 2, 3]);
        assert_eq!(img.at(3, 3), [1, 2, 3]);
        assert_eq!(img.at(1, 1), [0, 0, 0]);
    }

    #[test]
    fn blit_copies_rows() {
        let mut dst = BgrImage::filled(4, 4, [0, 0, 0]);
        let src = BgrImage::filled(2, 2, [9, 9, 9]);
        dst.blit(1, 1, &src);
        assert_eq!(dst.at(1, 1), [9, 9, 9]);
        assert_eq!(dst.at(2, 2), [9, 9, 9]);
        assert_eq!(dst.at(3, 3), [0, 0, 0]);
        assert_eq!(dst.at(0, 0), [0, 0, 0]);
    }

    #[test]
    fn luma_of_pure_colors() {
        let mut img = BgrImage::filled(3, 1, [0, 0, 0]);
        img.set(0, 0, [0, 255, 255]); // yellow
        img.set(1, 0, [255, 0, 255]); // magenta
        img.set(2, 0, [255, 255, 0]); // cyan
        let gray = img.to_gray();
        assert_eq!(gray.at(0, 0), 226);
        assert_eq!(gray.at(1, 0), 105);
        assert_eq!(gray.at(2, 0), 179);
    }
}
