//! Pixel buffer capability
//!
//! The renderer only needs to know how many pixels a strip has and how to
//! overwrite one of them. Any hardware backend that can expose this satisfies
//! [`PixelBuffer`].

use heapless::Vec;

use crate::color::Rgb;

/// Addressable pixel storage borrowed by the renderer for one frame
pub trait PixelBuffer {
    /// Number of pixels in the strip
    fn size(&self) -> usize;

    /// Overwrite the pixel at `index`
    ///
    /// Indices outside `0..size()` are ignored.
    fn set_pixel(&mut self, index: usize, color: Rgb);

    /// Read back the pixel at `index`
    fn pixel(&self, index: usize) -> Option<Rgb>;
}

impl PixelBuffer for [Rgb] {
    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    #[inline]
    fn set_pixel(&mut self, index: usize, color: Rgb) {
        if let Some(pixel) = self.get_mut(index) {
            *pixel = color;
        }
    }

    #[inline]
    fn pixel(&self, index: usize) -> Option<Rgb> {
        self.get(index).copied()
    }
}

impl<const N: usize> PixelBuffer for [Rgb; N] {
    #[inline]
    fn size(&self) -> usize {
        N
    }

    #[inline]
    fn set_pixel(&mut self, index: usize, color: Rgb) {
        self.as_mut_slice().set_pixel(index, color);
    }

    #[inline]
    fn pixel(&self, index: usize) -> Option<Rgb> {
        self.as_slice().pixel(index)
    }
}

/// Strip whose live length can change between frames
impl<const N: usize> PixelBuffer for Vec<Rgb, N> {
    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    #[inline]
    fn set_pixel(&mut self, index: usize, color: Rgb) {
        self.as_mut_slice().set_pixel(index, color);
    }

    #[inline]
    fn pixel(&self, index: usize) -> Option<Rgb> {
        self.as_slice().pixel(index)
    }
}
