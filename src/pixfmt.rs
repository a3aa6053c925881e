//! Pixel Format

use crate::buffer::RenderingBuffer;
use crate::color::Gray8;
use crate::PixelData;

/// Pixel Format Wrapper around single channel gray data
///
#[derive(Debug,Clone,PartialEq)]
pub struct PixfmtGray8 {
    rbuf: RenderingBuffer,
}

impl PixfmtGray8 {
    /// Create new Pixel Format of width * height
    ///
    /// Allocates memory of width * height, initially black
    pub fn new(width: usize, height: usize) -> Self {
        if width == 0 || height == 0 {
            panic!("Cannot create pixfmt with 0 width or height");
        }
        Self { rbuf: RenderingBuffer::new(width, height) }
    }
    /// Size of Rendering Buffer in bytes; width * height
    pub fn size(&self) -> usize {
        self.rbuf.len()
    }
    /// Width of rendering buffer in pixels
    pub fn width(&self) -> usize {
        self.rbuf.width
    }
    /// Height of rendering buffer in pixels
    pub fn height(&self) -> usize {
        self.rbuf.height
    }
    /// Clear the Image to black
    ///
    ///     use grayfill::{PixfmtGray8,Gray8};
    ///
    ///     let mut pix = PixfmtGray8::new(2,2);
    ///     pix.fill(Gray8::white());
    ///     pix.clear();
    ///     assert_eq!(pix.get((1,1)), Gray8::black());
    ///
    pub fn clear(&mut self) {
        self.rbuf.clear();
    }
    /// Set every pixel to `c`
    pub fn fill(&mut self, c: Gray8) {
        self.rbuf.fill(c.value());
    }
    /// Intensity at (`x`,`y`)
    ///
    /// Panics if the location is outside the image
    pub fn get(&self, id: (usize, usize)) -> Gray8 {
        Gray8::new(self.rbuf[id])
    }
    /// Set the intensity at (`x`,`y`)
    ///
    /// Panics if the location is outside the image
    pub fn set(&mut self, id: (usize, usize), c: Gray8) {
        self.rbuf[id] = c.value();
    }
    /// Copies `c` to pixel at (`x`,`y`)
    ///
    /// Locations outside of the region are ignored
    ///
    ///     use grayfill::{PixfmtGray8,Gray8};
    ///
    ///     let mut pix = PixfmtGray8::new(1,2);
    ///     let white = Gray8::white();
    ///     pix.copy_pixel(0,1, white);
    ///     assert_eq!(pix.get((0,0)), Gray8::black());
    ///     assert_eq!(pix.get((0,1)), white);
    ///
    ///     pix.copy_pixel(10,10, white); // Ignored, outside of range
    ///
    pub fn copy_pixel(&mut self, x: usize, y: usize, c: Gray8) {
        if x >= self.rbuf.width || y >= self.rbuf.height {
            return;
        }
        self.set((x,y), c);
    }
    /// Copies `c` to pixels from (`x`,`y`) to (`x+n-1`,y)
    ///
    /// Locations outside of the region are ignored
    ///
    ///     use grayfill::{PixfmtGray8,Gray8};
    ///
    ///     let mut pix = PixfmtGray8::new(10,1);
    ///     let c = Gray8::new(200);
    ///     pix.copy_hline(2,0,20, c);
    ///     assert_eq!(pix.get((1,0)), Gray8::black());
    ///     assert_eq!(pix.get((2,0)), c);
    ///     assert_eq!(pix.get((9,0)), c);
    ///
    ///     pix.copy_hline(1,1,10, c); // Ignored, outside of range
    ///
    pub fn copy_hline(&mut self, x: usize, y: usize, n: usize, c: Gray8) {
        if y >= self.rbuf.height || x >= self.rbuf.width || n == 0 {
            return;
        }
        let n = n.min(self.rbuf.width - x);
        let v = c.value();
        self.rbuf.row_mut(y)[x .. x+n].iter_mut().for_each(|p| *p = v);
    }
    /// Row `y` of pixel data
    pub fn row(&self, y: usize) -> &[u8] {
        self.rbuf.row(y)
    }
}

/// Access Pixeldata from a PixfmtGray8
///
impl PixelData for PixfmtGray8 {
    fn pixeldata(&self) -> &[u8] {
        & self.rbuf.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic]
    fn zero_size() {
        PixfmtGray8::new(0, 4);
    }

    #[test]
    fn hline_clipped_at_right_edge() {
        let mut pix = PixfmtGray8::new(4, 1);
        pix.copy_hline(1, 0, 3, Gray8::new(9));
        assert_eq!(pix.row(0), &[0, 9, 9, 9]);
        pix.copy_hline(2, 0, usize::MAX, Gray8::new(4));
        assert_eq!(pix.row(0), &[0, 9, 4, 4]);
    }
}
