//! Rendering buffer

use std::ops::Index;
use std::ops::IndexMut;

/// Rendering Buffer
///
/// One byte per pixel, stored in row-major order (C-format)
#[derive(Debug,Default,Clone,PartialEq)]
pub struct RenderingBuffer {
    /// Pixel data of Image
    pub data: Vec<u8>,
    /// Image Width in pixels
    pub width: usize,
    /// Image Height in pixels
    pub height: usize,
}

impl RenderingBuffer {
    /// Create a new buffer of width * height, all zero
    pub fn new(width: usize, height: usize) -> Self {
        RenderingBuffer {
            width, height, data: vec![0u8; width * height]
        }
    }
    /// Size of underlying Rendering Buffer
    pub fn len(&self) -> usize {
        self.data.len()
    }
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
    /// Check if (`x`,`y`) lies inside the buffer
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }
    /// Row `i` as a slice of width bytes
    pub fn row(&self, i: usize) -> &[u8] {
        let start = i * self.width;
        &self.data[start .. start + self.width]
    }
    /// Mutable row `i` as a slice of width bytes
    pub fn row_mut(&mut self, i: usize) -> &mut [u8] {
        let start = i * self.width;
        &mut self.data[start .. start + self.width]
    }
    /// Set every pixel to `v`
    pub fn fill(&mut self, v: u8) {
        self.data.iter_mut().for_each(|p| *p = v);
    }
    /// Clear an image to black
    pub fn clear(&mut self) {
        self.fill(0);
    }
}

impl Index<(usize,usize)> for RenderingBuffer {
    type Output = u8;
    fn index(&self, index: (usize, usize)) -> &u8 {
        assert!(index.0 < self.width, "request {} >= {} width :: index", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index", index.1, self.height);
        &self.data[index.1 * self.width + index.0]
    }
}
impl IndexMut<(usize,usize)> for RenderingBuffer {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut u8 {
        assert!(index.0 < self.width, "request {} >= {} width :: index_mut", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index_mut", index.1, self.height);
        &mut self.data[index.1 * self.width + index.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_major() {
        let mut buf = RenderingBuffer::new(3, 2);
        buf[(2, 1)] = 7;
        assert_eq!(buf.data[5], 7);
        assert_eq!(buf.row(1), &[0, 0, 7]);
        assert!(buf.contains(2, 1));
        assert!(!buf.contains(3, 1));
        assert!(!buf.contains(-1, 0));
    }

    #[test]
    #[should_panic]
    fn out_of_bounds() {
        let buf = RenderingBuffer::new(3, 2);
        let _ = buf[(0, 2)];
    }
}
