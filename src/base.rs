//! Rendering Base
//!
//! Clipping and exclusive write access on top of a [PixfmtGray8]
//!
//! [PixfmtGray8]: ../pixfmt/struct.PixfmtGray8.html

use crate::pixfmt::PixfmtGray8;
use crate::color::Gray8;
use crate::PixelData;
use crate::Surface;

use std::cmp::min;
use std::cmp::max;

/// Inclusive pixel rectangle
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub struct Rect {
    pub x1: i64,
    pub y1: i64,
    pub x2: i64,
    pub y2: i64,
}

impl Rect {
    pub fn new(x1: i64, y1: i64, x2: i64, y2: i64) -> Self {
        Rect { x1: min(x1,x2), y1: min(y1,y2), x2: max(x1,x2), y2: max(y1,y2) }
    }
    /// Smallest rectangle containing both
    pub fn union(&self, other: &Rect) -> Rect {
        Rect { x1: min(self.x1, other.x1), y1: min(self.y1, other.y1),
               x2: max(self.x2, other.x2), y2: max(self.y2, other.y2) }
    }
}

fn merge(dirty: &mut Option<Rect>, r: Rect) {
    *dirty = Some(match dirty {
        Some(d) => d.union(&r),
        None => r,
    });
}

#[derive(Debug)]
pub struct RenderingBase {
    pub pixf: PixfmtGray8,
    dirty: Option<Rect>,
}

impl RenderingBase {
    pub fn new(pixf: PixfmtGray8) -> RenderingBase {
        RenderingBase { pixf, dirty: None }
    }
    /// Set every pixel to `color`, marking the whole image dirty
    pub fn clear(&mut self, color: Gray8) {
        self.pixf.fill(color);
        let (xmin,xmax,ymin,ymax) = self.limits();
        merge(&mut self.dirty, Rect::new(xmin, ymin, xmax, ymax));
    }
    pub fn limits(&self) -> (i64,i64,i64,i64) {
        let w = self.pixf.width() as i64;
        let h = self.pixf.height() as i64;
        (0, w-1, 0, h-1)
    }
    pub fn width(&self) -> usize {
        self.pixf.width()
    }
    pub fn height(&self) -> usize {
        self.pixf.height()
    }
    /// Copy `c` to pixels `x1..=x2` of row `y`, clipped to the image
    ///
    /// Returns the painted region, if any
    pub fn copy_hline(&mut self, x1: i64, y: i64, x2: i64, c: Gray8) -> Option<Rect> {
        let (xmin,xmax,ymin,ymax) = self.limits();
        let (x1,x2) = if x2 > x1 { (x1,x2) } else { (x2,x1) };
        if y > ymax || y < ymin || x1 > xmax || x2 < xmin {
            return None;
        }
        let x1 = max(x1, xmin);
        let x2 = min(x2, xmax);
        self.pixf.copy_hline(x1 as usize, y as usize, (x2 - x1 + 1) as usize, c);
        Some(Rect::new(x1, y, x2, y))
    }
    /// Acquire exclusive write access
    ///
    /// Everything painted through the returned guard is recorded as dirty
    /// when the guard is dropped.
    pub fn lock(&mut self) -> Locked<'_> {
        Locked { base: self, dirty: None }
    }
    /// Region modified since the last call, if any
    pub fn take_dirty(&mut self) -> Option<Rect> {
        self.dirty.take()
    }
}

impl PixelData for RenderingBase {
    fn pixeldata(&self) -> &[u8] {
        self.pixf.pixeldata()
    }
}

/// Exclusive write access to a [RenderingBase]
///
/// [RenderingBase]: struct.RenderingBase.html
#[derive(Debug)]
pub struct Locked<'a> {
    base: &'a mut RenderingBase,
    dirty: Option<Rect>,
}

impl Locked<'_> {
    /// Region painted through this guard so far
    pub fn dirty(&self) -> Option<Rect> {
        self.dirty
    }
}

impl Surface for Locked<'_> {
    fn width(&self) -> usize {
        self.base.width()
    }
    fn height(&self) -> usize {
        self.base.height()
    }
    fn draw_hline(&mut self, x1: i64, x2: i64, y: i64, c: Gray8) {
        if let Some(r) = self.base.copy_hline(x1, y, x2, c) {
            merge(&mut self.dirty, r);
        }
    }
}

impl Drop for Locked<'_> {
    fn drop(&mut self) {
        if let Some(r) = self.dirty.take() {
            merge(&mut self.base.dirty, r);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clip_hline() {
        let mut base = RenderingBase::new(PixfmtGray8::new(5, 3));
        assert_eq!(base.copy_hline(-4, 1, 2, Gray8::new(1)), Some(Rect::new(0, 1, 2, 1)));
        assert_eq!(base.copy_hline(9, 1, 3, Gray8::new(2)), Some(Rect::new(3, 1, 4, 1)));
        assert_eq!(base.copy_hline(0, 3, 4, Gray8::new(3)), None);
        assert_eq!(base.copy_hline(-9, 0, -1, Gray8::new(3)), None);
        assert_eq!(base.pixf.row(1), &[1, 1, 1, 2, 2]);
        assert_eq!(base.pixf.row(0), &[0; 5]);
    }

    #[test]
    fn dirty_released_on_drop() {
        let mut base = RenderingBase::new(PixfmtGray8::new(10, 10));
        {
            let mut ren = base.lock();
            ren.draw_hline(2, 4, 1, Gray8::white());
            ren.draw_pixel(7, 6, Gray8::white());
            assert_eq!(ren.dirty(), Some(Rect::new(2, 1, 7, 6)));
        }
        assert_eq!(base.take_dirty(), Some(Rect::new(2, 1, 7, 6)));
        assert_eq!(base.take_dirty(), None);
    }

    #[test]
    fn dirty_released_on_unwind() {
        let mut base = RenderingBase::new(PixfmtGray8::new(4, 4));
        let r = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let mut ren = base.lock();
            ren.draw_pixel(1, 1, Gray8::white());
            panic!("interrupted");
        }));
        assert!(r.is_err());
        assert_eq!(base.take_dirty(), Some(Rect::new(1, 1, 1, 1)));
    }

    #[test]
    fn nothing_painted_nothing_dirty() {
        let mut base = RenderingBase::new(PixfmtGray8::new(4, 4));
        {
            let mut ren = base.lock();
            ren.draw_hline(10, 12, 0, Gray8::white());
        }
        assert_eq!(base.take_dirty(), None);
    }
}
