//! Scanline polygon fill on a grayscale raster
//!
//! # How does this work
//!
//! ```text
//! ren = Locked( RenderingBase( PixfmtGray8( RenderingBuffer ) ) )
//! ras = Rasterizer( EdgeTable )
//!
//!  Edge Operations
//!    EdgeTable::load / EdgeTable::parse
//!      add_edge()       -- horizontal edges dropped, top has the smaller y
//!  Fill
//!    ras.fill(&mut ren, intensity)
//!      y_extent()       -- scan bounds from the edge table
//!      intersections()  -- crossing edges at the row center, sorted
//!      spans()          -- consecutive pairs, even-odd
//!        draw_hline()   -- clipped, marks the dirty rectangle
//! ```
//!
//! # Example
//!
//!     use grayfill::{EdgeTable, Gray8, PixfmtGray8, Rasterizer, RenderingBase};
//!
//!     let edges = EdgeTable::parse("0 0 10 0\n10 0 10 10\n10 10 0 10\n0 10 0 0").unwrap();
//!     let mut ras = Rasterizer::with_edges(edges);
//!
//!     let mut base = RenderingBase::new(PixfmtGray8::new(20, 20));
//!     {
//!         let mut ren = base.lock();
//!         ras.fill(&mut ren, Gray8::white());
//!     }
//!     assert_eq!(base.pixf.get((5, 5)), Gray8::white());
//!     assert_eq!(base.pixf.get((15, 5)), Gray8::black());
//!

pub mod buffer;
pub mod color;
pub mod pixfmt;
pub mod base;
pub mod edge;
pub mod scan;
pub mod raster;
pub mod draw;
pub mod ppm;
pub mod error;
pub mod timer;

pub use buffer::*;
pub use color::*;
pub use pixfmt::*;
pub use base::*;
pub use edge::*;
pub use scan::*;
pub use raster::*;
pub use error::{Error, Result};
pub use timer::BlockTimer;

/// Raster surface receiving horizontal runs of a single intensity
///
/// Runs are inclusive of both end points, may be given in either order,
/// and are clipped to `[0,width) x [0,height)`.
pub trait Surface {
    /// Width in pixels
    fn width(&self) -> usize;
    /// Height in pixels
    fn height(&self) -> usize;
    /// Paint pixels `x1..=x2` on row `y` with `c`
    fn draw_hline(&mut self, x1: i64, x2: i64, y: i64, c: Gray8);
    /// Paint a single pixel
    fn draw_pixel(&mut self, x: i64, y: i64, c: Gray8) {
        self.draw_hline(x, x, y, c);
    }
}

/// Access raw pixel data, one byte per pixel, row-major
pub trait PixelData {
    fn pixeldata(&self) -> &[u8];
}

pub(crate) fn debug_enabled() -> bool {
    use std::sync::OnceLock;
    static DEBUG: OnceLock<bool> = OnceLock::new();
    *DEBUG.get_or_init(|| std::env::var_os("GRAYFILL_DEBUG").is_some())
}
