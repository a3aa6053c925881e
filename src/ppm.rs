//! Reading and writing of gray images
//!
//! The format is chosen by the `image` crate from the file extension
//! (`.png`, `.pgm`, `.bmp`, ...)
//!
use std::path::Path;

use crate::base::RenderingBase;
use crate::pixfmt::PixfmtGray8;
use crate::color::Gray8;
use crate::error::Result;
use crate::PixelData;

/// Read an image as gray scale, returning (data, width, height)
pub fn read_file<P: AsRef<Path>>(filename: P) -> Result<(Vec<u8>,usize,usize)> {
    let img = image::open(filename)?.to_luma();
    let (w, h) = img.dimensions();
    let buf = img.into_raw();
    Ok((buf, w as usize, h as usize))
}

/// Write single channel data of `width` x `height`
pub fn write_file<P: AsRef<Path>>(buf: &[u8], width: usize, height: usize, filename: P) -> Result<()> {
    image::save_buffer(filename, buf, width as u32, height as u32, image::Gray(8))?;
    Ok(())
}

/// Compare two image files pixel by pixel
///
/// Differences are printed to stdout
pub fn img_diff<P: AsRef<Path>>(f1: P, f2: P) -> Result<bool> {
    let (d1,w1,h1) = read_file(f1)?;
    let (d2,w2,h2) = read_file(f2)?;
    if w1 != w2 || h1 != h2 {
        return Ok(false);
    }
    let mut flag = true;
    for (i,(v1,v2)) in d1.iter().zip(d2.iter()).enumerate() {
        if v1 != v2 {
            println!("{} [{},{}]: {} {}", i, i%w1, i/w1, v1, v2);
            flag = false;
        }
    }
    Ok(flag)
}

impl PixfmtGray8 {
    /// Load an image file, converting it to gray scale
    pub fn from_file<P: AsRef<Path>>(filename: P) -> Result<Self> {
        let (data, w, h) = read_file(filename)?;
        let mut pix = PixfmtGray8::new(w, h);
        for (i, &v) in data.iter().enumerate() {
            pix.set((i % w, i / w), Gray8::new(v));
        }
        Ok(pix)
    }
    /// Write the image to `filename`
    pub fn to_file<P: AsRef<Path>>(&self, filename: P) -> Result<()> {
        write_file(self.pixeldata(), self.width(), self.height(), filename)
    }
}

impl RenderingBase {
    /// Write the image to `filename`
    pub fn to_file<P: AsRef<Path>>(&self, filename: P) -> Result<()> {
        self.pixf.to_file(filename)
    }
}
