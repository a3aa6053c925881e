//! Simple drawing on a [Surface] without polygon filling
//!
//! [Surface]: ../trait.Surface.html

use crate::color::Gray8;
use crate::Surface;

/// Draw a line from `(x1,y1)` to `(x2,y2)` of intensity `c`
///
/// Uses [Bresenham's line drawing algorithm](https://en.wikipedia.org/wiki/Bresenham%27s_line_algorithm);
/// both end points are drawn.
pub fn line<S: Surface>(ren: &mut S, x1: i64, y1: i64, x2: i64, y2: i64, c: Gray8) {
    let dx = (x2 - x1).abs();
    let dy = -(y2 - y1).abs();
    let step_x = if x1 < x2 { 1 } else { -1 };
    let step_y = if y1 < y2 { 1 } else { -1 };
    let (mut x, mut y) = (x1, y1);
    let mut err = dx + dy;
    loop {
        ren.draw_pixel(x, y, c);
        if x == x2 && y == y2 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += step_x;
        }
        if e2 <= dx {
            err += dx;
            y += step_y;
        }
    }
}

/// Escape time of `(re,im)`, 8 levels of intensity per iteration
///
/// Points that do not escape within 32 iterations are black
pub fn escape(re: f64, im: f64) -> Gray8 {
    let (mut zr, mut zi) = (0.0f64, 0.0f64);
    for i in 1 .. 32u8 {
        if zr * zr + zi * zi > 4.0 {
            return Gray8::new(i * 8);
        }
        let t = zr * zr - zi * zi + re;
        zi = 2.0 * zr * zi + im;
        zr = t;
    }
    Gray8::black()
}

/// Render the Mandelbrot set centered on (`xc`,`yc`)
///
/// At `zoom` 1 the surface height spans 2 units; y increases upward.
pub fn mandelbrot<S: Surface>(ren: &mut S, xc: f64, yc: f64, zoom: f64) {
    let (w, h) = (ren.width(), ren.height());
    let step = 2.0 / h as f64 / zoom;
    let x0 = xc - step * w as f64 / 2.0;
    let y0 = yc + step * h as f64 / 2.0;
    for y in 0 .. h {
        for x in 0 .. w {
            let c = escape(x0 + x as f64 * step, y0 - y as f64 * step);
            ren.draw_pixel(x as i64, y as i64, c);
        }
    }
}

/// 256 x 256 ramp, intensity equal to x
pub fn gray_ramp<S: Surface>(ren: &mut S) {
    for y in 0 .. 256 {
        for x in 0 .. 256i64 {
            ren.draw_pixel(x, y, Gray8::new(x as u8));
        }
    }
}
