//! Scanline Rasterizer
//!
//! Each row `k` between the vertical bounds of the edge table is sampled
//! at its center, `k + 0.5`. The x coordinates where edges cross that
//! line are sorted and paired, and every pair is painted as one inclusive
//! horizontal run (even-odd rule).

use crate::edge::EdgeTable;
use crate::scan::Scanline;
use crate::color::Gray8;
use crate::debug_enabled;
use crate::Surface;

use std::cmp::min;
use std::cmp::max;
use std::convert::TryFrom;

/// How the vertical extent of a fill is found
#[derive(Debug,PartialEq,Eq,Copy,Clone)]
pub enum ScanBounds {
    /// Top and bottom y of every edge
    Full,
    /// Top y of every edge only; rows below the lowest top are not filled
    TopOnly,
}
impl Default for ScanBounds {
    fn default() -> ScanBounds {
        ScanBounds::Full
    }
}

/// Summary of one fill
#[derive(Debug,Default,Clone,PartialEq,Eq)]
pub struct FillReport {
    /// Rows visited
    pub scanlines: usize,
    /// Runs handed to the surface
    pub spans: usize,
    /// Rows with an odd number of intersections; the last one was dropped
    pub odd_scanlines: Vec<i64>,
}

impl FillReport {
    /// No row had an unmatched intersection
    pub fn is_clean(&self) -> bool {
        self.odd_scanlines.is_empty()
    }
}

#[derive(Debug,Default,Clone)]
pub struct Rasterizer {
    edges: EdgeTable,
    sl: Scanline,
    bounds: ScanBounds,
}

impl Rasterizer {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_edges(edges: EdgeTable) -> Self {
        Self { edges, .. Self::default() }
    }
    pub fn bounds(&mut self, bounds: ScanBounds) -> &mut Self {
        self.bounds = bounds;
        self
    }
    pub fn edges(&self) -> &EdgeTable {
        &self.edges
    }
    pub fn add_edge(&mut self, x1: i64, y1: i64, x2: i64, y2: i64) {
        self.edges.add_edge(x1, y1, x2, y2);
    }
    fn scan(&mut self, row: i64) {
        let y = row as f64 + 0.5;
        self.sl.reset(row);
        for e in &self.edges {
            if e.crosses(y) {
                self.sl.add_intersection(e.x_at(y));
            }
        }
        self.sl.sort();
    }
    /// Sorted intersections of row `row` with the edges
    pub fn intersections(&mut self, row: i64) -> &[i64] {
        self.scan(row);
        self.sl.intersections()
    }
    /// Fill the polygons in the edge table with intensity `c`
    ///
    /// Only rows inside the surface are scanned. Never fails; rows with an
    /// odd intersection count drop the last intersection and are listed in
    /// the report.
    pub fn fill<S: Surface>(&mut self, ren: &mut S, c: Gray8) -> FillReport {
        let mut report = FillReport::default();
        let (min_y, max_y) = match self.edges.y_extent(self.bounds) {
            Some(v) => v,
            None => return report,
        };
        let height = i64::try_from(ren.height()).unwrap_or(i64::MAX);
        let (min_y, max_y) = (max(min_y, 0), min(max_y, height));
        for row in min_y .. max_y {
            self.scan(row);
            report.scanlines += 1;
            if self.sl.is_odd() {
                if debug_enabled() {
                    eprintln!("FILL: row {} has {} intersections {:?}",
                              row, self.sl.num_intersections(), self.sl.intersections());
                }
                report.odd_scanlines.push(row);
            }
            for span in self.sl.spans() {
                ren.draw_hline(span.x1, span.x2, span.y, c);
                report.spans += 1;
            }
        }
        if debug_enabled() {
            eprintln!("FILL: rows {}..{} edges {} spans {} odd {}",
                      min_y, max_y, self.edges.len(), report.spans, report.odd_scanlines.len());
        }
        report
    }
}
