//! Polygon edges
//!
//! Edges are stored top to bottom (`y_top < y_bottom`) together with their
//! inverse slope. Horizontal edges never cross a scanline and are dropped
//! when added.

use crate::error::{Error, Result};
use crate::raster::ScanBounds;

use std::io::BufRead;
use std::cmp::min;
use std::cmp::max;

/// Non-horizontal polygon boundary segment
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct Edge {
    pub x_top: i64,
    pub y_top: i64,
    pub x_bottom: i64,
    pub y_bottom: i64,
    /// Change in x per unit increase in y
    pub inverse_slope: f64,
}

/// Inverse slope dx/dy
///
/// Vertical edges (`dx == 0`) have slope 0. `dy == 0` cannot reach here
/// through [EdgeTable::add_edge]; it maps to 1 so no division by zero
/// happens for a hand-built edge.
///
/// Differences are taken as `i128` so any two `i64` end points fit.
///
/// [EdgeTable::add_edge]: struct.EdgeTable.html#method.add_edge
pub fn inverse_slope(dx: i128, dy: i128) -> f64 {
    if dy == 0 {
        1.0
    } else if dx == 0 {
        0.0
    } else {
        dx as f64 / dy as f64
    }
}

impl Edge {
    /// Create an edge from two end points in any order
    ///
    /// Returns `None` for horizontal edges
    pub fn new(x1: i64, y1: i64, x2: i64, y2: i64) -> Option<Self> {
        if y1 == y2 {
            return None;
        }
        let (x1,y1,x2,y2) = if y1 > y2 { (x2,y2,x1,y1) } else { (x1,y1,x2,y2) };
        Some(Edge { x_top: x1, y_top: y1, x_bottom: x2, y_bottom: y2,
                    inverse_slope: inverse_slope(i128::from(x2) - i128::from(x1),
                                                 i128::from(y2) - i128::from(y1)) })
    }
    /// Check if the scanline at `y` crosses this edge
    ///
    /// The top end is included and the bottom end excluded, so a vertex
    /// shared by two edges is counted once.
    pub fn crosses(&self, y: f64) -> bool {
        let (top, bottom) = (self.y_top as f64, self.y_bottom as f64);
        (top <= y && bottom > y) || (top > y && bottom <= y)
    }
    /// X coordinate of the edge at `y`, truncated toward zero
    pub fn x_at(&self, y: f64) -> i64 {
        (self.x_top as f64 + self.inverse_slope * (y - self.y_top as f64)) as i64
    }
}

/// Edges of one or more closed polygons
#[derive(Debug,Default,Clone,PartialEq)]
pub struct EdgeTable {
    edges: Vec<Edge>,
}

impl EdgeTable {
    pub fn new() -> Self {
        Self { edges: vec![] }
    }
    /// Add the segment (`x1`,`y1`) - (`x2`,`y2`)
    ///
    /// Horizontal segments are ignored
    ///
    ///     use grayfill::EdgeTable;
    ///
    ///     let mut edges = EdgeTable::new();
    ///     edges.add_edge(0, 0, 10, 0);
    ///     assert!(edges.is_empty());
    ///     edges.add_edge(5, 10, 0, 0);
    ///     let e = edges.iter().next().unwrap();
    ///     assert_eq!((e.x_top, e.y_top, e.x_bottom, e.y_bottom), (0, 0, 5, 10));
    ///     assert_eq!(e.inverse_slope, 0.5);
    ///
    pub fn add_edge(&mut self, x1: i64, y1: i64, x2: i64, y2: i64) {
        if let Some(edge) = Edge::new(x1, y1, x2, y2) {
            self.edges.push(edge);
        }
    }
    /// Add a closed polygon through `pts`, last point joined to the first
    pub fn add_polygon(&mut self, pts: &[(i64,i64)]) {
        for (i, &(x1,y1)) in pts.iter().enumerate() {
            let (x2,y2) = pts[(i + 1) % pts.len()];
            self.add_edge(x1, y1, x2, y2);
        }
    }
    pub fn len(&self) -> usize {
        self.edges.len()
    }
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
    pub fn iter(&self) -> std::slice::Iter<'_, Edge> {
        self.edges.iter()
    }
    /// Vertical range to scan, `None` if there are no edges
    ///
    /// With [ScanBounds::TopOnly] both ends come from the top y of the
    /// edges, which stops short of any bottom below the lowest top.
    ///
    /// [ScanBounds::TopOnly]: ../raster/enum.ScanBounds.html
    pub fn y_extent(&self, bounds: ScanBounds) -> Option<(i64,i64)> {
        let mut iter = self.edges.iter();
        let first = iter.next()?;
        let init = match bounds {
            ScanBounds::TopOnly => (first.y_top, first.y_top),
            ScanBounds::Full    => (first.y_top, first.y_bottom),
        };
        Some(iter.fold(init, |(lo,hi), e| match bounds {
            ScanBounds::TopOnly => (min(lo, e.y_top), max(hi, e.y_top)),
            ScanBounds::Full    => (min(lo, e.y_top), max(hi, e.y_bottom)),
        }))
    }
    /// Parse edge records, one `x1 y1 x2 y2` per line
    ///
    /// Blank lines are skipped
    pub fn parse(text: &str) -> Result<Self> {
        let mut table = Self::new();
        for (i, line) in text.lines().enumerate() {
            table.add_record(i + 1, line)?;
        }
        Ok(table)
    }
    /// Read edge records, one `x1 y1 x2 y2` per line
    pub fn load<R: BufRead>(reader: R) -> Result<Self> {
        let mut table = Self::new();
        for (i, line) in reader.lines().enumerate() {
            table.add_record(i + 1, &line?)?;
        }
        Ok(table)
    }
    fn add_record(&mut self, lineno: usize, line: &str) -> Result<()> {
        if line.trim().is_empty() {
            return Ok(());
        }
        let v = line.split_whitespace()
            .map(|tok| tok.parse::<i64>().map_err(|e| Error::Parse {
                line: lineno,
                message: format!("invalid coordinate {:?}: {}", tok, e),
            }))
            .collect::<Result<Vec<_>>>()?;
        if v.len() != 4 {
            return Err(Error::Parse {
                line: lineno,
                message: format!("expected 4 coordinates, found {}", v.len()),
            });
        }
        self.add_edge(v[0], v[1], v[2], v[3]);
        Ok(())
    }
}

impl<'a> IntoIterator for &'a EdgeTable {
    type Item = &'a Edge;
    type IntoIter = std::slice::Iter<'a, Edge>;
    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}
