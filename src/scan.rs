//! Scanline intersections and spans

/// Inside run on one scanline, `x1..=x2`
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub struct Span {
    pub x1: i64,
    pub x2: i64,
    pub y: i64,
}

impl Span {
    /// Number of pixels covered
    pub fn len(&self) -> i64 {
        self.x2 - self.x1 + 1
    }
}

/// Edge intersections of a single row
#[derive(Debug,Default,Clone)]
pub struct Scanline {
    pub y: i64,
    xs: Vec<i64>,
}

impl Scanline {
    pub fn new() -> Self {
        Self { y: 0, xs: vec![] }
    }
    /// Start a new row, keeping the allocation
    pub fn reset(&mut self, y: i64) {
        self.y = y;
        self.xs.clear();
    }
    pub fn add_intersection(&mut self, x: i64) {
        self.xs.push(x);
    }
    /// Sort intersections, smallest x first
    pub fn sort(&mut self) {
        self.xs.sort_unstable();
    }
    pub fn intersections(&self) -> &[i64] {
        &self.xs
    }
    pub fn num_intersections(&self) -> usize {
        self.xs.len()
    }
    /// An odd count means an open or inconsistent outline
    pub fn is_odd(&self) -> bool {
        self.xs.len() % 2 == 1
    }
    /// Pair sorted intersections (x0,x1), (x2,x3), ...
    ///
    /// A trailing unpaired intersection is dropped
    pub fn spans(&self) -> impl Iterator<Item = Span> + '_ {
        let y = self.y;
        self.xs.chunks_exact(2).map(move |p| Span { x1: p[0], x2: p[1], y })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs() {
        let mut sl = Scanline::new();
        sl.reset(3);
        for &x in &[9, 1, 7, 4] {
            sl.add_intersection(x);
        }
        sl.sort();
        let spans: Vec<_> = sl.spans().collect();
        assert_eq!(spans, vec![Span { x1: 1, x2: 4, y: 3 }, Span { x1: 7, x2: 9, y: 3 }]);
        assert_eq!(spans[0].len(), 4);
        assert!(!sl.is_odd());
    }

    #[test]
    fn odd_trailing_dropped() {
        let mut sl = Scanline::new();
        sl.reset(0);
        for &x in &[5, 2, 8] {
            sl.add_intersection(x);
        }
        sl.sort();
        assert!(sl.is_odd());
        assert_eq!(sl.spans().collect::<Vec<_>>(), vec![Span { x1: 2, x2: 5, y: 0 }]);
        sl.reset(1);
        assert_eq!(sl.num_intersections(), 0);
    }
}
