//! Timing of a scoped block

use std::time::{Duration, Instant};

/// Reports the time spent in a block to stderr when dropped
///
///     use grayfill::BlockTimer;
///
///     {
///         let _t = BlockTimer::new("Fill Polygon");
///         // ...
///     } // "Fill Polygon: 0.012 ms"
///
#[derive(Debug)]
pub struct BlockTimer {
    name: String,
    start: Instant,
}

impl BlockTimer {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self { name: name.into(), start: Instant::now() }
    }
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for BlockTimer {
    fn drop(&mut self) {
        let ms = self.elapsed().as_secs_f64() * 1000.0;
        eprintln!("{}: {:.3} ms", self.name, ms);
    }
}
