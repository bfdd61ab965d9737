use std::time::Duration;

use crate::core::actions::render::ports::timing_sink::WorkerTiming;
use crate::core::data::row_range::RowRange;

/// What a finished render did: the strips it used and how long each took.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderReport {
    pub ranges: Vec<RowRange>,
    pub timings: Vec<WorkerTiming>,
    pub elapsed: Duration,
}

impl RenderReport {
    #[must_use]
    pub fn num_threads(&self) -> usize {
        self.ranges.len()
    }

    /// The worker that finished last bounds the whole render.
    #[must_use]
    pub fn slowest(&self) -> Option<WorkerTiming> {
        self.timings.iter().copied().max_by_key(|timing| timing.elapsed)
    }
}
