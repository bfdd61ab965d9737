use log::info;
use std::sync::Mutex;
use std::time::Duration;

/// Wall-clock time one worker spent inside the row computer.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct WorkerTiming {
    pub thread_id: u32,
    pub elapsed: Duration,
}

impl WorkerTiming {
    #[must_use]
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Receives one observation per worker per render, in no particular order.
pub trait TimingSink: Sync {
    fn record(&self, timing: WorkerTiming);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardTimings;

impl TimingSink for DiscardTimings {
    #[inline]
    fn record(&self, _: WorkerTiming) {}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LogTimings;

impl TimingSink for LogTimings {
    fn record(&self, timing: WorkerTiming) {
        info!(
            "thread {} took {:.6}s",
            timing.thread_id,
            timing.elapsed_seconds()
        );
    }
}

#[derive(Debug, Default)]
pub struct CollectTimings {
    timings: Mutex<Vec<WorkerTiming>>,
}

impl CollectTimings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far, ordered by thread id.
    #[must_use]
    pub fn sorted(&self) -> Vec<WorkerTiming> {
        let mut timings = match self.timings.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        };
        timings.sort_by_key(|timing| timing.thread_id);
        timings
    }
}

impl TimingSink for CollectTimings {
    fn record(&self, timing: WorkerTiming) {
        match self.timings.lock() {
            Ok(mut guard) => guard.push(timing),
            Err(poisoned) => poisoned.into_inner().push(timing),
        }
    }
}

impl<F> TimingSink for F
where
    F: Fn(WorkerTiming) + Sync,
{
    #[inline]
    fn record(&self, timing: WorkerTiming) {
        self(timing)
    }
}
