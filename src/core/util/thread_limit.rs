use std::error::Error;
use std::fmt;
use std::num::NonZeroU32;

pub const DEFAULT_MAX_THREADS: u32 = 32;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ThreadCountError {
    Zero,
    ExceedsMax { requested: u32, max: u32 },
}

impl fmt::Display for ThreadCountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zero => write!(f, "at least one thread is required"),
            Self::ExceedsMax { max, .. } => write!(f, "Max allowed threads is {}", max),
        }
    }
}

impl Error for ThreadCountError {}

/// Upper bound on the worker count of a single render.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ThreadLimit {
    max: NonZeroU32,
}

impl Default for ThreadLimit {
    fn default() -> Self {
        Self::new(NonZeroU32::MIN.saturating_add(DEFAULT_MAX_THREADS - 1))
    }
}

impl ThreadLimit {
    #[must_use]
    pub const fn new(max: NonZeroU32) -> Self {
        Self { max }
    }

    #[must_use]
    pub fn max(&self) -> u32 {
        self.max.get()
    }

    pub fn check(&self, requested: u32) -> Result<NonZeroU32, ThreadCountError> {
        let requested_threads = NonZeroU32::new(requested).ok_or(ThreadCountError::Zero)?;

        if requested_threads > self.max {
            return Err(ThreadCountError::ExceedsMax {
                requested,
                max: self.max.get(),
            });
        }

        Ok(requested_threads)
    }
}

/// Threads the host can run at once, falling back to one.
#[must_use]
pub fn available_threads() -> NonZeroU32 {
    std::thread::available_parallelism()
        .ok()
        .and_then(|n| NonZeroU32::new(n.get() as u32))
        .unwrap_or(NonZeroU32::MIN)
}
