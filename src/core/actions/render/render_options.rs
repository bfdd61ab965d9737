use crate::core::util::partition_rows::RemainderPolicy;
use crate::core::util::thread_limit::{available_threads, ThreadLimit};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub num_threads: u32,
    pub thread_limit: ThreadLimit,
    pub remainder_policy: RemainderPolicy,
}

impl Default for RenderOptions {
    fn default() -> Self {
        let thread_limit = ThreadLimit::default();

        Self {
            num_threads: available_threads().get().min(thread_limit.max()),
            thread_limit,
            remainder_policy: RemainderPolicy::default(),
        }
    }
}

impl RenderOptions {
    #[must_use]
    pub fn with_threads(num_threads: u32) -> Self {
        Self {
            num_threads,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn remainder_policy(mut self, remainder_policy: RemainderPolicy) -> Self {
        self.remainder_policy = remainder_policy;
        self
    }

    #[must_use]
    pub fn thread_limit(mut self, thread_limit: ThreadLimit) -> Self {
        self.thread_limit = thread_limit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_threads_within_limit() {
        let options = RenderOptions::default();

        assert!(options.num_threads >= 1);
        assert!(options.thread_limit.check(options.num_threads).is_ok());
    }

    #[test]
    fn test_builders() {
        let options = RenderOptions::with_threads(3).remainder_policy(RemainderPolicy::Spread);

        assert_eq!(options.num_threads, 3);
        assert_eq!(options.remainder_policy, RemainderPolicy::Spread);
    }
}
