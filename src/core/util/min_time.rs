use std::time::{Duration, Instant};

/// Runs `work` `trials` times (at least once) and returns the fastest run
/// along with the result of the last one.
pub fn min_time<T>(trials: u32, mut work: impl FnMut() -> T) -> (Duration, T) {
    let start = Instant::now();
    let mut result = work();
    let mut fastest = start.elapsed();

    for _ in 1..trials {
        let start = Instant::now();
        result = work();
        fastest = fastest.min(start.elapsed());
    }

    (fastest, result)
}

/// `baseline / candidate`, or zero when the candidate took no measurable time.
#[must_use]
pub fn speedup(baseline: Duration, candidate: Duration) -> f64 {
    if candidate.is_zero() {
        return 0.0;
    }

    baseline.as_secs_f64() / candidate.as_secs_f64()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runs_every_trial() {
        let mut runs = 0;

        let (_, last) = min_time(5, || {
            runs += 1;
            runs
        });

        assert_eq!(runs, 5);
        assert_eq!(last, 5);
    }

    #[test]
    fn test_zero_trials_still_runs_once() {
        let mut runs = 0;

        min_time(0, || runs += 1);

        assert_eq!(runs, 1);
    }

    #[test]
    fn test_speedup() {
        assert_eq!(speedup(Duration::from_secs(3), Duration::from_secs(1)), 3.0);
        let inexact = speedup(Duration::from_millis(300), Duration::from_millis(100));
        assert!((inexact - 3.0).abs() < 1e-9);
        assert_eq!(speedup(Duration::from_millis(300), Duration::ZERO), 0.0);
    }
}
