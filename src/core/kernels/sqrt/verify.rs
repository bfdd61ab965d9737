use log::warn;

pub const TOLERANCE: f32 = 1e-4;

/// An output further than [`TOLERANCE`] from its reference value.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Deviation {
    pub index: usize,
    pub expected: f32,
    pub actual: f32,
}

/// Returns every index where `results` strays from `gold`, logging each one.
/// Never stops early.
#[must_use]
pub fn verify_results(results: &[f32], gold: &[f32]) -> Vec<Deviation> {
    results
        .iter()
        .zip(gold.iter())
        .enumerate()
        // negated so NaN counts as a deviation
        .filter(|(_, (actual, expected))| !((*actual - *expected).abs() <= TOLERANCE))
        .map(|(index, (&actual, &expected))| {
            warn!("[{}] got {} expected {}", index, actual, expected);
            Deviation {
                index,
                expected,
                actual,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_within_tolerance_passes() {
        let gold = [1.0f32, 2.0, 3.0];
        let results = [1.00005f32, 1.99995, 3.0];

        assert!(verify_results(&results, &gold).is_empty());
    }

    #[test]
    fn test_reports_every_deviation() {
        let gold = [1.0f32, 2.0, 3.0, 4.0];
        let results = [1.0f32, 2.5, 3.0, 3.0];

        let deviations = verify_results(&results, &gold);

        assert_eq!(
            deviations,
            vec![
                Deviation { index: 1, expected: 2.0, actual: 2.5 },
                Deviation { index: 3, expected: 4.0, actual: 3.0 },
            ]
        );
    }

    #[test]
    fn test_nan_is_a_deviation() {
        let deviations = verify_results(&[f32::NAN], &[1.0]);

        assert_eq!(deviations.len(), 1);
        assert_eq!(deviations[0].index, 0);
    }
}
