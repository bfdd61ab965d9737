use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::str::FromStr;

const MIN_INPUT: f32 = 0.001;
const INPUT_SPAN: f32 = 2.998;
const SLOWEST_INPUT: f32 = 2.999;

/// How the benchmark fills its input array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputPattern {
    /// Uniform in `[0.001, 2.999]`.
    #[default]
    Random,
    /// Every element `2.999`, the slowest value to converge. Each lane of a
    /// gang does the same work.
    Uniform,
    /// `1.0` everywhere except every fourth element, which is `2.999`. One
    /// slow lane holds up the rest of its gang.
    Skewed,
}

impl InputPattern {
    pub const ALL: &'static [Self] = &[Self::Random, Self::Uniform, Self::Skewed];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Uniform => "uniform",
            Self::Skewed => "skewed",
        }
    }

    #[must_use]
    pub fn generate(self, count: usize, seed: u64) -> Vec<f32> {
        match self {
            Self::Random => {
                let mut rng = StdRng::seed_from_u64(seed);
                (0..count)
                    .map(|_| MIN_INPUT + INPUT_SPAN * rng.r#gen::<f32>())
                    .collect()
            }
            Self::Uniform => vec![SLOWEST_INPUT; count],
            Self::Skewed => (0..count)
                .map(|i| if i % 4 == 0 { SLOWEST_INPUT } else { 1.0 })
                .collect(),
        }
    }
}

impl fmt::Display for InputPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InputPattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|pattern| pattern.name() == s)
            .ok_or_else(|| format!("unknown input pattern: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_inputs_stay_in_range() {
        let inputs = InputPattern::Random.generate(10_000, 7);

        assert_eq!(inputs.len(), 10_000);
        assert!(inputs.iter().all(|&x| (0.001..=2.999).contains(&x)));
    }

    #[test]
    fn test_random_is_reproducible_per_seed() {
        assert_eq!(
            InputPattern::Random.generate(100, 42),
            InputPattern::Random.generate(100, 42)
        );
        assert_ne!(
            InputPattern::Random.generate(100, 42),
            InputPattern::Random.generate(100, 43)
        );
    }

    #[test]
    fn test_skewed_has_one_slow_value_in_four() {
        let inputs = InputPattern::Skewed.generate(8, 0);

        assert_eq!(inputs, vec![2.999, 1.0, 1.0, 1.0, 2.999, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_pattern_parses_from_name() {
        for pattern in InputPattern::ALL {
            assert_eq!(pattern.name().parse(), Ok(*pattern));
        }
        assert!("sorted".parse::<InputPattern>().is_err());
    }
}
