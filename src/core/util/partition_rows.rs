use crate::core::data::row_range::RowRange;
use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

/// Where the `height % num_threads` leftover rows go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RemainderPolicy {
    /// The last strip absorbs every leftover row.
    #[default]
    WidenLast,
    /// The first `height % num_threads` strips take one extra row each.
    Spread,
}

impl RemainderPolicy {
    pub const ALL: &'static [Self] = &[Self::WidenLast, Self::Spread];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::WidenLast => "widen-last",
            Self::Spread => "spread",
        }
    }
}

impl fmt::Display for RemainderPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RemainderPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|policy| policy.name() == s)
            .ok_or_else(|| format!("unknown remainder policy: {}", s))
    }
}

fn strip_rows(
    strip: u32,
    strip_height: u32,
    remainder: u32,
    total_strips: u32,
    policy: RemainderPolicy,
) -> RowRange {
    match policy {
        RemainderPolicy::WidenLast => {
            let start_row = strip * strip_height;
            let row_count = if strip == total_strips - 1 {
                strip_height + remainder
            } else {
                strip_height
            };

            RowRange::new(start_row, row_count)
        }
        RemainderPolicy::Spread => {
            let start_row = strip * strip_height + strip.min(remainder);
            let row_count = strip_height + u32::from(strip < remainder);

            RowRange::new(start_row, row_count)
        }
    }
}

/// Splits `[0, height)` into `num_threads` contiguous, ordered strips.
///
/// Every row lands in exactly one strip. When there are more threads than
/// rows the trailing strips (or, for `WidenLast`, all but the last) are
/// empty.
#[must_use]
pub fn partition_rows(
    height: u32,
    num_threads: NonZeroU32,
    policy: RemainderPolicy,
) -> Vec<RowRange> {
    let total_strips = num_threads.get();
    let strip_height = height / total_strips;
    let remainder = height % total_strips;

    (0..total_strips)
        .map(|strip| strip_rows(strip, strip_height, remainder, total_strips, policy))
        .collect()
}
