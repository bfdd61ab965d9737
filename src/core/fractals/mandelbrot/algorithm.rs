use crate::core::actions::render::ports::row_computer::RowComputer;
use crate::core::data::complex::Complex;
use crate::core::data::region::Region;
use crate::core::data::row_range::RowRange;

const ESCAPE_RADIUS_SQUARED: f32 = 4.0;

/// Iterations of `z ← z² + c` from `z = 0` before `|z| > 2`, capped at
/// `max_iterations`.
#[inline]
#[must_use]
pub fn escape_time(c: Complex, max_iterations: u32) -> u32 {
    let mut z = Complex::ZERO;

    for iteration in 0..max_iterations {
        if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
            return iteration;
        }
        z = z.square() + c;
    }

    max_iterations
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EscapeTimeRowComputer;

impl RowComputer for EscapeTimeRowComputer {
    fn compute_strip(
        &self,
        region: &Region,
        max_iterations: u32,
        rows: RowRange,
        strip: &mut [u32],
    ) {
        let width = region.width();

        for (row, counts) in rows.rows().zip(strip.chunks_exact_mut(width as usize)) {
            for (column, count) in (0..width).zip(counts.iter_mut()) {
                *count = escape_time(region.point_at(column, row), max_iterations);
            }
        }
    }
}
