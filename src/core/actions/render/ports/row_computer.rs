use crate::core::data::region::Region;
use crate::core::data::row_range::RowRange;

pub trait RowComputer {
    /// Fills `strip` with the counts for `rows`, row-major, starting at
    /// `strip[0]`. `strip` holds exactly `rows.row_count() * region.width()`
    /// values.
    fn compute_strip(
        &self,
        region: &Region,
        max_iterations: u32,
        rows: RowRange,
        strip: &mut [u32],
    );

    /// Writes the counts for `rows` into a full-image buffer at offset
    /// `rows.start_row() * region.width()`, leaving every other value alone.
    fn compute_rows(
        &self,
        region: &Region,
        max_iterations: u32,
        rows: RowRange,
        output: &mut [u32],
    ) {
        let span = rows.span(region.width());
        self.compute_strip(region, max_iterations, rows, &mut output[span]);
    }
}
