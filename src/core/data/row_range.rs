use std::fmt;
use std::ops::Range;

/// Half-open run of pixel rows `[start_row, start_row + row_count)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct RowRange {
    start_row: u32,
    row_count: u32,
}

impl RowRange {
    #[must_use]
    pub const fn new(start_row: u32, row_count: u32) -> Self {
        Self {
            start_row,
            row_count,
        }
    }

    #[must_use]
    pub fn start_row(&self) -> u32 {
        self.start_row
    }

    #[must_use]
    pub fn row_count(&self) -> u32 {
        self.row_count
    }

    #[must_use]
    pub fn end_row(&self) -> u32 {
        self.start_row + self.row_count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }

    #[must_use]
    pub fn contains(&self, row: u32) -> bool {
        self.start_row <= row && row < self.end_row()
    }

    #[must_use]
    pub fn rows(&self) -> Range<u32> {
        self.start_row..self.end_row()
    }

    /// Offsets of this range inside a row-major buffer `width` values wide.
    #[must_use]
    pub fn span(&self, width: u32) -> Range<usize> {
        let width = width as usize;
        self.start_row as usize * width..self.end_row() as usize * width
    }
}

impl fmt::Display for RowRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{})", self.start_row, self.end_row())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_row_is_exclusive() {
        let range = RowRange::new(25, 25);

        assert_eq!(range.end_row(), 50);
        assert!(range.contains(25));
        assert!(range.contains(49));
        assert!(!range.contains(50));
        assert!(!range.contains(24));
    }

    #[test]
    fn test_empty_range_contains_nothing() {
        let range = RowRange::new(4, 0);

        assert!(range.is_empty());
        assert!(!range.contains(4));
        assert_eq!(range.rows().count(), 0);
    }

    #[test]
    fn test_span_scales_by_width() {
        let range = RowRange::new(2, 3);

        assert_eq!(range.span(10), 20..50);
    }

    #[test]
    fn test_display() {
        assert_eq!(RowRange::new(6, 4).to_string(), "[6,10)");
    }
}
