use crate::core::data::row_range::RowRange;
use std::error::Error;
use std::fmt;

fn grid_to_buffer_size(width: u32, height: u32) -> usize {
    width as usize * height as usize
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IterationBufferError {
    BoundsMismatch {
        grid_size: usize,
        buffer_size: usize,
    },
    RowsOutOfBounds {
        rows: RowRange,
        height: u32,
    },
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },
}

impl fmt::Display for IterationBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                grid_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "grid size {} does not match buffer size {}",
                    grid_size, buffer_size
                )
            }
            Self::RowsOutOfBounds { rows, height } => {
                write!(f, "rows {} outside of buffer height {}", rows, height)
            }
            Self::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "buffer is {}x{}, expected {}x{}",
                    actual.0, actual.1, expected.0, expected.1
                )
            }
        }
    }
}

impl Error for IterationBufferError {}

/// First pixel at which two buffers disagree.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub column: u32,
    pub row: u32,
    pub expected: u32,
    pub actual: u32,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "mismatch at [{}][{}]: expected {}, got {}",
            self.row, self.column, self.expected, self.actual
        )
    }
}

pub type IterationData = Vec<u32>;

/// Row-major escape-time counts for a `width × height` grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IterationBuffer {
    width: u32,
    height: u32,
    data: IterationData,
}

impl IterationBuffer {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; grid_to_buffer_size(width, height)],
        }
    }

    pub fn from_data(
        width: u32,
        height: u32,
        data: IterationData,
    ) -> Result<Self, IterationBufferError> {
        let grid_size = grid_to_buffer_size(width, height);

        if grid_size != data.len() {
            return Err(IterationBufferError::BoundsMismatch {
                grid_size,
                buffer_size: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn data(&self) -> &[u32] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut self.data
    }

    pub fn fill(&mut self, value: u32) {
        self.data.fill(value);
    }

    pub fn ensure_dimensions(&self, width: u32, height: u32) -> Result<(), IterationBufferError> {
        if (self.width, self.height) != (width, height) {
            return Err(IterationBufferError::DimensionMismatch {
                expected: (width, height),
                actual: (self.width, self.height),
            });
        }

        Ok(())
    }

    fn check_rows(&self, rows: RowRange) -> Result<(), IterationBufferError> {
        if rows.end_row() > self.height {
            return Err(IterationBufferError::RowsOutOfBounds {
                rows,
                height: self.height,
            });
        }

        Ok(())
    }

    pub fn rows(&self, rows: RowRange) -> Result<&[u32], IterationBufferError> {
        self.check_rows(rows)?;
        Ok(&self.data[rows.span(self.width)])
    }

    pub fn rows_mut(&mut self, rows: RowRange) -> Result<&mut [u32], IterationBufferError> {
        self.check_rows(rows)?;
        let span = rows.span(self.width);
        Ok(&mut self.data[span])
    }

    /// Copies `rows` from `source` into the same rows of `self`.
    pub fn copy_rows_from(
        &mut self,
        source: &IterationBuffer,
        rows: RowRange,
    ) -> Result<(), IterationBufferError> {
        source.ensure_dimensions(self.width, self.height)?;
        self.rows_mut(rows)?.copy_from_slice(source.rows(rows)?);

        Ok(())
    }

    /// Splits the buffer into one mutable view per range.
    ///
    /// `ranges` must be ordered and contiguous from row 0 to the last row.
    pub fn split_rows_mut(
        &mut self,
        ranges: &[RowRange],
    ) -> Result<Vec<&mut [u32]>, IterationBufferError> {
        let mut views = Vec::with_capacity(ranges.len());
        let mut remaining: &mut [u32] = &mut self.data;
        let mut next_row = 0;

        for &range in ranges {
            if range.start_row() != next_row || range.end_row() > self.height {
                return Err(IterationBufferError::RowsOutOfBounds {
                    rows: range,
                    height: self.height,
                });
            }

            let view_len = range.span(self.width).len();
            let (view, rest) = std::mem::take(&mut remaining).split_at_mut(view_len);
            views.push(view);
            remaining = rest;
            next_row = range.end_row();
        }

        if next_row != self.height {
            return Err(IterationBufferError::RowsOutOfBounds {
                rows: RowRange::new(next_row, self.height - next_row),
                height: self.height,
            });
        }

        Ok(views)
    }

    /// Compares against `expected`, returning the first differing pixel.
    pub fn first_mismatch(
        &self,
        expected: &IterationBuffer,
    ) -> Result<Option<Mismatch>, IterationBufferError> {
        expected.ensure_dimensions(self.width, self.height)?;

        let mismatch = self
            .data
            .iter()
            .zip(expected.data.iter())
            .position(|(actual, expected)| actual != expected)
            .map(|index| Mismatch {
                column: (index % self.width as usize) as u32,
                row: (index / self.width as usize) as u32,
                expected: expected.data[index],
                actual: self.data[index],
            });

        Ok(mismatch)
    }
}
