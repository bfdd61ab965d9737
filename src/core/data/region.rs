use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::row_range::RowRange;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RegionError {
    EmptyGrid { width: u32, height: u32 },
}

impl fmt::Display for RegionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid { width, height } => {
                write!(f, "pixel grid must not be empty: {}x{}", width, height)
            }
        }
    }
}

impl Error for RegionError {}

/// A complex-plane window mapped onto a `width × height` pixel grid.
///
/// Immutable once built; every worker of a render shares the same one.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Region {
    window: ComplexRect,
    width: u32,
    height: u32,
}

impl Region {
    pub fn new(window: ComplexRect, width: u32, height: u32) -> Result<Self, RegionError> {
        if width == 0 || height == 0 {
            return Err(RegionError::EmptyGrid { width, height });
        }

        Ok(Self {
            window,
            width,
            height,
        })
    }

    #[must_use]
    pub fn window(&self) -> ComplexRect {
        self.window
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
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Every row of the grid as one range.
    #[must_use]
    pub fn all_rows(&self) -> RowRange {
        RowRange::new(0, self.height)
    }

    /// Distance on the complex plane between neighbouring pixel centres.
    #[must_use]
    pub fn step(&self) -> Complex {
        Complex {
            real: self.window.width() / self.width as f32,
            imag: self.window.height() / self.height as f32,
        }
    }

    /// The point sampled for pixel `(column, row)`.
    #[must_use]
    pub fn point_at(&self, column: u32, row: u32) -> Complex {
        let origin = self.window.top_left();
        let step = self.step();

        Complex {
            real: origin.real + column as f32 * step.real,
            imag: origin.imag + row as f32 * step.imag,
        }
    }
}
