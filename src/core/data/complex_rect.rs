use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ComplexRectError {
    InvalidSize { width: f32, height: f32 },
}

impl fmt::Display for ComplexRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(
                    f,
                    "complex rect size must be positive: {}x{}",
                    width, height
                )
            }
        }
    }
}

impl Error for ComplexRectError {}

/// Window `(x0, y0)`–`(x1, y1)` on the complex plane.
///
/// `top_left` holds the minimum real and imaginary parts; pixel row 0 maps to
/// `y0`, so the image is drawn with the imaginary axis pointing down.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ComplexRect {
    top_left: Complex,
    bottom_right: Complex,
}

impl ComplexRect {
    pub fn new(top_left: Complex, bottom_right: Complex) -> Result<Self, ComplexRectError> {
        let width = bottom_right.real - top_left.real;
        let height = bottom_right.imag - top_left.imag;

        // written as a negated comparison so NaN bounds are rejected too
        if !(width > 0.0 && height > 0.0) {
            return Err(ComplexRectError::InvalidSize { width, height });
        }

        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    pub fn from_bounds(x0: f32, y0: f32, x1: f32, y1: f32) -> Result<Self, ComplexRectError> {
        Self::new(
            Complex { real: x0, imag: y0 },
            Complex { real: x1, imag: y1 },
        )
    }

    #[must_use]
    pub fn top_left(&self) -> Complex {
        self.top_left
    }

    #[must_use]
    pub fn bottom_right(&self) -> Complex {
        self.bottom_right
    }

    #[must_use]
    pub fn width(&self) -> f32 {
        self.bottom_right.real - self.top_left.real
    }

    #[must_use]
    pub fn height(&self) -> f32 {
        self.bottom_right.imag - self.top_left.imag
    }

    /// Scales both corners about the origin, then translates them.
    pub fn scale_and_shift(
        &self,
        scale: f32,
        shift: Complex,
    ) -> Result<Self, ComplexRectError> {
        Self::new(
            Complex {
                real: self.top_left.real * scale + shift.real,
                imag: self.top_left.imag * scale + shift.imag,
            },
            Complex {
                real: self.bottom_right.real * scale + shift.real,
                imag: self.bottom_right.imag * scale + shift.imag,
            },
        )
    }
}
