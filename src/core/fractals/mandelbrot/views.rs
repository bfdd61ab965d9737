use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
use std::fmt;
use std::str::FromStr;

const DETAIL_SCALE: f32 = 0.015;
const DETAIL_SHIFT: Complex = Complex {
    real: -0.986,
    imag: 0.30,
};

/// Preset windows on the complex plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MandelbrotView {
    /// The whole set: `(-2, -1)`–`(1, 1)`.
    #[default]
    Full,
    /// The full window scaled down by 0.015 and moved onto the seahorse
    /// valley near `-0.986 + 0.30i`.
    Detail,
}

impl MandelbrotView {
    pub const ALL: &'static [Self] = &[Self::Full, Self::Detail];

    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Full => 1,
            Self::Detail => 2,
        }
    }

    pub fn window(self) -> Result<ComplexRect, ComplexRectError> {
        let full = ComplexRect::from_bounds(-2.0, -1.0, 1.0, 1.0)?;

        match self {
            Self::Full => Ok(full),
            Self::Detail => full.scale_and_shift(DETAIL_SCALE, DETAIL_SHIFT),
        }
    }
}

impl fmt::Display for MandelbrotView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

impl FromStr for MandelbrotView {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|view| view.number().to_string() == s)
            .ok_or_else(|| format!("unknown view: {} (expected 1 or 2)", s))
    }
}
