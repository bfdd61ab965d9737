use crate::core::data::region::Region;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

/// The read-only inputs every worker of a render shares.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MandelbrotParams {
    region: Region,
    max_iterations: u32,
}

impl MandelbrotParams {
    pub fn new(region: Region, max_iterations: u32) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterationsError);
        }

        Ok(Self {
            region,
            max_iterations,
        })
    }

    #[must_use]
    pub fn region(&self) -> &Region {
        &self.region
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex_rect::ComplexRect;

    fn region() -> Region {
        Region::new(ComplexRect::from_bounds(-2.0, -1.0, 1.0, 1.0).unwrap(), 10, 10).unwrap()
    }

    #[test]
    fn test_params_reject_zero_iterations() {
        assert_eq!(
            MandelbrotParams::new(region(), 0),
            Err(MandelbrotError::ZeroMaxIterationsError)
        );
    }

    #[test]
    fn test_params_getters() {
        let params = MandelbrotParams::new(region(), 100).unwrap();

        assert_eq!(params.region(), &region());
        assert_eq!(params.max_iterations(), 100);
    }
}
