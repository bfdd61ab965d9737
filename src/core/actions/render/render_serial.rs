use crate::core::actions::render::errors::RenderError;
use crate::core::actions::render::ports::row_computer::RowComputer;
use crate::core::data::iteration_buffer::IterationBuffer;
use crate::core::fractals::mandelbrot::params::MandelbrotParams;

/// Reference render: one row computer call over the whole image.
pub fn render_serial<C: RowComputer + ?Sized>(
    params: &MandelbrotParams,
    computer: &C,
    output: &mut IterationBuffer,
) -> Result<(), RenderError> {
    let region = params.region();
    output.ensure_dimensions(region.width(), region.height())?;

    computer.compute_rows(region, params.max_iterations(), region.all_rows(), output.data_mut());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex_rect::ComplexRect;
    use crate::core::data::iteration_buffer::IterationBufferError;
    use crate::core::data::region::Region;
    use crate::core::fractals::mandelbrot::algorithm::{escape_time, EscapeTimeRowComputer};

    fn params(width: u32, height: u32) -> MandelbrotParams {
        let window = ComplexRect::from_bounds(-2.0, -1.0, 1.0, 1.0).unwrap();
        MandelbrotParams::new(Region::new(window, width, height).unwrap(), 64).unwrap()
    }

    #[test]
    fn test_serial_fills_every_pixel() {
        let params = params(12, 9);
        let mut output = IterationBuffer::from_data(12, 9, vec![u32::MAX; 108]).unwrap();

        render_serial(&params, &EscapeTimeRowComputer, &mut output).unwrap();

        for row in 0..9 {
            for column in 0..12 {
                let expected = escape_time(params.region().point_at(column, row), 64);
                assert_eq!(output.data()[(row * 12 + column) as usize], expected);
            }
        }
    }

    #[test]
    fn test_serial_rejects_wrong_output_size() {
        let mut output = IterationBuffer::new(12, 8);

        assert_eq!(
            render_serial(&params(12, 9), &EscapeTimeRowComputer, &mut output),
            Err(RenderError::Output(IterationBufferError::DimensionMismatch {
                expected: (12, 9),
                actual: (12, 8)
            }))
        );
    }
}
