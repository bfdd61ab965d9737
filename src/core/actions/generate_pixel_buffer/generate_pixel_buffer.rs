use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::iteration_buffer::IterationBuffer;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferData, PixelBufferError};

/// Maps every iteration count to a colour, keeping the row-major layout.
pub fn generate_pixel_buffer<CMap: ColourMap<u32> + ?Sized>(
    counts: &IterationBuffer,
    mapper: &CMap,
) -> Result<PixelBuffer, PixelBufferError> {
    let mut buffer: PixelBufferData = Vec::with_capacity(counts.data().len() * 3);

    for &count in counts.data() {
        let Colour { r, g, b } = mapper.map(count);

        buffer.push(r);
        buffer.push(g);
        buffer.push(b);
    }

    PixelBuffer::from_data(counts.width(), counts.height(), buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct StubColourMap {}

    impl ColourMap<u32> for StubColourMap {
        fn map(&self, value: u32) -> Colour {
            Colour {
                r: value as u8,
                g: value as u8 * 2,
                b: 0,
            }
        }

        fn display_name(&self) -> &str {
            "Stub"
        }
    }

    #[test]
    fn test_generates_pixel_buffer_correctly() {
        let counts = IterationBuffer::from_data(3, 2, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let expected: PixelBufferData =
            vec![1, 2, 0, 2, 4, 0, 3, 6, 0, 4, 8, 0, 5, 10, 0, 6, 12, 0];

        let pixels = generate_pixel_buffer(&counts, &StubColourMap {}).unwrap();

        assert_eq!(pixels.width(), 3);
        assert_eq!(pixels.height(), 2);
        assert_eq!(pixels.buffer(), &expected);
    }
}
