use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;

const SATURATION_COUNT: f32 = 256.0;

/// Square-root ramp from black to white; counts of 256 or more are white.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreyscaleColourMap;

impl ColourMap<u32> for GreyscaleColourMap {
    fn map(&self, iterations: u32) -> Colour {
        let level = (iterations as f32 / SATURATION_COUNT).min(1.0).sqrt();

        Colour::grey((255.0 * level) as u8)
    }

    fn display_name(&self) -> &str {
        "Greyscale"
    }
}
