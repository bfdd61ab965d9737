pub mod colour;
pub mod complex;
pub mod complex_rect;
pub mod iteration_buffer;
pub mod pixel_buffer;
pub mod region;
pub mod row_range;
