pub mod mandelbrot_benchmark;
pub mod ports;
pub mod sqrt_benchmark;
