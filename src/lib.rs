pub mod controllers;
pub mod core;
pub mod presenters;

pub use crate::controllers::mandelbrot_benchmark::{
    MandelbrotBenchConfig, MandelbrotBenchController, MandelbrotBenchReport, SERIAL_IMAGE,
    THREAD_IMAGE,
};
pub use crate::controllers::ports::file_presenter::FilePresenterPort;
pub use crate::controllers::sqrt_benchmark::{run_sqrt_benchmark, SqrtBenchConfig, SqrtBenchReport};
pub use crate::core::actions::render::errors::RenderError;
pub use crate::core::actions::render::render_options::RenderOptions;
pub use crate::core::actions::render::render_parallel::render_parallel;
pub use crate::core::actions::render::render_parallel_in_place::render_parallel_in_place;
pub use crate::core::actions::render::render_serial::render_serial;
pub use crate::core::fractals::mandelbrot::views::MandelbrotView;
pub use crate::core::kernels::sqrt::input_pattern::InputPattern;
pub use crate::core::util::partition_rows::RemainderPolicy;
pub use crate::core::util::thread_limit::{ThreadCountError, ThreadLimit, DEFAULT_MAX_THREADS};
pub use crate::presenters::file::ppm::PpmFilePresenter;
