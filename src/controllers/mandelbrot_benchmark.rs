use log::info;
use std::error::Error;
use std::path::Path;
use std::time::Duration;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer;
use crate::core::actions::render::ports::timing_sink::LogTimings;
use crate::core::actions::render::render_options::RenderOptions;
use crate::core::actions::render::render_parallel::render_parallel;
use crate::core::actions::render::render_parallel_in_place::render_parallel_in_place;
use crate::core::actions::render::render_report::RenderReport;
use crate::core::actions::render::render_serial::render_serial;
use crate::core::data::iteration_buffer::{IterationBuffer, Mismatch};
use crate::core::data::region::Region;
use crate::core::fractals::mandelbrot::algorithm::EscapeTimeRowComputer;
use crate::core::fractals::mandelbrot::colour_map::GreyscaleColourMap;
use crate::core::fractals::mandelbrot::params::MandelbrotParams;
use crate::core::fractals::mandelbrot::views::MandelbrotView;
use crate::core::util::min_time::{min_time, speedup};

pub const SERIAL_IMAGE: &str = "mandelbrot-serial.ppm";
pub const THREAD_IMAGE: &str = "mandelbrot-thread.ppm";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MandelbrotBenchConfig {
    pub width: u32,
    pub height: u32,
    pub max_iterations: u32,
    pub view: MandelbrotView,
    pub options: RenderOptions,
    pub trials: u32,
    pub in_place: bool,
}

impl Default for MandelbrotBenchConfig {
    fn default() -> Self {
        Self {
            width: 1600,
            height: 1200,
            max_iterations: 256,
            view: MandelbrotView::default(),
            options: RenderOptions::with_threads(2),
            trials: 5,
            in_place: false,
        }
    }
}

impl MandelbrotBenchConfig {
    pub fn params(&self) -> Result<MandelbrotParams, Box<dyn Error>> {
        let region = Region::new(self.view.window()?, self.width, self.height)?;

        Ok(MandelbrotParams::new(region, self.max_iterations)?)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MandelbrotBenchReport {
    pub serial_time: Duration,
    pub parallel_time: Duration,
    pub render: RenderReport,
    pub mismatch: Option<Mismatch>,
}

impl MandelbrotBenchReport {
    #[must_use]
    pub fn speedup(&self) -> f64 {
        speedup(self.serial_time, self.parallel_time)
    }
}

/// Times the serial reference against the threaded engine on the same image
/// and checks the two agree pixel for pixel.
pub struct MandelbrotBenchController<P: FilePresenterPort> {
    presenter: P,
    serial: Option<IterationBuffer>,
    parallel: Option<IterationBuffer>,
}

impl<P: FilePresenterPort> MandelbrotBenchController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            serial: None,
            parallel: None,
        }
    }

    pub fn run(
        &mut self,
        config: &MandelbrotBenchConfig,
    ) -> Result<MandelbrotBenchReport, Box<dyn Error>> {
        // a bad thread count must stop the run before the serial pass burns time
        config.options.thread_limit.check(config.options.num_threads)?;

        let params = config.params()?;
        let computer = EscapeTimeRowComputer;

        info!(
            "rendering view {} at {}x{}, {} iterations",
            config.view, config.width, config.height, config.max_iterations
        );

        let mut serial = IterationBuffer::new(config.width, config.height);
        let (serial_time, serial_result) =
            min_time(config.trials, || render_serial(&params, &computer, &mut serial));
        serial_result?;
        info!("serial: {:.3} ms", serial_time.as_secs_f64() * 1000.0);

        let mut parallel = IterationBuffer::new(config.width, config.height);
        let (parallel_time, render) = min_time(config.trials, || {
            parallel.fill(0);
            if config.in_place {
                render_parallel_in_place(
                    &config.options,
                    &params,
                    &computer,
                    &LogTimings,
                    &mut parallel,
                )
            } else {
                render_parallel(&config.options, &params, &computer, &LogTimings, &mut parallel)
            }
        });
        let render = render?;
        info!(
            "{} threads: {:.3} ms",
            render.num_threads(),
            parallel_time.as_secs_f64() * 1000.0
        );

        let mismatch = parallel.first_mismatch(&serial)?;

        self.serial = Some(serial);
        self.parallel = Some(parallel);

        Ok(MandelbrotBenchReport {
            serial_time,
            parallel_time,
            render,
            mismatch,
        })
    }

    /// Writes both images from the last run into `dir`.
    pub fn write(&self, dir: impl AsRef<Path>) -> Result<(), Box<dyn Error>> {
        let colour_map = GreyscaleColourMap;

        for (buffer, name) in [(&self.serial, SERIAL_IMAGE), (&self.parallel, THREAD_IMAGE)] {
            if let Some(buffer) = buffer {
                let pixels = generate_pixel_buffer(buffer, &colour_map)?;
                let filepath = dir.as_ref().join(name);

                self.presenter.present(&pixels, &filepath)?;
                info!("wrote {}", filepath.display());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::pixel_buffer::PixelBuffer;
    use crate::core::util::partition_rows::RemainderPolicy;
    use std::cell::RefCell;
    use std::path::PathBuf;

    #[derive(Default)]
    struct RecordingPresenter {
        written: RefCell<Vec<(PathBuf, u32, u32)>>,
    }

    impl FilePresenterPort for &RecordingPresenter {
        fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
            self.written
                .borrow_mut()
                .push((filepath.as_ref().to_path_buf(), buffer.width(), buffer.height()));
            Ok(())
        }
    }

    fn small_config(num_threads: u32) -> MandelbrotBenchConfig {
        MandelbrotBenchConfig {
            width: 48,
            height: 31,
            max_iterations: 64,
            options: RenderOptions::with_threads(num_threads),
            trials: 2,
            ..MandelbrotBenchConfig::default()
        }
    }

    #[test]
    fn test_run_agrees_with_serial() {
        let presenter = RecordingPresenter::default();
        let mut controller = MandelbrotBenchController::new(&presenter);

        let report = controller.run(&small_config(4)).unwrap();

        assert_eq!(report.mismatch, None);
        assert_eq!(report.render.num_threads(), 4);
    }

    #[test]
    fn test_run_in_place_with_spread_remainder() {
        let presenter = RecordingPresenter::default();
        let mut controller = MandelbrotBenchController::new(&presenter);
        let mut config = small_config(5);
        config.in_place = true;
        config.view = MandelbrotView::Detail;
        config.options = config.options.remainder_policy(RemainderPolicy::Spread);

        let report = controller.run(&config).unwrap();

        assert_eq!(report.mismatch, None);
    }

    #[test]
    fn test_run_rejects_too_many_threads() {
        let presenter = RecordingPresenter::default();
        let mut controller = MandelbrotBenchController::new(&presenter);

        let err = controller.run(&small_config(33)).unwrap_err();

        assert_eq!(err.to_string(), "Max allowed threads is 32");
    }

    #[test]
    fn test_write_presents_both_images() {
        let presenter = RecordingPresenter::default();
        let mut controller = MandelbrotBenchController::new(&presenter);
        controller.run(&small_config(2)).unwrap();

        controller.write("out").unwrap();

        assert_eq!(
            *presenter.written.borrow(),
            vec![
                (PathBuf::from("out").join(SERIAL_IMAGE), 48, 31),
                (PathBuf::from("out").join(THREAD_IMAGE), 48, 31),
            ]
        );
    }

    #[test]
    fn test_write_before_run_writes_nothing() {
        let presenter = RecordingPresenter::default();
        let controller = MandelbrotBenchController::new(&presenter);

        controller.write("out").unwrap();

        assert!(presenter.written.borrow().is_empty());
    }
}
