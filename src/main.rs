use clap::Parser;
use std::error::Error;
use std::fs;
use std::num::NonZeroU32;
use std::path::PathBuf;
use std::process::ExitCode;

use mandelbrot_threads::{
    MandelbrotBenchConfig, MandelbrotBenchController, MandelbrotView, PpmFilePresenter,
    RemainderPolicy, RenderOptions, ThreadLimit,
};

/// Renders the Mandelbrot set serially and on N threads, then compares the two.
#[derive(Debug, Parser)]
#[command(name = "mandelbrot")]
struct Cli {
    #[arg(long, short = 't', default_value_t = 2)]
    threads: u32,

    /// 1 for the full set, 2 for the zoomed detail
    #[arg(long, short = 'v', default_value_t = MandelbrotView::Full)]
    view: MandelbrotView,

    #[arg(long, default_value_t = 1600)]
    width: u32,

    #[arg(long, default_value_t = 1200)]
    height: u32,

    #[arg(long, default_value_t = 256)]
    max_iterations: u32,

    #[arg(long, default_value = "32")]
    max_threads: NonZeroU32,

    /// where leftover rows go when the height does not divide evenly
    #[arg(long, default_value_t = RemainderPolicy::WidenLast)]
    remainder: RemainderPolicy,

    #[arg(long, default_value_t = 5)]
    trials: u32,

    /// write straight into the shared image instead of per-thread buffers
    #[arg(long)]
    in_place: bool,

    #[arg(long, default_value = ".")]
    output_dir: PathBuf,
}

impl Cli {
    fn config(&self) -> MandelbrotBenchConfig {
        MandelbrotBenchConfig {
            width: self.width,
            height: self.height,
            max_iterations: self.max_iterations,
            view: self.view,
            options: RenderOptions::with_threads(self.threads)
                .thread_limit(ThreadLimit::new(self.max_threads))
                .remainder_policy(self.remainder),
            trials: self.trials,
            in_place: self.in_place,
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode, Box<dyn Error>> {
    let config = cli.config();
    let mut controller = MandelbrotBenchController::new(PpmFilePresenter::new());

    let report = controller.run(&config)?;

    println!(
        "[mandelbrot serial]:\t\t[{:.3}] ms",
        report.serial_time.as_secs_f64() * 1000.0
    );
    println!(
        "[mandelbrot thread]:\t\t[{:.3}] ms",
        report.parallel_time.as_secs_f64() * 1000.0
    );

    fs::create_dir_all(&cli.output_dir)?;
    controller.write(&cli.output_dir)?;

    if let Some(mismatch) = report.mismatch {
        eprintln!("Mismatch : {}", mismatch);
        eprintln!("Error : Output from threads does not match serial output");
        return Ok(ExitCode::FAILURE);
    }

    println!(
        "\t\t\t\t({:.2}x speedup from {} threads)",
        report.speedup(),
        report.render.num_threads()
    );

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
