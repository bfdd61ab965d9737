use clap::Parser;

use mandelbrot_threads::{run_sqrt_benchmark, InputPattern, SqrtBenchConfig};

/// Times the serial, vectorized and task-parallel square-root kernels.
#[derive(Debug, Parser)]
#[command(name = "sqrt_bench")]
struct Cli {
    #[arg(long, short = 'n', default_value_t = 20_000_000)]
    count: usize,

    #[arg(long, short = 'p', default_value_t = InputPattern::Random)]
    pattern: InputPattern,

    #[arg(long, default_value_t = 0)]
    seed: u64,
}

impl Cli {
    fn config(&self) -> SqrtBenchConfig {
        SqrtBenchConfig {
            count: self.count,
            pattern: self.pattern,
            seed: self.seed,
            ..SqrtBenchConfig::default()
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Cli::parse().config();
    let report = run_sqrt_benchmark(&config);

    for kernel in [&report.serial, &report.vectorized, &report.tasks] {
        println!("[{}]:\t\t[{:.3}] ms", kernel.name, kernel.min_time.as_secs_f64() * 1000.0);
    }

    println!(
        "\t\t\t\t({:.2}x speedup from vectorization)",
        report.vectorized_speedup()
    );
    println!(
        "\t\t\t\t({:.2}x speedup from vectorization + tasks)",
        report.tasks_speedup()
    );

    if !report.all_verified() {
        for kernel in [&report.serial, &report.vectorized, &report.tasks] {
            if let Some(first) = kernel.deviations.first() {
                println!(
                    "{}: {} mismatches, first at [{}] got {} expected {}",
                    kernel.name,
                    kernel.deviations.len(),
                    first.index,
                    first.actual,
                    first.expected
                );
            }
        }
    }
}
