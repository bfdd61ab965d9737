use log::info;
use std::time::Duration;

use crate::core::kernels::sqrt::input_pattern::InputPattern;
use crate::core::kernels::sqrt::serial::sqrt_serial;
use crate::core::kernels::sqrt::tasks::sqrt_vectorized_tasks;
use crate::core::kernels::sqrt::vectorized::sqrt_vectorized;
use crate::core::kernels::sqrt::verify::{verify_results, Deviation};
use crate::core::util::min_time::{min_time, speedup};

pub type SqrtKernel = fn(f32, &[f32], &mut [f32]);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SqrtBenchConfig {
    pub count: usize,
    pub initial_guess: f32,
    pub pattern: InputPattern,
    pub seed: u64,
    pub serial_trials: u32,
    pub vectorized_trials: u32,
    pub task_trials: u32,
}

impl Default for SqrtBenchConfig {
    fn default() -> Self {
        Self {
            count: 20_000_000,
            initial_guess: 1.0,
            pattern: InputPattern::default(),
            seed: 0,
            serial_trials: 5,
            vectorized_trials: 5,
            task_trials: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct KernelResult {
    pub name: &'static str,
    pub min_time: Duration,
    pub deviations: Vec<Deviation>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SqrtBenchReport {
    pub serial: KernelResult,
    pub vectorized: KernelResult,
    pub tasks: KernelResult,
}

impl SqrtBenchReport {
    #[must_use]
    pub fn vectorized_speedup(&self) -> f64 {
        speedup(self.serial.min_time, self.vectorized.min_time)
    }

    #[must_use]
    pub fn tasks_speedup(&self) -> f64 {
        speedup(self.serial.min_time, self.tasks.min_time)
    }

    #[must_use]
    pub fn all_verified(&self) -> bool {
        [&self.serial, &self.vectorized, &self.tasks]
            .iter()
            .all(|kernel| kernel.deviations.is_empty())
    }
}

fn bench_kernel(
    name: &'static str,
    kernel: SqrtKernel,
    trials: u32,
    config: &SqrtBenchConfig,
    inputs: &[f32],
    gold: &[f32],
) -> KernelResult {
    let mut outputs = vec![0.0f32; inputs.len()];
    let (fastest, ()) = min_time(trials, || kernel(config.initial_guess, inputs, &mut outputs));
    let deviations = verify_results(&outputs, gold);

    info!(
        "[{}]: [{:.3}] ms, {} deviations",
        name,
        fastest.as_secs_f64() * 1000.0,
        deviations.len()
    );

    KernelResult {
        name,
        min_time: fastest,
        deviations,
    }
}

/// Times the three square-root kernels on the same inputs, checking each
/// against `f32::sqrt`. Deviations are collected, never fatal.
#[must_use]
pub fn run_sqrt_benchmark(config: &SqrtBenchConfig) -> SqrtBenchReport {
    let inputs = config.pattern.generate(config.count, config.seed);
    let gold: Vec<f32> = inputs.iter().map(|x| x.sqrt()).collect();

    info!("{} {} inputs", config.count, config.pattern);

    SqrtBenchReport {
        serial: bench_kernel(
            "sqrt serial",
            sqrt_serial,
            config.serial_trials,
            config,
            &inputs,
            &gold,
        ),
        vectorized: bench_kernel(
            "sqrt vectorized",
            sqrt_vectorized,
            config.vectorized_trials,
            config,
            &inputs,
            &gold,
        ),
        tasks: bench_kernel(
            "sqrt vectorized tasks",
            sqrt_vectorized_tasks,
            config.task_trials,
            config,
            &inputs,
            &gold,
        ),
    }
}
