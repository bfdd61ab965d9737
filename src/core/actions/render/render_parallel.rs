use log::debug;
use std::time::Instant;

use crate::core::actions::render::dispatch::dispatch;
use crate::core::actions::render::errors::RenderError;
use crate::core::actions::render::ports::row_computer::RowComputer;
use crate::core::actions::render::ports::timing_sink::TimingSink;
use crate::core::actions::render::reduce::reduce;
use crate::core::actions::render::render_options::RenderOptions;
use crate::core::actions::render::render_report::RenderReport;
use crate::core::actions::render::render_stage::RenderStage;
use crate::core::actions::render::worker_task::WorkerTask;
use crate::core::data::iteration_buffer::IterationBuffer;
use crate::core::fractals::mandelbrot::params::MandelbrotParams;
use crate::core::util::partition_rows::partition_rows;

/// Renders across `options.num_threads` statically partitioned strips.
///
/// Each worker computes into a private buffer; once every worker has joined
/// the strips are copied into `output`. The calling thread is worker 0. The
/// thread count and output size are checked before any buffer is allocated
/// or thread spawned.
pub fn render_parallel<C, S>(
    options: &RenderOptions,
    params: &MandelbrotParams,
    computer: &C,
    sink: &S,
    output: &mut IterationBuffer,
) -> Result<RenderReport, RenderError>
where
    C: RowComputer + Sync + ?Sized,
    S: TimingSink + ?Sized,
{
    let start = Instant::now();
    let stage = RenderStage::Configured;
    let num_threads = options.thread_limit.check(options.num_threads)?;
    let region = params.region();
    output.ensure_dimensions(region.width(), region.height())?;

    let ranges = partition_rows(region.height(), num_threads, options.remainder_policy);
    let mut tasks: Vec<WorkerTask> = ranges
        .iter()
        .enumerate()
        .map(|(thread_id, &rows)| {
            WorkerTask::new(thread_id as u32, rows, region.width(), region.height())
        })
        .collect();
    let stage = stage.advance();

    debug!(
        "rendering {}x{} on {} threads: {:?}",
        region.width(),
        region.height(),
        num_threads,
        ranges
    );

    let stage = stage.advance();
    let timings = dispatch(&mut tasks, &|task: &mut WorkerTask| task.run(computer, params, sink));
    let stage = stage.advance();

    reduce(&tasks, output)?;
    let stage = stage.advance();

    let report = RenderReport {
        ranges,
        timings,
        elapsed: start.elapsed(),
    };

    debug!("render {} after {:?}", stage.advance(), report.elapsed);
    Ok(report)
}
