use log::debug;
use std::time::Instant;

use crate::core::actions::render::dispatch::dispatch;
use crate::core::actions::render::errors::RenderError;
use crate::core::actions::render::ports::row_computer::RowComputer;
use crate::core::actions::render::ports::timing_sink::TimingSink;
use crate::core::actions::render::render_options::RenderOptions;
use crate::core::actions::render::render_report::RenderReport;
use crate::core::actions::render::render_stage::RenderStage;
use crate::core::actions::render::worker_task::StripTask;
use crate::core::data::iteration_buffer::IterationBuffer;
use crate::core::fractals::mandelbrot::params::MandelbrotParams;
use crate::core::util::partition_rows::partition_rows;

/// Like [`render_parallel`](super::render_parallel::render_parallel), but
/// each worker writes into a disjoint view of `output` instead of a private
/// buffer, so there is nothing to copy after the join.
pub fn render_parallel_in_place<C, S>(
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
    let mut tasks: Vec<StripTask> = output
        .split_rows_mut(&ranges)?
        .into_iter()
        .zip(ranges.iter())
        .enumerate()
        .map(|(thread_id, (strip, &rows))| StripTask::new(thread_id as u32, rows, strip))
        .collect();
    let stage = stage.advance();

    debug!(
        "rendering {}x{} in place on {} threads: {:?}",
        region.width(),
        region.height(),
        num_threads,
        ranges
    );

    let stage = stage.advance();
    let timings = dispatch(&mut tasks, &|task: &mut StripTask| task.run(computer, params, sink));
    let stage = stage.advance();

    // strips were written in place; nothing to reduce
    let stage = stage.advance();

    let report = RenderReport {
        ranges,
        timings,
        elapsed: start.elapsed(),
    };

    debug!("in-place render {} after {:?}", stage.advance(), report.elapsed);
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::render::ports::timing_sink::{CollectTimings, DiscardTimings};
    use crate::core::actions::render::render_parallel::render_parallel;
    use crate::core::actions::render::render_serial::render_serial;
    use crate::core::data::complex_rect::ComplexRect;
    use crate::core::data::region::Region;
    use crate::core::fractals::mandelbrot::algorithm::EscapeTimeRowComputer;
    use crate::core::util::partition_rows::RemainderPolicy;
    use crate::core::util::thread_limit::ThreadCountError;

    fn params(width: u32, height: u32) -> MandelbrotParams {
        let window = ComplexRect::from_bounds(-2.0, -1.0, 1.0, 1.0).unwrap();
        MandelbrotParams::new(Region::new(window, width, height).unwrap(), 100).unwrap()
    }

    #[test]
    fn test_in_place_matches_serial_and_private_buffers() {
        let params = params(37, 29);
        let mut expected = IterationBuffer::new(37, 29);
        render_serial(&params, &EscapeTimeRowComputer, &mut expected).unwrap();

        for policy in RemainderPolicy::ALL {
            for num_threads in 1..=32 {
                let options = RenderOptions::with_threads(num_threads).remainder_policy(*policy);
                let mut in_place = IterationBuffer::new(37, 29);
                let mut private = IterationBuffer::new(37, 29);

                render_parallel_in_place(
                    &options,
                    &params,
                    &EscapeTimeRowComputer,
                    &DiscardTimings,
                    &mut in_place,
                )
                .unwrap();
                render_parallel(
                    &options,
                    &params,
                    &EscapeTimeRowComputer,
                    &DiscardTimings,
                    &mut private,
                )
                .unwrap();

                assert_eq!(in_place, expected, "{} threads ({})", num_threads, policy);
                assert_eq!(in_place, private);
            }
        }
    }

    #[test]
    fn test_in_place_rejects_too_many_threads() {
        let params = params(8, 8);
        let mut output = IterationBuffer::new(8, 8);

        let result = render_parallel_in_place(
            &RenderOptions::with_threads(33),
            &params,
            &EscapeTimeRowComputer,
            &DiscardTimings,
            &mut output,
        );

        assert!(matches!(
            result,
            Err(RenderError::ThreadCount(ThreadCountError::ExceedsMax { .. }))
        ));
        assert!(output.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_in_place_reports_every_worker() {
        let params = params(8, 8);
        let sink = CollectTimings::new();
        let mut output = IterationBuffer::new(8, 8);

        let options = RenderOptions::with_threads(3);
        let report =
            render_parallel_in_place(&options, &params, &EscapeTimeRowComputer, &sink, &mut output)
                .unwrap();

        assert_eq!(report.num_threads(), 3);
        assert_eq!(sink.sorted().len(), 3);
    }

    #[test]
    fn test_in_place_records_each_worker_once() {
        let params = params(8, 8);
        let sink = CollectTimings::new();
        let mut output = IterationBuffer::new(8, 8);
        let options = RenderOptions::with_threads(4);

        let report =
            render_parallel_in_place(&options, &params, &EscapeTimeRowComputer, &sink, &mut output)
                .unwrap();

        let mut timings = report.timings.clone();
        timings.sort_by_key(|timing| timing.thread_id);
        assert_eq!(sink.sorted(), timings);
        assert!(report.slowest().is_some_and(|slowest| slowest.elapsed <= report.elapsed));
    }
}
