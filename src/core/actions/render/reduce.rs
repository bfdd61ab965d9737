use crate::core::actions::render::worker_task::WorkerTask;
use crate::core::data::iteration_buffer::{IterationBuffer, IterationBufferError};

/// Copies each task's own rows from its private buffer into `output`.
///
/// The rows come from the task itself, never from a recomputed stride, so
/// uneven strips land where they were computed.
pub fn reduce(
    tasks: &[WorkerTask],
    output: &mut IterationBuffer,
) -> Result<(), IterationBufferError> {
    for task in tasks {
        output.copy_rows_from(task.buffer(), task.rows())?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::render::ports::row_computer::RowComputer;
    use crate::core::actions::render::ports::timing_sink::DiscardTimings;
    use crate::core::data::complex_rect::ComplexRect;
    use crate::core::data::region::Region;
    use crate::core::data::row_range::RowRange;
    use crate::core::fractals::mandelbrot::params::MandelbrotParams;

    struct ThreadMarkComputer {
        mark: u32,
    }

    impl RowComputer for ThreadMarkComputer {
        fn compute_strip(&self, _: &Region, _: u32, _: RowRange, strip: &mut [u32]) {
            strip.fill(self.mark);
        }
    }

    fn params(width: u32, height: u32) -> MandelbrotParams {
        let window = ComplexRect::from_bounds(-2.0, -1.0, 1.0, 1.0).unwrap();
        MandelbrotParams::new(Region::new(window, width, height).unwrap(), 10).unwrap()
    }

    #[test]
    fn test_reduce_places_uneven_strips_at_their_offsets() {
        let params = params(2, 10);
        let ranges = [RowRange::new(0, 3), RowRange::new(3, 3), RowRange::new(6, 4)];
        let mut tasks: Vec<WorkerTask> = ranges
            .iter()
            .enumerate()
            .map(|(i, &rows)| WorkerTask::new(i as u32, rows, 2, 10))
            .collect();

        for task in &mut tasks {
            let computer = ThreadMarkComputer { mark: task.thread_id() + 1 };
            task.run(&computer, &params, &DiscardTimings);
        }

        let mut output = IterationBuffer::new(2, 10);
        reduce(&tasks, &mut output).unwrap();

        let expected: Vec<u32> = [1, 1, 1, 2, 2, 2, 3, 3, 3, 3]
            .iter()
            .flat_map(|&mark| [mark, mark])
            .collect();
        assert_eq!(output.data(), expected.as_slice());
    }

    #[test]
    fn test_reduce_ignores_rows_outside_each_task() {
        let mut task = WorkerTask::new(0, RowRange::new(1, 1), 2, 3);
        task.run(&ThreadMarkComputer { mark: 5 }, &params(2, 3), &DiscardTimings);

        let mut output = IterationBuffer::from_data(2, 3, vec![9; 6]).unwrap();
        reduce(&[task], &mut output).unwrap();

        assert_eq!(output.data(), &[9, 9, 5, 5, 9, 9]);
    }

    #[test]
    fn test_reduce_rejects_mismatched_output() {
        let task = WorkerTask::new(0, RowRange::new(0, 2), 2, 2);
        let mut output = IterationBuffer::new(3, 2);

        assert!(reduce(&[task], &mut output).is_err());
    }
}
