use std::time::Instant;

use crate::core::actions::render::ports::row_computer::RowComputer;
use crate::core::actions::render::ports::timing_sink::{TimingSink, WorkerTiming};
use crate::core::data::iteration_buffer::IterationBuffer;
use crate::core::data::row_range::RowRange;
use crate::core::fractals::mandelbrot::params::MandelbrotParams;

fn timed<S: TimingSink + ?Sized>(thread_id: u32, sink: &S, work: impl FnOnce()) -> WorkerTiming {
    let start = Instant::now();
    work();
    let timing = WorkerTiming {
        thread_id,
        elapsed: start.elapsed(),
    };

    sink.record(timing);
    timing
}

/// One worker's share of a render: a row range and a private full-size
/// buffer that only that range is ever written into.
#[derive(Debug)]
pub struct WorkerTask {
    thread_id: u32,
    rows: RowRange,
    buffer: IterationBuffer,
}

impl WorkerTask {
    #[must_use]
    pub fn new(thread_id: u32, rows: RowRange, width: u32, height: u32) -> Self {
        Self {
            thread_id,
            rows,
            buffer: IterationBuffer::new(width, height),
        }
    }

    #[must_use]
    pub fn thread_id(&self) -> u32 {
        self.thread_id
    }

    #[must_use]
    pub fn rows(&self) -> RowRange {
        self.rows
    }

    #[must_use]
    pub fn buffer(&self) -> &IterationBuffer {
        &self.buffer
    }

    pub fn run<C, S>(&mut self, computer: &C, params: &MandelbrotParams, sink: &S) -> WorkerTiming
    where
        C: RowComputer + ?Sized,
        S: TimingSink + ?Sized,
    {
        let rows = self.rows;
        let buffer = self.buffer.data_mut();

        timed(self.thread_id, sink, || {
            computer.compute_rows(params.region(), params.max_iterations(), rows, buffer)
        })
    }
}

/// A worker that writes straight into its own slice of the output image.
#[derive(Debug)]
pub struct StripTask<'a> {
    thread_id: u32,
    rows: RowRange,
    strip: &'a mut [u32],
}

impl<'a> StripTask<'a> {
    #[must_use]
    pub fn new(thread_id: u32, rows: RowRange, strip: &'a mut [u32]) -> Self {
        Self {
            thread_id,
            rows,
            strip,
        }
    }

    #[must_use]
    pub fn rows(&self) -> RowRange {
        self.rows
    }

    pub fn run<C, S>(&mut self, computer: &C, params: &MandelbrotParams, sink: &S) -> WorkerTiming
    where
        C: RowComputer + ?Sized,
        S: TimingSink + ?Sized,
    {
        let rows = self.rows;
        let strip = &mut *self.strip;

        timed(self.thread_id, sink, || {
            computer.compute_strip(params.region(), params.max_iterations(), rows, strip)
        })
    }
}
