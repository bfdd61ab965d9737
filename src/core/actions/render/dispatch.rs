use log::trace;
use std::panic;
use std::thread;

use crate::core::actions::render::ports::timing_sink::WorkerTiming;

/// Runs every task to completion, one per thread.
///
/// `tasks[0]` runs on the calling thread; the rest get scoped threads. Returns
/// once all of them have joined, with timings in task order. A panic in any
/// worker is resumed on the caller after the join.
pub(crate) fn dispatch<T, F>(tasks: &mut [T], run: &F) -> Vec<WorkerTiming>
where
    T: Send,
    F: Fn(&mut T) -> WorkerTiming + Sync,
{
    thread::scope(|scope| {
        let Some((inline_task, spawned_tasks)) = tasks.split_first_mut() else {
            return Vec::new();
        };

        let handles: Vec<_> = spawned_tasks
            .iter_mut()
            .map(|task| scope.spawn(move || run(task)))
            .collect();

        trace!("spawned {} workers, running worker 0 inline", handles.len());

        let mut timings = Vec::with_capacity(handles.len() + 1);
        timings.push(run(inline_task));

        for handle in handles {
            match handle.join() {
                Ok(timing) => timings.push(timing),
                Err(payload) => panic::resume_unwind(payload),
            }
        }

        timings
    })
}
