use rayon::prelude::*;

use crate::core::kernels::sqrt::vectorized::sqrt_vectorized;

pub const TASK_COUNT: usize = 64;

/// Splits the input into [`TASK_COUNT`] contiguous pieces and runs
/// [`sqrt_vectorized`] on each as a rayon task.
///
/// # Panics
///
/// If `inputs` and `outputs` differ in length.
pub fn sqrt_vectorized_tasks(initial_guess: f32, inputs: &[f32], outputs: &mut [f32]) {
    assert_eq!(inputs.len(), outputs.len(), "input and output lengths differ");

    let task_len = inputs.len().div_ceil(TASK_COUNT).max(1);

    inputs
        .par_chunks(task_len)
        .zip(outputs.par_chunks_mut(task_len))
        .for_each(|(task_inputs, task_outputs)| {
            sqrt_vectorized(initial_guess, task_inputs, task_outputs)
        });
}
