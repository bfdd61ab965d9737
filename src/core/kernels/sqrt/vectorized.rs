use crate::core::kernels::sqrt::serial::{
    inverse_sqrt_error, newton_step, sqrt_serial, CONVERGENCE_THRESHOLD, MAX_NEWTON_STEPS,
};

pub const LANES: usize = 8;

/// One gang of lanes, iterated until every lane has converged. Converged
/// lanes keep their value while the rest carry on.
#[inline]
fn sqrt_lanes(initial_guess: f32, x: &[f32; LANES], out: &mut [f32; LANES]) {
    let mut guess = [initial_guess; LANES];
    let mut error = [0.0f32; LANES];

    for lane in 0..LANES {
        error[lane] = inverse_sqrt_error(x[lane], guess[lane]);
    }

    let mut steps = 0;

    while steps < MAX_NEWTON_STEPS && error.iter().any(|&e| e > CONVERGENCE_THRESHOLD) {
        for lane in 0..LANES {
            let active = error[lane] > CONVERGENCE_THRESHOLD;
            let next = newton_step(x[lane], guess[lane]);

            guess[lane] = if active { next } else { guess[lane] };
            error[lane] = if active {
                inverse_sqrt_error(x[lane], next)
            } else {
                error[lane]
            };
        }
        steps += 1;
    }

    for lane in 0..LANES {
        out[lane] = x[lane] * guess[lane];
    }
}

/// Same arithmetic as [`sqrt_serial`], `LANES` elements at a time.
///
/// # Panics
///
/// If `inputs` and `outputs` differ in length.
pub fn sqrt_vectorized(initial_guess: f32, inputs: &[f32], outputs: &mut [f32]) {
    assert_eq!(inputs.len(), outputs.len(), "input and output lengths differ");

    let input_gangs = inputs.chunks_exact(LANES);
    let input_tail = input_gangs.remainder();
    let mut output_gangs = outputs.chunks_exact_mut(LANES);

    for (x, out) in input_gangs.zip(output_gangs.by_ref()) {
        let mut x_lanes = [0.0f32; LANES];
        let mut out_lanes = [0.0f32; LANES];

        x_lanes.copy_from_slice(x);
        sqrt_lanes(initial_guess, &x_lanes, &mut out_lanes);
        out.copy_from_slice(&out_lanes);
    }

    sqrt_serial(initial_guess, input_tail, output_gangs.into_remainder());
}
