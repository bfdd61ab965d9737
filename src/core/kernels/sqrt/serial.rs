pub const CONVERGENCE_THRESHOLD: f32 = 0.00001;

// inputs in (0, 3) converge from a guess of 1 long before this; inputs
// outside that range may not converge at all
pub const MAX_NEWTON_STEPS: u32 = 1024;

#[inline]
pub(crate) fn newton_step(x: f32, guess: f32) -> f32 {
    (3.0 * guess - x * guess * guess * guess) * 0.5
}

#[inline]
pub(crate) fn inverse_sqrt_error(x: f32, guess: f32) -> f32 {
    (guess * guess * x - 1.0).abs()
}

/// `sqrt(x)` via Newton's method on `1 / sqrt(x)`, starting from
/// `initial_guess`.
#[inline]
#[must_use]
pub fn sqrt_newton(x: f32, initial_guess: f32) -> f32 {
    let mut guess = initial_guess;
    let mut error = inverse_sqrt_error(x, guess);
    let mut steps = 0;

    while error > CONVERGENCE_THRESHOLD && steps < MAX_NEWTON_STEPS {
        guess = newton_step(x, guess);
        error = inverse_sqrt_error(x, guess);
        steps += 1;
    }

    x * guess
}

/// Reference kernel: one element at a time.
///
/// # Panics
///
/// If `inputs` and `outputs` differ in length.
pub fn sqrt_serial(initial_guess: f32, inputs: &[f32], outputs: &mut [f32]) {
    assert_eq!(inputs.len(), outputs.len(), "input and output lengths differ");

    for (&x, output) in inputs.iter().zip(outputs.iter_mut()) {
        *output = sqrt_newton(x, initial_guess);
    }
}
