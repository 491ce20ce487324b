//! Step-response sampling for plotting a tuning's transient behavior.

use crate::dynamics::{SecondOrder, Tuning};
use crate::float::Float;
use crate::vec::Vec2;

/// Total updates driven through the throwaway filter per evaluation.
const SAMPLE_COUNT: usize = 300;
/// The input axis runs from -HALF_WINDOW to +HALF_WINDOW; the unit step
/// lands at zero, the window's midpoint.
const HALF_WINDOW: f32 = 2.0;
/// Fixed per-sample timestep (roughly 60 Hz).
const SAMPLE_DT: f32 = 0.016;

/// Sample the step response of a tuning for plotting.
///
/// Returns a finite iterator of `(time, value)` pairs tracing how a
/// filter with this tuning reacts to a unit step. Each call builds a
/// throwaway filter, so sampling never touches any live filter's state
/// and calling again restarts from the beginning; the iterator is also
/// `Clone` for mid-curve restarts.
///
/// The input window is symmetric around the step and both axes pass
/// through the filter (a 2D signal of `(time, step)`), so the plotted
/// time axis carries the same lag as the value axis. Only samples after
/// the step are yielded.
pub fn step_response<F: Float>(tuning: Tuning<F>) -> StepResponse<F> {
    let seed = Vec2::new(F::from_f32(-HALF_WINDOW), F::zero());
    StepResponse {
        filter: SecondOrder::new(tuning, seed),
        index: 0,
    }
}

/// Iterator over `(time, value)` samples of a step response.
///
/// Created by [`step_response`].
#[derive(Clone, Debug)]
pub struct StepResponse<F: Float> {
    filter: SecondOrder<Vec2<F>>,
    index: usize,
}

impl<F: Float> Iterator for StepResponse<F> {
    type Item = (F, F);

    fn next(&mut self) -> Option<(F, F)> {
        while self.index < SAMPLE_COUNT {
            let t = F::from_f32(self.index as f32 / (SAMPLE_COUNT - 1) as f32);
            let x_in = F::from_f32(-HALF_WINDOW).lerp(F::from_f32(HALF_WINDOW), t);
            let step = if x_in > F::zero() { F::one() } else { F::zero() };
            self.index += 1;

            let out = self.filter.update(F::from_f32(SAMPLE_DT), Vec2::new(x_in, step));

            // Pre-step samples only warm the filter up; they are not
            // part of the plotted curve.
            if x_in > F::zero() {
                return Some((out.x, out.y));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(SAMPLE_COUNT - self.index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yields_post_step_half_of_the_window() {
        let n = step_response::<f32>(Tuning::new(1.0, 1.0, 0.0)).count();
        assert_eq!(n, SAMPLE_COUNT / 2);
    }
}
