//! A single animated channel: one property, one filter.

use crate::dynamics::{SecondOrder, Tuning};
use crate::vec::Vec;

/// One independently filtered animated property (e.g. translation).
///
/// A channel starts without a filter and passes targets straight through
/// until [`start`] seeds one. Disabling a channel also passes targets
/// through, but keeps the filter's state frozen in place rather than
/// advancing it.
///
/// Re-tuning is explicit: [`set_tuning`] only stores the new constants,
/// and the live filter keeps running on the old coefficients until the
/// next [`start`]. Callers that want a re-tune to take effect must
/// restart the channel themselves.
///
/// [`start`]: Channel::start
/// [`set_tuning`]: Channel::set_tuning
#[derive(Clone, Debug)]
pub struct Channel<V: Vec> {
    pub enabled: bool,
    tuning: Tuning<V::Scalar>,
    filter: Option<SecondOrder<V>>,
}

impl<V: Vec> Channel<V> {
    /// Create a channel with no filter yet.
    pub fn new(tuning: Tuning<V::Scalar>, enabled: bool) -> Self {
        Channel { enabled, tuning, filter: None }
    }

    /// (Re)construct the filter from the stored tuning, seeded at `x0`.
    ///
    /// Builds the filter even when the channel is disabled, so enabling
    /// it later resumes from the seed rather than from nothing.
    pub fn start(&mut self, x0: V) {
        self.filter = Some(SecondOrder::new(self.tuning, x0));
    }

    /// Advance the channel by one tick and return the value to apply.
    ///
    /// Disabled or unstarted channels return `target` unchanged without
    /// touching filter state. A frozen tick snaps the filter to `target`
    /// and zeroes its velocity.
    pub fn tick(&mut self, dt: V::Scalar, target: V, frozen: bool) -> V {
        if !self.enabled {
            return target;
        }
        match self.filter.as_mut() {
            Some(filter) if frozen => filter.snap(target),
            Some(filter) => filter.update(dt, target),
            None => target,
        }
    }

    /// Store a new tuning. Takes effect at the next [`start`]; the live
    /// filter keeps its old coefficients until then.
    ///
    /// [`start`]: Channel::start
    pub fn set_tuning(&mut self, tuning: Tuning<V::Scalar>) {
        self.tuning = tuning;
    }

    /// The stored tuning (which the live filter may not yet reflect).
    pub fn tuning(&self) -> Tuning<V::Scalar> {
        self.tuning
    }

    /// The live filter, if the channel has been started.
    pub fn filter(&self) -> Option<&SecondOrder<V>> {
        self.filter.as_ref()
    }

    /// True once [`start`] has seeded a filter.
    ///
    /// [`start`]: Channel::start
    pub fn is_started(&self) -> bool {
        self.filter.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec::Scalar;

    #[test]
    fn unstarted_channel_passes_through() {
        let mut channel: Channel<Scalar<f32>> = Channel::new(Tuning::default(), true);
        let out = channel.tick(1.0 / 60.0, Scalar(7.0), false);
        assert_eq!(out, Scalar(7.0));
        assert!(!channel.is_started());
    }

    #[test]
    fn set_tuning_leaves_live_filter_alone() {
        let mut channel: Channel<Scalar<f32>> = Channel::new(Tuning::new(1.0, 1.0, 0.0), true);
        channel.start(Scalar(0.0));
        channel.set_tuning(Tuning::new(50.0, 1.0, 0.0));
        let live = channel.filter().unwrap().tuning();
        assert_eq!(live.frequency, 1.0);
        assert_eq!(channel.tuning().frequency, 50.0);
    }
}
