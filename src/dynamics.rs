//! Second-order dynamics filter with a stability-safe integration step.

use crate::error::TuningError;
use crate::float::Float;
use crate::vec::Vec;

/// Frequencies below this are clamped up to keep the coefficient math
/// away from division by zero.
const MIN_FREQUENCY: f32 = 1e-4;

/// Tuning constants for a [`SecondOrder`] filter.
///
/// The filter discretizes `k2*y'' + k1*y' + y = x + k3*x'`, but is tuned
/// through three physically meaningful constants instead of the raw ODE
/// coefficients:
///
/// - `frequency` (f, Hz): how fast the filter responds.
/// - `damping` (z): oscillation decay. 0 = undamped, 1 = critical,
///   above 1 = overdamped.
/// - `response` (r): character of the initial reaction. 0 eases in,
///   positive values react immediately, above 1 overshoots, negative
///   values anticipate (wind up backwards first).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tuning<F: Float> {
    pub frequency: F,
    pub damping: F,
    pub response: F,
}

impl<F: Float> Tuning<F> {
    /// Create a tuning without validation. Out-of-range values are
    /// tolerated by the filter (the frequency is clamped at construction).
    pub fn new(frequency: F, damping: F, response: F) -> Self {
        Tuning { frequency, damping, response }
    }

    /// Create a tuning, rejecting values that make no physical sense.
    ///
    /// Intended for values arriving from config files or editor fields.
    pub fn try_new(frequency: F, damping: F, response: F) -> Result<Self, TuningError> {
        if !frequency.is_finite() || frequency <= F::zero() {
            return Err(TuningError::InvalidFrequency);
        }
        if !damping.is_finite() || damping < F::zero() {
            return Err(TuningError::InvalidDamping);
        }
        if !response.is_finite() {
            return Err(TuningError::InvalidResponse);
        }
        Ok(Tuning { frequency, damping, response })
    }
}

impl<F: Float> Default for Tuning<F> {
    fn default() -> Self {
        Tuning {
            frequency: F::one(),
            damping: F::one(),
            response: F::one(),
        }
    }
}

/// A second-order dynamics filter over an n-dimensional signal.
///
/// Tracks a moving target with spring-like motion whose speed, damping,
/// and initial response are set by a [`Tuning`]. State is three vectors:
/// the filtered value, its velocity, and the previous target (for the
/// backward-difference derivative estimate).
///
/// Coefficients are derived once at construction. Changing a tuning after
/// the fact requires rebuilding the filter; a live filter never re-reads
/// its tuning.
#[derive(Copy, Clone, Debug)]
pub struct SecondOrder<V: Vec> {
    prev_target: V,
    value: V,
    velocity: V,
    k1: V::Scalar,
    k2: V::Scalar,
    k3: V::Scalar,
    tuning: Tuning<V::Scalar>,
}

impl<V: Vec> SecondOrder<V> {
    /// Create a filter at rest at `x0`.
    ///
    /// Both the value and the previous target start at `x0` with zero
    /// velocity, so the filter begins with no error relative to its seed.
    pub fn new(tuning: Tuning<V::Scalar>, x0: V) -> Self {
        let f = tuning.frequency.max(V::Scalar::from_f32(MIN_FREQUENCY));
        let z = tuning.damping;
        let r = tuning.response;
        let two_pi_f = V::Scalar::two() * V::Scalar::pi() * f;

        SecondOrder {
            prev_target: x0,
            value: x0,
            velocity: V::zero(),
            k1: z / (V::Scalar::pi() * f),
            k2: V::Scalar::one() / (two_pi_f * two_pi_f),
            k3: r * z / two_pi_f,
            tuning,
        }
    }

    /// Advance the filter by `dt` seconds toward `target`.
    ///
    /// The target's rate of change is estimated by backward difference
    /// from the previous call. A `dt` of zero or less leaves the state
    /// untouched and returns the current value.
    pub fn update(&mut self, dt: V::Scalar, target: V) -> V {
        if dt <= V::Scalar::zero() {
            return self.value;
        }
        let xd = (target - self.prev_target).scale(V::Scalar::one() / dt);
        self.prev_target = target;
        self.step(dt, target, xd)
    }

    /// Advance the filter by `dt` seconds toward `target` whose rate of
    /// change is already known.
    ///
    /// Skips the backward-difference estimate entirely: the stored
    /// previous target is left untouched, so a later [`update`] call
    /// still differentiates against the last implicitly-sampled target.
    ///
    /// [`update`]: SecondOrder::update
    pub fn update_with_velocity(&mut self, dt: V::Scalar, target: V, target_velocity: V) -> V {
        if dt <= V::Scalar::zero() {
            return self.value;
        }
        self.step(dt, target, target_velocity)
    }

    fn step(&mut self, dt: V::Scalar, target: V, xd: V) -> V {
        // Clamp k2 so the semi-implicit Euler step stays stable when dt
        // is large relative to the tuned response time. Without this,
        // frame-rate drops send the integrator into divergent oscillation.
        let quarter = V::Scalar::half() * V::Scalar::half();
        let k2_stable = self.k2.max(
            V::Scalar::from_f32(1.1) * (dt * dt * quarter + dt * self.k1 * V::Scalar::half()),
        );

        self.value = self.value + self.velocity.scale(dt);
        let accel = (target + xd.scale(self.k3) - self.value - self.velocity.scale(self.k1))
            .scale(V::Scalar::one() / k2_stable);
        self.velocity = self.velocity + accel.scale(dt);
        self.value
    }

    /// Bypass the filter: snap the value to `target` and zero the
    /// velocity, discarding all motion.
    ///
    /// Used to freeze an object in lockstep with its target while keeping
    /// the state coherent for resumption. Idempotent.
    pub fn snap(&mut self, target: V) -> V {
        self.velocity = V::zero();
        self.value = target;
        target
    }

    /// The current filtered value.
    pub fn value(&self) -> V {
        self.value
    }

    /// The current filtered value's rate of change.
    pub fn velocity(&self) -> V {
        self.velocity
    }

    /// The tuning this filter was built from.
    pub fn tuning(&self) -> Tuning<V::Scalar> {
        self.tuning
    }
}
