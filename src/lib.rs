//! Second-order dynamics smoothing for procedural animation.
//!
//! `settle` drives an object's position, rotation, and scale toward a
//! moving target, frame by frame, using a critically-tunable second-order
//! low-pass filter. The filter is tuned through three physically
//! meaningful constants (frequency, damping, initial response) instead of
//! raw spring-damper coefficients, and its integration step carries a
//! stability clamp so frame-rate drops never send it divergent.
//!
//! # Features
//!
//! - **Tunable by feel**: `f` sets speed, `z` sets damping, `r` sets the
//!   initial-response character
//! - **Stable under variable timesteps**: a stability-safe clamp keeps
//!   the semi-implicit Euler step bounded for large `dt`
//! - **Per-channel drivers**: position, rotation, and scale filtered
//!   independently, each individually enabled
//! - **Freeze and resume**: snap to the target with zeroed velocity, then
//!   resume smoothly
//! - **Step-response sampling**: pure `(time, value)` curves for plotting
//!   a tuning before committing to it
//! - **`no_std` compatible**: works in embedded and WASM environments
//!
//! # Rotation caveat
//!
//! Rotation is filtered as a flat four-component vector of quaternion
//! parts. The filter knows nothing about unit norms and never
//! renormalizes, so mid-transition rotations are generally not unit
//! quaternions. Normalize on the consuming side if your math requires it.

#![no_std]

pub mod float;
pub mod vec;
pub mod dynamics;
pub mod channel;
pub mod driver;
pub mod config;
pub mod response;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::{Vec, Scalar, Vec2, Vec3, Vec4};
pub use dynamics::{SecondOrder, Tuning};
pub use channel::Channel;
pub use driver::{Transform, TransformDriver};
pub use config::{ChannelConfig, DriverConfig};
pub use response::{step_response, StepResponse};
pub use error::TuningError;
