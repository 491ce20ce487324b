//! Configuration for a transform driver's channels.

use crate::dynamics::Tuning;
use crate::float::Float;

/// Configuration for one channel: whether it filters, and with what tuning.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ChannelConfig<F: Float> {
    /// When false the channel copies the target through unfiltered.
    pub enabled: bool,
    /// Tuning constants used when the channel's filter is (re)built.
    pub tuning: Tuning<F>,
}

impl<F: Float> ChannelConfig<F> {
    /// A channel that filters its target with the given tuning.
    pub fn filtered(tuning: Tuning<F>) -> Self {
        ChannelConfig { enabled: true, tuning }
    }

    /// A channel that copies its target through unchanged.
    pub fn passthrough() -> Self {
        ChannelConfig { enabled: false, tuning: Tuning::default() }
    }
}

/// Configuration for a [`TransformDriver`].
///
/// # Builder Pattern
/// ```
/// use settle::config::DriverConfig;
/// use settle::dynamics::Tuning;
///
/// let config: DriverConfig<f32> = DriverConfig::new()
///     .with_position(Tuning::new(2.0, 1.0, 0.0))
///     .with_rotation(Tuning::new(3.0, 0.7, 0.0));
/// ```
///
/// The default filters position with the default tuning and passes
/// rotation and scale through.
///
/// [`TransformDriver`]: crate::driver::TransformDriver
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DriverConfig<F: Float> {
    pub position: ChannelConfig<F>,
    pub rotation: ChannelConfig<F>,
    pub scale: ChannelConfig<F>,
}

impl<F: Float> DriverConfig<F> {
    /// Create a config with default values.
    pub fn new() -> Self {
        DriverConfig {
            position: ChannelConfig::filtered(Tuning::default()),
            rotation: ChannelConfig::passthrough(),
            scale: ChannelConfig::passthrough(),
        }
    }

    /// Enable position filtering with the given tuning.
    pub fn with_position(mut self, tuning: Tuning<F>) -> Self {
        self.position = ChannelConfig::filtered(tuning);
        self
    }

    /// Enable rotation filtering with the given tuning.
    pub fn with_rotation(mut self, tuning: Tuning<F>) -> Self {
        self.rotation = ChannelConfig::filtered(tuning);
        self
    }

    /// Enable scale filtering with the given tuning.
    pub fn with_scale(mut self, tuning: Tuning<F>) -> Self {
        self.scale = ChannelConfig::filtered(tuning);
        self
    }

    /// Pass position through unfiltered.
    pub fn without_position(mut self) -> Self {
        self.position = ChannelConfig::passthrough();
        self
    }
}

impl<F: Float> Default for DriverConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
