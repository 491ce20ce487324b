//! Error types for tuning validation.

use core::fmt;

/// Errors from validating externally-supplied tuning constants.
///
/// The filter itself never fails; it clamps its way around bad input.
/// This type exists for the boundary where tunings arrive from config
/// files or editor fields and rejection is more useful than clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuningError {
    /// Frequency must be finite and positive.
    InvalidFrequency,
    /// Damping ratio must be finite and non-negative.
    InvalidDamping,
    /// Response coefficient must be finite.
    InvalidResponse,
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::InvalidFrequency => write!(f, "frequency must be finite and positive"),
            TuningError::InvalidDamping => write!(f, "damping ratio must be finite and non-negative"),
            TuningError::InvalidResponse => write!(f, "response coefficient must be finite"),
        }
    }
}
