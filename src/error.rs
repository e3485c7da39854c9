/// Crate-level error type.
///
/// These are integration errors at the boundary of the crate. A quiet or
/// aperiodic window is not an error; it yields
/// [DetectionResult::NoPitch](crate::detector::DetectionResult::NoPitch).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Sample rate must be strictly positive.
    #[error("invalid sample rate: {0} (must be greater than zero)")]
    InvalidSampleRate(usize),

    /// The signal contains a NaN or infinite sample.
    #[error("signal contains a non-finite sample at index {index}")]
    NonFiniteSample { index: usize },

    /// Note naming needs a finite, strictly positive frequency.
    #[error("invalid frequency: {0} Hz (must be finite and greater than zero)")]
    InvalidFrequency(f64),

    /// Invalid configuration value.
    #[error("invalid parameter `{name}`: got {value}, {reason}")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: &'static str,
    },

    /// Text that does not spell a note, e.g. `"H4"` or `"C#"`.
    #[error("invalid note name: {0:?}")]
    InvalidNoteName(String),
}

/// Convenience Result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
