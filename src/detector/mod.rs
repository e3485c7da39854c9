use crate::detector::autocorrelation::AutocorrelationDetector;
use crate::error::Result;
use crate::float::Float;
use crate::note::NoteName;

pub mod autocorrelation;
pub mod internals;

/// Outcome of one detection cycle.
///
/// `NoPitch` is the steady state during silence or noise and is not an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DetectionResult<T>
where
    T: Float,
{
    NoPitch,
    /// Estimated fundamental frequency in Hz. Always finite and positive.
    Pitch(T),
}

impl<T> DetectionResult<T>
where
    T: Float,
{
    pub fn frequency(&self) -> Option<T> {
        match *self {
            DetectionResult::Pitch(frequency) => Some(frequency),
            DetectionResult::NoPitch => None,
        }
    }

    pub fn is_pitch(&self) -> bool {
        matches!(self, DetectionResult::Pitch(_))
    }

    /// Name of the nearest equal-tempered note, if a pitch was detected.
    ///
    /// Detectors only report finite, positive frequencies. A hand-built
    /// `Pitch` holding anything else has no name and returns `None`; use
    /// [NoteName::from_frequency] to see the error.
    pub fn note_name(&self) -> Option<NoteName> {
        self.frequency()
            .and_then(|frequency| NoteName::from_frequency(frequency).ok())
    }
}

pub trait PitchDetector<T>
where
    T: Float,
{
    /// Estimate the fundamental frequency of `signal`, sampled at `sample_rate` Hz.
    ///
    /// `sample_rate` is a whole number of Hz. Callers with a fractional device
    /// rate round it first; that moves the result by less than
    /// `0.5 / sample_rate` relative, far below the one-lag resolution.
    ///
    /// Fails only on malformed input: a zero sample rate or a non-finite sample.
    fn get_pitch(&mut self, signal: &[T], sample_rate: usize) -> Result<DetectionResult<T>>;
}

/// Run a default-configured [AutocorrelationDetector] once on `signal`.
///
/// Capture loops that call this repeatedly should keep their own detector
/// instead, so its buffers are reused.
pub fn detect<T: Float>(signal: &[T], sample_rate: usize) -> Result<DetectionResult<T>> {
    AutocorrelationDetector::new(signal.len()).get_pitch(signal, sample_rate)
}
