//! Time-domain autocorrelation pitch detection.
//!
//! For a window $S=(s_0,\ldots,s_{N-1})$ the detector
//!
//! 1. returns [NoPitch][DetectionResult::NoPitch] when the RMS amplitude of
//!    $S$ is below [silence_threshold][AutocorrelationConfig::silence_threshold];
//! 2. drops the leading and trailing samples with $|s_i|$ below
//!    [trim_threshold][AutocorrelationConfig::trim_threshold];
//! 3. computes $c(t) = \sum_j s_j s_{j+t}$ for every lag $t$ of the trimmed window;
//! 4. skips the downward slope of $c$ that starts at lag 0;
//! 5. takes the lag $p$ of the largest remaining value and reports
//!    `sample_rate / p`.
//!
//! No interpolation or octave correction is applied. Signals with strong
//! harmonics or low-frequency rumble can be reported an octave (or a
//! harmonic) away from their fundamental.

use log::{debug, trace};

use crate::detector::internals::{
    autocorrelation_direct, autocorrelation_fft, period_from_autocorrelation, trim_range,
    DetectorInternals,
};
use crate::detector::{DetectionResult, PitchDetector};
use crate::error::{Error, Result};
use crate::float::{constant, count, Float};
use crate::utils::buffer::{find_non_finite, rms};

/// How the autocorrelation curve is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CorrelationMethod {
    /// Direct O(n^2) sum over every lag.
    #[default]
    Direct,
    /// Zero-padded FFT, O(n log n). Same curve up to rounding.
    Fft,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AutocorrelationConfig<T>
where
    T: Float,
{
    /// Windows with an RMS amplitude below this are silent.
    pub silence_threshold: T,
    /// Edge samples with a magnitude below this are trimmed.
    pub trim_threshold: T,
    pub method: CorrelationMethod,
}

impl<T> Default for AutocorrelationConfig<T>
where
    T: Float,
{
    fn default() -> Self {
        AutocorrelationConfig {
            silence_threshold: constant(0.01),
            trim_threshold: constant(0.001),
            method: CorrelationMethod::Direct,
        }
    }
}

impl<T> AutocorrelationConfig<T>
where
    T: Float,
{
    pub fn with_silence_threshold(mut self, threshold: T) -> Self {
        self.silence_threshold = threshold;
        self
    }

    pub fn with_trim_threshold(mut self, threshold: T) -> Self {
        self.trim_threshold = threshold;
        self
    }

    pub fn with_method(mut self, method: CorrelationMethod) -> Self {
        self.method = method;
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate_threshold("silence_threshold", self.silence_threshold)?;
        validate_threshold("trim_threshold", self.trim_threshold)
    }
}

fn validate_threshold<T: Float>(name: &'static str, value: T) -> Result<()> {
    if value.is_finite() && value >= T::zero() {
        Ok(())
    } else {
        Err(Error::InvalidParameter {
            name,
            value: value.to_string(),
            reason: "must be finite and non-negative",
        })
    }
}

pub struct AutocorrelationDetector<T>
where
    T: Float,
{
    config: AutocorrelationConfig<T>,
    internals: DetectorInternals<T>,
}

impl<T> AutocorrelationDetector<T>
where
    T: Float,
{
    /// A detector with the default thresholds, sized for windows of `size` samples.
    /// Longer windows are still accepted; buffers grow on demand.
    pub fn new(size: usize) -> Self {
        AutocorrelationDetector {
            config: AutocorrelationConfig::default(),
            internals: DetectorInternals::new(size),
        }
    }

    pub fn with_config(size: usize, config: AutocorrelationConfig<T>) -> Result<Self> {
        config.validate()?;
        Ok(AutocorrelationDetector {
            config,
            internals: DetectorInternals::new(size),
        })
    }

    pub fn config(&self) -> &AutocorrelationConfig<T> {
        &self.config
    }
}

impl<T> PitchDetector<T> for AutocorrelationDetector<T>
where
    T: Float,
{
    fn get_pitch(&mut self, signal: &[T], sample_rate: usize) -> Result<DetectionResult<T>> {
        if sample_rate == 0 {
            return Err(Error::InvalidSampleRate(sample_rate));
        }
        if let Some(index) = find_non_finite(signal) {
            return Err(Error::NonFiniteSample { index });
        }
        if signal.len() < 2 {
            trace!("window of {} samples is too short", signal.len());
            return Ok(DetectionResult::NoPitch);
        }

        let power = rms(signal);
        if power < self.config.silence_threshold {
            trace!(
                "rms {} below silence threshold {}",
                power,
                self.config.silence_threshold
            );
            return Ok(DetectionResult::NoPitch);
        }

        let range = match trim_range(signal, self.config.trim_threshold) {
            Some(range) => range,
            None => {
                debug!("trimming left fewer than two samples");
                return Ok(DetectionResult::NoPitch);
            }
        };
        let trimmed = &signal[range];

        let mut autocorr = std::mem::take(&mut self.internals.autocorr);
        match self.config.method {
            CorrelationMethod::Direct => autocorrelation_direct(trimmed, &mut autocorr),
            CorrelationMethod::Fft => {
                autocorrelation_fft(trimmed, &mut self.internals, &mut autocorr)
            }
        }
        let period = period_from_autocorrelation(&autocorr);
        self.internals.autocorr = autocorr;

        let Some(lag) = period else {
            debug!("no autocorrelation peak past lag 0");
            return Ok(DetectionResult::NoPitch);
        };

        let frequency = count::<T>(sample_rate) / count::<T>(lag);
        trace!("period {} samples -> {} Hz", lag, frequency);
        if frequency.is_finite() && frequency > T::zero() {
            Ok(DetectionResult::Pitch(frequency))
        } else {
            Ok(DetectionResult::NoPitch)
        }
    }
}
