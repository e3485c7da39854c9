use std::ops::RangeInclusive;

use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

use crate::float::{count, magnitude, Float};
use crate::utils::buffer::{copy_complex_to_real, copy_real_to_complex, modulus_squared};
use crate::utils::peak::{find_max_peak, skip_initial_descent};

/// Data structure to hold any buffers needed for pitch computation.
/// For WASM it's best to allocate buffers once rather than allocate and
/// free buffers repeatedly, so buffers only ever grow.
pub struct DetectorInternals<T>
where
    T: Float,
{
    pub autocorr: Vec<T>,
    pub signal_complex: Vec<Complex<T>>,
    pub scratch: Vec<Complex<T>>,
    pub planner: FftPlanner<T>,
}

impl<T> DetectorInternals<T>
where
    T: Float,
{
    /// Reserve room for windows of `size` samples.
    pub fn new(size: usize) -> Self {
        DetectorInternals {
            autocorr: Vec::with_capacity(size),
            signal_complex: Vec::new(),
            scratch: Vec::new(),
            planner: FftPlanner::new(),
        }
    }
}

/// Range of `signal` left after dropping the leading and trailing samples
/// whose magnitude is below `threshold`.
///
/// Returns `None` when fewer than two samples would remain, including the
/// case where no sample reaches `threshold`.
pub fn trim_range<T: Float>(signal: &[T], threshold: T) -> Option<RangeInclusive<usize>> {
    let audible = |s: &T| !(magnitude(*s) < threshold);
    let start = signal.iter().position(audible)?;
    let end = signal.iter().rposition(audible)?;
    if start >= end {
        return None;
    }
    Some(start..=end)
}

/// Compute the linear autocorrelation of `signal` into `result` with the
/// direct sum
///
/// > r(t) = sum_{j=0}^{n-1-t} x_j*x_{j+t}
///
/// for every lag `t` in `0..signal.len()`. This is O(n^2).
pub fn autocorrelation_direct<T: Float>(signal: &[T], result: &mut Vec<T>) {
    let n = signal.len();
    result.clear();
    result.extend((0..n).map(|lag| {
        signal[..n - lag]
            .iter()
            .zip(&signal[lag..])
            .map(|(&a, &b)| a * b)
            .sum::<T>()
    }));
}

/// Compute the same linear autocorrelation as [autocorrelation_direct] using
/// an FFT. The signal is zero padded to at least twice its length so the
/// circular correlation does not wrap around.
pub fn autocorrelation_fft<T: Float>(
    signal: &[T],
    internals: &mut DetectorInternals<T>,
    result: &mut Vec<T>,
) {
    let n = signal.len();
    result.clear();
    if n == 0 {
        return;
    }
    let fft_len = (2 * n).next_power_of_two();

    let fft = internals.planner.plan_fft_forward(fft_len);
    let inv_fft = internals.planner.plan_fft_inverse(fft_len);

    let scratch_len = fft
        .get_inplace_scratch_len()
        .max(inv_fft.get_inplace_scratch_len());
    internals.signal_complex.resize(fft_len, Complex::new(T::zero(), T::zero()));
    internals.scratch.resize(scratch_len, Complex::new(T::zero(), T::zero()));
    let signal_complex = &mut internals.signal_complex[..fft_len];
    let scratch = &mut internals.scratch[..scratch_len];

    copy_real_to_complex(signal, signal_complex);
    fft.process_with_scratch(signal_complex, scratch);
    modulus_squared(signal_complex);
    inv_fft.process_with_scratch(signal_complex, scratch);

    // rustfft doesn't normalize, and a forward + inverse pair scales by `fft_len`.
    let normalization_const = T::one() / count::<T>(fft_len);
    result.resize(n, T::zero());
    copy_complex_to_real(&signal_complex[..n], result);
    result
        .iter_mut()
        .for_each(|r| *r = *r * normalization_const);
}

/// Pick the period lag from an autocorrelation curve: skip the initial
/// downward slope, then take the highest remaining value.
///
/// Returns `None` when the chosen lag is 0.
pub fn period_from_autocorrelation<T: Float>(autocorr: &[T]) -> Option<usize> {
    let start = skip_initial_descent(autocorr);
    find_max_peak(autocorr, start)
        .map(|(lag, _)| lag)
        .filter(|&lag| lag > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn trim_drops_quiet_edges() {
        let signal = [0.0, 0.0005, -0.2, 0.3, 0.0, -0.4, -0.0009, 0.0];
        assert_eq!(trim_range(&signal, 0.001), Some(2..=5));
    }

    #[test]
    fn trim_uses_magnitude() {
        // A large negative sample is audible.
        let signal = [-0.5, 0.0, 0.5];
        assert_eq!(trim_range(&signal, 0.001), Some(0..=2));
    }

    #[test]
    fn trim_rejects_degenerate_windows() {
        assert_eq!(trim_range(&[0.0f64; 16], 0.001), None);
        assert_eq!(trim_range(&[0.0, 0.0, 0.9, 0.0], 0.001), None);
        assert_eq!(trim_range::<f32>(&[], 0.001), None);
    }

    #[test]
    fn direct_autocorrelation_test() {
        let signal: Vec<f64> = vec![0., 1., 2., 0., -1., -2.];
        let mut result = vec![];
        autocorrelation_direct(&signal, &mut result);
        assert_eq!(result, vec![10., 4., -2., -5., -2., 0.]);
    }

    #[test]
    fn fft_autocorrelation_matches_direct() {
        let signal: Vec<f64> = (0..300)
            .map(|i| (i as f64 * 0.13).sin() + 0.3 * (i as f64 * 0.71).cos())
            .collect();
        let mut internals = DetectorInternals::new(signal.len());

        let mut direct = vec![];
        let mut fft = vec![];
        autocorrelation_direct(&signal, &mut direct);
        autocorrelation_fft(&signal, &mut internals, &mut fft);

        assert_eq!(direct.len(), fft.len());
        for (d, f) in direct.iter().zip(&fft) {
            assert_relative_eq!(*d, *f, epsilon = 1e-8);
        }
    }

    #[test]
    fn fft_buffers_are_reused_across_sizes() {
        let mut internals = DetectorInternals::new(8);
        let mut result = vec![];
        autocorrelation_fft(&[1.0f32, 2.0, 3.0], &mut internals, &mut result);
        assert_eq!(result.len(), 3);
        autocorrelation_fft(&[1.0f32; 40], &mut internals, &mut result);
        assert_eq!(result.len(), 40);
        assert_relative_eq!(result[0], 40.0, epsilon = 1e-3);
        autocorrelation_fft(&[], &mut internals, &mut result);
        assert!(result.is_empty());
    }

    #[test]
    fn period_skips_zero_lag_lobe() {
        // Period of 4 samples.
        let signal: Vec<f64> = (0..64)
            .map(|i| [0.0, 1.0, 0.0, -1.0][i % 4])
            .collect();
        let mut autocorr = vec![];
        autocorrelation_direct(&signal, &mut autocorr);
        assert_eq!(period_from_autocorrelation(&autocorr), Some(4));
    }

    #[test]
    fn period_rejects_lag_zero() {
        assert_eq!(period_from_autocorrelation::<f64>(&[]), None);
        assert_eq!(period_from_autocorrelation(&[1.0f64]), None);
        assert_eq!(period_from_autocorrelation(&[2.0f64, 2.0, 0.5]), None);
    }
}
