use rustfft::num_complex::Complex;
use rustfft::num_traits::Zero;

use crate::float::{count, Float};

/// Copy `input` into the real part of `output`, zeroing the imaginary part
/// and any trailing elements of `output`.
pub fn copy_real_to_complex<T: Float>(input: &[T], output: &mut [Complex<T>]) {
    assert!(input.len() <= output.len());
    input
        .iter()
        .zip(output.iter_mut())
        .for_each(|(i, o)| *o = Complex::new(*i, T::zero()));
    output[input.len()..]
        .iter_mut()
        .for_each(|o| *o = Complex::zero())
}

/// Copy the real part of `input` into `output`. `input` may be longer.
pub fn copy_complex_to_real<T: Float>(input: &[Complex<T>], output: &mut [T]) {
    assert!(input.len() >= output.len());
    input
        .iter()
        .map(|c| c.re)
        .zip(output.iter_mut())
        .for_each(|(i, o)| *o = i);
}

/// Computes |x|^2 for each complex value x in `arr`. This function
/// modifies `arr` in place and leaves the complex component zero.
pub fn modulus_squared<T: Float>(arr: &mut [Complex<T>]) {
    for s in arr {
        s.re = s.re * s.re + s.im * s.im;
        s.im = T::zero();
    }
}

/// Compute the sum of the square of each element of `arr`.
pub fn square_sum<T: Float>(arr: &[T]) -> T {
    arr.iter().map(|&s| s * s).sum::<T>()
}

/// Root-mean-square amplitude of `arr`. An empty slice has zero energy.
pub fn rms<T: Float>(arr: &[T]) -> T {
    if arr.is_empty() {
        return T::zero();
    }
    (square_sum(arr) / count::<T>(arr.len())).sqrt()
}

/// Returns the index of the first non-finite value in `arr`, if any.
pub fn find_non_finite<T: Float>(arr: &[T]) -> Option<usize> {
    arr.iter().position(|s| !s.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_real_to_complex_zero_pads() {
        let mut out = vec![Complex::new(7.0f64, 7.0); 4];
        out[3] = Complex::new(9., 9.);
        copy_real_to_complex(&[1., 2.], &mut out);
        assert_eq!(
            out,
            vec![
                Complex::new(1., 0.),
                Complex::new(2., 0.),
                Complex::zero(),
                Complex::zero()
            ]
        );
    }

    #[test]
    fn copy_complex_to_real_truncates() {
        let input = vec![Complex::new(1., 5.), Complex::new(2., 6.), Complex::new(3., 7.)];
        let mut out = vec![0.0f64; 2];
        copy_complex_to_real(&input, &mut out);
        assert_eq!(out, vec![1., 2.]);
    }

    #[test]
    fn modulus_squared_test() {
        let mut arr = vec![Complex::new(3.0f64, 4.0), Complex::new(-1.0, 0.0)];
        modulus_squared(&mut arr);
        assert_eq!(arr, vec![Complex::new(25., 0.), Complex::new(1., 0.)]);
    }

    #[test]
    fn rms_of_constant_signal() {
        assert_eq!(rms(&[0.5f64; 8]), 0.5);
        assert_eq!(rms(&[-2.0f32, 2.0]), 2.0);
        assert_eq!(rms::<f64>(&[]), 0.0);
    }

    #[test]
    fn finds_first_non_finite() {
        assert_eq!(find_non_finite(&[0.0f64, 1.0, f64::NAN, f64::INFINITY]), Some(2));
        assert_eq!(find_non_finite(&[0.0f32, 1.0]), None);
    }
}
