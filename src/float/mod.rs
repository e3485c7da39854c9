//! Generic [Float] type which acts as a stand-in for `f32` or `f64`.
use rustfft::num_traits::Float as NumFloat;
use rustfft::FftNum;
use std::fmt::{Debug, Display};
use std::iter::Sum;

/// Signals are processed as arrays of [Float]s. A [Float] is normally `f32` or `f64`.
///
/// Both `num_traits::Float` and `num_traits::Signed` define `abs`, so call it
/// through [magnitude] instead of the method syntax.
pub trait Float: Display + Debug + NumFloat + FftNum + Sum {}

impl Float for f64 {}
impl Float for f32 {}

/// Absolute value of `x`.
#[inline]
pub fn magnitude<T: Float>(x: T) -> T {
    NumFloat::abs(x)
}

/// Converts a small constant into `T`. Every [Float] can represent an `f64`
/// literal, possibly with rounding.
#[inline]
pub(crate) fn constant<T: Float>(x: f64) -> T {
    T::from_f64(x).unwrap_or_else(T::nan)
}

/// Converts a count (sample rate, lag, length) into `T`.
#[inline]
pub(crate) fn count<T: Float>(n: usize) -> T {
    T::from_usize(n).unwrap_or_else(T::infinity)
}
