use crate::float::Float;

/// Length of the initial downward slope of `arr`: the first index `d` such
/// that `arr[d] <= arr[d + 1]`, or the last index if `arr` never stops
/// decreasing.
///
/// For an autocorrelation curve this skips the "self match" lobe around lag 0.
pub fn skip_initial_descent<T: Float>(arr: &[T]) -> usize {
    arr.windows(2)
        .position(|win| !(win[0] > win[1]))
        .unwrap_or_else(|| arr.len().saturating_sub(1))
}

/// Index and value of the largest element of `arr` at or after `start`.
/// Ties go to the earliest index.
pub fn find_max_peak<T: Float>(arr: &[T], start: usize) -> Option<(usize, T)> {
    arr.iter()
        .enumerate()
        .skip(start)
        .fold(None, |best: Option<(usize, T)>, (i, &val)| match best {
            Some((_, max)) if !(val > max) => best,
            _ => Some((i, val)),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descent_stops_at_first_rise() {
        let arr = [10.0, 6.0, 2.0, -1.0, 3.0, 8.0, 4.0];
        assert_eq!(skip_initial_descent(&arr), 3);
    }

    #[test]
    fn descent_stops_on_plateau() {
        let arr = [4.0, 2.0, 2.0, 1.0];
        assert_eq!(skip_initial_descent(&arr), 1);
    }

    #[test]
    fn monotone_descent_ends_at_last_index() {
        let arr = [4.0f32, 3.0, 2.0, 1.0];
        assert_eq!(skip_initial_descent(&arr), 3);
        assert_eq!(skip_initial_descent::<f32>(&[]), 0);
        assert_eq!(skip_initial_descent(&[1.0f64]), 0);
    }

    #[test]
    fn max_peak_after_start() {
        let arr = [10.0, 6.0, 2.0, -1.0, 3.0, 8.0, 4.0, 8.0];
        assert_eq!(find_max_peak(&arr, 3), Some((5, 8.0)));
        assert_eq!(find_max_peak(&arr, 0), Some((0, 10.0)));
        assert_eq!(find_max_peak(&arr, 8), None);
    }

    #[test]
    fn max_peak_accepts_negative_values() {
        let arr = [-5.0, -3.0, -4.0];
        assert_eq!(find_max_peak(&arr, 0), Some((1, -3.0)));
    }
}
