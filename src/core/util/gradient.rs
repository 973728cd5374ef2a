/// Linear interpolation from `first` to `last`, truncated toward zero.
///
/// `alpha` is expected in `[0, 1]` and is not clamped. The arithmetic is
/// done in `f64`, so any pair of `i32` endpoints is accepted.
#[must_use]
pub fn gradient(first: i32, last: i32, alpha: f64) -> i32 {
    let first = f64::from(first);

    (first + alpha * (f64::from(last) - first)) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_gradient_midpoint_truncates_toward_zero() {
        assert_eq!(gradient(255, 0, 0.5), 127);
        assert_eq!(gradient(0, 255, 0.5), 127);
        assert_eq!(gradient(0, -5, 0.5), -2);
    }

    #[test]
    fn test_gradient_equal_endpoints_is_constant() {
        assert_eq!(gradient(42, 42, 0.0), 42);
        assert_eq!(gradient(42, 42, 0.3), 42);
        assert_eq!(gradient(42, 42, 1.0), 42);
    }

    #[test]
    fn test_gradient_spans_the_whole_i32_range() {
        assert_eq!(gradient(i32::MIN, i32::MAX, 0.0), i32::MIN);
        assert_eq!(gradient(i32::MIN, i32::MAX, 1.0), i32::MAX);
        assert_eq!(gradient(i32::MAX, i32::MIN, 1.0), i32::MIN);
        assert_eq!(gradient(i32::MIN, i32::MAX, 0.5), 0);
    }

    proptest! {
        #[test]
        fn test_gradient_hits_first_at_zero(a in any::<i32>(), b in any::<i32>()) {
            prop_assert_eq!(gradient(a, b, 0.0), a);
        }

        #[test]
        fn test_gradient_hits_last_at_one(a in any::<i32>(), b in any::<i32>()) {
            prop_assert_eq!(gradient(a, b, 1.0), b);
        }

        #[test]
        fn test_gradient_stays_between_endpoints(a in 0i32..=255, b in 0i32..=255, alpha in 0.0f64..=1.0) {
            let value = gradient(a, b, alpha);
            prop_assert!(value >= a.min(b) && value <= a.max(b));
        }
    }
}
