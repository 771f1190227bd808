/// Floating comparison with the absolute tolerance (`1e-9` if omitted)
macro_rules! assert_close {
    ($left:expr, $right:expr) => {
        $crate::test_utils::assert_close!($left, $right, 1e-9)
    };
    ($left:expr, $right:expr, $eps:expr) => {{
        let (left, right, eps): (f64, f64, f64) = ($left, $right, $eps);
        assert!(
            (left - right).abs() <= eps,
            "assertion failed: `{} ≈ {}` (tolerance {})",
            left,
            right,
            eps
        );
    }};
}

pub(crate) use assert_close;
