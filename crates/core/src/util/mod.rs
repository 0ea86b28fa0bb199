pub mod range;

/// A macro to measure the evaluation time of an expression. Wraps an
/// expression, logs the elapsed time at the given level, and evaluates to the
/// expression's value.
#[macro_export]
macro_rules! timed {
    ($label:expr, $ex:expr) => {
        timed!($label, log::Level::Debug, $ex)
    };
    ($label:expr, $log_level:expr, $ex:expr) => {{
        let now = std::time::Instant::now();
        let value = $ex;
        let elapsed = now.elapsed();
        log::log!($log_level, "{} took {} ms", $label, elapsed.as_millis());
        value
    }};
}

/// Format a degree value for human-readable labels (and default file names).
/// Integral values drop the trailing `.0` so the equator reads `"0 N"`, not
/// `"0.0 N"`; fractional values keep their natural formatting.
pub fn fmt_degree(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < (i64::MAX as f64) {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_degree() {
        assert_eq!(fmt_degree(0.0), "0");
        assert_eq!(fmt_degree(-90.0), "-90");
        assert_eq!(fmt_degree(0.5), "0.5");
        assert_eq!(fmt_degree(180.5), "180.5");
    }
}
