/// Checks that a numerical value is in the provided interval `[a,b]` and returns early
/// with [`Error::InvalidHyperparameter`](crate::error::Error::InvalidHyperparameter) if not
///
/// `NaN` is never in the interval.
///
/// ### Example
/// ```
/// # use chain_sarsa::{ensure_interval, error::Result};
/// fn check(epsilon: f64) -> Result<()> {
///     ensure_interval!(epsilon, 0.0, 1.0);
///     Ok(())
/// }
/// assert!(check(0.5).is_ok());
/// assert!(check(2.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure_interval {
    ($var:expr, $a:expr, $b:expr) => {
        let value: f64 = $var;
        if !(value >= $a && value <= $b) {
            return Err($crate::error::Error::InvalidHyperparameter {
                name: stringify!($var),
                value,
                low: $a,
                high: $b,
            });
        }
    };
}

/// Index of the largest value, ties going to the lowest index
///
/// Returns `None` for an empty slice. `NaN` entries never win.
pub fn argmax(values: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &v) in values.iter().enumerate() {
        match best {
            Some((_, b)) if v <= b || v.is_nan() => {}
            Some(_) => best = Some((i, v)),
            None if v.is_nan() => {}
            None => best = Some((i, v)),
        }
    }
    best.map(|(i, _)| i)
        .or_else(|| (!values.is_empty()).then_some(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Result};

    fn check(gamma: f64) -> Result<f64> {
        ensure_interval!(gamma, 0.0, 1.0);
        Ok(gamma)
    }

    #[test]
    fn ensure_interval_bounds() {
        assert!(check(0.0).is_ok());
        assert!(check(1.0).is_ok());
        assert!(matches!(
            check(-0.1),
            Err(Error::InvalidHyperparameter { name: "gamma", .. })
        ));
        assert!(check(f64::NAN).is_err());
    }

    #[test]
    fn argmax_lowest_index_on_ties() {
        assert_eq!(argmax(&[]), None);
        assert_eq!(argmax(&[0.0, 0.0, 0.0]), Some(0));
        assert_eq!(argmax(&[1.0, 3.0, 3.0]), Some(1));
        assert_eq!(argmax(&[-2.0, -1.0]), Some(1));
        assert_eq!(argmax(&[f64::NAN, 0.5]), Some(1));
    }
}
