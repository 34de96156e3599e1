use crate::error::{Error, Result};

/// An implementation of a time-decaying value
pub trait Decay {
    /// Calculate value at time `t`
    fn evaluate(&self, t: f64) -> f64;

    /// Sample the value at `t = 0, 1, ..., n - 1`
    ///
    /// This is how a per-episode learning-rate schedule (`decaying_alphas`) is built.
    fn schedule(&self, n: usize) -> Vec<f64> {
        (0..n).map(|t| self.evaluate(t as f64)).collect()
    }
}

/// A constant value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Constant {
    value: f64,
}

impl Constant {
    pub fn new(value: f64) -> Self {
        Self { value }
    }
}

impl Decay for Constant {
    fn evaluate(&self, _t: f64) -> f64 {
        self.value
    }
}

/// v(t) = max(v<sub>i</sub> - rt, v<sub>f</sub>)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Linear {
    rate: f64,
    vi: f64,
    vf: f64,
}

impl Linear {
    /// Linear decay that reaches `vf` exactly at `t = n - 1`
    ///
    /// With `n <= 1` the value stays at `vi`.
    pub fn spanning(n: usize, vi: f64, vf: f64) -> Result<Self> {
        if vi < vf {
            return Err(Error::InvalidDecay(String::from(
                "linear decay needs `vi >= vf`",
            )));
        }
        let rate = if n > 1 { (vi - vf) / (n - 1) as f64 } else { 0.0 };
        Ok(Self { rate, vi, vf })
    }
}

impl Decay for Linear {
    fn evaluate(&self, t: f64) -> f64 {
        let &Self { rate, vi, vf } = self;
        (vi - rate * t).max(vf)
    }
}
