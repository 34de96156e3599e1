use rand::Rng;

use crate::{ensure_interval, error::Result, util::argmax};

use super::Choice;

/// Epsilon greedy exploration policy with a fixed exploration probability
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpsilonGreedy {
    epsilon: f64,
}

impl EpsilonGreedy {
    /// Initialize epsilon greedy policy
    ///
    /// Fails if `epsilon` is not in the interval `[0,1]`
    pub fn new(epsilon: f64) -> Result<Self> {
        ensure_interval!(epsilon, 0.0, 1.0);
        Ok(Self { epsilon })
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Draw one uniform sample in `[0,1)` and explore if it falls strictly below epsilon
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Choice {
        if rng.gen::<f64>() < self.epsilon {
            Choice::Explore
        } else {
            Choice::Exploit
        }
    }

    /// Pick the index of an action given its value estimates
    ///
    /// Exploring picks uniformly over all indices, exploiting picks the highest value
    /// with ties going to the lowest index. Returns `None` only for an empty slice.
    pub fn choose_action<R: Rng + ?Sized>(&self, q_values: &[f64], rng: &mut R) -> Option<usize> {
        match self.choose(rng) {
            Choice::Explore if !q_values.is_empty() => Some(rng.gen_range(0..q_values.len())),
            Choice::Explore => None,
            Choice::Exploit => argmax(q_values),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};
    use statrs::distribution::{ChiSquared, ContinuousCDF};

    use super::*;
    use crate::error::Error;

    #[test]
    fn rejects_out_of_range_epsilon() {
        assert!(matches!(
            EpsilonGreedy::new(1.5),
            Err(Error::InvalidHyperparameter { .. })
        ));
        assert!(EpsilonGreedy::new(-0.01).is_err());
        assert!(EpsilonGreedy::new(f64::NAN).is_err());
    }

    #[test]
    fn greedy_when_epsilon_is_zero() {
        let policy = EpsilonGreedy::new(0.0).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let q = [0.5, 2.0, -1.0, 2.0];
        for _ in 0..1000 {
            assert_eq!(policy.choose(&mut rng), Choice::Exploit);
            assert_eq!(policy.choose_action(&q, &mut rng), Some(1));
        }
        assert_eq!(policy.choose_action(&[0.0; 3], &mut rng), Some(0));
        assert_eq!(policy.choose_action(&[], &mut rng), None);
    }

    #[test]
    fn uniform_when_epsilon_is_one() {
        const ACTIONS: usize = 5;
        const DRAWS: usize = 50_000;

        let policy = EpsilonGreedy::new(1.0).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let q = [10.0, 0.0, 0.0, 0.0, 0.0];

        let mut counts = [0usize; ACTIONS];
        for _ in 0..DRAWS {
            counts[policy.choose_action(&q, &mut rng).unwrap()] += 1;
        }

        let expected = DRAWS as f64 / ACTIONS as f64;
        let statistic: f64 = counts
            .iter()
            .map(|&c| (c as f64 - expected).powi(2) / expected)
            .sum();
        let chi = ChiSquared::new((ACTIONS - 1) as f64).unwrap();
        let p_value = 1.0 - chi.cdf(statistic);
        assert!(
            p_value > 1e-4,
            "Exploration is not uniform: counts {counts:?}, p = {p_value}"
        );
    }

    #[test]
    fn explores_at_roughly_epsilon_rate() {
        let policy = EpsilonGreedy::new(0.25).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let explored = (0..20_000)
            .filter(|_| policy.choose(&mut rng) == Choice::Explore)
            .count();
        let rate = explored as f64 / 20_000.0;
        assert!((rate - 0.25).abs() < 0.02, "Explore rate was {rate}");
    }
}
