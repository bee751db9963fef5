//! Monte Carlo price paths driven by an adaptive rise/fall estimate
//!
//! Each simulated day first decides a direction, then draws a return
//! magnitude from a Normal fitted to historical returns:
//!
//! - with probability P(rise|rise) from the current estimate the return is
//!   drawn from N(μ, σ), otherwise from N(−μ, σ)
//! - the price compounds: `p[i+1] = p[i] * (1 + r)`
//! - the sign of `r` is appended to the movement history and the estimate is
//!   refreshed before the next draw
//!
//! The history is shared by all paths of a run, so later paths see the labels
//! produced by earlier ones. Only P(rise|rise) gates the branch, whatever the
//! path's own previous move was.
//!
//! # Example
//!
//! ```
//! use markov_momentum::regime::classify;
//! use markov_momentum::simulation::{
//!     MarkovPathSimulator, PathSimulator, SimulationParams, SimulationState,
//! };
//!
//! let returns = [0.010, -0.004, 0.012, 0.007, -0.015, 0.003];
//! let history = classify(&returns, 0.0).unwrap();
//!
//! // Fixed seed for reproducibility
//! let mc = MarkovPathSimulator::new(Some(42));
//! let params = SimulationParams { initial_price: 100.0, horizon_days: 30, num_paths: 10 };
//! let run = mc.simulate(&params, &returns, SimulationState::new(history)).unwrap();
//!
//! assert_eq!(run.paths.num_paths(), 10);
//! assert_eq!(run.paths.row(0).len(), 31);
//! println!("Average terminal price: ${:.2}", run.paths.mean_terminal_price());
//! ```
//!
//! # Cost
//!
//! The estimate is maintained with running counts, so a run is
//! O(num_paths × horizon_days) and yields the same probabilities a full
//! rescan of the history would.

use rand::prelude::*;
use rand_distr::Normal;
use tracing::debug;

use super::{PathSimulator, SimulatedPaths, SimulationParams, SimulationRun, SimulationState};
use crate::error::{MarkovError, MarkovResult};
use crate::regime::Movement;
use crate::stats::{mean, minmax, stddev};

/// Normal return distribution fitted to a historical sample
///
/// Holds the up-branch N(μ, σ) and the mirrored down-branch N(−μ, σ).
#[derive(Debug, Clone, Copy)]
pub struct ReturnModel {
    pub mu: f64,
    pub sigma: f64,
    up: Normal<f64>,
    down: Normal<f64>,
}

impl ReturnModel {
    /// Fit μ and population σ (ddof = 0)
    pub fn fit(sample: &[f64]) -> MarkovResult<Self> {
        if sample.is_empty() {
            return Err(MarkovError::config("returns_sample", "non-empty", "0 returns"));
        }

        let mu = mean(sample);
        let sigma = stddev(sample);
        if !mu.is_finite() || !sigma.is_finite() {
            return Err(MarkovError::degenerate(format!(
                "returns sample has non-finite moments (mean={mu}, std={sigma})"
            )));
        }
        // two-pass rounding can leave a constant sample with σ of order 1e-17
        let (lo, hi) = minmax(sample);
        if sigma <= 0.0 || hi == lo {
            return Err(MarkovError::degenerate(format!(
                "returns sample of {} values has zero standard deviation",
                sample.len()
            )));
        }

        Self::new(mu, sigma)
    }

    pub fn new(mu: f64, sigma: f64) -> MarkovResult<Self> {
        let normal = |m: f64| {
            Normal::new(m, sigma)
                .map_err(|e| MarkovError::degenerate(format!("N({m}, {sigma}): {e}")))
        };

        Ok(Self {
            mu,
            sigma,
            up: normal(mu)?,
            down: normal(-mu)?,
        })
    }

    /// Draw a return from the up or down branch
    #[inline(always)]
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R, up: bool) -> f64 {
        if up {
            self.up.sample(rng)
        } else {
            self.down.sample(rng)
        }
    }
}

/// Monte Carlo engine for adaptive rise/fall price paths
///
/// # Fields
///
/// - `seed`: Optional seed for reproducible simulations (useful for testing/backtesting)
pub struct MarkovPathSimulator {
    pub seed: Option<u64>,
}

impl MarkovPathSimulator {
    pub fn new(seed: Option<u64>) -> Self {
        Self { seed }
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        }
    }
}

impl PathSimulator for MarkovPathSimulator {
    fn simulate(
        &self,
        params: &SimulationParams,
        returns_sample: &[f64],
        mut state: SimulationState,
    ) -> MarkovResult<SimulationRun> {
        params.validate()?;
        let model = ReturnModel::fit(returns_sample)?;
        let mut rng = self.rng();

        debug!(
            mu = model.mu,
            sigma = model.sigma,
            rise_given_rise = state.probabilities().rise_given_rise,
            history = state.history().len(),
            paths = params.num_paths,
            days = params.horizon_days,
            "starting path simulation"
        );

        let width = params.horizon_days + 1;
        let mut rows = Vec::with_capacity(params.num_paths);
        for _ in 0..params.num_paths {
            let mut path = Vec::with_capacity(width);
            let mut price = params.initial_price;
            path.push(price);

            for _ in 0..params.horizon_days {
                let u: f64 = rng.gen();
                let up = u < state.probabilities().rise_given_rise;
                let r = model.draw(&mut rng, up);

                price *= 1.0 + r;
                path.push(price);
                state.push(Movement::from_return_sign(r));
            }
            rows.push(path);
        }

        let paths = SimulatedPaths::from_rows(rows);
        debug!(
            mean_terminal = paths.mean_terminal_price(),
            rise_given_rise = state.probabilities().rise_given_rise,
            "path simulation finished"
        );

        Ok(SimulationRun { paths, state })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regime::{estimate, FlatPolicy, Movement::*};

    const SAMPLE: [f64; 8] = [0.012, -0.008, 0.004, 0.015, -0.011, 0.002, -0.003, 0.009];

    fn params(paths: usize, days: usize) -> SimulationParams {
        SimulationParams {
            initial_price: 100.0,
            horizon_days: days,
            num_paths: paths,
        }
    }

    fn history() -> SimulationState {
        SimulationState::new(vec![Rise, Rise, Fall, Rise, Flat, Fall, Rise, Rise])
    }

    #[test]
    fn test_shape_and_initial_column() {
        let mc = MarkovPathSimulator::new(Some(7));
        let run = mc.simulate(&params(4, 12), &SAMPLE, history()).unwrap();

        assert_eq!(run.paths.num_paths(), 4);
        assert_eq!(run.paths.horizon_days(), 12);
        for row in run.paths.rows() {
            assert_eq!(row.len(), 13);
            assert_eq!(row[0], 100.0);
        }
    }

    #[test]
    fn test_seeded_runs_are_identical() {
        let mc = MarkovPathSimulator::new(Some(42));
        let a = mc.simulate(&params(3, 5), &SAMPLE, history()).unwrap();
        let b = mc.simulate(&params(3, 5), &SAMPLE, history()).unwrap();

        assert_eq!(a.paths, b.paths);
        assert_eq!(a.state, b.state);
    }

    #[test]
    fn test_different_seeds_diverge() {
        let a = MarkovPathSimulator::new(Some(1))
            .simulate(&params(2, 20), &SAMPLE, history())
            .unwrap();
        let b = MarkovPathSimulator::new(Some(2))
            .simulate(&params(2, 20), &SAMPLE, history())
            .unwrap();

        assert_ne!(a.paths, b.paths);
    }

    #[test]
    fn test_history_grows_by_every_simulated_day() {
        let start = history();
        let initial_len = start.history().len();
        let run = MarkovPathSimulator::new(Some(3))
            .simulate(&params(3, 6), &SAMPLE, start)
            .unwrap();

        assert_eq!(run.state.history().len(), initial_len + 18);
        assert!(run.state.history()[initial_len..]
            .iter()
            .all(|m| *m != Flat));
    }

    #[test]
    fn test_running_counts_match_full_rescan() {
        let run = MarkovPathSimulator::new(Some(11))
            .simulate(&params(5, 25), &SAMPLE, history())
            .unwrap();
        let (p, c) = estimate(run.state.history());

        assert_eq!(run.state.counts(), c);
        assert_eq!(run.state.probabilities(), p);
    }

    #[test]
    fn test_labels_follow_path_returns() {
        let run = MarkovPathSimulator::new(Some(5))
            .simulate(&params(1, 10), &SAMPLE, SimulationState::new(Vec::new()))
            .unwrap();
        let row = run.paths.row(0);

        for (i, m) in run.state.history().iter().enumerate() {
            let r = row[i + 1] / row[i] - 1.0;
            // float round trip can blur a return that is exactly zero
            if r.abs() > 1e-12 {
                assert_eq!(*m == Rise, r > 0.0);
            }
        }
    }

    #[test]
    fn test_zero_rise_probability_always_takes_down_branch() {
        // no rise-rise pair can ever form, so every draw is N(-mu, sigma)
        let state = SimulationState::with_probabilities(Default::default(), FlatPolicy::Exclude);
        let run = MarkovPathSimulator::new(Some(9))
            .simulate(&params(1, 50), &[0.05, 0.0501, 0.0499], state)
            .unwrap();

        assert!(run.paths.terminal_price(0) < 100.0);
    }

    #[test]
    fn test_rejects_zero_horizon() {
        let err = MarkovPathSimulator::new(Some(1))
            .simulate(&params(1, 0), &SAMPLE, history())
            .unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("horizon_days"));
    }

    #[test]
    fn test_rejects_zero_paths_and_bad_price() {
        let mc = MarkovPathSimulator::new(Some(1));
        assert!(mc
            .simulate(&params(0, 5), &SAMPLE, history())
            .unwrap_err()
            .is_configuration());

        let mut p = params(1, 5);
        p.initial_price = 0.0;
        assert!(mc.simulate(&p, &SAMPLE, history()).unwrap_err().is_configuration());
        p.initial_price = f64::NAN;
        assert!(mc.simulate(&p, &SAMPLE, history()).unwrap_err().is_configuration());
    }

    #[test]
    fn test_rejects_empty_sample() {
        let err = MarkovPathSimulator::new(Some(1))
            .simulate(&params(1, 5), &[], history())
            .unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_zero_variance_is_degenerate() {
        let err = MarkovPathSimulator::new(Some(1))
            .simulate(&params(1, 5), &[0.01, 0.01, 0.01], history())
            .unwrap_err();
        assert!(err.is_degenerate());
    }

    #[test]
    fn test_constant_sample_with_rounding_residue_is_degenerate() {
        for sample in [&[0.1; 3][..], &[0.003; 3], &[0.07; 3], &[-0.02; 5]] {
            let err = ReturnModel::fit(sample).unwrap_err();
            assert!(err.is_degenerate(), "{sample:?} should be rejected");
        }

        let err = MarkovPathSimulator::new(Some(1))
            .simulate(&params(1, 5), &[0.1, 0.1, 0.1], history())
            .unwrap_err();
        assert!(err.is_degenerate());
    }

    #[test]
    fn test_non_finite_sample_is_degenerate() {
        let err = ReturnModel::fit(&[0.01, f64::NAN]).unwrap_err();
        assert!(err.is_degenerate());
    }
}
