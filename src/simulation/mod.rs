mod state;
pub mod montecarlo;

pub use montecarlo::{MarkovPathSimulator, ReturnModel};
pub use state::SimulationState;

use serde::{Deserialize, Serialize};

use crate::error::{MarkovError, MarkovResult};
use crate::stats::{mean, minmax};

/// Shape and starting point of a simulation run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationParams {
    pub initial_price: f64,
    pub horizon_days: usize,
    pub num_paths: usize,
}

impl SimulationParams {
    pub fn validate(&self) -> MarkovResult<()> {
        if !self.initial_price.is_finite() || self.initial_price <= 0.0 {
            return Err(MarkovError::config(
                "initial_price",
                "finite and > 0",
                self.initial_price,
            ));
        }
        if self.horizon_days < 1 {
            return Err(MarkovError::config("horizon_days", ">= 1", self.horizon_days));
        }
        if self.num_paths < 1 {
            return Err(MarkovError::config("num_paths", ">= 1", self.num_paths));
        }
        Ok(())
    }
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            initial_price: 100.0,
            horizon_days: 30,
            num_paths: 100,
        }
    }
}

/// Simulated price table: one row per path, `horizon_days + 1` columns
///
/// Column 0 holds the shared initial price.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulatedPaths {
    rows: Vec<Vec<f64>>,
}

impl SimulatedPaths {
    pub(crate) fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        Self { rows }
    }

    #[inline]
    pub fn num_paths(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn horizon_days(&self) -> usize {
        self.rows.first().map_or(0, |r| r.len().saturating_sub(1))
    }

    #[inline]
    pub fn row(&self, path: usize) -> &[f64] {
        &self.rows[path]
    }

    #[inline]
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    #[inline]
    pub fn terminal_price(&self, path: usize) -> f64 {
        let row = &self.rows[path];
        row[row.len() - 1]
    }

    pub fn terminal_prices(&self) -> Vec<f64> {
        (0..self.rows.len()).map(|s| self.terminal_price(s)).collect()
    }

    pub fn mean_terminal_price(&self) -> f64 {
        mean(&self.terminal_prices())
    }

    /// `(min, max)` terminal price across paths
    pub fn terminal_range(&self) -> (f64, f64) {
        minmax(&self.terminal_prices())
    }

    pub fn into_rows(self) -> Vec<Vec<f64>> {
        self.rows
    }
}

/// Output of one simulation: the price table and the final estimator state
#[derive(Debug, Clone)]
pub struct SimulationRun {
    pub paths: SimulatedPaths,
    pub state: SimulationState,
}

pub trait PathSimulator {
    /// Simulates `num_paths` paths of `horizon_days` steps each.
    ///
    /// Either the whole table is produced or an error is returned.
    fn simulate(
        &self,
        params: &SimulationParams,
        returns_sample: &[f64],
        state: SimulationState,
    ) -> MarkovResult<SimulationRun>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_validation() {
        assert!(SimulationParams::default().validate().is_ok());

        let bad = SimulationParams {
            num_paths: 0,
            ..Default::default()
        };
        let err = bad.validate().unwrap_err();
        assert!(err.to_string().contains("num_paths"));
    }

    #[test]
    fn test_terminal_statistics() {
        let paths = SimulatedPaths::from_rows(vec![
            vec![100.0, 101.0, 102.0],
            vec![100.0, 99.0, 98.0],
            vec![100.0, 100.0, 106.0],
        ]);

        assert_eq!(paths.horizon_days(), 2);
        assert_eq!(paths.terminal_prices(), vec![102.0, 98.0, 106.0]);
        assert!((paths.mean_terminal_price() - 102.0).abs() < 1e-12);
        assert_eq!(paths.terminal_range(), (98.0, 106.0));
    }
}
