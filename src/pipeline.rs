//! End-to-end analysis: classify, estimate, stratify, simulate
//!
//! ```
//! use markov_momentum::prelude::*;
//!
//! let prices = PriceSeries::new(vec![100.0, 101.5, 100.8, 102.2, 103.0, 102.1, 104.4]).unwrap();
//! let config = AnalysisConfig {
//!     threshold: 0.002,
//!     flat_policy: FlatPolicy::Exclude,
//!     simulation: Some(SimulationParams { initial_price: 104.4, horizon_days: 10, num_paths: 5 }),
//!     seed: Some(42),
//! };
//!
//! let mut reports: Vec<AnalysisReport> = Vec::new();
//! Analysis::new(config).unwrap().run(&prices, &mut reports).unwrap();
//! assert_eq!(reports[0].movements, 6);
//! ```

use std::time::Instant;

use tracing::{info, warn};

use crate::config::AnalysisConfig;
use crate::data::PriceSeries;
use crate::error::MarkovResult;
use crate::regime::{classify, estimate_stratified, estimate_with};
use crate::report::{AnalysisReport, ResultConsumer, SimulationReport};
use crate::simulation::{MarkovPathSimulator, PathSimulator, SimulationState};

#[derive(Debug)]
pub struct Analysis {
    config: AnalysisConfig,
}

impl Analysis {
    /// Rejects an invalid configuration up front
    pub fn new(config: AnalysisConfig) -> MarkovResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Produce the full report; nothing is returned on any failure
    pub fn analyze(&self, prices: &PriceSeries) -> MarkovResult<AnalysisReport> {
        let start = Instant::now();
        let returns = prices.returns();
        let movements = classify(&returns, self.config.threshold)?;
        let policy = self.config.flat_policy;
        let (probabilities, counts) = estimate_with(&movements, policy);
        let stratified = estimate_stratified(&movements, policy);

        info!(
            movements = movements.len(),
            rise_given_rise = probabilities.rise_given_rise,
            rise_given_fall = probabilities.rise_given_fall,
            "estimated transition probabilities"
        );
        if counts.total_rise == 0 {
            warn!("no rise transitions observed; P(rise|rise) is 0");
        }

        let simulation = match &self.config.simulation {
            Some(params) => {
                let engine = MarkovPathSimulator::new(self.config.seed);
                let state = SimulationState::with_policy(movements.clone(), policy);
                let run = engine.simulate(params, &returns, state)?;
                let (min_terminal_price, max_terminal_price) = run.paths.terminal_range();

                info!(
                    paths = params.num_paths,
                    days = params.horizon_days,
                    mean_terminal = run.paths.mean_terminal_price(),
                    "simulated price paths"
                );

                Some(SimulationReport {
                    params: *params,
                    mean_terminal_price: run.paths.mean_terminal_price(),
                    min_terminal_price,
                    max_terminal_price,
                    final_probabilities: run.state.probabilities(),
                    paths: run.paths,
                })
            }
            None => None,
        };

        Ok(AnalysisReport {
            threshold: self.config.threshold,
            movements: movements.len(),
            counts,
            probabilities,
            stratified,
            simulation,
            elapsed_secs: start.elapsed().as_secs_f64(),
        })
    }

    /// Analyze and hand the report to `consumer`
    pub fn run<C: ResultConsumer + ?Sized>(
        &self,
        prices: &PriceSeries,
        consumer: &mut C,
    ) -> MarkovResult<()> {
        let report = self.analyze(prices)?;
        consumer.consume(&report)
    }
}
