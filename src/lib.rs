//! # Markov Momentum
//!
//! Short-term serial dependence in price moves, measured and projected.
//!
//! ## Design Philosophy
//!
//! - **f64 only**: returns and probabilities stay in double precision
//! - **Binary alphabet for transitions**: Rise vs. Fall; Flat days are excluded or folded into Fall
//! - **Zero, not NaN**: a probability with no observations of its prior state is 0
//! - **Explicit state**: a simulation owns its movement history and hands it back
//!
//! ## Modules
//!
//! - `data`: validated price series, CSV closing-price loader
//! - `stats`: returns, mean, population standard deviation
//! - `regime`: movement classification, transition and stratified estimators
//! - `simulation`: adaptive Monte Carlo price paths
//! - `report`: result consumers (text, JSON, in-memory)
//! - `pipeline`: classify → estimate → simulate in one call
//!
//! ## Example
//!
//! ```rust
//! use markov_momentum::prelude::*;
//!
//! let prices = PriceSeries::new(vec![100.0, 101.0, 100.5, 102.0, 103.1, 102.9]).unwrap();
//! let movements = classify(&prices.returns(), 0.001).unwrap();
//! let (probs, counts) = estimate(&movements);
//!
//! println!("P(rise|rise) = {:.3} over {} pairs", probs.rise_given_rise, counts.pairs());
//!
//! let mc = MarkovPathSimulator::new(Some(42));
//! let params = SimulationParams { initial_price: prices.last(), horizon_days: 20, num_paths: 50 };
//! let run = mc.simulate(&params, &prices.returns(), SimulationState::new(movements)).unwrap();
//! println!("Average final price: {:.2}", run.paths.mean_terminal_price());
//! ```

pub mod error;
pub mod config;
pub mod data;
pub mod stats;
pub mod regime;
pub mod simulation;
pub mod report;
pub mod pipeline;

pub use error::{MarkovError, MarkovResult};

/// Common imports
pub mod prelude {
    pub use crate::error::{MarkovError, MarkovResult};
    pub use crate::config::AnalysisConfig;

    // Data
    pub use crate::data::{load_closing_prices, PriceSeries};

    // Estimation
    pub use crate::regime::{
        classify,
        estimate,
        estimate_stratified,
        estimate_with,
        FlatPolicy,
        Movement,
        StratifiedEstimate,
        TransitionCounter,
        TransitionCounts,
        TransitionProbabilities,
    };

    // Simulation
    pub use crate::simulation::{
        MarkovPathSimulator,
        PathSimulator,
        SimulatedPaths,
        SimulationParams,
        SimulationRun,
        SimulationState,
    };

    // Results
    pub use crate::report::{AnalysisReport, JsonReport, ResultConsumer, TextSummary};
    pub use crate::pipeline::Analysis;
}
