//! Movement classification and rise/fall transition estimation
//!
//! ```
//! use markov_momentum::regime::{classify, estimate};
//!
//! let returns = [0.012, 0.004, -0.020, 0.015, 0.011];
//! let movements = classify(&returns, 0.005).unwrap();
//! let (probs, counts) = estimate(&movements);
//!
//! // Rise, Flat, Fall, Rise, Rise: pairs touching Flat are skipped
//! assert_eq!(counts.pairs(), 2);
//! assert!((0.0..=1.0).contains(&probs.rise_given_rise));
//! ```

mod movement;
mod markov;

pub use movement::{check_threshold, classify, FlatPolicy, Movement};
pub use markov::{
    estimate, estimate_stratified, estimate_with, RegimeEstimate, StratifiedEstimate,
    TransitionCounter, TransitionCounts, TransitionProbabilities,
};
