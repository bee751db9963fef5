//! Descriptive statistics over return samples
//!
//! Plain slice functions used to fit the Normal return distribution that
//! drives the path simulator and to summarise terminal prices.
//!
//! # Examples
//!
//! ```
//! use markov_momentum::stats::{simple_returns, mean, stddev};
//!
//! let returns = simple_returns(&[100.0, 101.0, 99.0, 102.0]);
//! let (mu, sigma) = (mean(&returns), stddev(&returns));
//! assert!(sigma > 0.0);
//! # let _ = mu;
//! ```

pub mod core;

pub use core::{mean, minmax, simple_returns, stddev, variance};
