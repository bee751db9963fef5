use serde::Serialize;

use crate::error::{MarkovError, MarkovResult};
use crate::stats::simple_returns;

/// Validated price history in chronological order
///
/// Every price is finite and strictly positive and there are at least two
/// of them, so a return series can always be derived.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceSeries {
    prices: Vec<f64>,
}

impl PriceSeries {
    pub fn new(prices: Vec<f64>) -> MarkovResult<Self> {
        if prices.len() < 2 {
            return Err(MarkovError::data(format!(
                "price series needs at least 2 prices, got {}",
                prices.len()
            )));
        }

        if let Some((i, p)) = prices
            .iter()
            .enumerate()
            .find(|(_, p)| !p.is_finite() || **p <= 0.0)
        {
            return Err(MarkovError::data(format!(
                "price at index {i} must be a positive finite number, got {p}"
            )));
        }

        Ok(Self { prices })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Always false for a constructed series
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.prices
    }

    /// Most recent price; the natural starting point for a projection
    #[inline]
    pub fn last(&self) -> f64 {
        self.prices[self.prices.len() - 1]
    }

    /// Simple returns, one fewer than the number of prices
    pub fn returns(&self) -> Vec<f64> {
        simple_returns(&self.prices)
    }
}

impl TryFrom<Vec<f64>> for PriceSeries {
    type Error = MarkovError;

    fn try_from(prices: Vec<f64>) -> MarkovResult<Self> {
        Self::new(prices)
    }
}
