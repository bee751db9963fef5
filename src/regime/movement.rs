use serde::{Deserialize, Serialize};

use crate::error::{MarkovError, MarkovResult};

/// Discrete day-to-day price movement
///
/// Transition counting uses a binary rise/fall alphabet; how `Flat` maps
/// onto it is decided by [`FlatPolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Movement {
    Rise,
    Flat,
    Fall,
}

/// How Flat days enter the binary transition alphabet
///
/// `Exclude` is the default so that an all-Flat history (constant prices)
/// has no rise or fall observations at all. `FoldIntoFall` is the classic
/// `movement <= 0` collapse into a single non-rise state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlatPolicy {
    /// Any pair with a Flat side is skipped; only Rise/Fall pairs are counted
    #[default]
    Exclude,
    /// Flat counts as Fall (`movement <= 0` is the fall state)
    FoldIntoFall,
}

impl FlatPolicy {
    /// Binary state of a movement: `Some(true)` rise, `Some(false)` fall,
    /// `None` when the movement is not counted
    #[inline(always)]
    pub fn state(self, m: Movement) -> Option<bool> {
        match (m, self) {
            (Movement::Rise, _) => Some(true),
            (Movement::Fall, _) => Some(false),
            (Movement::Flat, FlatPolicy::FoldIntoFall) => Some(false),
            (Movement::Flat, FlatPolicy::Exclude) => None,
        }
    }
}

impl Movement {
    /// Label a return against a symmetric threshold `tau`
    #[inline(always)]
    pub fn from_return(r: f64, tau: f64) -> Self {
        if r > tau {
            Movement::Rise
        } else if r < -tau {
            Movement::Fall
        } else {
            Movement::Flat
        }
    }

    /// Label a simulated return by sign alone: Rise if `r > 0`, else Fall
    #[inline(always)]
    pub fn from_return_sign(r: f64) -> Self {
        if r > 0.0 {
            Movement::Rise
        } else {
            Movement::Fall
        }
    }

    #[inline(always)]
    pub fn is_rise(self) -> bool {
        matches!(self, Movement::Rise)
    }
}

/// Validate a classification threshold
pub fn check_threshold(tau: f64) -> MarkovResult<f64> {
    if !tau.is_finite() || tau < 0.0 {
        return Err(MarkovError::config("threshold", "finite and >= 0", tau));
    }
    Ok(tau)
}

/// Classify every return against `tau`
///
/// Output has the same length as `returns`. Rejects a negative or non-finite
/// threshold instead of clamping it.
pub fn classify(returns: &[f64], tau: f64) -> MarkovResult<Vec<Movement>> {
    let tau = check_threshold(tau)?;
    Ok(returns.iter().map(|&r| Movement::from_return(r, tau)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_with_threshold() {
        let returns = [0.02, 0.005, -0.005, -0.02, 0.01, -0.01];
        let labels = classify(&returns, 0.01).unwrap();

        assert_eq!(
            labels,
            vec![
                Movement::Rise,
                Movement::Flat,
                Movement::Flat,
                Movement::Fall,
                Movement::Flat, // boundary is Flat on both sides
                Movement::Flat,
            ]
        );
    }

    #[test]
    fn test_zero_threshold() {
        let labels = classify(&[0.001, 0.0, -0.001], 0.0).unwrap();
        assert_eq!(labels, vec![Movement::Rise, Movement::Flat, Movement::Fall]);
    }

    #[test]
    fn test_rejects_bad_threshold() {
        for tau in [-0.01, f64::NAN, f64::INFINITY] {
            let err = classify(&[0.01], tau).unwrap_err();
            assert!(err.is_configuration(), "tau={tau} should be rejected");
        }
    }

    #[test]
    fn test_empty_returns() {
        assert!(classify(&[], 0.01).unwrap().is_empty());
    }

    #[test]
    fn test_sign_label() {
        assert_eq!(Movement::from_return_sign(0.003), Movement::Rise);
        assert_eq!(Movement::from_return_sign(0.0), Movement::Fall);
        assert_eq!(Movement::from_return_sign(-0.003), Movement::Fall);
    }

    #[test]
    fn test_flat_policy_states() {
        for policy in [FlatPolicy::Exclude, FlatPolicy::FoldIntoFall] {
            assert_eq!(policy.state(Movement::Rise), Some(true));
            assert_eq!(policy.state(Movement::Fall), Some(false));
        }
        assert_eq!(FlatPolicy::Exclude.state(Movement::Flat), None);
        assert_eq!(FlatPolicy::FoldIntoFall.state(Movement::Flat), Some(false));
        assert_eq!(FlatPolicy::default(), FlatPolicy::Exclude);
    }
}
