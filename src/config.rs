//! Analysis configuration
//!
//! Deserializable from JSON so a run can be described in a file, and
//! buildable field by field from command-line flags.

use serde::{Deserialize, Serialize};

use crate::error::{MarkovError, MarkovResult};
use crate::regime::{check_threshold, FlatPolicy};
use crate::simulation::SimulationParams;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Return magnitude below which a day is Flat
    pub threshold: f64,
    /// How Flat days enter transition counting
    pub flat_policy: FlatPolicy,
    /// Path projection; `None` runs the estimators only
    pub simulation: Option<SimulationParams>,
    /// RNG seed; `None` seeds from entropy
    pub seed: Option<u64>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            threshold: 0.0,
            flat_policy: FlatPolicy::default(),
            simulation: Some(SimulationParams::default()),
            seed: None,
        }
    }
}

impl AnalysisConfig {
    pub fn validate(&self) -> MarkovResult<()> {
        check_threshold(self.threshold)?;
        if let Some(params) = &self.simulation {
            params.validate()?;
        }
        Ok(())
    }

    /// Parse and validate
    pub fn from_json(json: &str) -> MarkovResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| MarkovError::data(format!("invalid configuration JSON: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}
