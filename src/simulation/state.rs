use crate::regime::{FlatPolicy, Movement, TransitionCounter, TransitionCounts, TransitionProbabilities};

/// Movement history and the transition estimate it induces
///
/// One value is threaded through a single simulation run: every simulated
/// day appends its label and refreshes the estimate before the next draw.
/// The caller gets it back with the paths and may inspect or discard it.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationState {
    history: Vec<Movement>,
    counter: TransitionCounter,
    probabilities: TransitionProbabilities,
}

impl SimulationState {
    /// Start from an observed movement history, Flat days excluded
    pub fn new(history: Vec<Movement>) -> Self {
        Self::with_policy(history, FlatPolicy::default())
    }

    pub fn with_policy(history: Vec<Movement>, policy: FlatPolicy) -> Self {
        let counter = TransitionCounter::from_movements(&history, policy);
        let probabilities = counter.probabilities();
        Self {
            history,
            counter,
            probabilities,
        }
    }

    /// Start from an explicit estimate with no history behind it
    ///
    /// The estimate is used for the first draw only. After that it is
    /// recomputed from the simulated labels alone, counted under `policy`.
    pub fn with_probabilities(probabilities: TransitionProbabilities, policy: FlatPolicy) -> Self {
        Self {
            history: Vec::new(),
            counter: TransitionCounter::new(policy),
            probabilities,
        }
    }

    /// Append one label and re-estimate
    #[inline]
    pub fn push(&mut self, movement: Movement) {
        self.history.push(movement);
        self.counter.push(movement);
        self.probabilities = self.counter.probabilities();
    }

    #[inline(always)]
    pub fn probabilities(&self) -> TransitionProbabilities {
        self.probabilities
    }

    #[inline(always)]
    pub fn counts(&self) -> TransitionCounts {
        self.counter.counts()
    }

    #[inline]
    pub fn history(&self) -> &[Movement] {
        &self.history
    }

    pub fn into_history(self) -> Vec<Movement> {
        self.history
    }
}
