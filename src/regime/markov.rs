use serde::Serialize;

use super::movement::{FlatPolicy, Movement};

/// Raw transition counts over consecutive movement pairs
///
/// Pairs are `(m[i-1], m[i])` for `i` in `1..n`. The totals count the prior
/// state of each counted pair, so `rise_to_rise + rise_to_fall == total_rise`
/// and `fall_to_rise + fall_to_fall == total_fall` always hold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TransitionCounts {
    pub rise_to_rise: u64,
    pub rise_to_fall: u64,
    pub fall_to_rise: u64,
    pub fall_to_fall: u64,
    pub total_rise: u64,
    pub total_fall: u64,
}

impl TransitionCounts {
    /// Record one transition between binary states (`true` = rise)
    #[inline(always)]
    pub fn record(&mut self, prev_rise: bool, next_rise: bool) {
        match (prev_rise, next_rise) {
            (true, true) => self.rise_to_rise += 1,
            (true, false) => self.rise_to_fall += 1,
            (false, true) => self.fall_to_rise += 1,
            (false, false) => self.fall_to_fall += 1,
        }

        if prev_rise {
            self.total_rise += 1;
        } else {
            self.total_fall += 1;
        }
    }

    /// Record a movement pair, skipping it if the policy drops either side
    #[inline(always)]
    pub fn record_pair(&mut self, prev: Movement, next: Movement, policy: FlatPolicy) {
        if let (Some(a), Some(b)) = (policy.state(prev), policy.state(next)) {
            self.record(a, b);
        }
    }

    /// Number of pairs counted
    #[inline]
    pub fn pairs(&self) -> u64 {
        self.total_rise + self.total_fall
    }

    /// Conditional probabilities; a ratio with a zero denominator is 0
    #[inline]
    pub fn probabilities(&self) -> TransitionProbabilities {
        TransitionProbabilities {
            rise_given_rise: ratio(self.rise_to_rise, self.total_rise),
            fall_given_rise: ratio(self.rise_to_fall, self.total_rise),
            rise_given_fall: ratio(self.fall_to_rise, self.total_fall),
            fall_given_fall: ratio(self.fall_to_fall, self.total_fall),
        }
    }
}

#[inline(always)]
fn ratio(count: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}

/// First-order transition probabilities between rise and fall days
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TransitionProbabilities {
    pub rise_given_rise: f64,
    pub fall_given_rise: f64,
    pub rise_given_fall: f64,
    pub fall_given_fall: f64,
}

impl TransitionProbabilities {
    /// `[P(R|R), P(F|R), P(R|F), P(F|F)]`
    #[inline]
    pub fn as_array(&self) -> [f64; 4] {
        [
            self.rise_given_rise,
            self.fall_given_rise,
            self.rise_given_fall,
            self.fall_given_fall,
        ]
    }

    /// Transition matrix: P[i][j] = P(state_t = j | state_{t-1} = i), 0 = rise, 1 = fall
    #[inline]
    pub fn matrix(&self) -> [[f64; 2]; 2] {
        [
            [self.rise_given_rise, self.fall_given_rise],
            [self.rise_given_fall, self.fall_given_fall],
        ]
    }
}

/// Estimate transition probabilities and counts, Flat days excluded
///
/// O(n), no allocation. Sequences shorter than two produce all zeros.
pub fn estimate(movements: &[Movement]) -> (TransitionProbabilities, TransitionCounts) {
    estimate_with(movements, FlatPolicy::default())
}

/// [`estimate`] with an explicit Flat policy
pub fn estimate_with(
    movements: &[Movement],
    policy: FlatPolicy,
) -> (TransitionProbabilities, TransitionCounts) {
    let mut counts = TransitionCounts::default();
    for pair in movements.windows(2) {
        counts.record_pair(pair[0], pair[1], policy);
    }
    (counts.probabilities(), counts)
}

/// Running transition counts over a growing movement history
///
/// Appending one movement costs O(1), and the counts always equal
/// [`estimate_with`] over everything pushed so far.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransitionCounter {
    counts: TransitionCounts,
    last: Option<Movement>,
    policy: FlatPolicy,
}

impl TransitionCounter {
    #[inline]
    pub fn new(policy: FlatPolicy) -> Self {
        Self {
            counts: TransitionCounts::default(),
            last: None,
            policy,
        }
    }

    pub fn from_movements(movements: &[Movement], policy: FlatPolicy) -> Self {
        let mut counter = Self::new(policy);
        counter.extend(movements.iter().copied());
        counter
    }

    #[inline]
    pub fn push(&mut self, movement: Movement) {
        if let Some(prev) = self.last {
            self.counts.record_pair(prev, movement, self.policy);
        }
        self.last = Some(movement);
    }

    #[inline(always)]
    pub fn counts(&self) -> TransitionCounts {
        self.counts
    }

    #[inline(always)]
    pub fn probabilities(&self) -> TransitionProbabilities {
        self.counts.probabilities()
    }

    #[inline(always)]
    pub fn last(&self) -> Option<Movement> {
        self.last
    }

    #[inline(always)]
    pub fn policy(&self) -> FlatPolicy {
        self.policy
    }
}

impl Extend<Movement> for TransitionCounter {
    fn extend<I: IntoIterator<Item = Movement>>(&mut self, iter: I) {
        for m in iter {
            self.push(m);
        }
    }
}

/// Estimate for one conditioning regime
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct RegimeEstimate {
    pub probabilities: TransitionProbabilities,
    pub counts: TransitionCounts,
    /// Length of the sub-sequence the estimate was built from
    pub observations: usize,
}

/// Regime-conditioned transition estimates
///
/// `after_rise` is estimated from the movements that immediately follow a
/// Rise day, `after_fall` from those that follow a Fall day. Movements
/// following a Flat day belong to neither regime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct StratifiedEstimate {
    pub after_rise: RegimeEstimate,
    pub after_fall: RegimeEstimate,
}

impl StratifiedEstimate {
    /// Asymmetric regime matrices: `[after_rise, after_fall]`
    pub fn regime_matrices(&self) -> [[[f64; 2]; 2]; 2] {
        [
            self.after_rise.probabilities.matrix(),
            self.after_fall.probabilities.matrix(),
        ]
    }
}

/// Split by the previous day's confirmed direction, then estimate each split
pub fn estimate_stratified(movements: &[Movement], policy: FlatPolicy) -> StratifiedEstimate {
    let mut after_rise = Vec::new();
    let mut after_fall = Vec::new();

    for pair in movements.windows(2) {
        match pair[0] {
            Movement::Rise => after_rise.push(pair[1]),
            Movement::Fall => after_fall.push(pair[1]),
            Movement::Flat => {}
        }
    }

    StratifiedEstimate {
        after_rise: regime_estimate(&after_rise, policy),
        after_fall: regime_estimate(&after_fall, policy),
    }
}

fn regime_estimate(movements: &[Movement], policy: FlatPolicy) -> RegimeEstimate {
    let (probabilities, counts) = estimate_with(movements, policy);
    RegimeEstimate {
        probabilities,
        counts,
        observations: movements.len(),
    }
}
