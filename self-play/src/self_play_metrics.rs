use serde::{Deserialize, Serialize};

/// Summary of a finished episode.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SelfPlayMetrics<S> {
    num_plies: usize,
    score: f32,
    final_state: S,
}

impl<S> SelfPlayMetrics<S> {
    pub fn new(num_plies: usize, score: f32, final_state: S) -> Self {
        Self {
            num_plies,
            score,
            final_state,
        }
    }

    pub fn num_plies(&self) -> usize {
        self.num_plies
    }

    /// Terminal reward from the perspective of the first player.
    pub fn score(&self) -> f32 {
        self.score
    }

    pub fn final_state(&self) -> &S {
        &self.final_state
    }
}
