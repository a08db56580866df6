use anyhow::Result;

/// The policy/value estimator consulted by search.
///
/// Implementations are treated as pure functions of the state. An error is fatal to the search that
/// requested the analysis.
pub trait GameAnalyzer {
    type State;

    fn get_state_analysis(&self, game_state: &Self::State) -> Result<GameStateAnalysis>;
}

impl<T: GameAnalyzer + ?Sized> GameAnalyzer for &T {
    type State = T::State;

    fn get_state_analysis(&self, game_state: &Self::State) -> Result<GameStateAnalysis> {
        (**self).get_state_analysis(game_state)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameStateAnalysis {
    /// Prior probability for every action in the action space, in action order.
    pub policy_scores: Vec<f32>,
    /// Expected outcome in `[-1, 1]` for the player to move.
    pub value_score: f32,
}

impl GameStateAnalysis {
    pub fn new(value_score: f32, policy_scores: Vec<f32>) -> Self {
        GameStateAnalysis {
            policy_scores,
            value_score,
        }
    }
}
