use std::marker::PhantomData;

use anyhow::Result;

use super::{GameAnalyzer, GameStateAnalysis};

/// Flat priors over the whole action space and a neutral value for every state.
pub struct UniformAnalyzer<S> {
    action_size: usize,
    _phantom: PhantomData<fn(&S)>,
}

impl<S> UniformAnalyzer<S> {
    pub fn new(action_size: usize) -> Self {
        Self {
            action_size,
            _phantom: PhantomData,
        }
    }
}

impl<S> GameAnalyzer for UniformAnalyzer<S> {
    type State = S;

    fn get_state_analysis(&self, _: &Self::State) -> Result<GameStateAnalysis> {
        let prior = 1.0 / self.action_size as f32;

        Ok(GameStateAnalysis::new(0.0, vec![prior; self.action_size]))
    }
}

/// Returns the same analysis regardless of the state.
pub struct FixedAnalyzer<S> {
    analysis: GameStateAnalysis,
    _phantom: PhantomData<fn(&S)>,
}

impl<S> FixedAnalyzer<S> {
    pub fn new(policy_scores: Vec<f32>, value_score: f32) -> Self {
        Self {
            analysis: GameStateAnalysis::new(value_score, policy_scores),
            _phantom: PhantomData,
        }
    }
}

impl<S> GameAnalyzer for FixedAnalyzer<S> {
    type State = S;

    fn get_state_analysis(&self, _: &Self::State) -> Result<GameStateAnalysis> {
        Ok(self.analysis.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_analyzer_is_flat() {
        let analyzer = UniformAnalyzer::<Vec<i8>>::new(4);
        let analysis = analyzer.get_state_analysis(&vec![0; 4]).unwrap();

        assert_eq!(analysis.policy_scores, vec![0.25; 4]);
        assert_eq!(analysis.value_score, 0.0);
    }

    #[test]
    fn test_fixed_analyzer_ignores_state() {
        let analyzer = FixedAnalyzer::<Vec<i8>>::new(vec![0.3, 0.7, 0.0, 0.0], 0.0001);
        let a = analyzer.get_state_analysis(&vec![0, 0, 1, -1]).unwrap();
        let b = analyzer.get_state_analysis(&vec![1, -1, 1, -1]).unwrap();

        assert_eq!(a, b);
        assert_eq!(a.value_score, 0.0001);
    }
}
