use engine::Player;
use serde::{Deserialize, Serialize};

/// One labeled position produced by self-play.
///
/// `reward` starts as a placeholder and is set once, when the episode that produced the example
/// terminates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrainingExample<S> {
    pub canonical_state: S,
    pub player: Player,
    pub policy: Vec<f32>,
    pub reward: f32,
}

impl<S> TrainingExample<S> {
    pub fn new(canonical_state: S, player: Player, policy: Vec<f32>) -> Self {
        Self {
            canonical_state,
            player,
            policy,
            reward: 0.0,
        }
    }

    /// Expresses the terminal reward, given from the perspective of `terminal_player`, from the
    /// perspective of the player who acted at this example.
    pub fn complete(&mut self, terminal_reward: f32, terminal_player: Player) {
        self.reward = if self.player == terminal_player {
            terminal_reward
        } else {
            -terminal_reward
        };
    }
}
