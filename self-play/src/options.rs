use anyhow::Result;
use common::Config;
use mcts::DirichletOptions;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SelfPlayOptions {
    pub num_simulations: usize,
    pub num_episodes: usize,
    pub training_iterations: usize,
    pub temperature: f32,
    pub temperature_max_moves: usize,
    pub epsilon: Option<f32>,
    pub seed: Option<u64>,
}

impl SelfPlayOptions {
    /// Temperature used to pick the move at `ply`, counted from zero.
    pub fn temperature_for_ply(&self, ply: usize) -> f32 {
        if ply < self.temperature_max_moves {
            self.temperature
        } else {
            0.0
        }
    }

    pub fn dirichlet(&self) -> Option<DirichletOptions> {
        self.epsilon.map(|epsilon| DirichletOptions { epsilon })
    }
}

impl Default for SelfPlayOptions {
    fn default() -> Self {
        Self {
            num_simulations: 25,
            num_episodes: 100,
            training_iterations: 10,
            temperature: 0.0,
            temperature_max_moves: 0,
            epsilon: None,
            seed: None,
        }
    }
}

impl Config for SelfPlayOptions {
    fn load(config: &common::ConfigLoader) -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            num_simulations: config
                .get("num_simulations")
                .and_then(|v| v.as_usize())
                .unwrap_or(defaults.num_simulations),
            num_episodes: config
                .get("num_episodes")
                .and_then(|v| v.as_usize())
                .unwrap_or(defaults.num_episodes),
            training_iterations: config
                .get("training_iterations")
                .and_then(|v| v.as_usize())
                .unwrap_or(defaults.training_iterations),
            temperature: config
                .get("temperature")
                .and_then(|v| v.as_f32())
                .unwrap_or(defaults.temperature),
            temperature_max_moves: config
                .get("temperature_max_moves")
                .and_then(|v| v.as_usize())
                .unwrap_or(defaults.temperature_max_moves),
            epsilon: config.get("epsilon").and_then(|v| v.as_f32()),
            seed: config.get("seed").and_then(|v| v.as_u64()),
        })
    }
}
