use std::fmt::Display;

use anyhow::Result;
use engine::{GameEngine, Player};
use log::debug;
use mcts::{SearchTree, MASK_EPSILON, MCTS};
use model::{GameAnalyzer, TrainingExample};
use rand::Rng;

use super::{SelfPlayMetrics, SelfPlayOptions};

/// Plays one game with search choosing the moves of both players.
///
/// Every ply records the canonical state, the player to move and the root visit distribution. Once
/// the game is decided each example is labeled with the outcome from its own player's perspective.
pub fn play_self_one<S, E, M, R>(
    game_engine: &E,
    analyzer: &M,
    options: &SelfPlayOptions,
    rng: &mut R,
) -> Result<(Vec<TrainingExample<S>>, SelfPlayMetrics<S>)>
where
    S: Clone + Display,
    E: GameEngine<State = S>,
    M: GameAnalyzer<State = S>,
    R: Rng + ?Sized,
{
    let mcts = MCTS::new(game_engine, analyzer);
    let dirichlet = options.dirichlet();

    let mut game_state = game_engine.initial_state();
    let mut player = Player::First;
    let mut examples = Vec::new();

    loop {
        let canonical_state = game_engine.canonical_state(&game_state, player);

        let mut tree = mcts.expand_root(canonical_state.clone(), player)?;
        if let Some(dirichlet) = &dirichlet {
            tree.apply_dirichlet_noise(tree.root(), dirichlet, rng)?;
        }
        mcts.search(&mut tree, options.num_simulations)?;

        debug!(
            "Ply: {}, Player: {}, State: {}, {}",
            examples.len(),
            player,
            game_state,
            tree.node_details(tree.root())
        );

        let policy = visit_policy(&tree, game_engine.action_size());
        examples.push(TrainingExample::new(canonical_state, player, policy));

        let temperature = options.temperature_for_ply(examples.len() - 1);
        let action = tree.select_action(tree.root(), temperature, rng)?;

        let (next_state, next_player) = game_engine.take_action(&game_state, player, action);
        game_state = next_state;
        player = next_player;

        if let Some(reward) = game_engine.reward_for_player(&game_state, player) {
            for example in examples.iter_mut() {
                example.complete(reward, player);
            }

            let score = if player == Player::First {
                reward
            } else {
                -reward
            };
            let metrics = SelfPlayMetrics::new(examples.len(), score, game_state);

            return Ok((examples, metrics));
        }
    }
}

/// The root's visit counts over the action space, normalized to sum to one.
pub fn visit_policy<S>(tree: &SearchTree<S>, action_size: usize) -> Vec<f32> {
    let mut policy = vec![0.0; action_size];
    for child in tree.children(tree.root()) {
        if let Some(action) = child.action() {
            policy[action] = child.visits() as f32;
        }
    }

    let total = policy.iter().sum::<f32>() + MASK_EPSILON;

    policy.into_iter().map(|visits| visits / total).collect()
}
