use anyhow::{anyhow, bail, ensure, Result};
use engine::{GameEngine, Player};
use log::trace;
use model::GameAnalyzer;

use super::{mask_invalid_moves_and_normalize, SearchTree};

/// Single threaded AlphaZero style search over canonical states.
///
/// Every state handed to the analyzer and stored in the tree is canonical, so rules are always
/// applied as if `Player::First` were to move.
pub struct MCTS<'a, E, M> {
    game_engine: &'a E,
    analyzer: &'a M,
}

impl<'a, S, E, M> MCTS<'a, E, M>
where
    E: GameEngine<State = S>,
    M: GameAnalyzer<State = S>,
{
    pub fn new(game_engine: &'a E, analyzer: &'a M) -> Self {
        Self {
            game_engine,
            analyzer,
        }
    }

    /// Builds a tree from `state` with `player` to move and runs `num_simulations` simulations.
    pub fn run(&self, state: S, player: Player, num_simulations: usize) -> Result<SearchTree<S>> {
        let mut tree = self.expand_root(state, player)?;
        self.search(&mut tree, num_simulations)?;
        Ok(tree)
    }

    /// Creates a tree whose root is expanded with the masked priors of `state`.
    pub fn expand_root(&self, state: S, player: Player) -> Result<SearchTree<S>> {
        let (priors, _) = self.analyze(&state)?;

        let mut tree = SearchTree::new(player);
        let root = tree.root();
        tree.expand(root, state, player, &priors);

        Ok(tree)
    }

    pub fn search(&self, tree: &mut SearchTree<S>, num_simulations: usize) -> Result<()> {
        for _ in 0..num_simulations {
            self.simulate(tree)?;
        }

        Ok(())
    }

    fn simulate(&self, tree: &mut SearchTree<S>) -> Result<()> {
        let mut node_index = tree.root();
        let mut search_path = vec![node_index];

        while tree[node_index].is_expanded() {
            node_index = tree.select_child(node_index)?;
            search_path.push(node_index);
        }

        if search_path.len() < 2 {
            bail!("The root has no children to search");
        }

        let parent = &tree[search_path[search_path.len() - 2]];
        let to_play = parent.player().opponent();
        let parent_state = parent
            .state()
            .ok_or_else(|| anyhow!("Expanded node is missing its state"))?;
        let action = tree[node_index]
            .action()
            .ok_or_else(|| anyhow!("Child node is missing the action that produced it"))?;

        let (next_state, _) = self
            .game_engine
            .take_action(parent_state, Player::First, action);
        let next_state = self
            .game_engine
            .canonical_state(&next_state, Player::Second);

        let value = match self
            .game_engine
            .reward_for_player(&next_state, Player::First)
        {
            Some(reward) => reward,
            None => {
                let (priors, value) = self.analyze(&next_state)?;
                tree.expand(node_index, next_state, to_play, &priors);
                value
            }
        };

        trace!(
            "Simulation reached depth {} with value {:.3} for {}",
            search_path.len() - 1,
            value,
            to_play
        );

        tree.backup(&search_path, value, to_play);

        Ok(())
    }

    fn analyze(&self, state: &S) -> Result<(Vec<f32>, f32)> {
        let analysis = self.analyzer.get_state_analysis(state)?;
        let valid_actions = self.game_engine.valid_actions(state);

        ensure!(
            analysis.policy_scores.len() == valid_actions.len(),
            "Analyzer returned {} policy scores for an action space of {}",
            analysis.policy_scores.len(),
            valid_actions.len()
        );

        let priors = mask_invalid_moves_and_normalize(&analysis.policy_scores, &valid_actions);

        Ok((priors, analysis.value_score))
    }
}
