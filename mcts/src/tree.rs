use std::ops::Index as IndexOp;

use anyhow::{anyhow, bail, Result};
use engine::Player;
use generational_arena::{Arena, Index};
use rand::distributions::WeightedIndex;
use rand::prelude::Distribution;
use rand::Rng;

use super::{generate_noise, ucb_score, DirichletOptions, EdgeDetails, MCTSNode, NodeDetails};

/// A search tree rooted at a single state. Nodes live in an arena and refer to their children by
/// index, the tree owns every node.
pub struct SearchTree<S> {
    arena: Arena<MCTSNode<S>>,
    root: Index,
}

impl<S> SearchTree<S> {
    /// Creates a tree holding a single unexpanded root for `player` to move.
    pub fn new(player: Player) -> Self {
        let mut arena = Arena::new();
        let root = arena.insert(MCTSNode::new(0.0, player, None));

        Self { arena, root }
    }

    pub fn root(&self) -> Index {
        self.root
    }

    pub fn node(&self, index: Index) -> &MCTSNode<S> {
        &self.arena[index]
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn children(&self, index: Index) -> impl Iterator<Item = &MCTSNode<S>> {
        self.arena[index]
            .children()
            .iter()
            .map(move |child_index| &self.arena[*child_index])
    }

    /// Stores `state` on the node and creates one child per action with a non-zero prior, in
    /// action order. Children belong to the opponent of `player`.
    pub fn expand(&mut self, index: Index, state: S, player: Player, priors: &[f32]) {
        assert!(
            !self.arena[index].is_expanded(),
            "A node may only be expanded once"
        );

        let children = priors
            .iter()
            .enumerate()
            .filter(|(_, prior)| **prior != 0.0)
            .map(|(action, prior)| {
                self.arena
                    .insert(MCTSNode::new(*prior, player.opponent(), Some(action)))
            })
            .collect();

        self.arena[index].set_expanded(state, player, children);
    }

    /// Returns the child with the highest UCB score. Ties go to the earliest child.
    pub fn select_child(&self, index: Index) -> Result<Index> {
        let node = &self.arena[index];

        let mut best: Option<(Index, f32)> = None;
        for child_index in node.children() {
            let score = ucb_score(node, &self.arena[*child_index]);
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((*child_index, score));
            }
        }

        best.map(|(child_index, _)| child_index)
            .ok_or_else(|| anyhow!("Cannot select a child of a node that has not been expanded"))
    }

    /// Picks the action to play from the node.
    ///
    /// A temperature of `0` plays the most visited child, the earliest on ties. Any other
    /// temperature samples a child in proportion to its visit count.
    pub fn select_action<R: Rng + ?Sized>(
        &self,
        index: Index,
        temperature: f32,
        rng: &mut R,
    ) -> Result<usize> {
        let children: Vec<&MCTSNode<S>> = self.children(index).collect();

        if children.is_empty() {
            bail!("Cannot select an action from a node that has not been expanded");
        }

        let chosen = if temperature == 0.0 {
            let mut best = children[0];
            for child in &children[1..] {
                if child.visits() > best.visits() {
                    best = *child;
                }
            }
            best
        } else {
            let weighted_index = WeightedIndex::new(children.iter().map(|child| child.visits()))
                .map_err(|err| {
                    anyhow!(
                        "Could not sample an action from visit counts, most likely none were visited: {}",
                        err
                    )
                })?;

            children[weighted_index.sample(rng)]
        };

        chosen
            .action()
            .ok_or_else(|| anyhow!("Child node is missing the action that produced it"))
    }

    /// Accumulates `value`, expressed for `to_play`, into every node along `search_path`.
    pub fn backup(&mut self, search_path: &[Index], value: f32, to_play: Player) {
        for index in search_path.iter().rev() {
            self.arena[*index].accumulate(value, to_play);
        }
    }

    /// Mixes Dirichlet noise into the priors of the node's children.
    pub fn apply_dirichlet_noise<R: Rng + ?Sized>(
        &mut self,
        index: Index,
        dirichlet: &DirichletOptions,
        rng: &mut R,
    ) -> Result<()> {
        let priors = self.children(index).map(|child| child.prior()).collect();
        let noisy_priors = generate_noise(priors, dirichlet, rng)?;

        let children = self.arena[index].children().to_vec();
        for (child_index, prior) in children.into_iter().zip(noisy_priors) {
            self.arena[child_index].set_prior(prior);
        }

        Ok(())
    }

    /// Edge statistics of the node's children, most visited first.
    pub fn node_details(&self, index: Index) -> NodeDetails {
        let node = &self.arena[index];

        let mut children: Vec<EdgeDetails> = node
            .children()
            .iter()
            .map(|child_index| &self.arena[*child_index])
            .filter_map(|child| {
                child.action().map(|action| EdgeDetails {
                    action,
                    visits: child.visits(),
                    value: -child.value(),
                    prior: child.prior(),
                    ucb: ucb_score(node, child),
                })
            })
            .collect();

        children.sort_by(|a, b| b.visits.cmp(&a.visits));

        NodeDetails {
            visits: node.visits(),
            children,
        }
    }
}

impl<S> IndexOp<Index> for SearchTree<S> {
    type Output = MCTSNode<S>;

    fn index(&self, index: Index) -> &Self::Output {
        self.node(index)
    }
}
