use engine::Player;
use generational_arena::Index;

/// A vertex of the search tree.
///
/// `value_sum` is accumulated from the perspective of `player`, the player to move at this node.
/// Children are indices into the owning `SearchTree`'s arena.
#[derive(Debug)]
pub struct MCTSNode<S> {
    prior: f32,
    player: Player,
    action: Option<usize>,
    visits: usize,
    value_sum: f32,
    state: Option<S>,
    children: Vec<Index>,
}

impl<S> MCTSNode<S> {
    pub fn new(prior: f32, player: Player, action: Option<usize>) -> Self {
        Self {
            prior,
            player,
            action,
            visits: 0,
            value_sum: 0.0,
            state: None,
            children: Vec::new(),
        }
    }

    pub fn is_expanded(&self) -> bool {
        !self.children.is_empty()
    }

    /// Mean value of the node, `0` until it has been visited.
    pub fn value(&self) -> f32 {
        if self.visits == 0 {
            0.0
        } else {
            self.value_sum / self.visits as f32
        }
    }

    pub fn prior(&self) -> f32 {
        self.prior
    }

    pub fn player(&self) -> Player {
        self.player
    }

    /// The action that led from the parent to this node. `None` for the root.
    pub fn action(&self) -> Option<usize> {
        self.action
    }

    pub fn visits(&self) -> usize {
        self.visits
    }

    pub fn value_sum(&self) -> f32 {
        self.value_sum
    }

    pub fn state(&self) -> Option<&S> {
        self.state.as_ref()
    }

    pub fn children(&self) -> &[Index] {
        &self.children
    }

    /// Records one simulation passing through this node. `value` is expressed for `to_play` and is
    /// negated when this node belongs to the other player.
    pub fn accumulate(&mut self, value: f32, to_play: Player) {
        if self.player == to_play {
            self.value_sum += value;
        } else {
            self.value_sum -= value;
        }

        self.visits += 1;
    }

    pub(crate) fn set_prior(&mut self, prior: f32) {
        self.prior = prior;
    }

    pub(crate) fn set_expanded(&mut self, state: S, player: Player, children: Vec<Index>) {
        self.state = Some(state);
        self.player = player;
        self.children = children;
    }
}
