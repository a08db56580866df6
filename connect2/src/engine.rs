use engine::{GameEngine, Player};

use super::GameState;

/// A one row ConnectX game. Players alternately claim an empty cell and the first to line up
/// `num_to_win` adjacent tokens wins. A full row without a winner is a draw.
pub struct Engine {
    columns: usize,
    num_to_win: usize,
}

impl Engine {
    pub fn new() -> Self {
        Self::with_size(4, 2)
    }

    pub fn with_size(columns: usize, num_to_win: usize) -> Self {
        assert!(columns > 0, "The board must have at least one column");
        assert!(
            (1..=columns).contains(&num_to_win),
            "num_to_win must be between 1 and {}",
            columns
        );

        Self {
            columns,
            num_to_win,
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn num_to_win(&self) -> usize {
        self.num_to_win
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEngine for Engine {
    type State = GameState;

    fn initial_state(&self) -> Self::State {
        GameState::initial(self.columns)
    }

    fn action_size(&self) -> usize {
        self.columns
    }

    fn valid_actions(&self, game_state: &Self::State) -> Vec<bool> {
        game_state.get_valid_actions()
    }

    fn has_legal_moves(&self, game_state: &Self::State) -> bool {
        !game_state.is_full()
    }

    fn is_win(&self, game_state: &Self::State, player: Player) -> bool {
        game_state.has_connected(player, self.num_to_win)
    }

    fn reward_for_player(&self, game_state: &Self::State, player: Player) -> Option<f32> {
        if self.is_win(game_state, player) {
            return Some(1.0);
        }

        if self.is_win(game_state, player.opponent()) {
            return Some(-1.0);
        }

        if !self.has_legal_moves(game_state) {
            return Some(0.0);
        }

        None
    }

    fn canonical_state(&self, game_state: &Self::State, player: Player) -> Self::State {
        match player {
            Player::First => game_state.clone(),
            Player::Second => game_state.negated(),
        }
    }

    fn take_action(
        &self,
        game_state: &Self::State,
        player: Player,
        action: usize,
    ) -> (Self::State, Player) {
        assert!(
            action < self.columns,
            "Action {} is outside of the action space of size {}",
            action,
            self.columns
        );

        (game_state.place_piece(action, player), player.opponent())
    }
}
