use super::player::Player;

/// The rules of a two player, zero-sum, perfect information game.
///
/// Actions are indices into a fixed size action space of `action_size()` entries. States handed to
/// search are canonical: they are expressed so that the player to move is always `Player::First`.
pub trait GameEngine {
    type State;

    fn initial_state(&self) -> Self::State;

    fn action_size(&self) -> usize;

    /// One entry per action, `true` where the action is legal.
    fn valid_actions(&self, game_state: &Self::State) -> Vec<bool>;

    fn has_legal_moves(&self, game_state: &Self::State) -> bool {
        self.valid_actions(game_state).into_iter().any(|valid| valid)
    }

    fn is_win(&self, game_state: &Self::State, player: Player) -> bool;

    /// `Some(1.0)`, `Some(-1.0)` or `Some(0.0)` once the game is decided, from the perspective of
    /// `player`. `None` while the game is still ongoing.
    fn reward_for_player(&self, game_state: &Self::State, player: Player) -> Option<f32>;

    /// Re-expresses the state so that `player` is the mover. Identity for `Player::First`.
    fn canonical_state(&self, game_state: &Self::State, player: Player) -> Self::State;

    /// Returns the resulting state and the player to move next. Must not mutate the input.
    fn take_action(
        &self,
        game_state: &Self::State,
        player: Player,
        action: usize,
    ) -> (Self::State, Player);
}
