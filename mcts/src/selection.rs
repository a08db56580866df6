use super::MCTSNode;

/// Upper confidence bound of selecting `child` from `parent`.
///
/// The child's mean value is stored from the perspective of the player to move at the child, so it
/// is negated to score the edge for the player choosing at the parent.
pub fn ucb_score<S>(parent: &MCTSNode<S>, child: &MCTSNode<S>) -> f32 {
    let exploitation = -child.value();
    let exploration =
        child.prior() * (parent.visits() as f32).sqrt() / (child.visits() as f32 + 1.0);

    exploitation + exploration
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use engine::Player;

    #[test]
    fn test_ucb_score_unvisited_child() {
        let mut parent: MCTSNode<()> = MCTSNode::new(0.0, Player::First, None);
        for _ in 0..4 {
            parent.accumulate(0.0, Player::First);
        }

        let child = MCTSNode::new(0.5, Player::Second, Some(0));

        assert_approx_eq!(ucb_score(&parent, &child), 0.5 * 2.0 / 1.0);
    }

    #[test]
    fn test_ucb_score_negates_child_value() {
        let mut parent: MCTSNode<()> = MCTSNode::new(0.0, Player::First, None);
        for _ in 0..9 {
            parent.accumulate(0.0, Player::First);
        }

        let mut child = MCTSNode::new(0.25, Player::Second, Some(1));
        child.accumulate(0.5, Player::Second);
        child.accumulate(0.3, Player::Second);

        let expected = -0.4 + 0.25 * 3.0 / 3.0;

        assert_approx_eq!(ucb_score(&parent, &child), expected, 1e-6);
    }

    #[test]
    fn test_ucb_score_unvisited_parent_is_pure_exploitation() {
        let parent: MCTSNode<()> = MCTSNode::new(0.0, Player::First, None);
        let child = MCTSNode::new(0.9, Player::Second, Some(2));

        assert_eq!(ucb_score(&parent, &child), 0.0);
    }
}
