use anyhow::{anyhow, Result};
use connect2::{Engine, GameState};
use engine::{GameEngine, Player};
use mcts::{SearchTree, MCTS};
use model::{FixedAnalyzer, GameAnalyzer, GameStateAnalysis, UniformAnalyzer};

fn board(cells: &[i8]) -> GameState {
    GameState::from_cells(cells.to_vec())
}

fn visits_by_action(tree: &SearchTree<GameState>, action_size: usize) -> Vec<usize> {
    let mut visits = vec![0; action_size];
    for child in tree.children(tree.root()) {
        visits[child.action().unwrap()] = child.visits();
    }
    visits
}

struct FailingAnalyzer;

impl GameAnalyzer for FailingAnalyzer {
    type State = GameState;

    fn get_state_analysis(&self, _: &GameState) -> Result<GameStateAnalysis> {
        Err(anyhow!("model unavailable"))
    }
}

#[test]
fn test_stronger_prior_and_immediate_win_dominate() {
    let engine = Engine::new();
    let analyzer = FixedAnalyzer::new(vec![0.3, 0.7, 0.0, 0.0], 0.0001);
    let mcts = MCTS::new(&engine, &analyzer);

    let tree = mcts.run(board(&[0, 0, 1, -1]), Player::First, 25).unwrap();
    let visits = visits_by_action(&tree, 4);

    assert!(visits[1] > visits[0], "visits: {:?}", visits);
    assert_eq!(visits[2], 0);
    assert_eq!(visits[3], 0);
}

#[test]
fn test_blocking_move_receives_most_visits() {
    let engine = Engine::new();
    let analyzer = UniformAnalyzer::new(engine.action_size());
    let mcts = MCTS::new(&engine, &analyzer);

    let tree = mcts.run(board(&[-1, 0, 0, 0]), Player::First, 200).unwrap();
    let visits = visits_by_action(&tree, 4);

    assert!(visits[1] > visits[2], "visits: {:?}", visits);
    assert!(visits[1] > visits[3], "visits: {:?}", visits);
    assert_eq!(visits[0], 0);
}

#[test]
fn test_winning_moves_receive_more_visits() {
    let engine = Engine::new();
    let analyzer = UniformAnalyzer::new(engine.action_size());
    let mcts = MCTS::new(&engine, &analyzer);

    let tree = mcts.run(board(&[0, 0, 1, 0]), Player::First, 100).unwrap();
    let visits = visits_by_action(&tree, 4);

    assert!(visits[1] > visits[0], "visits: {:?}", visits);
    assert!(visits[3] > visits[0], "visits: {:?}", visits);
}

#[test]
fn test_every_simulation_visits_root_and_one_child() {
    let engine = Engine::new();
    let analyzer = UniformAnalyzer::new(engine.action_size());
    let mcts = MCTS::new(&engine, &analyzer);

    let tree = mcts.run(engine.initial_state(), Player::First, 40).unwrap();
    let root = &tree[tree.root()];
    let child_visits: usize = tree.children(tree.root()).map(|c| c.visits()).sum();

    assert_eq!(root.visits(), 40);
    assert_eq!(child_visits, 40);
}

#[test]
fn test_zero_simulations_only_expands_root() {
    let engine = Engine::new();
    let analyzer = UniformAnalyzer::new(engine.action_size());
    let mcts = MCTS::new(&engine, &analyzer);

    let tree = mcts.run(engine.initial_state(), Player::Second, 0).unwrap();
    let root = &tree[tree.root()];

    assert!(root.is_expanded());
    assert_eq!(root.player(), Player::Second);
    assert_eq!(root.visits(), 0);
    assert_eq!(tree.children(tree.root()).count(), 4);
    assert!(tree.children(tree.root()).all(|c| c.visits() == 0));
}

#[test]
fn test_search_is_independent_of_the_acting_player_label() {
    let engine = Engine::new();
    let analyzer = FixedAnalyzer::new(vec![0.3, 0.7, 0.0, 0.0], 0.0001);
    let mcts = MCTS::new(&engine, &analyzer);

    let state = board(&[0, 0, -1, 1]);
    let canonical = engine.canonical_state(&state, Player::Second);

    let as_second = mcts.run(canonical, Player::Second, 25).unwrap();
    let as_first = mcts.run(board(&[0, 0, 1, -1]), Player::First, 25).unwrap();

    assert_eq!(
        visits_by_action(&as_second, 4),
        visits_by_action(&as_first, 4)
    );
}

#[test]
fn test_greedy_action_after_search_is_the_winning_move() {
    let engine = Engine::new();
    let analyzer = FixedAnalyzer::new(vec![0.3, 0.7, 0.0, 0.0], 0.0001);
    let mcts = MCTS::new(&engine, &analyzer);
    let mut rng = common::create_rng(Some(1));

    let tree = mcts.run(board(&[0, 0, 1, -1]), Player::First, 25).unwrap();

    assert_eq!(tree.select_action(tree.root(), 0.0, &mut rng).unwrap(), 1);
}

#[test]
fn test_analyzer_error_aborts_the_search() {
    let engine = Engine::new();
    let mcts = MCTS::new(&engine, &FailingAnalyzer);

    assert!(mcts.run(engine.initial_state(), Player::First, 10).is_err());
}

#[test]
fn test_policy_of_wrong_length_is_rejected() {
    let engine = Engine::new();
    let analyzer = FixedAnalyzer::new(vec![0.5, 0.5], 0.0);
    let mcts = MCTS::new(&engine, &analyzer);

    assert!(mcts.run(engine.initial_state(), Player::First, 1).is_err());
}

#[test]
fn test_fully_masked_root_cannot_be_searched() {
    let engine = Engine::new();
    let analyzer = FixedAnalyzer::new(vec![0.0, 0.0, 0.5, 0.5], 0.0);
    let mcts = MCTS::new(&engine, &analyzer);

    let tree = mcts.run(board(&[0, 0, 1, -1]), Player::First, 0).unwrap();
    assert!(!tree[tree.root()].is_expanded());

    assert!(mcts.run(board(&[0, 0, 1, -1]), Player::First, 1).is_err());
}
