use std::fmt::Display;
use std::time::Instant;

use anyhow::Result;
use engine::GameEngine;
use log::info;
use model::{GameAnalyzer, TrainingExample};
use rand::seq::SliceRandom;
use rand::Rng;

use super::{play_self_one, SelfPlayOptions};

/// Receives the shuffled examples of each training iteration.
pub trait ExampleSink<S> {
    fn write(&mut self, iteration: usize, examples: &[TrainingExample<S>]) -> Result<()>;
}

impl<S: Clone> ExampleSink<S> for Vec<Vec<TrainingExample<S>>> {
    fn write(&mut self, _iteration: usize, examples: &[TrainingExample<S>]) -> Result<()> {
        self.push(examples.to_vec());
        Ok(())
    }
}

/// Plays `num_episodes` games and returns all of their examples in a shuffled order.
pub fn play_self<S, E, M, R>(
    game_engine: &E,
    analyzer: &M,
    options: &SelfPlayOptions,
    rng: &mut R,
) -> Result<Vec<TrainingExample<S>>>
where
    S: Clone + Display,
    E: GameEngine<State = S>,
    M: GameAnalyzer<State = S>,
    R: Rng + ?Sized,
{
    let mut examples = Vec::new();

    for episode in 0..options.num_episodes {
        let (episode_examples, metrics) = play_self_one(game_engine, analyzer, options, rng)?;

        info!(
            "Episode: {}, Number of Plies: {}, Score: {}, Final State: {}",
            episode + 1,
            metrics.num_plies(),
            metrics.score(),
            metrics.final_state()
        );

        examples.extend(episode_examples);
    }

    examples.shuffle(rng);

    Ok(examples)
}

/// Repeats `play_self` for `training_iterations` iterations, handing each batch to `sink`.
pub fn self_learn<S, E, M, K, R>(
    game_engine: &E,
    analyzer: &M,
    sink: &mut K,
    options: &SelfPlayOptions,
    rng: &mut R,
) -> Result<()>
where
    S: Clone + Display,
    E: GameEngine<State = S>,
    M: GameAnalyzer<State = S>,
    K: ExampleSink<S>,
    R: Rng + ?Sized,
{
    let starting_run_time = Instant::now();

    for iteration in 0..options.training_iterations {
        let examples = play_self(game_engine, analyzer, options, rng)?;

        sink.write(iteration, &examples)?;

        info!(
            "Iteration: {} of {}, Number of Examples: {}, Elapsed: {:.2}s",
            iteration + 1,
            options.training_iterations,
            examples.len(),
            starting_run_time.elapsed().as_secs_f32()
        );
    }

    Ok(())
}
