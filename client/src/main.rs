mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use common::{create_rng, ConfigLoader, FsExt};
use connect2::Connect2Options;
use dotenv::dotenv;
use engine::GameEngine;
use env_logger::Env;
use log::info;
use model::UniformAnalyzer;
use self_play::{self_learn, SelfPlayOptions, SelfPlayPersistance};

fn main() -> Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::SelfPlay(self_play_args) => {
            let config_path = self_play_args.config.relative_to_cwd()?;
            let config = ConfigLoader::new(config_path, "self_play".to_string())?;

            let self_play_options: SelfPlayOptions = config.load()?;
            let game_options: Connect2Options = config.load()?;

            info!("{:?}", self_play_options);
            info!("{:?}", game_options);

            let games_dir = config.get_relative_path("games_dir")?;

            let engine = game_options.engine();
            let analyzer = UniformAnalyzer::new(engine.action_size());
            let mut rng = create_rng(self_play_options.seed);

            let mut self_play_persistance = SelfPlayPersistance::new(games_dir)?;

            self_learn(
                &engine,
                &analyzer,
                &mut self_play_persistance,
                &self_play_options,
                &mut rng,
            )?
        }
    }

    Ok(())
}
