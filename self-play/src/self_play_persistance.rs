use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use log::info;
use model::TrainingExample;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::fs::File;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use super::ExampleSink;

/// Writes each batch of examples as a gzipped JSON file.
pub struct SelfPlayPersistance {
    game_directory: PathBuf,
}

impl SelfPlayPersistance {
    pub fn new(game_directory: PathBuf) -> Result<Self> {
        fs::create_dir_all(&game_directory).with_context(|| {
            format!("Failed to create the games directory {:?}", game_directory)
        })?;

        Ok(Self { game_directory })
    }

    pub fn get_batches(&self) -> Result<impl Iterator<Item = PathBuf>> {
        let mut paths: Vec<PathBuf> = fs::read_dir(&self.game_directory)?
            .flatten()
            .filter(|p| p.file_type().is_ok_and(|p| p.is_file()))
            .map(|p| p.path())
            .collect();

        paths.sort();

        Ok(paths.into_iter())
    }

    pub fn read<S: DeserializeOwned>(path: &Path) -> Result<Vec<TrainingExample<S>>> {
        let file = File::open(path)?;
        let content = GzDecoder::new(file);
        let examples = serde_json::from_reader(content)
            .with_context(|| format!("Failed to read examples from {:?}", path))?;
        Ok(examples)
    }

    fn generate_file_path_for_iteration(&self, iteration: usize) -> PathBuf {
        self.game_directory
            .join(format!("iteration_{:04}_{}.gz", iteration, Uuid::new_v4()))
    }
}

impl<S: Serialize> ExampleSink<S> for SelfPlayPersistance {
    fn write(&mut self, iteration: usize, examples: &[TrainingExample<S>]) -> Result<()> {
        let file_path = self.generate_file_path_for_iteration(iteration);
        let file = File::create(&file_path)?;
        let mut compressor = GzEncoder::new(file, Compression::default());
        serde_json::to_writer(&mut compressor, examples)?;
        compressor.finish()?;

        info!("Wrote {} examples to {:?}", examples.len(), file_path);

        Ok(())
    }
}
