use anyhow::Result;
use common::{Config, ConfigLoader};

use super::Engine;

#[derive(Debug, PartialEq)]
pub struct Connect2Options {
    pub columns: usize,
    pub num_to_win: usize,
}

impl Connect2Options {
    pub fn engine(&self) -> Engine {
        Engine::with_size(self.columns, self.num_to_win)
    }
}

impl Config for Connect2Options {
    fn load(config: &ConfigLoader) -> Result<Self> {
        Ok(Self {
            columns: config
                .get("columns")
                .and_then(|v| v.as_usize())
                .unwrap_or(4),
            num_to_win: config
                .get("num_to_win")
                .and_then(|v| v.as_usize())
                .unwrap_or(2),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::GameEngine;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults_to_four_columns_two_to_win() {
        let mut file = tempfile::Builder::new().suffix(".conf").tempfile().unwrap();
        file.write_all(b"self_play { num_simulations = 25 }\n").unwrap();

        let config =
            ConfigLoader::with_env(file.path(), "self_play".to_string(), HashMap::new()).unwrap();
        let options: Connect2Options = config.load().unwrap();

        assert_eq!(
            options,
            Connect2Options {
                columns: 4,
                num_to_win: 2
            }
        );
        assert_eq!(options.engine().action_size(), 4);
    }

    #[test]
    fn test_loads_board_size_from_scope() {
        let mut file = tempfile::Builder::new().suffix(".conf").tempfile().unwrap();
        file.write_all(b"self_play {\n  columns = 6\n  num_to_win = 3\n}\n")
            .unwrap();

        let config =
            ConfigLoader::with_env(file.path(), "self_play".to_string(), HashMap::new()).unwrap();
        let engine = config.load::<Connect2Options>().unwrap().engine();

        assert_eq!(engine.columns(), 6);
        assert_eq!(engine.num_to_win(), 3);
        assert_eq!(engine.action_size(), 6);
    }
}
