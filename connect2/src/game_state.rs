use std::fmt::{self, Display, Formatter};

use engine::Player;
use serde::{Deserialize, Serialize};

/// A single row of cells. `0` is empty, `1` and `-1` are the tokens of the first and second player.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameState {
    cells: Vec<i8>,
}

impl GameState {
    pub fn initial(columns: usize) -> Self {
        Self {
            cells: vec![0; columns],
        }
    }

    pub fn from_cells(cells: Vec<i8>) -> Self {
        assert!(
            cells.iter().all(|c| matches!(c, -1..=1)),
            "Cells must be one of -1, 0 or 1. {:?}",
            cells
        );

        Self { cells }
    }

    pub fn cells(&self) -> &[i8] {
        &self.cells
    }

    pub fn place_piece(&self, column: usize, player: Player) -> Self {
        assert!(
            column < self.cells.len(),
            "Column {} is outside of the board of {} columns",
            column,
            self.cells.len()
        );
        assert_eq!(
            self.cells[column], 0,
            "Column {} is already occupied. {}",
            column, self
        );

        let mut cells = self.cells.clone();
        cells[column] = player.sign();

        Self { cells }
    }

    pub fn get_valid_actions(&self) -> Vec<bool> {
        self.cells.iter().map(|&c| c == 0).collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&c| c != 0)
    }

    pub fn has_connected(&self, player: Player, num_to_win: usize) -> bool {
        let token = player.sign();
        let mut count = 0;

        for &cell in &self.cells {
            if cell == token {
                count += 1;
            } else {
                count = 0;
            }

            if count == num_to_win {
                return true;
            }
        }

        false
    }

    pub fn negated(&self) -> Self {
        Self {
            cells: self.cells.iter().map(|&c| -c).collect(),
        }
    }
}

impl Display for GameState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "|")?;

        for cell in &self.cells {
            let p = match cell {
                1 => "X",
                -1 => "O",
                _ => " ",
            };
            write!(f, " {} |", p)?;
        }

        Ok(())
    }
}
