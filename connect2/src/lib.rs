pub mod engine;
pub mod game_state;
pub mod options;

pub use engine::*;
pub use game_state::*;
pub use options::*;
