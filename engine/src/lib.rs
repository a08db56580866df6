pub mod engine;
pub mod player;

pub use crate::engine::*;
pub use crate::player::*;
