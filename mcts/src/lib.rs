mod mask;
pub mod mcts;
mod node;
pub mod node_details;
mod noise;
mod selection;
mod tree;

pub use mask::*;
pub use mcts::*;
pub use node::*;
pub use node_details::*;
pub use noise::*;
pub use selection::*;
pub use tree::*;
