pub mod analytics;
pub mod stub_analyzers;
pub mod training_example;

pub use analytics::*;
pub use stub_analyzers::*;
pub use training_example::*;
