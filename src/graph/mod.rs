pub mod builder;
pub mod implication;

pub use builder::GraphBuilder;
pub use implication::ImplicationGraph;
