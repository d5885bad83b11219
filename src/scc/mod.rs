pub mod tarjan;

pub use tarjan::{SccPartition, condensation, find_sccs};
