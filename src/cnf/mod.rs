pub mod dimacs;
pub mod generate;
pub mod lit;
