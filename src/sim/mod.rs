pub mod runner;

pub use runner::{simulate, simulate_with};
