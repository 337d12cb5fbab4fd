//! The single-pass driver tying scanner, matcher, aggregator and statistics
//! together.

mod driver;
mod outcome;

#[cfg(test)]
mod tests;

pub use driver::{Pipeline, run_pass};
pub use outcome::PassOutcome;
