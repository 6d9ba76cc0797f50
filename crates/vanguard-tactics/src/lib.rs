//! Enemy movement for VANGUARD.
//!
//! Implements path segment resolution, the path evaluator, per-ship
//! tactic state machines, and ship class profiles. Everything here is
//! plain data and pure functions; applying results to live entities is
//! the simulation crate's job.

pub mod evaluator;
pub mod path;
pub mod profiles;
pub mod tactic;

pub use vanguard_core as core;

#[cfg(test)]
mod tests;
