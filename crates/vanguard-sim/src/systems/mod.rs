//! Systems that operate on the headless scene each tick.
//!
//! Systems are plain functions over `&mut World` (or `&World` for read-only).
//! They do not own state; all state lives in components or the scene.

pub mod cleanup;
pub mod movement;
pub mod snapshot;
pub mod timers;
