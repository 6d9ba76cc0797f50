//! Simulation engine for VANGUARD.
//!
//! Owns the scene boundary, formations, level orchestration and the level
//! registry, and produces `GameStateSnapshot`s each tick. The headless
//! `SimScene` stands in for the rendering/physics collaborator.

pub mod components;
pub mod engine;
pub mod formation;
pub mod level;
pub mod levels;
pub mod registry;
pub mod scene;
pub mod sim_scene;
pub mod systems;

pub use engine::SimulationEngine;
pub use vanguard_core as core;
