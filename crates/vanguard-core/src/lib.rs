//! Core types and definitions for the VANGUARD arcade shooter.
//!
//! This crate defines the vocabulary shared across all other crates:
//! declarative level data, commands, state snapshots, events, constants,
//! and the configuration error type. It has no dependency on a renderer,
//! an ECS, or any runtime framework.

pub mod commands;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;
