//! Core types and definitions for the OUTBREAK simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, state snapshots, events, constants, and the
//! world-bounds/camera transform. It has no dependency on any runtime
//! framework.

pub mod camera;
pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod profiles;
pub mod state;
pub mod types;
