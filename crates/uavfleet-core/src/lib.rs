//! Core types and definitions for the UAV fleet simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! vehicle state, commands, run parameters, snapshots, and constants.
//! It performs no I/O.

pub mod commands;
pub mod config;
pub mod constants;
pub mod state;
pub mod types;
pub mod vehicle;

#[cfg(test)]
mod tests;
