//! Command implementations for the CLI
//!
//! This module contains the implementation of all CLI commands:
//! - quote: Price a module selection for a network size
//! - report: Build a full business case from a scenario file
//! - modules: List the module catalog
//! - tiers: Show the active rate card
//! - config: Configuration display and validation

pub mod config;
pub mod modules;
pub mod quote;
mod render;
pub mod report;
pub mod tiers;
