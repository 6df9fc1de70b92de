//! gridroute CLI library.
//!
//! This crate provides command-line interface utilities for the gridroute
//! pathfinder, including terminal styling and output formatting.

pub mod output;
pub mod terminal;
