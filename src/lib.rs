//! charset-builder library crate.
//!
//! Builds a fixed-size Unicode charset interactively and exports it as a
//! slot-by-slot code point table. This module exposes the internal components
//! for integration testing.

pub mod charset;
pub mod cli;
pub mod config;
pub mod dialog;
pub mod export;
pub mod session;
pub mod terminal;
pub mod unicode;
