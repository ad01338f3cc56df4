//! gitfinder application library
//!
//! Filesystem discovery, configuration, and the terminal picker built on
//! `gitfinder-core`. Exposed as a library for the `gf` binary and for tests.

pub mod app;
pub mod cli;
pub mod config;
pub mod scan;
pub mod tui;
