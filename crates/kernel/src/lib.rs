//! Gantry Kernel Library
//!
//! This library exposes kernel internals for integration testing.
//! The main entry point for running the dashboard is the `gantry` binary.

pub mod clock;
pub mod config;
pub mod error;
pub mod registry;
pub mod routes;
pub mod shell;
pub mod state;
pub mod stores;
pub mod theme;
pub mod views;
