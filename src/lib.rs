//! Falling-blocks puzzle game for the terminal (workspace facade crate).
//!
//! The implementation lives in dedicated crates under `crates/`; this
//! package re-exports them as `tui_blocks::{core,engine,input,term,types}`
//! and hosts the runner's configuration.

pub mod config;

pub use tui_blocks_core as core;
pub use tui_blocks_engine as engine;
pub use tui_blocks_input as input;
pub use tui_blocks_term as term;
pub use tui_blocks_types as types;

pub use config::Config;
