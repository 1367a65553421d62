//! # Connect Four
//!
//! Rules engine for the two-player game Connect Four.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, win detection, state machine
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;

pub use config::GameConfig;
pub use error::{ConfigError, InvalidMove};
pub use game::{Board, GameOutcome, GameState, Player};
