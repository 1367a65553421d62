//! Core Connect Four game logic: board representation, player types, win
//! detection and the turn state machine.

mod board;
mod player;
mod state;
pub mod win;

pub use board::{Board, BoardConfig, Cell, Position, COLS, CONNECT, MAX_CELLS, ROWS};
pub use player::Player;
pub use state::{GameOutcome, GameState, LegalActions, Move};
