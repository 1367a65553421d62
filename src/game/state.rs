use smallvec::SmallVec;

use crate::config::GameConfig;
use crate::error::{ConfigError, InvalidMove};

use super::board::{Board, Position};
use super::player::Player;
use super::win;

/// Columns that currently accept a disc.
pub type LegalActions = SmallVec<[usize; 8]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// A move that has been played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub player: Player,
    pub column: usize,
    pub row: usize,
}

impl Move {
    pub fn position(&self) -> Position {
        Position::new(self.row, self.column)
    }
}

/// Turn-based game controller.
///
/// `outcome` is `None` while the game is in progress. Once it is set the
/// board is frozen: every move is rejected with [`InvalidMove::GameOver`]
/// until the last move is undone or the game is reset.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    first_player: Player,
    outcome: Option<GameOutcome>,
    history: Vec<Move>,
}

impl GameState {
    /// Create initial game state on a standard board
    pub fn initial() -> Self {
        Self::start(Board::new(), Player::Red) // Red starts
    }

    /// Start a game with the configured rules.
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        let board = Board::with_config(config.board)?;
        Ok(Self::start(board, config.first_player))
    }

    fn start(board: Board, first_player: Player) -> Self {
        GameState {
            board,
            current_player: first_player,
            first_player,
            outcome: None,
            history: Vec::new(),
        }
    }

    /// Get current player. After a win this is still the winner.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Get list of legal columns (not full)
    pub fn legal_actions(&self) -> LegalActions {
        if self.is_terminal() {
            return LegalActions::new();
        }

        (0..self.board.columns())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Cells of the run that won the game
    pub fn winning_line(&self) -> Option<Vec<Position>> {
        match self.outcome {
            Some(GameOutcome::Winner(_)) => {
                let last = self.last_move()?;
                win::winning_line(&self.board, last.position())
            }
            _ => None,
        }
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, column: usize) -> Result<GameState, InvalidMove> {
        let mut next = self.clone();
        next.apply_move_mut(column)?;
        Ok(next)
    }

    /// Apply move in place. A rejected move leaves the state unchanged.
    pub fn apply_move_mut(&mut self, column: usize) -> Result<Move, InvalidMove> {
        if self.is_terminal() {
            return Err(InvalidMove::GameOver);
        }

        let player = self.current_player;
        let row = self.board.drop_piece(column, player.to_cell())?;
        let mv = Move {
            player,
            column,
            row,
        };
        self.history.push(mv);
        log::debug!("{} dropped in column {} (row {})", player, column, row);

        if win::check_win(&self.board, mv.position()) {
            self.outcome = Some(GameOutcome::Winner(player));
            log::info!("{} wins after {} moves", player, self.history.len());
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
            log::info!("draw after {} moves", self.history.len());
        } else {
            self.current_player = player.other();
        }

        Ok(mv)
    }

    /// Take back the last move. Returns `None` on an empty history.
    pub fn undo(&mut self) -> Option<Move> {
        let mv = self.history.pop()?;
        self.board.remove_top(mv.column);
        self.current_player = mv.player;
        self.outcome = None;
        log::debug!("undid {} in column {}", mv.player, mv.column);
        Some(mv)
    }

    /// Clear the board and start over with the same rules.
    pub fn reset(&mut self) {
        self.board = Board::empty(self.board.config());
        self.current_player = self.first_player;
        self.outcome = None;
        self.history.clear();
        log::info!("game reset");
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
