//! Win detection. A win is a contiguous run of at least `connect` discs of
//! one player along a row, a column or either diagonal.

use super::board::{Board, Cell, Position};
use super::player::Player;

/// The four line directions as `(row step, col step)`. Each also covers its
/// opposite, so scanning both ways along these finds every run.
const DIRECTIONS: [(isize, isize); 4] = [
    (0, 1),  // horizontal
    (1, 0),  // vertical
    (-1, 1), // diagonal up (/)
    (1, 1),  // diagonal down (\)
];

/// Count discs equal to `cell` strictly beyond `pos`, stepping by `(dr, dc)`.
fn run_length(board: &Board, pos: Position, cell: Cell, dr: isize, dc: isize) -> usize {
    let mut count = 0;
    let mut r = pos.row as isize + dr;
    let mut c = pos.col as isize + dc;
    while board.cell_at(r, c) == Some(cell) {
        count += 1;
        r += dr;
        c += dc;
    }
    count
}

/// Check if the disc at `last_move` completes a winning run.
pub fn check_win(board: &Board, last_move: Position) -> bool {
    winning_line(board, last_move).is_some()
}

/// The full winning run through `last_move`, ordered along its direction.
/// When the disc completes runs in several directions the first one found
/// (horizontal, vertical, `/`, `\`) is returned.
pub fn winning_line(board: &Board, last_move: Position) -> Option<Vec<Position>> {
    if board.connect() == 0 {
        return None;
    }
    let cell = match board.cell_at(last_move.row as isize, last_move.col as isize) {
        Some(cell) if cell != Cell::Empty => cell,
        _ => return None,
    };

    for &(dr, dc) in &DIRECTIONS {
        let back = run_length(board, last_move, cell, -dr, -dc);
        let forward = run_length(board, last_move, cell, dr, dc);
        let total = back + 1 + forward;
        if total >= board.connect() {
            let start_row = last_move.row as isize - back as isize * dr;
            let start_col = last_move.col as isize - back as isize * dc;
            let line = (0..total as isize)
                .map(|i| {
                    Position::new((start_row + i * dr) as usize, (start_col + i * dc) as usize)
                })
                .collect();
            return Some(line);
        }
    }

    None
}

/// Scan the whole board for a winning run owned by `player`.
pub fn has_connection(board: &Board, player: Player) -> bool {
    let cell = player.to_cell();
    let need = board.connect();
    if need == 0 {
        return false;
    }

    for row in 0..board.rows() {
        for col in 0..board.columns() {
            if board.get(row, col) != cell {
                continue;
            }
            let pos = Position::new(row, col);
            // Only count forward so each run is measured from its first cell.
            if DIRECTIONS
                .iter()
                .any(|&(dr, dc)| 1 + run_length(board, pos, cell, dr, dc) >= need)
            {
                return true;
            }
        }
    }

    false
}
