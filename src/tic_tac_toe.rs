use std::fmt;

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::game::Game;

pub const SIZE: usize = 3;

const CELLS: usize = SIZE * SIZE;

/// No line of three can exist before the first player's third mark.
const MIN_ROUNDS_TO_WIN: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn other(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let glyph = match self {
            Player::X => "X",
            Player::O => "O",
        };
        f.write_str(glyph)
    }
}

pub type Board = [[Option<Player>; SIZE]; SIZE];

#[derive(Debug, Clone, Default)]
pub struct TicTacToe {
    spots: Board,
    rounds: usize,
}

impl TicTacToe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of moves made so far.
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    fn check_bounds(row: usize, col: usize) -> Result<()> {
        if row >= SIZE || col >= SIZE {
            return Err(Error::OutOfRange { row, col });
        }
        Ok(())
    }

    fn line_owner(&self, line: [(usize, usize); SIZE]) -> Option<Player> {
        let (r, c) = line[0];
        let player = self.spots[r][c]?;
        line[1..]
            .iter()
            .all(|&(r, c)| self.spots[r][c] == Some(player))
            .then_some(player)
    }
}

impl Game for TicTacToe {
    type Player = Player;
    type Board = Board;

    fn play(&mut self, row: usize, col: usize) -> Result<()> {
        if self.is_over() {
            return Err(Error::GameAlreadyOver);
        }
        Self::check_bounds(row, col)?;
        if self.spots[row][col].is_some() {
            return Err(Error::CellOccupied { row, col });
        }

        let player = self.current_player();
        self.spots[row][col] = Some(player);
        self.rounds += 1;
        debug!("{player} played ({row}, {col}), round {}", self.rounds);
        Ok(())
    }

    fn current_player(&self) -> Player {
        if self.rounds % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    fn is_over(&self) -> bool {
        self.rounds >= CELLS || self.winner().is_some()
    }

    fn winner(&self) -> Option<Player> {
        if self.rounds < MIN_ROUNDS_TO_WIN {
            return None;
        }

        // Check rows
        for row in 0..SIZE {
            if let Some(player) = self.line_owner([(row, 0), (row, 1), (row, 2)]) {
                trace!("row {row} owned by {player}");
                return Some(player);
            }
        }

        // Check columns
        for col in 0..SIZE {
            if let Some(player) = self.line_owner([(0, col), (1, col), (2, col)]) {
                trace!("column {col} owned by {player}");
                return Some(player);
            }
        }

        // Check diagonals
        self.line_owner([(0, 0), (1, 1), (2, 2)])
            .or_else(|| self.line_owner([(0, 2), (1, 1), (2, 0)]))
    }

    fn board(&self) -> Board {
        self.spots
    }

    fn mark_at(&self, row: usize, col: usize) -> Result<Option<Player>> {
        Self::check_bounds(row, col)?;
        Ok(self.spots[row][col])
    }

    fn available_moves(&self) -> Vec<(usize, usize)> {
        if self.is_over() {
            return Vec::new();
        }
        (0..SIZE)
            .flat_map(|row| (0..SIZE).map(move |col| (row, col)))
            .filter(|&(row, col)| self.spots[row][col].is_none())
            .collect()
    }
}

impl fmt::Display for TicTacToe {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, row) in self.spots.iter().enumerate() {
            if i > 0 {
                write!(f, "\n-----------\n")?;
            }
            f.write_str(" ")?;
            for (j, spot) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(" | ")?;
                }
                match spot {
                    Some(player) => write!(f, "{player}")?,
                    None => f.write_str(" ")?,
                }
            }
        }
        Ok(())
    }
}
