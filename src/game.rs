use std::fmt;

use crate::error::Result;

/// Where a game stands after the moves played so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus<P> {
    InProgress,
    Won(P),
    Tied,
}

/// Contract the console controller drives. `Display` renders the board.
pub trait Game: fmt::Display {
    type Player: PartialEq + fmt::Debug + fmt::Display + Copy;
    type Board: Clone;

    /// Place the current player's mark at `(row, col)`, zero-based.
    ///
    /// Leaves the game untouched on error.
    fn play(&mut self, row: usize, col: usize) -> Result<()>;

    fn current_player(&self) -> Self::Player;

    fn is_over(&self) -> bool;

    fn winner(&self) -> Option<Self::Player>;

    /// Independent copy of the board; changing it never affects the game.
    fn board(&self) -> Self::Board;

    fn mark_at(&self, row: usize, col: usize) -> Result<Option<Self::Player>>;

    fn available_moves(&self) -> Vec<(usize, usize)>;

    fn status(&self) -> GameStatus<Self::Player> {
        match self.winner() {
            Some(player) => GameStatus::Won(player),
            None if self.is_over() => GameStatus::Tied,
            None => GameStatus::InProgress,
        }
    }
}
