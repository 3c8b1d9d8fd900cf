//! Two-player Tic-Tac-Toe: a board model with turn tracking and win/draw
//! detection, driven by a console controller over any reader and writer.

pub mod controller;
pub mod error;
pub mod game;
pub mod tic_tac_toe;

pub use controller::ConsoleController;
pub use error::{Error, Result};
pub use game::{Game, GameStatus};
pub use tic_tac_toe::{Board, Player, TicTacToe};
