//! Console front end: reads moves as whitespace-separated tokens and writes
//! the board and status lines after every round.

use std::collections::VecDeque;
use std::fmt::Display;
use std::io::{BufRead, Write};

use log::{debug, info, warn};

use crate::error::{Error, Result};
use crate::game::{Game, GameStatus};

/// Splits a line-oriented source into whitespace-separated tokens, reading a
/// new line only once the previous one is used up.
struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// `Ok(None)` once the source is exhausted.
    fn next_token(&mut self) -> Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = Vec::new();
            if self.reader.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            // Undecodable bytes become U+FFFD and surface as a bad token.
            let line = String::from_utf8_lossy(&line);
            self.pending.extend(line.split_whitespace().map(str::to_owned));
        }
        Ok(self.pending.pop_front())
    }
}

enum Input {
    /// An integer token, kept as typed.
    Number(String),
    Quit,
}

pub struct ConsoleController<R, W> {
    input: Tokens<R>,
    out: W,
}

impl<R: BufRead, W: Write> ConsoleController<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self {
            input: Tokens::new(input),
            out,
        }
    }

    /// Runs one game to completion, or until the player types `q`.
    ///
    /// Fails with [`Error::InvalidModel`] when `model` is `None` and with
    /// [`Error::Aborted`] when output cannot be written or input runs out
    /// before the game is decided.
    pub fn play_game<G: Game>(&mut self, model: Option<&mut G>) -> Result<()> {
        let game = model.ok_or(Error::InvalidModel)?;

        while !game.is_over() {
            self.print_line(&*game)?;
            self.print_line(format_args!("Enter a move for {}:", game.current_player()))?;

            loop {
                let row = match self.read_number()? {
                    Input::Number(n) => n,
                    Input::Quit => return self.quit(game),
                };
                let col = match self.read_number()? {
                    Input::Number(n) => n,
                    Input::Quit => return self.quit(game),
                };

                match Self::apply(game, &row, &col) {
                    Ok(()) => break,
                    Err(Error::OutOfRange { .. } | Error::CellOccupied { .. }) => {
                        debug!("rejected move ({row}, {col})");
                        self.print_line(format_args!("Not a valid move: {row}, {col}"))?;
                    }
                    Err(Error::GameAlreadyOver) => break,
                    Err(err) => return Err(err),
                }
            }
        }

        self.print_line(&*game)?;
        match game.status() {
            GameStatus::Won(player) => {
                info!("{player} won");
                self.print_line(format_args!("Game is over! {player} wins."))?;
            }
            _ => {
                info!("tie game");
                self.print_line("Game is over! Tie game.")?;
            }
        }
        self.out.flush()?;
        Ok(())
    }

    /// Plays a one-based move typed by the user.
    fn apply<G: Game>(game: &mut G, row: &str, col: &str) -> Result<()> {
        game.play(to_index(row), to_index(col))
    }

    /// Reads until a number or the quit signal turns up, reporting anything
    /// else along the way.
    fn read_number(&mut self) -> Result<Input> {
        loop {
            let Some(token) = self.input.next_token()? else {
                warn!("input exhausted before the game was decided");
                return Err(Error::Aborted("input exhausted".to_owned()));
            };
            if token.eq_ignore_ascii_case("q") {
                return Ok(Input::Quit);
            }
            if is_integer(&token) {
                return Ok(Input::Number(token));
            }
            self.print_line(format_args!("Not a valid number: {token}"))?;
        }
    }

    fn quit<G: Game>(&mut self, game: &G) -> Result<()> {
        info!("game quit by player");
        self.print_line("Game quit! Ending game state:")?;
        self.print_line(game)?;
        self.out.flush()?;
        Ok(())
    }

    fn print_line(&mut self, line: impl Display) -> Result<()> {
        writeln!(self.out, "{line}")?;
        Ok(())
    }
}

/// An optional sign followed by at least one ASCII digit, of any length.
fn is_integer(token: &str) -> bool {
    let digits = token.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(token);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// One-based integer token to a zero-based index. Anything below the board or
/// too large to represent maps past it, so the model reports it as out of range.
fn to_index(token: &str) -> usize {
    token
        .parse::<i64>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| usize::try_from(i).ok())
        .unwrap_or(usize::MAX)
}
