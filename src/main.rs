use std::io;

use tictactoe_console::{ConsoleController, TicTacToe};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut game = TicTacToe::new();
    let mut controller = ConsoleController::new(io::stdin().lock(), io::stdout().lock());
    controller.play_game(Some(&mut game))?;

    Ok(())
}
