mod command;
mod session;

use std::io;

use scoreboard::Scoreboard;

fn main() -> Result<(), anyhow::Error> {
    // Initialize tracing; logs go to stderr so stdout carries only replies
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    tracing::info!("Starting scoreboard console");

    let board = Scoreboard::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    session::run(&board, stdin.lock(), &mut stdout)?;

    tracing::info!(live_matches = board.len(), "Console closed");
    Ok(())
}
