//! Console session: reads commands, drives a scoreboard, writes replies

use std::io::{BufRead, Write};

use scoreboard::Scoreboard;
use tracing::debug;

use crate::command::{Command, HELP};

/// Whether the session should keep reading input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// Run commands from `input` until it ends or a `quit` command is read
pub fn run<R: BufRead, W: Write>(board: &Scoreboard, input: R, output: &mut W) -> anyhow::Result<()> {
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        if execute(board, &line, output)? == Flow::Stop {
            break;
        }
    }
    output.flush()?;
    Ok(())
}

/// Execute a single command line
///
/// Parse and board errors are reported to `output`; only I/O and
/// serialization failures are returned.
pub fn execute<W: Write>(board: &Scoreboard, line: &str, output: &mut W) -> anyhow::Result<Flow> {
    let command = match Command::parse(line) {
        Ok(command) => command,
        Err(err) => {
            debug!(line, error = %err, "Unparseable command");
            writeln!(output, "error: {}", err)?;
            return Ok(Flow::Continue);
        }
    };

    match command {
        Command::Start(request) => match board.apply_start(request) {
            Ok(match_id) => writeln!(output, "{}", match_id)?,
            Err(err) => writeln!(output, "error: {}", err.reason())?,
        },
        Command::Update(request) => match board.apply_update(request) {
            Ok(()) => writeln!(output, "ok")?,
            Err(err) => writeln!(output, "error: {}", err.reason())?,
        },
        Command::Terminate(request) => match board.apply_terminate(request) {
            Ok(()) => writeln!(output, "ok")?,
            Err(err) => writeln!(output, "error: {}", err.reason())?,
        },
        Command::Summary => {
            let summary = board.summary();
            if !summary.is_empty() {
                writeln!(output, "{}", summary)?;
            }
        }
        Command::Snapshot => {
            writeln!(output, "{}", serde_json::to_string(&board.snapshot())?)?;
        }
        Command::Stats => {
            writeln!(output, "{}", serde_json::to_string(&board.metrics())?)?;
        }
        Command::Help => writeln!(output, "{}", HELP)?,
        Command::Quit => return Ok(Flow::Stop),
    }

    Ok(Flow::Continue)
}
