//! Command line parsing
//!
//! One command per line. Arguments the user leaves out stay absent in the
//! request so the board can report them with its own reasons.

use thiserror::Error;
use types::ids::MatchId;
use types::requests::{StartMatch, TerminateMatch, UpdateScore};

/// A parsed console command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `start <home>, <away>`
    Start(StartMatch),
    /// `update <id> <home> <away>`
    Update(UpdateScore),
    /// `terminate <id>`
    Terminate(TerminateMatch),
    Summary,
    Snapshot,
    Stats,
    Help,
    Quit,
}

/// Errors for lines that are not a well-formed command
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty command")]
    Empty,

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("invalid {field}: {value}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("too many arguments for {0}")]
    TooManyArguments(&'static str),
}

pub const HELP: &str = "\
commands:
  start <home>, <away>        start a match, prints its id
  update <id> <home> <away>   replace both scores
  terminate <id>              remove a match
  summary                     live matches, most goals first
  snapshot                    live matches as JSON
  stats                       operation counters as JSON
  help                        this text
  quit                        leave the console";

impl Command {
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb.to_ascii_lowercase().as_str() {
            "" => Err(ParseError::Empty),
            "start" => Ok(Command::Start(parse_start(rest))),
            "update" => parse_update(rest).map(Command::Update),
            "terminate" => parse_terminate(rest).map(Command::Terminate),
            "summary" => no_arguments(rest, "summary", Command::Summary),
            "snapshot" => no_arguments(rest, "snapshot", Command::Snapshot),
            "stats" => no_arguments(rest, "stats", Command::Stats),
            "help" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(ParseError::UnknownCommand(other.to_string())),
        }
    }
}

fn parse_start(rest: &str) -> StartMatch {
    if rest.is_empty() {
        return StartMatch::default();
    }
    match rest.split_once(',') {
        Some((home, away)) => StartMatch::new(home, away),
        None => StartMatch {
            home_team: Some(rest.to_string()),
            away_team: None,
        },
    }
}

fn parse_update(rest: &str) -> Result<UpdateScore, ParseError> {
    let mut args = rest.split_whitespace();
    let request = UpdateScore {
        match_id: args.next().map(parse_id).transpose()?,
        home_score: args.next().map(|v| parse_score("home score", v)).transpose()?,
        away_score: args.next().map(|v| parse_score("away score", v)).transpose()?,
    };
    if args.next().is_some() {
        return Err(ParseError::TooManyArguments("update"));
    }
    Ok(request)
}

fn parse_terminate(rest: &str) -> Result<TerminateMatch, ParseError> {
    let mut args = rest.split_whitespace();
    let request = TerminateMatch {
        match_id: args.next().map(parse_id).transpose()?,
    };
    if args.next().is_some() {
        return Err(ParseError::TooManyArguments("terminate"));
    }
    Ok(request)
}

fn no_arguments(rest: &str, name: &'static str, command: Command) -> Result<Command, ParseError> {
    if rest.is_empty() {
        Ok(command)
    } else {
        Err(ParseError::TooManyArguments(name))
    }
}

fn parse_id(value: &str) -> Result<MatchId, ParseError> {
    value
        .parse::<u64>()
        .map(MatchId::from_raw)
        .map_err(|_| ParseError::InvalidNumber {
            field: "match id",
            value: value.to_string(),
        })
}

fn parse_score(field: &'static str, value: &str) -> Result<i64, ParseError> {
    value.parse::<i64>().map_err(|_| ParseError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}
