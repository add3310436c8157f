//! Turns chat commands into replies.

use crate::error::{FantasyError, Result};
use crate::fetch::{Fetch, HttpFetcher};
use crate::generic_structs::ResultSet;
use crate::league::League;
use crate::query::validate_week;
use crate::table::format_results;
use log::{debug, error};

pub const FAILURE_REPLY: &str = "Sorry, I couldn't get that from ESPN right now.";

const HELP: &[&str] = &[
    "player PLAYER NAME - Replies information about this football player (add pos:rb to filter by position)",
    "score WEEK - Replies with the scoreboard for the specified week. If WEEK is empty, the current scoreboard is returned",
    "sup - Replies with the recent league activity",
];

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Player {
        name: String,
        position: Option<String>,
    },
    /// The week is kept as typed, validating it is part of answering
    Scoreboard { week: String },
    Activity,
    Help,
}

impl Command {
    /// None when the line is not meant for us
    pub fn parse(line: &str) -> Option<Command> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        if word == "player" {
            return Self::parse_player(rest);
        }
        if word == "sup" && rest.is_empty() {
            return Some(Command::Activity);
        }
        if word == "help" && rest.is_empty() {
            return Some(Command::Help);
        }

        // score, scoreboard, scoreboardboard... with the week optionally stuck to it
        let mut after = line.strip_prefix("score")?;
        while let Some(stripped) = after.strip_prefix("board") {
            after = stripped;
        }
        // "scores", "scorecard" and the like are other words
        if !after.is_empty()
            && !after.starts_with(|c: char| c.is_whitespace() || c.is_ascii_digit())
        {
            return None;
        }
        Some(Command::Scoreboard {
            week: after.trim().to_string(),
        })
    }

    fn parse_player(rest: &str) -> Option<Command> {
        let mut words: Vec<&str> = rest.split_whitespace().collect();
        let position = match words.last().and_then(|last| last.strip_prefix("pos:")) {
            Some(pos) => {
                let pos = pos.to_string();
                words.pop();
                Some(pos)
            }
            None => None,
        };
        if words.is_empty() {
            return None;
        }
        Some(Command::Player {
            name: words.join(" "),
            position,
        })
    }
}

/// Answers commands for one league. Each command gets a list of messages to send back.
#[derive(Debug)]
pub struct Handler<F = HttpFetcher> {
    league: League<F>,
}

impl<F: Fetch> Handler<F> {
    pub fn new(league: League<F>) -> Self {
        Handler { league }
    }

    /// Parses and answers a line, None if it was no command of ours
    pub fn handle(&self, line: &str) -> Option<Vec<String>> {
        Command::parse(line).map(|command| self.respond(&command))
    }

    pub fn respond(&self, command: &Command) -> Vec<String> {
        let reply = match command {
            Command::Player { name, position } => {
                debug!("Asked about player {}", name);
                self.player(name, position.as_deref())
            }
            Command::Scoreboard { week } => {
                debug!("Requested scoreboard for week '{}'", week);
                self.scoreboard(week)
            }
            Command::Activity => self.activity(),
            Command::Help => Ok(HELP.iter().map(|line| line.to_string()).collect()),
        };
        match reply {
            Ok(messages) => messages,
            Err(FantasyError::Validation(message)) => vec![message],
            Err(e) => {
                error!("Failed to answer {:?}: {}", command, e);
                vec![FAILURE_REPLY.to_string()]
            }
        }
    }

    fn player(&self, name: &str, position: Option<&str>) -> Result<Vec<String>> {
        let players = self.league.player_search(name, position)?;
        let results = ResultSet::from_records(&players.records);
        if results.is_empty() {
            Ok(vec![format!("No results found for '{}'", name)])
        } else {
            Ok(vec![format_results(&results)])
        }
    }

    fn scoreboard(&self, week: &str) -> Result<Vec<String>> {
        let week = validate_week(week)?;
        let matchups = self.league.scoreboard(week)?;
        let results = ResultSet::from_records(&matchups);
        if results.is_empty() {
            Ok(vec![String::from("No matchups found")])
        } else {
            Ok(vec![format_results(&results)])
        }
    }

    /// Raw entries, one message each
    fn activity(&self) -> Result<Vec<String>> {
        let activity = self.league.recent_activity()?;
        Ok(activity
            .records
            .into_iter()
            .map(|entry| entry.to_string())
            .collect())
    }
}
