//! Urls for the three pages we scrape.
//!
//! Values are substituted as they are, the site expects the query string exactly like
//! this and never got anything escaped.

use crate::codes;
use crate::error::{FantasyError, Result};
use crate::generic_structs::{CodeKind, Warning};
use std::fmt;
use std::str::FromStr;

pub const MIN_WEEK: u8 = 1;
pub const MAX_WEEK: u8 = 13;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    PlayerSearch,
    Scoreboard,
    Activity,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::PlayerSearch => "freeagency",
            Endpoint::Scoreboard => "scoreboard",
            Endpoint::Activity => "recentactivity",
        }
    }
}

impl FromStr for Endpoint {
    type Err = FantasyError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "player_search" => Ok(Endpoint::PlayerSearch),
            "scoreboard" => Ok(Endpoint::Scoreboard),
            "activity" => Ok(Endpoint::Activity),
            other => Err(FantasyError::UnknownEndpoint(other.to_string())),
        }
    }
}

/// A matchup period
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Week(u8);

impl Week {
    pub fn new(week: u8) -> Result<Self> {
        if (MIN_WEEK..=MAX_WEEK).contains(&week) {
            Ok(Week(week))
        } else {
            Err(week_error())
        }
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn week_error() -> FantasyError {
    FantasyError::Validation(format!(
        "Please specify a week from {} - {}",
        MIN_WEEK, MAX_WEEK
    ))
}

/// Empty means the current week, which the site picks when no period is given.
pub fn validate_week(input: &str) -> Result<Option<Week>> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    // Digits only, u8 parsing alone would let "+7" through
    if !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(week_error());
    }
    let week: u8 = input.parse().map_err(|_| week_error())?;
    Week::new(week).map(Some)
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryParams {
    pub league_id: String,
    pub season_id: String,
    pub week: Option<Week>,
    pub position_filter: Option<String>,
    pub search_term: Option<String>,
}

impl QueryParams {
    pub fn new(league_id: &str, season_id: &str) -> Self {
        QueryParams {
            league_id: league_id.to_string(),
            season_id: season_id.to_string(),
            ..Default::default()
        }
    }

    pub fn week(mut self, week: Option<Week>) -> Self {
        self.week = week;
        self
    }

    pub fn search(mut self, term: &str) -> Self {
        self.search_term = Some(term.to_string());
        self
    }

    pub fn position(mut self, position: Option<&str>) -> Self {
        self.position_filter = position.map(|p| p.to_string());
        self
    }

    /// A position filter we have no id for. It is left out of the url.
    pub fn unknown_position(&self) -> Option<Warning> {
        let position = self.position_filter.as_deref()?;
        match codes::position_id(position) {
            Some(_) => None,
            None => Some(Warning::UnknownCode {
                kind: CodeKind::Position,
                code: position.to_lowercase(),
            }),
        }
    }

    /// Key/value pairs in the order they go on the wire
    fn pairs(&self, endpoint: Endpoint) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("leagueId", self.league_id.clone()),
            ("seasonId", self.season_id.clone()),
        ];
        match endpoint {
            Endpoint::PlayerSearch => {
                pairs.push(("avail", String::from("-1")));
                pairs.push(("search", self.search_term.clone().unwrap_or_default()));
                if let Some(id) = self.position_filter.as_deref().and_then(codes::position_id) {
                    pairs.push(("position", id.to_string()));
                    pairs.push(("slotCategoryId", String::from("2")));
                }
            }
            Endpoint::Scoreboard => {
                if let Some(week) = self.week {
                    pairs.push(("matchupPeriodId", week.to_string()));
                }
            }
            Endpoint::Activity => {}
        }
        pairs
    }
}

pub fn build_url(base_url: &str, endpoint: Endpoint, params: &QueryParams) -> String {
    let query = params
        .pairs(endpoint)
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&");
    format!("{}/{}?{}", base_url, endpoint.path(), query)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://games.espn.go.com/ffl";

    fn params() -> QueryParams {
        QueryParams::new("123", "2015")
    }

    #[test]
    fn player_search_url() {
        let url = build_url(BASE, Endpoint::PlayerSearch, &params().search("Tom Brady"));
        assert_eq!(
            url,
            "http://games.espn.go.com/ffl/freeagency?leagueId=123&seasonId=2015&avail=-1&search=Tom Brady"
        );
    }

    #[test]
    fn player_search_with_position() {
        let p = params().search("Smith").position(Some("RB"));
        assert_eq!(
            build_url(BASE, Endpoint::PlayerSearch, &p),
            "http://games.espn.go.com/ffl/freeagency?leagueId=123&seasonId=2015&avail=-1&search=Smith&position=2&slotCategoryId=2"
        );
    }

    #[test]
    fn unknown_position_is_ignored() {
        let p = params().search("Smith").position(Some("LB"));
        assert!(build_url(BASE, Endpoint::PlayerSearch, &p).ends_with("search=Smith"));
        assert_eq!(
            p.unknown_position(),
            Some(Warning::UnknownCode {
                kind: CodeKind::Position,
                code: String::from("lb"),
            })
        );
        assert_eq!(params().search("Smith").position(Some("rb")).unknown_position(), None);
        assert_eq!(params().search("Smith").unknown_position(), None);
    }

    #[test]
    fn scoreboard_week_only_when_asked() {
        assert_eq!(
            build_url(BASE, Endpoint::Scoreboard, &params()),
            "http://games.espn.go.com/ffl/scoreboard?leagueId=123&seasonId=2015"
        );
        let week = Week::new(7).unwrap();
        assert_eq!(
            build_url(BASE, Endpoint::Scoreboard, &params().week(Some(week))),
            "http://games.espn.go.com/ffl/scoreboard?leagueId=123&seasonId=2015&matchupPeriodId=7"
        );
    }

    #[test]
    fn activity_url() {
        assert_eq!(
            build_url(BASE, Endpoint::Activity, &params()),
            "http://games.espn.go.com/ffl/recentactivity?leagueId=123&seasonId=2015"
        );
    }

    #[test]
    fn endpoint_names() {
        assert_eq!("scoreboard".parse::<Endpoint>().unwrap(), Endpoint::Scoreboard);
        assert_eq!("activity".parse::<Endpoint>().unwrap(), Endpoint::Activity);
        assert!(matches!(
            "standings".parse::<Endpoint>(),
            Err(FantasyError::UnknownEndpoint(_))
        ));
    }

    #[test]
    fn weeks() {
        assert_eq!(validate_week("").unwrap(), None);
        assert_eq!(validate_week("1").unwrap().map(|w| w.get()), Some(1));
        assert_eq!(validate_week("13").unwrap().map(|w| w.get()), Some(13));
        assert_eq!(validate_week("07").unwrap().map(|w| w.get()), Some(7));
        for bad in ["0", "14", "-1", "+7", "abc", "7.5", "300", "1 2"] {
            match validate_week(bad) {
                Err(FantasyError::Validation(msg)) => {
                    assert_eq!(msg, "Please specify a week from 1 - 13")
                }
                other => panic!("{} should not validate: {:?}", bad, other),
            }
        }
    }
}
