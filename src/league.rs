use crate::config::Config;
use crate::error::Result;
use crate::extract;
use crate::fetch::{fetch_document, Fetch, HttpFetcher};
use crate::generic_structs::{ActivityEntry, Extracted, MatchupRecord, PlayerRecord};
use crate::query::{build_url, Endpoint, QueryParams, Week};

/// One league's pages. Every call does its own fetch and parse, nothing is kept
/// between calls.
#[derive(Debug)]
pub struct League<F = HttpFetcher> {
    config: Config,
    fetcher: F,
}

impl League<HttpFetcher> {
    pub fn new(config: Config) -> Result<Self> {
        let fetcher = HttpFetcher::new(&config)?;
        Ok(League { config, fetcher })
    }
}

impl<F: Fetch> League<F> {
    pub fn with_fetcher(config: Config, fetcher: F) -> Self {
        League { config, fetcher }
    }

    fn params(&self) -> QueryParams {
        QueryParams::new(&self.config.league_id, &self.config.season_id)
    }

    pub fn url(&self, endpoint: Endpoint, params: &QueryParams) -> String {
        build_url(&self.config.base_url, endpoint, params)
    }

    /// Free agency search by name, optionally narrowed to a position code like "rb"
    pub fn player_search(
        &self,
        search: &str,
        position: Option<&str>,
    ) -> Result<Extracted<PlayerRecord>> {
        let params = self.params().search(search).position(position);
        let url = self.url(Endpoint::PlayerSearch, &params);
        log::debug!("Searching for player at {}", url);
        let doc = fetch_document(&self.fetcher, &url)?;
        let mut players = extract::extract_players(&doc)?;
        if let Some(warning) = params.unknown_position() {
            players.warn(warning);
        }
        Ok(players)
    }

    /// Without a week the site shows the current matchup period
    pub fn scoreboard(&self, week: Option<Week>) -> Result<Vec<MatchupRecord>> {
        let url = self.url(Endpoint::Scoreboard, &self.params().week(week));
        log::debug!("Searching for score at {}", url);
        let doc = fetch_document(&self.fetcher, &url)?;
        extract::extract_matchups(&doc)
    }

    pub fn recent_activity(&self) -> Result<Extracted<ActivityEntry>> {
        let url = self.url(Endpoint::Activity, &self.params());
        log::debug!("Searching for league activity at {}", url);
        let doc = fetch_document(&self.fetcher, &url)?;
        extract::extract_activity(&doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::StaticFetcher;
    use crate::generic_structs::{CodeKind, Warning};

    const BASE: &str = "http://fixtures.test/ffl";

    fn config() -> Config {
        Config {
            base_url: BASE.to_string(),
            ..Config::new("42").unwrap()
        }
    }

    #[test]
    fn search_hits_free_agency() {
        let fetcher = StaticFetcher::new().page(
            "http://fixtures.test/ffl/freeagency?leagueId=42&seasonId=2015&avail=-1&search=Smith&position=2&slotCategoryId=2",
            include_str!("extract/fixtures/freeagency.html"),
        );
        let league = League::with_fetcher(config(), &fetcher);
        let players = league.player_search("Smith", Some("rb")).unwrap();
        assert_eq!(players.records.len(), 4);
    }

    #[test]
    fn unknown_position_is_reported() {
        let _ = env_logger::builder().is_test(true).try_init();

        let fetcher = StaticFetcher::new().page(
            "http://fixtures.test/ffl/freeagency?leagueId=42&seasonId=2015&avail=-1&search=Smith",
            include_str!("extract/fixtures/freeagency.html"),
        );
        let league = League::with_fetcher(config(), &fetcher);
        let players = league.player_search("Smith", Some("LB")).unwrap();
        let position_warnings: Vec<_> = players
            .warnings
            .iter()
            .filter(|w| matches!(w, Warning::UnknownCode { kind: CodeKind::Position, .. }))
            .collect();
        assert_eq!(
            position_warnings,
            vec![&Warning::UnknownCode {
                kind: CodeKind::Position,
                code: String::from("lb"),
            }]
        );
    }

    #[test]
    fn scoreboard_for_week() {
        let fetcher = StaticFetcher::new().page(
            "http://fixtures.test/ffl/scoreboard?leagueId=42&seasonId=2015&matchupPeriodId=3",
            include_str!("extract/fixtures/scoreboard.html"),
        );
        let league = League::with_fetcher(config(), &fetcher);
        let matchups = league.scoreboard(Some(Week::new(3).unwrap())).unwrap();
        assert_eq!(matchups.len(), 3);
    }

    #[test]
    fn failed_fetch_gives_no_partial_results() {
        let league = League::with_fetcher(config(), StaticFetcher::new());
        let err = league.recent_activity().unwrap_err();
        assert!(err.is_fetch());
    }
}
