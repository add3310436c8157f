use super::{select_text, selector};
use crate::error::Result;
use crate::generic_structs::MatchupRecord;
use scraper::{ElementRef, Html, Selector};

struct Selectors {
    /// Exact class attribute, other containers merely sharing a class are not matchups
    matchups: &'static str,
    rows: &'static str,
    team: &'static str,
    score: &'static str,
}

const SELECTORS: Selectors = Selectors {
    matchups: "[class=\"ptsBased matchup\"]",
    rows: "tr",
    team: "td.team div.name a",
    score: "td.score",
};

/// One record per matchup container, top team first. A missing row just leaves its
/// team and score empty.
pub fn extract_matchups(doc: &Html) -> Result<Vec<MatchupRecord>> {
    let matchups = selector(SELECTORS.matchups)?;
    let rows = selector(SELECTORS.rows)?;
    let team = selector(SELECTORS.team)?;
    let score = selector(SELECTORS.score)?;

    let cell = |row: Option<&ElementRef>, selector: &Selector| {
        row.map(|row| select_text(*row, selector))
            .unwrap_or_default()
    };

    Ok(doc
        .select(&matchups)
        .map(|matchup| {
            let rows: Vec<_> = matchup.select(&rows).collect();
            let (top, bottom) = (rows.first(), rows.get(1));
            let (team_top, score_top) = (cell(top, &team), cell(top, &score));
            let (team_bottom, score_bottom) = (cell(bottom, &team), cell(bottom, &score));
            MatchupRecord::new(
                (team_top.as_str(), score_top.as_str()),
                (team_bottom.as_str(), score_bottom.as_str()),
            )
        })
        .collect())
}
