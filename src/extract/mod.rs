//! Pulling records out of the scraped pages.
//!
//! Every extractor keeps its css selectors and cell positions in one table at the top
//! of its module. When the site changes its markup, that table is what needs updating.

pub mod activity;
pub mod players;
pub mod scoreboard;

pub use activity::extract_activity;
pub use players::extract_players;
pub use scoreboard::extract_matchups;

use crate::error::{FantasyError, Result};
use scraper::{ElementRef, Selector};

pub(crate) fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| FantasyError::Selector {
        selector: css.to_string(),
        message: format!("{:?}", e),
    })
}

/// All text below the element, untrimmed
pub(crate) fn text_of(element: ElementRef) -> String {
    element.text().collect()
}

/// Text of every match joined together, empty if nothing matches
pub(crate) fn select_text(element: ElementRef, selector: &Selector) -> String {
    element.select(selector).map(text_of).collect()
}

/// Text of the nth match, None if there are not that many
pub(crate) fn nth_text(element: ElementRef, selector: &Selector, n: usize) -> Option<String> {
    element.select(selector).nth(n).map(text_of)
}
