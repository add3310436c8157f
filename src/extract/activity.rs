use super::{nth_text, selector};
use crate::error::Result;
use crate::generic_structs::{ActivityEntry, Extracted, Warning};
use scraper::Html;

struct Selectors {
    /// Rows of the activity table only, not of tables nested inside its cells
    rows: &'static str,
    cells: &'static str,
    /// Title row and column headings
    header_rows: usize,
    detail_cell: usize,
}

const SELECTORS: Selectors = Selectors {
    rows: "[class=\"games-fullcol games-fullcol-extramargin\"] > table > tbody > tr, \
           [class=\"games-fullcol games-fullcol-extramargin\"] > table > tr",
    cells: "td",
    header_rows: 2,
    detail_cell: 2,
};

/// The detail text of every activity row, newest first as the page lists them
pub fn extract_activity(doc: &Html) -> Result<Extracted<ActivityEntry>> {
    let rows = selector(SELECTORS.rows)?;
    let cells = selector(SELECTORS.cells)?;

    let mut extracted = Extracted::default();
    for row in doc.select(&rows).skip(SELECTORS.header_rows) {
        match nth_text(row, &cells, SELECTORS.detail_cell) {
            Some(text) => extracted.records.push(ActivityEntry(text)),
            None => extracted.warn(Warning::MalformedRow {
                text: row.text().collect(),
            }),
        }
    }
    Ok(extracted)
}
