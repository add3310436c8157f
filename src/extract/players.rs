use super::{nth_text, select_text, selector};
use crate::codes::{self, Decoded};
use crate::error::Result;
use crate::generic_structs::{CodeKind, Extracted, PlayerRecord, Warning};
use log::debug;
use scraper::Html;

struct Selectors {
    rows: &'static str,
    bio: &'static str,
    cells: &'static str,
    /// Cell positions are a contract with the free agency table layout
    owner_cell: usize,
    projection_cell: usize,
}

const SELECTORS: Selectors = Selectors {
    rows: "table.playerTableTable.tableBody tr.pncPlayerRow",
    bio: "td.playertablePlayerName",
    cells: "td",
    owner_cell: 2,
    projection_cell: 13,
};

/// What the bio cell tells us, e.g. "Tom Brady, NE QB Q"
#[derive(Debug, PartialEq)]
struct Bio<'a> {
    name: &'a str,
    team: &'a str,
    position: &'a str,
    note: Option<String>,
}

/// None when there is no team and position after the name. Only the part between
/// the first and second ", " is the bio, anything after that is ignored.
fn split_bio(text: &str) -> Option<Bio> {
    let mut parts = text.split(", ");
    let name = parts.next()?;
    let bio = parts.next()?;
    let mut chunks = bio.split_whitespace();
    let team = chunks.next()?;
    let position = chunks.next()?;
    let note = chunks.next().map(str::to_lowercase);
    Some(Bio {
        name,
        team,
        position,
        note,
    })
}

/// Rows without a bio cell are skipped quietly, rows with a bio we can't read are
/// skipped with a warning. Unknown status codes are kept as they are.
pub fn extract_players(doc: &Html) -> Result<Extracted<PlayerRecord>> {
    let rows = selector(SELECTORS.rows)?;
    let bio = selector(SELECTORS.bio)?;
    let cells = selector(SELECTORS.cells)?;

    let mut extracted = Extracted::default();
    for row in doc.select(&rows) {
        if row.select(&bio).next().is_none() {
            debug!("Skipping player row without a bio cell");
            continue;
        }
        let bio_text = select_text(row, &bio);
        let parsed = match split_bio(&bio_text) {
            Some(parsed) => parsed,
            None => {
                extracted.warn(Warning::MalformedRow {
                    text: bio_text.clone(),
                });
                continue;
            }
        };

        let note = parsed.note.map(|code| {
            let decoded = codes::decode_status(&code);
            if let Decoded::Unknown(code) = &decoded {
                extracted.warn(Warning::UnknownCode {
                    kind: CodeKind::Status,
                    code: code.clone(),
                });
            }
            decoded.into_label()
        });

        let owner = nth_text(row, &cells, SELECTORS.owner_cell).unwrap_or_default();
        let projection = nth_text(row, &cells, SELECTORS.projection_cell).unwrap_or_default();

        extracted.records.push(PlayerRecord {
            name: parsed.name.to_string(),
            team: parsed.team.to_string(),
            position: parsed.position.to_string(),
            owner,
            projection,
            note,
        });
    }
    Ok(extracted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(
        name: &str,
        team: &str,
        position: &str,
        owner: &str,
        projection: &str,
        note: Option<&str>,
    ) -> PlayerRecord {
        PlayerRecord {
            name: name.to_string(),
            team: team.to_string(),
            position: position.to_string(),
            owner: owner.to_string(),
            projection: projection.to_string(),
            note: note.map(|n| n.to_string()),
        }
    }

    #[test]
    fn bio_cells() {
        assert_eq!(
            split_bio("Smith, NE RB Q"),
            Some(Bio {
                name: "Smith",
                team: "NE",
                position: "RB",
                note: Some(String::from("q")),
            })
        );
        // nbsp between the chunks, as the site writes them
        let bio = split_bio("Tom Brady, NE\u{a0}QB").unwrap();
        assert_eq!((bio.team, bio.position, bio.note), ("NE", "QB", None));
        assert_eq!(split_bio("Smith, NE"), None);
        // "Jr." alone is the bio here, too short to read
        assert_eq!(split_bio("Odell Beckham, Jr., NYG WR"), None);
        assert_eq!(split_bio("Smith"), None);
        assert_eq!(split_bio("Smith, "), None);
    }

    #[test]
    fn parse_free_agency() {
        let _ = env_logger::builder().is_test(true).try_init();

        let doc = Html::parse_document(include_str!("fixtures/freeagency.html"));
        let extracted = extract_players(&doc).unwrap();

        assert_eq!(
            extracted.records,
            vec![
                player("Tom Brady", "NE", "QB", "Sharks", "24.1", None),
                player("Smith", "NE", "RB", "FA", "9.3", Some("questionable")),
                player("Josh Gordon", "Cle", "WR", "WA (Thu)", "0.0", Some("suspended")),
                player("Arian Foster", "Hou", "RB", "Jets", "--", Some("pup")),
            ]
        );
    }

    #[test]
    fn row_problems_become_warnings() {
        let _ = env_logger::builder().is_test(true).try_init();

        let doc = Html::parse_document(include_str!("fixtures/freeagency.html"));
        let extracted = extract_players(&doc).unwrap();

        // The header row and the row without a bio cell leave no trace
        assert_eq!(
            extracted.warnings,
            vec![
                Warning::MalformedRow {
                    text: String::from("Mystery Man, FA"),
                },
                Warning::MalformedRow {
                    text: String::from("Odell Beckham, Jr., NYG WR"),
                },
                Warning::UnknownCode {
                    kind: CodeKind::Status,
                    code: String::from("pup"),
                },
            ]
        );
    }

    #[test]
    fn nothing_found() {
        let doc = Html::parse_document("<html><body><p>No players match</p></body></html>");
        let extracted = extract_players(&doc).unwrap();
        assert!(extracted.records.is_empty());
        assert!(extracted.warnings.is_empty());
    }
}
