use std::fmt;

/// One free agency search hit
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerRecord {
    pub name: String,
    pub team: String,
    /// Passed through as scraped, e.g. "RB"
    pub position: String,
    pub owner: String,
    pub projection: String,
    /// Decoded status label, or the raw lowercase code when it is not one we know
    pub note: Option<String>,
}

/// One head to head matchup. Both fields hold the top line, the bottom line and a
/// trailing blank line, so the table shows the pairs visually separated.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchupRecord {
    pub teams: String,
    pub scores: String,
}

impl MatchupRecord {
    pub fn new(top: (&str, &str), bottom: (&str, &str)) -> Self {
        MatchupRecord {
            teams: format!("{}\n{}\n ", top.0, bottom.0),
            scores: format!("{}\n{}\n ", top.1, bottom.1),
        }
    }
}

/// A line from the recent activity feed, kept as the site wrote it
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityEntry(pub String);

impl fmt::Display for ActivityEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Anything that can be shown as a table row. `cells` must follow `HEADERS`.
pub trait Record {
    const HEADERS: &'static [&'static str];

    fn cells(&self) -> Vec<String>;
}

impl Record for PlayerRecord {
    const HEADERS: &'static [&'static str] =
        &["player", "team", "position", "owner", "projection", "note"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.team.clone(),
            self.position.clone(),
            self.owner.clone(),
            self.projection.clone(),
            self.note.clone().unwrap_or_default(),
        ]
    }
}

impl Record for MatchupRecord {
    const HEADERS: &'static [&'static str] = &["team", "score"];

    fn cells(&self) -> Vec<String> {
        vec![self.teams.clone(), self.scores.clone()]
    }
}

impl Record for ActivityEntry {
    const HEADERS: &'static [&'static str] = &["activity"];

    fn cells(&self) -> Vec<String> {
        vec![self.0.clone()]
    }
}

/// Headers plus rows, ready for [`crate::table::format_results`]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultSet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ResultSet {
    pub fn from_records<T: Record>(records: &[T]) -> Self {
        ResultSet {
            headers: T::HEADERS.iter().map(|h| h.to_string()).collect(),
            rows: records.iter().map(Record::cells).collect(),
        }
    }

    /// No rows means "no results", the caller decides what to say then
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Something odd about a single row. The row is either dropped or kept with the raw
/// value, the rest of the page is still processed.
#[derive(Debug, Clone, PartialEq)]
pub enum Warning {
    /// Row could not be parsed and was dropped
    MalformedRow { text: String },
    /// Code missing from the lookup table, kept verbatim
    UnknownCode { kind: CodeKind, code: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeKind {
    Position,
    Status,
}

impl fmt::Display for CodeKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CodeKind::Position => write!(f, "position"),
            CodeKind::Status => write!(f, "status"),
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Warning::MalformedRow { text } => write!(f, "Got a weird cell: {:?}", text),
            Warning::UnknownCode { kind, code } => {
                write!(f, "{} {} missing from {} map", kind, code, kind)
            }
        }
    }
}

/// Records from one page plus whatever was odd about it
#[derive(Debug, Clone, PartialEq)]
pub struct Extracted<T> {
    pub records: Vec<T>,
    pub warnings: Vec<Warning>,
}

impl<T> Default for Extracted<T> {
    fn default() -> Self {
        Extracted {
            records: vec![],
            warnings: vec![],
        }
    }
}

impl<T> Extracted<T> {
    /// Logs the warning as well, so it is only ever reported from here.
    pub(crate) fn warn(&mut self, warning: Warning) {
        log::warn!("{}", warning);
        self.warnings.push(warning);
    }
}
