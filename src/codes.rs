//! ESPN's short codes and what they stand for.

/// Position filter values for the free agency search
pub const POSITION_CODES: &[(&str, u8)] = &[
    ("qb", 0),
    ("rb", 2),
    ("wr", 4),
    ("te", 6),
    ("flex", 23),
    ("d", 16),
    ("k", 17),
];

/// Player status codes as they show up behind the team and position
pub const STATUS_CODES: &[(&str, &str)] = &[
    ("ir", "injured"),
    ("o", "out"),
    ("p", "probable"),
    ("q", "questionable"),
    ("sspd", "suspended"),
];

/// Case insensitive lookup of the search filter id for a position
pub fn position_id(code: &str) -> Option<u8> {
    let code = code.to_lowercase();
    POSITION_CODES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, id)| *id)
}

#[derive(Debug, Clone, PartialEq)]
pub enum Decoded {
    Known(&'static str),
    /// Not in the table, holds the lowercased code
    Unknown(String),
}

impl Decoded {
    pub fn into_label(self) -> String {
        match self {
            Decoded::Known(label) => label.to_string(),
            Decoded::Unknown(code) => code,
        }
    }
}

/// Unknown codes are not an error, the site may add new ones at any time.
pub fn decode_status(code: &str) -> Decoded {
    let code = code.to_lowercase();
    match STATUS_CODES.iter().find(|(known, _)| *known == code) {
        Some((_, label)) => Decoded::Known(*label),
        None => Decoded::Unknown(code),
    }
}
