use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

// ASCII classes only: `\d` and `\p{Alphabetic}` would admit non-ASCII digits/letters.
static NUMERIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("numeric pattern is valid"));
static ALPHABETIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]+$").expect("alphabetic pattern is valid"));

/// Token classification categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// One or more ASCII digits and nothing else.
    Numeric,
    /// One or more ASCII letters and nothing else.
    Alphabetic,
    /// Everything else, including the empty string.
    Special,
}

impl TokenKind {
    /// Classify a single token.
    ///
    /// Numeric is checked before alphabetic; the two patterns share no
    /// characters so the order only matters for readability.
    pub fn of(token: &str) -> Self {
        if is_numeric(token) {
            TokenKind::Numeric
        } else if is_alphabetic(token) {
            TokenKind::Alphabetic
        } else {
            TokenKind::Special
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Numeric => "numeric",
            TokenKind::Alphabetic => "alphabetic",
            TokenKind::Special => "special",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// True if the token is made only of ASCII decimal digits.
pub fn is_numeric(token: &str) -> bool {
    NUMERIC_RE.is_match(token)
}

/// True if the token is made only of ASCII letters.
pub fn is_alphabetic(token: &str) -> bool {
    ALPHABETIC_RE.is_match(token)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
