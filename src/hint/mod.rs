//! Completion hint type and prefix filtering.
//!
//! A [`Hint`] is one completion candidate: either a bare token, or a token
//! paired with a human-readable description. Hints have no identity beyond
//! their content and are produced fresh per query; filtering compares the
//! token text only.

/// One completion candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hint {
    /// Bare completion token.
    Token(String),

    /// Completion token with a human-readable description.
    ///
    /// Only line-oriented shells can display the description; the
    /// space-oriented renderer discards it.
    Described(String, String),
}

impl Hint {
    /// Create a described hint.
    pub fn described(token: impl Into<String>, description: impl Into<String>) -> Self {
        Hint::Described(token.into(), description.into())
    }

    /// The token text this hint completes to.
    pub fn token(&self) -> &str {
        match self {
            Hint::Token(token) => token,
            Hint::Described(token, _) => token,
        }
    }

    /// The description, if any.
    pub fn description(&self) -> Option<&str> {
        match self {
            Hint::Token(_) => None,
            Hint::Described(_, description) => Some(description),
        }
    }
}

impl From<&str> for Hint {
    fn from(token: &str) -> Self {
        Hint::Token(token.to_owned())
    }
}

impl From<String> for Hint {
    fn from(token: String) -> Self {
        Hint::Token(token)
    }
}

impl From<(&str, &str)> for Hint {
    fn from((token, description): (&str, &str)) -> Self {
        Hint::Described(token.to_owned(), description.to_owned())
    }
}

impl From<(String, String)> for Hint {
    fn from((token, description): (String, String)) -> Self {
        Hint::Described(token, description)
    }
}

/// Keep only the hints whose token starts with `prefix`, preserving order.
///
/// Prefix matching is case-sensitive and byte-wise; the empty prefix
/// matches everything.
pub fn filter_hints(hints: Vec<Hint>, prefix: &str) -> Vec<Hint> {
    hints
        .into_iter()
        .filter(|hint| hint.token().starts_with(prefix))
        .collect()
}
