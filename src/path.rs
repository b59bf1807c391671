//! Dotted key paths: `"server.http.port"` → sections `["server", "http"]`,
//! leaf `"port"`.

use std::fmt;
use std::str::FromStr;

use crate::error::NkconfError;

/// A validated dotted key.
///
/// Always holds at least one segment and never an empty one, so `""`,
/// `"a..b"` and `"a."` are rejected with [`NkconfError::InvalidKey`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DottedPath {
    sections: Vec<String>,
    leaf: String,
}

impl DottedPath {
    /// Split `key` on `.` and validate the segments.
    pub fn parse(key: &str) -> Result<Self, NkconfError> {
        Self::from_segments(key.split('.'))
    }

    /// Build a path from already split segments.
    pub fn from_segments<I, S>(segments: I) -> Result<Self, NkconfError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut sections: Vec<String> = segments.into_iter().map(Into::into).collect();
        let joined = sections.join(".");
        if sections.iter().any(|s| s.is_empty()) {
            return Err(NkconfError::InvalidKey(joined));
        }
        let leaf = sections.pop().ok_or(NkconfError::InvalidKey(joined))?;
        Ok(Self { sections, leaf })
    }

    /// Segments naming the chain of sections above the leaf. Empty for
    /// root-level keys.
    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    pub fn leaf(&self) -> &str {
        &self.leaf
    }

    pub fn is_root_level(&self) -> bool {
        self.sections.is_empty()
    }
}

impl FromStr for DottedPath {
    type Err = NkconfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for DottedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for section in &self.sections {
            write!(f, "{section}.")?;
        }
        write!(f, "{}", self.leaf)
    }
}
