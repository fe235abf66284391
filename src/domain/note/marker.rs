//! In-source marker for a voice note
//!
//! The marker is the sole wire format between recording and playback:
//! a single comment line of the form `// [Voice Note: <relative-path>]`.
//! It must remain byte-stable so previously annotated files keep working.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::error::MarkerParseError;

/// Literal text surrounding the path inside a marker line
const MARKER_OPEN: &str = "// [Voice Note:";
const MARKER_CLOSE: &str = "]";

/// A parsed marker referencing one voice note by project-relative path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    path: PathBuf,
}

impl Marker {
    /// Create a marker for a project-relative note path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The project-relative path the marker references
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Render the marker as the single source line it is inserted as
    /// (without a trailing newline).
    pub fn to_line(&self) -> String {
        format!("{} {}{}", MARKER_OPEN, self.path.display(), MARKER_CLOSE)
    }

    /// Extract a marker from one line of source text.
    ///
    /// Matches the full marker template rather than splitting on the first
    /// colon, so lines that merely contain a colon (URLs in ordinary
    /// comments, type annotations) are reported as `NoMarker` instead of
    /// yielding a garbage path. Leading indentation is tolerated.
    pub fn parse(line: &str) -> Result<Self, MarkerParseError> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Err(MarkerParseError::NoMarker);
        }

        let rest = trimmed
            .strip_prefix(MARKER_OPEN)
            .ok_or(MarkerParseError::NoMarker)?;

        let inner = rest
            .trim_end()
            .strip_suffix(MARKER_CLOSE)
            .ok_or_else(|| MarkerParseError::Malformed("missing closing bracket".to_string()))?
            .trim();

        if inner.is_empty() {
            return Err(MarkerParseError::Malformed("empty path".to_string()));
        }

        // A path containing the closing bracket would be ambiguous to re-parse
        if inner.contains('[') || inner.contains(']') {
            return Err(MarkerParseError::Malformed(
                "path contains bracket characters".to_string(),
            ));
        }

        Ok(Self::new(inner))
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_line())
    }
}
