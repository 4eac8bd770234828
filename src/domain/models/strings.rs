//! The `Localizable.strings` catalog format.
//!
//! One entry per line, `"key" = "value";` with an optional `// comment`
//! tail. Parsing is deliberately tolerant: a line that does not fit the
//! shape is skipped with a diagnostic instead of failing the whole
//! catalog, and only a catalog with zero surviving entries is an error.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::domain::error::CatalogError;

/// Delimiter between the `"value";` terminator and a trailing comment.
fn comment_delimiter() -> &'static Regex {
    static DELIMITER: OnceLock<Regex> = OnceLock::new();
    DELIMITER.get_or_init(|| Regex::new(r#"";\s*//"#).unwrap())
}

/// One translated entry: localization key, translated value, and an
/// optional translator comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedString {
    /// Localization key.
    pub key: String,
    /// Translated value.
    pub value: String,
    /// Optional comment.
    pub comment: Option<String>,
}

impl LocalizedString {
    /// Create a new entry without a comment.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            comment: None,
        }
    }

    /// Attach a comment.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Render the entry as a catalog line: `"key" = "value"; // comment`.
    pub fn to_line(&self) -> String {
        match &self.comment {
            Some(comment) => format!("\"{}\" = \"{}\"; // {}", self.key, self.value, comment),
            None => format!("\"{}\" = \"{}\";", self.key, self.value),
        }
    }

    /// Render the entry as a sheet row. The comment cell is present only
    /// when the comment is non-empty.
    pub fn to_cells(&self) -> Vec<String> {
        let mut cells = vec![self.key.clone(), self.value.clone()];
        if let Some(comment) = &self.comment {
            if !comment.is_empty() {
                cells.push(comment.clone());
            }
        }
        cells
    }
}

/// An ordered catalog of localized entries, as read from or written to a
/// `Localizable.strings` file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringsCatalog {
    entries: Vec<LocalizedString>,
}

impl StringsCatalog {
    /// Build a catalog from already-validated entries.
    pub fn from_entries(entries: Vec<LocalizedString>) -> Self {
        Self { entries }
    }

    /// Parse catalog text, skipping malformed lines with a diagnostic.
    ///
    /// Fails only when no line yields an entry at all.
    pub fn parse(text: &str) -> Result<Self, CatalogError> {
        let entries: Vec<LocalizedString> = text
            .split('\n')
            .filter(|line| !line.is_empty())
            .filter_map(parse_line)
            .collect();

        if entries.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }
        debug!(entries = entries.len(), "parsed strings catalog");
        Ok(Self { entries })
    }

    /// The entries in catalog order.
    pub fn entries(&self) -> &[LocalizedString] {
        &self.entries
    }

    /// Consume the catalog and return its entries.
    pub fn into_entries(self) -> Vec<LocalizedString> {
        self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for StringsCatalog {
    /// One line per entry, with the trailing newline a `.strings` file
    /// ends with.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{}", entry.to_line())?;
        }
        if self.entries.is_empty() {
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parse a single catalog line, or skip it with a diagnostic.
fn parse_line(line: &str) -> Option<LocalizedString> {
    // Extract comment
    let comment = match comment_delimiter().find(line) {
        Some(delimiter) => Some(line[delimiter.end()..].trim().to_string()),
        None => {
            debug!(line, "comment is missed");
            None
        }
    };

    // Exclude comment from the rest of the line
    let Some(terminator) = line.find("\";") else {
        warn!(line, "value does not have a terminating semicolon");
        return None;
    };
    let body = &line[..terminator + 2];

    // Extract key and value
    let Some(assign) = body.find('=') else {
        warn!(line, "assignment character is missed");
        return None;
    };

    // Cleanup localization key
    let key = body[..assign].trim();
    let Some(key) = key.strip_prefix('"').and_then(|k| k.strip_suffix('"')) else {
        warn!(line, "key is not a valid string");
        return None;
    };

    // Cleanup translation
    let value = body[assign + 1..].trim();
    let Some(value) = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix("\";"))
    else {
        warn!(line, "value is not a valid string or does not have a terminating semicolon");
        return None;
    };

    Some(LocalizedString {
        key: key.to_string(),
        value: value.to_string(),
        comment,
    })
}
