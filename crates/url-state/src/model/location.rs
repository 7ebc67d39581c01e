//! Location snapshots.

use serde::{Deserialize, Serialize};

/// Immutable snapshot of the document location supplied by the caller.
///
/// `search` holds the query string including its leading `?`, or is empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Location {
    pub pathname: String,
    pub search: String,
}

impl Location {
    pub fn new(pathname: impl Into<String>, search: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
            search: search.into(),
        }
    }

    /// Splits `url` at the first `?` into pathname and search.
    pub fn from_url(url: &str) -> Self {
        match url.find('?') {
            Some(i) => Self::new(&url[..i], &url[i..]),
            None => Self::new(url, ""),
        }
    }

    /// Returns `pathname + search`.
    pub fn url(&self) -> String {
        format!("{}{}", self.pathname, self.search)
    }
}
