//! Batch merge of pending updates.
//!
//! Several updates are folded over one mapping and serialized once, so that
//! changing multiple parameters in the same tick results in a single
//! navigation.

use crate::codec::{build_search, parse_search};
use crate::model::{Location, PendingUpdate, RawParams};

/// Options for a batch update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOptions {
    /// Seed the merge with the current query string. When false, the
    /// resulting query string holds only the batched keys.
    pub include_existing: bool,

    /// Pathname to navigate to instead of the current one.
    pub path: Option<String>,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            include_existing: true,
            path: None,
        }
    }
}

impl BatchOptions {
    /// Creates default options: keep existing keys, stay on the current path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options that discard existing keys.
    pub fn replace() -> Self {
        Self {
            include_existing: false,
            path: None,
        }
    }

    /// Targets `path` instead of the current pathname.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

/// Applies `updates` left to right over `seed`.
pub fn apply_updates<I>(seed: RawParams, updates: I) -> RawParams
where
    I: IntoIterator<Item = PendingUpdate>,
{
    updates
        .into_iter()
        .fold(seed, |params, update| update.apply(params))
}

/// Computes the navigation target for a batch of updates against
/// `location`.
///
/// Returns `pathname + search`, where the pathname is `options.path` if
/// set.
pub fn batch_url<I>(location: &Location, updates: I, options: &BatchOptions) -> String
where
    I: IntoIterator<Item = PendingUpdate>,
{
    let seed = if options.include_existing {
        parse_search(&location.search)
    } else {
        RawParams::new()
    };
    let params = apply_updates(seed, updates);
    tracing::trace!(keys = params.len(), "merged batch updates");

    let pathname = options.path.as_deref().unwrap_or(&location.pathname);
    format!("{}{}", pathname, build_search(&params))
}
