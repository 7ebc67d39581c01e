//! Pending parameter updates.
//!
//! An update is an immutable record naming one key and what to do with it.
//! Updates carry already-encoded text, so applying them needs no knowledge
//! of the parameter's type.

use crate::model::RawParams;

/// What a [`PendingUpdate`] does to its key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Insert or overwrite the key with this encoded value.
    Set(String),
    /// Remove the key.
    Delete,
}

/// One parameter's pending write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingUpdate {
    key: String,
    action: UpdateAction,
}

impl PendingUpdate {
    /// Creates an update that sets `key` to the already-encoded `value`.
    pub fn set(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: UpdateAction::Set(value.into()),
        }
    }

    /// Creates an update that removes `key`.
    pub fn delete(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: UpdateAction::Delete,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn action(&self) -> &UpdateAction {
        &self.action
    }

    /// Applies this update, returning the resulting mapping.
    pub fn apply(&self, mut params: RawParams) -> RawParams {
        match &self.action {
            UpdateAction::Set(value) => {
                params.insert(self.key.as_str(), value.as_str());
            }
            UpdateAction::Delete => {
                params.remove(&self.key);
            }
        }
        params
    }
}
