//! Parameter bindings and batch merging.
//!
//! This module connects typed parameters to a [`Location`](crate::model::Location):
//! - [`ParamBinding`]: one parameter, dynamically typed
//! - [`TypedBinding`]: one parameter, statically typed
//! - [`batch`]: folding several updates into one query string
//! - [`UrlState`]: the owner of the last-known location and the navigator

pub mod batch;
pub mod param;
pub mod state;
pub mod typed;

pub use batch::{apply_updates, batch_url, BatchOptions};
pub use param::{read_param, ParamBinding};
pub use state::{Navigate, UrlState};
pub use typed::TypedBinding;
