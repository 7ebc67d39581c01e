//! url-state: typed application state kept in a URL query string.
//!
//! This crate reads typed parameters from a location's query string and
//! writes them back, so that state survives navigation and reload.
//!
//! # Overview
//!
//! - **Codec**: the query string is parsed into an ordered mapping of raw
//!   text, and each value is decoded according to its parameter's type
//! - **Bindings**: a parameter exposes its current value, recomputed on every
//!   observed location, and produces updates when written
//! - **Batching**: several updates are merged into one query string and one
//!   navigation
//!
//! The crate never touches a browser or any global navigation state. Callers
//! supply [`Location`] snapshots and a [`Navigate`] implementation.
//!
//! # Quick Start
//!
//! ```rust
//! use url_state::{BatchOptions, Location, ParamDescriptor, UrlState, Value};
//!
//! let mut visited = Vec::new();
//! let mut state = UrlState::new(Location::new("/", "?q=hi&page=1"), |url: &str| {
//!     visited.push(url.to_string())
//! });
//!
//! let q = state.bind(ParamDescriptor::string("q"));
//! let page = state.bind(ParamDescriptor::new("page", 1));
//! assert_eq!(q.value(), &Value::from("hi"));
//!
//! state.batch_update(
//!     [
//!         q.update(Some(&Value::from("hello"))).unwrap(),
//!         page.update(Some(&Value::from(2))).unwrap(),
//!     ],
//!     &BatchOptions::default(),
//! );
//! drop(state);
//! assert_eq!(visited, ["/?q=hello&page=2"]);
//! ```
//!
//! # Modules
//!
//! - [`model`]: Core data types (Value, ParamDescriptor, RawParams, Location, PendingUpdate)
//! - [`codec`]: Query-string and value encoding/decoding
//! - [`binding`]: Parameter bindings, batch merging, navigation
//! - [`error`]: Error types
//!
//! # Wire Format
//!
//! `key=value` pairs joined by `&` after an optional `?`:
//! - strings as given, percent-decoded when read
//! - numbers as decimal text, booleans as `true` / `false`
//! - arrays as comma-separated elements
//! - objects as percent-encoded JSON
//!
//! Writing a parameter's default value removes its key.

pub mod binding;
pub mod codec;
pub mod error;
pub mod model;

// Re-export commonly used types at crate root
pub use binding::{
    apply_updates, batch_url, BatchOptions, Navigate, ParamBinding, TypedBinding, UrlState,
};
pub use codec::{build_search, decode_value, encode_value, parse_search};
pub use error::{EncodeError, ParamError};
pub use model::{
    is_equal, Location, ObjectMap, ParamDescriptor, ParamType, ParamValue, PendingUpdate,
    RawParams, UpdateAction, Value,
};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
