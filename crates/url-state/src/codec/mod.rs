//! Text encoding/decoding for query strings.
//!
//! Two layers: [`query`] splits and joins the raw `key=value` text, and
//! [`value`] converts individual raw values to and from typed
//! [`Value`](crate::model::Value)s.

pub mod primitives;
pub mod query;
pub mod value;

pub use primitives::{decode_component, encode_component, format_number, parse_number};
pub use query::{build_search, parse_search};
pub use value::{decode_value, encode_as, encode_value};
