//! Data model types.
//!
//! This module contains the core types shared by the codec and binding
//! layers:
//! - Values and their type tags
//! - Parameter descriptors
//! - The ordered raw query-string mapping
//! - Location snapshots
//! - Pending updates

pub mod location;
pub mod param;
pub mod raw;
pub mod update;
pub mod value;

pub use location::Location;
pub use param::ParamDescriptor;
pub use raw::RawParams;
pub use update::{PendingUpdate, UpdateAction};
pub use value::{is_equal, json_equal, ObjectMap, ParamType, ParamValue, Value};
