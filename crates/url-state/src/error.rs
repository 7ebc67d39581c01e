//! Error types for parameter construction and encoding.
//!
//! Malformed URL data never produces an error: it degrades to a safe value
//! during decoding. The errors here signal programming mistakes on the
//! caller's side.

use thiserror::Error;

use crate::model::ParamType;

/// Error while constructing a [`ParamDescriptor`](crate::model::ParamDescriptor).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamError {
    #[error("parameter {name:?}: default value of shape {shape} is not supported")]
    UnsupportedDefault { name: String, shape: &'static str },

    #[error("parameter {name:?}: declared type {declared:?} but default value is {found:?}")]
    DefaultTypeMismatch {
        name: String,
        declared: ParamType,
        found: ParamType,
    },

    #[error("parameter {name:?}: neither a type nor a default value was given")]
    MissingDefault { name: String },
}

/// Error while encoding a value for a parameter.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EncodeError {
    #[error("parameter {name:?} expects {expected:?}, got {found:?}")]
    TypeMismatch {
        name: String,
        expected: ParamType,
        found: ParamType,
    },
}
