//! Error taxonomy shared by the schema, record, and dispatch layers.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DescriptorError {
    /// Definition-time schema error (duplicate name, length mismatch, ...).
    #[error("schema definition error: {0}")]
    Configuration(String),

    /// Buffer length does not match the declared fixed layout length.
    #[error("buffer is {actual} bytes, layout requires exactly {expected}")]
    Format { expected: usize, actual: usize },

    /// Buffer length falls outside the declared bounds of a variable layout.
    #[error("buffer is {actual} bytes, layout requires between {min} and {max}")]
    FormatRange {
        min: usize,
        max: usize,
        actual: usize,
    },

    /// A field value was rejected by its length check.
    #[error("field `{field}` rejected value {value}: {constraint}")]
    Validation {
        field: &'static str,
        value: String,
        constraint: String,
    },

    /// The leading bytes match no known usage-page tag.
    #[error("unknown usage page tag {bytes}")]
    UnknownFormat { bytes: String },

    /// No layout is registered for this usage at this buffer length.
    #[error("no layout registered for usage {usage} with length {len}")]
    Unmatched { usage: String, len: usize },
}

pub type DescriptorResult<T> = Result<T, DescriptorError>;
