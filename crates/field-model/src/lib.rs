//! Bit-field schema and record model for fixed-layout HID descriptors.
//!
//! A descriptor layout is an ordered list of named fields, each with a fixed
//! bit width and a default byte value. Layouts are declared once through
//! [`SchemaBuilder`], composed from each other by name (extension, splicing,
//! embedding), and then drive exact-length parsing and serialization of raw
//! descriptor buffers through [`Record`].
//!
//! This crate is I/O-free; it provides pure types that can be tested without
//! hardware.

pub mod error;
pub mod field;
pub mod hex;
pub mod record;
pub mod schema;

pub use error::{DescriptorError, DescriptorResult};
pub use field::{FieldDef, FieldKind, FieldWidth};
pub use record::{FieldValue, Record};
pub use schema::{RecordSchema, SchemaBuilder, SchemaLen};
