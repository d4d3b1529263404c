//! Dispatch raw HID interface-descriptor payloads to catalog layouts.
//!
//! A capture harness hands over descriptor payloads as plain byte strings
//! with no indication of which device class produced them. This crate reads
//! the leading report items, selects the matching layout from
//! `hidforge-descriptor-catalog`, and returns the parsed record.
//!
//! ```
//! use hidforge_descriptor_catalog::keyboard::KeyboardDeviceDescriptor;
//! use hidforge_descriptor_dispatch::DescriptorDispatcher;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let payload = KeyboardDeviceDescriptor::new().to_bytes();
//! let record = DescriptorDispatcher::default()
//!     .dispatch(&payload)?
//!     .ok_or("unmatched payload")?;
//! assert_eq!(record.schema().name(), "KeyboardDevice");
//! # Ok(())
//! # }
//! ```

pub mod dispatcher;

pub use dispatcher::{DescriptorDispatcher, DescriptorKind, GapPolicy};
