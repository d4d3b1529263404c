//! Logitech HID interface descriptor layouts.
//!
//! Every module declares its layouts as `LazyLock<RecordSchema>` statics plus
//! a thin typed wrapper per descriptor. Derived layouts are built from their
//! base with the composition ops of `hidforge-field-model`, mirroring how the
//! physical descriptors are assembled from shared collections.
//!
//! Layout totals are cross-checked at first use; a table that no longer sums
//! to its declared length panics with the definition error.

pub mod consumer;
pub mod digitizer;
pub mod generic;
pub mod hidpp;
pub mod items;
pub mod keyboard;
pub mod mouse;
pub mod report_map;
pub mod system_control;
pub mod vlp;

/// Declare a typed wrapper over one catalog layout.
macro_rules! descriptor_type {
    ($(#[$meta:meta])* $name:ident => $schema:path) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            record: hidforge_field_model::Record,
        }

        impl $name {
            pub fn schema() -> &'static hidforge_field_model::RecordSchema {
                &$schema
            }

            /// Instance carrying every field's default bytes.
            pub fn new() -> Self {
                Self {
                    record: hidforge_field_model::Record::with_defaults(&$schema),
                }
            }

            /// Parse a raw descriptor buffer of exactly the declared length.
            ///
            /// # Errors
            ///
            /// Propagates the length and validation errors of
            /// [`hidforge_field_model::Record::parse`].
            pub fn parse(data: &[u8]) -> hidforge_field_model::DescriptorResult<Self> {
                Ok(Self {
                    record: hidforge_field_model::Record::parse(&$schema, data)?,
                })
            }

            /// Parse with a capture timestamp attached.
            ///
            /// # Errors
            ///
            /// Same as [`Self::parse`].
            pub fn parse_with_timestamp(
                data: &[u8],
                timestamp: u64,
            ) -> hidforge_field_model::DescriptorResult<Self> {
                Ok(Self {
                    record: hidforge_field_model::Record::parse_with_timestamp(
                        &$schema, data, timestamp,
                    )?,
                })
            }

            pub fn to_bytes(&self) -> Vec<u8> {
                self.record.to_bytes()
            }

            pub fn record(&self) -> &hidforge_field_model::Record {
                &self.record
            }

            pub fn record_mut(&mut self) -> &mut hidforge_field_model::Record {
                &mut self.record
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

pub(crate) use descriptor_type;

#[cfg(test)]
pub(crate) mod test_support {
    //! Golden descriptor images captured from real devices, shared by the
    //! composition tests of several modules.

    pub const CONSUMER_GENERIC_KEY_IMAGE: &str =
        "050C0901A101850395027510150126FF0219012AFF028100C0";
    pub const SYSTEM_CONTROL_KEY_IMAGE: &str =
        "05010980A101850495017502150125030982098109838100750115002501099B810675058103C0";
    pub const SYSTEM_CONTROL_V14_IMAGE: &str =
        "05010980A1018504950175021501250309820981098381009502750115002501099B09A98106950175048103C0";
    pub const CALL_STATE_KEY_IMAGE: &str =
        "05010913A101850B950175011500250109E18106750F8103C0";
    pub const KEYBOARD_RECEIVER_IMAGE: &str =
        "05010906A1019508750115002501050719E029E7810281039505050819012905910295017503910395067508150026FF00050719002AFF008100C0";
    pub const FINGER_COLLECTION_IMAGE: &str =
        "0922A102950275011500250109470942810295017506250409518102750826FF0009308102A4750C26D70A3500469204550E651105010930810226FA0646F30209318102B4C0";

    /// Decode a golden hex image, panicking on malformed test data.
    pub fn image(hex: &str) -> Vec<u8> {
        hidforge_field_model::hex::decode(hex).expect("well-formed golden hex")
    }
}
