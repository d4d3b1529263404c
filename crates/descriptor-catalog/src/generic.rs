//! Catch-all layout for descriptors with no dedicated schema.

use std::sync::LazyLock;

use hidforge_field_model::{RecordSchema, SchemaBuilder};

use crate::descriptor_type;
use crate::items;

/// Fallback layout: the three leading items every top-level collection
/// starts with, then the remaining bytes as an opaque body. Field defaults
/// are placeholders, real values come from the parsed payload.
pub static GENERIC_REPORT: LazyLock<RecordSchema> = LazyLock::new(|| {
    SchemaBuilder::new("GenericReport")
        .field("usage_page", "Usage Page", 16, items::GENERIC_DESKTOP_PAGE)
        .field("usage", "Usage", 16, items::KEYBOARD_USAGE)
        .field("collection", "Collection", 16, items::APPLICATION_COLLECTION)
        .variable("body", "Report Body", 0, 428)
        .finish_bounded(6, 434)
        .unwrap_or_else(|e| panic!("{e}"))
});

descriptor_type!(
    /// Catch-all descriptor for payloads without a dedicated layout.
    GenericReportDescriptor => GENERIC_REPORT
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{image, CONSUMER_GENERIC_KEY_IMAGE};

    #[test]
    fn test_accepts_any_catalog_payload() -> Result<(), Box<dyn std::error::Error>> {
        let payload = image(CONSUMER_GENERIC_KEY_IMAGE);
        let parsed = GenericReportDescriptor::parse(&payload)?;
        assert_eq!(parsed.record().get("usage_page").ok_or("missing field")?, &[0x05, 0x0C]);
        assert_eq!(parsed.record().get("body").ok_or("missing field")?.len(), 19);
        assert_eq!(parsed.to_bytes(), payload);
        Ok(())
    }

    #[test]
    fn test_bounds_enforced() {
        assert!(GenericReportDescriptor::parse(&[0x05, 0x01, 0x09, 0x06, 0xA1]).is_err());
        assert!(GenericReportDescriptor::parse(&[0x00; 435]).is_err());
    }
}
