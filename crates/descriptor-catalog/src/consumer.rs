//! Consumer-control descriptor layouts.

use std::sync::LazyLock;

use hidforge_field_model::{RecordSchema, SchemaBuilder};

use crate::descriptor_type;
use crate::items;

/// Consumer generic collection on keyboards, 25 bytes.
pub static CONSUMER_GENERIC_KEY: LazyLock<RecordSchema> = LazyLock::new(|| {
    SchemaBuilder::new("ConsumerGenericKey")
        .field("cons_usage_page", "Consumer Usage Page", 16, items::CONSUMER_PAGE)
        .field("cons_usage", "Consumer Usage", 16, items::CONSUMER_CONTROL_USAGE)
        .field("cons_collection", "Consumer Collection", 16, items::APPLICATION_COLLECTION)
        .field("cons_report_id", "Consumer Report Id", 16, items::REPORT_ID_CONSUMER)
        .field("cons_report_count", "Consumer Report Count", 16, &[0x95, 0x02])
        .field("cons_report_size", "Consumer Report Size", 16, &[0x75, 0x10])
        .field("cons_logical_minimum", "Consumer Logical Minimum", 16, &[0x15, 0x01])
        .field("cons_logical_maximum", "Consumer Logical Maximum", 24, &[0x26, 0xFF, 0x02])
        .field("cons_usage_minimum", "Consumer Usage Minimum", 16, &[0x19, 0x01])
        .field("cons_usage_maximum", "Consumer Usage Maximum", 24, &[0x2A, 0xFF, 0x02])
        .field("cons_input", "Consumer Input", 16, items::INPUT_DATA_ABS)
        .field("cons_end_collection", "Consumer End Collection", 8, items::END_COLLECTION)
        .finish(25)
        .unwrap_or_else(|e| panic!("{e}"))
});

/// Same collection under the 24-bit ChromeOS vendor page, 26 bytes.
pub static CONSUMER_GENERIC_CHROMEOS: LazyLock<RecordSchema> = LazyLock::new(|| {
    SchemaBuilder::new("ConsumerGenericChromeOs")
        .field("cons_usage_page", "Consumer Usage Page", 24, &[0x06, 0x0C, 0xFF])
        .take_from(&CONSUMER_GENERIC_KEY, "cons_usage")
        .finish(26)
        .unwrap_or_else(|e| panic!("{e}"))
});

descriptor_type!(
    /// Consumer generic collection reported by keyboards.
    ConsumerGenericKeyDescriptor => CONSUMER_GENERIC_KEY
);

descriptor_type!(
    /// ChromeOS flavor of the consumer generic collection.
    ConsumerGenericChromeOsDescriptor => CONSUMER_GENERIC_CHROMEOS
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{image, CONSUMER_GENERIC_KEY_IMAGE};

    const CONSUMER_GENERIC_CHROMEOS_IMAGE: &str =
        "060CFF0901A101850395027510150126FF0219012AFF028100C0";

    #[test]
    fn test_generic_key_matches_golden() -> Result<(), Box<dyn std::error::Error>> {
        let golden = image(CONSUMER_GENERIC_KEY_IMAGE);
        assert_eq!(golden.len(), 25);
        assert_eq!(ConsumerGenericKeyDescriptor::new().to_bytes(), golden);

        let parsed = ConsumerGenericKeyDescriptor::parse(&golden)?;
        assert_eq!(parsed.to_bytes(), golden);
        Ok(())
    }

    #[test]
    fn test_chromeos_widens_usage_page() -> Result<(), Box<dyn std::error::Error>> {
        let golden = image(CONSUMER_GENERIC_CHROMEOS_IMAGE);
        assert_eq!(golden.len(), 26);
        assert_eq!(ConsumerGenericChromeOsDescriptor::new().to_bytes(), golden);

        let parsed = ConsumerGenericChromeOsDescriptor::parse(&golden)?;
        assert_eq!(
            parsed.record().get("cons_usage_page").ok_or("missing field")?,
            &[0x06, 0x0C, 0xFF]
        );
        Ok(())
    }

    #[test]
    fn test_wrong_length_rejected() {
        let golden = image(CONSUMER_GENERIC_KEY_IMAGE);
        assert!(ConsumerGenericKeyDescriptor::parse(&golden[..24]).is_err());
    }
}
