//! Keyboard descriptor layouts, including the bitmap variants and the
//! Google top-raw feature collection.

use std::sync::LazyLock;

use hidforge_field_model::{DescriptorResult, RecordSchema, SchemaBuilder};

use crate::consumer::CONSUMER_GENERIC_KEY;
use crate::descriptor_type;
use crate::items;
use crate::system_control::{SYSTEM_CONTROL, SYSTEM_CONTROL_KEY};

/// Boot-style keyboard on a device, 60 bytes. The report id slot exists in
/// the layout but is elided on the wire.
pub static KEYBOARD_DEVICE: LazyLock<RecordSchema> = LazyLock::new(|| {
    SchemaBuilder::new("KeyboardDevice")
        .field("usage_page", "Usage Page", 16, items::GENERIC_DESKTOP_PAGE)
        .field("keyboard_usage", "Keyboard Usage", 16, items::KEYBOARD_USAGE)
        .field("app_collection", "Application Collection", 16, items::APPLICATION_COLLECTION)
        .elided("keyboard_report_id", "Keyboard Report Id")
        .field("modifier_report_count", "Modifier Report Count", 16, &[0x95, 0x08])
        .field("modifier_report_size", "Modifier Report Size", 16, &[0x75, 0x01])
        .field("modifier_logical_minimum", "Modifier Logical Minimum", 16, &[0x15, 0x00])
        .field("modifier_logical_maximum", "Modifier Logical Maximum", 16, &[0x25, 0x01])
        .field("modifier_usage_page", "Modifier Usage Page", 16, items::KEYBOARD_PAGE)
        .field("modifier_usage_minimum", "Modifier Usage Minimum", 16, &[0x19, 0xE0])
        .field("modifier_usage_maximum", "Modifier Usage Maximum", 16, &[0x29, 0xE7])
        .field("modifier_input", "Modifier Input", 16, items::INPUT_DATA)
        .field("modifier_rsv_input", "Modifier Reserved Input", 16, items::INPUT_CONST)
        .field("led_report_count", "Led Report Count", 16, &[0x95, 0x05])
        .field("led_report_size", "Led Report Size", 16, &[0x75, 0x01])
        .field("led_logical_minimum", "Led Logical Minimum", 16, &[0x15, 0x00])
        .field("led_logical_maximum", "Led Logical Maximum", 16, &[0x25, 0x01])
        .field("led_usage_page", "Led Usage Page", 16, items::LED_PAGE)
        .field("led_usage_minimum", "Led Usage Minimum", 16, &[0x19, 0x01])
        .field("led_usage_maximum", "Led Usage Maximum", 16, &[0x29, 0x05])
        .field("led_output", "Led Output", 16, items::OUTPUT_DATA)
        .field("rsv_report_count", "Reserved Report Count", 16, &[0x95, 0x03])
        .field("rsv_output", "Reserved Output", 16, items::OUTPUT_CONST)
        .field("key_report_count", "Key Report Count", 16, &[0x95, 0x06])
        .field("key_report_size", "Key Report Size", 16, &[0x75, 0x08])
        .field("key_logical_maximum", "Key Logical Maximum", 24, &[0x26, 0xFF, 0x00])
        .field("key_usage_page", "Key Usage Page", 16, items::KEYBOARD_PAGE)
        .field("key_usage_minimum", "Key Usage Minimum", 16, &[0x19, 0x00])
        .field("key_usage_maximum", "Key Usage Maximum", 16, &[0x29, 0xFF])
        .field("key_input", "Key Input", 16, items::INPUT_DATA_ABS)
        .field("end_collection", "End Collection", 8, items::END_COLLECTION)
        .finish(60)
        .unwrap_or_else(|e| panic!("{e}"))
});

/// Boot-style keyboard relayed by a receiver, 59 bytes.
pub static KEYBOARD_RECEIVER: LazyLock<RecordSchema> = LazyLock::new(|| {
    SchemaBuilder::new("KeyboardReceiver")
        .field("usage_page", "Usage Page", 16, items::GENERIC_DESKTOP_PAGE)
        .field("keyboard_usage", "Keyboard Usage", 16, items::KEYBOARD_USAGE)
        .field("app_collection", "Application Collection", 16, items::APPLICATION_COLLECTION)
        .elided("keyboard_report_id", "Keyboard Report Id")
        .field("modifier_report_count", "Modifier Report Count", 16, &[0x95, 0x08])
        .field("modifier_report_size", "Modifier Report Size", 16, &[0x75, 0x01])
        .field("modifier_logical_minimum", "Modifier Logical Minimum", 16, &[0x15, 0x00])
        .field("modifier_logical_maximum", "Modifier Logical Maximum", 16, &[0x25, 0x01])
        .field("modifier_usage_page", "Modifier Usage Page", 16, items::KEYBOARD_PAGE)
        .field("modifier_usage_minimum", "Modifier Usage Minimum", 16, &[0x19, 0xE0])
        .field("modifier_usage_maximum", "Modifier Usage Maximum", 16, &[0x29, 0xE7])
        .field("modifier_input", "Modifier Input", 16, items::INPUT_DATA)
        .field("modifier_rsv_input", "Modifier Reserved Input", 16, items::INPUT_CONST)
        .field("led_report_count", "Led Report Count", 16, &[0x95, 0x05])
        .field("led_usage_page", "Led Usage Page", 16, items::LED_PAGE)
        .field("led_usage_minimum", "Led Usage Minimum", 16, &[0x19, 0x01])
        .field("led_usage_maximum", "Led Usage Maximum", 16, &[0x29, 0x05])
        .field("led_output", "Led Output", 16, items::OUTPUT_DATA)
        .field("rsv_report_count", "Reserved Report Count", 16, &[0x95, 0x01])
        .field("rsv_report_size", "Reserved Report Size", 16, &[0x75, 0x03])
        .field("rsv_output", "Reserved Output", 16, items::OUTPUT_CONST)
        .field("key_report_count", "Key Report Count", 16, &[0x95, 0x06])
        .field("key_report_size", "Key Report Size", 16, &[0x75, 0x08])
        .field("key_logical_minimum", "Key Logical Minimum", 16, &[0x15, 0x00])
        .field("key_logical_maximum", "Key Logical Maximum", 24, &[0x26, 0xFF, 0x00])
        .field("key_usage_page", "Key Usage Page", 16, items::KEYBOARD_PAGE)
        .field("key_usage_minimum", "Key Usage Minimum", 16, &[0x19, 0x00])
        .field("key_usage_maximum", "Key Usage Maximum", 24, &[0x2A, 0xFF, 0x00])
        .field("key_input", "Key Input", 16, items::INPUT_DATA_ABS)
        .field("end_collection", "End Collection", 8, items::END_COLLECTION)
        .finish(59)
        .unwrap_or_else(|e| panic!("{e}"))
});

/// Full keyboard interface: receiver layout with a materialized report id,
/// extended by the consumer and system-control collections. 125 bytes.
pub static KEYBOARD_INTERFACE: LazyLock<RecordSchema> = LazyLock::new(|| {
    SchemaBuilder::new("KeyboardInterface")
        .take_until(&KEYBOARD_RECEIVER, "keyboard_report_id")
        .field("keyboard_report_id", "Keyboard Report Id", 16, items::REPORT_ID_KEYBOARD)
        .take_from(&KEYBOARD_RECEIVER, "modifier_report_count")
        .concat(&CONSUMER_GENERIC_KEY)
        .concat(&SYSTEM_CONTROL_KEY)
        .finish(125)
        .unwrap_or_else(|e| panic!("{e}"))
});

/// Bitmap keyboard on a device, 67 bytes.
pub static KEYBOARD_BITMAP_KEY: LazyLock<RecordSchema> = LazyLock::new(|| {
    SchemaBuilder::new("KeyboardBitmapKey")
        .field("usage_page", "Usage Page", 16, items::GENERIC_DESKTOP_PAGE)
        .field("keyboard_usage", "Keyboard Usage", 16, items::KEYBOARD_USAGE)
        .field("app_collection", "Application Collection", 16, items::APPLICATION_COLLECTION)
        .elided("keyboard_report_id", "Keyboard Report Id")
        .field("modifier_usage_page", "Modifier Usage Page", 16, items::KEYBOARD_PAGE)
        .field("modifier_usage_minimum", "Modifier Usage Minimum", 16, &[0x19, 0xE0])
        .field("modifier_usage_maximum", "Modifier Usage Maximum", 16, &[0x29, 0xE7])
        .field("modifier_logical_minimum", "Modifier Logical Minimum", 16, &[0x15, 0x00])
        .field("modifier_logical_maximum", "Modifier Logical Maximum", 16, &[0x25, 0x01])
        .field("modifier_report_size", "Modifier Report Size", 16, &[0x75, 0x01])
        .field("modifier_report_count", "Modifier Report Count", 16, &[0x95, 0x08])
        .field("modifier_input", "Modifier Input", 16, items::INPUT_DATA)
        .field("led_report_count", "Led Report Count", 16, &[0x95, 0x05])
        .field("led_usage_page", "Led Usage Page", 16, items::LED_PAGE)
        .field("led_usage_minimum", "Led Usage Minimum", 16, &[0x19, 0x01])
        .field("led_usage_maximum", "Led Usage Maximum", 16, &[0x29, 0x05])
        .field("led_output", "Led Output", 16, items::OUTPUT_DATA)
        .field("rsv_report_count", "Reserved Report Count", 16, &[0x95, 0x01])
        .field("rsv_report_size", "Reserved Report Size", 16, &[0x75, 0x03])
        .field("rsv_output", "Reserved Output", 16, items::OUTPUT_CONST)
        .field("key_report_count", "Key Report Count", 16, &[0x95, 0x70])
        .field("key_report_size", "Key Report Size", 16, &[0x75, 0x01])
        .field("key_usage_page", "Key Usage Page", 16, items::KEYBOARD_PAGE)
        .field("key_usage_minimum", "Key Usage Minimum", 16, &[0x19, 0x04])
        .field("key_usage_maximum", "Key Usage Maximum", 16, &[0x29, 0x73])
        .field("key_input", "Key Input", 16, items::INPUT_DATA)
        .field("jpn_report_count", "Japanese Key Report Count", 16, &[0x95, 0x05])
        .field("jpn_usage_minimum", "Japanese Key Usage Minimum", 16, &[0x19, 0x87])
        .field("jpn_usage_maximum", "Japanese Key Usage Maximum", 16, &[0x29, 0x8B])
        .field("jpn_input", "Japanese Key Input", 16, items::INPUT_DATA)
        .field("kor_report_count", "Korean Key Report Count", 16, &[0x95, 0x03])
        .field("kor_usage_minimum", "Korean Key Usage Minimum", 16, &[0x19, 0x90])
        .field("kor_usage_maximum", "Korean Key Usage Maximum", 16, &[0x29, 0x92])
        .field("kor_input", "Korean Key Input", 16, items::INPUT_DATA)
        .field("end_collection", "End Collection", 8, items::END_COLLECTION)
        .finish(67)
        .unwrap_or_else(|e| panic!("{e}"))
});

/// Bitmap keyboard interface, 133 bytes.
pub static KEYBOARD_BITMAP_INTERFACE: LazyLock<RecordSchema> = LazyLock::new(|| {
    SchemaBuilder::new("KeyboardBitmapInterface")
        .take_until(&KEYBOARD_BITMAP_KEY, "keyboard_report_id")
        .field("keyboard_report_id", "Keyboard Report Id", 16, items::REPORT_ID_KEYBOARD)
        .take_from(&KEYBOARD_BITMAP_KEY, "modifier_usage_page")
        .concat(&CONSUMER_GENERIC_KEY)
        .concat(&SYSTEM_CONTROL_KEY)
        .finish(133)
        .unwrap_or_else(|e| panic!("{e}"))
});

/// Bitmap keyboard relayed by a receiver, 123 bytes. Carries the bare
/// system-control collection instead of the key one.
pub static KEYBOARD_BITMAP_RECEIVER: LazyLock<RecordSchema> = LazyLock::new(|| {
    SchemaBuilder::new("KeyboardBitmapReceiver")
        .take_until(&KEYBOARD_BITMAP_KEY, "keyboard_report_id")
        .field("keyboard_report_id", "Keyboard Report Id", 16, items::REPORT_ID_KEYBOARD)
        .take_from(&KEYBOARD_BITMAP_KEY, "modifier_usage_page")
        .concat(&CONSUMER_GENERIC_KEY)
        .concat(&SYSTEM_CONTROL)
        .finish(123)
        .unwrap_or_else(|e| panic!("{e}"))
});

/// Google top-raw feature collection, 29 bytes.
pub static TOP_RAW_KEY: LazyLock<RecordSchema> = LazyLock::new(|| {
    SchemaBuilder::new("TopRawKey")
        .field("top_raw_usage", "Top Raw List Usage", 16, items::CONSUMER_CONTROL_USAGE)
        .field("top_raw_collection", "Top Raw Collection", 16, items::LOGICAL_COLLECTION)
        .field("top_raw_report_id", "Top Raw Report Id", 16, items::REPORT_ID_TOP_RAW)
        .field("top_raw_report_count", "Top Raw Report Count", 16, &[0x95, 0x00])
        .field("top_raw_report_size", "Top Raw Report Size", 16, &[0x75, 0x20])
        .field("top_raw_logical_minimum", "Top Raw Logical Minimum", 40, &[0x17, 0x00, 0x00, 0x00, 0x80])
        .field("top_raw_logical_maximum", "Top Raw Logical Maximum", 40, &[0x27, 0xFF, 0xFF, 0xFF, 0x7F])
        .field("top_raw_usage_page", "Top Raw Usage Page", 16, &[0x05, 0x0A])
        .field("top_raw_usage_minimum", "Top Raw Usage Minimum", 16, &[0x19, 0x01])
        .field("top_raw_usage_maximum", "Top Raw Usage Maximum", 16, &[0x29, 0x00])
        .field("top_raw_feature", "Top Raw Feature", 16, items::FEATURE_CONST)
        .field("top_raw_end_collection", "Top Raw End Collection", 8, items::END_COLLECTION)
        .finish(29)
        .unwrap_or_else(|e| panic!("{e}"))
});

descriptor_type!(
    /// Boot keyboard on a device.
    KeyboardDeviceDescriptor => KEYBOARD_DEVICE
);

descriptor_type!(
    /// Boot keyboard relayed by a receiver.
    KeyboardReceiverDescriptor => KEYBOARD_RECEIVER
);

descriptor_type!(
    /// Keyboard + consumer + system-control interface.
    KeyboardInterfaceDescriptor => KEYBOARD_INTERFACE
);

descriptor_type!(
    /// Bitmap keyboard on a device.
    KeyboardBitmapKeyDescriptor => KEYBOARD_BITMAP_KEY
);

descriptor_type!(
    /// Bitmap keyboard interface.
    KeyboardBitmapInterfaceDescriptor => KEYBOARD_BITMAP_INTERFACE
);

descriptor_type!(
    /// Bitmap keyboard relayed by a receiver.
    KeyboardBitmapReceiverDescriptor => KEYBOARD_BITMAP_RECEIVER
);

descriptor_type!(
    /// Google top-raw feature collection.
    TopRawKeyDescriptor => TOP_RAW_KEY
);

impl TopRawKeyDescriptor {
    /// Rewrite the advertised top-raw key count.
    ///
    /// Updates both the report-count item (`95 xx`) and the usage-maximum
    /// item (`29 xx`) through the validating setter.
    ///
    /// # Errors
    ///
    /// Propagates the field length checks of
    /// [`hidforge_field_model::Record::set`].
    pub fn update_usage_count(&mut self, count: u8) -> DescriptorResult<()> {
        self.record_mut()
            .set("top_raw_report_count", &[0x95, count])?;
        self.record_mut()
            .set("top_raw_usage_maximum", &[0x29, count])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{
        image, CONSUMER_GENERIC_KEY_IMAGE, KEYBOARD_RECEIVER_IMAGE, SYSTEM_CONTROL_KEY_IMAGE,
    };

    const KEYBOARD_DEVICE_IMAGE: &str =
        "05010906A1019508750115002501050719E029E78102810395057501150025010508190129059102950391039506750826FF000507190029FF8100C0";
    const TOP_RAW_KEY_IMAGE: &str =
        "0901A102850995007520170000008027FFFFFF7F050A19012900B103C0";

    #[test]
    fn test_device_matches_golden() -> Result<(), Box<dyn std::error::Error>> {
        let golden = image(KEYBOARD_DEVICE_IMAGE);
        assert_eq!(golden.len(), 60);
        assert_eq!(KeyboardDeviceDescriptor::new().to_bytes(), golden);
        assert_eq!(KeyboardDeviceDescriptor::parse(&golden)?.to_bytes(), golden);
        Ok(())
    }

    #[test]
    fn test_receiver_matches_golden() -> Result<(), Box<dyn std::error::Error>> {
        let golden = image(KEYBOARD_RECEIVER_IMAGE);
        assert_eq!(golden.len(), 59);
        assert_eq!(KeyboardReceiverDescriptor::new().to_bytes(), golden);
        assert_eq!(KeyboardReceiverDescriptor::parse(&golden)?.to_bytes(), golden);
        Ok(())
    }

    #[test]
    fn test_interface_is_receiver_plus_blocks() -> Result<(), Box<dyn std::error::Error>> {
        // The interface splices a report id behind the collection header and
        // appends the consumer and system-control images unchanged.
        let receiver = image(KEYBOARD_RECEIVER_IMAGE);
        let mut expected = Vec::new();
        expected.extend_from_slice(&receiver[..6]);
        expected.extend_from_slice(&[0x85, 0x01]);
        expected.extend_from_slice(&receiver[6..]);
        expected.extend_from_slice(&image(CONSUMER_GENERIC_KEY_IMAGE));
        expected.extend_from_slice(&image(SYSTEM_CONTROL_KEY_IMAGE));
        assert_eq!(expected.len(), 125);

        assert_eq!(KeyboardInterfaceDescriptor::new().to_bytes(), expected);
        let parsed = KeyboardInterfaceDescriptor::parse(&expected)?;
        assert_eq!(
            parsed.record().get("keyboard_report_id").ok_or("missing field")?,
            &[0x85, 0x01]
        );
        assert_eq!(
            parsed.record().get("sc_end_collection").ok_or("missing field")?,
            &[0xC0]
        );
        Ok(())
    }

    #[test]
    fn test_bitmap_lengths() {
        assert_eq!(KeyboardBitmapKeyDescriptor::new().to_bytes().len(), 67);
        assert_eq!(KeyboardBitmapInterfaceDescriptor::new().to_bytes().len(), 133);
        assert_eq!(KeyboardBitmapReceiverDescriptor::new().to_bytes().len(), 123);
    }

    #[test]
    fn test_bitmap_receiver_carries_bare_system_control() -> Result<(), Box<dyn std::error::Error>> {
        let receiver = KeyboardBitmapReceiverDescriptor::new();
        assert_eq!(
            receiver.record().get("sc_rsv_report_size").ok_or("missing field")?,
            &[0x75, 0x06]
        );
        assert!(receiver.record().get("sc_sys_usage").is_none());
        Ok(())
    }

    #[test]
    fn test_top_raw_matches_golden() -> Result<(), Box<dyn std::error::Error>> {
        let golden = image(TOP_RAW_KEY_IMAGE);
        assert_eq!(golden.len(), 29);
        assert_eq!(TopRawKeyDescriptor::new().to_bytes(), golden);
        Ok(())
    }

    #[test]
    fn test_top_raw_update_usage_count() -> Result<(), Box<dyn std::error::Error>> {
        let mut descriptor = TopRawKeyDescriptor::new();
        descriptor.update_usage_count(3)?;
        assert_eq!(
            descriptor.record().get("top_raw_report_count").ok_or("missing field")?,
            &[0x95, 0x03]
        );
        assert_eq!(
            descriptor.record().get("top_raw_usage_maximum").ok_or("missing field")?,
            &[0x29, 0x03]
        );
        // Everything else is untouched.
        let bytes = descriptor.to_bytes();
        assert_eq!(bytes.len(), 29);
        assert_eq!(&bytes[..6], &image(TOP_RAW_KEY_IMAGE)[..6]);
        Ok(())
    }
}
