//! BLE HID report-map layouts.
//!
//! BLE devices expose one report map covering every top-level collection,
//! so these schemas are concatenations of per-collection blocks. Block
//! field names carry a per-collection prefix to keep concatenated schemas
//! free of duplicates.

use std::sync::LazyLock;

use hidforge_field_model::{RecordSchema, SchemaBuilder};

use crate::descriptor_type;
use crate::items;

/// BLE keyboard collection with LED output block and the Google top-row
/// feature collection, 92 bytes.
pub static BLE_KEYBOARD_LED_TOP_ROW: LazyLock<RecordSchema> = LazyLock::new(|| {
    SchemaBuilder::new("BleKeyboardLedTopRow")
        .field("kbd_usage_page", "Keyboard Usage Page", 16, items::GENERIC_DESKTOP_PAGE)
        .field("kbd_usage", "Keyboard Usage", 16, items::KEYBOARD_USAGE)
        .field("kbd_collection", "Keyboard Collection", 16, items::APPLICATION_COLLECTION)
        .field("kbd_report_id", "Keyboard Report Id", 16, items::REPORT_ID_KEYBOARD)
        .field("modifier_report_count", "Modifier Report Count", 16, &[0x95, 0x08])
        .field("modifier_report_size", "Modifier Report Size", 16, &[0x75, 0x01])
        .field("modifier_logical_minimum", "Modifier Logical Minimum", 16, &[0x15, 0x00])
        .field("modifier_logical_maximum", "Modifier Logical Maximum", 16, &[0x25, 0x01])
        .field("modifier_usage_page", "Modifier Usage Page", 16, items::KEYBOARD_PAGE)
        .field("modifier_usage_minimum", "Modifier Usage Minimum", 16, &[0x19, 0xE0])
        .field("modifier_usage_maximum", "Modifier Usage Maximum", 16, &[0x29, 0xE7])
        .field("modifier_input", "Modifier Input", 16, items::INPUT_DATA)
        .field("led_report_count", "Led Report Count", 16, &[0x95, 0x05])
        .field("led_report_size", "Led Report Size", 16, &[0x75, 0x01])
        .field("led_logical_minimum", "Led Logical Minimum", 16, &[0x15, 0x00])
        .field("led_logical_maximum", "Led Logical Maximum", 16, &[0x25, 0x01])
        .field("led_usage_page", "Led Usage Page", 16, items::LED_PAGE)
        .field("led_usage_minimum", "Led Usage Minimum", 16, &[0x19, 0x01])
        .field("led_usage_maximum", "Led Usage Maximum", 16, &[0x29, 0x05])
        .field("led_output", "Led Output", 16, items::OUTPUT_DATA)
        .field("led_rsv_report_count", "Led Reserved Report Count", 16, &[0x95, 0x03])
        .field("led_rsv_output", "Led Reserved Output", 16, items::OUTPUT_CONST)
        .field("key_report_count", "Key Report Count", 16, &[0x95, 0x06])
        .field("key_report_size", "Key Report Size", 16, &[0x75, 0x08])
        .field("key_logical_maximum", "Key Logical Maximum", 24, &[0x26, 0xFF, 0x00])
        .field("key_usage_page", "Key Usage Page", 16, items::KEYBOARD_PAGE)
        .field("key_usage_minimum", "Key Usage Minimum", 16, &[0x19, 0x00])
        .field("key_usage_maximum", "Key Usage Maximum", 16, &[0x29, 0xFF])
        .field("key_input", "Key Input", 16, items::INPUT_DATA_ABS)
        .field("top_row_google_usage_page", "Top Row Vendor Usage Page", 24, &[0x06, 0xD1, 0xFF])
        .field("top_row_usage", "Top Row Usage", 16, &[0x09, 0x01])
        .field("top_row_collection", "Top Row Collection", 16, items::LOGICAL_COLLECTION)
        .field("top_row_report_id", "Top Row Report Id", 16, items::REPORT_ID_TOP_RAW)
        .field("top_row_report_count", "Top Row Report Count", 16, &[0x95, 0x00])
        .field("top_row_report_size", "Top Row Report Size", 16, &[0x75, 0x20])
        .field(
            "top_row_logical_minimum",
            "Top Row Logical Minimum",
            40,
            &[0x17, 0x00, 0x00, 0x00, 0x80],
        )
        .field(
            "top_row_logical_maximum",
            "Top Row Logical Maximum",
            40,
            &[0x27, 0xFF, 0xFF, 0xFF, 0x7F],
        )
        .field("top_row_usage_page", "Top Row Ordinal Usage Page", 16, &[0x05, 0x0A])
        .field("top_row_usage_minimum", "Top Row Usage Minimum", 16, &[0x19, 0x01])
        .field("top_row_usage_maximum", "Top Row Usage Maximum", 16, &[0x29, 0x00])
        .field("top_row_feature", "Top Row Feature", 16, items::FEATURE_CONST)
        .field("top_row_end_collection", "Top Row End Collection", 8, items::END_COLLECTION)
        .field("kbd_end_collection", "Keyboard End Collection", 8, items::END_COLLECTION)
        .finish(92)
        .unwrap_or_else(|e| panic!("{e}"))
});

/// BLE keyboard collection with LED output block, 60 bytes.
pub static BLE_KEYBOARD_LED: LazyLock<RecordSchema> = LazyLock::new(|| {
    SchemaBuilder::new("BleKeyboardLed")
        .take_until(&BLE_KEYBOARD_LED_TOP_ROW, "top_row_google_usage_page")
        .take_from(&BLE_KEYBOARD_LED_TOP_ROW, "kbd_end_collection")
        .finish(60)
        .unwrap_or_else(|e| panic!("{e}"))
});

/// BLE keyboard collection without LED block, 40 bytes.
pub static BLE_KEYBOARD: LazyLock<RecordSchema> = LazyLock::new(|| {
    SchemaBuilder::new("BleKeyboard")
        .take_until(&BLE_KEYBOARD_LED, "led_report_count")
        .take_from(&BLE_KEYBOARD_LED, "key_report_count")
        .finish(40)
        .unwrap_or_else(|e| panic!("{e}"))
});

/// BLE mouse collection with 12-bit axes, 69 bytes.
pub static BLE_MOUSE_12: LazyLock<RecordSchema> = LazyLock::new(|| {
    SchemaBuilder::new("BleMouse12")
        .field("mouse_usage_page", "Mouse Usage Page", 16, items::GENERIC_DESKTOP_PAGE)
        .field("mouse_usage", "Mouse Usage", 16, items::MOUSE_USAGE)
        .field("mouse_collection", "Mouse Collection", 16, items::APPLICATION_COLLECTION)
        .field("mouse_report_id", "Mouse Report Id", 16, items::REPORT_ID_MOUSE)
        .field("pointer_usage", "Pointer Usage", 16, items::POINTER_USAGE)
        .field("linked_collection", "Linked Collection", 16, items::PHYSICAL_COLLECTION)
        .field("button_report_count", "Button Report Count", 16, &[0x95, 0x10])
        .field("button_report_size", "Button Report Size", 16, &[0x75, 0x01])
        .field("button_logical_minimum", "Button Logical Minimum", 16, &[0x15, 0x00])
        .field("button_logical_maximum", "Button Logical Maximum", 16, &[0x25, 0x01])
        .field("button_usage_page", "Button Usage Page", 16, items::BUTTON_PAGE)
        .field("button_usage_minimum", "Button Usage Minimum", 16, &[0x19, 0x01])
        .field("button_usage_maximum", "Button Usage Maximum", 16, &[0x29, 0x10])
        .field("button_input", "Button Input", 16, items::INPUT_DATA)
        .field("axis_usage_page", "Axis Usage Page", 16, items::GENERIC_DESKTOP_PAGE)
        .field("axis_push", "Axis Push", 8, items::PUSH)
        .field("axis_report_count", "Axis Report Count", 16, &[0x95, 0x02])
        .field("axis_report_size", "Axis Report Size", 16, &[0x75, 0x0C])
        .field("axis_logical_minimum", "Axis Logical Minimum", 24, &[0x16, 0x00, 0xF8])
        .field("axis_logical_maximum", "Axis Logical Maximum", 24, &[0x26, 0xFF, 0x07])
        .field("axis_x_usage", "Axis X Usage", 16, &[0x09, 0x30])
        .field("axis_y_usage", "Axis Y Usage", 16, &[0x09, 0x31])
        .field("axis_input", "Axis Input", 16, items::INPUT_DATA_REL)
        .field("axis_pop", "Axis Pop", 8, items::POP)
        .field("wheel_report_count", "Wheel Report Count", 16, &[0x95, 0x01])
        .field("wheel_report_size", "Wheel Report Size", 16, &[0x75, 0x08])
        .field("wheel_logical_minimum", "Wheel Logical Minimum", 16, &[0x15, 0x80])
        .field("wheel_logical_maximum", "Wheel Logical Maximum", 16, &[0x25, 0x7F])
        .field("wheel_usage", "Wheel Usage", 16, &[0x09, 0x38])
        .field("wheel_input", "Wheel Input", 16, items::INPUT_DATA_REL)
        .field("acpan_usage_page", "AC Pan Usage Page", 16, items::CONSUMER_PAGE)
        .field("acpan_usage", "AC Pan Usage", 24, &[0x0A, 0x38, 0x02])
        .field("acpan_input", "AC Pan Input", 16, items::INPUT_DATA_REL)
        .field("end_linked_collection", "End Linked Collection", 8, items::END_COLLECTION)
        .field("mouse_end_collection", "Mouse End Collection", 8, items::END_COLLECTION)
        .finish(69)
        .unwrap_or_else(|e| panic!("{e}"))
});

/// BLE mouse collection with 16-bit axes and no push/pop framing, 67 bytes.
pub static BLE_MOUSE_16: LazyLock<RecordSchema> = LazyLock::new(|| {
    SchemaBuilder::new("BleMouse16")
        .take_until(&BLE_MOUSE_12, "axis_push")
        .take_range(&BLE_MOUSE_12, "axis_report_count", "axis_report_size")
        .field("axis_report_size", "Axis Report Size", 16, &[0x75, 0x10])
        .field("axis_logical_minimum", "Axis Logical Minimum", 24, &[0x16, 0x00, 0x80])
        .field("axis_logical_maximum", "Axis Logical Maximum", 24, &[0x26, 0xFF, 0x7F])
        .take_range(&BLE_MOUSE_12, "axis_x_usage", "axis_pop")
        .take_from(&BLE_MOUSE_12, "wheel_report_count")
        .finish(67)
        .unwrap_or_else(|e| panic!("{e}"))
});

/// BLE consumer collection under the ChromeOS vendor page, 26 bytes.
pub static BLE_CONSUMER_CHROMEOS: LazyLock<RecordSchema> = LazyLock::new(|| {
    SchemaBuilder::new("BleConsumerChromeOs")
        .field("cons_gen_usage_page", "Consumer Usage Page", 24, &[0x06, 0x0C, 0xFF])
        .field("cons_gen_usage", "Consumer Usage", 16, items::CONSUMER_CONTROL_USAGE)
        .field("cons_gen_collection", "Consumer Collection", 16, items::APPLICATION_COLLECTION)
        .field("cons_gen_report_id", "Consumer Report Id", 16, items::REPORT_ID_CONSUMER)
        .field("cons_gen_report_count", "Consumer Report Count", 16, &[0x95, 0x02])
        .field("cons_gen_report_size", "Consumer Report Size", 16, &[0x75, 0x10])
        .field("cons_gen_logical_minimum", "Consumer Logical Minimum", 16, &[0x15, 0x01])
        .field("cons_gen_logical_maximum", "Consumer Logical Maximum", 24, &[0x26, 0xFF, 0x02])
        .field("cons_gen_usage_minimum", "Consumer Usage Minimum", 16, &[0x19, 0x01])
        .field("cons_gen_usage_maximum", "Consumer Usage Maximum", 24, &[0x2A, 0xFF, 0x02])
        .field("cons_gen_input", "Consumer Input", 16, items::INPUT_DATA_ABS)
        .field("cons_gen_end_collection", "Consumer End Collection", 8, items::END_COLLECTION)
        .finish(26)
        .unwrap_or_else(|e| panic!("{e}"))
});

/// Same consumer collection under the standard 16-bit page, 25 bytes.
pub static BLE_CONSUMER_GENERIC: LazyLock<RecordSchema> = LazyLock::new(|| {
    SchemaBuilder::new("BleConsumerGeneric")
        .field("cons_gen_usage_page", "Consumer Usage Page", 16, items::CONSUMER_PAGE)
        .take_from(&BLE_CONSUMER_CHROMEOS, "cons_gen_usage")
        .finish(25)
        .unwrap_or_else(|e| panic!("{e}"))
});

/// Minimal one-control consumer collection, 26 bytes.
pub static BLE_CONSUMER_MINIMUM: LazyLock<RecordSchema> = LazyLock::new(|| {
    SchemaBuilder::new("BleConsumerMinimum")
        .field("cons_min_usage_page", "Consumer Usage Page", 16, items::CONSUMER_PAGE)
        .field("cons_min_usage", "Consumer Usage", 16, items::CONSUMER_CONTROL_USAGE)
        .field("cons_min_collection", "Consumer Collection", 16, items::APPLICATION_COLLECTION)
        .field("cons_min_report_id", "Consumer Report Id", 16, items::REPORT_ID_SYSTEM_CONTROL)
        .field("cons_min_report_count", "Consumer Report Count", 16, &[0x95, 0x01])
        .field("cons_min_report_size", "Consumer Report Size", 16, &[0x75, 0x01])
        .field("cons_min_logical_minimum", "Consumer Logical Minimum", 16, &[0x15, 0x00])
        .field("cons_min_logical_maximum", "Consumer Logical Maximum", 16, &[0x25, 0x01])
        .field("cons_min_usage_list", "Consumer Mute Usage", 24, &[0x0A, 0xE2, 0x00])
        .field("cons_min_input", "Consumer Input", 16, items::INPUT_DATA)
        .field("cons_min_rsv_pad", "Consumer Reserved Pad", 16, &[0x95, 0x07])
        .field("cons_min_rsv_input", "Consumer Reserved Input", 16, items::INPUT_CONST)
        .field("cons_min_end_collection", "Consumer End Collection", 8, items::END_COLLECTION)
        .finish(26)
        .unwrap_or_else(|e| panic!("{e}"))
});

/// Vendor feature collection carried by gaming report maps, 23 bytes.
pub static BLE_LOGI_COLLECTION: LazyLock<RecordSchema> = LazyLock::new(|| {
    SchemaBuilder::new("BleLogiCollection")
        .field("logi_usage_page", "Vendor Usage Page", 24, &[0x06, 0x47, 0xFF])
        .field("logi_usage", "Vendor Usage", 16, &[0x09, 0x01])
        .field("logi_collection", "Vendor Collection", 16, items::APPLICATION_COLLECTION)
        .field("logi_report_id", "Vendor Report Id", 16, &[0x85, 0xF0])
        .field("logi_report_count", "Vendor Report Count", 16, &[0x95, 0x04])
        .field("logi_report_size", "Vendor Report Size", 16, &[0x75, 0x08])
        .field("logi_logical_minimum", "Vendor Logical Minimum", 16, &[0x15, 0x00])
        .field("logi_logical_maximum", "Vendor Logical Maximum", 24, &[0x26, 0xFF, 0x00])
        .field("logi_feature_usage", "Vendor Feature Usage", 16, &[0x09, 0x01])
        .field("logi_feature", "Vendor Feature", 16, items::FEATURE_DATA)
        .field("logi_end_collection", "Vendor End Collection", 8, items::END_COLLECTION)
        .finish(23)
        .unwrap_or_else(|e| panic!("{e}"))
});

/// BLE HID++ long collection, 28 bytes. The usage differs from the USB
/// long collection in its low byte.
pub static BLE_HIDPP_LONG: LazyLock<RecordSchema> = LazyLock::new(|| {
    SchemaBuilder::new("BleHidppLong")
        .field("hidpp20_usage_page", "HID++ Usage Page", 24, items::HIDPP_PAGE)
        .field("hidpp20_usage", "HID++ Usage", 24, &[0x0A, 0x02, 0x02])
        .field("hidpp20_collection", "HID++ Collection", 16, items::APPLICATION_COLLECTION)
        .field("hidpp20_report_id", "HID++ Report Id", 16, items::REPORT_ID_HIDPP_LONG)
        .field("hidpp20_report_count", "HID++ Report Count", 16, &[0x95, 0x13])
        .field("hidpp20_report_size", "HID++ Report Size", 16, &[0x75, 0x08])
        .field("hidpp20_logical_minimum", "HID++ Logical Minimum", 16, &[0x15, 0x00])
        .field("hidpp20_logical_maximum", "HID++ Logical Maximum", 24, &[0x26, 0xFF, 0x00])
        .field("hidpp20_input_usage", "HID++ Input Usage", 16, items::MOUSE_USAGE)
        .field("hidpp20_input", "HID++ Input", 16, items::INPUT_DATA_ABS)
        .field("hidpp20_output_usage", "HID++ Output Usage", 16, items::MOUSE_USAGE)
        .field("hidpp20_output", "HID++ Output", 16, items::OUTPUT_DATA_ABS)
        .field("hidpp20_end_collection", "HID++ End Collection", 8, items::END_COLLECTION)
        .finish(28)
        .unwrap_or_else(|e| panic!("{e}"))
});

/// Standard BLE report map, 209 bytes.
pub static HID_REPORT_MAP: LazyLock<RecordSchema> = LazyLock::new(|| {
    SchemaBuilder::new("HidReportMap")
        .concat(&BLE_KEYBOARD_LED)
        .concat(&BLE_MOUSE_12)
        .concat(&BLE_CONSUMER_CHROMEOS)
        .concat(&BLE_CONSUMER_MINIMUM)
        .concat(&BLE_HIDPP_LONG)
        .finish(209)
        .unwrap_or_else(|e| panic!("{e}"))
});

/// Gaming keyboard BLE report map, 203 bytes.
pub static HID_GAMING_REPORT_MAP: LazyLock<RecordSchema> = LazyLock::new(|| {
    SchemaBuilder::new("HidGamingReportMap")
        .concat(&BLE_KEYBOARD_LED)
        .concat(&BLE_MOUSE_16)
        .concat(&BLE_CONSUMER_GENERIC)
        .concat(&BLE_LOGI_COLLECTION)
        .concat(&BLE_HIDPP_LONG)
        .finish(203)
        .unwrap_or_else(|e| panic!("{e}"))
});

/// Gaming mouse BLE report map, 158 bytes.
pub static HID_GAMING_MOUSE_REPORT_MAP: LazyLock<RecordSchema> = LazyLock::new(|| {
    SchemaBuilder::new("HidGamingMouseReportMap")
        .concat(&BLE_KEYBOARD)
        .concat(&BLE_MOUSE_16)
        .concat(&BLE_LOGI_COLLECTION)
        .concat(&BLE_HIDPP_LONG)
        .finish(158)
        .unwrap_or_else(|e| panic!("{e}"))
});

/// Plain BLE mouse report map, 97 bytes.
pub static HID_MOUSE_REPORT_MAP: LazyLock<RecordSchema> = LazyLock::new(|| {
    SchemaBuilder::new("HidMouseReportMap")
        .concat(&BLE_MOUSE_12)
        .concat(&BLE_HIDPP_LONG)
        .finish(97)
        .unwrap_or_else(|e| panic!("{e}"))
});

descriptor_type!(
    /// Standard BLE report map.
    HidReportMapDescriptor => HID_REPORT_MAP
);

descriptor_type!(
    /// Gaming keyboard BLE report map.
    HidGamingReportMapDescriptor => HID_GAMING_REPORT_MAP
);

descriptor_type!(
    /// Gaming mouse BLE report map.
    HidGamingMouseReportMapDescriptor => HID_GAMING_MOUSE_REPORT_MAP
);

descriptor_type!(
    /// Plain BLE mouse report map.
    HidMouseReportMapDescriptor => HID_MOUSE_REPORT_MAP
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{image, CONSUMER_GENERIC_KEY_IMAGE};

    const KBD_HEAD_IMAGE: &str = "05010906A1018501";
    const MODIFIER_IMAGE: &str = "9508750115002501050719E029E78102";
    const LED_IMAGE: &str = "9505750115002501050819012905910295039103";
    const KEY_IMAGE: &str = "9506750826FF000507190029FF8100";
    const TOP_ROW_IMAGE: &str =
        "06D1FF0901A102850995007520170000008027FFFFFF7F050A19012900B103C0";
    const MOUSE_12_IMAGE: &str = "05010902A10185020901A1009510750115002501050919012910810205\
01A49502750C1600F826FF07093009318106B4950175081580257F09388106050C0A38028106C0C0";
    const MOUSE_16_IMAGE: &str = "05010902A10185020901A1009510750115002501050919012910810205\
019502751016008026FF7F093009318106950175081580257F09388106050C0A38028106C0C0";
    const CONSUMER_CHROMEOS_IMAGE: &str =
        "060CFF0901A101850395027510150126FF0219012AFF028100C0";
    const CONSUMER_MINIMUM_IMAGE: &str =
        "050C0901A101850495017501150025010AE200810295078103C0";
    const LOGI_IMAGE: &str = "0647FF0901A10185F095047508150026FF000901B102C0";
    const BLE_HIDPP_LONG_IMAGE: &str =
        "0643FF0A0202A101851195137508150026FF000902810009029100C0";

    fn keyboard_led_image() -> Vec<u8> {
        let mut bytes = image(KBD_HEAD_IMAGE);
        bytes.extend_from_slice(&image(MODIFIER_IMAGE));
        bytes.extend_from_slice(&image(LED_IMAGE));
        bytes.extend_from_slice(&image(KEY_IMAGE));
        bytes.push(0xC0);
        bytes
    }

    fn keyboard_image() -> Vec<u8> {
        let mut bytes = image(KBD_HEAD_IMAGE);
        bytes.extend_from_slice(&image(MODIFIER_IMAGE));
        bytes.extend_from_slice(&image(KEY_IMAGE));
        bytes.push(0xC0);
        bytes
    }

    #[test]
    fn test_keyboard_blocks_derive_from_top_row() -> Result<(), Box<dyn std::error::Error>> {
        let mut full = image(KBD_HEAD_IMAGE);
        full.extend_from_slice(&image(MODIFIER_IMAGE));
        full.extend_from_slice(&image(LED_IMAGE));
        full.extend_from_slice(&image(KEY_IMAGE));
        full.extend_from_slice(&image(TOP_ROW_IMAGE));
        full.push(0xC0);
        assert_eq!(full.len(), 92);
        assert_eq!(BLE_KEYBOARD_LED_TOP_ROW.default_image(), full);
        assert_eq!(BLE_KEYBOARD_LED.default_image(), keyboard_led_image());
        assert_eq!(BLE_KEYBOARD.default_image(), keyboard_image());
        Ok(())
    }

    #[test]
    fn test_mouse_16_widens_axes() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(BLE_MOUSE_12.default_image(), image(MOUSE_12_IMAGE));
        assert_eq!(BLE_MOUSE_16.default_image(), image(MOUSE_16_IMAGE));
        assert!(BLE_MOUSE_16.field("axis_push").is_none());
        assert_eq!(
            BLE_MOUSE_16
                .field("axis_report_size")
                .ok_or("missing field")?
                .default_bytes(),
            &[0x75, 0x10]
        );
        Ok(())
    }

    #[test]
    fn test_standard_map_matches_golden() -> Result<(), Box<dyn std::error::Error>> {
        let mut golden = keyboard_led_image();
        golden.extend_from_slice(&image(MOUSE_12_IMAGE));
        golden.extend_from_slice(&image(CONSUMER_CHROMEOS_IMAGE));
        golden.extend_from_slice(&image(CONSUMER_MINIMUM_IMAGE));
        golden.extend_from_slice(&image(BLE_HIDPP_LONG_IMAGE));
        assert_eq!(golden.len(), 209);
        assert_eq!(HidReportMapDescriptor::new().to_bytes(), golden);
        assert_eq!(HidReportMapDescriptor::parse(&golden)?.to_bytes(), golden);
        Ok(())
    }

    #[test]
    fn test_gaming_map_matches_golden() -> Result<(), Box<dyn std::error::Error>> {
        let mut golden = keyboard_led_image();
        golden.extend_from_slice(&image(MOUSE_16_IMAGE));
        golden.extend_from_slice(&image(CONSUMER_GENERIC_KEY_IMAGE));
        golden.extend_from_slice(&image(LOGI_IMAGE));
        golden.extend_from_slice(&image(BLE_HIDPP_LONG_IMAGE));
        assert_eq!(golden.len(), 203);
        assert_eq!(HidGamingReportMapDescriptor::new().to_bytes(), golden);
        Ok(())
    }

    #[test]
    fn test_gaming_mouse_map_matches_golden() -> Result<(), Box<dyn std::error::Error>> {
        let mut golden = keyboard_image();
        golden.extend_from_slice(&image(MOUSE_16_IMAGE));
        golden.extend_from_slice(&image(LOGI_IMAGE));
        golden.extend_from_slice(&image(BLE_HIDPP_LONG_IMAGE));
        assert_eq!(golden.len(), 158);
        assert_eq!(HidGamingMouseReportMapDescriptor::new().to_bytes(), golden);
        Ok(())
    }

    #[test]
    fn test_mouse_map_matches_golden() -> Result<(), Box<dyn std::error::Error>> {
        let mut golden = image(MOUSE_12_IMAGE);
        golden.extend_from_slice(&image(BLE_HIDPP_LONG_IMAGE));
        assert_eq!(golden.len(), 97);
        assert_eq!(HidMouseReportMapDescriptor::new().to_bytes(), golden);
        Ok(())
    }
}
