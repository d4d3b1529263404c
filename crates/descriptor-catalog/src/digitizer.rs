//! Touchpad digitizer descriptor layouts.

use std::sync::LazyLock;

use hidforge_field_model::{RecordSchema, SchemaBuilder};

use crate::descriptor_type;
use crate::items;

/// One finger logical collection, 70 bytes. Embedded five or three times
/// in the full digitizer layouts.
pub static FINGER_COLLECTION: LazyLock<RecordSchema> = LazyLock::new(|| {
    SchemaBuilder::new("FingerCollection")
        .field("finger_usage", "Finger Usage", 16, &[0x09, 0x22])
        .field("finger_collection", "Finger Collection", 16, items::LOGICAL_COLLECTION)
        .field("tip_report_count", "Tip Report Count", 16, &[0x95, 0x02])
        .field("tip_report_size", "Tip Report Size", 16, &[0x75, 0x01])
        .field("tip_logical_minimum", "Tip Logical Minimum", 16, &[0x15, 0x00])
        .field("tip_logical_maximum", "Tip Logical Maximum", 16, &[0x25, 0x01])
        .field("touch_valid_usage", "Touch Valid Usage", 16, &[0x09, 0x47])
        .field("tip_switch_usage", "Tip Switch Usage", 16, &[0x09, 0x42])
        .field("tip_input", "Tip Input", 16, items::INPUT_DATA)
        .field("contact_report_count", "Contact Report Count", 16, &[0x95, 0x01])
        .field("contact_report_size", "Contact Report Size", 16, &[0x75, 0x06])
        .field("contact_logical_maximum", "Contact Logical Maximum", 16, &[0x25, 0x04])
        .field("contact_id_usage", "Contact Id Usage", 16, &[0x09, 0x51])
        .field("contact_input", "Contact Input", 16, items::INPUT_DATA)
        .field("pressure_report_size", "Pressure Report Size", 16, &[0x75, 0x08])
        .field("pressure_logical_maximum", "Pressure Logical Maximum", 24, &[0x26, 0xFF, 0x00])
        .field("pressure_usage", "Pressure Usage", 16, &[0x09, 0x30])
        .field("pressure_input", "Pressure Input", 16, items::INPUT_DATA)
        .field("global_push", "Global Push", 8, items::PUSH)
        .field("x_report_size", "X Report Size", 16, &[0x75, 0x0C])
        .field("x_logical_maximum", "X Logical Maximum", 24, &[0x26, 0xD7, 0x0A])
        .field("x_physical_minimum", "X Physical Minimum", 16, &[0x35, 0x00])
        .field("x_physical_maximum", "X Physical Maximum", 24, &[0x46, 0x92, 0x04])
        .field("x_unit_exponent", "X Unit Exponent", 16, &[0x55, 0x0E])
        .field("x_unit", "X Unit", 16, &[0x65, 0x11])
        .field("x_usage_page", "X Usage Page", 16, items::GENERIC_DESKTOP_PAGE)
        .field("x_usage", "X Usage", 16, &[0x09, 0x30])
        .field("x_input", "X Input", 16, items::INPUT_DATA)
        .field("y_logical_maximum", "Y Logical Maximum", 24, &[0x26, 0xFA, 0x06])
        .field("y_physical_maximum", "Y Physical Maximum", 24, &[0x46, 0xF3, 0x02])
        .field("y_usage", "Y Usage", 16, &[0x09, 0x31])
        .field("y_input", "Y Input", 16, items::INPUT_DATA)
        .field("global_pop", "Global Pop", 8, items::POP)
        .field("finger_end_collection", "Finger End Collection", 8, items::END_COLLECTION)
        .finish(70)
        .unwrap_or_else(|e| panic!("{e}"))
});

/// Windows precision-touchpad capabilities feature report, 10 bytes.
pub static WIN_DEVICE_CAPABILITIES: LazyLock<RecordSchema> = LazyLock::new(|| {
    SchemaBuilder::new("WinDeviceCapabilities")
        .field("cap_report_id", "Capabilities Report Id", 16, &[0x85, 0x29])
        .field("cap_report_size", "Capabilities Report Size", 16, &[0x75, 0x08])
        .field("cap_logical_maximum", "Capabilities Logical Maximum", 16, &[0x25, 0x0F])
        .field("cap_contact_max_usage", "Contact Count Maximum Usage", 16, &[0x09, 0x55])
        .field("cap_feature", "Capabilities Feature", 16, items::FEATURE_DATA)
        .finish(10)
        .unwrap_or_else(|e| panic!("{e}"))
});

/// Windows precision-touchpad certification blob feature report, 15 bytes.
pub static WIN_DEVICE_CERTIFICATION: LazyLock<RecordSchema> = LazyLock::new(|| {
    SchemaBuilder::new("WinDeviceCertification")
        .field("cert_report_id", "Certification Report Id", 16, &[0x85, 0x2A])
        .field("cert_report_count", "Certification Report Count", 24, &[0x96, 0x00, 0x01])
        .field("cert_logical_maximum", "Certification Logical Maximum", 24, &[0x26, 0xFF, 0x00])
        .field("cert_usage_page", "Certification Usage Page", 24, items::RECEIVER_PAGE)
        .field("cert_usage", "Certification Usage", 16, &[0x09, 0xC5])
        .field("cert_feature", "Certification Feature", 16, items::FEATURE_DATA)
        .finish(15)
        .unwrap_or_else(|e| panic!("{e}"))
});

/// Five-finger touchpad digitizer, 429 bytes.
pub static DIGITIZER_5_FINGERS: LazyLock<RecordSchema> = LazyLock::new(|| {
    SchemaBuilder::new("Digitizer5Fingers")
        .field("dig_usage_page", "Digitizer Usage Page", 16, items::DIGITIZER_PAGE)
        .field("dig_usage", "Touchpad Usage", 16, items::TOUCHPAD_USAGE)
        .field("dig_collection", "Digitizer Collection", 16, items::APPLICATION_COLLECTION)
        .field("dig_report_id", "Digitizer Report Id", 16, items::REPORT_ID_DIGITIZER)
        .embed("finger_1", "Finger 1", &FINGER_COLLECTION)
        .embed("finger_2", "Finger 2", &FINGER_COLLECTION)
        .embed("finger_3", "Finger 3", &FINGER_COLLECTION)
        .embed("finger_4", "Finger 4", &FINGER_COLLECTION)
        .embed("finger_5", "Finger 5", &FINGER_COLLECTION)
        .field("contact_count_report_size", "Contact Count Report Size", 16, &[0x75, 0x07])
        .field("contact_count_logical_maximum", "Contact Count Logical Maximum", 16, &[0x25, 0x05])
        .field("contact_count_usage", "Contact Count Usage", 16, &[0x09, 0x54])
        .field("contact_count_input", "Contact Count Input", 16, items::INPUT_DATA)
        .field("button_report_size", "Button Report Size", 16, &[0x75, 0x01])
        .field("button_logical_maximum", "Button Logical Maximum", 16, &[0x25, 0x01])
        .field("button_usage_page", "Button Usage Page", 16, items::BUTTON_PAGE)
        .field("button_usage", "Button Usage", 16, &[0x09, 0x01])
        .field("button_input", "Button Input", 16, items::INPUT_DATA)
        .field("scan_time_report_size", "Scan Time Report Size", 16, &[0x75, 0x10])
        .field(
            "scan_time_logical_maximum",
            "Scan Time Logical Maximum",
            40,
            &[0x27, 0xFF, 0xFF, 0x00, 0x00],
        )
        .field(
            "scan_time_physical_maximum",
            "Scan Time Physical Maximum",
            40,
            &[0x47, 0xFF, 0xFF, 0x00, 0x00],
        )
        .field("scan_time_unit_exponent", "Scan Time Unit Exponent", 16, &[0x55, 0x0C])
        .field("scan_time_unit", "Scan Time Unit", 24, &[0x66, 0x01, 0x10])
        .field("scan_time_usage_page", "Scan Time Usage Page", 16, items::DIGITIZER_PAGE)
        .field("scan_time_usage", "Scan Time Usage", 16, &[0x09, 0x56])
        .field("scan_time_input", "Scan Time Input", 16, items::INPUT_DATA)
        .field("unit_reset", "Unit Reset", 16, &[0x65, 0x00])
        .field("exponent_reset", "Unit Exponent Reset", 16, &[0x55, 0x00])
        .embed("capabilities", "Device Capabilities", &WIN_DEVICE_CAPABILITIES)
        .embed("certification", "Device Certification", &WIN_DEVICE_CERTIFICATION)
        .field("dig_end_collection", "Digitizer End Collection", 8, items::END_COLLECTION)
        .finish(429)
        .unwrap_or_else(|e| panic!("{e}"))
});

/// Three-finger touchpad digitizer, 289 bytes.
pub static DIGITIZER_3_FINGERS: LazyLock<RecordSchema> = LazyLock::new(|| {
    SchemaBuilder::new("Digitizer3Fingers")
        .take_until(&DIGITIZER_5_FINGERS, "finger_4")
        .take_from(&DIGITIZER_5_FINGERS, "contact_count_report_size")
        .finish(289)
        .unwrap_or_else(|e| panic!("{e}"))
});

descriptor_type!(
    /// Five-finger touchpad digitizer interface.
    Digitizer5FingersDescriptor => DIGITIZER_5_FINGERS
);

descriptor_type!(
    /// Three-finger touchpad digitizer interface.
    Digitizer3FingersDescriptor => DIGITIZER_3_FINGERS
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{image, FINGER_COLLECTION_IMAGE};

    const DIGITIZER_HEAD_IMAGE: &str = "050D0905A1018528";
    const DIGITIZER_TAIL_IMAGE: &str = "750725050954810275012501050909018102751027FFFF000047FFFF0000550C660110050D0956810265005500";
    const WIN_CAPABILITIES_IMAGE: &str = "85297508250F0955B102";
    const WIN_CERTIFICATION_IMAGE: &str = "852A96000126FF000600FF09C5B102";

    fn digitizer_image(fingers: usize) -> Vec<u8> {
        let mut bytes = image(DIGITIZER_HEAD_IMAGE);
        for _ in 0..fingers {
            bytes.extend_from_slice(&image(FINGER_COLLECTION_IMAGE));
        }
        bytes.extend_from_slice(&image(DIGITIZER_TAIL_IMAGE));
        bytes.extend_from_slice(&image(WIN_CAPABILITIES_IMAGE));
        bytes.extend_from_slice(&image(WIN_CERTIFICATION_IMAGE));
        bytes.push(0xC0);
        bytes
    }

    #[test]
    fn test_five_fingers_matches_golden() -> Result<(), Box<dyn std::error::Error>> {
        let golden = digitizer_image(5);
        assert_eq!(golden.len(), 429);
        assert_eq!(Digitizer5FingersDescriptor::new().to_bytes(), golden);
        assert_eq!(Digitizer5FingersDescriptor::parse(&golden)?.to_bytes(), golden);
        Ok(())
    }

    #[test]
    fn test_three_fingers_matches_golden() -> Result<(), Box<dyn std::error::Error>> {
        let golden = digitizer_image(3);
        assert_eq!(golden.len(), 289);
        assert_eq!(Digitizer3FingersDescriptor::new().to_bytes(), golden);
        assert_eq!(Digitizer3FingersDescriptor::parse(&golden)?.to_bytes(), golden);
        Ok(())
    }

    #[test]
    fn test_embedded_fingers_round_trip() -> Result<(), Box<dyn std::error::Error>> {
        let parsed = Digitizer5FingersDescriptor::parse(&digitizer_image(5))?;
        for name in ["finger_1", "finger_2", "finger_3", "finger_4", "finger_5"] {
            let finger = parsed
                .record()
                .sub_record(name)
                .ok_or("missing finger collection")?;
            assert_eq!(finger.to_bytes(), image(FINGER_COLLECTION_IMAGE));
            assert_eq!(finger.get("tip_switch_usage").ok_or("missing field")?, &[0x09, 0x42]);
        }
        Ok(())
    }

    #[test]
    fn test_finger_count_mismatch_rejected() {
        let five = digitizer_image(5);
        assert!(Digitizer3FingersDescriptor::parse(&five).is_err());
    }
}
