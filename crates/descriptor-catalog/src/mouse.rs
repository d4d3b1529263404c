//! Mouse descriptor layouts.
//!
//! `MOUSE_COMMON` is the shared body (no trailing end-collection); every
//! concrete mouse layout derives from it. Receiver variants shift the axis
//! and wheel logical minima by one and materialize the AC-pan report count.

use std::sync::LazyLock;

use hidforge_field_model::{RecordSchema, SchemaBuilder};

use crate::consumer::CONSUMER_GENERIC_KEY;
use crate::descriptor_type;
use crate::items;
use crate::system_control::{CALL_STATE_KEY, SYSTEM_CONTROL_KEY, SYSTEM_CONTROL_KEYBOARD_V14};

/// Shared mouse body, 64 bytes, no application end-collection.
pub static MOUSE_COMMON: LazyLock<RecordSchema> = LazyLock::new(|| {
    SchemaBuilder::new("MouseCommon")
        .field("mouse_usage_page", "Mouse Usage Page", 16, items::GENERIC_DESKTOP_PAGE)
        .field("mouse_usage", "Mouse Usage", 16, items::MOUSE_USAGE)
        .field("mouse_collection", "Mouse Collection", 16, items::APPLICATION_COLLECTION)
        .elided("mouse_report_id", "Mouse Report Id")
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
        .field("axis_report_count", "Axis Report Count", 16, &[0x95, 0x02])
        .field("axis_report_size", "Axis Report Size", 16, &[0x75, 0x10])
        .field("axis_logical_minimum", "Axis Logical Minimum", 24, &[0x16, 0x00, 0x80])
        .field("axis_logical_maximum", "Axis Logical Maximum", 24, &[0x26, 0xFF, 0x7F])
        .field("axis_usage_page", "Axis Usage Page", 16, items::GENERIC_DESKTOP_PAGE)
        .field("axis_x_usage", "Axis X Usage", 16, &[0x09, 0x30])
        .field("axis_y_usage", "Axis Y Usage", 16, &[0x09, 0x31])
        .field("axis_input", "Axis Input", 16, items::INPUT_DATA_REL)
        .field("wheel_report_count", "Wheel Report Count", 16, &[0x95, 0x01])
        .field("wheel_report_size", "Wheel Report Size", 16, &[0x75, 0x08])
        .field("wheel_logical_minimum", "Wheel Logical Minimum", 16, &[0x15, 0x80])
        .field("wheel_logical_maximum", "Wheel Logical Maximum", 16, &[0x25, 0x7F])
        .field("wheel_usage", "Wheel Usage", 16, &[0x09, 0x38])
        .field("wheel_input", "Wheel Input", 16, items::INPUT_DATA_REL)
        .elided("acpan_report_count", "AC Pan Report Count")
        .field("acpan_usage_page", "AC Pan Usage Page", 16, items::CONSUMER_PAGE)
        .field("acpan_usage", "AC Pan Usage", 24, &[0x0A, 0x38, 0x02])
        .field("acpan_input", "AC Pan Input", 16, items::INPUT_DATA_REL)
        .field("end_linked_collection", "End Linked Collection", 8, items::END_COLLECTION)
        .finish(64)
        .unwrap_or_else(|e| panic!("{e}"))
});

/// Mouse on a device, 65 bytes.
pub static MOUSE_KEY: LazyLock<RecordSchema> = LazyLock::new(|| {
    SchemaBuilder::new("MouseKey")
        .concat(&MOUSE_COMMON)
        .field("mouse_end_collection", "Mouse End Collection", 8, items::END_COLLECTION)
        .finish(65)
        .unwrap_or_else(|e| panic!("{e}"))
});

/// Mouse relayed by a receiver, 67 bytes.
pub static MOUSE_RECEIVER: LazyLock<RecordSchema> = LazyLock::new(|| {
    SchemaBuilder::new("MouseReceiver")
        .take_until(&MOUSE_KEY, "axis_logical_minimum")
        .field("axis_logical_minimum", "Axis Logical Minimum", 24, &[0x16, 0x01, 0x80])
        .take_range(&MOUSE_KEY, "axis_logical_maximum", "wheel_logical_minimum")
        .field("wheel_logical_minimum", "Wheel Logical Minimum", 16, &[0x15, 0x81])
        .take_range(&MOUSE_KEY, "wheel_logical_maximum", "acpan_report_count")
        .field("acpan_report_count", "AC Pan Report Count", 16, &[0x95, 0x01])
        .take_from(&MOUSE_KEY, "acpan_usage_page")
        .finish(67)
        .unwrap_or_else(|e| panic!("{e}"))
});

/// Mouse with the Nvidia vendor extension, 81 bytes.
pub static MOUSE_NVIDIA_EXTENSION_KEY: LazyLock<RecordSchema> = LazyLock::new(|| {
    SchemaBuilder::new("MouseNvidiaExtensionKey")
        .concat(&MOUSE_COMMON)
        .field("nv_usage_page", "Nvidia Usage Page", 24, items::RECEIVER_PAGE)
        .field("nv_usage", "Nvidia Usage", 16, &[0x09, 0xF1])
        .field("nv_report_size", "Nvidia Report Size", 16, &[0x75, 0x08])
        .field("nv_report_count", "Nvidia Report Count", 16, &[0x95, 0x05])
        .field("nv_logical_minimum", "Nvidia Logical Minimum", 16, &[0x15, 0x00])
        .field("nv_logical_maximum", "Nvidia Logical Maximum", 24, &[0x26, 0xFF, 0x00])
        .field("nv_input", "Nvidia Input", 16, items::INPUT_DATA_ABS)
        .field("mouse_end_collection", "Mouse End Collection", 8, items::END_COLLECTION)
        .finish(81)
        .unwrap_or_else(|e| panic!("{e}"))
});

/// Receiver-relayed mouse with the Nvidia vendor extension, 83 bytes.
pub static MOUSE_RECEIVER_NVIDIA_EXTENSION_KEY: LazyLock<RecordSchema> = LazyLock::new(|| {
    SchemaBuilder::new("MouseReceiverNvidiaExtensionKey")
        .take_until(&MOUSE_NVIDIA_EXTENSION_KEY, "axis_logical_minimum")
        .field("axis_logical_minimum", "Axis Logical Minimum", 24, &[0x16, 0x01, 0x80])
        .take_range(&MOUSE_NVIDIA_EXTENSION_KEY, "axis_logical_maximum", "wheel_logical_minimum")
        .field("wheel_logical_minimum", "Wheel Logical Minimum", 16, &[0x15, 0x81])
        .take_range(&MOUSE_NVIDIA_EXTENSION_KEY, "wheel_logical_maximum", "acpan_report_count")
        .field("acpan_report_count", "AC Pan Report Count", 16, &[0x95, 0x01])
        .take_from(&MOUSE_NVIDIA_EXTENSION_KEY, "acpan_usage_page")
        .finish(83)
        .unwrap_or_else(|e| panic!("{e}"))
});

/// Mouse interface: key layout with a materialized report id plus embedded
/// consumer and v14 system-control sub-records. 137 bytes.
pub static MOUSE_INTERFACE: LazyLock<RecordSchema> = LazyLock::new(|| {
    SchemaBuilder::new("MouseInterface")
        .take_until(&MOUSE_KEY, "mouse_report_id")
        .field("mouse_report_id", "Mouse Report Id", 16, items::REPORT_ID_MOUSE)
        .take_from(&MOUSE_KEY, "pointer_usage")
        .embed("consumer_generic", "Consumer Generic Data", &CONSUMER_GENERIC_KEY)
        .embed("system_control", "System Control Data", &SYSTEM_CONTROL_KEYBOARD_V14)
        .finish(137)
        .unwrap_or_else(|e| panic!("{e}"))
});

/// Receiver mouse interface with embedded consumer, system-control, and
/// call-state sub-records. 158 bytes.
pub static MOUSE_RECEIVER_INTERFACE: LazyLock<RecordSchema> = LazyLock::new(|| {
    SchemaBuilder::new("MouseReceiverInterface")
        .take_until(&MOUSE_RECEIVER, "mouse_report_id")
        .field("mouse_report_id", "Mouse Report Id", 16, items::REPORT_ID_MOUSE)
        .take_from(&MOUSE_RECEIVER, "pointer_usage")
        .embed("consumer_generic", "Consumer Generic Data", &CONSUMER_GENERIC_KEY)
        .embed("system_control", "System Control Data", &SYSTEM_CONTROL_KEY)
        .embed("call_state", "Call State Data", &CALL_STATE_KEY)
        .finish(158)
        .unwrap_or_else(|e| panic!("{e}"))
});

descriptor_type!(
    /// Mouse on a device.
    MouseKeyDescriptor => MOUSE_KEY
);

descriptor_type!(
    /// Mouse relayed by a receiver.
    MouseReceiverDescriptor => MOUSE_RECEIVER
);

descriptor_type!(
    /// Mouse with the Nvidia vendor extension.
    MouseNvidiaExtensionKeyDescriptor => MOUSE_NVIDIA_EXTENSION_KEY
);

descriptor_type!(
    /// Receiver-relayed mouse with the Nvidia vendor extension.
    MouseReceiverNvidiaExtensionKeyDescriptor => MOUSE_RECEIVER_NVIDIA_EXTENSION_KEY
);

descriptor_type!(
    /// Mouse + consumer + system-control interface.
    MouseInterfaceDescriptor => MOUSE_INTERFACE
);

descriptor_type!(
    /// Receiver mouse + consumer + system-control + call-state interface.
    MouseReceiverInterfaceDescriptor => MOUSE_RECEIVER_INTERFACE
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{
        image, CALL_STATE_KEY_IMAGE, CONSUMER_GENERIC_KEY_IMAGE, SYSTEM_CONTROL_KEY_IMAGE,
        SYSTEM_CONTROL_V14_IMAGE,
    };

    const MOUSE_KEY_IMAGE: &str =
        "05010902A1010901A100951075011500250105091901291081029502751016008026FF7F0501093009318106950175081580257F09388106050C0A38028106C0C0";
    const MOUSE_INTERFACE_HEAD_IMAGE: &str =
        "05010902A10185020901A100951075011500250105091901291081029502751016008026FF7F0501093009318106950175081580257F09388106050C0A38028106C0C0";
    const MOUSE_RECEIVER_INTERFACE_HEAD_IMAGE: &str =
        "05010902A10185020901A100951075011500250105091901291081029502751016018026FF7F0501093009318106950175081581257F093881069501050C0A38028106C0C0";

    #[test]
    fn test_key_matches_golden() -> Result<(), Box<dyn std::error::Error>> {
        let golden = image(MOUSE_KEY_IMAGE);
        assert_eq!(golden.len(), 65);
        assert_eq!(MouseKeyDescriptor::new().to_bytes(), golden);
        assert_eq!(MouseKeyDescriptor::parse(&golden)?.to_bytes(), golden);
        Ok(())
    }

    #[test]
    fn test_receiver_shifts_logical_minima() -> Result<(), Box<dyn std::error::Error>> {
        let receiver = MouseReceiverDescriptor::new();
        let record = receiver.record();
        assert_eq!(
            record.get("axis_logical_minimum").ok_or("missing field")?,
            &[0x16, 0x01, 0x80]
        );
        assert_eq!(
            record.get("wheel_logical_minimum").ok_or("missing field")?,
            &[0x15, 0x81]
        );
        assert_eq!(
            record.get("acpan_report_count").ok_or("missing field")?,
            &[0x95, 0x01]
        );
        assert_eq!(receiver.to_bytes().len(), 67);
        Ok(())
    }

    #[test]
    fn test_nvidia_extensions() {
        assert_eq!(MouseNvidiaExtensionKeyDescriptor::new().to_bytes().len(), 81);
        assert_eq!(
            MouseReceiverNvidiaExtensionKeyDescriptor::new().to_bytes().len(),
            83
        );
    }

    #[test]
    fn test_interface_matches_golden() -> Result<(), Box<dyn std::error::Error>> {
        let mut golden = image(MOUSE_INTERFACE_HEAD_IMAGE);
        golden.extend_from_slice(&image(CONSUMER_GENERIC_KEY_IMAGE));
        golden.extend_from_slice(&image(SYSTEM_CONTROL_V14_IMAGE));
        assert_eq!(golden.len(), 137);

        assert_eq!(MouseInterfaceDescriptor::new().to_bytes(), golden);

        let parsed = MouseInterfaceDescriptor::parse(&golden)?;
        let consumer = parsed
            .record()
            .sub_record("consumer_generic")
            .ok_or("missing sub-record")?;
        assert_eq!(consumer.to_bytes(), image(CONSUMER_GENERIC_KEY_IMAGE));
        assert_eq!(
            consumer.get("cons_report_id").ok_or("missing field")?,
            &[0x85, 0x03]
        );
        Ok(())
    }

    #[test]
    fn test_receiver_interface_matches_golden() -> Result<(), Box<dyn std::error::Error>> {
        let mut golden = image(MOUSE_RECEIVER_INTERFACE_HEAD_IMAGE);
        golden.extend_from_slice(&image(CONSUMER_GENERIC_KEY_IMAGE));
        golden.extend_from_slice(&image(SYSTEM_CONTROL_KEY_IMAGE));
        golden.extend_from_slice(&image(CALL_STATE_KEY_IMAGE));
        assert_eq!(golden.len(), 158);

        assert_eq!(MouseReceiverInterfaceDescriptor::new().to_bytes(), golden);

        let parsed = MouseReceiverInterfaceDescriptor::parse(&golden)?;
        let call_state = parsed
            .record()
            .sub_record("call_state")
            .ok_or("missing sub-record")?;
        assert_eq!(call_state.to_bytes(), image(CALL_STATE_KEY_IMAGE));
        Ok(())
    }
}
