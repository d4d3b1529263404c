//! System-control and call-state descriptor layouts.

use std::sync::LazyLock;

use hidforge_field_model::{RecordSchema, SchemaBuilder};

use crate::descriptor_type;
use crate::items;

/// System-control collection on keyboards, 39 bytes.
pub static SYSTEM_CONTROL_KEY: LazyLock<RecordSchema> = LazyLock::new(|| {
    SchemaBuilder::new("SystemControlKey")
        .field("sc_usage_page", "System Control Usage Page", 16, items::GENERIC_DESKTOP_PAGE)
        .field("sc_usage", "System Control Usage", 16, items::SYSTEM_CONTROL_USAGE)
        .field("sc_collection", "System Control Collection", 16, items::APPLICATION_COLLECTION)
        .field("sc_report_id", "System Control Report Id", 16, items::REPORT_ID_SYSTEM_CONTROL)
        .field("sc_report_count", "Power Report Count", 16, &[0x95, 0x01])
        .field("sc_report_size", "Power Report Size", 16, &[0x75, 0x02])
        .field("sc_logical_minimum", "Power Logical Minimum", 16, &[0x15, 0x01])
        .field("sc_logical_maximum", "Power Logical Maximum", 16, &[0x25, 0x03])
        .field("sc_sleep_usage", "System Sleep Usage", 16, &[0x09, 0x82])
        .field("sc_power_down_usage", "System Power Down Usage", 16, &[0x09, 0x81])
        .field("sc_wake_up_usage", "System Wake Up Usage", 16, &[0x09, 0x83])
        .field("sc_input", "Power Input", 16, items::INPUT_DATA_ABS)
        .field("sc_sys_report_size", "Sys Report Size", 16, &[0x75, 0x01])
        .field("sc_sys_logical_minimum", "Sys Logical Minimum", 16, &[0x15, 0x00])
        .field("sc_sys_logical_maximum", "Sys Logical Maximum", 16, &[0x25, 0x01])
        .field("sc_sys_usage", "Sys Do Not Disturb Usage", 16, &[0x09, 0x9B])
        .field("sc_sys_input", "Sys Input", 16, items::INPUT_DATA_REL)
        .field("sc_rsv_report_size", "Reserved Report Size", 16, &[0x75, 0x05])
        .field("sc_rsv_input", "Reserved Input", 16, items::INPUT_CONST)
        .field("sc_end_collection", "System Control End Collection", 8, items::END_COLLECTION)
        .finish(39)
        .unwrap_or_else(|e| panic!("{e}"))
});

/// Keyboard firmware v14 variant with a second sys usage, 45 bytes.
pub static SYSTEM_CONTROL_KEYBOARD_V14: LazyLock<RecordSchema> = LazyLock::new(|| {
    SchemaBuilder::new("SystemControlKeyboardV14")
        .take_until(&SYSTEM_CONTROL_KEY, "sc_sys_report_size")
        .field("sc_sys_report_count", "Sys Report Count", 16, &[0x95, 0x02])
        .field("sc_sys_report_size", "Sys Report Size", 16, &[0x75, 0x01])
        .field("sc_sys_logical_minimum", "Sys Logical Minimum", 16, &[0x15, 0x00])
        .field("sc_sys_logical_maximum", "Sys Logical Maximum", 16, &[0x25, 0x01])
        .field("sc_sys_usage", "Sys Do Not Disturb Usage", 16, &[0x09, 0x9B])
        .field("sc_sys_alt_usage", "Sys Microphone Mute Usage", 16, &[0x09, 0xA9])
        .field("sc_sys_input", "Sys Input", 16, items::INPUT_DATA_REL)
        .field("sc_rsv_report_count", "Reserved Report Count", 16, &[0x95, 0x01])
        .field("sc_rsv_report_size", "Reserved Report Size", 16, &[0x75, 0x04])
        .field("sc_rsv_input", "Reserved Input", 16, items::INPUT_CONST)
        .field("sc_end_collection", "System Control End Collection", 8, items::END_COLLECTION)
        .finish(45)
        .unwrap_or_else(|e| panic!("{e}"))
});

/// Bare system-control collection without the sys block, 29 bytes.
pub static SYSTEM_CONTROL: LazyLock<RecordSchema> = LazyLock::new(|| {
    SchemaBuilder::new("SystemControl")
        .take_until(&SYSTEM_CONTROL_KEY, "sc_sys_report_size")
        .field("sc_rsv_report_size", "Reserved Report Size", 16, &[0x75, 0x06])
        .take_from(&SYSTEM_CONTROL_KEY, "sc_rsv_input")
        .finish(29)
        .unwrap_or_else(|e| panic!("{e}"))
});

/// Call-state (microphone mute) collection, 25 bytes.
pub static CALL_STATE_KEY: LazyLock<RecordSchema> = LazyLock::new(|| {
    SchemaBuilder::new("CallStateKey")
        .field("call_usage_page", "Call State Usage Page", 16, items::GENERIC_DESKTOP_PAGE)
        .field("call_usage", "Call State Usage", 16, &[0x09, 0x13])
        .field("call_collection", "Call State Collection", 16, items::APPLICATION_COLLECTION)
        .field("call_report_id", "Call State Report Id", 16, items::REPORT_ID_CALL_STATE)
        .field("call_report_count", "Call State Report Count", 16, &[0x95, 0x01])
        .field("call_report_size", "Call State Report Size", 16, &[0x75, 0x01])
        .field("call_logical_minimum", "Call State Logical Minimum", 16, &[0x15, 0x00])
        .field("call_logical_maximum", "Call State Logical Maximum", 16, &[0x25, 0x01])
        .field("call_mute_usage", "Call Mute Usage", 16, &[0x09, 0xE1])
        .field("call_input", "Call State Input", 16, items::INPUT_DATA_REL)
        .field("call_rsv_report_size", "Reserved Report Size", 16, &[0x75, 0x0F])
        .field("call_rsv_input", "Reserved Input", 16, items::INPUT_CONST)
        .field("call_end_collection", "Call State End Collection", 8, items::END_COLLECTION)
        .finish(25)
        .unwrap_or_else(|e| panic!("{e}"))
});

descriptor_type!(
    /// System-control collection reported by keyboards.
    SystemControlKeyDescriptor => SYSTEM_CONTROL_KEY
);

descriptor_type!(
    /// v14 keyboard firmware system-control collection.
    SystemControlKeyboardV14Descriptor => SYSTEM_CONTROL_KEYBOARD_V14
);

descriptor_type!(
    /// Bare system-control collection.
    SystemControlDescriptor => SYSTEM_CONTROL
);

descriptor_type!(
    /// Call-state collection.
    CallStateKeyDescriptor => CALL_STATE_KEY
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{
        image, CALL_STATE_KEY_IMAGE, SYSTEM_CONTROL_KEY_IMAGE, SYSTEM_CONTROL_V14_IMAGE,
    };

    const SYSTEM_CONTROL_IMAGE: &str =
        "05010980A10185049501750215012503098209810983810075068103C0";

    #[test]
    fn test_key_matches_golden() -> Result<(), Box<dyn std::error::Error>> {
        let golden = image(SYSTEM_CONTROL_KEY_IMAGE);
        assert_eq!(golden.len(), 39);
        assert_eq!(SystemControlKeyDescriptor::new().to_bytes(), golden);
        assert_eq!(SystemControlKeyDescriptor::parse(&golden)?.to_bytes(), golden);
        Ok(())
    }

    #[test]
    fn test_v14_matches_golden() -> Result<(), Box<dyn std::error::Error>> {
        let golden = image(SYSTEM_CONTROL_V14_IMAGE);
        assert_eq!(golden.len(), 45);
        assert_eq!(SystemControlKeyboardV14Descriptor::new().to_bytes(), golden);
        assert_eq!(
            SystemControlKeyboardV14Descriptor::parse(&golden)?.to_bytes(),
            golden
        );
        Ok(())
    }

    #[test]
    fn test_bare_drops_sys_block() -> Result<(), Box<dyn std::error::Error>> {
        let golden = image(SYSTEM_CONTROL_IMAGE);
        assert_eq!(golden.len(), 29);
        assert_eq!(SystemControlDescriptor::new().to_bytes(), golden);
        Ok(())
    }

    #[test]
    fn test_call_state_matches_golden() -> Result<(), Box<dyn std::error::Error>> {
        let golden = image(CALL_STATE_KEY_IMAGE);
        assert_eq!(golden.len(), 25);
        assert_eq!(CallStateKeyDescriptor::new().to_bytes(), golden);
        assert_eq!(CallStateKeyDescriptor::parse(&golden)?.to_bytes(), golden);
        Ok(())
    }
}
