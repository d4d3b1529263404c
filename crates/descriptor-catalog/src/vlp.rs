//! Very-large-payload (VLP) protocol collection layouts.

use std::sync::LazyLock;

use hidforge_field_model::{RecordSchema, SchemaBuilder};

use crate::descriptor_type;
use crate::items;
use crate::system_control::SYSTEM_CONTROL;

/// VLP long-message collection, 28 bytes. Shares the HID++ long report id.
pub static VLP_LONG: LazyLock<RecordSchema> = LazyLock::new(|| {
    SchemaBuilder::new("VlpLong")
        .field("vlp_long_usage_page", "VLP Long Usage Page", 24, items::HIDPP_PAGE)
        .field("vlp_long_usage", "VLP Long Usage", 24, items::VLP_MODE_USAGE)
        .field("vlp_long_collection", "VLP Long Collection", 16, items::APPLICATION_COLLECTION)
        .field("vlp_long_report_id", "VLP Long Report Id", 16, items::REPORT_ID_HIDPP_LONG)
        .field("vlp_long_report_count", "VLP Long Report Count", 16, &[0x95, 0x13])
        .field("vlp_long_report_size", "VLP Long Report Size", 16, &[0x75, 0x08])
        .field("vlp_long_logical_minimum", "VLP Long Logical Minimum", 16, &[0x15, 0x00])
        .field("vlp_long_logical_maximum", "VLP Long Logical Maximum", 24, &[0x26, 0xFF, 0x00])
        .field("vlp_long_input_usage", "VLP Long Input Usage", 16, items::MOUSE_USAGE)
        .field("vlp_long_input", "VLP Long Input", 16, items::INPUT_DATA_ABS)
        .field("vlp_long_output_usage", "VLP Long Output Usage", 16, items::MOUSE_USAGE)
        .field("vlp_long_output", "VLP Long Output", 16, items::OUTPUT_DATA_ABS)
        .field("vlp_long_end_collection", "VLP Long End Collection", 8, items::END_COLLECTION)
        .finish(28)
        .unwrap_or_else(|e| panic!("{e}"))
});

/// VLP normal-transfer collection with buffered-byte items, 31 bytes.
pub static VLP_NORMAL: LazyLock<RecordSchema> = LazyLock::new(|| {
    SchemaBuilder::new("VlpNormal")
        .field("vlp_normal_usage_page", "VLP Normal Usage Page", 24, items::HIDPP_PAGE)
        .field("vlp_normal_usage", "VLP Normal Usage", 24, &[0x0A, 0x01, 0x1A])
        .field("vlp_normal_collection", "VLP Normal Collection", 16, items::APPLICATION_COLLECTION)
        .field("vlp_normal_report_id", "VLP Normal Report Id", 16, &[0x85, 0x12])
        .field("vlp_normal_report_count", "VLP Normal Report Count", 24, &[0x96, 0x1F, 0x00])
        .field("vlp_normal_report_size", "VLP Normal Report Size", 16, &[0x75, 0x08])
        .field("vlp_normal_logical_minimum", "VLP Normal Logical Minimum", 16, &[0x15, 0x00])
        .field("vlp_normal_logical_maximum", "VLP Normal Logical Maximum", 24, &[0x26, 0xFF, 0x00])
        .field("vlp_normal_input_usage", "VLP Normal Input Usage", 16, &[0x09, 0x03])
        .field("vlp_normal_input", "VLP Normal Buffered Input", 24, &[0x92, 0x02, 0x01])
        .field("vlp_normal_output_usage", "VLP Normal Output Usage", 16, &[0x09, 0x03])
        .field("vlp_normal_output", "VLP Normal Buffered Output", 24, &[0x93, 0x02, 0x01])
        .field("vlp_normal_end_collection", "VLP Normal End Collection", 8, items::END_COLLECTION)
        .finish(31)
        .unwrap_or_else(|e| panic!("{e}"))
});

/// VLP extended-transfer collection, output only, 26 bytes.
pub static VLP_EXTENDED: LazyLock<RecordSchema> = LazyLock::new(|| {
    SchemaBuilder::new("VlpExtended")
        .field("vlp_ext_usage_page", "VLP Extended Usage Page", 24, items::HIDPP_PAGE)
        .field("vlp_ext_usage", "VLP Extended Usage", 24, &[0x0A, 0x03, 0x1A])
        .field("vlp_ext_collection", "VLP Extended Collection", 16, items::APPLICATION_COLLECTION)
        .field("vlp_ext_report_id", "VLP Extended Report Id", 16, &[0x85, 0x13])
        .field("vlp_ext_report_count", "VLP Extended Report Count", 24, &[0x96, 0xFE, 0x0F])
        .field("vlp_ext_report_size", "VLP Extended Report Size", 16, &[0x75, 0x08])
        .field("vlp_ext_logical_minimum", "VLP Extended Logical Minimum", 16, &[0x15, 0x00])
        .field("vlp_ext_logical_maximum", "VLP Extended Logical Maximum", 24, &[0x26, 0xFF, 0x00])
        .field("vlp_ext_usage_inout", "VLP Extended In Out Usage", 16, &[0x09, 0x04])
        .field("vlp_ext_output", "VLP Extended Buffered Output", 24, &[0x93, 0x02, 0x01])
        .field("vlp_ext_end_collection", "VLP Extended End Collection", 8, items::END_COLLECTION)
        .finish(26)
        .unwrap_or_else(|e| panic!("{e}"))
});

/// Full VLP interface, 114 bytes.
pub static VLP_INTERFACE: LazyLock<RecordSchema> = LazyLock::new(|| {
    SchemaBuilder::new("VlpInterface")
        .concat(&VLP_LONG)
        .concat(&VLP_NORMAL)
        .concat(&VLP_EXTENDED)
        .concat(&SYSTEM_CONTROL)
        .finish(114)
        .unwrap_or_else(|e| panic!("{e}"))
});

descriptor_type!(
    /// VLP mode interface (long + normal + extended + system control).
    VlpInterfaceDescriptor => VLP_INTERFACE
);
