//! HID++ protocol collection layouts.

use std::sync::LazyLock;

use hidforge_field_model::{RecordSchema, SchemaBuilder};

use crate::descriptor_type;
use crate::items;

/// HID++ short-message collection, 28 bytes.
pub static HIDPP_SHORT: LazyLock<RecordSchema> = LazyLock::new(|| {
    SchemaBuilder::new("HidppShort")
        .field("short_usage_page", "Short Usage Page", 24, items::HIDPP_PAGE)
        .field("short_usage", "Short Usage", 24, items::HIDPP7_USAGE)
        .field("short_collection", "Short Collection", 16, items::APPLICATION_COLLECTION)
        .field("short_report_id", "Short Report Id", 16, items::REPORT_ID_HIDPP_SHORT)
        .field("short_report_count", "Short Report Count", 16, &[0x95, 0x06])
        .field("short_report_size", "Short Report Size", 16, &[0x75, 0x08])
        .field("short_logical_minimum", "Short Logical Minimum", 16, &[0x15, 0x00])
        .field("short_logical_maximum", "Short Logical Maximum", 24, &[0x26, 0xFF, 0x00])
        .field("short_input_usage", "Short Input Usage", 16, items::CONSUMER_CONTROL_USAGE)
        .field("short_input", "Short Input", 16, items::INPUT_DATA_ABS)
        .field("short_output_usage", "Short Output Usage", 16, items::CONSUMER_CONTROL_USAGE)
        .field("short_output", "Short Output", 16, items::OUTPUT_DATA_ABS)
        .field("short_end_collection", "Short End Collection", 8, items::END_COLLECTION)
        .finish(28)
        .unwrap_or_else(|e| panic!("{e}"))
});

/// HID++ long-message collection, 28 bytes.
pub static HIDPP_LONG: LazyLock<RecordSchema> = LazyLock::new(|| {
    SchemaBuilder::new("HidppLong")
        .field("long_usage_page", "Long Usage Page", 24, items::HIDPP_PAGE)
        .field("long_usage", "Long Usage", 24, items::HIDPP20_USAGE)
        .field("long_collection", "Long Collection", 16, items::APPLICATION_COLLECTION)
        .field("long_report_id", "Long Report Id", 16, items::REPORT_ID_HIDPP_LONG)
        .field("long_report_count", "Long Report Count", 16, &[0x95, 0x13])
        .field("long_report_size", "Long Report Size", 16, &[0x75, 0x08])
        .field("long_logical_minimum", "Long Logical Minimum", 16, &[0x15, 0x00])
        .field("long_logical_maximum", "Long Logical Maximum", 24, &[0x26, 0xFF, 0x00])
        .field("long_input_usage", "Long Input Usage", 16, items::MOUSE_USAGE)
        .field("long_input", "Long Input", 16, items::INPUT_DATA_ABS)
        .field("long_output_usage", "Long Output Usage", 16, items::MOUSE_USAGE)
        .field("long_output", "Long Output", 16, items::OUTPUT_DATA_ABS)
        .field("long_end_collection", "Long End Collection", 8, items::END_COLLECTION)
        .finish(28)
        .unwrap_or_else(|e| panic!("{e}"))
});

/// HID++ device interface: short plus long collection, 56 bytes.
pub static HIDPP_INTERFACE: LazyLock<RecordSchema> = LazyLock::new(|| {
    SchemaBuilder::new("HidppInterface")
        .concat(&HIDPP_SHORT)
        .concat(&HIDPP_LONG)
        .finish(56)
        .unwrap_or_else(|e| panic!("{e}"))
});

/// HID++ receiver interface: both collections under the receiver vendor
/// page with 16-bit usages, 54 bytes.
pub static HIDPP_RECEIVER_INTERFACE: LazyLock<RecordSchema> = LazyLock::new(|| {
    SchemaBuilder::new("HidppReceiverInterface")
        .field("short_usage_page", "Short Usage Page", 24, items::RECEIVER_PAGE)
        .field("short_usage", "Short Usage", 16, items::CONSUMER_CONTROL_USAGE)
        .take_from(&HIDPP_SHORT, "short_collection")
        .field("long_usage_page", "Long Usage Page", 24, items::RECEIVER_PAGE)
        .field("long_usage", "Long Usage", 16, items::MOUSE_USAGE)
        .take_from(&HIDPP_LONG, "long_collection")
        .finish(54)
        .unwrap_or_else(|e| panic!("{e}"))
});

/// Drifter firmware variant of the receiver interface, 54 bytes. The report
/// size item precedes the report count in both collections, so byte 9 reads
/// `0x75` where the regular receiver interface reads `0x95`.
pub static DRIFTER_HIDPP_INTERFACE: LazyLock<RecordSchema> = LazyLock::new(|| {
    SchemaBuilder::new("DrifterHidppInterface")
        .field("short_usage_page", "Short Usage Page", 24, items::RECEIVER_PAGE)
        .field("short_usage", "Short Usage", 16, items::CONSUMER_CONTROL_USAGE)
        .take_range(&HIDPP_SHORT, "short_collection", "short_report_count")
        .field("short_report_size", "Short Report Size", 16, &[0x75, 0x08])
        .field("short_report_count", "Short Report Count", 16, &[0x95, 0x06])
        .take_from(&HIDPP_SHORT, "short_logical_minimum")
        .field("long_usage_page", "Long Usage Page", 24, items::RECEIVER_PAGE)
        .field("long_usage", "Long Usage", 16, items::MOUSE_USAGE)
        .take_range(&HIDPP_LONG, "long_collection", "long_report_count")
        .field("long_report_size", "Long Report Size", 16, &[0x75, 0x08])
        .field("long_report_count", "Long Report Count", 16, &[0x95, 0x13])
        .take_from(&HIDPP_LONG, "long_logical_minimum")
        .finish(54)
        .unwrap_or_else(|e| panic!("{e}"))
});

descriptor_type!(
    /// HID++ device interface (short + long collections).
    HidppInterfaceDescriptor => HIDPP_INTERFACE
);

descriptor_type!(
    /// HID++ receiver interface.
    HidppReceiverInterfaceDescriptor => HIDPP_RECEIVER_INTERFACE
);

descriptor_type!(
    /// Drifter firmware HID++ interface.
    DrifterHidppInterfaceDescriptor => DRIFTER_HIDPP_INTERFACE
);
