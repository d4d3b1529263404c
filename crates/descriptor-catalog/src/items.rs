//! Shared HID report-descriptor item bytes.
//!
//! Every constant is the literal wire image of one short item (prefix byte
//! plus payload), exactly as it appears in the captured descriptors. One-off
//! values stay inline in the layout that uses them.

// Usage pages
pub const GENERIC_DESKTOP_PAGE: &[u8] = &[0x05, 0x01];
pub const KEYBOARD_PAGE: &[u8] = &[0x05, 0x07];
pub const LED_PAGE: &[u8] = &[0x05, 0x08];
pub const BUTTON_PAGE: &[u8] = &[0x05, 0x09];
pub const CONSUMER_PAGE: &[u8] = &[0x05, 0x0C];
pub const DIGITIZER_PAGE: &[u8] = &[0x05, 0x0D];
/// Vendor page carried by HID++ application collections.
pub const HIDPP_PAGE: &[u8] = &[0x06, 0x43, 0xFF];
/// Vendor page carried by HID++ receiver collections.
pub const RECEIVER_PAGE: &[u8] = &[0x06, 0x00, 0xFF];

// Usages
pub const KEYBOARD_USAGE: &[u8] = &[0x09, 0x06];
pub const MOUSE_USAGE: &[u8] = &[0x09, 0x02];
pub const CONSUMER_CONTROL_USAGE: &[u8] = &[0x09, 0x01];
pub const POINTER_USAGE: &[u8] = &[0x09, 0x01];
pub const TOUCHPAD_USAGE: &[u8] = &[0x09, 0x05];
pub const SYSTEM_CONTROL_USAGE: &[u8] = &[0x09, 0x80];
pub const HIDPP7_USAGE: &[u8] = &[0x0A, 0x01, 0x03];
pub const HIDPP20_USAGE: &[u8] = &[0x0A, 0x02, 0x03];
pub const VLP_MODE_USAGE: &[u8] = &[0x0A, 0x02, 0x1A];

// Collections
pub const APPLICATION_COLLECTION: &[u8] = &[0xA1, 0x01];
pub const LOGICAL_COLLECTION: &[u8] = &[0xA1, 0x02];
pub const PHYSICAL_COLLECTION: &[u8] = &[0xA1, 0x00];
pub const END_COLLECTION: &[u8] = &[0xC0];
pub const PUSH: &[u8] = &[0xA4];
pub const POP: &[u8] = &[0xB4];

// Main items
pub const INPUT_DATA: &[u8] = &[0x81, 0x02];
pub const INPUT_DATA_ABS: &[u8] = &[0x81, 0x00];
pub const INPUT_DATA_REL: &[u8] = &[0x81, 0x06];
pub const INPUT_CONST: &[u8] = &[0x81, 0x03];
pub const OUTPUT_DATA: &[u8] = &[0x91, 0x02];
pub const OUTPUT_DATA_ABS: &[u8] = &[0x91, 0x00];
pub const OUTPUT_CONST: &[u8] = &[0x91, 0x03];
pub const FEATURE_DATA: &[u8] = &[0xB1, 0x02];
pub const FEATURE_CONST: &[u8] = &[0xB1, 0x03];

// Report ids
pub const REPORT_ID_KEYBOARD: &[u8] = &[0x85, 0x01];
pub const REPORT_ID_MOUSE: &[u8] = &[0x85, 0x02];
pub const REPORT_ID_CONSUMER: &[u8] = &[0x85, 0x03];
pub const REPORT_ID_SYSTEM_CONTROL: &[u8] = &[0x85, 0x04];
pub const REPORT_ID_TOP_RAW: &[u8] = &[0x85, 0x09];
pub const REPORT_ID_CALL_STATE: &[u8] = &[0x85, 0x0B];
pub const REPORT_ID_HIDPP_SHORT: &[u8] = &[0x85, 0x10];
pub const REPORT_ID_HIDPP_LONG: &[u8] = &[0x85, 0x11];
pub const REPORT_ID_DIGITIZER: &[u8] = &[0x85, 0x28];
