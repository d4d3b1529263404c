//! Classification of raw interface-descriptor payloads.
//!
//! Devices report their descriptors as opaque byte strings. The dispatcher
//! reads the leading usage-page and usage items, then selects a layout by
//! usage and payload length. Two firmware lines share the same usage and
//! length at one point, so that branch also inspects a discriminating byte.

use hidforge_descriptor_catalog::{digitizer, generic, hidpp, keyboard, mouse, report_map, vlp};
use hidforge_field_model::{hex, DescriptorError, DescriptorResult, Record, RecordSchema};

/// Shortest payload with a dedicated layout.
const MIN_PAYLOAD_LEN: usize = 23;
/// Longest payload the generic layout accepts.
const MAX_PAYLOAD_LEN: usize = 434;

/// What to do with a payload whose usage is known but whose length has no
/// layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GapPolicy {
    /// Fail the dispatch.
    #[default]
    Reject,
    /// Log and return no record.
    Ignore,
}

/// Every layout the dispatcher can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptorKind {
    KeyboardDevice,
    KeyboardReceiver,
    KeyboardInterface,
    KeyboardBitmapKey,
    KeyboardBitmapInterface,
    KeyboardBitmapReceiver,
    MouseKey,
    MouseNvidiaExtensionKey,
    MouseReceiverNvidiaExtensionKey,
    MouseInterface,
    MouseReceiverInterface,
    HidppInterface,
    HidppReceiverInterface,
    DrifterHidppInterface,
    VlpInterface,
    Digitizer5Fingers,
    Digitizer3Fingers,
    HidReportMap,
    HidGamingReportMap,
    HidGamingMouseReportMap,
    HidMouseReportMap,
    Generic,
}

impl DescriptorKind {
    /// The layout this kind parses with.
    pub fn schema(self) -> &'static RecordSchema {
        match self {
            Self::KeyboardDevice => &keyboard::KEYBOARD_DEVICE,
            Self::KeyboardReceiver => &keyboard::KEYBOARD_RECEIVER,
            Self::KeyboardInterface => &keyboard::KEYBOARD_INTERFACE,
            Self::KeyboardBitmapKey => &keyboard::KEYBOARD_BITMAP_KEY,
            Self::KeyboardBitmapInterface => &keyboard::KEYBOARD_BITMAP_INTERFACE,
            Self::KeyboardBitmapReceiver => &keyboard::KEYBOARD_BITMAP_RECEIVER,
            Self::MouseKey => &mouse::MOUSE_KEY,
            Self::MouseNvidiaExtensionKey => &mouse::MOUSE_NVIDIA_EXTENSION_KEY,
            Self::MouseReceiverNvidiaExtensionKey => &mouse::MOUSE_RECEIVER_NVIDIA_EXTENSION_KEY,
            Self::MouseInterface => &mouse::MOUSE_INTERFACE,
            Self::MouseReceiverInterface => &mouse::MOUSE_RECEIVER_INTERFACE,
            Self::HidppInterface => &hidpp::HIDPP_INTERFACE,
            Self::HidppReceiverInterface => &hidpp::HIDPP_RECEIVER_INTERFACE,
            Self::DrifterHidppInterface => &hidpp::DRIFTER_HIDPP_INTERFACE,
            Self::VlpInterface => &vlp::VLP_INTERFACE,
            Self::Digitizer5Fingers => &digitizer::DIGITIZER_5_FINGERS,
            Self::Digitizer3Fingers => &digitizer::DIGITIZER_3_FINGERS,
            Self::HidReportMap => &report_map::HID_REPORT_MAP,
            Self::HidGamingReportMap => &report_map::HID_GAMING_REPORT_MAP,
            Self::HidGamingMouseReportMap => &report_map::HID_GAMING_MOUSE_REPORT_MAP,
            Self::HidMouseReportMap => &report_map::HID_MOUSE_REPORT_MAP,
            Self::Generic => &generic::GENERIC_REPORT,
        }
    }

    /// Layout name, stable across releases.
    pub fn name(self) -> &'static str {
        self.schema().name()
    }
}

/// Leading usage extracted from the first items of a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LeadingUsage {
    Short([u8; 2]),
    Wide([u8; 3]),
}

impl LeadingUsage {
    fn bytes(&self) -> &[u8] {
        match self {
            Self::Short(bytes) => bytes,
            Self::Wide(bytes) => bytes,
        }
    }
}

/// Maps raw descriptor payloads to catalog layouts.
#[derive(Debug, Clone, Copy, Default)]
pub struct DescriptorDispatcher {
    gap_policy: GapPolicy,
}

impl DescriptorDispatcher {
    pub fn new(gap_policy: GapPolicy) -> Self {
        Self { gap_policy }
    }

    /// Selects a layout for `data` without parsing the full payload.
    ///
    /// Returns `Ok(None)` only under [`GapPolicy::Ignore`], for payloads
    /// whose usage is recognized but whose length is not.
    pub fn classify(&self, data: &[u8]) -> DescriptorResult<Option<DescriptorKind>> {
        if data.len() < MIN_PAYLOAD_LEN || data.len() > MAX_PAYLOAD_LEN {
            return Err(DescriptorError::FormatRange {
                min: MIN_PAYLOAD_LEN,
                max: MAX_PAYLOAD_LEN,
                actual: data.len(),
            });
        }

        let usage = leading_usage(data)?;
        let len = data.len();
        let kind = match usage {
            LeadingUsage::Short([0x09, 0x06]) => match len {
                60 => DescriptorKind::KeyboardDevice,
                59 => DescriptorKind::KeyboardReceiver,
                125 => DescriptorKind::KeyboardInterface,
                67 => DescriptorKind::KeyboardBitmapKey,
                133 => DescriptorKind::KeyboardBitmapInterface,
                123 => DescriptorKind::KeyboardBitmapReceiver,
                209 => DescriptorKind::HidReportMap,
                203 => DescriptorKind::HidGamingReportMap,
                158 => DescriptorKind::HidGamingMouseReportMap,
                _ => return self.gap(&usage, len),
            },
            LeadingUsage::Short([0x09, 0x02]) => match len {
                65 => DescriptorKind::MouseKey,
                81 => DescriptorKind::MouseNvidiaExtensionKey,
                83 => DescriptorKind::MouseReceiverNvidiaExtensionKey,
                137 => DescriptorKind::MouseInterface,
                158 => DescriptorKind::MouseReceiverInterface,
                97 => DescriptorKind::HidMouseReportMap,
                _ => DescriptorKind::Generic,
            },
            LeadingUsage::Wide([0x0A, 0x01, 0x03]) => match len {
                56 => DescriptorKind::HidppInterface,
                _ => return self.gap(&usage, len),
            },
            // Receiver HID++ interfaces lead with the plain consumer usage.
            // Drifter firmware emits the same usage and length but puts the
            // report-size item first, so byte 9 disambiguates.
            LeadingUsage::Short([0x09, 0x01]) => match len {
                54 if data[9] == 0x75 => DescriptorKind::DrifterHidppInterface,
                54 => DescriptorKind::HidppReceiverInterface,
                _ => return self.gap(&usage, len),
            },
            LeadingUsage::Wide([0x0A, 0x02, 0x1A]) => DescriptorKind::VlpInterface,
            LeadingUsage::Short([0x09, 0x05]) => match len {
                429 => DescriptorKind::Digitizer5Fingers,
                289 => DescriptorKind::Digitizer3Fingers,
                _ => return self.gap(&usage, len),
            },
            _ => DescriptorKind::Generic,
        };
        Ok(Some(kind))
    }

    /// Classifies `data` and parses it with the selected layout.
    pub fn dispatch(&self, data: &[u8]) -> DescriptorResult<Option<Record>> {
        let Some(kind) = self.classify(data)? else {
            return Ok(None);
        };
        Record::parse(kind.schema(), data).map(Some)
    }

    /// Like [`dispatch`](Self::dispatch), stamping the record with the
    /// capture time.
    pub fn dispatch_with_timestamp(
        &self,
        data: &[u8],
        timestamp: u64,
    ) -> DescriptorResult<Option<Record>> {
        let Some(kind) = self.classify(data)? else {
            return Ok(None);
        };
        Record::parse_with_timestamp(kind.schema(), data, timestamp).map(Some)
    }

    fn gap(&self, usage: &LeadingUsage, len: usize) -> DescriptorResult<Option<DescriptorKind>> {
        let usage = hex::encode(usage.bytes());
        match self.gap_policy {
            GapPolicy::Reject => Err(DescriptorError::Unmatched { usage, len }),
            GapPolicy::Ignore => {
                tracing::warn!(%usage, len, "no layout for payload length");
                Ok(None)
            }
        }
    }
}

/// Reads the usage item that follows the leading usage-page item.
fn leading_usage(data: &[u8]) -> DescriptorResult<LeadingUsage> {
    match data {
        [0x05, _, u0, u1, ..] => Ok(LeadingUsage::Short([*u0, *u1])),
        [0x06, 0x00, _, u0, u1, ..] => Ok(LeadingUsage::Short([*u0, *u1])),
        [0x06, 0x43, _, u0, u1, u2, ..] => Ok(LeadingUsage::Wide([*u0, *u1, *u2])),
        _ => Err(DescriptorError::UnknownFormat {
            bytes: hex::encode(&data[..data.len().min(6)]),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hidforge_descriptor_catalog::digitizer::{
        Digitizer3FingersDescriptor, Digitizer5FingersDescriptor,
    };
    use hidforge_descriptor_catalog::hidpp::{
        DrifterHidppInterfaceDescriptor, HidppInterfaceDescriptor,
        HidppReceiverInterfaceDescriptor,
    };
    use hidforge_descriptor_catalog::keyboard::{
        KeyboardBitmapKeyDescriptor, KeyboardDeviceDescriptor, KeyboardInterfaceDescriptor,
    };
    use hidforge_descriptor_catalog::mouse::MouseKeyDescriptor;
    use hidforge_descriptor_catalog::report_map::{
        HidGamingMouseReportMapDescriptor, HidGamingReportMapDescriptor,
        HidMouseReportMapDescriptor, HidReportMapDescriptor,
    };
    use hidforge_descriptor_catalog::vlp::VlpInterfaceDescriptor;
    use proptest::prelude::*;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    fn classify(data: &[u8]) -> DescriptorResult<Option<DescriptorKind>> {
        DescriptorDispatcher::default().classify(data)
    }

    #[test]
    fn test_keyboard_lengths_select_keyboard_layouts() -> TestResult {
        let cases = [
            (KeyboardDeviceDescriptor::new().to_bytes(), DescriptorKind::KeyboardDevice),
            (KeyboardInterfaceDescriptor::new().to_bytes(), DescriptorKind::KeyboardInterface),
            (KeyboardBitmapKeyDescriptor::new().to_bytes(), DescriptorKind::KeyboardBitmapKey),
        ];
        for (payload, expected) in cases {
            assert_eq!(classify(&payload)?, Some(expected));
        }
        Ok(())
    }

    #[test]
    fn test_report_map_lengths_select_map_layouts() -> TestResult {
        let cases = [
            (HidReportMapDescriptor::new().to_bytes(), DescriptorKind::HidReportMap),
            (HidGamingReportMapDescriptor::new().to_bytes(), DescriptorKind::HidGamingReportMap),
            (
                HidGamingMouseReportMapDescriptor::new().to_bytes(),
                DescriptorKind::HidGamingMouseReportMap,
            ),
            (HidMouseReportMapDescriptor::new().to_bytes(), DescriptorKind::HidMouseReportMap),
        ];
        for (payload, expected) in cases {
            assert_eq!(classify(&payload)?, Some(expected));
        }
        Ok(())
    }

    #[test]
    fn test_dispatch_round_trips_payload() -> TestResult {
        let payload = KeyboardDeviceDescriptor::new().to_bytes();
        let record = DescriptorDispatcher::default()
            .dispatch(&payload)?
            .ok_or("no record")?;
        assert_eq!(record.schema().name(), "KeyboardDevice");
        assert_eq!(record.to_bytes(), payload);
        Ok(())
    }

    #[test]
    fn test_drifter_distinguished_by_item_order() -> TestResult {
        let receiver = HidppReceiverInterfaceDescriptor::new().to_bytes();
        let drifter = DrifterHidppInterfaceDescriptor::new().to_bytes();
        assert_eq!(receiver.len(), drifter.len());
        assert_eq!(classify(&receiver)?, Some(DescriptorKind::HidppReceiverInterface));
        assert_eq!(classify(&drifter)?, Some(DescriptorKind::DrifterHidppInterface));
        Ok(())
    }

    #[test]
    fn test_hidpp_device_interface_uses_wide_usage() -> TestResult {
        let payload = HidppInterfaceDescriptor::new().to_bytes();
        assert_eq!(classify(&payload)?, Some(DescriptorKind::HidppInterface));
        Ok(())
    }

    #[test]
    fn test_vlp_interface_selected_by_usage_alone() -> TestResult {
        let payload = VlpInterfaceDescriptor::new().to_bytes();
        assert_eq!(classify(&payload)?, Some(DescriptorKind::VlpInterface));

        // Usage matches but the layout length does not; parse reports it.
        assert!(DescriptorDispatcher::default().dispatch(&payload[..100]).is_err());
        Ok(())
    }

    #[test]
    fn test_digitizer_lengths_select_finger_counts() -> TestResult {
        let five = Digitizer5FingersDescriptor::new().to_bytes();
        let three = Digitizer3FingersDescriptor::new().to_bytes();
        assert_eq!(classify(&five)?, Some(DescriptorKind::Digitizer5Fingers));
        assert_eq!(classify(&three)?, Some(DescriptorKind::Digitizer3Fingers));
        Ok(())
    }

    #[test]
    fn test_unknown_leading_item_rejected() {
        let payload = [0xAA; 30];
        assert!(matches!(
            classify(&payload),
            Err(DescriptorError::UnknownFormat { .. })
        ));
    }

    #[test]
    fn test_bounds_rejected_before_classification() {
        assert!(matches!(
            classify(&[0x05; 22]),
            Err(DescriptorError::FormatRange { actual: 22, .. })
        ));
        assert!(matches!(
            classify(&[0x05; 435]),
            Err(DescriptorError::FormatRange { actual: 435, .. })
        ));
    }

    #[test]
    fn test_gap_policy_controls_unmatched_lengths() -> TestResult {
        // Keyboard usage with a length no layout covers.
        let mut payload = KeyboardDeviceDescriptor::new().to_bytes();
        payload.push(0x00);

        let reject = DescriptorDispatcher::new(GapPolicy::Reject);
        assert!(matches!(
            reject.classify(&payload),
            Err(DescriptorError::Unmatched { len: 61, .. })
        ));

        let ignore = DescriptorDispatcher::new(GapPolicy::Ignore);
        assert_eq!(ignore.classify(&payload)?, None);
        assert_eq!(ignore.dispatch(&payload)?, None);
        Ok(())
    }

    #[test]
    fn test_odd_mouse_length_falls_back_to_generic() -> TestResult {
        let mut payload = MouseKeyDescriptor::new().to_bytes();
        payload.push(0x00);
        assert_eq!(classify(&payload)?, Some(DescriptorKind::Generic));

        let record = DescriptorDispatcher::default()
            .dispatch(&payload)?
            .ok_or("no record")?;
        assert_eq!(record.schema().name(), "GenericReport");
        assert_eq!(record.to_bytes(), payload);
        Ok(())
    }

    #[test]
    fn test_timestamp_stamped_on_dispatch() -> TestResult {
        let payload = KeyboardDeviceDescriptor::new().to_bytes();
        let record = DescriptorDispatcher::default()
            .dispatch_with_timestamp(&payload, 1_724_140_800)?
            .ok_or("no record")?;
        assert_eq!(record.timestamp(), Some(1_724_140_800));
        Ok(())
    }

    proptest! {
        // The mouse branch has a generic fallback, so any in-bounds payload
        // with a mouse header classifies to some kind regardless of body
        // bytes or length.
        #[test]
        fn prop_mouse_header_always_classifies(
            body in proptest::collection::vec(any::<u8>(), 19..200),
        ) {
            let mut payload = vec![0x05, 0x01, 0x09, 0x02];
            payload.extend_from_slice(&body);
            prop_assert!(matches!(classify(&payload), Ok(Some(_))));
        }
    }
}
