//! Field definitions: the atoms a descriptor layout is made of.

use std::fmt;

use crate::schema::RecordSchema;

/// Wire width of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldWidth {
    /// Exact width in bits. Must be a byte multiple. Zero is legal and means
    /// the field is elided from the wire entirely.
    Bits(u16),
    /// Variable byte length, bounded inclusively. Only legal as the last
    /// field of a layout.
    Bytes { min: usize, max: usize },
}

impl FieldWidth {
    /// Byte count for fixed-width fields, `None` for variable ones.
    pub fn fixed_bytes(self) -> Option<usize> {
        match self {
            FieldWidth::Bits(bits) => Some(usize::from(bits) / 8),
            FieldWidth::Bytes { .. } => None,
        }
    }
}

/// What a field holds.
#[derive(Clone)]
pub enum FieldKind {
    /// Raw bytes of the declared width.
    Scalar,
    /// A complete sub-record with its own layout; parse recurses into it.
    Embedded(&'static RecordSchema),
}

impl fmt::Debug for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Scalar => write!(f, "Scalar"),
            FieldKind::Embedded(schema) => write!(f, "Embedded({})", schema.name()),
        }
    }
}

/// A single named field in a descriptor layout.
#[derive(Debug, Clone)]
pub struct FieldDef {
    pub(crate) name: &'static str,
    pub(crate) title: &'static str,
    pub(crate) width: FieldWidth,
    pub(crate) default: Vec<u8>,
    pub(crate) kind: FieldKind,
}

impl FieldDef {
    /// Machine identifier, unique within a layout.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Human-readable label.
    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn width(&self) -> FieldWidth {
        self.width
    }

    /// Default byte image. For embedded fields this is the sub-layout's
    /// default image.
    pub fn default_bytes(&self) -> &[u8] {
        &self.default
    }

    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }
}
