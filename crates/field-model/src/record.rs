//! Parsed instances of a layout.

use std::fmt;

use crate::error::{DescriptorError, DescriptorResult};
use crate::field::{FieldKind, FieldWidth};
use crate::hex;
use crate::schema::{RecordSchema, SchemaLen};

/// Value held by one field of a [`Record`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Bytes(Vec<u8>),
    Record(Record),
}

/// One parsed (or default-constructed) instance of a [`RecordSchema`].
///
/// Carries an optional opaque capture timestamp; it is metadata only, never
/// serialized, and excluded from equality.
#[derive(Debug, Clone)]
pub struct Record {
    schema: &'static RecordSchema,
    values: Vec<FieldValue>,
    timestamp: Option<u64>,
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.schema, other.schema) && self.values == other.values
    }
}

impl Eq for Record {}

fn take<'a>(data: &'a [u8], offset: &mut usize, count: usize) -> DescriptorResult<&'a [u8]> {
    let end = offset.saturating_add(count);
    let chunk = data
        .get(*offset..end)
        .ok_or(DescriptorError::Format {
            expected: end,
            actual: data.len(),
        })?;
    *offset = end;
    Ok(chunk)
}

impl Record {
    /// A record whose serialization equals the layout's default image.
    pub fn with_defaults(schema: &'static RecordSchema) -> Self {
        let values = schema
            .fields()
            .iter()
            .map(|field| match field.kind() {
                FieldKind::Scalar => FieldValue::Bytes(field.default_bytes().to_vec()),
                FieldKind::Embedded(sub) => FieldValue::Record(Record::with_defaults(sub)),
            })
            .collect();
        Self {
            schema,
            values,
            timestamp: None,
        }
    }

    /// Parse `data` against `schema`.
    ///
    /// The buffer length must match the declared layout length exactly
    /// (or fall within the declared bounds for a layout with a variable
    /// tail). Fields are consumed in declaration order, most significant
    /// field first; embedded fields are parsed recursively.
    ///
    /// # Errors
    ///
    /// [`DescriptorError::Format`] / [`DescriptorError::FormatRange`] on a
    /// length mismatch, [`DescriptorError::Validation`] when the variable
    /// tail violates its bounds.
    pub fn parse(schema: &'static RecordSchema, data: &[u8]) -> DescriptorResult<Self> {
        tracing::trace!(layout = schema.name(), len = data.len(), "parsing record");
        match schema.len() {
            SchemaLen::Fixed(expected) => {
                if data.len() != expected {
                    return Err(DescriptorError::Format {
                        expected,
                        actual: data.len(),
                    });
                }
            }
            SchemaLen::Bounded { min, max } => {
                if data.len() < min || data.len() > max {
                    return Err(DescriptorError::FormatRange {
                        min,
                        max,
                        actual: data.len(),
                    });
                }
            }
        }

        let mut offset = 0usize;
        let mut values = Vec::with_capacity(schema.fields().len());
        for field in schema.fields() {
            let value = match (field.width(), field.kind()) {
                (FieldWidth::Bits(_), FieldKind::Embedded(sub)) => {
                    let sub_len = sub.fixed_len().unwrap_or(0);
                    let chunk = take(data, &mut offset, sub_len)?;
                    FieldValue::Record(Record::parse(sub, chunk)?)
                }
                (FieldWidth::Bits(bits), FieldKind::Scalar) => {
                    let chunk = take(data, &mut offset, usize::from(bits) / 8)?;
                    FieldValue::Bytes(chunk.to_vec())
                }
                (FieldWidth::Bytes { min, max }, _) => {
                    let rest = data.len() - offset;
                    if rest < min || rest > max {
                        return Err(DescriptorError::Validation {
                            field: field.name(),
                            value: hex::encode(&data[offset..]),
                            constraint: format!("length must be within {min}..={max}"),
                        });
                    }
                    let chunk = take(data, &mut offset, rest)?;
                    FieldValue::Bytes(chunk.to_vec())
                }
            };
            values.push(value);
        }

        Ok(Self {
            schema,
            values,
            timestamp: None,
        })
    }

    /// Parse with a capture timestamp attached.
    ///
    /// # Errors
    ///
    /// Same as [`Record::parse`].
    pub fn parse_with_timestamp(
        schema: &'static RecordSchema,
        data: &[u8],
        timestamp: u64,
    ) -> DescriptorResult<Self> {
        let mut record = Self::parse(schema, data)?;
        record.timestamp = Some(timestamp);
        Ok(record)
    }

    /// Serialize to the wire image. Infallible because every mutation path
    /// validates lengths up front.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        for value in &self.values {
            match value {
                FieldValue::Bytes(bytes) => out.extend_from_slice(bytes),
                FieldValue::Record(sub) => out.extend_from_slice(&sub.to_bytes()),
            }
        }
        out
    }

    pub fn schema(&self) -> &'static RecordSchema {
        self.schema
    }

    pub fn timestamp(&self) -> Option<u64> {
        self.timestamp
    }

    pub fn set_timestamp(&mut self, timestamp: Option<u64>) {
        self.timestamp = timestamp;
    }

    /// Scalar field bytes, `None` for unknown names or embedded fields.
    pub fn get(&self, name: &str) -> Option<&[u8]> {
        let index = self.schema.field_index(name)?;
        match self.values.get(index)? {
            FieldValue::Bytes(bytes) => Some(bytes),
            FieldValue::Record(_) => None,
        }
    }

    /// Embedded sub-record, `None` for unknown names or scalar fields.
    pub fn sub_record(&self, name: &str) -> Option<&Record> {
        let index = self.schema.field_index(name)?;
        match self.values.get(index)? {
            FieldValue::Record(sub) => Some(sub),
            FieldValue::Bytes(_) => None,
        }
    }

    pub fn sub_record_mut(&mut self, name: &str) -> Option<&mut Record> {
        let index = self.schema.field_index(name)?;
        match self.values.get_mut(index)? {
            FieldValue::Record(sub) => Some(sub),
            FieldValue::Bytes(_) => None,
        }
    }

    /// Replace a scalar field's bytes, re-running its length check.
    ///
    /// # Errors
    ///
    /// [`DescriptorError::Validation`] when the value violates the field's
    /// width or bounds, or when the field is unknown or embedded.
    pub fn set(&mut self, name: &'static str, bytes: &[u8]) -> DescriptorResult<()> {
        let Some(index) = self.schema.field_index(name) else {
            return Err(DescriptorError::Validation {
                field: name,
                value: hex::encode(bytes),
                constraint: "no such field".to_string(),
            });
        };
        let field = &self.schema.fields()[index];
        match (field.width(), field.kind()) {
            (_, FieldKind::Embedded(_)) => {
                return Err(DescriptorError::Validation {
                    field: name,
                    value: hex::encode(bytes),
                    constraint: "embedded field, mutate the sub-record".to_string(),
                });
            }
            (FieldWidth::Bits(bits), FieldKind::Scalar) => {
                let expected = usize::from(bits) / 8;
                if bytes.len() != expected {
                    return Err(DescriptorError::Validation {
                        field: name,
                        value: hex::encode(bytes),
                        constraint: format!("length must be exactly {expected}"),
                    });
                }
            }
            (FieldWidth::Bytes { min, max }, FieldKind::Scalar) => {
                if bytes.len() < min || bytes.len() > max {
                    return Err(DescriptorError::Validation {
                        field: name,
                        value: hex::encode(bytes),
                        constraint: format!("length must be within {min}..={max}"),
                    });
                }
            }
        }
        if let Some(slot) = self.values.get_mut(index) {
            *slot = FieldValue::Bytes(bytes.to_vec());
        }
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.schema.name())?;
        for (field, value) in self.schema.fields().iter().zip(&self.values) {
            match value {
                FieldValue::Bytes(bytes) => {
                    writeln!(f, "  {}: {}", field.name(), hex::encode(bytes))?;
                }
                FieldValue::Record(sub) => {
                    writeln!(f, "  {}: [{}]", field.name(), hex::encode(&sub.to_bytes()))?;
                }
            }
        }
        Ok(())
    }
}
