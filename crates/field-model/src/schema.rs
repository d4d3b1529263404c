//! Layout declaration and composition.
//!
//! A [`RecordSchema`] is a flat, ordered list of fields with a declared total
//! length. Schemas are built once through [`SchemaBuilder`] and composed from
//! each other by field name: append another layout wholesale (`concat`), copy
//! a named prefix/suffix/range of it around replacement fields (`take_until`,
//! `take_from`, `take_range`), or embed it as a single field (`embed`).
//!
//! `finish` cross-checks the declared total against the sum of the field
//! widths, so a layout that drifted from its advertised length fails at
//! definition time rather than at first parse.

use std::fmt;

use crate::error::{DescriptorError, DescriptorResult};
use crate::field::{FieldDef, FieldKind, FieldWidth};

/// Declared serialized length of a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaLen {
    /// Every instance serializes to exactly this many bytes.
    Fixed(usize),
    /// The layout ends with a variable field; instances fall in this
    /// inclusive byte range.
    Bounded { min: usize, max: usize },
}

/// An immutable descriptor layout.
pub struct RecordSchema {
    name: &'static str,
    fields: Vec<FieldDef>,
    len: SchemaLen,
}

impl RecordSchema {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    pub fn len(&self) -> SchemaLen {
        self.len
    }

    /// Total byte count for fixed layouts, `None` for bounded ones.
    pub fn fixed_len(&self) -> Option<usize> {
        match self.len {
            SchemaLen::Fixed(n) => Some(n),
            SchemaLen::Bounded { .. } => None,
        }
    }

    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub(crate) fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    /// Concatenation of every field's default bytes.
    pub fn default_image(&self) -> Vec<u8> {
        let mut out = Vec::new();
        for field in &self.fields {
            out.extend_from_slice(&field.default);
        }
        out
    }
}

impl fmt::Debug for RecordSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordSchema")
            .field("name", &self.name)
            .field("fields", &self.fields.len())
            .field("len", &self.len)
            .finish()
    }
}

/// Builder for [`RecordSchema`].
///
/// Composition methods record the first error they hit and keep accepting
/// calls; `finish` reports it. This keeps long layout declarations free of
/// per-step `?`.
pub struct SchemaBuilder {
    name: &'static str,
    fields: Vec<FieldDef>,
    err: Option<DescriptorError>,
}

impl SchemaBuilder {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            fields: Vec::new(),
            err: None,
        }
    }

    fn fail(&mut self, msg: String) {
        if self.err.is_none() {
            self.err = Some(DescriptorError::Configuration(format!(
                "{}: {msg}",
                self.name
            )));
        }
    }

    fn push(&mut self, field: FieldDef) {
        if self.fields.iter().any(|f| f.name == field.name) {
            self.fail(format!("duplicate field `{}`", field.name));
            return;
        }
        self.fields.push(field);
    }

    /// Fixed-width scalar field with a default byte image.
    pub fn field(
        mut self,
        name: &'static str,
        title: &'static str,
        bits: u16,
        default: &[u8],
    ) -> Self {
        if !u32::from(bits).is_multiple_of(8) {
            self.fail(format!("field `{name}` width {bits} is not a byte multiple"));
            return self;
        }
        if default.len() != usize::from(bits) / 8 {
            self.fail(format!(
                "field `{name}` default is {} bytes, width says {}",
                default.len(),
                bits / 8
            ));
            return self;
        }
        self.push(FieldDef {
            name,
            title,
            width: FieldWidth::Bits(bits),
            default: default.to_vec(),
            kind: FieldKind::Scalar,
        });
        self
    }

    /// Zero-width field: present in the layout, absent from the wire.
    pub fn elided(mut self, name: &'static str, title: &'static str) -> Self {
        self.push(FieldDef {
            name,
            title,
            width: FieldWidth::Bits(0),
            default: Vec::new(),
            kind: FieldKind::Scalar,
        });
        self
    }

    /// Variable-width trailing field bounded to `[min, max]` bytes.
    pub fn variable(
        mut self,
        name: &'static str,
        title: &'static str,
        min: usize,
        max: usize,
    ) -> Self {
        if min > max {
            self.fail(format!("field `{name}` bounds {min}..={max} are inverted"));
            return self;
        }
        self.push(FieldDef {
            name,
            title,
            width: FieldWidth::Bytes { min, max },
            default: Vec::new(),
            kind: FieldKind::Scalar,
        });
        self
    }

    /// Embed another layout as a single field; its parse recurses.
    pub fn embed(
        mut self,
        name: &'static str,
        title: &'static str,
        sub: &'static RecordSchema,
    ) -> Self {
        let Some(sub_len) = sub.fixed_len() else {
            self.fail(format!(
                "field `{name}` embeds bounded layout `{}`",
                sub.name
            ));
            return self;
        };
        let bits = sub_len * 8;
        let Ok(bits) = u16::try_from(bits) else {
            self.fail(format!("field `{name}` embedded layout too large"));
            return self;
        };
        self.push(FieldDef {
            name,
            title,
            width: FieldWidth::Bits(bits),
            default: sub.default_image(),
            kind: FieldKind::Embedded(sub),
        });
        self
    }

    /// Append every field of `other` (extension).
    pub fn concat(mut self, other: &RecordSchema) -> Self {
        for field in &other.fields {
            self.push(field.clone());
        }
        self
    }

    /// Copy the fields of `other` that precede `stop` (exclusive).
    pub fn take_until(mut self, other: &RecordSchema, stop: &str) -> Self {
        let Some(end) = other.field_index(stop) else {
            self.fail(format!("`{}` has no field `{stop}`", other.name));
            return self;
        };
        for field in &other.fields[..end] {
            self.push(field.clone());
        }
        self
    }

    /// Copy the fields of `other` from `start` (inclusive) to the end.
    pub fn take_from(mut self, other: &RecordSchema, start: &str) -> Self {
        let Some(begin) = other.field_index(start) else {
            self.fail(format!("`{}` has no field `{start}`", other.name));
            return self;
        };
        for field in &other.fields[begin..] {
            self.push(field.clone());
        }
        self
    }

    /// Copy the fields of `other` from `start` (inclusive) to `stop`
    /// (exclusive).
    pub fn take_range(mut self, other: &RecordSchema, start: &str, stop: &str) -> Self {
        let (Some(begin), Some(end)) = (other.field_index(start), other.field_index(stop)) else {
            self.fail(format!(
                "`{}` is missing `{start}` or `{stop}`",
                other.name
            ));
            return self;
        };
        if begin > end {
            self.fail(format!("`{start}`..`{stop}` is reversed in `{}`", other.name));
            return self;
        }
        for field in &other.fields[begin..end] {
            self.push(field.clone());
        }
        self
    }

    fn check_variable_placement(&mut self) {
        let last = self.fields.len().saturating_sub(1);
        for (i, field) in self.fields.iter().enumerate() {
            if matches!(field.width, FieldWidth::Bytes { .. }) && i != last {
                self.err = Some(DescriptorError::Configuration(format!(
                    "{}: variable field `{}` is not last",
                    self.name, field.name
                )));
                return;
            }
        }
    }

    /// Seal a fixed layout, checking the declared byte total against the sum
    /// of the field widths.
    pub fn finish(mut self, total_bytes: usize) -> DescriptorResult<RecordSchema> {
        self.check_variable_placement();
        if let Some(err) = self.err {
            return Err(err);
        }
        let mut sum = 0usize;
        for field in &self.fields {
            match field.width.fixed_bytes() {
                Some(n) => sum += n,
                None => {
                    return Err(DescriptorError::Configuration(format!(
                        "{}: variable field `{}` in fixed layout",
                        self.name, field.name
                    )));
                }
            }
        }
        if sum != total_bytes {
            return Err(DescriptorError::Configuration(format!(
                "{}: fields sum to {sum} bytes, declared {total_bytes}",
                self.name
            )));
        }
        Ok(RecordSchema {
            name: self.name,
            fields: self.fields,
            len: SchemaLen::Fixed(total_bytes),
        })
    }

    /// Seal a layout that ends with a variable field, bounded to
    /// `[min_bytes, max_bytes]` overall. Like [`finish`](Self::finish), the
    /// declared bounds are cross-checked: they must equal the fixed prefix
    /// length plus the variable field's own bounds.
    pub fn finish_bounded(
        mut self,
        min_bytes: usize,
        max_bytes: usize,
    ) -> DescriptorResult<RecordSchema> {
        self.check_variable_placement();
        if let Some(err) = self.err {
            return Err(err);
        }
        let mut fixed_sum = 0usize;
        let mut tail = None;
        for field in &self.fields {
            match field.width {
                FieldWidth::Bits(bits) => fixed_sum += usize::from(bits) / 8,
                FieldWidth::Bytes { min, max } => tail = Some((min, max)),
            }
        }
        let Some((tail_min, tail_max)) = tail else {
            return Err(DescriptorError::Configuration(format!(
                "{}: bounded layout has no trailing variable field",
                self.name
            )));
        };
        let (sum_min, sum_max) = (fixed_sum + tail_min, fixed_sum + tail_max);
        if (min_bytes, max_bytes) != (sum_min, sum_max) {
            return Err(DescriptorError::Configuration(format!(
                "{}: fields bound {sum_min}..={sum_max} bytes, declared {min_bytes}..={max_bytes}",
                self.name
            )));
        }
        Ok(RecordSchema {
            name: self.name,
            fields: self.fields,
            len: SchemaLen::Bounded {
                min: min_bytes,
                max: max_bytes,
            },
        })
    }
}
