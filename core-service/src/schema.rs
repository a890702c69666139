//! Declarative shape checks for options/params bags.
//!
//! Each facade method declares the shape it accepts once, as static
//! [`Schema`] data next to its typed options struct (see [`crate::options`]).
//! The same declaration drives validation here and the [`fmt::Display`]
//! rendering used in documentation and error messages.
//!
//! Rules:
//! - unknown keys are tolerated
//! - `null` counts as absent
//! - a missing required field, a wrong primitive type or a value outside an
//!   enumeration fails with [`PaymentError::SchemaValidation`] naming the full
//!   field path (e.g. `options.line_items[1].quantity`)

use serde_json::{Map, Value};
use std::fmt;

use crate::error::{PaymentError, Result};

/// Expected shape of a single value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Number,
    Bool,
    /// A string restricted to the listed values.
    OneOf(&'static [&'static str]),
    ArrayOf(&'static FieldKind),
    /// A nested mapping with its own fields.
    Shape(&'static [FieldSpec]),
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => f.write_str("string"),
            Self::Number => f.write_str("number"),
            Self::Bool => f.write_str("bool"),
            Self::OneOf(values) => write!(f, "one of [{}]", values.join(", ")),
            Self::ArrayOf(kind) => write!(f, "array of {}", kind),
            Self::Shape(_) => f.write_str("object"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
        }
    }

    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
        }
    }
}

/// Declared shape of one options/params argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    pub fields: &'static [FieldSpec],
}

impl Schema {
    pub const fn new(fields: &'static [FieldSpec]) -> Self {
        Self { fields }
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|spec| spec.name == name)
    }

    /// Validates `value` as the argument `arg` of `method`.
    ///
    /// `null` is accepted as an empty mapping, so a schema without required
    /// fields passes when the caller supplies nothing.
    pub fn check(&self, value: &Value, arg: &str, method: &str) -> Result<()> {
        match value {
            Value::Null => check_fields(self.fields, &Map::new(), arg, method),
            Value::Object(map) => check_fields(self.fields, map, arg, method),
            other => Err(mismatch(method, arg, "object", other)),
        }
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_fields(f, self.fields, 0)
    }
}

fn write_fields(f: &mut fmt::Formatter<'_>, fields: &[FieldSpec], depth: usize) -> fmt::Result {
    for spec in fields {
        writeln!(
            f,
            "{:indent$}{}: {}{}",
            "",
            spec.name,
            spec.kind,
            if spec.required { " (required)" } else { "" },
            indent = depth * 2
        )?;

        let mut kind = &spec.kind;
        while let FieldKind::ArrayOf(inner) = kind {
            kind = *inner;
        }
        if let FieldKind::Shape(nested) = kind {
            write_fields(f, nested, depth + 1)?;
        }
    }
    Ok(())
}

/// Validates a single field found (or not) at `path`.
pub fn check_field(spec: &FieldSpec, value: Option<&Value>, path: &str, method: &str) -> Result<()> {
    match value {
        None | Some(Value::Null) if spec.required => Err(PaymentError::SchemaValidation {
            method: method.to_string(),
            field: path.to_string(),
            expected: format!("{} (required)", spec.kind),
            found: "nothing".to_string(),
        }),
        None | Some(Value::Null) => Ok(()),
        Some(value) => check_kind(&spec.kind, value, path, method),
    }
}

fn check_fields(fields: &[FieldSpec], map: &Map<String, Value>, path: &str, method: &str) -> Result<()> {
    for spec in fields {
        let field_path = format!("{}.{}", path, spec.name);
        check_field(spec, map.get(spec.name), &field_path, method)?;
    }
    Ok(())
}

fn check_kind(kind: &FieldKind, value: &Value, path: &str, method: &str) -> Result<()> {
    match kind {
        FieldKind::String if value.is_string() => Ok(()),
        FieldKind::Number if value.is_number() => Ok(()),
        FieldKind::Bool if value.is_boolean() => Ok(()),
        FieldKind::OneOf(allowed) => match value.as_str() {
            Some(s) if allowed.iter().any(|candidate| *candidate == s) => Ok(()),
            _ => Err(mismatch(method, path, kind, value)),
        },
        FieldKind::ArrayOf(inner) => {
            let items = value
                .as_array()
                .ok_or_else(|| mismatch(method, path, kind, value))?;
            for (index, item) in items.iter().enumerate() {
                // Elements of an array must be present
                if item.is_null() {
                    return Err(mismatch(method, &format!("{}[{}]", path, index), inner, item));
                }
                check_kind(inner, item, &format!("{}[{}]", path, index), method)?;
            }
            Ok(())
        }
        FieldKind::Shape(fields) => {
            let map = value
                .as_object()
                .ok_or_else(|| mismatch(method, path, kind, value))?;
            check_fields(fields, map, path, method)
        }
        _ => Err(mismatch(method, path, kind, value)),
    }
}

fn mismatch(method: &str, path: &str, expected: impl fmt::Display, found: &Value) -> PaymentError {
    PaymentError::SchemaValidation {
        method: method.to_string(),
        field: path.to_string(),
        expected: expected.to_string(),
        found: describe(found),
    }
}

/// Type name of `value`; the value itself never appears in errors.
fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
    .to_string()
}
