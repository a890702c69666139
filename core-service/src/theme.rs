//! Card form theme normalization.
//!
//! The native card form reads every color key unconditionally, so the facade
//! always forwards a complete theme: supplied colors are parsed from CSS hex
//! notation into ARGB integers, missing ones take their defaults and anything
//! else in the mapping is dropped.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

use crate::error::{PaymentError, Result};
use crate::schema::{FieldKind, FieldSpec};

/// Recognized theme keys with their default colors.
pub const THEME_DEFAULTS: [(&str, &str); 6] = [
    ("primaryBackgroundColor", "#FFFFFF"),
    ("secondaryBackgroundColor", "#F2F2F7"),
    ("primaryForegroundColor", "#2B2B2D"),
    ("secondaryForegroundColor", "#8E8E93"),
    ("accentColor", "#007AFF"),
    ("errorColor", "#FF3B30"),
];

/// Card form colors as CSS hex strings (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_foreground_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_foreground_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_color: Option<String>,
}

impl Theme {
    pub const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::optional("primaryBackgroundColor", FieldKind::String),
        FieldSpec::optional("secondaryBackgroundColor", FieldKind::String),
        FieldSpec::optional("primaryForegroundColor", FieldKind::String),
        FieldSpec::optional("secondaryForegroundColor", FieldKind::String),
        FieldSpec::optional("accentColor", FieldKind::String),
        FieldSpec::optional("errorColor", FieldKind::String),
    ];
}

/// A color packed as `0xAARRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    pub fn argb(self) -> u32 {
        self.0
    }

    pub fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorError(String);

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid hex color `{}`", self.0)
    }
}

impl std::error::Error for ParseColorError {}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let invalid = || ParseColorError(s.to_string());

        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        // Short forms repeat each digit: `#f80` == `#ff8800`
        let expanded: String = match hex.len() {
            3 | 4 => hex.chars().flat_map(|c| [c, c]).collect(),
            6 | 8 => hex.to_string(),
            _ => return Err(invalid()),
        };

        let value = u32::from_str_radix(&expanded, 16).map_err(|_| invalid())?;
        let argb = if expanded.len() == 6 {
            0xFF00_0000 | value
        } else {
            // RRGGBBAA -> AARRGGBB
            (value >> 8) | ((value & 0xFF) << 24)
        };

        Ok(Color(argb))
    }
}

/// Builds the theme forwarded to the native card form.
///
/// `theme` is the caller's `options.theme` (already shape-checked). The
/// result always holds all six recognized keys as ARGB integers.
pub fn normalize_theme(theme: Option<&Value>, method: &str) -> Result<Value> {
    let supplied = theme.and_then(Value::as_object);
    let mut normalized = Map::with_capacity(THEME_DEFAULTS.len());

    for (key, default) in THEME_DEFAULTS {
        let raw = supplied
            .and_then(|map| map.get(key))
            .and_then(Value::as_str)
            .unwrap_or(default);

        let color = raw.parse::<Color>().map_err(|_| PaymentError::SchemaValidation {
            method: method.to_string(),
            field: format!("options.theme.{}", key),
            expected: "hex color (#rgb, #rgba, #rrggbb or #rrggbbaa)".to_string(),
            found: "string".to_string(),
        })?;

        normalized.insert(key.to_string(), Value::from(color.argb()));
    }

    Ok(Value::Object(normalized))
}
