//! Property schema: the static table of user-configurable settings.
//!
//! Each property has a name, a value type, and a default. The table is
//! defined at compile time and never mutated; the settings store validates
//! every `:set` mutation against it. Adding a property means adding a row
//! here and a matching assignment arm in `settings::SettingsStore`.

// ---------------------------------------------------------------------------
// Value types
// ---------------------------------------------------------------------------

/// Declared type of a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    String,
    Number,
    Boolean,
}

impl std::fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PropertyKind::String => "string",
            PropertyKind::Number => "number",
            PropertyKind::Boolean => "boolean",
        };
        f.write_str(s)
    }
}

/// A runtime property value. Type checks compare the tag, never the content:
/// `Str("5")` is a string, not a number.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Str(String),
    Num(f64),
    Bool(bool),
}

impl PropertyValue {
    pub fn kind(&self) -> PropertyKind {
        match self {
            PropertyValue::Str(_) => PropertyKind::String,
            PropertyValue::Num(_) => PropertyKind::Number,
            PropertyValue::Bool(_) => PropertyKind::Boolean,
        }
    }

    /// True for `Str("")`, the reset-to-default sentinel.
    pub fn is_empty_string(&self) -> bool {
        matches!(self, PropertyValue::Str(s) if s.is_empty())
    }
}

impl std::fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropertyValue::Str(s) => f.write_str(s),
            PropertyValue::Num(n) => n.fmt(f),
            PropertyValue::Bool(b) => b.fmt(f),
        }
    }
}

// ---------------------------------------------------------------------------
// Schema table
// ---------------------------------------------------------------------------

/// Default value representation that can live in a `const` table.
#[derive(Debug, Clone, Copy)]
pub enum DefaultValue {
    Str(&'static str),
    Num(f64),
    Bool(bool),
}

/// One row of the property schema.
#[derive(Debug, Clone, Copy)]
pub struct PropertyDef {
    pub name: &'static str,
    pub kind: PropertyKind,
    pub default: DefaultValue,
}

impl PropertyDef {
    /// The schema default as a runtime value.
    pub fn default_value(&self) -> PropertyValue {
        match self.default {
            DefaultValue::Str(s) => PropertyValue::Str(s.to_string()),
            DefaultValue::Num(n) => PropertyValue::Num(n),
            DefaultValue::Bool(b) => PropertyValue::Bool(b),
        }
    }
}

/// The full schema. Names are unique; order is presentation order.
pub const DEFS: &[PropertyDef] = &[
    PropertyDef {
        name: "hintchars",
        kind: PropertyKind::String,
        default: DefaultValue::Str("abcdefghijklmnopqrstuvwxyz"),
    },
    PropertyDef {
        name: "smoothscroll",
        kind: PropertyKind::Boolean,
        default: DefaultValue::Bool(false),
    },
    PropertyDef {
        name: "complete",
        kind: PropertyKind::String,
        default: DefaultValue::Str("sbh"),
    },
];

/// Look a property up by name.
pub fn lookup(name: &str) -> Option<&'static PropertyDef> {
    DEFS.iter().find(|d| d.name == name)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
