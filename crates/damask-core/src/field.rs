//! Field descriptors shared between the ORM layer and dialect adapters.
//!
//! A [`FieldDescriptor`] is the dialect-facing view of one mapped struct
//! attribute: its runtime kind, declared size, primary-key flag, and
//! free-form tag settings. Dialects read descriptors and hand back a
//! [`ResolvedColumn`]; they never write through them.

use std::collections::HashMap;
use std::fmt;

/// Well-known tag setting keys.
pub mod tag {
    /// Marks a column as auto-incrementing.
    pub const AUTO_INCREMENT: &str = "AUTO_INCREMENT";
    /// Adds a NOT NULL constraint.
    pub const NOT_NULL: &str = "NOT NULL";
    /// Declares a default value.
    pub const DEFAULT: &str = "DEFAULT";
    /// Fractional-seconds precision for temporal columns.
    pub const PRECISION: &str = "PRECISION";
    /// Declared size for sized column types.
    pub const SIZE: &str = "SIZE";
    /// Explicit column-type override.
    pub const TYPE: &str = "TYPE";
    /// Adds a UNIQUE constraint.
    pub const UNIQUE: &str = "UNIQUE";
    /// Column comment.
    pub const COMMENT: &str = "COMMENT";
}

/// The runtime kind of a mapped field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// `bool`.
    Bool,
    /// `i8`.
    Int8,
    /// `i16`.
    Int16,
    /// `i32`.
    Int32,
    /// `i64`.
    Int64,
    /// `isize`.
    Isize,
    /// `u8`.
    Uint8,
    /// `u16`.
    Uint16,
    /// `u32`.
    Uint32,
    /// `u64`.
    Uint64,
    /// `usize`.
    Usize,
    /// `f32`.
    Float32,
    /// `f64`.
    Float64,
    /// `String` and string slices.
    Text,
    /// A timestamp value (`chrono::DateTime` / `NaiveDateTime`).
    DateTime,
    /// A byte array or `Vec<u8>`.
    Bytes,
    /// A kind the mapper does not recognize; carries the Rust type name
    /// for diagnostics.
    Opaque(String),
}

impl FieldKind {
    /// Returns true for the signed and unsigned integer kinds.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            Self::Int8
                | Self::Int16
                | Self::Int32
                | Self::Int64
                | Self::Isize
                | Self::Uint8
                | Self::Uint16
                | Self::Uint32
                | Self::Uint64
                | Self::Usize
        )
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bool => "bool",
            Self::Int8 => "i8",
            Self::Int16 => "i16",
            Self::Int32 => "i32",
            Self::Int64 => "i64",
            Self::Isize => "isize",
            Self::Uint8 => "u8",
            Self::Uint16 => "u16",
            Self::Uint32 => "u32",
            Self::Uint64 => "u64",
            Self::Usize => "usize",
            Self::Float32 => "f32",
            Self::Float64 => "f64",
            Self::Text => "text",
            Self::DateTime => "datetime",
            Self::Bytes => "bytes",
            Self::Opaque(name) => name,
        };
        f.write_str(name)
    }
}

/// Free-form key/value annotations on a field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSettings {
    settings: HashMap<String, String>,
}

impl TagSettings {
    /// Creates an empty tag set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value for a tag key, if set.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.settings.get(key).map(String::as_str)
    }

    /// Sets a tag value, replacing any previous one.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.settings.insert(key.into(), value.into());
    }

    /// Removes a tag.
    pub fn delete(&mut self, key: &str) {
        self.settings.remove(key);
    }

    /// Returns whether a tag key is set.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.settings.contains_key(key)
    }

    /// Returns whether no tags are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }
}

/// Metadata the ORM maintains about one mapped attribute.
///
/// Descriptors are created per schema-generation pass by the host and
/// handed to dialects read-only.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    /// Field name as declared on the model.
    pub name: String,
    /// Runtime kind of the field's value.
    pub kind: FieldKind,
    /// Declared size hint, when the model specifies one directly.
    pub size: Option<u32>,
    /// Whether the field is part of the primary key.
    pub primary_key: bool,
    /// Free-form tag settings.
    pub tags: TagSettings,
}

impl FieldDescriptor {
    /// Creates a descriptor for a named field of the given kind.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            size: None,
            primary_key: false,
            tags: TagSettings::new(),
        }
    }

    /// Sets the declared size hint.
    #[must_use]
    pub fn size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    /// Marks the field as (part of) the primary key.
    #[must_use]
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    /// Sets a tag value.
    #[must_use]
    pub fn tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.set(key, value);
        self
    }

    /// The explicit column-type override, when the model declares one.
    #[must_use]
    pub fn explicit_sql_type(&self) -> Option<&str> {
        self.tags.get(tag::TYPE)
    }

    /// The effective size hint: the declared size, else the `SIZE` tag,
    /// else the host default of 255.
    #[must_use]
    pub fn size_hint(&self) -> u32 {
        self.size
            .or_else(|| self.tags.get(tag::SIZE).and_then(|s| s.parse().ok()))
            .unwrap_or(255)
    }

    /// Whether the field declares a default value.
    #[must_use]
    pub fn has_default(&self) -> bool {
        self.tags.contains(tag::DEFAULT)
    }

    /// Whether the field carries a NOT NULL constraint.
    #[must_use]
    pub fn is_not_null(&self) -> bool {
        self.tags.contains(tag::NOT_NULL)
    }

    /// Fractional-seconds precision for temporal columns, when declared.
    #[must_use]
    pub fn precision(&self) -> Option<&str> {
        self.tags.get(tag::PRECISION)
    }

    /// Composes the additional-type suffix from constraint tags:
    /// `NOT NULL`, `UNIQUE`, `DEFAULT <v>`, `COMMENT <v>`.
    ///
    /// Returns an empty string when no constraint tags are set.
    #[must_use]
    pub fn additional_type_sql(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if self.is_not_null() {
            parts.push(tag::NOT_NULL.to_string());
        }
        if self.tags.contains(tag::UNIQUE) {
            parts.push(tag::UNIQUE.to_string());
        }
        if let Some(value) = self.tags.get(tag::DEFAULT) {
            parts.push(format!("DEFAULT {value}"));
        }
        if let Some(value) = self.tags.get(tag::COMMENT) {
            parts.push(format!("COMMENT {value}"));
        }
        parts.join(" ")
    }
}

/// The outcome of resolving a field descriptor to a column type.
///
/// Derived settings come back here explicitly instead of being written
/// into the descriptor's tag map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedColumn {
    /// Full column-type clause, including any additional-type suffix.
    pub sql_type: String,
    /// Whether the dialect rendered the column as auto-incrementing.
    pub auto_increment: bool,
}

impl ResolvedColumn {
    /// Creates a resolved column with no derived settings.
    #[must_use]
    pub fn new(sql_type: impl Into<String>) -> Self {
        Self {
            sql_type: sql_type.into(),
            auto_increment: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_kinds() {
        assert!(FieldKind::Int8.is_integer());
        assert!(FieldKind::Uint64.is_integer());
        assert!(FieldKind::Usize.is_integer());
        assert!(!FieldKind::Bool.is_integer());
        assert!(!FieldKind::Float64.is_integer());
        assert!(!FieldKind::Text.is_integer());
    }

    #[test]
    fn test_tag_settings_roundtrip() {
        let mut tags = TagSettings::new();
        assert!(tags.is_empty());

        tags.set(tag::NOT_NULL, "NOT NULL");
        assert!(tags.contains(tag::NOT_NULL));
        assert_eq!(tags.get(tag::NOT_NULL), Some("NOT NULL"));

        tags.delete(tag::NOT_NULL);
        assert!(!tags.contains(tag::NOT_NULL));
    }

    #[test]
    fn test_size_hint_precedence() {
        let field = FieldDescriptor::new("name", FieldKind::Text);
        assert_eq!(field.size_hint(), 255);

        let field = FieldDescriptor::new("name", FieldKind::Text).tag(tag::SIZE, "100");
        assert_eq!(field.size_hint(), 100);

        let field = FieldDescriptor::new("name", FieldKind::Text)
            .size(64)
            .tag(tag::SIZE, "100");
        assert_eq!(field.size_hint(), 64);
    }

    #[test]
    fn test_additional_type_composition() {
        let field = FieldDescriptor::new("email", FieldKind::Text)
            .tag(tag::NOT_NULL, "NOT NULL")
            .tag(tag::UNIQUE, "UNIQUE")
            .tag(tag::DEFAULT, "''");
        assert_eq!(field.additional_type_sql(), "NOT NULL UNIQUE DEFAULT ''");
    }

    #[test]
    fn test_additional_type_empty_without_tags() {
        let field = FieldDescriptor::new("email", FieldKind::Text);
        assert_eq!(field.additional_type_sql(), "");
    }

    #[test]
    fn test_explicit_type_from_tag() {
        let field = FieldDescriptor::new("payload", FieldKind::Text).tag(tag::TYPE, "json");
        assert_eq!(field.explicit_sql_type(), Some("json"));
    }
}
