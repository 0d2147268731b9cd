//! Key and index name construction shared across dialects.
//!
//! Engines that cap identifier length override
//! [`SchemaDialect::build_key_name`](crate::dialect::SchemaDialect::build_key_name)
//! and shorten the name this module composes.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{DialectError, Result};

/// Runs of characters that are not legal in a generated key name.
static KEY_NAME_SANITIZER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[^a-zA-Z0-9]+").expect("invalid key name pattern"));

/// The identifier grammar accepted for interpolation into SQL text.
///
/// Deliberately excludes quote characters, backticks, whitespace, and
/// statement punctuation; `$`, `#`, and `-` appear in real schema names.
static IDENTIFIER_GRAMMAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_$#-]+$").expect("invalid identifier pattern"));

/// Replaces every run of non-alphanumeric characters with an underscore.
#[must_use]
pub fn sanitize_key_name(name: &str) -> String {
    KEY_NAME_SANITIZER.replace_all(name, "_").into_owned()
}

/// Composes the canonical `<kind>_<table>_<fields...>` key name.
///
/// Deterministic and shared across dialects; the output is sanitized but
/// not length-bounded.
#[must_use]
pub fn build_key_name(kind: &str, table: &str, fields: &[&str]) -> String {
    let raw = format!("{}_{}_{}", kind, table, fields.join("_"));
    sanitize_key_name(&raw)
}

/// Checks an identifier against the grammar accepted for direct
/// interpolation into SQL text.
///
/// Filter values belong in bind parameters; this guards the few spots
/// where the engine's syntax only accepts a literal identifier.
pub fn validate_identifier(ident: &str) -> Result<&str> {
    if IDENTIFIER_GRAMMAR.is_match(ident) {
        Ok(ident)
    } else {
        Err(DialectError::InvalidIdentifier(ident.to_string()))
    }
}
