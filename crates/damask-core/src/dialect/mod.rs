//! The dialect plugin contract.
//!
//! A dialect translates the ORM's abstract schema requests into one
//! engine's SQL variant: column types for typed fields, key/index naming,
//! pagination clauses, and DDL statement text. Rendering is synchronous
//! and stateless; anything that needs a database round trip lives on the
//! engine crate's catalog type instead.

mod generic;

pub use generic::GenericDialect;

use crate::error::{DialectError, Result};
use crate::field::{FieldDescriptor, ResolvedColumn};
use crate::naming;

/// Trait for engine-specific SQL rendering.
///
/// Default methods implement generic ANSI behavior; engines override the
/// pieces their SQL variant disagrees on.
pub trait SchemaDialect: Send + Sync {
    /// Returns the dialect name.
    fn name(&self) -> &'static str;

    /// Resolves a field descriptor to a concrete column type.
    ///
    /// An unmappable kind is a schema-definition bug; the error names the
    /// offending field and the host treats it as fatal.
    fn column_type(&self, field: &FieldDescriptor) -> Result<ResolvedColumn>;

    /// Quotes an identifier.
    fn quote(&self, ident: &str) -> String {
        format!("\"{ident}\"")
    }

    /// Renders the pagination clause for optional limit/offset values.
    ///
    /// Generic engines accept OFFSET without LIMIT, so the two clauses
    /// render independently; each is omitted when absent or negative.
    /// A value that fails to parse as an integer is an error, never
    /// silently ignored.
    fn limit_and_offset_sql(&self, limit: Option<&str>, offset: Option<&str>) -> Result<String> {
        let mut sql = String::new();
        if let Some(parsed) = parse_limit(limit)? {
            sql.push_str(&format!(" LIMIT {parsed}"));
        }
        if let Some(parsed) = parse_offset(offset)? {
            sql.push_str(&format!(" OFFSET {parsed}"));
        }
        Ok(sql)
    }

    /// Composes a key/index name for the given kind, table, and columns.
    fn build_key_name(&self, kind: &str, table: &str, fields: &[&str]) -> String {
        naming::build_key_name(kind, table, fields)
    }

    /// Splits engine-specific index annotations into index and column
    /// parts.
    ///
    /// The generic form carries no annotations; both inputs pass through.
    fn normalize_index_and_column(&self, index_name: &str, column_name: &str) -> (String, String) {
        (index_name.to_string(), column_name.to_string())
    }

    /// The engine's idiom for selecting without a table.
    fn select_from_dummy_table(&self) -> &'static str {
        ""
    }

    /// The engine's all-defaults fragment for INSERT statements.
    fn default_values_sql(&self) -> &'static str {
        "DEFAULT VALUES"
    }

    /// Renders a DROP INDEX statement.
    fn drop_index_sql(&self, _table: &str, index: &str) -> Result<String> {
        let index = naming::validate_identifier(index)?;
        Ok(format!("DROP INDEX {index}"))
    }

    /// Renders an ALTER TABLE ... MODIFY COLUMN statement.
    ///
    /// The column type comes from this dialect's own resolver and is
    /// interpolated as-is; table and column names are validated first.
    fn modify_column_sql(&self, table: &str, column: &str, column_type: &str) -> Result<String> {
        let table = naming::validate_identifier(table)?;
        let column = naming::validate_identifier(column)?;
        Ok(format!("ALTER TABLE {table} MODIFY COLUMN {column} {column_type}"))
    }
}

/// Parses an optional limit value, mapping absent and negative values to
/// `None` and non-numeric values to [`DialectError::InvalidLimit`].
pub fn parse_limit(limit: Option<&str>) -> Result<Option<i64>> {
    parse_clause_value(limit).map_err(DialectError::InvalidLimit)
}

/// Parses an optional offset value, mapping absent and negative values to
/// `None` and non-numeric values to [`DialectError::InvalidOffset`].
pub fn parse_offset(offset: Option<&str>) -> Result<Option<i64>> {
    parse_clause_value(offset).map_err(DialectError::InvalidOffset)
}

fn parse_clause_value(value: Option<&str>) -> std::result::Result<Option<i64>, String> {
    let Some(raw) = value else {
        return Ok(None);
    };
    let parsed: i64 = raw
        .trim()
        .parse()
        .map_err(|_| raw.to_string())?;
    Ok((parsed >= 0).then_some(parsed))
}
