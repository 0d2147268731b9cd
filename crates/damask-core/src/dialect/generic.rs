//! Generic ANSI dialect.

use super::SchemaDialect;
use crate::error::{DialectError, Result};
use crate::field::{FieldDescriptor, ResolvedColumn};

/// A generic dialect exercising the contract's default behavior.
///
/// Kind-to-type mappings are engine property, so this dialect only honors
/// explicit type overrides; everything else is an unsupported-field error.
#[derive(Debug, Default, Clone, Copy)]
pub struct GenericDialect;

impl GenericDialect {
    /// Creates a new generic dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl SchemaDialect for GenericDialect {
    fn name(&self) -> &'static str {
        "generic"
    }

    fn column_type(&self, field: &FieldDescriptor) -> Result<ResolvedColumn> {
        let Some(sql_type) = field.explicit_sql_type() else {
            return Err(DialectError::UnsupportedFieldType {
                field: field.name.clone(),
                kind: field.kind.to_string(),
            });
        };
        let additional = field.additional_type_sql();
        let sql_type = if additional.is_empty() {
            sql_type.to_string()
        } else {
            format!("{sql_type} {additional}")
        };
        Ok(ResolvedColumn::new(sql_type))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{tag, FieldKind};

    #[test]
    fn test_generic_defaults() {
        let dialect = GenericDialect::new();
        assert_eq!(dialect.name(), "generic");
        assert_eq!(dialect.quote("users"), "\"users\"");
        assert_eq!(dialect.select_from_dummy_table(), "");
        assert_eq!(dialect.default_values_sql(), "DEFAULT VALUES");
    }

    #[test]
    fn test_generic_offset_renders_without_limit() {
        let dialect = GenericDialect::new();
        assert_eq!(
            dialect.limit_and_offset_sql(None, Some("5")).unwrap(),
            " OFFSET 5"
        );
        assert_eq!(
            dialect.limit_and_offset_sql(Some("10"), Some("5")).unwrap(),
            " LIMIT 10 OFFSET 5"
        );
    }

    #[test]
    fn test_generic_key_name_is_unshortened() {
        let dialect = GenericDialect::new();
        let long_table = "t".repeat(80);
        let name = dialect.build_key_name("idx", &long_table, &["email"]);
        assert!(name.chars().count() > 64);
    }

    #[test]
    fn test_generic_normalize_is_identity() {
        let dialect = GenericDialect::new();
        let (index, column) = dialect.normalize_index_and_column("idx_foo(10)", "col");
        assert_eq!(index, "idx_foo(10)");
        assert_eq!(column, "col");
    }

    #[test]
    fn test_generic_column_type_requires_override() {
        let dialect = GenericDialect::new();
        let field = FieldDescriptor::new("payload", FieldKind::Text).tag(tag::TYPE, "text");
        assert_eq!(dialect.column_type(&field).unwrap().sql_type, "text");

        let field = FieldDescriptor::new("payload", FieldKind::Text);
        assert!(dialect.column_type(&field).is_err());
    }

    #[test]
    fn test_generic_ddl_rendering() {
        let dialect = GenericDialect::new();
        assert_eq!(
            dialect.drop_index_sql("users", "idx_users_email").unwrap(),
            "DROP INDEX idx_users_email"
        );
        assert_eq!(
            dialect
                .modify_column_sql("users", "email", "varchar(128) NOT NULL")
                .unwrap(),
            "ALTER TABLE users MODIFY COLUMN email varchar(128) NOT NULL"
        );
    }
}
