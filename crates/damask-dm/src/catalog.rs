//! DM system-catalog introspection and DDL execution.
//!
//! One synchronous round trip per operation, no retries, no caching.
//! Filter values are bound parameters; the two positions DM's MySQL-style
//! syntax cannot bind (`SHOW INDEXES FROM <table> FROM <schema>`) are
//! validated against the identifier grammar before interpolation.

use sqlx::mysql::MySqlPool;
use sqlx::Row;
use tracing::debug;

use damask_core::naming;
use damask_core::SchemaDialect;

use crate::dialect::DmDialect;
use crate::error::Result;

/// Counts catalog tables owned by a schema with a given name.
pub const HAS_TABLE_SQL: &str = "SELECT COUNT(1) FROM ALL_TABLES WHERE OWNER = ? AND TABLE_NAME = ?";

/// Looks up one column of a table in the catalog.
pub const HAS_COLUMN_SQL: &str =
    "SELECT COLUMN_NAME FROM ALL_TAB_COLUMNS WHERE TABLE_NAME = ? AND OWNER = ? AND COLUMN_NAME = ?";

/// Counts foreign-key constraints on a table.
pub const HAS_FOREIGN_KEY_SQL: &str =
    "SELECT COUNT(*) FROM INFORMATION_SCHEMA.TABLE_CONSTRAINTS \
     WHERE CONSTRAINT_SCHEMA = ? AND TABLE_NAME = ? AND CONSTRAINT_NAME = ? \
     AND CONSTRAINT_TYPE = 'FOREIGN KEY'";

/// Resolves the session's active schema.
pub const CURRENT_SCHEMA_SQL: &str =
    "SELECT SYS_CONTEXT('userenv', 'current_schema') FROM DUAL";

/// Catalog access for the DM dialect.
///
/// Holds the injected connection pool for the adapter's lifetime; callers
/// own pooling and serialization. Every operation is a single query whose
/// result rows are released on all exit paths.
pub struct DmCatalog {
    pool: MySqlPool,
    dialect: DmDialect,
}

impl DmCatalog {
    /// Creates a catalog over the given pool with a stock dialect.
    #[must_use]
    pub fn new(pool: MySqlPool) -> Self {
        Self::with_dialect(pool, DmDialect::new())
    }

    /// Creates a catalog over the given pool and dialect.
    #[must_use]
    pub fn with_dialect(pool: MySqlPool, dialect: DmDialect) -> Self {
        Self { pool, dialect }
    }

    /// Returns the dialect used for statement rendering.
    #[must_use]
    pub fn dialect(&self) -> &DmDialect {
        &self.dialect
    }

    /// Returns the session's active schema name.
    ///
    /// There is no legitimate empty result here; driver errors surface
    /// unchanged.
    pub async fn current_schema(&self) -> Result<String> {
        debug!(sql = CURRENT_SCHEMA_SQL, "querying current schema");
        let row = sqlx::query(CURRENT_SCHEMA_SQL).fetch_one(&self.pool).await?;
        Ok(row.try_get(0)?)
    }

    /// Returns whether a table exists in its owning schema.
    ///
    /// Accepts a plain name (resolved against the current schema) or a
    /// `schema.table` reference.
    pub async fn has_table(&self, table: &str) -> Result<bool> {
        let (schema, table) = self.schema_and_table(table).await?;
        debug!(sql = HAS_TABLE_SQL, schema = %schema, table, "checking table existence");
        let (count,): (i64,) = sqlx::query_as(HAS_TABLE_SQL)
            .bind(&schema)
            .bind(table)
            .fetch_one(&self.pool)
            .await?;
        Ok(count > 0)
    }

    /// Returns whether a column exists on a table.
    pub async fn has_column(&self, table: &str, column: &str) -> Result<bool> {
        let (schema, table) = self.schema_and_table(table).await?;
        debug!(sql = HAS_COLUMN_SQL, schema = %schema, table, column, "checking column existence");
        let row = sqlx::query(HAS_COLUMN_SQL)
            .bind(table)
            .bind(&schema)
            .bind(column)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.is_some())
    }

    /// Returns whether an index exists on a table.
    pub async fn has_index(&self, table: &str, index: &str) -> Result<bool> {
        let (schema, table) = self.schema_and_table(table).await?;
        let sql = show_indexes_sql(&schema, table)?;
        debug!(sql = %sql, index, "checking index existence");
        let row = sqlx::query(&sql)
            .bind(index)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.is_some())
    }

    /// Returns whether a named foreign-key constraint exists on a table.
    pub async fn has_foreign_key(&self, table: &str, constraint: &str) -> Result<bool> {
        let (schema, table) = self.schema_and_table(table).await?;
        debug!(
            sql = HAS_FOREIGN_KEY_SQL,
            schema = %schema,
            table,
            constraint,
            "checking foreign key existence"
        );
        let (count,): (i64,) = sqlx::query_as(HAS_FOREIGN_KEY_SQL)
            .bind(&schema)
            .bind(table)
            .bind(constraint)
            .fetch_one(&self.pool)
            .await?;
        Ok(count > 0)
    }

    /// Drops an index from a table, surfacing the driver error unchanged.
    pub async fn drop_index(&self, table: &str, index: &str) -> Result<()> {
        let sql = self.dialect.drop_index_sql(table, index)?;
        debug!(sql = %sql, "dropping index");
        sqlx::query(&sql).execute(&self.pool).await?;
        Ok(())
    }

    /// Changes a column's type, surfacing the driver error unchanged.
    pub async fn modify_column(&self, table: &str, column: &str, column_type: &str) -> Result<()> {
        let sql = self.dialect.modify_column_sql(table, column, column_type)?;
        debug!(sql = %sql, "modifying column");
        sqlx::query(&sql).execute(&self.pool).await?;
        Ok(())
    }

    /// Resolves a possibly qualified table reference to its owning schema
    /// and bare table name, looking up the current schema when needed.
    async fn schema_and_table<'a>(&self, table: &'a str) -> Result<(String, &'a str)> {
        match split_qualified(table) {
            (Some(schema), table) => Ok((schema.to_string(), table)),
            (None, table) => Ok((self.current_schema().await?, table)),
        }
    }
}

/// Renders the SHOW INDEXES statement for a table and schema.
///
/// Table and schema sit in identifier position and cannot be bound, so
/// both are validated before interpolation; the index-name filter stays a
/// bound parameter.
fn show_indexes_sql(schema: &str, table: &str) -> damask_core::Result<String> {
    let table = naming::validate_identifier(table)?;
    let schema = naming::validate_identifier(schema)?;
    Ok(format!(
        "SHOW INDEXES FROM `{table}` FROM `{schema}` WHERE Key_name = ?"
    ))
}

/// Splits a possibly schema-qualified `schema.table` reference.
fn split_qualified(table: &str) -> (Option<&str>, &str) {
    match table.split_once('.') {
        Some((schema, rest)) if !schema.is_empty() && !rest.is_empty() => (Some(schema), rest),
        _ => (None, table),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DmError;
    use damask_core::DialectError;

    #[test]
    fn test_split_qualified() {
        assert_eq!(split_qualified("users"), (None, "users"));
        assert_eq!(split_qualified("hr.users"), (Some("hr"), "users"));
        assert_eq!(split_qualified(".users"), (None, ".users"));
        assert_eq!(split_qualified("hr."), (None, "hr."));
    }

    #[test]
    fn test_show_indexes_sql_interpolates_validated_identifiers() {
        let sql = show_indexes_sql("HR-TENANT", "users").unwrap();
        assert_eq!(
            sql,
            "SHOW INDEXES FROM `users` FROM `HR-TENANT` WHERE Key_name = ?"
        );
    }

    #[test]
    fn test_show_indexes_sql_rejects_metacharacters() {
        assert!(matches!(
            show_indexes_sql("hr", "users` --"),
            Err(DialectError::InvalidIdentifier(_))
        ));
        assert!(matches!(
            show_indexes_sql("hr`s", "users"),
            Err(DialectError::InvalidIdentifier(_))
        ));
    }

    #[test]
    fn test_catalog_statements_bind_filter_values() {
        for sql in [HAS_TABLE_SQL, HAS_COLUMN_SQL, HAS_FOREIGN_KEY_SQL] {
            assert!(sql.contains('?'), "statement must bind its filters: {sql}");
        }
        // The only inline literal is the fixed constraint-type filter.
        assert!(HAS_FOREIGN_KEY_SQL.contains("CONSTRAINT_TYPE = 'FOREIGN KEY'"));
        assert!(!HAS_TABLE_SQL.contains('\''));
        assert!(!HAS_COLUMN_SQL.contains('\''));
    }

    #[tokio::test]
    async fn test_invalid_identifier_rejected_before_execution() {
        // A lazy pool never connects; the statement is rejected first.
        let pool = MySqlPool::connect_lazy("mysql://dm@localhost/dm").expect("lazy pool");
        let catalog = DmCatalog::new(pool);

        let err = catalog
            .drop_index("users", "idx`; DROP TABLE users")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DmError::Dialect(DialectError::InvalidIdentifier(_))
        ));

        let err = catalog.has_index("bad`schema.users", "idx").await.unwrap_err();
        assert!(matches!(
            err,
            DmError::Dialect(DialectError::InvalidIdentifier(_))
        ));
    }
}
