//! DM dialect rendering.
//!
//! DM takes MySQL-flavored column types and index DDL but keeps
//! Oracle-style session idioms (`FROM DUAL`), and caps identifiers at 64
//! characters. Everything here is pure string work; catalog round trips
//! live in [`crate::catalog`].

use std::fmt;
use std::sync::{Arc, LazyLock};

use regex::Regex;
use sha1::{Digest, Sha1};

use damask_core::dialect::{parse_limit, parse_offset};
use damask_core::error::{DialectError, Result};
use damask_core::field::{FieldDescriptor, FieldKind, ResolvedColumn};
use damask_core::naming;
use damask_core::policy::{AutoIncrementPolicy, DefaultPolicy};
use damask_core::SchemaDialect;

/// Generated key names longer than this many characters are shortened.
const MAX_KEY_NAME_CHARS: usize = 64;

/// Characters of the sanitized first-field prefix kept ahead of the
/// 40-hex-character digest.
const KEY_NAME_PREFIX_CHARS: usize = 24;

/// Upper bound (exclusive) for sized varchar/varbinary columns.
const MAX_SIZED_COLUMN: u32 = 65532;

/// Width used for text columns without a usable size hint.
const UNSIZED_VARCHAR: u32 = 102_400;

/// Index names annotated with a prefix length, e.g. `idx_name(10)`.
static INDEX_PREFIX_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+)\((\d+)\)$").expect("invalid index suffix pattern"));

/// The DM dialect.
///
/// Stateless apart from the injected auto-increment policy; cheap to
/// clone and safe to share.
#[derive(Clone)]
pub struct DmDialect {
    policy: Arc<dyn AutoIncrementPolicy>,
}

impl DmDialect {
    /// Creates a DM dialect with the stock auto-increment policy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_policy(Arc::new(DefaultPolicy))
    }

    /// Creates a DM dialect with a host-supplied auto-increment policy.
    #[must_use]
    pub fn with_policy(policy: Arc<dyn AutoIncrementPolicy>) -> Self {
        Self { policy }
    }

    /// Renders an integer column, adding `AUTO_INCREMENT` when the policy
    /// confirms eligibility.
    fn integer_type(&self, base: &str, field: &FieldDescriptor) -> (String, bool) {
        if self.policy.can_auto_increment(field) {
            (format!("{base} AUTO_INCREMENT"), true)
        } else {
            (base.to_string(), false)
        }
    }
}

impl Default for DmDialect {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DmDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DmDialect").finish_non_exhaustive()
    }
}

impl SchemaDialect for DmDialect {
    fn name(&self) -> &'static str {
        "dm"
    }

    fn column_type(&self, field: &FieldDescriptor) -> Result<ResolvedColumn> {
        let (sql_type, auto_increment) = if let Some(explicit) = field.explicit_sql_type() {
            (explicit.to_string(), false)
        } else {
            match &field.kind {
                FieldKind::Bool => ("int".to_string(), false),
                FieldKind::Int8 => self.integer_type("tinyint", field),
                FieldKind::Int16 | FieldKind::Int32 | FieldKind::Isize => {
                    self.integer_type("int", field)
                }
                FieldKind::Uint8 => self.integer_type("tinyint unsigned", field),
                FieldKind::Uint16 | FieldKind::Uint32 | FieldKind::Usize => {
                    self.integer_type("int unsigned", field)
                }
                FieldKind::Int64 => self.integer_type("bigint", field),
                FieldKind::Uint64 => self.integer_type("bigint unsigned", field),
                FieldKind::Float32 | FieldKind::Float64 => ("double".to_string(), false),
                FieldKind::Text => {
                    let size = field.size_hint();
                    let width = if size > 0 && size < MAX_SIZED_COLUMN {
                        size
                    } else {
                        UNSIZED_VARCHAR
                    };
                    (format!("varchar({width})"), false)
                }
                FieldKind::DateTime => {
                    let precision = field
                        .precision()
                        .map(|p| format!("({p})"))
                        .unwrap_or_default();
                    let sql_type = if field.is_not_null() || field.primary_key {
                        format!("DATETIME{precision}")
                    } else {
                        format!("DATETIME{precision} NULL")
                    };
                    (sql_type, false)
                }
                FieldKind::Bytes => {
                    let size = field.size_hint();
                    let sql_type = if size > 0 && size < MAX_SIZED_COLUMN {
                        format!("varbinary({size})")
                    } else {
                        "longblob".to_string()
                    };
                    (sql_type, false)
                }
                FieldKind::Opaque(_) => {
                    return Err(DialectError::UnsupportedFieldType {
                        field: field.name.clone(),
                        kind: field.kind.to_string(),
                    });
                }
            }
        };

        let additional = field.additional_type_sql();
        let sql_type = if additional.trim().is_empty() {
            sql_type
        } else {
            format!("{sql_type} {}", additional.trim())
        };
        Ok(ResolvedColumn {
            sql_type,
            auto_increment,
        })
    }

    /// DM requires LIMIT before OFFSET: the offset clause renders only
    /// when a non-negative limit was rendered first.
    fn limit_and_offset_sql(&self, limit: Option<&str>, offset: Option<&str>) -> Result<String> {
        let mut sql = String::new();
        if let Some(limit) = parse_limit(limit)? {
            sql.push_str(&format!(" LIMIT {limit}"));
            if let Some(offset) = parse_offset(offset)? {
                sql.push_str(&format!(" OFFSET {offset}"));
            }
        }
        Ok(sql)
    }

    /// Names of up to 64 characters pass through; longer names become the
    /// sanitized first-field prefix (at most 24 characters) followed by
    /// the hex SHA-1 of the full name. The digest covers the whole
    /// original name, so distinct long names sharing a prefix stay
    /// distinct.
    fn build_key_name(&self, kind: &str, table: &str, fields: &[&str]) -> String {
        let key_name = naming::build_key_name(kind, table, fields);
        if key_name.chars().count() <= MAX_KEY_NAME_CHARS {
            return key_name;
        }

        let digest = hex::encode(Sha1::digest(key_name.as_bytes()));
        let prefix: String = naming::sanitize_key_name(fields.first().copied().unwrap_or_default())
            .chars()
            .take(KEY_NAME_PREFIX_CHARS)
            .collect();
        format!("{prefix}{digest}")
    }

    fn normalize_index_and_column(&self, index_name: &str, column_name: &str) -> (String, String) {
        let Some(caps) = INDEX_PREFIX_SUFFIX.captures(index_name) else {
            return (index_name.to_string(), column_name.to_string());
        };
        (caps[1].to_string(), format!("{column_name}({})", &caps[2]))
    }

    fn select_from_dummy_table(&self) -> &'static str {
        "FROM DUAL"
    }

    fn default_values_sql(&self) -> &'static str {
        "VALUES()"
    }

    fn drop_index_sql(&self, table: &str, index: &str) -> Result<String> {
        let index = naming::validate_identifier(index)?;
        let table = naming::validate_identifier(table)?;
        Ok(format!("DROP INDEX {index} ON {}", self.quote(table)))
    }
}
