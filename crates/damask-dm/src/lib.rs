//! # damask-dm
//!
//! DM (Dameng) dialect adapter for the Damask schema toolkit.
//!
//! DM speaks MySQL-flavored column types and index DDL while keeping
//! Oracle-style catalogs (`ALL_TABLES`, `ALL_TAB_COLUMNS`, `SYS_CONTEXT`,
//! `FROM DUAL`). This crate covers both faces:
//!
//! - [`DmDialect`] implements the [`SchemaDialect`](damask_core::SchemaDialect)
//!   rendering contract: the field-kind to column-type mapping with DM's
//!   auto-increment and precision rules, the 64-character key-name
//!   shortener, index prefix-length normalization, and DM's
//!   LIMIT-before-OFFSET pagination.
//! - [`DmCatalog`] holds the injected `sqlx` pool (DM's MySQL-compatible
//!   wire protocol) and answers existence checks against the system
//!   catalog, one bound-parameter query per call.
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use damask_core::DialectRegistry;
//! use damask_dm::DmDialect;
//!
//! let mut registry = DialectRegistry::new();
//! registry.register(Arc::new(DmDialect::new()));
//! let dialect = registry.get("dm").expect("registered");
//! assert_eq!(dialect.select_from_dummy_table(), "FROM DUAL");
//! ```

pub mod catalog;
pub mod dialect;
pub mod error;

pub use catalog::DmCatalog;
pub use dialect::DmDialect;
pub use error::{DmError, Result};
