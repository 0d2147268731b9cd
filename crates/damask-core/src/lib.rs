//! # damask-core
//!
//! The dialect plugin contract for the Damask schema toolkit.
//!
//! An ORM layer that generates schema DDL needs per-engine answers to a
//! handful of questions: what column type fits this field, how should a
//! generated key be named, what does pagination look like, how is an
//! identifier quoted. This crate defines the contract those answers flow
//! through:
//!
//! - [`SchemaDialect`] - the rendering trait engines implement, with
//!   generic ANSI defaults
//! - [`FieldDescriptor`] / [`ResolvedColumn`] - the read-only field view
//!   handed to dialects and the explicit resolution they return
//! - [`AutoIncrementPolicy`] - host-owned eligibility for auto-increment
//!   rendering
//! - [`DialectRegistry`] - an owned registry passed through the ORM's
//!   construction path
//! - [`naming`] - the key-name base algorithm shared across dialects
//!
//! Engine crates (e.g. `damask-dm`) implement the trait and add their own
//! catalog introspection on top.

pub mod dialect;
pub mod error;
pub mod field;
pub mod naming;
pub mod policy;
pub mod registry;

pub use dialect::{GenericDialect, SchemaDialect};
pub use error::{DialectError, Result};
pub use field::{FieldDescriptor, FieldKind, ResolvedColumn, TagSettings};
pub use policy::{AutoIncrementPolicy, DefaultPolicy};
pub use registry::DialectRegistry;
