//! Dialect registry.
//!
//! The registry is owned by the ORM's construction path and passed down
//! explicitly; there is no process-global state.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::warn;

use crate::dialect::SchemaDialect;

/// A named collection of registered dialects.
#[derive(Default, Clone)]
pub struct DialectRegistry {
    dialects: HashMap<String, Arc<dyn SchemaDialect>>,
}

impl DialectRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a dialect under its own name.
    ///
    /// Last registration wins; replacing an existing dialect is logged.
    pub fn register(&mut self, dialect: Arc<dyn SchemaDialect>) {
        let name = dialect.name();
        if self.dialects.insert(name.to_string(), dialect).is_some() {
            warn!(dialect = %name, "replacing registered dialect");
        }
    }

    /// Looks up a dialect by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<dyn SchemaDialect>> {
        self.dialects.get(name).cloned()
    }

    /// Returns the registered dialect names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.dialects.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Returns the number of registered dialects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dialects.len()
    }

    /// Returns whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dialects.is_empty()
    }
}

impl fmt::Debug for DialectRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialectRegistry")
            .field("dialects", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::GenericDialect;

    #[test]
    fn test_register_and_get() {
        let mut registry = DialectRegistry::new();
        assert!(registry.is_empty());

        registry.register(Arc::new(GenericDialect::new()));
        assert_eq!(registry.len(), 1);

        let dialect = registry.get("generic").expect("registered dialect");
        assert_eq!(dialect.name(), "generic");
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn test_last_registration_wins() {
        let mut registry = DialectRegistry::new();
        registry.register(Arc::new(GenericDialect::new()));
        registry.register(Arc::new(GenericDialect::new()));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.names(), vec!["generic"]);
    }
}
