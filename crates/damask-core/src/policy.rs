//! Auto-increment eligibility.
//!
//! Dialects decide how an auto-incrementing column is *rendered*; whether
//! a field qualifies at all is host policy, queried per field.

use crate::field::{tag, FieldDescriptor};

/// Decides whether a field qualifies for an auto-incrementing column.
pub trait AutoIncrementPolicy: Send + Sync {
    /// Returns true if the field may be rendered as auto-incrementing.
    fn can_auto_increment(&self, field: &FieldDescriptor) -> bool;
}

/// The stock eligibility policy.
///
/// An explicit `AUTO_INCREMENT` tag wins unless its value is `FALSE`.
/// Without a tag, primary-key integer fields with no declared default
/// qualify.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPolicy;

impl AutoIncrementPolicy for DefaultPolicy {
    fn can_auto_increment(&self, field: &FieldDescriptor) -> bool {
        if let Some(value) = field.tags.get(tag::AUTO_INCREMENT) {
            return !value.eq_ignore_ascii_case("false");
        }
        field.primary_key && field.kind.is_integer() && !field.has_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldKind;

    #[test]
    fn test_primary_key_integer_qualifies() {
        let field = FieldDescriptor::new("id", FieldKind::Int64).primary_key();
        assert!(DefaultPolicy.can_auto_increment(&field));
    }

    #[test]
    fn test_non_primary_key_does_not_qualify() {
        let field = FieldDescriptor::new("age", FieldKind::Int32);
        assert!(!DefaultPolicy.can_auto_increment(&field));
    }

    #[test]
    fn test_non_integer_primary_key_does_not_qualify() {
        let field = FieldDescriptor::new("code", FieldKind::Text).primary_key();
        assert!(!DefaultPolicy.can_auto_increment(&field));
    }

    #[test]
    fn test_default_value_disqualifies() {
        let field = FieldDescriptor::new("id", FieldKind::Int64)
            .primary_key()
            .tag(tag::DEFAULT, "0");
        assert!(!DefaultPolicy.can_auto_increment(&field));
    }

    #[test]
    fn test_tag_override_wins() {
        let field = FieldDescriptor::new("seq", FieldKind::Int32).tag(tag::AUTO_INCREMENT, "true");
        assert!(DefaultPolicy.can_auto_increment(&field));

        let field = FieldDescriptor::new("id", FieldKind::Int64)
            .primary_key()
            .tag(tag::AUTO_INCREMENT, "FALSE");
        assert!(!DefaultPolicy.can_auto_increment(&field));
    }
}
