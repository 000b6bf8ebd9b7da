//! Domain Layer - Core Entity Trait
//!
//! Every record owned by a board has a string identifier.

use thiserror::Error;
use uuid::Uuid;

/// Core trait for all domain entities
pub trait Entity: Sized + Clone {
    /// Returns the entity's unique identifier
    fn id(&self) -> &str;
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Fresh identifier for a new entity.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Trims `value` and rejects it when nothing is left.
pub fn required(field: &str, value: &str) -> DomainResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidInput(format!("{field} must not be empty")));
    }
    Ok(trimmed.to_string())
}

/// Linear lookup by id, first match wins.
pub fn find_by_id<'a, T: Entity>(entities: &'a [T], id: &str) -> Option<&'a T> {
    entities.iter().find(|entity| entity.id() == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Named(&'static str);

    impl Entity for Named {
        fn id(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn test_required_trims() {
        assert_eq!(required("title", "  Write report ").unwrap(), "Write report");
        assert_eq!(
            required("title", "   "),
            Err(DomainError::InvalidInput("title must not be empty".into()))
        );
    }

    #[test]
    fn test_new_ids_are_unique() {
        assert_ne!(new_id(), new_id());
    }

    #[test]
    fn test_find_by_id() {
        let items = vec![Named("a"), Named("b")];
        assert_eq!(find_by_id(&items, "b").map(|n| n.0), Some("b"));
        assert!(find_by_id(&items, "c").is_none());
    }
}
