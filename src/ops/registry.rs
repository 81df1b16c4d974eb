//! Operation registry
//!
//! This module provides the catalog of available operations. Operations are
//! registered once at startup and looked up by id at execution time. The
//! registry preserves registration order, which defines the order operations
//! are offered to a consumer (e.g., a picker listing); it does not constrain
//! pipeline execution order.

use crate::ops::operation::Operation;
use std::collections::HashMap;
use std::fmt;

/// Error that can occur during registration
#[derive(Debug, Clone, PartialEq)]
pub enum RegistryError {
    /// An operation with this id is already registered
    DuplicateId(String),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::DuplicateId(id) => {
                write!(f, "Operation '{id}' is already registered")
            }
        }
    }
}

impl std::error::Error for RegistryError {}

/// Registry of string operations
///
/// Provides a centralized, ordered catalog of all available operations.
/// Duplicate registration is rejected: it indicates a catalog bug at startup,
/// not a runtime data issue.
pub struct OperationRegistry {
    order: Vec<String>,
    operations: HashMap<String, Box<dyn Operation>>,
}

impl OperationRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        OperationRegistry {
            order: Vec::new(),
            operations: HashMap::new(),
        }
    }

    /// Register an operation
    ///
    /// Fails if an operation with the same id already exists.
    pub fn register<O: Operation + 'static>(&mut self, op: O) -> Result<(), RegistryError> {
        self.register_boxed(Box::new(op))
    }

    fn register_boxed(&mut self, op: Box<dyn Operation>) -> Result<(), RegistryError> {
        let id = op.id().to_string();
        if self.operations.contains_key(&id) {
            return Err(RegistryError::DuplicateId(id));
        }
        self.order.push(id.clone());
        self.operations.insert(id, op);
        Ok(())
    }

    /// Get an operation by id
    pub fn lookup(&self, id: &str) -> Option<&dyn Operation> {
        self.operations.get(id).map(|op| op.as_ref())
    }

    /// Check if an operation exists
    pub fn has(&self, id: &str) -> bool {
        self.operations.contains_key(id)
    }

    /// List all operations in registration order
    pub fn list(&self) -> Vec<&dyn Operation> {
        self.order
            .iter()
            .filter_map(|id| self.operations.get(id).map(|op| op.as_ref()))
            .collect()
    }

    /// Number of registered operations
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Create a registry populated with the built-in operation catalog
    ///
    /// # Panics
    /// Panics if the built-in catalog contains a duplicate id; that is a
    /// build-time bug, not a runtime condition.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for op in crate::ops::builtins::all_builtins() {
            if let Err(e) = registry.register_boxed(op) {
                panic!("Built-in catalog bug: {e}");
            }
        }
        registry
    }
}

impl Default for OperationRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestOp;
    impl Operation for TestOp {
        fn id(&self) -> &str {
            "test"
        }
        fn name(&self) -> &str {
            "Test operation"
        }
        fn apply(&self, input: &str) -> String {
            input.to_string()
        }
    }

    struct OtherOp;
    impl Operation for OtherOp {
        fn id(&self) -> &str {
            "other"
        }
        fn name(&self) -> &str {
            "Other operation"
        }
        fn apply(&self, input: &str) -> String {
            input.to_string()
        }
    }

    #[test]
    fn test_registry_creation() {
        let registry = OperationRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_registry_register() {
        let mut registry = OperationRegistry::new();
        assert!(registry.register(TestOp).is_ok());

        assert!(registry.has("test"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_registry_register_duplicate() {
        let mut registry = OperationRegistry::new();
        registry.register(TestOp).unwrap();

        let result = registry.register(TestOp);
        assert_eq!(result, Err(RegistryError::DuplicateId("test".to_string())));

        // First registration is untouched
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_registry_lookup() {
        let mut registry = OperationRegistry::new();
        registry.register(TestOp).unwrap();

        let op = registry.lookup("test");
        assert!(op.is_some());
        assert_eq!(op.unwrap().name(), "Test operation");
    }

    #[test]
    fn test_registry_lookup_nonexistent() {
        let registry = OperationRegistry::new();
        assert!(registry.lookup("nonexistent").is_none());
    }

    #[test]
    fn test_registry_list_preserves_registration_order() {
        let mut registry = OperationRegistry::new();
        registry.register(OtherOp).unwrap();
        registry.register(TestOp).unwrap();

        let ids: Vec<_> = registry.list().iter().map(|op| op.id()).collect();
        assert_eq!(ids, vec!["other", "test"]);
    }

    #[test]
    fn test_registry_with_builtins() {
        let registry = OperationRegistry::with_builtins();
        assert!(registry.has("to_uppercase"));
        assert!(registry.has("beautify_json"));
        assert!(registry.has("base64_decode"));
        assert_eq!(registry.list().len(), registry.len());
    }

    #[test]
    fn test_registry_builtin_order_is_catalog_order() {
        let registry = OperationRegistry::with_builtins();
        let ids: Vec<_> = registry.list().iter().map(|op| op.id()).collect();
        assert_eq!(ids.first(), Some(&"unescape_string"));
        assert_eq!(ids.last(), Some(&"line_count"));
    }

    #[test]
    fn test_registry_default_trait() {
        let registry = OperationRegistry::default();
        assert!(registry.has("to_lowercase"));
    }

    #[test]
    fn test_registry_error_display() {
        let err = RegistryError::DuplicateId("test".to_string());
        assert_eq!(format!("{err}"), "Operation 'test' is already registered");
    }
}
