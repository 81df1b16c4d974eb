//! Pipeline executor that folds a pipeline over an input string

use crate::ops::pipeline::Pipeline;
use crate::ops::registry::OperationRegistry;

/// Executes pipelines against the operation catalog
///
/// The executor owns the registry it resolves against. `run` is pure relative
/// to `(input, pipeline, registry)`: identical inputs always yield the
/// identical output.
pub struct PipelineExecutor {
    registry: OperationRegistry,
}

impl PipelineExecutor {
    /// Create an executor over the built-in operation catalog
    pub fn new() -> Self {
        Self {
            registry: OperationRegistry::with_builtins(),
        }
    }

    /// Create an executor over a custom registry
    pub fn with_registry(registry: OperationRegistry) -> Self {
        Self { registry }
    }

    /// Run a pipeline over an input string
    ///
    /// The accumulator starts as `input`; each step's transform replaces it.
    /// An id that does not resolve is a transparent identity step, never a
    /// fatal error: the accumulator passes through unchanged and execution
    /// proceeds with the next step. Every step is individually total, so the
    /// fold always produces a complete string (worst case, unchanged).
    pub fn run(&self, input: &str, pipeline: &Pipeline) -> String {
        pipeline
            .ordered_ids()
            .iter()
            .fold(input.to_string(), |acc, id| {
                match self.registry.lookup(id) {
                    Some(op) => op.apply(&acc),
                    None => acc,
                }
            })
    }

    /// Get the registry
    pub fn registry(&self) -> &OperationRegistry {
        &self.registry
    }
}

impl Default for PipelineExecutor {
    fn default() -> Self {
        Self::new()
    }
}
