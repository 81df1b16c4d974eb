//! The ordered, mutable execution plan
//!
//! A `Pipeline` is a sequence of operation ids, insertion order = execution
//! order. It stores ids, not operations: an id is resolved against the
//! registry lazily at execution time, so a pipeline may hold duplicates and
//! may hold ids that do not currently resolve.
//!
//! Out-of-range move/remove indices are no-ops rather than errors: reorder
//! and delete requests come from per-row controls, and a request that has no
//! neighbor to swap with simply leaves the pipeline unchanged.

/// A user-editable ordered sequence of operation ids
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pipeline {
    steps: Vec<String>,
}

impl Pipeline {
    /// Create a new empty pipeline
    pub fn new() -> Self {
        Pipeline { steps: Vec::new() }
    }

    /// Append an operation id at the end
    ///
    /// The id is not validated against any registry; an unknown id is
    /// accepted and resolved lazily at execution time.
    pub fn append(&mut self, id: impl Into<String>) {
        self.steps.push(id.into());
    }

    /// Swap the step at `index` with its predecessor
    ///
    /// Moving the first step up (or any out-of-range index) is a no-op.
    pub fn move_up(&mut self, index: usize) {
        if index == 0 || index >= self.steps.len() {
            return;
        }
        self.steps.swap(index, index - 1);
    }

    /// Swap the step at `index` with its successor
    ///
    /// Moving the last step down (or any out-of-range index) is a no-op.
    pub fn move_down(&mut self, index: usize) {
        if index + 1 >= self.steps.len() {
            return;
        }
        self.steps.swap(index, index + 1);
    }

    /// Remove the step at `index`
    ///
    /// An out-of-range index is a no-op, consistent with the move policy.
    pub fn remove_at(&mut self, index: usize) {
        if index >= self.steps.len() {
            return;
        }
        self.steps.remove(index);
    }

    /// The ids in execution order
    pub fn ordered_ids(&self) -> &[String] {
        &self.steps
    }

    /// Number of steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the pipeline has no steps
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
