//! The `Operation` trait implemented by every string transform

/// A named, pure, argument-free string-to-string transform.
///
/// Implementors must be total: `apply` never panics past its own boundary and
/// never observes state outside its single input argument. A transform that
/// can fail internally (malformed input for its encoding) catches the fault
/// locally and returns its argument unchanged.
pub trait Operation: Send + Sync {
    /// Short stable identifier, unique across a registry (e.g., "to_uppercase")
    fn id(&self) -> &str;

    /// Human-readable label; never used for lookup
    fn name(&self) -> &str;

    /// Apply the transform to `input`, producing the transformed string
    fn apply(&self, input: &str) -> String;
}
