//! Operation pipeline engine: registry, pipeline structure and executor

pub mod builtins;
pub mod executor;
pub mod operation;
pub mod pipeline;
pub mod registry;

pub use builtins::all_builtins;
pub use executor::PipelineExecutor;
pub use operation::Operation;
pub use pipeline::Pipeline;
pub use registry::{OperationRegistry, RegistryError};
