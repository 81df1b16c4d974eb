//! # strops
//!
//! An ordered pipeline of named, pure string transformations.
//!
//! The crate is built around four pieces:
//! - [`ops::Operation`]: a named `string -> string` transform
//! - [`ops::OperationRegistry`]: the startup-populated catalog of operations
//! - [`ops::Pipeline`]: a user-editable ordered sequence of operation ids
//! - [`ops::PipelineExecutor`]: folds a pipeline over an input string
//!
//! ```
//! use strops::ops::{Pipeline, PipelineExecutor};
//!
//! let mut pipeline = Pipeline::new();
//! pipeline.append("to_title_case");
//!
//! let executor = PipelineExecutor::new();
//! assert_eq!(executor.run("hello world", &pipeline), "Hello World");
//! ```

pub mod ops;
