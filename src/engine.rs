//! Rule execution engine and issue aggregation

pub mod executor;

pub use executor::{ExecutionEngine, ExecutionResult};
