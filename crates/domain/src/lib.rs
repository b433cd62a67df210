//! Stencil Domain - Core template types
//!
//! This crate defines the reserved template syntax, the variable mapping
//! abstraction and the substitution error type.
//! All types here are pure Rust with no I/O dependencies.

pub mod error;
pub mod syntax;
pub mod variables;

pub use error::{SubstitutionError, SubstitutionResult};
pub use variables::{VariableMap, VariableSource};
