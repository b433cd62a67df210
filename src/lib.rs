//! Stencil - `${variable}` template substitution
//!
//! Facade over the workspace crates. Most callers only need [`substitute`].
//!
//! ```
//! use std::collections::HashMap;
//!
//! let mut variables = HashMap::new();
//! variables.insert("day".to_string(), "Monday".to_string());
//!
//! let result = stencil::substitute(&variables, "A variable starts with @${ as of ${day}.");
//! assert_eq!(result.unwrap(), "A variable starts with ${ as of Monday.");
//! ```

pub use stencil_application::substitution::{
    Substitutor, Token, Tokens, find_undefined, has_references, referenced_variables,
    substitute, tokenize,
};
pub use stencil_domain::{SubstitutionError, SubstitutionResult, VariableMap, VariableSource};
