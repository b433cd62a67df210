//! Template substitution module
//!
//! Provides tokenizing of `${variable}` syntax and single-pass substitution.
//!
//! # Syntax
//!
//! - `${name}` is replaced with the value of `name`.
//! - `@${` produces a literal `${`.
//! - `@@` produces a literal `@`.
//! - Any other `@`, and any `$` not followed by `{`, is literal.
//!
//! # Usage
//!
//! ```
//! use stencil_application::substitution::substitute;
//! use stencil_domain::VariableMap;
//!
//! let variables: VariableMap = [("name", "Bob"), ("emailAccount", "unittesters.com")]
//!     .into_iter()
//!     .collect();
//!
//! let result = substitute(&variables, "Hello ${name}@@${emailAccount}");
//! assert_eq!(result.unwrap(), "Hello Bob@unittesters.com");
//! ```

pub mod engine;
pub mod parser;

pub use engine::{Substitutor, find_undefined, substitute};
pub use parser::{Token, Tokens, has_references, referenced_variables, tokenize};
