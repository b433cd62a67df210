//! Domain error types

use thiserror::Error;

/// Errors that terminate a substitution.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubstitutionError {
    /// A `${` was found with no `}` anywhere after it.
    #[error("invalid template provided: '${{' provided without closing '}}': {template}")]
    UnterminatedSubstitution {
        /// The full template being substituted.
        template: String,
    },

    /// A referenced variable is missing from the mapping.
    #[error("template contains invalid variable: {name}")]
    UndefinedVariable {
        /// The name between `${` and `}`.
        name: String,
    },
}

impl SubstitutionError {
    /// Creates an unterminated substitution error for the given template.
    #[must_use]
    pub fn unterminated(template: impl Into<String>) -> Self {
        Self::UnterminatedSubstitution {
            template: template.into(),
        }
    }

    /// Creates an undefined variable error for the given name.
    #[must_use]
    pub fn undefined(name: impl Into<String>) -> Self {
        Self::UndefinedVariable { name: name.into() }
    }

    /// Returns the offending variable name, if this is an undefined variable error.
    #[must_use]
    pub fn variable_name(&self) -> Option<&str> {
        match self {
            Self::UndefinedVariable { name } => Some(name),
            Self::UnterminatedSubstitution { .. } => None,
        }
    }

    /// Returns the offending template, if this is an unterminated substitution error.
    #[must_use]
    pub fn template(&self) -> Option<&str> {
        match self {
            Self::UnterminatedSubstitution { template } => Some(template),
            Self::UndefinedVariable { .. } => None,
        }
    }
}

/// Result type alias for substitution operations.
pub type SubstitutionResult<T> = Result<T, SubstitutionError>;
