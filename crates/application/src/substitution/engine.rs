//! Substitution engine
//!
//! Replaces `${variable}` references with values from a [`VariableSource`].

use std::collections::HashSet;

use stencil_domain::syntax::is_verbatim;
use stencil_domain::{SubstitutionError, SubstitutionResult, VariableSource};
use tracing::{debug, trace};

use super::parser::{Token, tokenize};

/// Substitutes every variable reference in `template` with its value.
///
/// Values are inserted exactly as stored; they are never scanned again.
///
/// # Errors
///
/// - [`SubstitutionError::UnterminatedSubstitution`] if a `${` has no closing `}`.
/// - [`SubstitutionError::UndefinedVariable`] if a referenced name is missing
///   from `variables`.
///
/// No partial output is returned on failure.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use stencil_application::substitution::substitute;
///
/// let mut variables = HashMap::new();
/// variables.insert("name".to_string(), "Bob".to_string());
///
/// assert_eq!(substitute(&variables, "Hi ${name}. Send $5").unwrap(), "Hi Bob. Send $5");
/// assert!(substitute(&variables, "Hi ${names}.").is_err());
/// ```
pub fn substitute<S>(variables: &S, template: &str) -> SubstitutionResult<String>
where
    S: VariableSource + ?Sized,
{
    if is_verbatim(template) {
        trace!("template has escapes but no markers, returning as-is");
        return Ok(template.to_string());
    }

    let mut output = String::with_capacity(template.len());

    for token in tokenize(template) {
        let token = token.inspect_err(|err| debug!(error = %err, "unterminated substitution"))?;
        if let Token::Variable { name, span } = token {
            let Some(value) = variables.lookup(name) else {
                debug!(variable = name, offset = span.start, "undefined variable");
                return Err(SubstitutionError::undefined(name));
            };
            trace!(variable = name, offset = span.start, "substituted variable");
            output.push_str(value);
        } else if let Some(text) = token.literal() {
            output.push_str(text);
        }
    }

    Ok(output)
}

/// Lists referenced variables that `variables` cannot resolve.
///
/// Names are deduplicated and reported in order of first appearance.
///
/// # Errors
///
/// Returns [`SubstitutionError::UnterminatedSubstitution`] if a `${` has no
/// closing `}`.
pub fn find_undefined<S>(variables: &S, template: &str) -> SubstitutionResult<Vec<String>>
where
    S: VariableSource + ?Sized,
{
    let mut seen = HashSet::new();
    let mut undefined = Vec::new();

    for token in tokenize(template) {
        if let Token::Variable { name, .. } = token?
            && !variables.contains(name)
            && seen.insert(name)
        {
            undefined.push(name.to_string());
        }
    }

    Ok(undefined)
}

/// Substitutes templates against a bound set of variables.
///
/// The source is only ever read, so a shared `Substitutor` can serve
/// concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct Substitutor<S> {
    source: S,
}

impl<S: VariableSource> Substitutor<S> {
    /// Creates a substitutor over the given variables.
    #[must_use]
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    /// Returns a reference to the bound variables.
    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Consumes the substitutor, returning the bound variables.
    #[must_use]
    pub fn into_inner(self) -> S {
        self.source
    }

    /// Substitutes every variable reference in `template`.
    ///
    /// # Errors
    ///
    /// See [`substitute`].
    pub fn substitute(&self, template: &str) -> SubstitutionResult<String> {
        substitute(&self.source, template)
    }

    /// Lists referenced variables missing from the bound source.
    ///
    /// # Errors
    ///
    /// See [`find_undefined`].
    pub fn find_undefined(&self, template: &str) -> SubstitutionResult<Vec<String>> {
        find_undefined(&self.source, template)
    }
}
