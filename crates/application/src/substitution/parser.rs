//! Template tokenizer for `${variable}` syntax
//!
//! Splits a template into literal runs, escape sequences and variable
//! references with their positions, in a single left-to-right pass.

use std::iter::FusedIterator;
use std::ops::Range;

use stencil_domain::syntax::{
    ESCAPE_CHAR, SUBSTITUTION_END, SUBSTITUTION_START, SUBSTITUTION_START_CHAR, is_verbatim,
};
use stencil_domain::{SubstitutionError, SubstitutionResult};

/// One recognized piece of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'t> {
    /// Literal text copied from the template as-is.
    Text(&'t str),

    /// The literal produced by an escape sequence: `@` for `@@`, `${` for `@${`,
    /// or `@` for a lone escape character.
    Escaped(&'t str),

    /// A variable reference.
    Variable {
        /// The text between `${` and `}`. May be empty.
        name: &'t str,

        /// Byte range of the whole `${name}` in the template.
        span: Range<usize>,
    },
}

impl<'t> Token<'t> {
    /// Returns the text this token emits, or `None` for a variable reference.
    #[must_use]
    pub const fn literal(&self) -> Option<&'t str> {
        match self {
            Self::Text(text) | Self::Escaped(text) => Some(*text),
            Self::Variable { .. } => None,
        }
    }
}

/// Iterator over the tokens of a template.
///
/// Yields an error for a `${` with no closing `}` and is exhausted afterwards.
#[derive(Debug, Clone)]
pub struct Tokens<'t> {
    template: &'t str,
    cursor: usize,
    verbatim: bool,
}

/// Tokenizes a template.
///
/// # Examples
///
/// ```
/// use stencil_application::substitution::parser::{Token, tokenize};
///
/// let tokens: Vec<_> = tokenize("Hi ${name}@@").collect::<Result<_, _>>().unwrap();
/// assert_eq!(tokens[0], Token::Text("Hi "));
/// assert_eq!(tokens[1], Token::Variable { name: "name", span: 3..10 });
/// assert_eq!(tokens[2], Token::Escaped("@"));
/// ```
#[must_use]
pub fn tokenize(template: &str) -> Tokens<'_> {
    Tokens::new(template)
}

impl<'t> Tokens<'t> {
    /// Creates a tokenizer positioned at the start of `template`.
    #[must_use]
    pub fn new(template: &'t str) -> Self {
        Self {
            template,
            cursor: 0,
            verbatim: is_verbatim(template),
        }
    }

    /// Returns the template being scanned.
    ///
    /// Together with [`Tokens::position`] this lets callers report where a
    /// scan stopped.
    #[must_use]
    pub const fn template(&self) -> &'t str {
        self.template
    }

    /// Returns the current byte offset into the template.
    ///
    /// Equals the template length once the iterator is exhausted, including
    /// after an error.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.cursor
    }

    fn finish(&mut self) {
        self.cursor = self.template.len();
    }

    fn next_token(&mut self) -> SubstitutionResult<Token<'t>> {
        let template = self.template;
        let start = self.cursor;
        let rest = &template[start..];

        if let Some(after) = rest.strip_prefix(ESCAPE_CHAR) {
            let escaped = if after.starts_with(ESCAPE_CHAR) {
                &after[..ESCAPE_CHAR.len_utf8()]
            } else if after.starts_with(SUBSTITUTION_START) {
                &after[..SUBSTITUTION_START.len()]
            } else {
                // Lone escape character.
                self.cursor += ESCAPE_CHAR.len_utf8();
                return Ok(Token::Escaped(&rest[..ESCAPE_CHAR.len_utf8()]));
            };
            self.cursor += ESCAPE_CHAR.len_utf8() + escaped.len();
            return Ok(Token::Escaped(escaped));
        }

        if let Some(body) = rest.strip_prefix(SUBSTITUTION_START) {
            let Some(name_len) = body.find(SUBSTITUTION_END) else {
                self.finish();
                return Err(SubstitutionError::unterminated(template));
            };
            let end = start + SUBSTITUTION_START.len() + name_len + SUBSTITUTION_END.len();
            self.cursor = end;
            return Ok(Token::Variable {
                name: &body[..name_len],
                span: start..end,
            });
        }

        // A `$` reaching this point is literal; skip it so the run can grow.
        let skip = if rest.starts_with(SUBSTITUTION_START_CHAR) {
            SUBSTITUTION_START_CHAR.len_utf8()
        } else {
            0
        };
        let len = rest[skip..]
            .find([ESCAPE_CHAR, SUBSTITUTION_START_CHAR])
            .map_or(rest.len(), |offset| offset + skip);
        self.cursor += len;
        Ok(Token::Text(&rest[..len]))
    }
}

impl<'t> Iterator for Tokens<'t> {
    type Item = SubstitutionResult<Token<'t>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.template.len() {
            return None;
        }

        if self.verbatim {
            self.finish();
            return Some(Ok(Token::Text(self.template)));
        }

        Some(self.next_token())
    }
}

impl FusedIterator for Tokens<'_> {}

/// Returns true if the template contains at least one unescaped `${`.
#[must_use]
pub fn has_references(template: &str) -> bool {
    tokenize(template).any(|token| matches!(token, Ok(Token::Variable { .. }) | Err(_)))
}

/// Extracts the referenced variable names in order of appearance.
///
/// Duplicates are kept.
///
/// # Errors
///
/// Returns [`SubstitutionError::UnterminatedSubstitution`] if a `${` has no
/// closing `}`.
pub fn referenced_variables(template: &str) -> SubstitutionResult<Vec<&str>> {
    tokenize(template)
        .filter_map(|token| match token {
            Ok(Token::Variable { name, .. }) => Some(Ok(name)),
            Ok(_) => None,
            Err(err) => Some(Err(err)),
        })
        .collect()
}
