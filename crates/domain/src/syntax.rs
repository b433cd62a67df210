//! Reserved template syntax
//!
//! Every reserved token is ASCII, so byte offsets found by searching for them
//! always fall on UTF-8 character boundaries.

/// Opens a variable reference.
pub const SUBSTITUTION_START: &str = "${";

/// Closes a variable reference.
pub const SUBSTITUTION_END: &str = "}";

/// First character of [`SUBSTITUTION_START`]. Only special when followed by `{`.
pub const SUBSTITUTION_START_CHAR: char = '$';

/// Forces the following `@` or `${` to be taken literally.
pub const ESCAPE_CHAR: char = '@';

/// Returns true if the template can skip scanning entirely.
///
/// A template with no `${` and no `}` but at least one `@` is emitted as-is,
/// escape characters included.
#[must_use]
pub fn is_verbatim(template: &str) -> bool {
    !template.contains(SUBSTITUTION_START)
        && !template.contains(SUBSTITUTION_END)
        && template.contains(ESCAPE_CHAR)
}
