use crate::consts::ILLEGAL_CHARS_RE;

/// Sanitize a filename into the allowed character set, turning anything else
/// into underscores. Allowed: letters, digits, spaces, underscores, dashes,
/// fullstops, square and round brackets.
pub fn sanitize_name(name: &str) -> String {
    let out = ILLEGAL_CHARS_RE.replace_all(name, "_").to_string();
    tracing::trace!(original = name, sanitized = %out);
    out
}
