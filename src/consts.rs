use regex::Regex;
use std::sync::LazyLock;

/// Suffix shared by both pattern variants: captures the numeric index, the
/// optional bracketed tag group (brackets included), and the extension.
/// Anchored at the end; trailing garbage after the extension is a non-match.
pub const FORMAT_SUFFIX: &str = r"_(\d+)(\[[\w\-_\s]+\])?\.(\w+)$";

/// Characters outside the allowed filename set: letters, digits, spaces,
/// underscores, dashes, fullstops, square and round brackets.
pub static ILLEGAL_CHARS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L} _\-\d.\[\]()]").unwrap());
