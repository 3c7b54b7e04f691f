//! Section header recognition.

/// Whether `c` may appear in a block name: ASCII letters, digits, `_`, `$`
/// and `-`.
pub fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '$' | '-')
}

/// Return the block name if `line` is a `[name]` header.
///
/// Surrounding whitespace is ignored. Anything else on the line, an empty
/// name, or a character outside [`is_name_char`] means it is not a header.
pub fn parse_header(line: &str) -> Option<&str> {
    let name = line.trim().strip_prefix('[')?.strip_suffix(']')?;
    if !name.is_empty() && name.chars().all(is_name_char) {
        Some(name)
    } else {
        None
    }
}
