//! Escaping of translation content into single-quoted script literals.

/// Escapes content for embedding in a single-quoted script literal.
///
/// Backslashes are escaped before quotes and line endings so inserted
/// backslashes are never escaped twice. `\r\n` is normalized to `\n` before
/// line endings are escaped, so both collapse to the two-character `\n`
/// sequence exactly once; a bare `\r` passes through.
pub fn escape_content(content: &str) -> String {
    content
        .replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace("\r\n", "\n")
        .replace('\n', "\\n")
}

/// Escapes like [`escape_content`], but keeps the generated literal readable:
/// each line ending also closes the quote and reopens it on the next line,
/// indented, joined with `+`.
pub fn pretty_escape_content(content: &str) -> String {
    content
        .replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace("\r\n", "\n")
        .replace('\n', "\\n' +\n    '")
}
