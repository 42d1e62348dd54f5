//! Input sanitization for free-text metadata fields.
//!
//! Submitted field values arrive as untrusted strings from the host's form
//! surface. Before storage they are stripped of tag markup and control
//! characters and have their whitespace normalized. The single-line variant
//! collapses all whitespace runs; the multiline variant preserves line breaks
//! for textarea content.

/// Sanitize a single-line text field.
///
/// Strips `<...>` tag markup and control characters, collapses whitespace
/// runs to a single space and trims the ends.
pub fn sanitize_text(input: &str) -> String {
    let stripped = strip_tags(input);
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Sanitize a multiline text field (textarea content).
///
/// Same stripping as [`sanitize_text`] but newlines survive; whitespace is
/// collapsed within each line and blank leading/trailing lines are dropped.
pub fn sanitize_multiline(input: &str) -> String {
    let stripped = strip_tags(input);
    let lines: Vec<String> = stripped
        .lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .collect();
    lines.join("\n").trim_matches('\n').to_string()
}

/// Remove `<...>` sequences and non-whitespace control characters.
///
/// An unterminated `<` swallows the rest of the input, matching the usual
/// tag-stripping behavior of content-management hosts.
fn strip_tags(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_tag = false;
    for c in input.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if in_tag => {}
            '\n' => out.push('\n'),
            c if c.is_control() => out.push(' '),
            c => out.push(c),
        }
    }
    out
}
