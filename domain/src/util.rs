//! Shared utility functions.

/// Shorten `s` to at most `max_chars` characters for table display,
/// ending with `…` when anything was cut.
///
/// Counts characters rather than bytes, so multi-byte text is never split.
pub fn ellipsize(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    if max_chars == 0 {
        return String::new();
    }
    let mut out: String = s.chars().take(max_chars - 1).collect();
    out.push('…');
    out
}
