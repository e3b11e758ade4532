//! Search term sanitization.

/// Strip every character that is not an ASCII letter, digit, or space.
///
/// Conservative guard against metacharacters reaching the store's
/// pattern-matching operator. The stripped term may be empty, in which case
/// the substring match degenerates to matching every post.
pub fn sanitize_term(term: &str) -> String {
    term.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
        .collect()
}
