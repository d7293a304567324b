//! Folds folder names into the lookup key used for alias matching.

/// Separators dropped from every name in addition to whitespace.
pub const SEPARATOR_CHARS: [char; 7] = ['(', ')', '-', '_', '/', '·', '.'];

/// Information separators U+001C..=U+001F count as whitespace for folder names
/// even though `char::is_whitespace` excludes them.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c) || SEPARATOR_CHARS.contains(&c)
}

/// Removes separators and whitespace, drops one trailing `marker`, then lowercases.
pub fn normalize_alias(name: &str, marker: char) -> String {
    let collapsed: String = name.chars().filter(|c| !is_separator(*c)).collect();
    let unmarked = collapsed.strip_suffix(marker).unwrap_or(collapsed.as_str());
    unmarked.to_lowercase().trim().to_string()
}

/// For a name ending in `marker`, the name with every `marker` removed and
/// trimmed. `None` when the name does not end with one.
pub fn strip_marker(name: &str, marker: char) -> Option<String> {
    if !name.ends_with(marker) {
        return None;
    }
    let unmarked: String = name.chars().filter(|c| *c != marker).collect();
    Some(unmarked.trim().to_string())
}
