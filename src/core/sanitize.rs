// src/core/sanitize.rs

/// Filename-safe key for a display name.
///
/// Lowercase, spaces become `-`, periods and apostrophes vanish. Path
/// separators are dropped as well so the result is always one path
/// component. Pure: the same name always yields the same slug, which is
/// what makes the on-disk image cache hit across runs.
pub fn slugify(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for ch in name.chars().flat_map(char::to_lowercase) {
        match ch {
            ' ' => out.push('-'),
            '.' | '\'' | '/' | '\\' => {}
            _ => out.push(ch),
        }
    }
    out
}
