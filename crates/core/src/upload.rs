//! Helpers for batch text uploads: safe on-disk filenames and line splitting.

use unicode_normalization::UnicodeNormalization;

/// Reduce a client-supplied filename to something safe to join onto the
/// upload directory.
///
/// The name is NFKD-decomposed so accented letters fold to their ASCII base
/// (`ş` becomes `s`, `ö` becomes `o`). Path separators (`/` and `\`) count as
/// whitespace, whitespace runs become a single `_`, and anything other than
/// ASCII alphanumerics, `.`, `-` and `_` is dropped. Leading and trailing `.`
/// and `_` are trimmed so the result can never be `..` or a hidden file.
///
/// Returns `None` when nothing usable remains.
///
/// ```
/// use moodlens_core::upload::sanitize_filename;
///
/// assert_eq!(sanitize_filename("my reviews.txt").as_deref(), Some("my_reviews.txt"));
/// assert_eq!(sanitize_filename("şikayetler öğrenci.txt").as_deref(), Some("sikayetler_ogrenci.txt"));
/// assert_eq!(sanitize_filename("../../etc/passwd").as_deref(), Some("etc_passwd"));
/// assert_eq!(sanitize_filename("..").as_deref(), None);
/// ```
pub fn sanitize_filename(name: &str) -> Option<String> {
    let folded: String = name
        .nfkd()
        .filter(|c| c.is_ascii())
        .map(|c| if matches!(c, '/' | '\\') { ' ' } else { c })
        .collect();

    let joined = folded.split_whitespace().collect::<Vec<_>>().join("_");
    let filtered: String = joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
        .collect();

    let trimmed = filtered.trim_matches(|c: char| c == '.' || c == '_');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Iterate over the non-blank lines of an uploaded text file, trimmed.
///
/// `\n`, `\r\n` and a bare `\r` all end a line. A leading UTF-8 byte-order
/// mark is ignored.
pub fn non_blank_lines(content: &str) -> impl Iterator<Item = &str> {
    content
        .strip_prefix('\u{feff}')
        .unwrap_or(content)
        .split(['\n', '\r'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
}
