//! Search-key normalization for reference data names.
//!
//! Every name-indexed record stores `normalizedName`, the output of
//! [`normalize_name`] applied to its display name. Lookups normalize the
//! user input the same way, so matching is case- and accent-insensitive.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Upper sentinel appended to a key to build a prefix range.
///
/// `U+F8FF` sorts after every character a normalized key can contain.
pub const PREFIX_SENTINEL: char = '\u{f8ff}';

/// Normalize a display name into its search key.
///
/// Lowercases, decomposes (NFD), drops combining marks, drops anything
/// outside `[a-z0-9]` and whitespace, collapses whitespace runs to a
/// single space, and trims.
///
/// ```
/// use memberhub_core::normalize::normalize_name;
///
/// assert_eq!(normalize_name("  Société   Générale "), "societe generale");
/// assert_eq!(normalize_name("L'Oréal"), "loreal");
/// ```
pub fn normalize_name(input: &str) -> String {
    let stripped: String = input
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace())
        .collect();

    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Exclusive upper bound of the prefix range starting at `key`.
pub fn prefix_upper_bound(key: &str) -> String {
    let mut bound = String::with_capacity(key.len() + PREFIX_SENTINEL.len_utf8());
    bound.push_str(key);
    bound.push(PREFIX_SENTINEL);
    bound
}
