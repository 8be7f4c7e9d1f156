//! Category name normalization.

use unicode_normalization::UnicodeNormalization;

/// Normalizes a category name: keeps alphanumerics, spaces, `-` and `_`,
/// trims, turns whitespace into `_`, folds to ASCII and lowercases.
///
/// `"Banco do Brasil"` becomes `"banco_do_brasil"`, `"Itaú"` becomes `"itau"`.
pub fn normalize_category(name: &str) -> String {
    let kept: String = name
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '-' || *c == '_')
        .collect();
    kept.trim()
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect::<String>()
        .nfkd()
        .filter(char::is_ascii)
        .collect::<String>()
        .to_ascii_lowercase()
}
