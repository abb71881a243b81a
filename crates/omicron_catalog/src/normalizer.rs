use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Case folding shared by the index and facet comparisons: lowercase + NFKC.
pub fn fold_case(s: &str) -> String {
    s.to_lowercase().nfkc().collect()
}

/// Текст для trigram-индекса и окон запроса: fold_case + снятие диакритики.
pub fn normalize(s: &str) -> String {
    fold_case(s)
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .nfc()
        .collect()
}

/// Case-insensitive equality (facet brand/os). Диакритику не трогаем.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    fold_case(a) == fold_case(b)
}

/// Case-insensitive containment: `haystack` contains `needle`.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    fold_case(haystack).contains(&fold_case(needle))
}
