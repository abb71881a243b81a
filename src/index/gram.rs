use omicron_catalog::normalizer::normalize;

/// Все 3-символьные окна строки (по char). Короче 3 символов -> пусто.
pub fn trigrams(s: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut it = s.chars();
    let Some(mut a) = it.next() else { return out };
    let Some(mut b) = it.next() else { return out };
    for c in it {
        let mut tri = String::with_capacity(3);
        tri.push(a);
        tri.push(b);
        tri.push(c);
        out.push(tri);
        a = b;
        b = c;
    }
    out
}

/// Index tokens for one record: the indexed fields joined by a space,
/// normalized, split into words, trigrams emitted per word.
/// Grams never straddle a word boundary.
pub fn record_grams(fields: &[&str]) -> Vec<String> {
    let text = normalize(&fields.join(" "));
    text.split_whitespace().flat_map(trigrams).collect()
}

/// Окна запроса: весь текст целиком, пробелы не выкидываем.
/// Окно с пробелом в индексе не встретится.
pub fn query_windows(text: &str) -> Vec<String> {
    trigrams(&normalize(text))
}
