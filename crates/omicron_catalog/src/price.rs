// path: crates/omicron_catalog/src/price.rs
//! Цены в датасетах в INR; для отображения конвертируем в NGN.

use std::cmp::Ordering;

use crate::record::Record;

/// INR -> NGN.
pub const NAIRA_CONVERSION_RATE: f64 = 4.8;

pub const DEFAULT_TOP_RATED_MIN: f64 = 75.0;
pub const DEFAULT_TOP_RATED_LIMIT: usize = 24;

#[derive(Debug, Clone)]
pub struct FormatOpts {
    pub show_currency: bool,
    pub decimals: usize,
    pub fallback: String,
    pub rate: f64,
}

impl Default for FormatOpts {
    fn default() -> Self {
        Self {
            show_currency: true,
            decimals: 0,
            fallback: "N/A".into(),
            rate: NAIRA_CONVERSION_RATE,
        }
    }
}

/// Convert an INR price to NGN and format it with thousands separators.
/// Missing or zero prices render as `opts.fallback`.
pub fn format_naira(price_inr: Option<f64>, opts: &FormatOpts) -> String {
    let Some(p) = price_inr.filter(|p| *p != 0.0 && p.is_finite()) else {
        return opts.fallback.clone();
    };
    let formatted = group_thousands(&format!("{:.*}", opts.decimals, p * opts.rate));
    if opts.show_currency {
        format!("₦{formatted}")
    } else {
        formatted
    }
}

fn group_thousands(num: &str) -> String {
    let (sign, rest) = match num.strip_prefix('-') {
        Some(r) => ("-", r),
        None => ("", num),
    };
    let (int_part, frac) = match rest.find('.') {
        Some(i) => (&rest[..i], &rest[i..]),
        None => (rest, ""),
    };
    let mut out = String::with_capacity(num.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    format!("{sign}{out}{frac}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceBand {
    Budget,
    Mid,
    Premium,
}

/// Ценовой диапазон по цене уже в NGN.
pub fn price_band_ngn(price_ngn: f64) -> PriceBand {
    if price_ngn < 72_000.0 {
        PriceBand::Budget
    } else if price_ngn < 144_000.0 {
        PriceBand::Mid
    } else {
        PriceBand::Premium
    }
}

/// Витрина без фильтров: рейтинг >= `min_rating`, по убыванию рейтинга, первые `limit`.
pub fn top_rated(records: &[Record], min_rating: f64, limit: usize) -> Vec<&Record> {
    let mut out: Vec<&Record> = records
        .iter()
        .filter(|r| r.rating.is_some_and(|x| x >= min_rating))
        .collect();
    sort_by_rating(&mut out);
    out.truncate(limit);
    out
}

/// Stable sort, highest rating first; unrated records go last.
pub fn sort_by_rating(records: &mut [&Record]) {
    records.sort_by(|a, b| match (a.rating, b.rating) {
        (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}
