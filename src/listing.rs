// path: src/listing.rs
//! Что показываем пользователю: витрину без фильтров или совпадения запроса.

use omicron_catalog::price::{
    format_naira, price_band_ngn, sort_by_rating, top_rated, FormatOpts, PriceBand,
};
use omicron_catalog::Record;

use crate::config::CatalogConfig;
use crate::index::SearchEngine;
use crate::query::Query;

/// Records to display for `q`.
///
/// Без текста и фасетов -> top-rated витрина (рейтинг >= min, по убыванию, limit).
/// Иначе -> совпадения движка, по желанию отсортированные по рейтингу.
pub fn listing<'a>(
    engine: &'a SearchEngine,
    q: &Query,
    cfg: &CatalogConfig,
    sort_rating: bool,
) -> Vec<&'a Record> {
    if !q.is_constrained() {
        return top_rated(engine.records(), cfg.top_rated_min, cfg.top_rated_limit);
    }
    let mut hits = engine.search(q);
    if sort_rating {
        sort_by_rating(&mut hits);
    }
    hits
}

/// Tab-separated row: brand, model, NGN price, price band, rating.
pub fn render_row(rec: &Record, cfg: &CatalogConfig) -> String {
    let opts = FormatOpts {
        rate: cfg.naira_rate,
        ..FormatOpts::default()
    };
    let band = rec
        .price
        .map_or("-", |p| band_label(price_band_ngn(p * cfg.naira_rate)));
    let rating = rec.rating.map_or_else(|| "-".to_string(), |r| format!("{r:.0}"));
    format!(
        "{}\t{}\t{}\t{}\t{}",
        rec.brand,
        rec.model,
        format_naira(rec.price, &opts),
        band,
        rating
    )
}

fn band_label(b: PriceBand) -> &'static str {
    match b {
        PriceBand::Budget => "budget",
        PriceBand::Mid => "mid",
        PriceBand::Premium => "premium",
    }
}
