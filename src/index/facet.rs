use omicron_catalog::normalizer::{contains_ignore_case, eq_ignore_case};
use omicron_catalog::Record;

use crate::query::{Constraint, Facets};

/// Все фасеты должны выполниться (AND). `Any` пропускает всё.
pub fn matches_facets(rec: &Record, f: &Facets) -> bool {
    text_eq(&f.brand, &rec.brand)
        && text_eq(&f.os, &rec.operating_system)
        && price_in_tier(f, rec.price)
        && at_least(&f.ram, rec.ram_gib)
        && at_least(&f.storage, rec.storage_gib)
        && at_least(&f.battery, rec.battery_mah)
        && at_least(&f.camera, rec.rear_camera_mp)
        && at_least(&f.screen_size, rec.screen_inches)
        && text_contains(&f.processor, &rec.processor_family)
}

fn text_eq(c: &Constraint<String>, value: &str) -> bool {
    c.get().map_or(true, |want| eq_ignore_case(value, want))
}

fn text_contains(c: &Constraint<String>, value: &str) -> bool {
    c.get().map_or(true, |want| contains_ignore_case(value, want))
}

/// Missing price never satisfies a concrete tier.
fn price_in_tier(f: &Facets, price: Option<f64>) -> bool {
    match (f.price.get(), price) {
        (None, _) => true,
        (Some(tier), Some(p)) => tier.contains(p),
        (Some(_), None) => false,
    }
}

/// Non-strict `>=`; a missing attribute never passes a concrete threshold.
fn at_least(c: &Constraint<f64>, value: Option<f64>) -> bool {
    match (c.get(), value) {
        (None, _) => true,
        (Some(min), Some(v)) => v >= *min,
        (Some(_), None) => false,
    }
}
