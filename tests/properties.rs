mod helpers;

use helpers::catalog;
use omicron::query::{FacetName, Facets, Query};
use omicron::SearchEngine;
use std::collections::BTreeSet;

const TEXTS: &[&str] = &["", "ab", "gal", "Galaxy", "iphone", "PRO", "redmi", "android", "zzz", "note 12"];

fn facet_sets() -> Vec<Facets> {
    let raw: &[&[(FacetName, &str)]] = &[
        &[],
        &[(FacetName::Ram, "6")],
        &[(FacetName::Price, "budget")],
        &[(FacetName::Price, "mid"), (FacetName::Os, "android")],
        &[(FacetName::Price, "premium")],
        &[(FacetName::Brand, "apple"), (FacetName::Ram, "8")],
        &[(FacetName::Processor, "snap")],
        &[(FacetName::Battery, "5000")],
        &[(FacetName::ScreenSize, "6.0"), (FacetName::Camera, "all")],
    ];
    raw.iter()
        .map(|pairs| {
            let mut f = Facets::none();
            for (n, v) in pairs.iter() {
                f.set(*n, v);
            }
            f
        })
        .collect()
}

fn ids(e: &SearchEngine, q: &Query) -> BTreeSet<String> {
    e.search(q).iter().map(|r| r.id.clone()).collect()
}

fn query(text: &str, facets: &Facets) -> Query {
    Query {
        text: text.to_string(),
        facets: facets.clone(),
    }
}

#[test]
fn set_records_is_idempotent() {
    let mut e = SearchEngine::with_records(catalog());
    let before: Vec<_> = TEXTS.iter().map(|t| ids(&e, &Query::text(*t))).collect();
    e.set_records(catalog());
    let after: Vec<_> = TEXTS.iter().map(|t| ids(&e, &Query::text(*t))).collect();
    assert_eq!(before, after);
}

#[test]
fn empty_store_returns_nothing() {
    let e = SearchEngine::with_records(Vec::new());
    for t in TEXTS {
        for f in facet_sets() {
            assert!(e.search(&query(t, &f)).is_empty());
        }
    }
}

#[test]
fn raising_ram_threshold_never_grows_results() {
    let e = SearchEngine::with_records(catalog());
    for t in TEXTS {
        let mut prev = usize::MAX;
        for ram in ["0", "4", "6", "8", "12", "16"] {
            let q = Query::text(*t).with_facet("ram", ram).unwrap();
            let n = e.search(&q).len();
            assert!(n <= prev, "text={t} ram={ram}: {n} > {prev}");
            prev = n;
        }
    }
}

#[test]
fn text_and_facets_compose_as_intersection() {
    let e = SearchEngine::with_records(catalog());
    for t in TEXTS {
        for f in facet_sets() {
            let both = ids(&e, &query(t, &f));
            let text_only = ids(&e, &Query::text(*t));
            let facets_only = ids(&e, &query("", &f));
            let expected: BTreeSet<String> =
                text_only.intersection(&facets_only).cloned().collect();
            assert_eq!(both, expected, "text={t} facets={f:?}");
        }
    }
}

#[test]
fn text_is_case_insensitive() {
    let e = SearchEngine::with_records(catalog());
    assert_eq!(ids(&e, &Query::text("Galaxy")), ids(&e, &Query::text("galaxy")));
    assert_eq!(ids(&e, &Query::text("IPHONE")), ids(&e, &Query::text("iPhone")));
    assert_eq!(ids(&e, &Query::text("galaxy")).len(), 2);
}

#[test]
fn short_query_candidates_equal_empty_query() {
    let e = SearchEngine::with_records(catalog());
    assert_eq!(e.candidates("ab"), e.candidates(""));
    assert_eq!(e.candidates("ab").cardinality() as usize, e.len());
}

#[test]
fn missing_numeric_attribute_never_passes_threshold() {
    let e = SearchEngine::with_records(catalog());
    let q = Query::text("moto").with_facet("ram", "0").unwrap();
    assert!(e.search(&q).is_empty());
    let q = Query::text("moto").with_facet("price", "budget").unwrap();
    assert!(e.search(&q).is_empty());
    assert_eq!(e.search(&Query::text("moto")).len(), 1);
}
