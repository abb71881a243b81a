mod helpers;

use helpers::scenario;
use omicron::query::Query;
use omicron::{EngineState, SearchEngine};

fn ids(hits: &[&omicron_catalog::Record]) -> Vec<String> {
    hits.iter().map(|r| r.id.clone()).collect()
}

#[test]
fn scenario_text_and_facets() -> anyhow::Result<()> {
    let e = SearchEngine::with_records(scenario());

    assert_eq!(ids(&e.search(&Query::text("gal"))), vec!["Galaxy S21"]);
    assert_eq!(
        ids(&e.search(&Query::default().with_facet("ram", "6")?)),
        vec!["Galaxy S21"]
    );
    assert_eq!(
        ids(&e.search(&Query::default().with_facet("price", "budget")?)),
        vec!["Galaxy S21"]
    );
    assert_eq!(
        ids(&e.search(&Query::default().with_facet("os", "ios")?)),
        vec!["iPhone 13"]
    );
    Ok(())
}

#[test]
fn search_before_set_records_is_empty() {
    let e = SearchEngine::new();
    assert_eq!(e.state(), EngineState::Unindexed);
    assert!(e.search(&Query::text("galaxy")).is_empty());
    assert!(e.search(&Query::default()).is_empty());
}

#[test]
fn short_query_is_not_a_text_filter() {
    let e = SearchEngine::with_records(scenario());
    assert_eq!(e.search(&Query::text("ab")).len(), 2);
    assert_eq!(e.search(&Query::text("x")).len(), 2);
}

#[test]
fn unknown_facet_value_fails_open() -> anyhow::Result<()> {
    let e = SearchEngine::with_records(scenario());
    let q = Query::default()
        .with_facet("price", "luxury")?
        .with_facet("ram", "plenty")?
        .with_facet("battery", "all")?;
    assert_eq!(e.search(&q).len(), 2);
    assert!(Query::default().with_facet("colour", "red").is_err());
    Ok(())
}

#[test]
fn unmatched_gram_short_circuits_to_empty() {
    let e = SearchEngine::with_records(scenario());
    // "gal" есть, "zzz" нет
    assert!(e.search(&Query::text("galzzz")).is_empty());
    assert!(e.candidates("galzzz").is_empty());
}

#[test]
fn two_letter_suffix_not_searchable_alone() {
    let mut recs = scenario();
    recs[1].model = "iPhone 13 SE".into();
    let e = SearchEngine::with_records(recs);
    // "se" короче 3: фильтра по тексту нет вообще
    assert_eq!(e.search(&Query::text("se")).len(), 2);
    // "13 se" пересекает границу слов
    assert!(e.search(&Query::text("13 se")).is_empty());
}

#[test]
fn engine_does_not_dedup() {
    let mut recs = scenario();
    recs.push(recs[0].clone());
    let e = SearchEngine::with_records(recs);
    assert_eq!(e.search(&Query::text("galaxy")).len(), 2);
}
