pub mod facet;
pub mod gram;
pub mod inverted;

use croaring::Bitmap;
use omicron_catalog::Record;
use std::sync::{Arc, PoisonError, RwLock};

use crate::query::Query;
use facet::matches_facets;
use gram::{query_windows, record_grams};
use inverted::{InvertedIndex, Pos};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// `set_records` ещё не вызывался: любой запрос -> пусто.
    Unindexed,
    Ready,
}

struct Indexed {
    records: Vec<Record>,
    inv: InvertedIndex,
}

impl Indexed {
    fn build(records: Vec<Record>) -> Self {
        let mut inv = InvertedIndex::new();
        for (pos, rec) in records.iter().enumerate() {
            inv.add_grams(pos as Pos, record_grams(&rec.indexed_fields()));
        }
        Self { records, inv }
    }
}

/// Trigram index + facet filter over a fully replaced record set.
#[derive(Default)]
pub struct SearchEngine {
    state: Option<Indexed>,
}

impl SearchEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine already indexed over `records`.
    pub fn with_records(records: Vec<Record>) -> Self {
        let mut e = Self::new();
        e.set_records(records);
        e
    }

    pub fn state(&self) -> EngineState {
        match self.state {
            None => EngineState::Unindexed,
            Some(_) => EngineState::Ready,
        }
    }

    /// Replace the whole working set and rebuild the index.
    /// Новый индекс строится целиком и только потом подменяет старый.
    pub fn set_records(&mut self, records: Vec<Record>) {
        let indexed = Indexed::build(records);
        tracing::info!(
            records = indexed.records.len(),
            grams = indexed.inv.gram_count(),
            "search index rebuilt"
        );
        self.state = Some(indexed);
    }

    pub fn records(&self) -> &[Record] {
        match &self.state {
            Some(s) => &s.records,
            None => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.records().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records().is_empty()
    }

    /// Кандидаты по тексту (до фасетов). Текст короче 3 символов не фильтрует.
    pub fn candidates(&self, text: &str) -> Bitmap {
        let Some(s) = &self.state else {
            return Bitmap::new();
        };
        if text.is_empty() {
            return s.inv.all();
        }
        s.inv.intersect_all(&query_windows(text))
    }

    /// Every record matching the text and all facets, in store order.
    pub fn search(&self, q: &Query) -> Vec<&Record> {
        let Some(s) = &self.state else {
            return Vec::new();
        };
        // сначала дешёвое сужение по индексу, потом предикаты
        let cand = self.candidates(&q.text);
        let hits: Vec<&Record> = cand
            .iter()
            .filter_map(|pos| s.records.get(pos as usize))
            .filter(|rec| matches_facets(rec, &q.facets))
            .collect();
        tracing::debug!(
            text = %q.text,
            candidates = cand.cardinality(),
            hits = hits.len(),
            "search"
        );
        hits
    }
}

/// Движок за одним RwLock: запись при `set_records`, чтение при `search`.
#[derive(Clone, Default)]
pub struct SharedEngine {
    inner: Arc<RwLock<SearchEngine>>,
}

impl SharedEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index is built before taking the write lock; readers see either the
    /// old or the new index, never a partial one.
    pub fn set_records(&self, records: Vec<Record>) {
        let fresh = SearchEngine::with_records(records);
        let mut g = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        *g = fresh;
    }

    pub fn search(&self, q: &Query) -> Vec<Record> {
        let g = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        g.search(q).into_iter().cloned().collect()
    }

    pub fn state(&self) -> EngineState {
        self.inner.read().unwrap_or_else(PoisonError::into_inner).state()
    }

    pub fn len(&self) -> usize {
        self.inner.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
