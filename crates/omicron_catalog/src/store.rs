use std::collections::{BTreeSet, HashSet};

use crate::record::Record;

/// Дедуплицированная коллекция записей. Создаётся целиком, не патчится.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep the first record seen for every `id`, preserving input order.
    pub fn from_records(records: impl IntoIterator<Item = Record>) -> Self {
        let mut seen: HashSet<String> = HashSet::new();
        let records = records
            .into_iter()
            .filter(|r| seen.insert(r.id.clone()))
            .collect();
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    /// Уникальные бренды, отсортированные (для списка фасетов).
    pub fn brands(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|r| r.brand.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_occurrence_wins() {
        let mut dup = Record::new("apple", "iPhone 13");
        dup.price = Some(1.0);
        let store = RecordStore::from_records(vec![
            Record::new("apple", "iPhone 13"),
            Record::new("samsung", "Galaxy S21"),
            dup,
        ]);
        assert_eq!(store.len(), 2);
        assert_eq!(store.records()[0].price, None);
        assert_eq!(store.records()[1].id, "Galaxy S21");
    }

    #[test]
    fn brands_sorted_unique() {
        let store = RecordStore::from_records(vec![
            Record::new("xiaomi", "Redmi 12"),
            Record::new("apple", "iPhone 13"),
            Record::new("xiaomi", "Poco F5"),
        ]);
        assert_eq!(store.brands(), vec!["apple".to_string(), "xiaomi".to_string()]);
    }
}
