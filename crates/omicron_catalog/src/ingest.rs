// path: crates/omicron_catalog/src/ingest.rs
//! Ingest сырых датасетов (CSV / JSONL) в канонические [`Record`].
//!
//! Источники разнородные: одни используют `brand_name`/`model`, другие
//! `Brand`/`Model`. Все варианты сворачиваются здесь, движок их не видит.

use anyhow::{Context, Result};
use rayon::prelude::*;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::record::{parse_leading_f64, Record};
use crate::store::RecordStore;

/// Одна строка источника: header -> значение.
pub type RawRow = BTreeMap<String, String>;

/// (alias, canonical): alias копируется в canonical, если тот пуст.
const FIELD_ALIASES: &[(&str, &str)] = &[
    ("Brand", "brand_name"),
    ("Model", "model"),
    ("Price", "price"),
    ("Rating", "rating"),
    ("RAM", "ram_capacity"),
    ("Storage", "internal_memory"),
    ("Display", "screen_size"),
    ("Camera", "primary_camera_rear"),
    ("Battery", "battery_capacity"),
    ("OS", "os"),
];

/// Fold alias headers into their canonical names.
pub fn normalize_row(row: &mut RawRow) {
    for (alias, canonical) in FIELD_ALIASES {
        let canonical_empty = row.get(*canonical).map_or(true, |v| v.is_empty());
        if !canonical_empty {
            continue;
        }
        if let Some(v) = row.get(*alias).filter(|v| !v.is_empty()).cloned() {
            row.insert(canonical.to_string(), v);
        }
    }
}

/// Build a canonical record. Rows without brand or model are dropped.
pub fn record_from_row(mut row: RawRow) -> Option<Record> {
    normalize_row(&mut row);
    let get = |k: &str| field(&row, k).to_string();
    let num = |k: &str| parse_leading_f64(field(&row, k));

    let brand = field(&row, "brand_name");
    let model = field(&row, "model");
    if brand.is_empty() || model.is_empty() {
        return None;
    }

    Some(Record {
        id: model.to_string(),
        brand: brand.to_string(),
        model: model.to_string(),
        operating_system: get("os"),
        processor_family: get("processor_brand"),
        price: num("price"),
        rating: num("rating"),
        ram_gib: num("ram_capacity"),
        storage_gib: num("internal_memory"),
        battery_mah: num("battery_capacity"),
        rear_camera_mp: num("primary_camera_rear"),
        screen_inches: num("screen_size"),
    })
}

fn field<'a>(row: &'a RawRow, key: &str) -> &'a str {
    row.get(key).map(|s| s.trim()).unwrap_or("")
}

/// Простой CSV: без кавычек-экранирования, `"` просто выкидываются.
pub fn parse_csv(text: &str) -> Vec<RawRow> {
    let mut lines = text.lines();
    let Some(header_line) = lines.next() else {
        return Vec::new();
    };
    let headers: Vec<String> = split_csv_line(header_line);

    lines
        .filter(|l| !l.trim().is_empty())
        .map(|line| {
            let values = split_csv_line(line);
            headers
                .iter()
                .enumerate()
                .map(|(i, h)| (h.clone(), values.get(i).cloned().unwrap_or_default()))
                .collect()
        })
        .collect()
}

fn split_csv_line(line: &str) -> Vec<String> {
    line.split(',')
        .map(|v| v.trim().replace('"', ""))
        .collect()
}

/// JSONL: один объект на строку; строки и числа берём как текст.
pub fn parse_jsonl(text: &str) -> Result<Vec<RawRow>> {
    let mut out = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let v: Value = serde_json::from_str(line)
            .with_context(|| format!("jsonl line {}", lineno + 1))?;
        let Value::Object(map) = v else {
            anyhow::bail!("jsonl line {}: expected object", lineno + 1);
        };
        let row = map
            .into_iter()
            .filter_map(|(k, v)| match v {
                Value::String(s) => Some((k, s)),
                Value::Number(n) => Some((k, n.to_string())),
                Value::Bool(b) => Some((k, b.to_string())),
                _ => None,
            })
            .collect();
        out.push(row);
    }
    Ok(out)
}

/// Load one dataset file; `.jsonl`/`.json` -> JSONL, everything else -> CSV.
pub fn load_dataset(path: &Path) -> Result<Vec<Record>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read dataset {}", path.display()))?;
    let rows = match path.extension().and_then(|e| e.to_str()) {
        Some("jsonl") | Some("json") => parse_jsonl(&text)?,
        _ => parse_csv(&text),
    };
    let total = rows.len();
    let records: Vec<Record> = rows.into_iter().filter_map(record_from_row).collect();
    tracing::debug!(
        path = %path.display(),
        rows = total,
        records = records.len(),
        "dataset parsed"
    );
    Ok(records)
}

/// Загрузить несколько датасетов параллельно и собрать дедуплицированный стор.
/// Упавший датасет логируется и пропускается, остальные грузятся.
pub fn load_datasets(paths: &[PathBuf]) -> RecordStore {
    let parts: Vec<Vec<Record>> = paths
        .par_iter()
        .map(|p| match load_dataset(p) {
            Ok(recs) => recs,
            Err(err) => {
                tracing::warn!(path = %p.display(), error = ?err, "failed to load dataset");
                Vec::new()
            }
        })
        .collect(); // порядок датасетов сохраняется

    let store = RecordStore::from_records(parts.into_iter().flatten());
    tracing::info!(datasets = paths.len(), records = store.len(), "catalog loaded");
    store
}
