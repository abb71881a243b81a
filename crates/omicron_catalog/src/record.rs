// path: crates/omicron_catalog/src/record.rs
use serde::{Deserialize, Serialize};

/// Каноническая запись каталога. Строится целиком при ingest, дальше неизменяема.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: String, // = model, уникален в сторе
    pub brand: String,
    pub model: String,
    pub operating_system: String,
    pub processor_family: String,

    // числовые атрибуты: None == отсутствует/не парсится
    pub price: Option<f64>,
    pub rating: Option<f64>,
    pub ram_gib: Option<f64>,
    pub storage_gib: Option<f64>,
    pub battery_mah: Option<f64>,
    pub rear_camera_mp: Option<f64>,
    pub screen_inches: Option<f64>,
}

impl Record {
    /// Minimal record with identity only; numeric attributes unset.
    pub fn new(brand: &str, model: &str) -> Self {
        Self {
            id: model.to_string(),
            brand: brand.to_string(),
            model: model.to_string(),
            operating_system: String::new(),
            processor_family: String::new(),
            price: None,
            rating: None,
            ram_gib: None,
            storage_gib: None,
            battery_mah: None,
            rear_camera_mp: None,
            screen_inches: None,
        }
    }

    /// Текст, попадающий в trigram-индекс.
    pub fn indexed_fields(&self) -> [&str; 4] {
        [
            self.brand.as_str(),
            self.model.as_str(),
            self.processor_family.as_str(),
            self.operating_system.as_str(),
        ]
    }
}

/// Parse the leading numeric prefix of `s` ("5000 mAh" -> 5000.0, "1e3" -> 1000.0).
/// Returns `None` when there is no digit before the first non-numeric char.
pub fn parse_leading_f64(s: &str) -> Option<f64> {
    let t = s.trim_start();
    let bytes = t.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    let mut digits = 0;
    let mut seen_dot = false;
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => digits += 1,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }
    if digits == 0 {
        return None;
    }
    // экспонента берётся, только если за ней есть цифры: "1e3", но не "5e"
    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits = bytes[exp_end..].iter().take_while(|b| b.is_ascii_digit()).count();
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }
    t[..end].parse().ok()
}
