// path: src/query.rs
use anyhow::{bail, Result};
use omicron_catalog::normalizer::eq_ignore_case;
use omicron_catalog::record::parse_leading_f64;
use serde::Serialize;
use std::str::FromStr;

/// Sentinel facet value meaning "no constraint".
pub const ANY: &str = "all";

/// Значение фасета: без ограничения или конкретный порог/значение.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub enum Constraint<T> {
    #[default]
    Any,
    Is(T),
}

impl<T> Constraint<T> {
    pub fn is_any(&self) -> bool {
        matches!(self, Constraint::Any)
    }

    pub fn get(&self) -> Option<&T> {
        match self {
            Constraint::Any => None,
            Constraint::Is(v) => Some(v),
        }
    }

    fn from_opt(v: Option<T>) -> Self {
        v.map_or(Constraint::Any, Constraint::Is)
    }
}

/// Ценовой tier по исходной цене (до конвертации валюты).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PriceTier {
    Budget,
    Mid,
    Premium,
}

impl PriceTier {
    pub const MID_FLOOR: f64 = 15_000.0;
    pub const PREMIUM_FLOOR: f64 = 30_000.0;

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "budget" => Some(Self::Budget),
            "mid" => Some(Self::Mid),
            "premium" => Some(Self::Premium),
            _ => None,
        }
    }

    pub fn contains(self, price: f64) -> bool {
        match self {
            Self::Budget => price < Self::MID_FLOOR,
            Self::Mid => (Self::MID_FLOOR..Self::PREMIUM_FLOOR).contains(&price),
            Self::Premium => price >= Self::PREMIUM_FLOOR,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacetName {
    Brand,
    Os,
    Price,
    Ram,
    Storage,
    Battery,
    Camera,
    ScreenSize,
    Processor,
}

impl FromStr for FacetName {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(match s.to_lowercase().as_str() {
            "brand" => Self::Brand,
            "os" | "operatingsystem" => Self::Os,
            "price" => Self::Price,
            "ram" => Self::Ram,
            "storage" => Self::Storage,
            "battery" => Self::Battery,
            "camera" => Self::Camera,
            "screen" | "screensize" => Self::ScreenSize,
            "processor" | "processorfamily" => Self::Processor,
            other => bail!("unknown facet: {other}"),
        })
    }
}

/// Набор фасетов запроса. Default == без ограничений.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Facets {
    pub brand: Constraint<String>,
    pub os: Constraint<String>,
    pub price: Constraint<PriceTier>,
    pub ram: Constraint<f64>,
    pub storage: Constraint<f64>,
    pub battery: Constraint<f64>,
    pub camera: Constraint<f64>,
    pub screen_size: Constraint<f64>,
    pub processor: Constraint<String>,
}

impl Facets {
    pub fn none() -> Self {
        Self::default()
    }

    /// Set a facet from its raw UI value. `"all"`, empty and unparseable values
    /// all mean "no constraint" (fail-open).
    pub fn set(&mut self, name: FacetName, raw: &str) {
        let raw = raw.trim();
        let value = (!raw.is_empty() && !eq_ignore_case(raw, ANY)).then_some(raw);
        let text = || Constraint::from_opt(value.map(str::to_string));
        let threshold = || Constraint::from_opt(value.and_then(parse_leading_f64));

        match name {
            FacetName::Brand => self.brand = text(),
            FacetName::Os => self.os = text(),
            FacetName::Processor => self.processor = text(),
            FacetName::Price => {
                self.price = Constraint::from_opt(value.and_then(PriceTier::parse))
            }
            FacetName::Ram => self.ram = threshold(),
            FacetName::Storage => self.storage = threshold(),
            FacetName::Battery => self.battery = threshold(),
            FacetName::Camera => self.camera = threshold(),
            FacetName::ScreenSize => self.screen_size = threshold(),
        }

        if value.is_some() && self.is_unset(name) {
            tracing::debug!(facet = ?name, value = raw, "unrecognized facet value ignored");
        }
    }

    fn is_unset(&self, name: FacetName) -> bool {
        match name {
            FacetName::Brand => self.brand.is_any(),
            FacetName::Os => self.os.is_any(),
            FacetName::Processor => self.processor.is_any(),
            FacetName::Price => self.price.is_any(),
            FacetName::Ram => self.ram.is_any(),
            FacetName::Storage => self.storage.is_any(),
            FacetName::Battery => self.battery.is_any(),
            FacetName::Camera => self.camera.is_any(),
            FacetName::ScreenSize => self.screen_size.is_any(),
        }
    }

    /// Нет ни одного активного фасета.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Запрос: текст + фасеты. Живёт один вызов `search`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Query {
    pub text: String,
    pub facets: Facets,
}

impl Query {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            facets: Facets::none(),
        }
    }

    /// Builder-style facet setter; fails only on an unknown facet name.
    pub fn with_facet(mut self, name: &str, raw: &str) -> Result<Self> {
        self.facets.set(name.parse()?, raw);
        Ok(self)
    }

    /// Есть ли хоть какое-то ограничение (текст или фасет).
    pub fn is_constrained(&self) -> bool {
        !self.text.is_empty() || !self.facets.is_empty()
    }
}

/// Parse a one-line query: `name:value` tokens set facets, the rest is text.
///
/// `galaxy s21 ram:8 price:budget` -> text "galaxy s21", ram >= 8, budget tier.
/// Токен с неизвестным именем фасета (`5:30`) остаётся текстом.
pub fn parse_query(s: &str) -> Query {
    let mut query = Query::default();
    let mut words: Vec<&str> = Vec::new();

    for tok in s.split_whitespace() {
        let facet = tok
            .split_once(':')
            .and_then(|(name, value)| Some((name.parse::<FacetName>().ok()?, value)));
        match facet {
            Some((name, value)) => query.facets.set(name, value),
            None => words.push(tok),
        }
    }
    query.text = words.join(" ");
    query
}
