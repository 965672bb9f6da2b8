//! CSV-backed car and charger catalogs.
//!
//! # CSV formats
//!
//! `cars.csv` — one row per vehicle variant:
//!
//! ```csv
//! make,model,variant,capacity,max_range,exp_range,ac_charge_rate,dc_charge_rate
//! Tata,Nexon EV,Max,40.5,437,330,7.2,30
//! ```
//!
//! `chargers.csv` — one row per charging-station class:
//!
//! ```csv
//! type,charge_rate
//! AC,3.3
//! DC,30
//! ```
//!
//! # Lookup
//!
//! Each catalog exposes `find(query)`: a case-insensitive substring match
//! against the record's search text (cars: `"make model variant"`; chargers:
//! `"kind rate"`).  Exactly one hit resolves; zero hits is
//! [`DataError::NotFound`], more than one is [`DataError::Ambiguous`] —
//! ambiguity is an error rather than a silent first-match because the caller
//! is picking the physical car the whole simulation depends on.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use ev_core::{Car, Charger, ChargerKind};

use crate::{DataError, DataResult};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct CarRecord {
    make:           String,
    model:          String,
    variant:        String,
    capacity:       f64,
    max_range:      f64,
    exp_range:      f64,
    ac_charge_rate: f64,
    dc_charge_rate: f64,
}

#[derive(Deserialize)]
struct ChargerRecord {
    #[serde(rename = "type")]
    kind:        String,
    charge_rate: f64,
}

// ── Shared lookup ─────────────────────────────────────────────────────────────

/// Resolve `query` to exactly one record, matching case-insensitively
/// against `search_text` per record.
fn find_one<'a, T>(
    records: &'a [T],
    kind: &'static str,
    query: &str,
    search_text: impl Fn(&T) -> String,
) -> DataResult<&'a T> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Err(DataError::NotFound { kind, query: query.to_string() });
    }

    let hits: Vec<&T> = records
        .iter()
        .filter(|r| search_text(r).to_lowercase().contains(&needle))
        .collect();

    match hits.len() {
        0 => Err(DataError::NotFound { kind, query: query.to_string() }),
        1 => Ok(hits[0]),
        count => Err(DataError::Ambiguous {
            kind,
            query: query.to_string(),
            count,
        }),
    }
}

// ── CarCatalog ────────────────────────────────────────────────────────────────

/// All known vehicle variants, loaded once from `cars.csv`.
pub struct CarCatalog {
    cars: Vec<Car>,
}

impl CarCatalog {
    /// Load the catalog from a CSV file on disk.
    pub fn load_csv(path: &Path) -> DataResult<Self> {
        let file = std::fs::File::open(path).map_err(DataError::Io)?;
        Self::from_reader(file)
    }

    /// Like [`CarCatalog::load_csv`] but accepts any `Read` source.
    pub fn from_reader<R: Read>(reader: R) -> DataResult<Self> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut cars = Vec::new();

        for result in csv_reader.deserialize::<CarRecord>() {
            let row = result.map_err(|e| DataError::Parse(e.to_string()))?;
            cars.push(Car {
                make:              row.make,
                model:             row.model,
                variant:           row.variant,
                capacity_kwh:      row.capacity,
                max_range_km:      row.max_range,
                exp_range_km:      row.exp_range,
                ac_charge_rate_kw: row.ac_charge_rate,
                dc_charge_rate_kw: row.dc_charge_rate,
            });
        }

        Ok(Self { cars })
    }

    /// Case-insensitive substring lookup against `"make model variant"`.
    pub fn find(&self, query: &str) -> DataResult<&Car> {
        find_one(&self.cars, "car", query, |c| {
            format!("{} {} {}", c.make, c.model, c.variant)
        })
    }

    pub fn len(&self) -> usize {
        self.cars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }
}

// ── ChargerCatalog ────────────────────────────────────────────────────────────

/// All known charging-station classes, loaded once from `chargers.csv`.
pub struct ChargerCatalog {
    chargers: Vec<Charger>,
}

impl ChargerCatalog {
    /// Load the catalog from a CSV file on disk.
    pub fn load_csv(path: &Path) -> DataResult<Self> {
        let file = std::fs::File::open(path).map_err(DataError::Io)?;
        Self::from_reader(file)
    }

    /// Like [`ChargerCatalog::load_csv`] but accepts any `Read` source.
    pub fn from_reader<R: Read>(reader: R) -> DataResult<Self> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut chargers = Vec::new();

        for result in csv_reader.deserialize::<ChargerRecord>() {
            let row = result.map_err(|e| DataError::Parse(e.to_string()))?;
            let kind = ChargerKind::parse(&row.kind).ok_or_else(|| {
                DataError::Parse(format!(
                    "invalid charger type {:?}: expected \"AC\" or \"DC\"",
                    row.kind
                ))
            })?;
            chargers.push(Charger::new(kind, row.charge_rate));
        }

        Ok(Self { chargers })
    }

    /// Case-insensitive substring lookup against `"kind rate"`, e.g.
    /// `"dc 30"` or `"ac 3.3"`.
    pub fn find(&self, query: &str) -> DataResult<&Charger> {
        find_one(&self.chargers, "charger", query, |c| {
            format!("{} {}", c.kind, c.charge_rate_kw)
        })
    }

    pub fn len(&self) -> usize {
        self.chargers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chargers.is_empty()
    }
}
