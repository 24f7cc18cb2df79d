use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Canonical form of a crop identifier: trimmed and lower-case.
///
/// Every table lookup and comparison goes through this, so "Wheat",
/// " wheat " and "WHEAT" all refer to the same crop.
pub fn canonical_crop_id(crop: &str) -> String {
    crop.trim().to_lowercase()
}

/// Per-hectare economics of a single crop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EconomicsEntry {
    /// Baseline yield in tonnes per hectare
    pub base_yield_t_per_ha: f64,
    /// Market price per tonne
    pub price_per_ton: f64,
    /// Input cost per hectare
    pub cost_per_ha: f64,
}

impl EconomicsEntry {
    pub const fn new(base_yield_t_per_ha: f64, price_per_ton: f64, cost_per_ha: f64) -> Self {
        Self {
            base_yield_t_per_ha,
            price_per_ton,
            cost_per_ha,
        }
    }

    pub fn is_valid(&self) -> bool {
        [self.base_yield_t_per_ha, self.price_per_ton, self.cost_per_ha]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }
}

/// Applied to any crop missing from the table.
pub const DEFAULT_ECONOMICS: EconomicsEntry = EconomicsEntry::new(3.0, 15000.0, 50000.0);

/// Built-in crop economics (yield t/ha, price per tonne, cost per ha).
const BUILTIN_CROPS: [(&str, EconomicsEntry); 8] = [
    ("wheat", EconomicsEntry::new(3.5, 20000.0, 40000.0)),
    ("rice", EconomicsEntry::new(4.0, 18000.0, 50000.0)),
    ("maize", EconomicsEntry::new(4.5, 15000.0, 45000.0)),
    ("cotton", EconomicsEntry::new(1.2, 6000.0, 60000.0)),
    ("sugarcane", EconomicsEntry::new(70.0, 3000.0, 80000.0)),
    ("potato", EconomicsEntry::new(25.0, 15000.0, 120000.0)),
    ("tomato", EconomicsEntry::new(30.0, 25000.0, 150000.0)),
    ("onion", EconomicsEntry::new(20.0, 20000.0, 100000.0)),
];

/// Read-only lookup from crop id to its economics.
#[derive(Debug, Clone, PartialEq)]
pub struct CropEconomics {
    entries: BTreeMap<String, EconomicsEntry>,
    default: EconomicsEntry,
}

impl CropEconomics {
    pub fn new(default: EconomicsEntry) -> Self {
        Self {
            entries: BTreeMap::new(),
            default,
        }
    }

    pub fn builtin() -> Self {
        let mut table = Self::new(DEFAULT_ECONOMICS);
        for (crop, entry) in BUILTIN_CROPS {
            table.insert(crop, entry);
        }
        table
    }

    pub fn insert(&mut self, crop: &str, entry: EconomicsEntry) {
        self.entries.insert(canonical_crop_id(crop), entry);
    }

    /// Case-insensitive lookup, falling back to the default entry.
    pub fn lookup(&self, crop: &str) -> &EconomicsEntry {
        self.entries
            .get(&canonical_crop_id(crop))
            .unwrap_or(&self.default)
    }

    pub fn contains(&self, crop: &str) -> bool {
        self.entries.contains_key(&canonical_crop_id(crop))
    }

    pub fn default_entry(&self) -> &EconomicsEntry {
        &self.default
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &EconomicsEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl Default for CropEconomics {
    fn default() -> Self {
        Self::builtin()
    }
}
