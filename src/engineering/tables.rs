//! Engineering modifier tables: blueprints, experimental effect descriptors
//! and experimental modifier actions, keyed by symbol.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::error::{DataError, Result};

/// The only grade the engine reads
pub const MAX_GRADE: &str = "5";

/// Roll range of one feature at one grade: `[worst, best]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureRoll(pub f64, pub f64);

impl FeatureRoll {
    pub fn best(&self) -> f64 {
        self.1
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Grade {
    #[serde(default)]
    pub features: BTreeMap<String, FeatureRoll>,
}

/// Engineering blueprint as found in `blueprints.json`
#[derive(Debug, Clone, Deserialize)]
pub struct Blueprint {
    /// Display name, e.g. "Heavy duty"
    pub name: String,
    /// Journal symbol, e.g. `ShieldBooster_HeavyDuty`
    pub fdname: String,
    #[serde(default)]
    pub grades: BTreeMap<String, Grade>,
}

impl Blueprint {
    /// Best roll of every grade 5 feature
    pub fn best_roll(&self) -> Result<BTreeMap<String, f64>> {
        let grade = self.grades.get(MAX_GRADE).ok_or_else(|| {
            DataError::missing("blueprint grades", format!("{} grade {}", self.fdname, MAX_GRADE))
        })?;
        Ok(grade
            .features
            .iter()
            .map(|(name, roll)| (name.clone(), roll.best()))
            .collect())
    }
}

/// Experimental effect descriptor as found in `specials.json`
#[derive(Debug, Clone, Deserialize)]
pub struct SpecialDescriptor {
    pub name: String,
    pub edname: String,
}

/// An experimental effect joined with its modifier actions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperimentalEffect {
    /// Key in the specials table, e.g. `special_shieldbooster_chunky`
    pub symbol: String,
    pub edname: String,
    pub name: String,
    /// Attribute name -> delta, already the best effect
    pub features: BTreeMap<String, f64>,
}

/// Read-only lookup over the three engineering reference tables
#[derive(Debug, Clone, Default)]
pub struct EngineeringTables {
    blueprints: AHashMap<String, Blueprint>,
    specials: AHashMap<String, SpecialDescriptor>,
    actions: AHashMap<String, serde_json::Value>,
}

impl EngineeringTables {
    pub fn new(
        blueprints: AHashMap<String, Blueprint>,
        specials: AHashMap<String, SpecialDescriptor>,
        actions: AHashMap<String, serde_json::Value>,
    ) -> Self {
        Self {
            blueprints,
            specials,
            actions,
        }
    }

    pub fn blueprint(&self, symbol: &str) -> Result<&Blueprint> {
        self.blueprints
            .get(symbol)
            .ok_or_else(|| DataError::missing("blueprints", symbol))
    }

    pub fn experimental(&self, symbol: &str) -> Result<ExperimentalEffect> {
        let descriptor = self
            .specials
            .get(symbol)
            .ok_or_else(|| DataError::missing("specials", symbol))?;
        let actions = self
            .actions
            .get(symbol)
            .ok_or_else(|| DataError::missing("modifier actions", symbol))?
            .as_object()
            .ok_or_else(|| DataError::malformed(symbol, "modifier actions"))?;

        let mut features = BTreeMap::new();
        for (name, value) in actions {
            let delta = value
                .as_f64()
                .ok_or_else(|| DataError::malformed(symbol, name.as_str()))?;
            features.insert(name.clone(), delta);
        }

        Ok(ExperimentalEffect {
            symbol: symbol.to_string(),
            edname: descriptor.edname.clone(),
            name: descriptor.name.clone(),
            features,
        })
    }

    pub fn blueprint_count(&self) -> usize {
        self.blueprints.len()
    }

    pub fn special_count(&self) -> usize {
        self.specials.len()
    }
}
