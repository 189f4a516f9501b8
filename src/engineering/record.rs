//! Equipment attribute records at each stage of engineering

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::attributes::Attribute;
use crate::core::error::{DataError, Result};

/// Numeric attributes of one piece of equipment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeRecord {
    /// Item symbol, e.g. `hpt_shieldbooster_size0_class5`
    pub symbol: String,
    pub values: BTreeMap<Attribute, f64>,
}

impl AttributeRecord {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            values: BTreeMap::new(),
        }
    }

    /// Builder-style setter
    pub fn with(mut self, attribute: Attribute, value: f64) -> Self {
        self.values.insert(attribute, value);
        self
    }

    pub fn get(&self, attribute: Attribute) -> Option<f64> {
        self.values.get(&attribute).copied()
    }

    /// Value of an attribute the caller is about to modify
    pub fn require(&self, attribute: Attribute) -> Result<f64> {
        self.get(attribute)
            .ok_or_else(|| DataError::malformed(&self.symbol, attribute.as_str()))
    }

    pub fn set(&mut self, attribute: Attribute, value: f64) {
        self.values.insert(attribute, value);
    }
}

/// Display name and symbol of an applied blueprint or experimental effect
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modification {
    pub name: String,
    pub symbol: String,
}

/// A baseline after its blueprint, waiting for an experimental effect
#[derive(Debug, Clone, PartialEq)]
pub struct EngineeredRecord {
    pub record: AttributeRecord,
    pub blueprint: Modification,
}

/// A baseline after exactly one blueprint and one experimental effect
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedVariant {
    pub record: AttributeRecord,
    pub blueprint: Modification,
    pub experimental: Modification,
}

impl DerivedVariant {
    /// Identity of the variant within one expansion
    pub fn key(&self) -> (&str, &str) {
        (&self.blueprint.symbol, &self.experimental.symbol)
    }
}
