//! Engineering payloads for shield generators.
//!
//! Generators are composed by the shield tester itself, so these carry the
//! blueprint's best feature values and the raw experimental deltas instead
//! of applied results.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::error::Result;
use crate::engineering::{Blueprint, EngineeringSelection, EngineeringTables, ExperimentalEffect};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlueprintSummary {
    pub symbol: String,
    /// Attribute name -> best roll at grade 5
    pub features: BTreeMap<String, f64>,
    pub name: String,
}

impl BlueprintSummary {
    pub fn from_blueprint(blueprint: &Blueprint) -> Result<Self> {
        Ok(Self {
            symbol: blueprint.fdname.clone(),
            features: blueprint.best_roll()?,
            name: blueprint.name.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentalSummary {
    pub symbol: String,
    pub name: String,
    pub features: BTreeMap<String, f64>,
}

impl From<ExperimentalEffect> for ExperimentalSummary {
    fn from(effect: ExperimentalEffect) -> Self {
        Self {
            symbol: effect.edname,
            name: effect.name,
            features: effect.features,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneratorEngineering {
    pub blueprints: Vec<BlueprintSummary>,
    pub experimental_effects: Vec<ExperimentalSummary>,
}

/// Look up every selected blueprint and experimental effect
pub fn generator_engineering(
    selection: &EngineeringSelection,
    tables: &EngineeringTables,
) -> Result<GeneratorEngineering> {
    let blueprints = selection
        .blueprints
        .iter()
        .map(|symbol| BlueprintSummary::from_blueprint(tables.blueprint(symbol)?))
        .collect::<Result<Vec<_>>>()?;
    let experimental_effects = selection
        .experimentals
        .iter()
        .map(|symbol| tables.experimental(symbol).map(ExperimentalSummary::from))
        .collect::<Result<Vec<_>>>()?;
    Ok(GeneratorEngineering {
        blueprints,
        experimental_effects,
    })
}
