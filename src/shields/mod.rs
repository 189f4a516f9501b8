//! Shield generators and shield boosters

pub mod booster;
pub mod engineering;
pub mod generator;

use serde::Serialize;
use std::collections::BTreeMap;

pub use booster::baseline_booster;
pub use engineering::{
    generator_engineering, BlueprintSummary, ExperimentalSummary, GeneratorEngineering,
};
pub use generator::{aggregate, ShieldGeneratorRecord, WeaveKind};

/// Shield generator section of the data file
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ShieldGeneratorData {
    pub modules: BTreeMap<WeaveKind, Vec<ShieldGeneratorRecord>>,
    pub engineering: GeneratorEngineering,
}
