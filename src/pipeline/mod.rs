//! End-to-end data file generation
//!
//! Reference data -> ship loadouts, shield generator groups and engineered
//! booster variants -> one [`DataFile`]. Everything is computed before the
//! file is written, so any error leaves no output behind.

pub mod output;

use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

use crate::core::config::PipelineConfig;
use crate::core::error::Result;
use crate::engineering::expand;
use crate::export::{project, BoosterVariantExport};
use crate::shields::{aggregate, baseline_booster, generator_engineering, ShieldGeneratorData};
use crate::ships::{ShipExport, ShipLoadout};
use crate::sources::ReferenceData;

pub use output::write_data_file;

/// The data file consumed by the shield tester
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DataFile {
    pub ships: Vec<ShipExport>,
    pub shield_booster_variants: Vec<BoosterVariantExport>,
    pub shield_generators: ShieldGeneratorData,
}

/// Build the data file from already-loaded reference data
pub fn build(config: &PipelineConfig, data: &ReferenceData) -> Result<DataFile> {
    let ships = data
        .hulls
        .iter()
        .map(|(file, hull)| {
            tracing::debug!(path = %file.display(), ship = %hull.properties.name, "Resolving ship");
            ShipLoadout::from_hull(hull, &data.standard_modules, &data.shipyard)
                .map(|ship| ship.to_export())
        })
        .collect::<Result<Vec<_>>>()?;
    tracing::info!(count = ships.len(), "Built ship loadouts");

    let modules: BTreeMap<_, _> = data
        .shield_generators
        .iter()
        .map(|(&weave, records)| (weave, aggregate(records, weave)))
        .collect();
    let shield_generators = ShieldGeneratorData {
        modules,
        engineering: generator_engineering(
            &config.shield_generator.engineering,
            &data.engineering,
        )?,
    };
    tracing::info!(
        generators = shield_generators.modules.values().map(Vec::len).sum::<usize>(),
        blueprints = shield_generators.engineering.blueprints.len(),
        experimentals = shield_generators.engineering.experimental_effects.len(),
        "Built shield generator data"
    );

    let baseline = baseline_booster(&data.shield_boosters, &config.shield_booster.rating)?;
    let variants = expand(&baseline, &config.shield_booster.engineering, &data.engineering)?;
    let shield_booster_variants: Vec<BoosterVariantExport> =
        variants.iter().map(|variant| project(variant, &baseline)).collect();
    tracing::info!(
        baseline = %baseline.symbol,
        count = shield_booster_variants.len(),
        "Built shield booster variants"
    );

    Ok(DataFile {
        ships,
        shield_booster_variants,
        shield_generators,
    })
}

/// Load reference data below `root` and build the data file
pub fn run(config: &PipelineConfig, root: &Path) -> Result<DataFile> {
    let data = ReferenceData::load(&config.paths, root)?;
    build(config, &data)
}
