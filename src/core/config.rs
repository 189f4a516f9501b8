//! Pipeline configuration
//!
//! Everything the run needs to know that is not in the reference tables:
//! where each table lives below the data root, which baseline booster to
//! engineer, and which blueprints / experimental effects apply to each
//! equipment kind. Defaults reproduce the coriolis-data + FDevIDs layout.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::core::error::{DataError, Result};
use crate::engineering::EngineeringSelection;
use crate::ships::StandardModuleKind;

/// Locations of every reference table, relative to the data root
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcePaths {
    /// Directory holding one JSON file per ship hull (searched recursively)
    pub ships: PathBuf,
    /// Directory holding the standard-module catalogs
    pub standard_modules: PathBuf,
    /// File names of the standard-module catalogs inside `standard_modules`
    pub standard_module_files: StandardModuleFiles,
    /// Shipyard CSV mapping ship display names to symbols
    pub shipyard: PathBuf,
    pub shield_generators_normal: PathBuf,
    pub shield_generators_biweave: PathBuf,
    pub shield_generators_prismatic: PathBuf,
    pub shield_boosters: PathBuf,
    pub blueprints: PathBuf,
    /// Experimental effect descriptors (name, edname)
    pub specials: PathBuf,
    /// Experimental effect deltas
    pub modifier_actions: PathBuf,
}

impl Default for SourcePaths {
    fn default() -> Self {
        let coriolis = PathBuf::from("coriolis-data");
        let modules = coriolis.join("modules");
        let modifications = coriolis.join("modifications");
        Self {
            ships: coriolis.join("ships"),
            standard_modules: modules.join("standard"),
            standard_module_files: StandardModuleFiles::default(),
            shipyard: PathBuf::from("FDevIDs").join("shipyard.csv"),
            shield_generators_normal: modules.join("internal").join("shield_generator.json"),
            // upstream file name is misspelt
            shield_generators_prismatic: modules
                .join("internal")
                .join("pristmatic_shield_generator.json"),
            shield_generators_biweave: modules
                .join("internal")
                .join("bi_weave_shield_generator.json"),
            shield_boosters: modules.join("hardpoints").join("shield_booster.json"),
            blueprints: modifications.join("blueprints.json"),
            specials: modifications.join("specials.json"),
            modifier_actions: modifications.join("modifierActions.json"),
        }
    }
}

/// Catalog file name per standard module type
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StandardModuleFiles {
    pub power_plant: String,
    pub thrusters: String,
    pub frame_shift_drive: String,
    pub life_support: String,
    pub power_distributor: String,
    pub sensors: String,
    pub fuel_tank: String,
}

impl Default for StandardModuleFiles {
    fn default() -> Self {
        Self {
            power_plant: "power_plant.json".to_string(),
            thrusters: "thrusters.json".to_string(),
            frame_shift_drive: "frame_shift_drive.json".to_string(),
            life_support: "life_support.json".to_string(),
            power_distributor: "power_distributor.json".to_string(),
            sensors: "sensors.json".to_string(),
            fuel_tank: "fuel_tank.json".to_string(),
        }
    }
}

impl StandardModuleFiles {
    pub fn file_for(&self, kind: StandardModuleKind) -> &str {
        match kind {
            StandardModuleKind::PowerPlant => &self.power_plant,
            StandardModuleKind::Thrusters => &self.thrusters,
            StandardModuleKind::FrameShiftDrive => &self.frame_shift_drive,
            StandardModuleKind::LifeSupport => &self.life_support,
            StandardModuleKind::PowerDistributor => &self.power_distributor,
            StandardModuleKind::Sensors => &self.sensors,
            StandardModuleKind::FuelTank => &self.fuel_tank,
        }
    }
}

/// Which booster is the baseline and how it gets engineered
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BoosterConfig {
    /// Rating of the baseline booster; the first catalog entry with it wins
    pub rating: String,
    pub engineering: EngineeringSelection,
}

impl Default for BoosterConfig {
    fn default() -> Self {
        Self {
            rating: "A".to_string(),
            engineering: EngineeringSelection {
                blueprints: symbols(&[
                    "ShieldBooster_HeavyDuty",
                    "ShieldBooster_Kinetic",
                    "ShieldBooster_Thermic",
                    "ShieldBooster_Explosive",
                    "ShieldBooster_Resistive",
                ]),
                experimentals: symbols(&[
                    "special_shieldbooster_thermic",
                    "special_shieldbooster_kinetic",
                    "special_shieldbooster_explosive",
                    "special_shieldbooster_chunky",
                ]),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub engineering: EngineeringSelection,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            engineering: EngineeringSelection {
                blueprints: symbols(&[
                    "ShieldGenerator_Kinetic",
                    "ShieldGenerator_Reinforced",
                    "ShieldGenerator_Thermic",
                ]),
                experimentals: symbols(&[
                    "special_shield_regenerative",
                    "special_shield_resistive",
                    "special_shield_health",
                    "special_shield_thermic",
                    "special_shield_kinetic",
                ]),
            },
        }
    }
}

/// Complete configuration for one run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub paths: SourcePaths,
    pub shield_booster: BoosterConfig,
    pub shield_generator: GeneratorConfig,
}

impl PipelineConfig {
    /// Load a config from a TOML file; omitted sections keep their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: PipelineConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.shield_booster.rating.trim().is_empty() {
            return Err(DataError::Config(
                "shield_booster.rating must not be empty".into(),
            ));
        }
        check_selection("shield_booster", &self.shield_booster.engineering)?;
        check_selection("shield_generator", &self.shield_generator.engineering)?;
        Ok(())
    }
}

fn check_selection(section: &str, selection: &EngineeringSelection) -> Result<()> {
    if selection.blueprints.is_empty() {
        return Err(DataError::Config(format!(
            "{section}.engineering.blueprints must not be empty"
        )));
    }
    if selection.experimentals.is_empty() {
        return Err(DataError::Config(format!(
            "{section}.engineering.experimentals must not be empty"
        )));
    }
    Ok(())
}

fn symbols(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|s| s.to_string()).collect()
}
