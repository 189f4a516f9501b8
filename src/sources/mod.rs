//! Reference-table loading
//!
//! Everything that touches the filesystem on the way in lives here; the
//! engine and export code only see the parsed tables.

pub mod loader;

use ahash::AHashMap;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::core::config::SourcePaths;
use crate::core::error::Result;
use crate::engineering::{Blueprint, EngineeringTables, SpecialDescriptor};
use crate::shields::{ShieldGeneratorRecord, WeaveKind};
use crate::ships::{CatalogEntry, ShipHull, StandardModuleKind, StandardModules, Shipyard};

pub use loader::{json_files, read_json, read_text, read_wrapped, unwrap_single};

/// Every reference table one run needs, parsed
#[derive(Debug, Clone)]
pub struct ReferenceData {
    pub standard_modules: StandardModules,
    pub shipyard: Shipyard,
    /// Hull definitions with the file each came from
    pub hulls: Vec<(PathBuf, ShipHull)>,
    pub engineering: EngineeringTables,
    pub shield_generators: BTreeMap<WeaveKind, Vec<ShieldGeneratorRecord>>,
    /// Raw booster catalog; the baseline is picked by rating later
    pub shield_boosters: Vec<serde_json::Value>,
}

impl ReferenceData {
    /// Load all tables named in `paths`, resolved against `root`
    pub fn load(paths: &SourcePaths, root: &Path) -> Result<Self> {
        let mut standard_modules = StandardModules::new();
        let modules_dir = root.join(&paths.standard_modules);
        for kind in StandardModuleKind::ALL {
            let file = modules_dir.join(paths.standard_module_files.file_for(kind));
            let entries: Vec<CatalogEntry> = read_wrapped(&file)?;
            standard_modules.insert(kind, entries);
        }

        let shipyard = Shipyard::from_csv(&read_text(&root.join(&paths.shipyard))?)?;

        let hulls = json_files(&root.join(&paths.ships))?
            .into_iter()
            .map(|file| -> Result<_> {
                let hull: ShipHull = read_wrapped(&file)?;
                Ok((file, hull))
            })
            .collect::<Result<Vec<_>>>()?;

        let blueprints: AHashMap<String, Blueprint> = read_json(&root.join(&paths.blueprints))?;
        let specials: AHashMap<String, SpecialDescriptor> =
            read_json(&root.join(&paths.specials))?;
        let actions: AHashMap<String, serde_json::Value> =
            read_json(&root.join(&paths.modifier_actions))?;
        let engineering = EngineeringTables::new(blueprints, specials, actions);

        let mut shield_generators = BTreeMap::new();
        for weave in WeaveKind::ALL {
            let file = match weave {
                WeaveKind::BiWeave => &paths.shield_generators_biweave,
                WeaveKind::Prismatic => &paths.shield_generators_prismatic,
                WeaveKind::Normal => &paths.shield_generators_normal,
            };
            let records: Vec<ShieldGeneratorRecord> = read_wrapped(&root.join(file))?;
            shield_generators.insert(weave, records);
        }

        let shield_boosters: Vec<serde_json::Value> =
            read_wrapped(&root.join(&paths.shield_boosters))?;

        tracing::info!(
            hulls = hulls.len(),
            ships_in_shipyard = shipyard.len(),
            blueprints = engineering.blueprint_count(),
            specials = engineering.special_count(),
            boosters = shield_boosters.len(),
            "Loaded reference data"
        );

        Ok(Self {
            standard_modules,
            shipyard,
            hulls,
            engineering,
            shield_generators,
            shield_boosters,
        })
    }
}
