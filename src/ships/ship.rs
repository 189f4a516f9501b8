//! Stock ship loadouts built from hull definitions

use serde::{Deserialize, Serialize};
use serde_json::Number;

use super::catalog::{StandardModuleKind, StandardModules};
use super::shipyard::Shipyard;
use crate::core::error::{DataError, Result};
use crate::export::{LoadoutEvent, ModuleSlot};

/// Fitted to every ship and not part of the hull defaults
const PLANETARY_APPROACH_SUITE: &str = "int_planetapproachsuite";
const CARGO_HATCH: &str = "modularcargobaydoor";

/// Hull definition as found in the ships directory (wrapper key removed)
#[derive(Debug, Clone, Deserialize)]
pub struct ShipHull {
    pub properties: HullProperties,
    pub slots: HullSlots,
    pub defaults: HullDefaults,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HullProperties {
    pub name: String,
    /// Kept as the source wrote it, integer or float
    pub base_shield_strength: Number,
    pub hull_mass: Number,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HullSlots {
    /// Hardpoint sizes; size 0 is a utility mount
    #[serde(default)]
    pub hardpoints: Vec<u8>,
    #[serde(default)]
    pub internal: Vec<InternalSlot>,
}

/// Internal slots are either a bare size or a restricted slot object
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum InternalSlot {
    Size(u8),
    Restricted {
        class: u8,
        #[serde(default)]
        name: Option<String>,
    },
}

impl InternalSlot {
    pub fn size(&self) -> u8 {
        match self {
            InternalSlot::Size(size) => *size,
            InternalSlot::Restricted { class, .. } => *class,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct HullDefaults {
    /// Class/rating codes, one per [`StandardModuleKind`] in order
    pub standard: Vec<String>,
}

/// A ship with its default standard modules resolved to symbols
#[derive(Debug, Clone, PartialEq)]
pub struct ShipLoadout {
    pub name: String,
    pub symbol: String,
    pub armour: String,
    /// Resolved symbols in [`StandardModuleKind::ALL`] order
    pub standard: Vec<(StandardModuleKind, String)>,
    pub utility_slots: u32,
    pub highest_internal: u8,
    pub base_shield_strength: Number,
    pub hull_mass: Number,
}

/// Ship entry as written to the data file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipExport {
    pub ship: String,
    pub symbol: String,
    pub loadout_template: LoadoutEvent,
    #[serde(rename = "baseShieldStrength")]
    pub base_shield_strength: Number,
    #[serde(rename = "hullMass")]
    pub hull_mass: Number,
    pub utility_slots: u32,
    pub highest_internal: u8,
}

impl ShipLoadout {
    pub fn from_hull(
        hull: &ShipHull,
        modules: &StandardModules,
        shipyard: &Shipyard,
    ) -> Result<Self> {
        let name = hull.properties.name.clone();
        let symbol = shipyard.symbol_for(&name)?.to_string();

        let defaults = &hull.defaults.standard;
        if defaults.len() < StandardModuleKind::ALL.len() {
            return Err(DataError::malformed(&name, "defaults.standard"));
        }
        let standard = StandardModuleKind::ALL
            .iter()
            .zip(defaults)
            .map(|(&kind, code)| -> Result<_> {
                Ok((kind, modules.resolve(kind, code)?.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;

        let highest_internal = hull
            .slots
            .internal
            .first()
            .map(InternalSlot::size)
            .ok_or_else(|| DataError::malformed(&name, "slots.internal"))?;
        let utility_slots = hull.slots.hardpoints.iter().filter(|&&size| size == 0).count() as u32;

        Ok(Self {
            armour: format!("{}_armour_grade1", symbol),
            name,
            symbol,
            standard,
            utility_slots,
            highest_internal,
            base_shield_strength: hull.properties.base_shield_strength.clone(),
            hull_mass: hull.properties.hull_mass.clone(),
        })
    }

    fn standard_symbol(&self, kind: StandardModuleKind) -> &str {
        self.standard
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, symbol)| symbol.as_str())
            .unwrap_or_default()
    }

    /// Journal loadout for the stock ship
    pub fn loadout_event(&self) -> LoadoutEvent {
        let mut modules = vec![ModuleSlot::new(self.armour.clone(), "armour")];
        // loadout order differs from hull default order: fuel tank before sensors
        for kind in [
            StandardModuleKind::PowerPlant,
            StandardModuleKind::Thrusters,
            StandardModuleKind::FrameShiftDrive,
            StandardModuleKind::LifeSupport,
            StandardModuleKind::PowerDistributor,
            StandardModuleKind::FuelTank,
            StandardModuleKind::Sensors,
        ] {
            modules.push(ModuleSlot::new(self.standard_symbol(kind), kind.slot()));
        }
        modules.push(ModuleSlot::new(PLANETARY_APPROACH_SUITE, "planetaryapproachsuite"));
        modules.push(ModuleSlot::new(CARGO_HATCH, "cargohatch"));
        LoadoutEvent::new(self.symbol.clone(), modules)
    }

    pub fn to_export(&self) -> ShipExport {
        ShipExport {
            ship: self.name.clone(),
            symbol: self.symbol.clone(),
            loadout_template: self.loadout_event(),
            base_shield_strength: self.base_shield_strength.clone(),
            hull_mass: self.hull_mass.clone(),
            utility_slots: self.utility_slots,
            highest_internal: self.highest_internal,
        }
    }
}
