//! Standard-module catalogs, looked up by class and rating

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::core::error::{DataError, Result};

/// Standard module types, in the order hull defaults list them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StandardModuleKind {
    PowerPlant,
    Thrusters,
    FrameShiftDrive,
    LifeSupport,
    PowerDistributor,
    Sensors,
    FuelTank,
}

impl StandardModuleKind {
    pub const ALL: [StandardModuleKind; 7] = [
        StandardModuleKind::PowerPlant,
        StandardModuleKind::Thrusters,
        StandardModuleKind::FrameShiftDrive,
        StandardModuleKind::LifeSupport,
        StandardModuleKind::PowerDistributor,
        StandardModuleKind::Sensors,
        StandardModuleKind::FuelTank,
    ];

    /// Slot name used in journal loadouts
    pub fn slot(self) -> &'static str {
        match self {
            StandardModuleKind::PowerPlant => "powerplant",
            StandardModuleKind::Thrusters => "mainengines",
            StandardModuleKind::FrameShiftDrive => "frameshiftdrive",
            StandardModuleKind::LifeSupport => "lifesupport",
            StandardModuleKind::PowerDistributor => "powerdistributor",
            StandardModuleKind::Sensors => "radar",
            StandardModuleKind::FuelTank => "fueltank",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StandardModuleKind::PowerPlant => "power plant",
            StandardModuleKind::Thrusters => "thrusters",
            StandardModuleKind::FrameShiftDrive => "fsd",
            StandardModuleKind::LifeSupport => "life support",
            StandardModuleKind::PowerDistributor => "power distributor",
            StandardModuleKind::Sensors => "sensors",
            StandardModuleKind::FuelTank => "fuel tank",
        }
    }
}

/// One catalog row; other fields of the source are ignored
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CatalogEntry {
    pub class: u8,
    pub rating: String,
    pub symbol: String,
}

/// Split a default-fit code such as `"4E"` into class and rating
pub fn parse_class_rating(code: &str) -> Option<(u8, &str)> {
    if code.len() != 2 || !code.is_ascii() {
        return None;
    }
    let (class, rating) = code.split_at(1);
    let class = class.parse().ok()?;
    if !rating.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    Some((class, rating))
}

/// All standard-module catalogs
#[derive(Debug, Clone, Default)]
pub struct StandardModules {
    catalogs: AHashMap<StandardModuleKind, Vec<CatalogEntry>>,
}

impl StandardModules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, kind: StandardModuleKind, entries: Vec<CatalogEntry>) {
        self.catalogs.insert(kind, entries);
    }

    /// Symbol of the module of `kind` matching a default-fit code
    pub fn resolve(&self, kind: StandardModuleKind, code: &str) -> Result<&str> {
        let (class, rating) =
            parse_class_rating(code).ok_or_else(|| DataError::malformed(code, kind.label()))?;
        let catalog = self
            .catalogs
            .get(&kind)
            .ok_or_else(|| DataError::missing("standard module catalogs", kind.label()))?;
        catalog
            .iter()
            .find(|entry| entry.class == class && entry.rating == rating)
            .map(|entry| entry.symbol.as_str())
            .ok_or_else(|| {
                DataError::missing("standard module catalogs", format!("{} {}", kind.label(), code))
            })
    }
}
