//! Loadout-event shapes shared by ship and booster exports

use serde::{Deserialize, Serialize};

/// Blueprint level written into every engineered loadout
pub const ENGINEERING_LEVEL: u8 = 5;
/// Roll quality written into every engineered loadout (best roll)
pub const ENGINEERING_QUALITY: u8 = 1;

/// One changed attribute in a loadout `Engineering` block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModifierEntry {
    pub label: String,
    pub value: f64,
    pub original_value: f64,
    /// 1 when a lower value is an improvement
    pub less_is_good: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EngineeringBlock {
    pub blueprint_name: String,
    pub level: u8,
    pub quality: u8,
    pub modifiers: Vec<ModifierEntry>,
    pub experimental_effect: String,
}

/// A module entry as it appears in a journal `Loadout` event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModuleSlot {
    pub item: String,
    /// Empty when the slot is chosen at runtime
    pub slot: String,
    pub on: bool,
    pub priority: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engineering: Option<EngineeringBlock>,
}

impl ModuleSlot {
    pub fn new(item: impl Into<String>, slot: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            slot: slot.into(),
            on: true,
            priority: 0,
            engineering: None,
        }
    }

    pub fn with_engineering(mut self, engineering: EngineeringBlock) -> Self {
        self.engineering = Some(engineering);
        self
    }
}

/// A journal `Loadout` event for a stock ship
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadoutEvent {
    pub event: String,
    #[serde(rename = "Ship")]
    pub ship: String,
    #[serde(rename = "Modules")]
    pub modules: Vec<ModuleSlot>,
}

impl LoadoutEvent {
    pub fn new(ship: impl Into<String>, modules: Vec<ModuleSlot>) -> Self {
        Self {
            event: "Loadout".to_string(),
            ship: ship.into(),
            modules,
        }
    }
}
