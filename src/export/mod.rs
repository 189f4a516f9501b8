//! Output shapes consumed by the shield tester

pub mod booster;
pub mod loadout;

pub use booster::{can_skip, diff_modifiers, project, BoosterVariantExport};
pub use loadout::{EngineeringBlock, LoadoutEvent, ModifierEntry, ModuleSlot};
