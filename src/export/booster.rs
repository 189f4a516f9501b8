//! Shield booster variant export: sparse diff against the baseline plus a
//! loadout fragment the shield tester can drop into a ship.

use serde::{Deserialize, Serialize};

use super::loadout::{
    EngineeringBlock, ModifierEntry, ModuleSlot, ENGINEERING_LEVEL, ENGINEERING_QUALITY,
};
use crate::engineering::{round_to, Attribute, AttributeRecord, DerivedVariant, ROUNDING_PLACES};

/// How an attribute value is written into a modifier entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExportScale {
    Raw,
    Percent,
    /// Percent, rounded again after scaling
    PercentRounded,
}

struct ExportedAttribute {
    attribute: Attribute,
    label: &'static str,
    less_is_good: bool,
    scale: ExportScale,
}

/// Exported attributes in output order
const EXPORTED: [ExportedAttribute; 6] = [
    ExportedAttribute {
        attribute: Attribute::Integrity,
        label: "Integrity",
        less_is_good: false,
        scale: ExportScale::Raw,
    },
    ExportedAttribute {
        attribute: Attribute::Power,
        label: "PowerDraw",
        less_is_good: true,
        scale: ExportScale::Raw,
    },
    ExportedAttribute {
        attribute: Attribute::ShieldBoost,
        label: "DefenceModifierShieldMultiplier",
        less_is_good: false,
        scale: ExportScale::Percent,
    },
    ExportedAttribute {
        attribute: Attribute::KinRes,
        label: "KineticResistance",
        less_is_good: false,
        scale: ExportScale::PercentRounded,
    },
    ExportedAttribute {
        attribute: Attribute::ThermRes,
        label: "ThermicResistance",
        less_is_good: false,
        scale: ExportScale::PercentRounded,
    },
    ExportedAttribute {
        attribute: Attribute::ExplRes,
        label: "ExplosiveResistance",
        less_is_good: false,
        scale: ExportScale::PercentRounded,
    },
];

/// Engineering and experimental display names the shield tester may skip
const SKIPPABLE_ENGINEERING: &str = "blast resistant";
const SKIPPABLE_EXPERIMENTAL: &str = "blast block";

/// One shield booster variant as written to the data file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoosterVariantExport {
    pub engineering: String,
    pub experimental: String,
    pub shield_strength_bonus: f64,
    pub exp_res_bonus: f64,
    pub kin_res_bonus: f64,
    pub therm_res_bonus: f64,
    pub can_skip: bool,
    pub loadout_template: ModuleSlot,
}

/// Modifier entries for every exported attribute that changed
pub fn diff_modifiers(variant: &AttributeRecord, baseline: &AttributeRecord) -> Vec<ModifierEntry> {
    EXPORTED
        .iter()
        .filter_map(|exported| {
            let value = variant.get(exported.attribute)?;
            let original = baseline.get(exported.attribute)?;
            if value == original {
                return None;
            }
            let (value, original_value) = match exported.scale {
                ExportScale::Raw => (value, original),
                ExportScale::Percent => (value * 100.0, original * 100.0),
                ExportScale::PercentRounded => {
                    (round_to(value * 100.0, ROUNDING_PLACES), original * 100.0)
                }
            };
            Some(ModifierEntry {
                label: exported.label.to_string(),
                value,
                original_value,
                less_is_good: u8::from(exported.less_is_good),
            })
        })
        .collect()
}

/// Whether the shield tester may treat this variant as negligible
pub fn can_skip(engineering_name: &str, experimental_name: &str) -> bool {
    engineering_name.to_lowercase() == SKIPPABLE_ENGINEERING
        || experimental_name.to_lowercase() == SKIPPABLE_EXPERIMENTAL
}

/// Project a derived variant against the baseline it was built from
pub fn project(variant: &DerivedVariant, baseline: &AttributeRecord) -> BoosterVariantExport {
    let record = &variant.record;
    let engineering = EngineeringBlock {
        blueprint_name: variant.blueprint.symbol.clone(),
        level: ENGINEERING_LEVEL,
        quality: ENGINEERING_QUALITY,
        modifiers: diff_modifiers(record, baseline),
        experimental_effect: variant.experimental.symbol.clone(),
    };

    BoosterVariantExport {
        engineering: variant.blueprint.name.clone(),
        experimental: variant.experimental.name.clone(),
        shield_strength_bonus: record.get(Attribute::ShieldBoost).unwrap_or_default(),
        exp_res_bonus: record.get(Attribute::ExplRes).unwrap_or_default(),
        kin_res_bonus: record.get(Attribute::KinRes).unwrap_or_default(),
        therm_res_bonus: record.get(Attribute::ThermRes).unwrap_or_default(),
        can_skip: can_skip(&variant.blueprint.name, &variant.experimental.name),
        // slot is picked by the shield tester at runtime
        loadout_template: ModuleSlot::new(record.symbol.clone(), "").with_engineering(engineering),
    }
}
