//! Stat composition: baseline -> blueprint -> experimental effect.
//!
//! Both steps borrow their input and return a new record, so the baseline
//! stays canonical for diffing. The types enforce the order: only a
//! baseline can take a blueprint, only an engineered record can take an
//! experimental effect.

use std::collections::BTreeMap;

use super::attributes::{Attribute, CombinationKind};
use super::record::{AttributeRecord, DerivedVariant, EngineeredRecord, Modification};
use super::tables::{Blueprint, ExperimentalEffect};
use crate::core::error::Result;

/// Decimal places kept after an experimental effect
pub const ROUNDING_PLACES: usize = 4;

/// Round to `places` decimals on the exact binary value, ties to even.
///
/// Goes through the decimal formatter instead of scaling by a power of ten,
/// so `1.51725` (stored just below the tie) stays `1.5172`.
pub fn round_to(value: f64, places: usize) -> f64 {
    format!("{:.*}", places, value).parse().unwrap_or(value)
}

/// Apply the best roll of the blueprint's grade 5 features
pub fn apply_blueprint(
    record: &AttributeRecord,
    blueprint: &Blueprint,
) -> Result<EngineeredRecord> {
    let features = blueprint.best_roll()?;
    let record = apply_deltas(record, &features, Attribute::kind)?;
    Ok(EngineeredRecord {
        record,
        blueprint: Modification {
            name: blueprint.name.clone(),
            symbol: blueprint.fdname.clone(),
        },
    })
}

/// Apply an experimental effect and round every attribute
pub fn apply_experimental(
    engineered: &EngineeredRecord,
    effect: &ExperimentalEffect,
) -> Result<DerivedVariant> {
    let mut record = apply_deltas(
        &engineered.record,
        &effect.features,
        Attribute::experimental_kind,
    )?;
    for value in record.values.values_mut() {
        *value = round_to(*value, ROUNDING_PLACES);
    }
    Ok(DerivedVariant {
        record,
        blueprint: engineered.blueprint.clone(),
        experimental: Modification {
            name: effect.name.clone(),
            symbol: effect.symbol.clone(),
        },
    })
}

fn apply_deltas(
    record: &AttributeRecord,
    deltas: &BTreeMap<String, f64>,
    rule: fn(Attribute) -> CombinationKind,
) -> Result<AttributeRecord> {
    let mut result = record.clone();
    for (name, &delta) in deltas {
        let attribute = match name.parse::<Attribute>() {
            Ok(attribute) => attribute,
            Err(_) => {
                tracing::debug!(symbol = %record.symbol, feature = %name, "Skipping unknown feature");
                continue;
            }
        };
        let current = record.require(attribute)?;
        result.set(attribute, rule(attribute).combine(current, delta));
    }
    Ok(result)
}
