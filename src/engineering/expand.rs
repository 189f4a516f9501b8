//! Variant expansion: every blueprint × every experimental effect
//!
//! Uses rayon for the per-blueprint work; variants share nothing but the
//! read-only baseline and tables.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::compose::{apply_blueprint, apply_experimental};
use super::record::{AttributeRecord, DerivedVariant};
use super::tables::{EngineeringTables, ExperimentalEffect};
use crate::core::error::Result;

/// Blueprints and experimental effects offered for one equipment kind
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineeringSelection {
    pub blueprints: BTreeSet<String>,
    pub experimentals: BTreeSet<String>,
}

impl EngineeringSelection {
    /// Number of variants an expansion over this selection yields
    pub fn variant_count(&self) -> usize {
        self.blueprints.len() * self.experimentals.len()
    }
}

/// Build one derived variant per (blueprint, experimental) pair.
///
/// Every symbol must exist in `tables`; the first missing one aborts the
/// expansion. Output order is not part of the contract.
pub fn expand(
    baseline: &AttributeRecord,
    selection: &EngineeringSelection,
    tables: &EngineeringTables,
) -> Result<Vec<DerivedVariant>> {
    let effects: Vec<ExperimentalEffect> = selection
        .experimentals
        .iter()
        .map(|symbol| tables.experimental(symbol))
        .collect::<Result<_>>()?;

    let blueprint_symbols: Vec<&String> = selection.blueprints.iter().collect();
    let per_blueprint: Vec<Vec<DerivedVariant>> = blueprint_symbols
        .par_iter()
        .map(|symbol| {
            let prototype = apply_blueprint(baseline, tables.blueprint(symbol)?)?;
            effects
                .iter()
                .map(|effect| apply_experimental(&prototype, effect))
                .collect::<Result<Vec<_>>>()
        })
        .collect::<Result<_>>()?;

    let variants: Vec<DerivedVariant> = per_blueprint.into_iter().flatten().collect();
    tracing::debug!(
        symbol = %baseline.symbol,
        variants = variants.len(),
        "Expanded engineering variants"
    );
    Ok(variants)
}
