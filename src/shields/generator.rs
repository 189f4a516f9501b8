//! Shield generator records grouped by weave kind

use serde::{Deserialize, Serialize};
use std::fmt;

/// Only rating offered for normal and prismatic generators
pub const OFFERED_RATING: &str = "A";
/// Bi-weave generators are offered at every rating
pub const BI_WEAVE_NAME: &str = "Bi-Weave Shield";

/// Shield generator family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WeaveKind {
    #[serde(rename = "bi-weave")]
    BiWeave,
    #[serde(rename = "prismatic")]
    Prismatic,
    #[serde(rename = "normal")]
    Normal,
}

impl WeaveKind {
    pub const ALL: [WeaveKind; 3] = [WeaveKind::BiWeave, WeaveKind::Prismatic, WeaveKind::Normal];

    pub fn as_str(self) -> &'static str {
        match self {
            WeaveKind::BiWeave => "bi-weave",
            WeaveKind::Prismatic => "prismatic",
            WeaveKind::Normal => "normal",
        }
    }
}

impl fmt::Display for WeaveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shield generator as read from the catalog and written to the data file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShieldGeneratorRecord {
    pub symbol: String,
    pub integrity: f64,
    pub power: f64,
    pub explres: f64,
    pub kinres: f64,
    pub thermres: f64,
    #[serde(rename(deserialize = "ukName", serialize = "name"))]
    pub name: String,
    pub class: u8,
    #[serde(skip_serializing)]
    pub rating: String,
    pub regen: f64,
    pub brokenregen: f64,
    pub distdraw: f64,
    pub maxmass: f64,
    pub maxmul: f64,
    pub minmass: f64,
    pub minmul: f64,
    pub optmass: f64,
    pub optmul: f64,
}

impl ShieldGeneratorRecord {
    /// Whether the shield tester offers this generator
    pub fn is_offered(&self) -> bool {
        self.rating == OFFERED_RATING || self.name == BI_WEAVE_NAME
    }
}

/// Keep the generators the shield tester offers for one weave kind
pub fn aggregate(
    records: &[ShieldGeneratorRecord],
    weave_kind: WeaveKind,
) -> Vec<ShieldGeneratorRecord> {
    let offered: Vec<ShieldGeneratorRecord> =
        records.iter().filter(|r| r.is_offered()).cloned().collect();
    tracing::debug!(
        weave = %weave_kind,
        total = records.len(),
        offered = offered.len(),
        "Aggregated shield generators"
    );
    offered
}
