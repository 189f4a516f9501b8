//! Attribute names and their combination rules.
//!
//! The rule table lives here and nowhere else: composition code asks an
//! [`Attribute`] how it combines instead of branching on attribute names.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A numeric attribute of a shield booster or shield generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    Integrity,
    Power,
    Mass,
    ShieldBoost,
    ExplRes,
    KinRes,
    ThermRes,
    Regen,
    BrokenRegen,
    DistDraw,
    MaxMass,
    MaxMul,
    MinMass,
    MinMul,
    OptMass,
    OptMul,
}

/// How a delta is folded into an existing value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombinationKind {
    /// Fractional bonus: `(1 + a) * (1 + d) - 1`
    MultiplicativePercent,
    /// Absolute quantity: `a * (1 + d)`
    Scale,
    /// Percent of remaining damage removed: `1 - (1 - a) * (1 - d / 100)`
    DamageReduction,
}

impl CombinationKind {
    pub fn combine(self, value: f64, delta: f64) -> f64 {
        match self {
            CombinationKind::MultiplicativePercent => (1.0 + value) * (1.0 + delta) - 1.0,
            CombinationKind::Scale => value * (1.0 + delta),
            CombinationKind::DamageReduction => 1.0 - (1.0 - value) * (1.0 - delta / 100.0),
        }
    }
}

impl Attribute {
    pub const ALL: [Attribute; 16] = [
        Attribute::Integrity,
        Attribute::Power,
        Attribute::Mass,
        Attribute::ShieldBoost,
        Attribute::ExplRes,
        Attribute::KinRes,
        Attribute::ThermRes,
        Attribute::Regen,
        Attribute::BrokenRegen,
        Attribute::DistDraw,
        Attribute::MaxMass,
        Attribute::MaxMul,
        Attribute::MinMass,
        Attribute::MinMul,
        Attribute::OptMass,
        Attribute::OptMul,
    ];

    /// Attributes every shield booster baseline carries
    pub const BOOSTER: [Attribute; 7] = [
        Attribute::Integrity,
        Attribute::Power,
        Attribute::Mass,
        Attribute::ShieldBoost,
        Attribute::ExplRes,
        Attribute::KinRes,
        Attribute::ThermRes,
    ];

    /// Name used by the reference tables
    pub fn as_str(self) -> &'static str {
        match self {
            Attribute::Integrity => "integrity",
            Attribute::Power => "power",
            Attribute::Mass => "mass",
            Attribute::ShieldBoost => "shieldboost",
            Attribute::ExplRes => "explres",
            Attribute::KinRes => "kinres",
            Attribute::ThermRes => "thermres",
            Attribute::Regen => "regen",
            Attribute::BrokenRegen => "brokenregen",
            Attribute::DistDraw => "distdraw",
            Attribute::MaxMass => "maxmass",
            Attribute::MaxMul => "maxmul",
            Attribute::MinMass => "minmass",
            Attribute::MinMul => "minmul",
            Attribute::OptMass => "optmass",
            Attribute::OptMul => "optmul",
        }
    }

    /// Declared combination kind, used for blueprint deltas
    pub fn kind(self) -> CombinationKind {
        match self {
            Attribute::ShieldBoost
            | Attribute::ExplRes
            | Attribute::KinRes
            | Attribute::ThermRes => CombinationKind::MultiplicativePercent,
            _ => CombinationKind::Scale,
        }
    }

    /// Rule for experimental deltas. Resistances are given as a percentage of
    /// the damage still getting through, not as a fractional bonus.
    pub fn experimental_kind(self) -> CombinationKind {
        match self {
            Attribute::ExplRes | Attribute::KinRes | Attribute::ThermRes => {
                CombinationKind::DamageReduction
            }
            other => other.kind(),
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Attribute {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Attribute::ALL
            .iter()
            .copied()
            .find(|attr| attr.as_str() == s)
            .ok_or_else(|| format!("unknown attribute '{}'", s))
    }
}
