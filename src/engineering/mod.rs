//! Engineering stat-composition engine
//!
//! Baseline records are modified by the best roll of a grade 5 blueprint,
//! then by one experimental effect, producing independent derived variants.

pub mod attributes;
pub mod compose;
pub mod expand;
pub mod record;
pub mod tables;

pub use attributes::{Attribute, CombinationKind};
pub use compose::{apply_blueprint, apply_experimental, round_to, ROUNDING_PLACES};
pub use expand::{expand, EngineeringSelection};
pub use record::{AttributeRecord, DerivedVariant, EngineeredRecord, Modification};
pub use tables::{Blueprint, EngineeringTables, ExperimentalEffect, FeatureRoll, SpecialDescriptor};
