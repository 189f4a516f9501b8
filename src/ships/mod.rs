//! Stock ship loadouts

pub mod catalog;
pub mod ship;
pub mod shipyard;

pub use catalog::{CatalogEntry, StandardModuleKind, StandardModules};
pub use ship::{ShipExport, ShipHull, ShipLoadout};
pub use shipyard::Shipyard;
