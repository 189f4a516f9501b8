//! Shield Loadouts - data file generator for the shield tester
//!
//! Combines ship hulls, standard modules, shield generators, shield boosters
//! and engineering tables into one JSON data file.

pub mod core;
pub mod engineering;
pub mod export;
pub mod pipeline;
pub mod shields;
pub mod ships;
pub mod sources;
