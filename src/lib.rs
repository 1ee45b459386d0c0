//! TTRPG Stat Block - creature stat block and initiative table converter
//!
//! Converts between the Markdown stat block dialect used in session notes
//! and a strongly-typed creature record, renders and parses the initiative
//! table, and resolves published creatures from a remote catalog.

pub mod catalog;
pub mod config;
pub mod core;
pub mod initiative;
pub mod statblock;


pub use catalog::{lookup_creature, CatalogError, CreatureCatalog, SrdCatalog};
pub use initiative::{parse_initiative, render_initiative, Combatant, InitiativeTracker};
pub use statblock::{ability_modifier, parse_creature, render_creature, Creature};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
