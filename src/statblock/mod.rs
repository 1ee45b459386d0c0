//! Creature Stat Block Conversion
//!
//! Bidirectional converter between the Markdown stat block dialect and the
//! [`Creature`] record.
//!
//! # Example
//!
//! ```
//! use ttrpg_statblock::statblock::{parse_creature, render_creature};
//!
//! let creature = parse_creature("### Cat\nTiny beast, unaligned");
//! assert_eq!(creature.size, "Tiny");
//! assert_eq!(creature.ability_scores.strength, 10);
//!
//! let markdown = render_creature(&creature);
//! assert!(markdown.starts_with("### Cat\nTiny beast, unaligned\n---"));
//! ```

pub mod actions;
pub mod emitter;
pub mod header_line;
pub mod model;
pub mod modifier;
pub mod parser;
pub mod segmenter;
pub mod speed;
pub mod tables;

pub use emitter::render_creature;
pub use model::{AbilityScores, Action, ActionKind, Creature, Speed};
pub use modifier::ability_modifier;
pub use parser::parse_creature;
