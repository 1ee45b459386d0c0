//! Initiative Table
//!
//! Parses and renders the initiative block:
//!
//! ```text
//! Round: 3
//! | Name | Initiative | Damage |
//! |---|---|---|
//! | Player 1 | 20 | 10 |
//! ```
//!
//! When several `Round: N` lines are present the last parseable one wins.
//! Combatant rows with a non-integer initiative or damage are dropped one by
//! one; the rest of the table is kept.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// `Round: N` on a single line.
static ROUND_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[ \t]*Round:[ \t]*(\d+)").expect("Invalid round marker regex")
});

/// Alignment row cell: dashes with optional colons.
static SEPARATOR_CELL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^:?-+:?$").expect("Invalid separator regex"));

const HEADER_CELLS: [&str; 3] = ["Name", "Initiative", "Damage"];
const DEFAULT_ROUND: u32 = 1;

// ============================================================================
// Model
// ============================================================================

/// A named participant in the initiative order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Combatant {
    pub name: String,
    pub initiative: i32,
    pub damage: i32,
}

impl Combatant {
    pub fn new(name: impl Into<String>, initiative: i32, damage: i32) -> Self {
        Self {
            name: name.into(),
            initiative,
            damage,
        }
    }
}

/// Round counter plus the ordered combatant list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitiativeTracker {
    pub combatants: Vec<Combatant>,
    pub round: u32,
}

impl Default for InitiativeTracker {
    fn default() -> Self {
        Self {
            combatants: Vec::new(),
            round: DEFAULT_ROUND,
        }
    }
}

// ============================================================================
// Parsing
// ============================================================================

/// Split a table row into trimmed cells, without the outer pipes.
fn split_cells(line: &str) -> Vec<&str> {
    let mut s = line.trim();
    if let Some(stripped) = s.strip_prefix('|') {
        s = stripped;
    }
    if let Some(stripped) = s.strip_suffix('|') {
        s = stripped;
    }
    s.split('|').map(str::trim).collect()
}

fn is_row(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.len() > 1 && trimmed.starts_with('|') && trimmed.ends_with('|')
}

fn is_header_row(line: &str) -> bool {
    is_row(line) && split_cells(line) == HEADER_CELLS
}

fn is_separator_row(line: &str) -> bool {
    is_row(line) && split_cells(line).iter().all(|cell| SEPARATOR_CELL.is_match(cell))
}

fn parse_round(content: &str) -> u32 {
    ROUND_MARKER
        .captures_iter(content)
        .filter_map(|caps| caps.get(1)?.as_str().parse().ok())
        .last()
        .unwrap_or(DEFAULT_ROUND)
}

fn parse_combatant(line: &str) -> Option<Combatant> {
    let cells: Vec<&str> = split_cells(line)
        .into_iter()
        .filter(|cell| !cell.is_empty())
        .collect();

    let [name, initiative, damage, ..] = cells.as_slice() else {
        log::debug!("Dropping initiative row with too few cells: {}", line.trim());
        return None;
    };

    match (initiative.parse(), damage.parse()) {
        (Ok(initiative), Ok(damage)) => Some(Combatant::new(*name, initiative, damage)),
        _ => {
            log::debug!("Dropping initiative row with non-integer values: {}", line.trim());
            None
        }
    }
}

fn parse_combatants(lines: &[&str]) -> Vec<Combatant> {
    let Some(start) = lines
        .windows(2)
        .position(|pair| is_header_row(pair[0]) && is_separator_row(pair[1]))
    else {
        return Vec::new();
    };

    lines[start + 2..]
        .iter()
        .take_while(|line| is_row(line))
        .filter_map(|line| parse_combatant(line))
        .collect()
}

/// Parse an initiative block. Never fails; missing parts fall back to defaults.
pub fn parse_initiative(content: &str) -> InitiativeTracker {
    let lines: Vec<&str> = content.lines().collect();

    InitiativeTracker {
        combatants: parse_combatants(&lines),
        round: parse_round(content),
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Render an initiative block with combatants in descending initiative order.
/// Ties keep their input order.
pub fn render_initiative(tracker: &InitiativeTracker) -> String {
    let mut combatants: Vec<&Combatant> = tracker.combatants.iter().collect();
    combatants.sort_by(|a, b| b.initiative.cmp(&a.initiative));

    let mut lines = vec![
        format!("Round: {}", tracker.round),
        format!("| {} |", HEADER_CELLS.join(" | ")),
        "|---|---|---|".to_string(),
    ];
    lines.extend(
        combatants
            .iter()
            .map(|c| format!("| {} | {} | {} |", c.name, c.initiative, c.damage)),
    );

    lines.join("\n")
}
