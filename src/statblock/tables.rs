//! Table Extractor
//!
//! Finds the two tables of a stat block among the collected table rows:
//!
//! ```text
//! | Property | Value |            | STR | DEX | CON | INT | WIS | CHA |
//! | :--- | :--- |                 | :-: | :-: | :-: | :-: | :-: | :-: |
//! | **Armor Class** | 18 |        | 20 (+5) | 18 (+4) | ... |
//! ```
//!
//! Rows following a table's start marker belong to that table until the
//! other table's marker is seen.

use once_cell::sync::Lazy;
use regex::Regex;

use super::model::{AbilityScores, Speed};
use super::speed::parse_speed;

/// `| **Key** | Value |`
static PROPERTY_ROW: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\| \*\*(.*?)\*\* \| (.*) \|$").expect("Invalid property row regex")
});

/// Leading signed integer of a cell ("+3", "15 (natural armor)").
static LEADING_INT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([+-]?\d+)").expect("Invalid integer regex"));

/// Data row index within the ability table (header, alignment, data).
const ABILITY_DATA_ROW: usize = 2;

// ============================================================================
// Property keys
// ============================================================================

/// Recognized property-table labels, in canonical emit order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKey {
    ArmorClass,
    HitPoints,
    Speed,
    SavingThrows,
    Skills,
    DamageVulnerabilities,
    DamageResistances,
    DamageImmunities,
    ConditionImmunities,
    Senses,
    Languages,
    Challenge,
    ProficiencyBonus,
}

impl PropertyKey {
    pub const ALL: [PropertyKey; 13] = [
        PropertyKey::ArmorClass,
        PropertyKey::HitPoints,
        PropertyKey::Speed,
        PropertyKey::SavingThrows,
        PropertyKey::Skills,
        PropertyKey::DamageVulnerabilities,
        PropertyKey::DamageResistances,
        PropertyKey::DamageImmunities,
        PropertyKey::ConditionImmunities,
        PropertyKey::Senses,
        PropertyKey::Languages,
        PropertyKey::Challenge,
        PropertyKey::ProficiencyBonus,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PropertyKey::ArmorClass => "Armor Class",
            PropertyKey::HitPoints => "Hit Points",
            PropertyKey::Speed => "Speed",
            PropertyKey::SavingThrows => "Saving Throws",
            PropertyKey::Skills => "Skills",
            PropertyKey::DamageVulnerabilities => "Damage Vulnerabilities",
            PropertyKey::DamageResistances => "Damage Resistances",
            PropertyKey::DamageImmunities => "Damage Immunities",
            PropertyKey::ConditionImmunities => "Condition Immunities",
            PropertyKey::Senses => "Senses",
            PropertyKey::Languages => "Languages",
            PropertyKey::Challenge => "Challenge",
            PropertyKey::ProficiencyBonus => "Proficiency Bonus",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.label() == label)
    }
}

// ============================================================================
// Extracted tables
// ============================================================================

/// Typed values read from the property table. Unset fields were absent or
/// unparseable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    pub armor_class: Option<i32>,
    pub hit_points: Option<String>,
    pub speed: Option<Speed>,
    pub saving_throws: Option<String>,
    pub skills: Option<String>,
    pub damage_vulnerabilities: Option<String>,
    pub damage_resistances: Option<String>,
    pub damage_immunities: Option<String>,
    pub condition_immunities: Option<String>,
    pub senses: Option<String>,
    pub languages: Option<String>,
    pub challenge: Option<String>,
    pub proficiency_bonus: Option<i32>,
}

impl Properties {
    fn set(&mut self, key: PropertyKey, value: &str) {
        let text = || Some(value.to_string());
        match key {
            PropertyKey::ArmorClass => self.armor_class = leading_int(value),
            PropertyKey::HitPoints => self.hit_points = text(),
            PropertyKey::Speed => self.speed = parse_speed(value),
            PropertyKey::SavingThrows => self.saving_throws = text(),
            PropertyKey::Skills => self.skills = text(),
            PropertyKey::DamageVulnerabilities => self.damage_vulnerabilities = text(),
            PropertyKey::DamageResistances => self.damage_resistances = text(),
            PropertyKey::DamageImmunities => self.damage_immunities = text(),
            PropertyKey::ConditionImmunities => self.condition_immunities = text(),
            PropertyKey::Senses => self.senses = text(),
            PropertyKey::Languages => self.languages = text(),
            PropertyKey::Challenge => self.challenge = text(),
            PropertyKey::ProficiencyBonus => self.proficiency_bonus = leading_int(value),
        }
    }
}

/// Both tables of a stat block, each optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatTables {
    pub properties: Option<Properties>,
    pub abilities: Option<AbilityScores>,
}

// ============================================================================
// Extraction
// ============================================================================

fn leading_int(value: &str) -> Option<i32> {
    LEADING_INT
        .captures(value)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

fn cells(row: &str) -> Vec<&str> {
    row.trim()
        .trim_matches('|')
        .split('|')
        .map(str::trim)
        .collect()
}

fn is_property_header(row: &str) -> bool {
    cells(row).starts_with(&["Property", "Value"])
}

fn is_ability_header(row: &str) -> bool {
    cells(row).starts_with(&["STR", "DEX"])
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Current {
    None,
    Property,
    Ability,
}

/// Group table rows into the property table and the ability table. A repeated
/// start marker restarts that table.
fn split_tables<S: AsRef<str>>(rows: &[S]) -> (Option<Vec<&str>>, Option<Vec<&str>>) {
    let mut property: Option<Vec<&str>> = None;
    let mut ability: Option<Vec<&str>> = None;
    let mut current = Current::None;

    for row in rows.iter().map(AsRef::as_ref) {
        if is_property_header(row) {
            property = Some(vec![row]);
            current = Current::Property;
        } else if is_ability_header(row) {
            ability = Some(vec![row]);
            current = Current::Ability;
        } else {
            let table = match current {
                Current::Property => property.as_mut(),
                Current::Ability => ability.as_mut(),
                Current::None => None,
            };
            if let Some(table) = table {
                table.push(row);
            }
        }
    }

    (property, ability)
}

fn parse_property_table(rows: &[&str]) -> Properties {
    let mut properties = Properties::default();

    for row in rows {
        let Some(caps) = PROPERTY_ROW.captures(row.trim()) else {
            continue;
        };
        let (Some(key), Some(value)) = (caps.get(1), caps.get(2)) else {
            continue;
        };
        match PropertyKey::from_label(key.as_str().trim()) {
            Some(key) => properties.set(key, value.as_str().trim()),
            None => log::debug!("Ignoring unknown stat block property '{}'", key.as_str()),
        }
    }

    properties
}

fn parse_ability_table(rows: &[&str]) -> Option<AbilityScores> {
    let data = rows.get(ABILITY_DATA_ROW)?;
    let scores: Vec<i32> = data
        .split('|')
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .take(6)
        .map_while(|cell| cell.split_whitespace().next()?.parse().ok())
        .collect();

    match <[i32; 6]>::try_from(scores) {
        Ok(scores) => Some(AbilityScores::from_array(scores)),
        Err(scores) => {
            log::debug!(
                "Ability table has {} numeric cells, expected 6; keeping defaults",
                scores.len()
            );
            None
        }
    }
}

/// Extract both tables from the collected table rows.
pub fn extract_tables<S: AsRef<str>>(rows: &[S]) -> StatTables {
    let (property, ability) = split_tables(rows);

    StatTables {
        properties: property.as_deref().map(parse_property_table),
        abilities: ability.as_deref().and_then(parse_ability_table),
    }
}
