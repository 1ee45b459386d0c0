//! Stat Block Data Model
//!
//! Strongly-typed creature record shared by the parser, the emitter and the
//! catalog. Serializes to the camelCase JSON shape consumed by editors, with
//! absent optional fields omitted entirely.

use serde::{Deserialize, Serialize};

// ============================================================================
// Creature
// ============================================================================

/// A creature stat block.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Creature {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub species: Option<String>,
    #[serde(rename = "type")]
    pub creature_type: String,
    pub size: String,
    pub alignment: String,
    pub armor_class: i32,
    /// Free text such as "82 (11d8 + 33)"; dice notation is preserved as written.
    pub hit_points: String,
    pub speed: Speed,
    pub ability_scores: AbilityScores,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saving_throws: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub damage_vulnerabilities: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub damage_resistances: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub damage_immunities: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition_immunities: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub senses: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub languages: Option<String>,
    /// Free text, may embed an XP parenthetical: "5 (1,800 XP)".
    pub challenge_rating: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proficiency_bonus: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<Action>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bonus_actions: Vec<Action>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub reactions: Vec<Action>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub legendary_actions: Vec<Action>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<Action>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Creature {
    /// The record a blank stat block editor starts from.
    pub fn template() -> Self {
        Self {
            name: "New Creature".to_string(),
            creature_type: "Monstrosity".to_string(),
            size: "Medium".to_string(),
            alignment: "Neutral".to_string(),
            armor_class: 10,
            hit_points: "10".to_string(),
            speed: Speed {
                base: 30,
                ..Speed::default()
            },
            challenge_rating: "1/8".to_string(),
            ..Self::default()
        }
    }

    /// Action list for the given kind.
    pub fn actions_of(&self, kind: ActionKind) -> &[Action] {
        match kind {
            ActionKind::Actions => &self.actions,
            ActionKind::BonusActions => &self.bonus_actions,
            ActionKind::Reactions => &self.reactions,
            ActionKind::LegendaryActions => &self.legendary_actions,
            ActionKind::Options => &self.options,
        }
    }

    pub(crate) fn actions_of_mut(&mut self, kind: ActionKind) -> &mut Vec<Action> {
        match kind {
            ActionKind::Actions => &mut self.actions,
            ActionKind::BonusActions => &mut self.bonus_actions,
            ActionKind::Reactions => &mut self.reactions,
            ActionKind::LegendaryActions => &mut self.legendary_actions,
            ActionKind::Options => &mut self.options,
        }
    }
}

// ============================================================================
// Speed
// ============================================================================

/// Movement speeds in feet.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Speed {
    pub base: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub burrow: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub climb: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fly: Option<u32>,
    #[serde(skip_serializing_if = "is_false")]
    pub hover: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swim: Option<u32>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

// ============================================================================
// Ability Scores
// ============================================================================

/// The six ability scores. Every score defaults to 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AbilityScores {
    pub strength: i32,
    pub dexterity: i32,
    pub constitution: i32,
    pub intelligence: i32,
    pub wisdom: i32,
    pub charisma: i32,
}

impl AbilityScores {
    pub const DEFAULT_SCORE: i32 = 10;

    /// Scores in table column order (STR, DEX, CON, INT, WIS, CHA).
    pub fn to_array(self) -> [i32; 6] {
        [
            self.strength,
            self.dexterity,
            self.constitution,
            self.intelligence,
            self.wisdom,
            self.charisma,
        ]
    }

    pub fn from_array(scores: [i32; 6]) -> Self {
        let [strength, dexterity, constitution, intelligence, wisdom, charisma] = scores;
        Self {
            strength,
            dexterity,
            constitution,
            intelligence,
            wisdom,
            charisma,
        }
    }
}

impl Default for AbilityScores {
    fn default() -> Self {
        Self::from_array([Self::DEFAULT_SCORE; 6])
    }
}

// ============================================================================
// Actions
// ============================================================================

/// A labelled action block such as `***Multiattack.*** The creature makes two attacks.`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Action {
    pub name: String,
    pub description: String,
}

impl Action {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// The five action-list kinds, in canonical document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Actions,
    BonusActions,
    Reactions,
    LegendaryActions,
    Options,
}

impl ActionKind {
    pub const ALL: [ActionKind; 5] = [
        ActionKind::Actions,
        ActionKind::BonusActions,
        ActionKind::Reactions,
        ActionKind::LegendaryActions,
        ActionKind::Options,
    ];

    /// Section label as written in the bold header.
    pub fn section_label(self) -> &'static str {
        match self {
            ActionKind::Actions => "ACTIONS",
            ActionKind::BonusActions => "BONUS ACTIONS",
            ActionKind::Reactions => "REACTIONS",
            ActionKind::LegendaryActions => "LEGENDARY ACTIONS",
            ActionKind::Options => "OPTIONS",
        }
    }

    pub fn from_section_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.section_label() == label)
    }
}
