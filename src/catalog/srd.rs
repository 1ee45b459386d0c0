//! SRD Monster Catalog
//!
//! HTTP client for the 5e SRD JSON data set (`{base_url}/monsters.json`) and
//! the conversion from its monster records to [`Creature`].

use std::time::Duration;

use async_trait::async_trait;
use indexmap::IndexMap;
use reqwest::Client;
use serde::Deserialize;

use super::error::{CatalogError, Result};
use super::CreatureCatalog;
use crate::config::CatalogConfig;
use crate::statblock::speed::parse_speed;
use crate::statblock::{AbilityScores, Action, Creature};

const SAVING_THROW_PREFIX: &str = "Saving Throw: ";
const SKILL_PREFIX: &str = "Skill: ";

// ============================================================================
// Wire Types
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SrdAction {
    pub name: String,
    pub desc: String,
}

/// One entry of `monsters.json`. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SrdMonster {
    pub name: String,
    pub size: String,
    #[serde(rename = "type")]
    pub monster_type: String,
    pub subtype: Option<String>,
    pub alignment: String,
    pub armor_class: i32,
    pub hit_points: i32,
    pub hit_dice: String,
    pub speed: String,
    pub strength: i32,
    pub dexterity: i32,
    pub constitution: i32,
    pub intelligence: i32,
    pub wisdom: i32,
    pub charisma: i32,
    /// `"Saving Throw: DEX" => 5`, `"Skill: Perception" => 3`, in document order.
    pub proficiencies: IndexMap<String, i32>,
    pub damage_vulnerabilities: String,
    pub damage_resistances: String,
    pub damage_immunities: String,
    pub condition_immunities: String,
    pub senses: String,
    pub languages: String,
    pub challenge_rating: f64,
    pub special_abilities: Vec<SrdAction>,
    pub actions: Vec<SrdAction>,
    pub legendary_actions: Vec<SrdAction>,
}

// ============================================================================
// Client
// ============================================================================

pub struct SrdCatalog {
    client: Client,
    base_url: String,
}

impl SrdCatalog {
    pub fn new(config: &CatalogConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn fetch_monsters(&self) -> Result<Vec<SrdMonster>> {
        let url = format!("{}/monsters.json", self.base_url);
        log::debug!("Fetching SRD monsters from {}", url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(CatalogError::Status {
                status: response.status().as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl CreatureCatalog for SrdCatalog {
    async fn lookup(&self, name: &str) -> Result<Option<Creature>> {
        let monsters = self.fetch_monsters().await?;

        let found = monsters
            .iter()
            .find(|m| m.name == name)
            .or_else(|| monsters.iter().find(|m| m.name.eq_ignore_ascii_case(name)));

        Ok(found.map(Creature::from))
    }
}

// ============================================================================
// Conversion
// ============================================================================

impl From<&SrdMonster> for Creature {
    fn from(monster: &SrdMonster) -> Self {
        let (saving_throws, skills) = split_proficiencies(&monster.proficiencies);

        Creature {
            name: monster.name.clone(),
            species: monster.subtype.clone().filter(|s| !s.is_empty()),
            creature_type: monster.monster_type.clone(),
            size: monster.size.clone(),
            alignment: monster.alignment.clone(),
            armor_class: monster.armor_class,
            hit_points: format_hit_points(monster.hit_points, &monster.hit_dice),
            speed: parse_speed(&monster.speed).unwrap_or_default(),
            ability_scores: AbilityScores::from_array([
                monster.strength,
                monster.dexterity,
                monster.constitution,
                monster.intelligence,
                monster.wisdom,
                monster.charisma,
            ]),
            saving_throws,
            skills,
            damage_vulnerabilities: non_empty(&monster.damage_vulnerabilities),
            damage_resistances: non_empty(&monster.damage_resistances),
            damage_immunities: non_empty(&monster.damage_immunities),
            condition_immunities: non_empty(&monster.condition_immunities),
            senses: non_empty(&monster.senses),
            languages: non_empty(&monster.languages),
            challenge_rating: format_challenge(monster.challenge_rating),
            proficiency_bonus: Some(proficiency_bonus(monster.challenge_rating)),
            notes: format_notes(&monster.special_abilities),
            actions: monster.actions.iter().map(to_action).collect(),
            legendary_actions: monster.legendary_actions.iter().map(to_action).collect(),
            ..Creature::default()
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn format_hit_points(hit_points: i32, hit_dice: &str) -> String {
    if hit_dice.trim().is_empty() {
        hit_points.to_string()
    } else {
        format!("{} ({})", hit_points, hit_dice.trim())
    }
}

fn action_name(name: &str) -> String {
    name.trim().trim_end_matches('.').to_string()
}

fn to_action(action: &SrdAction) -> Action {
    Action::new(action_name(&action.name), action.desc.trim())
}

fn format_notes(abilities: &[SrdAction]) -> Option<String> {
    let paragraphs: Vec<String> = abilities
        .iter()
        .map(|a| format!("***{}.*** {}", action_name(&a.name), a.desc.trim()))
        .collect();
    (!paragraphs.is_empty()).then(|| paragraphs.join("\n\n"))
}

/// "DEX" -> "Dex"; mixed-case names are left alone.
fn title_case(word: &str) -> String {
    if word.chars().any(|c| c.is_lowercase()) {
        return word.to_string();
    }
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_string() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

fn split_proficiencies(proficiencies: &IndexMap<String, i32>) -> (Option<String>, Option<String>) {
    let mut saves = Vec::new();
    let mut skills = Vec::new();

    for (key, bonus) in proficiencies {
        if let Some(ability) = key.strip_prefix(SAVING_THROW_PREFIX) {
            saves.push(format!("{} {:+}", title_case(ability.trim()), bonus));
        } else if let Some(skill) = key.strip_prefix(SKILL_PREFIX) {
            skills.push(format!("{} {:+}", skill.trim(), bonus));
        } else {
            log::debug!("Ignoring SRD proficiency '{}'", key);
        }
    }

    let join = |parts: Vec<String>| (!parts.is_empty()).then(|| parts.join(", "));
    (join(saves), join(skills))
}

/// XP award per challenge rating, indexed by whole CR 0..=30.
const XP_BY_CR: [u32; 31] = [
    10, 200, 450, 700, 1_100, 1_800, 2_300, 2_900, 3_900, 5_000, 5_900, 7_200, 8_400, 10_000,
    11_500, 13_000, 15_000, 18_000, 20_000, 22_000, 25_000, 33_000, 41_000, 50_000, 62_000,
    75_000, 90_000, 105_000, 120_000, 135_000, 155_000,
];

fn fractional_cr(cr: f64) -> Option<(&'static str, u32)> {
    const FRACTIONS: [(f64, &str, u32); 3] = [(0.125, "1/8", 25), (0.25, "1/4", 50), (0.5, "1/2", 100)];
    FRACTIONS
        .iter()
        .find(|(value, _, _)| (cr - value).abs() < 1e-6)
        .map(|(_, label, xp)| (*label, *xp))
}

fn with_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Challenge rating text with its XP parenthetical, e.g. `1/4 (50 XP)` or `5 (1,800 XP)`.
pub fn format_challenge(cr: f64) -> String {
    if let Some((label, xp)) = fractional_cr(cr) {
        return format!("{} ({} XP)", label, with_thousands(xp));
    }

    let whole = cr.round().max(0.0) as usize;
    match XP_BY_CR.get(whole) {
        Some(xp) => format!("{} ({} XP)", whole, with_thousands(*xp)),
        None => whole.to_string(),
    }
}

/// Proficiency bonus for a challenge rating: +2 up to CR 4, then +1 every four CRs.
pub fn proficiency_bonus(cr: f64) -> i32 {
    let whole = cr.floor().max(1.0) as i32;
    2 + (whole - 1) / 4
}
