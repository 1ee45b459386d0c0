//! Markdown Emitter
//!
//! Canonical serialization of a [`Creature`] back to the stat block dialect.
//! The output depends only on the record, never on how it was built.

use std::fmt::Write;

use super::header_line::format_header_line;
use super::model::{Action, ActionKind, Creature};
use super::modifier::{ability_modifier, format_signed};
use super::speed::format_speed;
use super::tables::PropertyKey;

const RULE: &str = "---";
const PROPERTY_HEADER: &str = "| Property | Value |\n| :--- | :--- |";
const ABILITY_HEADER: &str =
    "| STR | DEX | CON | INT | WIS | CHA |\n| :-: | :-: | :-: | :-: | :-: | :-: |";

/// Render a creature as a Markdown stat block.
pub fn render_creature(creature: &Creature) -> String {
    let mut md = String::new();

    // writeln! into a String cannot fail
    let _ = writeln!(md, "### {}", creature.name);
    if let Some(line) = format_header_line(
        &creature.size,
        &creature.creature_type,
        creature.species.as_deref(),
        &creature.alignment,
    ) {
        let _ = writeln!(md, "{}", line);
    }
    let _ = writeln!(md, "{}", RULE);

    let _ = writeln!(md, "{}", PROPERTY_HEADER);
    for key in PropertyKey::ALL {
        if let Some(value) = property_value(creature, key) {
            let _ = writeln!(md, "| **{}** | {} |", key.label(), value);
        }
    }
    let _ = writeln!(md, "{}", RULE);

    let _ = writeln!(md, "{}", ABILITY_HEADER);
    let cells: Vec<String> = creature
        .ability_scores
        .to_array()
        .iter()
        .map(|score| format!("{} ({})", score, ability_modifier(*score)))
        .collect();
    let _ = writeln!(md, "| {} |", cells.join(" | "));
    let _ = writeln!(md, "{}", RULE);

    for kind in ActionKind::ALL {
        let actions = creature.actions_of(kind);
        if !actions.is_empty() {
            write_section(&mut md, kind.section_label(), &render_actions(actions));
        }
    }
    if let Some(description) = non_empty(&creature.description) {
        write_section(&mut md, "DESCRIPTION", description);
    }
    if let Some(notes) = non_empty(&creature.notes) {
        write_section(&mut md, "NOTES", notes);
    }

    md.trim().to_string()
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn property_value(creature: &Creature, key: PropertyKey) -> Option<String> {
    let text = |value: &Option<String>| non_empty(value).map(str::to_string);

    match key {
        PropertyKey::ArmorClass => {
            (creature.armor_class != 0).then(|| creature.armor_class.to_string())
        }
        PropertyKey::HitPoints => {
            (!creature.hit_points.is_empty()).then(|| creature.hit_points.clone())
        }
        PropertyKey::Speed => format_speed(&creature.speed),
        PropertyKey::SavingThrows => text(&creature.saving_throws),
        PropertyKey::Skills => text(&creature.skills),
        PropertyKey::DamageVulnerabilities => text(&creature.damage_vulnerabilities),
        PropertyKey::DamageResistances => text(&creature.damage_resistances),
        PropertyKey::DamageImmunities => text(&creature.damage_immunities),
        PropertyKey::ConditionImmunities => text(&creature.condition_immunities),
        PropertyKey::Senses => text(&creature.senses),
        PropertyKey::Languages => text(&creature.languages),
        PropertyKey::Challenge => {
            (!creature.challenge_rating.is_empty()).then(|| creature.challenge_rating.clone())
        }
        PropertyKey::ProficiencyBonus => creature.proficiency_bonus.map(format_signed),
    }
}

fn render_actions(actions: &[Action]) -> String {
    actions
        .iter()
        .map(|action| format!("***{}.*** {}", action.name, action.description))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn write_section(md: &mut String, label: &str, body: &str) {
    let _ = write!(md, "\n**{}**\n{}\n{}\n", label, RULE, body);
}
