//! Creature Assembler
//!
//! Merges the segmenter, classifier, table and header-line outputs into one
//! [`Creature`]. Parsing never fails: anything unrecognized leaves the
//! corresponding field at its default.

use super::actions::classify_actions;
use super::header_line::parse_header_line;
use super::model::{ActionKind, Creature};
use super::segmenter::{segment, Section};
use super::tables::{extract_tables, Properties};

const DESCRIPTION_SECTION: &str = "DESCRIPTION";
const NOTES_SECTION: &str = "NOTES";

/// Parse a Markdown stat block into a creature record.
pub fn parse_creature(content: &str) -> Creature {
    let segments = segment(content);
    let mut creature = Creature::default();

    for line in &segments.preamble_lines {
        if let Some(header) = parse_header_line(line) {
            creature.size = header.size;
            creature.creature_type = header.creature_type;
            if header.species.is_some() {
                creature.species = header.species;
            }
            if let Some(alignment) = header.alignment {
                creature.alignment = alignment;
            }
        }
    }

    if let Some(name) = segments.name {
        creature.name = name;
    }

    for section in &segments.sections {
        apply_section(&mut creature, section);
    }

    let tables = extract_tables(&segments.table_lines);
    if let Some(properties) = tables.properties {
        apply_properties(&mut creature, properties);
    }
    if let Some(abilities) = tables.abilities {
        creature.ability_scores = abilities;
    }

    log::debug!(
        "Parsed stat block '{}' ({} sections, {} table rows)",
        creature.name,
        segments.sections.len(),
        segments.table_lines.len()
    );

    creature
}

fn apply_section(creature: &mut Creature, section: &Section) {
    if section.body.is_empty() {
        return;
    }

    match section.label.as_str() {
        DESCRIPTION_SECTION => creature.description = Some(section.body.clone()),
        NOTES_SECTION => creature.notes = Some(section.body.clone()),
        label => match ActionKind::from_section_label(label) {
            Some(kind) => {
                let actions = classify_actions(&section.body);
                if !actions.is_empty() {
                    *creature.actions_of_mut(kind) = actions;
                }
            }
            None => log::debug!("Ignoring unknown stat block section '{}'", label),
        },
    }
}

fn apply_properties(creature: &mut Creature, properties: Properties) {
    if let Some(armor_class) = properties.armor_class {
        creature.armor_class = armor_class;
    }
    if let Some(hit_points) = properties.hit_points {
        creature.hit_points = hit_points;
    }
    if let Some(speed) = properties.speed {
        creature.speed = speed;
    }
    if let Some(challenge) = properties.challenge {
        creature.challenge_rating = challenge;
    }

    let non_empty = |value: Option<String>| value.filter(|v| !v.is_empty());
    creature.saving_throws = non_empty(properties.saving_throws);
    creature.skills = non_empty(properties.skills);
    creature.damage_vulnerabilities = non_empty(properties.damage_vulnerabilities);
    creature.damage_resistances = non_empty(properties.damage_resistances);
    creature.damage_immunities = non_empty(properties.damage_immunities);
    creature.condition_immunities = non_empty(properties.condition_immunities);
    creature.senses = non_empty(properties.senses);
    creature.languages = non_empty(properties.languages);
    creature.proficiency_bonus = properties.proficiency_bonus;
}
