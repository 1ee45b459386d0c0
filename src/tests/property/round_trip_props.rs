//! Property-based round-trip tests
//!
//! Tests invariants:
//! - parse_creature(render_creature(c)) == c for every populated field
//! - rendering a parsed rendering changes nothing
//! - parse_initiative(render_initiative(t)) == t with combatants sorted

use proptest::collection::vec;
use proptest::option;
use proptest::prelude::*;

use crate::initiative::{parse_initiative, render_initiative, Combatant, InitiativeTracker};
use crate::statblock::header_line::SIZES;
use crate::statblock::{parse_creature, render_creature, AbilityScores, Action, Creature, Speed};

// ============================================================================
// Strategies for generating test inputs
// ============================================================================

/// Capitalized words, never containing table or emphasis markup.
fn arb_title() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{1,8}( [A-Z][a-z]{1,8}){0,2}"
}

fn arb_words() -> impl Strategy<Value = String> {
    "[a-z]{1,8}( [a-z]{1,8}){0,5}"
}

fn arb_sentence() -> impl Strategy<Value = String> {
    arb_words().prop_map(|words| format!("{}.", words))
}

fn arb_speed() -> impl Strategy<Value = Speed> {
    (
        prop_oneof![Just(0u32), 5u32..=120],
        option::of(5u32..=120),
        option::of(5u32..=120),
        option::of(5u32..=120),
        any::<bool>(),
        option::of(5u32..=120),
    )
        .prop_map(|(base, burrow, climb, fly, hover, swim)| Speed {
            base,
            burrow,
            climb,
            fly,
            hover,
            swim,
        })
}

fn arb_abilities() -> impl Strategy<Value = AbilityScores> {
    proptest::array::uniform6(1i32..=30).prop_map(AbilityScores::from_array)
}

fn arb_actions() -> impl Strategy<Value = Vec<Action>> {
    vec(
        (arb_title(), arb_sentence()).prop_map(|(name, desc)| Action::new(name, desc)),
        0..4,
    )
}

fn arb_proficiency() -> impl Strategy<Value = Option<i32>> {
    prop_oneof![
        Just(None),
        Just(Some(0)),
        (1i32..=9).prop_map(Some),
        (-3i32..=-1).prop_map(Some),
    ]
}

fn arb_header() -> impl Strategy<Value = (String, String, Option<String>, String)> {
    (
        proptest::sample::select(SIZES),
        "[a-z]{3,10}",
        option::of(arb_title()),
        arb_words(),
    )
        .prop_map(|(size, kind, species, alignment)| (size.to_string(), kind, species, alignment))
}

fn arb_properties() -> impl Strategy<Value = [Option<String>; 8]> {
    proptest::array::uniform8(option::of(arb_words()))
}

prop_compose! {
    fn arb_creature()(
        name in arb_title(),
        header in arb_header(),
        armor_class in 1i32..=30,
        hit_points in "[1-9][0-9]{0,2}( \\([1-9]d(4|6|8|10|12) \\+ [0-9]{1,2}\\))?",
        speed in arb_speed(),
        ability_scores in arb_abilities(),
        properties in arb_properties(),
        challenge_rating in "[0-9]{1,2}( \\([1-9],[0-9]{3} XP\\))?",
        proficiency_bonus in arb_proficiency(),
        action_lists in (arb_actions(), arb_actions(), arb_actions(), arb_actions(), arb_actions()),
        description in option::of(arb_sentence()),
        notes in option::of(arb_sentence()),
    ) -> Creature {
        let (size, creature_type, species, alignment) = header;
        let [saving_throws, skills, damage_vulnerabilities, damage_resistances, damage_immunities, condition_immunities, senses, languages] = properties;
        let (actions, bonus_actions, reactions, legendary_actions, options) = action_lists;

        Creature {
            name,
            species,
            creature_type,
            size,
            alignment,
            armor_class,
            hit_points,
            speed,
            ability_scores,
            saving_throws,
            skills,
            damage_vulnerabilities,
            damage_resistances,
            damage_immunities,
            condition_immunities,
            senses,
            languages,
            challenge_rating,
            proficiency_bonus,
            notes,
            actions,
            bonus_actions,
            reactions,
            legendary_actions,
            options,
            description,
        }
    }
}

fn arb_tracker() -> impl Strategy<Value = InitiativeTracker> {
    (
        1u32..=50,
        vec(
            (arb_title(), -5i32..=30, 0i32..=300)
                .prop_map(|(name, initiative, damage)| Combatant::new(name, initiative, damage)),
            0..8,
        ),
    )
        .prop_map(|(round, combatants)| InitiativeTracker { combatants, round })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Property: every populated field survives render then parse
    #[test]
    fn prop_creature_round_trip(creature in arb_creature()) {
        let md = render_creature(&creature);
        prop_assert_eq!(parse_creature(&md), creature);
    }

    /// Property: rendering is a fixed point after one round trip
    #[test]
    fn prop_render_is_idempotent(creature in arb_creature()) {
        let md = render_creature(&creature);
        prop_assert_eq!(render_creature(&parse_creature(&md)), md);
    }

    /// Property: rendered documents carry no leading or trailing whitespace
    #[test]
    fn prop_render_is_trimmed(creature in arb_creature()) {
        let md = render_creature(&creature);
        prop_assert_eq!(md.trim(), md.as_str());
    }

    /// Property: initiative round trip yields the stably sorted combatant list
    #[test]
    fn prop_initiative_round_trip(tracker in arb_tracker()) {
        let parsed = parse_initiative(&render_initiative(&tracker));

        let mut expected = tracker.clone();
        expected.combatants.sort_by(|a, b| b.initiative.cmp(&a.initiative));
        prop_assert_eq!(parsed, expected);
    }
}
