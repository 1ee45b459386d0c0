//! Test Fixtures
//!
//! Canonical stat block documents paired with the records they describe.
//! The Markdown constants are the exact emitter output for the records.

use crate::statblock::{AbilityScores, Action, Creature, Speed};

// =============================================================================
// Full Creature
// =============================================================================

pub const FULL_CREATURE_MD: &str = "### Test Creature
Medium humanoid (any race), any alignment
---
| Property | Value |
| :--- | :--- |
| **Armor Class** | 18 |
| **Hit Points** | 100 |
| **Speed** | 30ft. |
| **Saving Throws** | Str +8, Dex +4 |
| **Skills** | Perception +5, Stealth +4 |
| **Damage Vulnerabilities** | cold |
| **Damage Resistances** | fire, lightning |
| **Damage Immunities** | poison |
| **Condition Immunities** | charmed, frightened |
| **Senses** | darkvision 60ft., passive Perception 15 |
| **Languages** | Common, Elvish |
| **Challenge** | 5 (1,800 XP) |
| **Proficiency Bonus** | +3 |
---
| STR | DEX | CON | INT | WIS | CHA |
| :-: | :-: | :-: | :-: | :-: | :-: |
| 20 (+5) | 18 (+4) | 16 (+3) | 14 (+2) | 12 (+1) | 10 (+0) |
---

**ACTIONS**
---
***Multiattack.*** The creature makes two attacks.

***Greatsword.*** *Melee Weapon Attack:* +8 to hit, reach 5ft., one target. *Hit:* 12 (2d6 + 5) slashing damage.

**BONUS ACTIONS**
---
***Aggressive.*** As a bonus action, the creature can move up to its speed toward a hostile creature that it can see.

**REACTIONS**
---
***Parry.*** The creature adds 3 to its AC against one melee attack that would hit it. To do so, the creature must see the attacker and be wielding a melee weapon.

**LEGENDARY ACTIONS**
---
***Attack.*** The creature makes one attack.

**OPTIONS**
---
***Variant: Extra Tough.*** The creature has an extra 20 hit points.

**DESCRIPTION**
---
A test creature for unit tests.

**NOTES**
---
This is a note.";

pub fn full_creature() -> Creature {
    Creature {
        name: "Test Creature".to_string(),
        size: "Medium".to_string(),
        creature_type: "humanoid".to_string(),
        species: Some("any race".to_string()),
        alignment: "any alignment".to_string(),
        armor_class: 18,
        hit_points: "100".to_string(),
        speed: Speed {
            base: 30,
            ..Speed::default()
        },
        ability_scores: AbilityScores::from_array([20, 18, 16, 14, 12, 10]),
        saving_throws: Some("Str +8, Dex +4".to_string()),
        skills: Some("Perception +5, Stealth +4".to_string()),
        damage_vulnerabilities: Some("cold".to_string()),
        damage_resistances: Some("fire, lightning".to_string()),
        damage_immunities: Some("poison".to_string()),
        condition_immunities: Some("charmed, frightened".to_string()),
        senses: Some("darkvision 60ft., passive Perception 15".to_string()),
        languages: Some("Common, Elvish".to_string()),
        challenge_rating: "5 (1,800 XP)".to_string(),
        proficiency_bonus: Some(3),
        actions: vec![
            Action::new("Multiattack", "The creature makes two attacks."),
            Action::new(
                "Greatsword",
                "*Melee Weapon Attack:* +8 to hit, reach 5ft., one target. *Hit:* 12 (2d6 + 5) slashing damage.",
            ),
        ],
        bonus_actions: vec![Action::new(
            "Aggressive",
            "As a bonus action, the creature can move up to its speed toward a hostile creature that it can see.",
        )],
        reactions: vec![Action::new(
            "Parry",
            "The creature adds 3 to its AC against one melee attack that would hit it. To do so, the creature must see the attacker and be wielding a melee weapon.",
        )],
        legendary_actions: vec![Action::new("Attack", "The creature makes one attack.")],
        options: vec![Action::new(
            "Variant: Extra Tough",
            "The creature has an extra 20 hit points.",
        )],
        description: Some("A test creature for unit tests.".to_string()),
        notes: Some("This is a note.".to_string()),
    }
}

// =============================================================================
// Mister Witch
// =============================================================================

pub const MISTER_WITCH_MD: &str = "### Mister Witch
Medium Humanoid (Elf, Shadar-kai), Chaotic Good
---
| Property | Value |
| :--- | :--- |
| **Armor Class** | 10 |
| **Hit Points** | 82 (11d8 + 33) |
| **Speed** | 30ft. |
| **Saving Throws** | INT +5, WIS +3 |
| **Skills** | Arcana +5, Deception +4, Perception +3 |
| **Damage Resistances** | necrotic |
| **Senses** | darkvision 60ft., passive Perception 13 |
| **Languages** | Common, Elvish, Sylvan |
| **Challenge** | 3 |
| **Proficiency Bonus** | +2 |
---
| STR | DEX | CON | INT | WIS | CHA |
| :-: | :-: | :-: | :-: | :-: | :-: |
| 14 (+2) | 11 (+0) | 16 (+3) | 16 (+3) | 13 (+1) | 14 (+2) |
---

**ACTIONS**
---
***Multiattack.*** Witch makes two Cane attacks.

***Cane.*** *Melee Weapon Attack:* +4 to hit, reach 5 ft., one target. *Hit:* 4 (1d4 + 2) bludgeoning damage plus 6 (1d12) necrotic damage.

***Spellcasting.*** While carrying the *Witchlight watch*, Witch casts one of the following spells, requiring no spell components and using Intelligence as the spellcasting ability (spell save DC 13, + 5 to hit with spell attacks):

At will: *fire bolt*, *invisibility* (after casting, roll a d8; on a roll of 3 or 8, Witch can't cast the spell again until the next dawn), *message*

**BONUS ACTIONS**
---
***Blessing of the Raven Queen (1/day).*** Witch magically teleports, along with any equipment he is wearing or carrying, up to 30 feet to an unoccupied space he can see. Until the start of his next turn, he appears ghostly and gains resistance to all damage.

**NOTES**
---
***Fey Ancestry.*** Witch has advantage on saving throws against being charmed, and magic can't put him to sleep.

***Special Equipment.*** Witch carries and is attuned to the *Witchlight watch*.";

pub fn mister_witch() -> Creature {
    Creature {
        name: "Mister Witch".to_string(),
        size: "Medium".to_string(),
        creature_type: "Humanoid".to_string(),
        species: Some("Elf, Shadar-kai".to_string()),
        alignment: "Chaotic Good".to_string(),
        armor_class: 10,
        hit_points: "82 (11d8 + 33)".to_string(),
        speed: Speed {
            base: 30,
            ..Speed::default()
        },
        ability_scores: AbilityScores::from_array([14, 11, 16, 16, 13, 14]),
        saving_throws: Some("INT +5, WIS +3".to_string()),
        skills: Some("Arcana +5, Deception +4, Perception +3".to_string()),
        damage_resistances: Some("necrotic".to_string()),
        senses: Some("darkvision 60ft., passive Perception 13".to_string()),
        languages: Some("Common, Elvish, Sylvan".to_string()),
        challenge_rating: "3".to_string(),
        proficiency_bonus: Some(2),
        actions: vec![
            Action::new("Multiattack", "Witch makes two Cane attacks."),
            Action::new(
                "Cane",
                "*Melee Weapon Attack:* +4 to hit, reach 5 ft., one target. *Hit:* 4 (1d4 + 2) bludgeoning damage plus 6 (1d12) necrotic damage.",
            ),
            Action::new(
                "Spellcasting",
                "While carrying the *Witchlight watch*, Witch casts one of the following spells, requiring no spell components and using Intelligence as the spellcasting ability (spell save DC 13, + 5 to hit with spell attacks):\n\nAt will: *fire bolt*, *invisibility* (after casting, roll a d8; on a roll of 3 or 8, Witch can't cast the spell again until the next dawn), *message*",
            ),
        ],
        bonus_actions: vec![Action::new(
            "Blessing of the Raven Queen (1/day)",
            "Witch magically teleports, along with any equipment he is wearing or carrying, up to 30 feet to an unoccupied space he can see. Until the start of his next turn, he appears ghostly and gains resistance to all damage.",
        )],
        notes: Some("***Fey Ancestry.*** Witch has advantage on saving throws against being charmed, and magic can't put him to sleep.\n\n***Special Equipment.*** Witch carries and is attuned to the *Witchlight watch*.".to_string()),
        ..Creature::default()
    }
}

// =============================================================================
// Minimal Creature
// =============================================================================

pub const MINIMAL_CREATURE_MD: &str = "### Minimal Creature
Small beast, unaligned
---
| Property | Value |
| :--- | :--- |
| **Armor Class** | 10 |
| **Hit Points** | 1 |
| **Speed** | 10ft. |
| **Challenge** | 0 (10 XP) |
---
| STR | DEX | CON | INT | WIS | CHA |
| :-: | :-: | :-: | :-: | :-: | :-: |
| 1 (-5) | 1 (-5) | 1 (-5) | 1 (-5) | 1 (-5) | 1 (-5) |
---";

pub fn minimal_creature() -> Creature {
    Creature {
        name: "Minimal Creature".to_string(),
        size: "Small".to_string(),
        creature_type: "beast".to_string(),
        alignment: "unaligned".to_string(),
        armor_class: 10,
        hit_points: "1".to_string(),
        speed: Speed {
            base: 10,
            ..Speed::default()
        },
        ability_scores: AbilityScores::from_array([1; 6]),
        challenge_rating: "0 (10 XP)".to_string(),
        ..Creature::default()
    }
}
