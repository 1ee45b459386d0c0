//! Initiative Document Tests

use crate::initiative::{parse_initiative, render_initiative, Combatant, InitiativeTracker};

const SESSION_NOTE: &str = "## Encounter: Goblin Ambush

Round: 3
| Name | Initiative | Damage |
|---|---|---|
| Player 1 | 20 | 10 |
| Player 2 | 15 | 5 |
| Monster 1 | 10 | 0 |

The goblins flee after round 4.";

#[test]
fn test_table_embedded_in_note() {
    let tracker = parse_initiative(SESSION_NOTE);
    assert_eq!(tracker.round, 3);
    assert_eq!(tracker.combatants.len(), 3);
    assert_eq!(tracker.combatants[2], Combatant::new("Monster 1", 10, 0));
}

#[test]
fn test_rendered_table_is_canonical() {
    let tracker = parse_initiative(SESSION_NOTE);
    assert_eq!(
        render_initiative(&tracker),
        "Round: 3\n| Name | Initiative | Damage |\n|---|---|---|\n| Player 1 | 20 | 10 |\n| Player 2 | 15 | 5 |\n| Monster 1 | 10 | 0 |"
    );
}

#[test]
fn test_empty_tracker_renders_header_only() {
    assert_eq!(
        render_initiative(&InitiativeTracker::default()),
        "Round: 1\n| Name | Initiative | Damage |\n|---|---|---|"
    );
}

#[test]
fn test_prose_only_note() {
    assert_eq!(
        parse_initiative("Nothing to see here.\nNo combat today."),
        InitiativeTracker::default()
    );
}
