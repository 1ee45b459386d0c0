//! Ability score modifiers.

/// Numeric modifier for an ability score: `floor((score - 10) / 2)`.
///
/// Computed in `i64` so extreme scores cannot overflow; the halved result
/// always fits back into `i32`.
pub fn modifier_value(score: i32) -> i32 {
    let modifier = (i64::from(score) - 10).div_euclid(2);
    i32::try_from(modifier).unwrap_or(i32::MIN)
}

/// Display form of the modifier with the sign always shown ("+0", "-5").
pub fn ability_modifier(score: i32) -> String {
    format_signed(modifier_value(score))
}

/// Format an integer with an explicit sign.
pub(crate) fn format_signed(value: i32) -> String {
    if value >= 0 {
        format!("+{}", value)
    } else {
        value.to_string()
    }
}
