//! Speed cell parsing and formatting.
//!
//! Canonical form: `30ft., burrow 10ft., climb 20ft., fly 60ft. (hover), swim 30ft.`
//! Parsing also accepts the spaced `30 ft.` form used by the SRD catalog.

use once_cell::sync::Lazy;
use regex::Regex;

use super::model::Speed;

/// One comma-separated speed segment: optional movement mode, then `N ft`.
static SPEED_SEGMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:(burrow|climb|fly|swim)\s+)?(\d+)\s*ft\b").expect("Invalid speed regex")
});

static HOVER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\(hover\)").expect("Invalid hover regex"));

/// Parse a speed cell. Returns `None` when no speed value is present.
pub fn parse_speed(value: &str) -> Option<Speed> {
    let mut speed = Speed::default();
    let mut found = false;
    let mut base_found = false;

    for segment in value.split(',') {
        let Some(caps) = SPEED_SEGMENT.captures(segment.trim()) else {
            continue;
        };
        let Some(feet) = caps.get(2).and_then(|m| m.as_str().parse::<u32>().ok()) else {
            continue;
        };

        let mode = caps.get(1).map(|m| m.as_str().to_ascii_lowercase());
        match mode.as_deref() {
            Some("burrow") => speed.burrow = Some(feet),
            Some("climb") => speed.climb = Some(feet),
            Some("fly") => speed.fly = Some(feet),
            Some("swim") => speed.swim = Some(feet),
            _ if !base_found => {
                speed.base = feet;
                base_found = true;
            }
            _ => continue,
        }
        found = true;
    }

    speed.hover = HOVER.is_match(value);
    (found || speed.hover).then_some(speed)
}

/// Format a speed cell. Returns `None` when no speed is set at all.
///
/// A zero base speed is left out, so `swim 40ft.` formats back to itself.
pub fn format_speed(speed: &Speed) -> Option<String> {
    let nonzero = |value: Option<u32>| value.filter(|v| *v != 0);
    let mut segments = Vec::new();

    if speed.base != 0 {
        segments.push(format!("{}ft.", speed.base));
    }
    if let Some(burrow) = nonzero(speed.burrow) {
        segments.push(format!("burrow {}ft.", burrow));
    }
    if let Some(climb) = nonzero(speed.climb) {
        segments.push(format!("climb {}ft.", climb));
    }
    if let Some(fly) = nonzero(speed.fly) {
        segments.push(format!("fly {}ft.", fly));
    }
    if speed.hover {
        match segments.last_mut() {
            Some(last) => last.push_str(" (hover)"),
            None => segments.push("(hover)".to_string()),
        }
    }
    if let Some(swim) = nonzero(speed.swim) {
        segments.push(format!("swim {}ft.", swim));
    }

    (!segments.is_empty()).then(|| segments.join(", "))
}
