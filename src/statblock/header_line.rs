//! Header-Line Extractor
//!
//! Decomposes the summary line under the creature name:
//! `Medium humanoid (any race), any alignment`.

use once_cell::sync::Lazy;
use regex::Regex;

/// Size tokens accepted at the start of a header line.
pub const SIZES: &[&str] = &["Tiny", "Small", "Medium", "Large", "Huge", "Gargantuan"];

static HEADER_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(Tiny|Small|Medium|Large|Huge|Gargantuan) ([a-zA-Z\s]+(?:\s\(.*\))?)(?:, (.*))?$",
    )
    .expect("Invalid header line regex")
});

/// Fields decoded from a header line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderLine {
    pub size: String,
    pub creature_type: String,
    pub species: Option<String>,
    pub alignment: Option<String>,
}

/// Parse a header line; `None` if the line does not start with a size token
/// followed by a type.
pub fn parse_header_line(line: &str) -> Option<HeaderLine> {
    let caps = HEADER_LINE.captures(line.trim())?;

    let size = caps.get(1)?.as_str().to_string();
    let type_and_species = caps.get(2)?.as_str();

    let (creature_type, species) = match type_and_species.split_once(" (") {
        Some((kind, species)) => {
            let species = species.strip_suffix(')').unwrap_or(species).trim();
            (kind, (!species.is_empty()).then(|| species.to_string()))
        }
        None => (type_and_species, None),
    };

    let alignment = caps
        .get(3)
        .map(|m| m.as_str().trim())
        .filter(|a| !a.is_empty())
        .map(str::to_string);

    Some(HeaderLine {
        size,
        creature_type: creature_type.trim().to_string(),
        species,
        alignment,
    })
}

/// Format a header line. Returns `None` unless size, type and alignment are all set.
pub fn format_header_line(
    size: &str,
    creature_type: &str,
    species: Option<&str>,
    alignment: &str,
) -> Option<String> {
    if size.is_empty() || creature_type.is_empty() || alignment.is_empty() {
        return None;
    }

    let line = match species.filter(|s| !s.is_empty()) {
        Some(species) => format!("{} {} ({}), {}", size, creature_type, species, alignment),
        None => format!("{} {}, {}", size, creature_type, alignment),
    };
    Some(line)
}
