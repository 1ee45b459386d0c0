//! Document Segmenter
//!
//! Splits a stat block document into its name heading, named sections,
//! table lines and preamble lines using an explicit line-classification
//! state machine.
//!
//! # Line precedence
//!
//! Every line is classified once, checking in this order:
//!
//! 1. Section header: `**ACTIONS**` (bold, capitals and spaces only)
//! 2. Name heading: `### Name`
//! 3. Rule: `---`
//! 4. Table row: first non-blank character is `|`
//! 5. Text: anything else
//!
//! # States
//!
//! - `Preamble`: before any section, or after a name heading. Text lines are
//!   kept as header-line candidates.
//! - `InTable`: inside a run of table rows outside any section.
//! - `InSection`: accumulating a section body. A rule directly after the
//!   section header is a visual separator and is dropped; later rules are
//!   body content.
//!
//! Table rows are collected into [`Segments::table_lines`] in every state.

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches `**BONUS ACTIONS**` style section headers on a trimmed line.
static SECTION_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\*\*([A-Z\s]+)\*\*$").expect("Invalid section header regex")
});

const HEADING_PREFIX: &str = "### ";
const RULE: &str = "---";

// ============================================================================
// Output
// ============================================================================

/// A named section and its body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Trimmed header label, e.g. "LEGENDARY ACTIONS".
    pub label: String,
    /// Body lines joined with newlines, trimmed.
    pub body: String,
}

/// Result of segmenting one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segments {
    /// Name from the last `### Name` heading.
    pub name: Option<String>,
    /// Sections in source order.
    pub sections: Vec<Section>,
    /// Trimmed table rows in source order, regardless of section.
    pub table_lines: Vec<String>,
    /// Non-blank text lines seen outside any section or table.
    pub preamble_lines: Vec<String>,
}

// ============================================================================
// Line classification
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind<'a> {
    SectionHeader(&'a str),
    Heading(&'a str),
    Rule,
    TableRow(&'a str),
    Text,
}

impl<'a> LineKind<'a> {
    fn classify(line: &'a str) -> Self {
        let trimmed = line.trim();

        if let Some(caps) = SECTION_HEADER.captures(trimmed) {
            let label = caps.get(1).map_or("", |m| m.as_str()).trim();
            if !label.is_empty() {
                return LineKind::SectionHeader(label);
            }
        }

        if let Some(name) = trimmed.strip_prefix(HEADING_PREFIX) {
            return LineKind::Heading(name.trim());
        }

        if trimmed == RULE {
            return LineKind::Rule;
        }

        if trimmed.starts_with('|') {
            return LineKind::TableRow(trimmed);
        }

        LineKind::Text
    }
}

// ============================================================================
// State machine
// ============================================================================

#[derive(Debug)]
enum State<'a> {
    Preamble,
    InTable,
    InSection {
        label: &'a str,
        lines: Vec<&'a str>,
        /// True until the first line after the header has been seen.
        fresh: bool,
    },
}

struct Segmenter<'a> {
    state: State<'a>,
    segments: Segments,
}

impl<'a> Segmenter<'a> {
    fn new() -> Self {
        Self {
            state: State::Preamble,
            segments: Segments::default(),
        }
    }

    fn feed(&mut self, line: &'a str) {
        match LineKind::classify(line) {
            LineKind::SectionHeader(label) => {
                self.close_section();
                self.state = State::InSection {
                    label,
                    lines: Vec::new(),
                    fresh: true,
                };
            }
            LineKind::Heading(name) => {
                self.close_section();
                self.state = State::Preamble;
                self.segments.name = Some(name.to_string());
            }
            LineKind::Rule => match &mut self.state {
                State::InSection { fresh, lines, .. } => {
                    if !*fresh {
                        lines.push(line);
                    }
                    *fresh = false;
                }
                _ => self.state = State::Preamble,
            },
            LineKind::TableRow(row) => {
                self.segments.table_lines.push(row.to_string());
                match &mut self.state {
                    State::InSection { fresh, lines, .. } => {
                        *fresh = false;
                        lines.push(line);
                    }
                    _ => self.state = State::InTable,
                }
            }
            LineKind::Text => match &mut self.state {
                State::InSection { fresh, lines, .. } => {
                    *fresh = false;
                    lines.push(line);
                }
                _ => {
                    self.state = State::Preamble;
                    let trimmed = line.trim();
                    if !trimmed.is_empty() {
                        self.segments.preamble_lines.push(trimmed.to_string());
                    }
                }
            },
        }
    }

    fn close_section(&mut self) {
        if let State::InSection { label, lines, .. } =
            std::mem::replace(&mut self.state, State::Preamble)
        {
            self.segments.sections.push(Section {
                label: label.to_string(),
                body: lines.join("\n").trim().to_string(),
            });
        }
    }

    fn finish(mut self) -> Segments {
        self.close_section();
        self.segments
    }
}

/// Segment a stat block document.
pub fn segment(content: &str) -> Segments {
    let mut segmenter = Segmenter::new();
    for line in content.lines() {
        segmenter.feed(line);
    }
    segmenter.finish()
}
