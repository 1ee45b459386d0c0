//! Action-Block Classifier
//!
//! Turns a section body into labelled actions. Paragraphs are grouped into
//! blocks, each block starting at a paragraph that opens with `***`, so a
//! multi-paragraph description stays attached to its label.

use once_cell::sync::Lazy;
use regex::Regex;

use super::model::Action;

const BLOCK_MARKER: &str = "***";

/// Matches `***Label.*** description` across lines.
static ACTION_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^\*\*\*(.*?)\*\*\*\s*(.*)$").expect("Invalid action block regex")
});

/// Split text into paragraphs separated by blank (or whitespace-only) lines.
fn paragraphs(text: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                paragraphs.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        paragraphs.push(current.join("\n"));
    }

    paragraphs
}

/// Merge paragraphs into blocks; a paragraph starting with `***` opens a new block.
fn action_blocks(text: &str) -> Vec<String> {
    let mut blocks: Vec<String> = Vec::new();

    for paragraph in paragraphs(text) {
        match blocks.last_mut() {
            Some(block) if !paragraph.trim_start().starts_with(BLOCK_MARKER) => {
                block.push_str("\n\n");
                block.push_str(&paragraph);
            }
            _ => blocks.push(paragraph),
        }
    }

    blocks
}

fn parse_block(block: &str) -> Option<Action> {
    let caps = ACTION_BLOCK.captures(block.trim())?;
    let label = caps.get(1)?.as_str().trim();
    let name = label.strip_suffix('.').unwrap_or(label);
    let description = caps.get(2).map_or("", |m| m.as_str()).trim();

    Some(Action::new(name, description))
}

/// Extract the actions of a section in source order.
///
/// Blocks without a `***Label.***` opener are skipped, so plain prose yields
/// an empty list.
pub fn classify_actions(text: &str) -> Vec<Action> {
    action_blocks(text)
        .iter()
        .filter_map(|block| parse_block(block))
        .collect()
}
