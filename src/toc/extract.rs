//! Heading extraction and level validation.
//!
//! Scans a line buffer for ATX headings, skipping fenced code blocks and the
//! first N lines, and validates that the level sequence can be represented as
//! a single nested list rooted at the first heading's level.

use crate::error::{Error, Result};

/// One qualifying heading line, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// The line as written, trimmed.
    pub raw_line: String,
    /// Count of leading `#` characters (1-based depth).
    pub level: usize,
    /// Two spaces per level below the document's initial level.
    pub indent: String,
}

/// Extract the ordered heading sequence from a document.
///
/// Lines at or before `skip_first_n_lines` (1-indexed) are never treated as
/// headings, but they still toggle fenced-code state: the fence toggle runs
/// first, matching the order lines are scanned in.
///
/// Fails with [`Error::HeaderLevelOutOfBound`] when a heading climbs above
/// the first heading's level, and with [`Error::HeaderLevelNotContinuous`]
/// when a heading drops more than one level deeper than its predecessor.
/// Upward jumps of any size are legal.
pub fn extract_headings(lines: &[&str], skip_first_n_lines: usize) -> Result<Vec<Heading>> {
    let mut headings = Vec::new();
    let mut in_code_block = false;
    let mut initial_level = 0;
    let mut prev_level = 0;

    for (i, line) in lines.iter().enumerate() {
        let trimmed = line.trim();

        if trimmed.starts_with("```") {
            in_code_block = !in_code_block;
        }

        if i + 1 <= skip_first_n_lines {
            continue;
        }

        if !trimmed.starts_with('#') || in_code_block {
            continue;
        }

        let level = trimmed.chars().take_while(|&c| c == '#').count();

        if headings.is_empty() {
            initial_level = level;
            prev_level = level;
        }

        if level < initial_level {
            return Err(Error::HeaderLevelOutOfBound {
                line: i + 1,
                content: trimmed.to_string(),
                level,
                initial: initial_level,
            });
        }

        if level > prev_level + 1 {
            return Err(Error::HeaderLevelNotContinuous {
                line: i + 1,
                content: trimmed.to_string(),
                prev: prev_level,
                level,
            });
        }

        headings.push(Heading {
            raw_line: trimmed.to_string(),
            level,
            indent: "  ".repeat(level - initial_level),
        });

        prev_level = level;
    }

    Ok(headings)
}
