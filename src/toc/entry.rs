//! ToC entries and anchor deduplication.

use std::collections::{HashMap, HashSet};

use crate::toc::extract::Heading;
use crate::toc::options::SlugStyle;
use crate::toc::slug;

/// One rendered line of the table of contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    /// Heading text with the ATX prefix stripped and links flattened.
    pub display_text: String,
    /// Leading indentation, two spaces per nesting level.
    pub indent: String,
    /// Anchor fragment including the leading `#`. Unique after
    /// [`deduplicate_anchors`] has run.
    pub anchor: String,
}

impl TocEntry {
    pub fn new(heading: &Heading, style: SlugStyle) -> Self {
        TocEntry {
            display_text: slug::display_text(&heading.raw_line),
            indent: heading.indent.clone(),
            anchor: slug::encode(&heading.raw_line, style),
        }
    }

    /// Render as a Markdown list item: `{indent}- [{display}]({anchor})`.
    pub fn render(&self) -> String {
        format!("{}- [{}]({})", self.indent, self.display_text, self.anchor)
    }
}

/// Make every anchor in the list unique.
///
/// First occurrences keep their anchor; the Nth occurrence (N >= 2) of a
/// repeated anchor gets `-{N-1}` appended, matching how GitHub and GitLab
/// number colliding heading anchors. Anchors that never collide are untouched
/// regardless of position.
pub fn deduplicate_anchors(entries: &mut [TocEntry]) {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut duplicated: HashSet<String> = HashSet::new();

    for entry in entries.iter() {
        if !seen.insert(entry.anchor.as_str()) {
            duplicated.insert(entry.anchor.clone());
        }
    }

    if duplicated.is_empty() {
        return;
    }

    let mut counter: HashMap<String, usize> = HashMap::new();

    for entry in entries.iter_mut() {
        if duplicated.contains(&entry.anchor) {
            let count = counter.entry(entry.anchor.clone()).or_insert(0);
            *count += 1;
            if *count >= 2 {
                entry.anchor = format!("{}-{}", entry.anchor, *count - 1);
            }
        }
    }
}
