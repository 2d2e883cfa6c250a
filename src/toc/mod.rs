//! Table-of-contents creation for Markdown documents.
//!
//! The design separates pure transformation from I/O:
//!
//! - [`extract`]: heading extraction and level validation
//! - [`slug`]: heading text → anchor fragment, per platform style
//! - [`entry`]: ToC entries and anchor collision numbering
//! - [`render`]: the placeholder-delimited block (title, rules)
//! - [`rewrite`]: splicing the block into a line buffer
//!
//! [`generate`] runs the whole pure pipeline over a line buffer;
//! [`create_toc`] wraps it with file I/O for one Markdown file.
//!
//! ## Idempotence
//!
//! The managed region is delimited by `<!--TOC-->` placeholder lines.
//! Rewriting replaces the region between the first two tags wholesale, so
//! running [`create_toc`] repeatedly against its own output converges after
//! the first run: same headings in, same block out, same tags found.

pub mod entry;
pub mod extract;
pub mod options;
pub mod render;
pub mod rewrite;
pub mod slug;

use std::fs;
use std::path::Path;

use log::debug;

use crate::error::Result;
use self::entry::TocEntry;
pub use self::rewrite::TOC_TAG;

/// Result of running the pure pipeline over one document buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocOutcome {
    /// The rendered ToC lines, in document order.
    pub toc_lines: Vec<String>,
    /// The rewritten buffer, when a rewrite applies. `None` means no action
    /// was required (no placeholder pair and proactive insertion declined).
    pub rewritten: Option<Vec<String>>,
}

impl TocOutcome {
    fn no_action() -> Self {
        TocOutcome {
            toc_lines: Vec::new(),
            rewritten: None,
        }
    }
}

/// Run the full pipeline over a line buffer: extract and validate headings,
/// encode and deduplicate anchors, render the block, and splice it in.
///
/// Returns a no-action outcome when the buffer has no placeholder pair and
/// either proactive insertion is disabled or no headings were found beyond
/// the skipped prefix (an empty ToC is never injected into a file with no
/// structure).
pub fn generate(lines: &[&str], opts: &options::TocOptions) -> Result<TocOutcome> {
    let pair = rewrite::find_placeholder_pair(lines);

    if pair.is_none() && !opts.proactive {
        return Ok(TocOutcome::no_action());
    }

    let headings = extract::extract_headings(lines, opts.skip_first_n_lines)?;

    if pair.is_none() && headings.is_empty() {
        return Ok(TocOutcome::no_action());
    }

    let mut entries: Vec<TocEntry> = headings
        .iter()
        .map(|h| TocEntry::new(h, opts.style))
        .collect();
    entry::deduplicate_anchors(&mut entries);

    let toc_lines: Vec<String> = entries.iter().map(TocEntry::render).collect();

    let rewritten = match pair {
        Some(span) => {
            debug!("replacing managed region at lines {}..={}", span.0 + 1, span.1 + 1);
            rewrite::splice_managed_region(lines, span, &toc_lines, opts)
        }
        None => {
            debug!("no placeholder pair, inserting a new managed block");
            rewrite::insert_without_placeholder(lines, &toc_lines, opts)
        }
    };

    Ok(TocOutcome {
        toc_lines,
        rewritten: Some(rewritten),
    })
}

/// Create or refresh the ToC for one Markdown file.
///
/// Reads the file as UTF-8, runs [`generate`], persists the rewritten buffer
/// when `in_place` is set, and returns the rendered ToC lines. Line endings
/// are normalized to a single `\n` per line on write; all content outside the
/// managed region is preserved verbatim.
pub fn create_toc(path: &Path, opts: &options::TocOptions) -> Result<Vec<String>> {
    if !opts.quiet {
        eprintln!("----------------------");
        eprintln!("{}", path.display());
        eprintln!();
    }

    let raw = fs::read_to_string(path)?;
    let lines: Vec<&str> = raw.lines().collect();

    let outcome = generate(&lines, opts)?;

    if !opts.quiet {
        for line in &outcome.toc_lines {
            eprintln!("{line}");
        }
    }

    if opts.in_place
        && let Some(rewritten) = &outcome.rewritten
    {
        let mut content = String::with_capacity(raw.len());
        for line in rewritten {
            content.push_str(line);
            content.push('\n');
        }
        fs::write(path, content)?;
        debug!("wrote {} lines to {}", rewritten.len(), path.display());
    }

    Ok(outcome.toc_lines)
}
