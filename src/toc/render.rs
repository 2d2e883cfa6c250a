//! Rendering the managed ToC block.
//!
//! The inner content is everything between the two placeholder tags; the
//! proactive block wraps it in a fresh tag pair for documents that have no
//! managed region yet.

use crate::toc::options::TocOptions;
use crate::toc::rewrite::TOC_TAG;

/// Build the lines between the placeholder tags: an optional horizontal rule
/// and title, the ToC entries, and the blank lines separating them.
///
/// Every combination of `add_toc_title` / `add_horizontal_rules` is honored,
/// including both disabled (a bare list with a leading blank line).
pub fn build_inner_content(toc_lines: &[String], opts: &TocOptions) -> Vec<String> {
    let rule = opts.horizontal_rule_style.as_line();
    let mut content = vec![String::new()];

    if opts.add_horizontal_rules {
        content.push(rule.to_string());
        content.push(String::new());
    }

    if opts.add_toc_title {
        content.push(format!("**{}**", opts.toc_title));
        content.push(String::new());
    }

    if toc_lines.is_empty() {
        content.push(String::new());
    } else {
        content.extend(toc_lines.iter().cloned());
        content.push(String::new());
    }

    if opts.add_horizontal_rules {
        content.push(rule.to_string());
        content.push(String::new());
    }

    content
}

/// Build a standalone managed block: `tag, <inner content>, tag`.
pub fn build_proactive_block(toc_lines: &[String], opts: &TocOptions) -> Vec<String> {
    let mut block = vec![TOC_TAG.to_string()];
    block.extend(build_inner_content(toc_lines, opts));
    block.push(TOC_TAG.to_string());
    block
}
