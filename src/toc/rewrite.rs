//! Placeholder-based buffer rewriting.
//!
//! The managed region is delimited by two exact `<!--TOC-->` lines. When a
//! pair exists, everything between the first two tags belongs to this tool
//! and is replaced wholesale, which makes repeated runs converge to a fixed
//! point. A lone unpaired tag is ignored and treated like no placeholder at
//! all.

use crate::toc::options::TocOptions;
use crate::toc::render;

/// Sentinel line marking the managed region. Matched by exact whole-line
/// equality, with no whitespace tolerance.
pub const TOC_TAG: &str = "<!--TOC-->";

/// Locate the first placeholder pair, if the buffer has one.
///
/// Returns the indices of the first two tag occurrences. Occurrences past the
/// second are outside the managed region and left alone.
pub fn find_placeholder_pair(lines: &[&str]) -> Option<(usize, usize)> {
    let mut first = None;
    for (i, line) in lines.iter().enumerate() {
        if *line == TOC_TAG {
            match first {
                None => first = Some(i),
                Some(start) => return Some((start, i)),
            }
        }
    }
    None
}

/// Replace the managed region `[start, end]` (inclusive, tag lines included)
/// with a freshly rendered block. Everything outside the region is preserved
/// verbatim.
pub fn splice_managed_region(
    lines: &[&str],
    (start, end): (usize, usize),
    toc_lines: &[String],
    opts: &TocOptions,
) -> Vec<String> {
    let mut result: Vec<String> = lines[..start].iter().map(|s| s.to_string()).collect();
    result.push(TOC_TAG.to_string());
    result.extend(render::build_inner_content(toc_lines, opts));
    result.push(TOC_TAG.to_string());
    result.extend(lines[end + 1..].iter().map(|s| s.to_string()));
    result
}

/// Insert a brand-new managed block into a buffer with no placeholder pair.
///
/// The block lands right after the first non-blank line when that line is a
/// heading (keeping the document title above the ToC), otherwise before the
/// first non-blank line. An entirely blank buffer just gets the block.
pub fn insert_without_placeholder(
    lines: &[&str],
    toc_lines: &[String],
    opts: &TocOptions,
) -> Vec<String> {
    let mut block = vec![String::new()];
    block.extend(render::build_proactive_block(toc_lines, opts));

    let Some(first_non_blank) = lines.iter().position(|line| !line.trim().is_empty()) else {
        return block;
    };

    if lines[first_non_blank].trim_start().starts_with('#') {
        let insert_pos = first_non_blank + 1;
        let mut result: Vec<String> =
            lines[..insert_pos].iter().map(|s| s.to_string()).collect();
        result.extend(block);
        result.extend(lines[insert_pos..].iter().map(|s| s.to_string()));
        result
    } else {
        let mut result = block;
        result.extend(lines.iter().map(|s| s.to_string()));
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toc::options::TocOptions;

    fn bare_opts() -> TocOptions {
        TocOptions {
            add_toc_title: false,
            add_horizontal_rules: false,
            ..TocOptions::default()
        }
    }

    fn toc() -> Vec<String> {
        vec!["- [A](#a)".to_string()]
    }

    #[test]
    fn test_find_pair() {
        let lines = ["x", TOC_TAG, "old", TOC_TAG, "y"];
        assert_eq!(find_placeholder_pair(&lines), Some((1, 3)));
    }

    #[test]
    fn test_find_pair_only_first_two_count() {
        let lines = [TOC_TAG, TOC_TAG, TOC_TAG];
        assert_eq!(find_placeholder_pair(&lines), Some((0, 1)));
    }

    #[test]
    fn test_single_tag_is_no_pair() {
        assert_eq!(find_placeholder_pair(&["x", TOC_TAG, "y"]), None);
    }

    #[test]
    fn test_tag_requires_exact_line_match() {
        assert_eq!(find_placeholder_pair(&[" <!--TOC-->", "<!--TOC--> "]), None);
    }

    #[test]
    fn test_splice_preserves_surroundings() {
        let lines = ["before", TOC_TAG, "stale", "content", TOC_TAG, "after"];
        let result = splice_managed_region(&lines, (1, 4), &toc(), &bare_opts());
        assert_eq!(
            result,
            ["before", TOC_TAG, "", "- [A](#a)", "", TOC_TAG, "after"]
        );
    }

    #[test]
    fn test_splice_is_idempotent() {
        let lines = ["before", TOC_TAG, "stale", TOC_TAG, "after"];
        let once = splice_managed_region(&lines, (1, 3), &toc(), &bare_opts());
        let once_refs: Vec<&str> = once.iter().map(String::as_str).collect();
        let pair = find_placeholder_pair(&once_refs).unwrap();
        let twice = splice_managed_region(&once_refs, pair, &toc(), &bare_opts());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_insert_after_leading_heading() {
        let lines = ["# Title", "", "body"];
        let result = insert_without_placeholder(&lines, &toc(), &bare_opts());
        assert_eq!(
            result,
            ["# Title", "", TOC_TAG, "", "- [A](#a)", "", TOC_TAG, "", "body"]
        );
    }

    #[test]
    fn test_insert_before_first_non_blank() {
        let lines = ["", "some prose", "# Later"];
        let result = insert_without_placeholder(&lines, &toc(), &bare_opts());
        assert_eq!(
            result,
            ["", TOC_TAG, "", "- [A](#a)", "", TOC_TAG, "", "some prose", "# Later"]
        );
    }

    #[test]
    fn test_insert_into_blank_buffer() {
        let result = insert_without_placeholder(&["", "  "], &toc(), &bare_opts());
        assert_eq!(result, ["", TOC_TAG, "", "- [A](#a)", "", TOC_TAG]);
    }
}
