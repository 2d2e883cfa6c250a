//! Configuration for table-of-contents generation.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Anchor slug dialect.
///
/// GitHub and GitLab derive heading anchors slightly differently: GitLab
/// removes `:emoji_name:` shortcodes entirely and collapses consecutive
/// hyphens, GitHub keeps the shortcode's literal text and the hyphen runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlugStyle {
    Github,
    Gitlab,
}

impl FromStr for SlugStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "github" => Ok(SlugStyle::Github),
            "gitlab" => Ok(SlugStyle::Gitlab),
            other => Err(Error::InvalidStyle(other.to_string())),
        }
    }
}

impl fmt::Display for SlugStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlugStyle::Github => write!(f, "github"),
            SlugStyle::Gitlab => write!(f, "gitlab"),
        }
    }
}

/// Thematic break style used around the rendered ToC block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalRuleStyle {
    /// 70 underscores, the default style of mdformat.
    Mdformat,
    /// `---`, matching Prettier's default thematic break.
    Prettier,
}

impl HorizontalRuleStyle {
    /// The literal rule line for this style.
    pub fn as_line(&self) -> &'static str {
        match self {
            HorizontalRuleStyle::Mdformat => {
                "______________________________________________________________________"
            }
            HorizontalRuleStyle::Prettier => "---",
        }
    }
}

impl FromStr for HorizontalRuleStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "mdformat" => Ok(HorizontalRuleStyle::Mdformat),
            "prettier" => Ok(HorizontalRuleStyle::Prettier),
            other => Err(Error::InvalidHorizontalRuleStyle(other.to_string())),
        }
    }
}

impl fmt::Display for HorizontalRuleStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HorizontalRuleStyle::Mdformat => write!(f, "mdformat"),
            HorizontalRuleStyle::Prettier => write!(f, "prettier"),
        }
    }
}

/// Options controlling ToC creation for a single file.
#[derive(Debug, Clone)]
pub struct TocOptions {
    /// Lines from the top of the file that are never scanned for headings.
    pub skip_first_n_lines: usize,
    /// Suppress the human-readable progress echo.
    pub quiet: bool,
    /// Persist changes to disk instead of only returning the ToC lines.
    pub in_place: bool,
    /// Insert a new managed block when no placeholder pair exists.
    pub proactive: bool,
    /// Emit a bolded title line above the ToC entries.
    pub add_toc_title: bool,
    /// Wrap the block in horizontal rules.
    pub add_horizontal_rules: bool,
    /// Title text used when `add_toc_title` is set.
    pub toc_title: String,
    /// Anchor slug dialect.
    pub style: SlugStyle,
    /// Thematic break style used when `add_horizontal_rules` is set.
    pub horizontal_rule_style: HorizontalRuleStyle,
}

impl Default for TocOptions {
    fn default() -> Self {
        TocOptions {
            skip_first_n_lines: 1,
            quiet: false,
            in_place: true,
            proactive: true,
            add_toc_title: true,
            add_horizontal_rules: true,
            toc_title: "Table of Contents".to_string(),
            style: SlugStyle::Github,
            horizontal_rule_style: HorizontalRuleStyle::Mdformat,
        }
    }
}
