//! Pure anchor-slug generation for Markdown headings.
//!
//! Converts heading text into the URL fragment the hosting platform would
//! assign it, per [`SlugStyle`]. The tricky part is backtick awareness: text
//! inside an inline code span keeps its underscores (`` `hello_world` ``
//! anchors differently from `hello-world`), while underscores outside a span
//! are emphasis markers and are discarded.

use std::sync::LazyLock;

use regex::Regex;
use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

use crate::toc::options::SlugStyle;

/// `[label](target)` inline links, flattened to just `label`.
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]*)\]\([^)]*\)").unwrap());

/// HTML tags, removed wholesale (only the text content contributes). The
/// name must start with a letter so loose `<` / `>` in prose survive.
static HTML_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</?[A-Za-z][^<>]*>").unwrap());

/// `:emoji_name:` shortcode tokens (GitLab removes these).
static SHORTCODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r":\w+:").unwrap());

/// Runs of consecutive hyphens (GitLab collapses these).
static HYPHEN_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-+").unwrap());

/// A run of characters that is either inside or outside a backtick pair.
///
/// Every backtick in the heading toggles membership; the backticks themselves
/// are delimiters, never content. A dangling open span counts as inside.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CharGroup {
    pub(crate) chars: Vec<char>,
    pub(crate) inside_backtick_pair: bool,
}

/// Compute the anchor fragment for a heading, including the leading `#`.
///
/// Independently callable: a leading ATX `#`-run is stripped defensively even
/// though the extractor already stores stripped text.
///
/// # Examples
///
/// ```
/// use mdtoc::{SlugStyle, encode};
///
/// assert_eq!(encode("Hello _world_", SlugStyle::Github), "#hello-world");
/// assert_eq!(
///     encode("Here is `hello_?and!_world`", SlugStyle::Github),
///     "#here-is-hello_and_world"
/// );
/// ```
pub fn encode(display_text: &str, style: SlugStyle) -> String {
    let text = strip_atx_prefix(display_text);
    let text = flatten_links(text);
    let text = HTML_TAG_RE.replace_all(&text, "").into_owned();
    let text = match style {
        SlugStyle::Gitlab => SHORTCODE_RE.replace_all(&text, "").into_owned(),
        SlugStyle::Github => text,
    };
    let text = text.to_lowercase();

    let folded: Vec<String> = build_char_groups(&text).iter().map(fold_group).collect();
    let joined = folded.join("-");

    // Whitelist pass: word characters (alphanumeric or underscore),
    // whitespace, and hyphens survive; everything else is punctuation.
    // Note this class is narrower than the one used by the leading-run
    // collapse, so emoji that survived the collapse are dropped here.
    let mut anchor: String = joined
        .chars()
        .filter(|&c| is_word(c) || c.is_whitespace() || c == '-')
        .collect();

    if style == SlugStyle::Gitlab {
        anchor = HYPHEN_RUN_RE.replace_all(&anchor, "-").into_owned();
    }

    if anchor.ends_with('-') {
        anchor.pop();
    }

    format!("#{anchor}")
}

/// Compute the display text for a ToC entry: the ATX prefix is stripped and
/// inline links are flattened to their labels, but casing and punctuation are
/// kept as written.
pub fn display_text(raw_line: &str) -> String {
    flatten_links(strip_atx_prefix(raw_line))
}

fn strip_atx_prefix(text: &str) -> &str {
    text.trim_start_matches('#').trim_start()
}

fn flatten_links(text: &str) -> String {
    LINK_RE.replace_all(text, "$1").into_owned()
}

/// Word class for the final whitelist pass: alphanumeric or underscore.
fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Word class for the leading-run collapse: alphanumeric, or an emoji-like
/// "Symbol, other" character. Wider than [`is_word`] on purpose, so a single
/// leading emoji survives the collapse (and later folds down to a lone `-`).
fn is_collapse_word(c: char) -> bool {
    c.is_alphanumeric() || c.general_category() == GeneralCategory::OtherSymbol
}

/// Partition text into alternating in/out-of-code-span groups.
///
/// Empty groups are never emitted: `` "ab`cd`" `` and `` "ab`cd" `` both
/// partition into two groups, and a trailing backtick leaves no empty group
/// behind.
pub(crate) fn build_char_groups(text: &str) -> Vec<CharGroup> {
    let mut groups = Vec::new();
    let mut chars = Vec::new();
    let mut inside = false;

    for c in text.chars() {
        if c == '`' {
            if !chars.is_empty() {
                groups.push(CharGroup {
                    chars: std::mem::take(&mut chars),
                    inside_backtick_pair: inside,
                });
            }
            inside = !inside;
        } else {
            chars.push(c);
        }
    }

    if !chars.is_empty() {
        groups.push(CharGroup {
            chars,
            inside_backtick_pair: inside,
        });
    }

    groups
}

/// Reduce a leading run of non-word characters to its last character.
///
/// `":? 2. best"` becomes `" 2. best"`: the run `:`, `?`, ` ` keeps only the
/// final separator space. A group that starts with a word character (which
/// includes emoji here) is returned untouched.
pub(crate) fn collapse_leading_non_word(chars: &[char]) -> Vec<char> {
    let run = chars.iter().take_while(|&&c| !is_collapse_word(c)).count();
    if run > 1 {
        chars[run - 1..].to_vec()
    } else {
        chars.to_vec()
    }
}

fn fold_group(group: &CharGroup) -> String {
    let chars = if group.inside_backtick_pair {
        group.chars.clone()
    } else {
        collapse_leading_non_word(&group.chars)
    };

    let trimmed: String = chars.iter().collect::<String>().trim().to_string();

    trimmed
        .chars()
        .filter_map(|c| match c {
            ' ' => Some('-'),
            // Underscores outside a code span are emphasis markers.
            '_' if !group.inside_backtick_pair => None,
            c => Some(c),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(chars: &str, inside: bool) -> CharGroup {
        CharGroup {
            chars: chars.chars().collect(),
            inside_backtick_pair: inside,
        }
    }

    #[test]
    fn test_char_groups_plain() {
        assert_eq!(
            build_char_groups("something"),
            vec![group("something", false)]
        );
    }

    #[test]
    fn test_char_groups_closed_pair_with_tail() {
        assert_eq!(
            build_char_groups("ab`cd`?!^"),
            vec![group("ab", false), group("cd", true), group("?!^", false)]
        );
    }

    #[test]
    fn test_char_groups_closed_pair() {
        assert_eq!(
            build_char_groups("ab`cd`"),
            vec![group("ab", false), group("cd", true)]
        );
    }

    #[test]
    fn test_char_groups_dangling_open() {
        // An unterminated span still counts as inside.
        assert_eq!(
            build_char_groups("ab`cd"),
            vec![group("ab", false), group("cd", true)]
        );
        assert_eq!(build_char_groups("`abcd"), vec![group("abcd", true)]);
    }

    #[test]
    fn test_char_groups_trailing_backtick() {
        assert_eq!(build_char_groups("abcd`"), vec![group("abcd", false)]);
        assert_eq!(build_char_groups("`abcd`"), vec![group("abcd", true)]);
    }

    #[test]
    fn test_char_groups_apostrophe_is_not_a_delimiter() {
        assert_eq!(
            build_char_groups("shouldn't"),
            vec![group("shouldn't", false)]
        );
    }

    fn collapse(s: &str) -> String {
        collapse_leading_non_word(&s.chars().collect::<Vec<_>>())
            .into_iter()
            .collect()
    }

    #[test]
    fn test_collapse_leading_run() {
        assert_eq!(collapse(""), "");
        assert_eq!(collapse("    "), " ");
        assert_eq!(collapse("\t\n \t\n \n"), "\n");
        assert_eq!(collapse(":? 2. best"), " 2. best");
        assert_eq!(collapse(": Good"), " Good");
        assert_eq!(collapse(":;!你好"), "!你好");
    }

    #[test]
    fn test_collapse_keeps_leading_emoji() {
        // Emoji are word characters for the collapse step only.
        assert_eq!(collapse("🧐: Good"), "🧐: Good");
    }

    #[test]
    fn test_encode_simple() {
        assert_eq!(encode("Hello World", SlugStyle::Github), "#hello-world");
        assert_eq!(encode("## Hello World", SlugStyle::Github), "#hello-world");
    }

    #[test]
    fn test_encode_is_deterministic() {
        let a = encode("Some *Heading* here", SlugStyle::Github);
        let b = encode("Some *Heading* here", SlugStyle::Github);
        assert_eq!(a, b);
    }

    #[test]
    fn test_encode_emphasis_stripped() {
        assert_eq!(encode("Hello _world_", SlugStyle::Github), "#hello-world");
        assert_eq!(encode("Hello **world**", SlugStyle::Github), "#hello-world");
        assert_eq!(encode("Hello _world_", SlugStyle::Gitlab), "#hello-world");
        assert_eq!(encode("Hello **world**", SlugStyle::Gitlab), "#hello-world");
    }

    #[test]
    fn test_encode_backtick_span_keeps_underscores() {
        assert_eq!(
            encode("Here is `hello_?and!_world`", SlugStyle::Github),
            "#here-is-hello_and_world"
        );
    }

    #[test]
    fn test_encode_leading_emoji() {
        assert_eq!(encode("🧐 hello world", SlugStyle::Github), "#-hello-world");
    }

    #[test]
    fn test_encode_shortcode_styles_diverge() {
        assert_eq!(
            encode("This header has a :thumbsup: in it", SlugStyle::Github),
            "#this-header-has-a-thumbsup-in-it"
        );
        assert_eq!(
            encode("This header has a :thumbsup: in it", SlugStyle::Gitlab),
            "#this-header-has-a-in-it"
        );
    }

    #[test]
    fn test_encode_unicode_letters_kept() {
        assert_eq!(
            encode("This header has Unicode in it: 中文", SlugStyle::Github),
            "#this-header-has-unicode-in-it-中文"
        );
    }

    #[test]
    fn test_encode_punctuation_removed() {
        assert_eq!(
            encode("This header has 3.5 in it (and parentheses)", SlugStyle::Github),
            "#this-header-has-35-in-it-and-parentheses"
        );
        assert_eq!(
            encode("What day is today? I don't know.", SlugStyle::Github),
            "#what-day-is-today-i-dont-know"
        );
    }

    #[test]
    fn test_encode_consecutive_spaces() {
        assert_eq!(
            encode("This header has     consecutive spaces in it", SlugStyle::Github),
            "#this-header-has-----consecutive-spaces-in-it"
        );
        assert_eq!(
            encode("This header has     consecutive spaces in it", SlugStyle::Gitlab),
            "#this-header-has-consecutive-spaces-in-it"
        );
    }

    #[test]
    fn test_encode_links_flattened() {
        assert_eq!(
            encode("hello world [somelink](https://foo.bar)", SlugStyle::Github),
            "#hello-world-somelink"
        );
    }

    #[test]
    fn test_encode_html_tags_stripped() {
        assert_eq!(
            encode("Hello <b>bold</b> world", SlugStyle::Github),
            "#hello-bold-world"
        );
        // Loose angle brackets are not tags; the whitelist drops them later.
        assert_eq!(encode("a < b > c", SlugStyle::Github), "#a--b--c");
    }

    #[test]
    fn test_display_text() {
        assert_eq!(display_text("## Hello World"), "Hello World");
        assert_eq!(
            display_text("hello world [somelink](https://foo.bar)"),
            "hello world somelink"
        );
        // Casing and punctuation are preserved.
        assert_eq!(display_text("# What day? I don't know."), "What day? I don't know.");
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode("", SlugStyle::Github), "#");
        assert_eq!(encode("###", SlugStyle::Github), "#");
    }
}
