//! Plain-text extraction from company web pages.
//!
//! The extractor works on the raw markup with regexes rather than a parser:
//! it keeps the `<body>` when there is one, drops script, style and svg
//! blocks with their contents, replaces every remaining tag with a space,
//! collapses whitespace and cuts the result at a hard character limit. Blocks
//! are matched wherever they appear, including inside `<noscript>`,
//! `<textarea>` or comments. A block without its closing tag is left in place
//! for the tag stripper. Malformed markup never fails; it only degrades the
//! text.
//!
//! # Example
//!
//! ```rust
//! use scout_core::{ExtractConfig, extract_text};
//!
//! let html = "<html><body><script>track()</script><h1>Acme</h1><p>Rockets   for hire</p></body></html>";
//! assert_eq!(extract_text(html, &ExtractConfig::default()), "Acme Rockets for hire");
//! ```

use std::sync::LazyLock;

use regex::Regex;

/// Default upper bound on extracted text, in characters.
pub const MAX_TEXT_CHARS: usize = 30_000;

static BODY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?is)<body[^>]*>(.*?)</body>").unwrap());
static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static SCRIPT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?is)<script\b.*?</script\s*>").unwrap());
static STYLE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?is)<style\b.*?</style\s*>").unwrap());
static SVG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?is)<svg\b.*?</svg\s*>").unwrap());

/// Configuration for text extraction.
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Maximum number of characters kept.
    pub max_chars: usize,
    /// Whether to remove script tags
    pub remove_scripts: bool,
    /// Whether to remove style tags
    pub remove_styles: bool,
    /// Whether to remove svg tags
    pub remove_svg: bool,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self { max_chars: MAX_TEXT_CHARS, remove_scripts: true, remove_styles: true, remove_svg: true }
    }
}

impl ExtractConfig {
    fn removed_blocks(&self) -> Vec<&'static Regex> {
        [
            (self.remove_scripts, &SCRIPT),
            (self.remove_styles, &STYLE),
            (self.remove_svg, &SVG),
        ]
        .into_iter()
        .filter_map(|(enabled, re)| enabled.then(|| LazyLock::force(re)))
        .collect()
    }
}

/// Extracts plain text from an HTML document.
///
/// The output never exceeds `config.max_chars` characters and never contains
/// markup.
pub fn extract_text(html: &str, config: &ExtractConfig) -> String {
    let body = select_body(html);
    let without_blocks = remove_blocks(body, &config.removed_blocks());
    let stripped = TAG.replace_all(&without_blocks, " ");
    let collapsed = WHITESPACE.replace_all(&stripped, " ");
    truncate_chars(collapsed.trim(), config.max_chars)
}

/// Returns the inner content of `<body>` if present, else the whole input.
fn select_body(html: &str) -> &str {
    BODY.captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .unwrap_or(html)
}

/// Replaces each matched block (tag and contents) with a space.
///
/// Matching is non-greedy and case-insensitive, so consecutive blocks are
/// removed one by one and the text between them survives.
fn remove_blocks(html: &str, blocks: &[&Regex]) -> String {
    blocks
        .iter()
        .fold(html.to_string(), |acc, re| re.replace_all(&acc, " ").into_owned())
}

/// Hard cutoff at `max` characters, never splitting a character.
fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_prefers_body_content() {
        let html = "<html><head><title>Head Title</title></head><body><p>Body text</p></body></html>";
        let text = extract_text(html, &ExtractConfig::default());
        assert_eq!(text, "Body text");
        assert!(!text.contains("Head Title"));
    }

    #[test]
    fn test_whole_document_without_body() {
        let html = "<div>Fragment <b>only</b></div>";
        assert_eq!(extract_text(html, &ExtractConfig::default()), "Fragment only");
    }

    #[test]
    fn test_removes_script_style_svg_contents() {
        let html = r#"
            <html>
                <body>
                    <SCRIPT type="text/javascript">var secret = "tracking";</SCRIPT>
                    <style>.hero { color: red; }</style>
                    <svg viewBox="0 0 10 10"><title>logo glyph</title><rect width="10"/></svg>
                    <p>Visible pitch</p>
                </body>
            </html>
        "#;

        let text = extract_text(html, &ExtractConfig::default());
        assert_eq!(text, "Visible pitch");
        assert!(!text.contains("tracking"));
        assert!(!text.contains("color"));
        assert!(!text.contains("logo glyph"));
    }

    #[test]
    fn test_multiple_scripts_are_removed_non_greedily() {
        let html = "<body><script>a()</script><p>Keep me</p><script>b()</script></body>";
        assert_eq!(extract_text(html, &ExtractConfig::default()), "Keep me");
    }

    #[test]
    fn test_disabled_removal_keeps_contents() {
        let config = ExtractConfig { remove_styles: false, ..Default::default() };
        let html = "<body><style>kept</style><p>text</p></body>";
        assert_eq!(extract_text(html, &config), "kept text");
    }

    #[rstest]
    #[case("<p>a</p>\n\n\t<p>b</p>", "a b")]
    #[case("   <span>  padded  </span>   ", "padded")]
    #[case("", "")]
    #[case("<<<>>>", ">>")]
    fn test_whitespace_and_tags(#[case] html: &str, #[case] expected: &str) {
        assert_eq!(extract_text(html, &ExtractConfig::default()), expected);
    }

    #[test]
    fn test_truncates_to_limit() {
        let html = format!("<body><p>{}</p></body>", "word ".repeat(20_000));
        let text = extract_text(&html, &ExtractConfig::default());
        assert_eq!(text.chars().count(), MAX_TEXT_CHARS);
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        let config = ExtractConfig { max_chars: 3, ..Default::default() };
        assert_eq!(extract_text("<p>héllo</p>", &config), "hél");
    }

    #[test]
    fn test_unclosed_script_degrades_to_tag_stripping() {
        let html = "<body><p>Intro</p><script>never closed";
        assert_eq!(extract_text(html, &ExtractConfig::default()), "Intro never closed");
    }

    #[rstest]
    #[case::noscript("<body><noscript><script>SECRET</script></noscript><p>ok</p></body>")]
    #[case::textarea("<body><textarea><script>SECRET</script></textarea>ok</body>")]
    #[case::comment("<body><!-- <script>SECRET</script> --> ok</body>")]
    #[case::title_style("<body><title><style>SECRET</style></title>ok</body>")]
    #[case::nested_svg("<body><svg><svg><text>SECRET</text></svg>ok</body>")]
    fn test_blocks_removed_in_any_context(#[case] html: &str) {
        let text = extract_text(html, &ExtractConfig::default());
        assert!(!text.contains("SECRET"), "leaked: {text}");
        assert!(text.ends_with("ok"), "got: {text}");
    }

    #[test]
    fn test_unclosed_svg_keeps_following_text() {
        let html = "<p>A</p><svg><p>B visible text</p>";
        assert_eq!(extract_text(html, &ExtractConfig::default()), "A B visible text");
    }

    #[test]
    fn test_closing_tag_case_and_spacing() {
        let html = "<p>x</p><Script src=a>bad()</sCRIPT ><p>y</p>";
        assert_eq!(extract_text(html, &ExtractConfig::default()), "x y");
    }
}
