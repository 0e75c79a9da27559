// crates/noise_filter/src/rules.rs

//! Per-line drop rules.
//!
//! A rule is just a name and a predicate. The filter walks [`LINE_RULES`] in
//! order and drops a line as soon as one predicate matches, so adding a new
//! decorative convention means appending one entry here.

use once_cell::sync::Lazy;
use regex::Regex;
use snippet_markers::{BOX_DRAWING_GLYPHS, EXAMPLE_MARKER, FUNC_KEYWORD, SEPARATOR_MIN_RUN};

/// A named line predicate. Matching lines are dropped.
pub struct LineRule {
    pub name: &'static str,
    pub matches: fn(&str) -> bool,
}

// Whole line made of `/ = _ -` and whitespace, at least SEPARATOR_MIN_RUN long.
static SEPARATOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^[/=\s_-]{{{},}}$", SEPARATOR_MIN_RUN)).unwrap()
});

// Two or more box-drawing glyphs in a row, anywhere.
pub(crate) static BOX_RUN_RE: Lazy<Regex> = Lazy::new(|| {
    let glyphs: String = BOX_DRAWING_GLYPHS.iter().collect();
    Regex::new(&format!("[{}]{{2,}}", glyphs)).unwrap()
});

// `// TITLE` line: a line comment whose text starts with an uppercase letter.
static BANNER_TITLE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*//\s*[A-Z]").unwrap());

fn is_separator_run(line: &str) -> bool {
    SEPARATOR_RE.is_match(line)
}

/// Upper or lower edge of a section banner:
///
/// ```text
/// // ==================================================
/// // EXAMPLE 1: File Reading
/// // ==================================================
/// ```
pub fn is_banner_edge(line: &str) -> bool {
    is_separator_run(line)
}

/// Title line sitting between two banner edges.
pub fn is_banner_title(line: &str) -> bool {
    BANNER_TITLE_RE.is_match(line)
}

fn has_box_drawing_run(line: &str) -> bool {
    BOX_RUN_RE.is_match(line)
}

/// Lines such as `// Example 3: Bank account` or
/// `fmt.Println("=== Example 1 ===")`. A line that also declares a function
/// is kept so that `func runExample() {` survives.
fn is_verbose_example_header(line: &str) -> bool {
    line.contains(EXAMPLE_MARKER) && !line.contains(FUNC_KEYWORD)
}

/// Drop rules in priority order.
pub static LINE_RULES: &[LineRule] = &[
    LineRule {
        name: "separator-run",
        matches: is_separator_run,
    },
    LineRule {
        name: "box-drawing-run",
        matches: has_box_drawing_run,
    },
    LineRule {
        name: "verbose-example-header",
        matches: is_verbose_example_header,
    },
];

/// Returns the first rule in `rules` that matches `line`.
pub fn first_match<'r>(rules: &'r [LineRule], line: &str) -> Option<&'r LineRule> {
    rules.iter().find(|rule| (rule.matches)(line))
}

/// Returns the first default rule that would drop `line`, if any.
pub fn classify_line(line: &str) -> Option<&'static LineRule> {
    first_match(LINE_RULES, line)
}
