// crates/noise_filter/src/lib.rs

//! Strips commentary and decoration from a brace-delimited source snippet.
//!
//! The line pass is a small state machine:
//!
//! * `Normal` – lines are checked against the banned section phrases, the
//!   block comment opener, section banners and the [`rules::LINE_RULES`]
//!   table.
//! * `InCommentBlock` – lines are buffered until the closing `*/`; the block
//!   is kept only when it is shorter than four lines and holds no
//!   `DEEP DIVE`. A banned phrase inside the block discards it and starts
//!   skipping.
//! * `Skipping` – everything is dropped until a line starts a new `func `.
//!
//! Afterwards box-drawing runs are removed and long blank runs collapsed.

pub mod cleanup;
pub mod rules;

pub use cleanup::{collapse_blank_runs, strip_box_drawing};
pub use rules::{classify_line, LineRule, LINE_RULES};

use snippet_markers::{
    BANNED_SECTION_PHRASES, BLOCK_COMMENT_CLOSE, BLOCK_COMMENT_OPEN, FUNC_KEYWORD,
    MAX_KEPT_COMMENT_LINES, VERBOSE_COMMENT_PHRASES,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterState {
    Normal,
    InCommentBlock,
    Skipping,
}

/// Progress through a `// ====` / `// TITLE` / `// ====` banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Banner {
    None,
    AfterEdge,
    AfterTitle,
}

fn has_banned_phrase(line: &str) -> Option<&'static str> {
    BANNED_SECTION_PHRASES
        .iter()
        .copied()
        .find(|phrase| line.contains(phrase))
}

/// Line-by-line filter. Feed lines with [`NoiseFilter::step`] and collect the
/// survivors with [`NoiseFilter::finish`].
pub struct NoiseFilter<'a> {
    rules: &'a [LineRule],
    state: FilterState,
    banner: Banner,
    comment: Vec<&'a str>,
    kept: Vec<&'a str>,
}

impl<'a> NoiseFilter<'a> {
    pub fn new() -> Self {
        Self::with_rules(LINE_RULES)
    }

    /// Uses a custom rule table instead of [`LINE_RULES`].
    pub fn with_rules(rules: &'a [LineRule]) -> Self {
        Self {
            rules,
            state: FilterState::Normal,
            banner: Banner::None,
            comment: Vec::new(),
            kept: Vec::new(),
        }
    }

    pub fn state(&self) -> FilterState {
        self.state
    }

    /// Lines emitted so far.
    pub fn kept(&self) -> &[&'a str] {
        &self.kept
    }

    pub fn step(&mut self, line: &'a str) {
        match self.state {
            FilterState::Normal => self.step_normal(line),
            FilterState::InCommentBlock => {
                if let Some(phrase) = has_banned_phrase(line) {
                    log::debug!(
                        "entering skipped section at '{}' inside a block comment",
                        phrase
                    );
                    self.comment.clear();
                    self.state = FilterState::Skipping;
                    return;
                }
                self.comment.push(line);
                if line.contains(BLOCK_COMMENT_CLOSE) {
                    self.close_comment();
                }
            }
            FilterState::Skipping => {
                // A new declaration is emitted as-is unless it opens
                // another banned section.
                let declaration = line.trim_start().starts_with(FUNC_KEYWORD);
                if declaration && has_banned_phrase(line).is_none() {
                    self.state = FilterState::Normal;
                    self.kept.push(line);
                } else {
                    log::trace!("skipped section line: {}", line);
                }
            }
        }
    }

    /// Flushes an unterminated comment block and returns the kept lines.
    pub fn finish(mut self) -> Vec<&'a str> {
        if self.state == FilterState::InCommentBlock {
            log::debug!(
                "block comment not closed before end of document ({} lines)",
                self.comment.len()
            );
            self.close_comment();
        }
        self.kept
    }

    fn step_normal(&mut self, line: &'a str) {
        let banner = std::mem::replace(&mut self.banner, Banner::None);

        if let Some(phrase) = has_banned_phrase(line) {
            log::debug!("entering skipped section at '{}'", phrase);
            self.state = FilterState::Skipping;
            return;
        }

        let trimmed = line.trim_start();
        if let Some(rest) = trimmed.strip_prefix(BLOCK_COMMENT_OPEN) {
            self.state = FilterState::InCommentBlock;
            self.comment.push(line);
            if rest.contains(BLOCK_COMMENT_CLOSE) {
                self.close_comment();
            }
            return;
        }

        if rules::is_banner_edge(line) {
            if banner == Banner::AfterTitle {
                if let Some(title) = self.kept.pop() {
                    log::trace!("dropped banner title: {}", title);
                }
            } else {
                self.banner = Banner::AfterEdge;
            }
        }

        if let Some(rule) = rules::first_match(self.rules, line) {
            log::trace!("dropped line ({}): {}", rule.name, line);
            return;
        }

        self.kept.push(line);
        if banner == Banner::AfterEdge && rules::is_banner_title(line) {
            self.banner = Banner::AfterTitle;
        }
    }

    fn close_comment(&mut self) {
        let verbose = self
            .comment
            .iter()
            .any(|line| VERBOSE_COMMENT_PHRASES.iter().any(|p| line.contains(p)));
        if verbose {
            log::debug!("dropped verbose block comment of {} lines", self.comment.len());
            self.comment.clear();
        } else if self.comment.len() < MAX_KEPT_COMMENT_LINES {
            self.kept.append(&mut self.comment);
        } else {
            log::debug!("dropped block comment of {} lines", self.comment.len());
            self.comment.clear();
        }
        self.state = FilterState::Normal;
    }
}

impl Default for NoiseFilter<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs the full noise filter over `content`.
///
/// Never fails: malformed comment nesting just consumes to the end of the
/// document. The output never has more lines than the input.
pub fn filter_noise(content: &str) -> String {
    let mut filter = NoiseFilter::new();
    for line in content.split('\n') {
        filter.step(line);
    }
    let kept = filter.finish().join("\n");
    collapse_blank_runs(&strip_box_drawing(&kept))
}
