// crates/snippet_markers/src/lib.rs

//! Fixed markers, keywords and labels shared by the snippet simplification
//! tool-chain. None of these are runtime-configurable.

/// Declaration of the entry routine, including its opening brace.
pub const ENTRY_HEADER: &str = "func main() {";

/// Keyword that starts a top-level function declaration.
pub const FUNC_KEYWORD: &str = "func ";

/// Opening and closing delimiters counted by the block scanner.
pub const OPEN_BRACE: char = '{';
pub const CLOSE_BRACE: char = '}';

pub const BLOCK_COMMENT_OPEN: &str = "/*";
pub const BLOCK_COMMENT_CLOSE: &str = "*/";
pub const LINE_COMMENT: &str = "//";

/// Block comments with this many lines or more are dropped.
pub const MAX_KEPT_COMMENT_LINES: usize = 4;

/// Word that marks a verbose example header line.
pub const EXAMPLE_MARKER: &str = "Example";

/// Phrases that open a section which is skipped up to the next `func `.
pub const BANNED_SECTION_PHRASES: &[&str] = &["KEY TAKEAWAYS", "COMPREHENSIVE GUIDE"];

/// Block comments holding one of these are dropped whatever their length.
pub const VERBOSE_COMMENT_PHRASES: &[&str] = &["DEEP DIVE"];

/// Minimum length of a full-line separator run (`=====`, `-----`, `// ____`).
pub const SEPARATOR_MIN_RUN: usize = 30;

/// Box-drawing glyphs stripped when two or more appear in a row.
pub const BOX_DRAWING_GLYPHS: &[char] = &[
    '╔', '╗', '╚', '╝', '║', '═', '╞', '╡', '╤', '╪', '╟', '╢',
];

/// Keyword of the top-level package declaration.
pub const PACKAGE_KEYWORD: &str = "package";

/// Package label found in the input files.
pub const SOURCE_PACKAGE: &str = "main";

/// Package label written to the output files.
pub const TARGET_PACKAGE: &str = "intermediate";

/// File-name suffix the batch driver looks for by default.
pub const DEFAULT_FILE_SUFFIX: &str = "_detailed.go";

/// Whether `c` belongs to [`BOX_DRAWING_GLYPHS`].
pub fn is_box_drawing(c: char) -> bool {
    BOX_DRAWING_GLYPHS.contains(&c)
}
