// crates/simplify_snippet/tests/pipeline.rs

use entry_block::{extract_entry_block, ScanStrategy};
use noise_filter::filter_noise;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use relabel_package::relabel_top_level;
use simplify_snippet::{simplify_source, SimplifyOptions};
use snippet_markers::ENTRY_HEADER;

fn simplify(content: &str) -> String {
    simplify_source(content, &SimplifyOptions::default())
}

#[test]
fn scenario_long_comment_dropped_short_kept_truncated_at_outer_close() {
    let input = "\
package main

import \"fmt\"

/*
Topic 57: CLOSURES

CONCEPT: closures capture
variables by reference.
*/
/*
Short note.
*/
func main() {
\tfor i := 0; i < 2; i++ {
\t\tfmt.Println(i)
\t}
}

func leftover() {
\tfmt.Println(\"gone\")
}
";
    let expected = "\
package intermediate

import \"fmt\"

/*
Short note.
*/
func main() {
\tfor i := 0; i < 2; i++ {
\t\tfmt.Println(i)
\t}
}";
    assert_eq!(simplify(input), expected);
}

#[test]
fn scenario_banned_section_removed_until_next_declaration() {
    let input = "\
package main

func summary() {
\t// KEY TAKEAWAYS
\t// 1. Use closures for state
\t// 2. Avoid globals
}

func main() {
\tsummary()
}
";
    let expected = "\
package intermediate

func summary() {
func main() {
\tsummary()
}";
    assert_eq!(simplify(input), expected);
}

#[test]
fn scenario_library_file_only_filtered() {
    let input = "\
package main

// ==================================================
// Example 1: Reverse a string
func Reverse(s string) string {
\treturn s
}
";
    let filtered = filter_noise(input);
    assert_eq!(extract_entry_block(&filtered, ENTRY_HEADER), filtered);
    assert_eq!(simplify(input), relabel_top_level(&filtered, "main", "intermediate"));
    assert_eq!(
        simplify(input),
        "package intermediate\n\nfunc Reverse(s string) string {\n\treturn s\n}\n"
    );
}

#[test]
fn scenario_forty_equals_line_removed() {
    let separator = "=".repeat(40);
    let input = format!(
        "{sep}\npackage main\n{sep}\nfunc main() {{\n{sep}\n\tprintln()\n}}\n{sep}\n",
        sep = separator
    );
    assert_eq!(
        simplify(&input),
        "package intermediate\nfunc main() {\n\tprintln()\n}"
    );
}

#[test]
fn realistic_teaching_file() {
    let input = r#"package main

import "fmt"

/*
Topic 58: RECURSION

CONCEPT: A function that calls itself.

KEY IDEAS:
- Always have a base case
*/
// Example 1: Factorial
func factorial(n int) int {
	if n <= 1 {
		return 1
	}
	return n * factorial(n-1)
}

func main() {
	fmt.Println("═══════════════════════════════")
	fmt.Println("=== Example 1: Factorial ===")
	fmt.Println("═══════════════════════════════")
	fmt.Println(factorial(5)) // prints 120 {
}

/*
COMPREHENSIVE GUIDE
...
*/
"#;
    let expected = r#"package intermediate

import "fmt"

func factorial(n int) int {
	if n <= 1 {
		return 1
	}
	return n * factorial(n-1)
}

func main() {
	fmt.Println(factorial(5)) // prints 120 {
}"#;
    assert_eq!(simplify(input), expected);
}

const VOCABULARY: &[&str] = &[
    "",
    "",
    "package main",
    "import \"fmt\"",
    "func helper() {",
    "func main() {",
    "\tx := 1",
    "\tif x > 0 {",
    "\t}",
    "}",
    "\tgo func() {",
    "\t}()",
    "\tfmt.Println(\"}\")",
    "\tc := '{'",
    "/*",
    "/* one-liner */",
    "*/",
    "NOTE: closures capture variables",
    "// Example 1: Counter closure",
    "// ==================================================",
    "\tfmt.Println(\"════════════════════\")",
    "\t// KEY TAKEAWAYS",
    "// COMPREHENSIVE GUIDE",
];

fn random_document(rng: &mut StdRng) -> String {
    let len = rng.gen_range(0..50);
    (0..len)
        .map(|_| VOCABULARY[rng.gen_range(0..VOCABULARY.len())])
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn pipeline_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..500 {
        let doc = random_document(&mut rng);
        for strategy in [ScanStrategy::Lexical, ScanStrategy::Naive] {
            let options = SimplifyOptions {
                strategy,
                ensure_header: rng.gen_bool(0.5),
            };
            let once = simplify_source(&doc, &options);
            let twice = simplify_source(&once, &options);
            assert_eq!(once, twice, "not idempotent ({:?}) for:\n{}", strategy, doc);
        }
    }
}

#[test]
fn pipeline_never_grows_line_count() {
    let mut rng = StdRng::seed_from_u64(2025);
    for _ in 0..500 {
        let doc = random_document(&mut rng);
        let out = simplify(&doc);
        assert!(out.split('\n').count() <= doc.split('\n').count());
    }
}
