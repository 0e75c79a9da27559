// crates/noise_filter/src/cleanup.rs

use crate::rules::BOX_RUN_RE;

/// Minimum number of consecutive blank lines that gets collapsed.
const BLANK_RUN_LIMIT: usize = 3;

/// Removes every run of two or more box-drawing glyphs, regardless of
/// where it sits in the text.
pub fn strip_box_drawing(content: &str) -> String {
    BOX_RUN_RE.replace_all(content, "").into_owned()
}

/// Replaces each run of three or more blank (whitespace-only) lines with a
/// single empty line. Shorter runs are left alone.
pub fn collapse_blank_runs(content: &str) -> String {
    let mut output: Vec<&str> = Vec::new();
    let mut run: Vec<&str> = Vec::new();

    for line in content.split('\n') {
        if line.trim().is_empty() {
            run.push(line);
            continue;
        }
        flush_blank_run(&mut output, &mut run);
        output.push(line);
    }
    flush_blank_run(&mut output, &mut run);

    output.join("\n")
}

fn flush_blank_run<'a>(output: &mut Vec<&'a str>, run: &mut Vec<&'a str>) {
    if run.len() >= BLANK_RUN_LIMIT {
        output.push("");
    } else {
        output.extend(run.iter());
    }
    run.clear();
}
