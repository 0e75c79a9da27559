// crates/relabel_package/src/lib.rs

use regex::{Captures, Regex};
use snippet_markers::PACKAGE_KEYWORD;

/// Rewrites every line that is exactly `package <from>` into `package <to>`.
///
/// The match is anchored at the start of the line and only trailing spaces,
/// tabs or a carriage return may follow the label; those are kept. Lines such
/// as `package mainframe` or `  package main` are left alone.
pub fn relabel_top_level(content: &str, from: &str, to: &str) -> String {
    let pattern = format!(
        r"(?m)^{}[ \t]+{}([ \t\r]*)$",
        regex::escape(PACKAGE_KEYWORD),
        regex::escape(from)
    );
    let re = match Regex::new(&pattern) {
        Ok(re) => re,
        Err(_) => return content.to_string(),
    };
    let replacement = format!("{} {}", PACKAGE_KEYWORD, to);
    re.replace_all(content, |caps: &Captures| {
        let mut line = replacement.clone();
        line.push_str(&caps[1]);
        line
    })
    .into_owned()
}

/// Prepends `package <label>` and a blank line when `content` does not
/// already start with a package declaration. Leading blank lines of
/// `content` are dropped so the header is followed by exactly one.
pub fn ensure_package_header(content: &str, label: &str) -> String {
    if content.starts_with(PACKAGE_KEYWORD) {
        return content.to_string();
    }
    let mut body = content;
    while let Some(pos) = body.find('\n') {
        if !body[..pos].trim().is_empty() {
            break;
        }
        body = &body[pos + 1..];
    }
    let header = format!("{} {}\n\n", PACKAGE_KEYWORD, label);
    let mut out = String::with_capacity(header.len() + body.len());
    out.push_str(&header);
    out.push_str(body);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relabel_main() {
        let input = "package main\n\nimport \"fmt\"\n";
        assert_eq!(
            relabel_top_level(input, "main", "intermediate"),
            "package intermediate\n\nimport \"fmt\"\n"
        );
    }

    #[test]
    fn test_relabel_keeps_trailing_whitespace_and_crlf() {
        let input = "package main \r\nfunc main() {}\r\n";
        assert_eq!(
            relabel_top_level(input, "main", "intermediate"),
            "package intermediate \r\nfunc main() {}\r\n"
        );
    }

    #[test]
    fn test_relabel_requires_exact_label() {
        let input = "package mainframe\n";
        assert_eq!(relabel_top_level(input, "main", "intermediate"), input);
    }

    #[test]
    fn test_relabel_is_anchored() {
        let input = "// package main\n  package main\n";
        assert_eq!(relabel_top_level(input, "main", "intermediate"), input);
    }

    #[test]
    fn test_relabel_not_only_first_line() {
        let input = "// header\npackage main";
        assert_eq!(
            relabel_top_level(input, "main", "intermediate"),
            "// header\npackage intermediate"
        );
    }

    #[test]
    fn test_relabel_no_match_is_identity() {
        let input = "package intermediate\n";
        assert_eq!(relabel_top_level(input, "main", "intermediate"), input);
        assert_eq!(relabel_top_level("", "main", "intermediate"), "");
    }

    #[test]
    fn test_relabel_to_label_with_dollar() {
        assert_eq!(relabel_top_level("package main", "main", "$1x"), "package $1x");
    }

    #[test]
    fn test_ensure_package_header_adds_missing() {
        assert_eq!(
            ensure_package_header("import \"fmt\"\n", "intermediate"),
            "package intermediate\n\nimport \"fmt\"\n"
        );
    }

    #[test]
    fn test_ensure_package_header_keeps_existing() {
        let input = "package main\n";
        assert_eq!(ensure_package_header(input, "intermediate"), input);
    }

    #[test]
    fn test_ensure_package_header_drops_leading_blank_lines() {
        assert_eq!(
            ensure_package_header("\n \t\n\nfunc main() {\n}", "intermediate"),
            "package intermediate\n\nfunc main() {\n}"
        );
        assert_eq!(ensure_package_header("\n\n", "intermediate"), "package intermediate\n\n");
    }
}
