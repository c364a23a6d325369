//! Include-directive recognition
//!
//! Only system-style includes (`#include <token>`) count as dependencies.
//! Quoted includes are recognized so they can be dropped on purpose.

use regex::Regex;
use std::sync::OnceLock;

/// Outcome of matching a single source line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncludeLine<'a> {
    /// `#include <token>`
    Dependency(&'a str),
    /// `#include "token"`; never tracked
    Local(&'a str),
    NoMatch,
}

fn system_include_regex() -> &'static Regex {
    static SYSTEM_INCLUDE: OnceLock<Regex> = OnceLock::new();
    // Greedy: the token runs to the last `>` on the line.
    SYSTEM_INCLUDE.get_or_init(|| Regex::new(r"#include <(.+)>").expect("Invalid include regex"))
}

fn local_include_regex() -> &'static Regex {
    static LOCAL_INCLUDE: OnceLock<Regex> = OnceLock::new();
    LOCAL_INCLUDE.get_or_init(|| Regex::new(r#"#include "(.+)""#).expect("Invalid include regex"))
}

/// Matches an include directive anywhere on `line`.
///
/// A system include anywhere on the line wins over a quoted one, even when
/// the quoted directive comes first.
pub fn match_line(line: &str) -> IncludeLine<'_> {
    if let Some(token) = system_include_regex().captures(line).and_then(|c| c.get(1)) {
        return IncludeLine::Dependency(token.as_str());
    }

    match local_include_regex().captures(line).and_then(|c| c.get(1)) {
        Some(token) => IncludeLine::Local(token.as_str()),
        None => IncludeLine::NoMatch,
    }
}

/// Every dependency token in `content`, in textual order, duplicates kept.
pub fn extract_dependencies(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| match match_line(line) {
            IncludeLine::Dependency(token) => Some(token.to_string()),
            IncludeLine::Local(_) | IncludeLine::NoMatch => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use yare::parameterized;

    #[parameterized(
        system = { "#include <log.h>", IncludeLine::Dependency("log.h") },
        nested = { "#include <hw/serial.h>", IncludeLine::Dependency("hw/serial.h") },
        local = { "#include \"local.h\"", IncludeLine::Local("local.h") },
        local_then_system = { "#include \"a.h\" /* was #include <b.h> */", IncludeLine::Dependency("b.h") },
        indented = { "    #include <string.h>", IncludeLine::Dependency("string.h") },
        commented_out = { "// #include <old.h>", IncludeLine::Dependency("old.h") },
        trailing_comment = { "#include <a.h> /* <b> */", IncludeLine::Dependency("a.h> /* <b") },
        no_space = { "#include<a.h>", IncludeLine::NoMatch },
        two_spaces = { "#include  <a.h>", IncludeLine::NoMatch },
        empty_token = { "#include <>", IncludeLine::NoMatch },
        unterminated = { "#include <a.h", IncludeLine::NoMatch },
        define = { "#define MAX 10", IncludeLine::NoMatch },
        blank = { "", IncludeLine::NoMatch },
    )]
    fn test_match_line(line: &str, expected: IncludeLine<'static>) {
        assert_eq!(match_line(line), expected);
    }

    #[test]
    fn test_extract_skips_quoted_includes() {
        let content = "#include <a.h>\n#include \"local.h\"\n#include <b.h>\n";
        assert_eq!(extract_dependencies(content), vec!["a.h", "b.h"]);
    }

    #[test]
    fn test_extract_finds_system_include_after_quoted_one() {
        let content = "#include \"a.h\" /* was #include <b.h> */\n";
        assert_eq!(extract_dependencies(content), vec!["b.h"]);
    }

    #[test]
    fn test_extract_keeps_duplicates_in_order() {
        let content = "#include <b.h>\nint x;\n#include <a.h>\n#include <b.h>\n";
        assert_eq!(extract_dependencies(content), vec!["b.h", "a.h", "b.h"]);
    }

    #[test]
    fn test_extract_handles_crlf() {
        let content = "#include <a.h>\r\n#include <b.h>\r\n";
        assert_eq!(extract_dependencies(content), vec!["a.h", "b.h"]);
    }

    #[test]
    fn test_extract_from_file_without_includes() {
        assert!(extract_dependencies("int main(void) { return 0; }\n").is_empty());
        assert!(extract_dependencies("").is_empty());
    }
}
