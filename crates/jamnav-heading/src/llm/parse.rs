//! Coordinate extraction from free-form LLM replies.
//!
//! Matchers are tried in a fixed order and the first one that yields a
//! finite `(x, y)` wins.  Within a matcher, matches are scanned left to
//! right and the first pair that parses is returned.

use std::sync::LazyLock;

use regex::Regex;

use jamnav_core::Position;

/// A signed decimal, optionally in exponent form.
const NUM: &str = r"[-+]?(?:\d+\.?\d*|\.\d+)(?:[eE][-+]?\d+)?";

/// One named pattern with two capture groups, `x` then `y`.
pub struct CoordinateMatcher {
    pub name: &'static str,
    pattern:  Regex,
}

impl CoordinateMatcher {
    /// `template` uses `{n}` for each numeric capture.
    ///
    /// # Panics
    /// Panics if the expanded template is not a valid regex; templates are
    /// compile-time constants.
    fn new(name: &'static str, template: &str) -> Self {
        let source = template.replace("{n}", &format!("({NUM})"));
        let pattern = Regex::new(&source)
            .unwrap_or_else(|e| panic!("invalid coordinate pattern {name}: {e}"));
        Self { name, pattern }
    }

    /// First match in `text` whose captures both parse as finite floats.
    pub fn find(&self, text: &str) -> Option<Position> {
        self.pattern.captures_iter(text).find_map(|caps| {
            let x: f64 = caps.get(1)?.as_str().parse().ok()?;
            let y: f64 = caps.get(2)?.as_str().parse().ok()?;
            let p = Position::new(x, y);
            p.is_finite().then_some(p)
        })
    }
}

/// Ordered list of matchers.
pub struct ResponseParser {
    matchers: Vec<CoordinateMatcher>,
}

impl Default for ResponseParser {
    fn default() -> Self {
        Self {
            matchers: vec![
                CoordinateMatcher::new("parenthesized", r"\(\s*{n}\s*,\s*{n}\s*\)"),
                CoordinateMatcher::new("labeled", r"(?i)\bx\s*[:=]\s*{n}\s*[,;]?\s*y\s*[:=]\s*{n}"),
                CoordinateMatcher::new("bare_pair", r"{n}[ \t]*[, \t][ \t]*{n}"),
                CoordinateMatcher::new("split_lines", r"(?m)^[ \t]*{n}[ \t]*\r?\n[ \t]*{n}[ \t]*$"),
            ],
        }
    }
}

impl ResponseParser {
    pub fn matchers(&self) -> &[CoordinateMatcher] {
        &self.matchers
    }

    /// The coordinate from the first matcher that finds one.
    pub fn parse(&self, text: &str) -> Option<Position> {
        self.parse_with_name(text).map(|(p, _)| p)
    }

    /// Like [`parse`](Self::parse) but also reports which matcher fired.
    pub fn parse_with_name(&self, text: &str) -> Option<(Position, &'static str)> {
        self.matchers
            .iter()
            .find_map(|m| m.find(text).map(|p| (p, m.name)))
    }
}

static DEFAULT_PARSER: LazyLock<ResponseParser> = LazyLock::new(ResponseParser::default);

/// Parse with the default matcher chain.
pub fn parse_coordinate(text: &str) -> Option<Position> {
    DEFAULT_PARSER.parse(text)
}
