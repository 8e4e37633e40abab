//! Recovery of the step pattern from a registration statement's text.
//!
//! The front end does not split a lambda call's arguments into the pattern
//! literal and the lambda body, so the literal is located textually: it is
//! the double-quoted string immediately followed by `,(`, the start of the
//! lambda parameter list.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static KEYWORD_CALL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(Given|When|Then|And|But)\(").unwrap());

static STARTS_WITH_KEYWORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(Given|When|Then|And|But)\(").unwrap());

static LAMBDA_STEP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#""[^\n]*",\("#).unwrap());

const START_QUOTE: &str = "\"";
const END_QUOTE_COMMA_PARENTHESIS: &str = "\",(";

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StepKeyword {
    Given,
    When,
    Then,
    And,
    But,
}

impl StepKeyword {
    pub fn as_str(self) -> &'static str {
        match self {
            StepKeyword::Given => "Given",
            StepKeyword::When => "When",
            StepKeyword::Then => "Then",
            StepKeyword::And => "And",
            StepKeyword::But => "But",
        }
    }

    fn from_keyword(s: &str) -> Option<Self> {
        match s {
            "Given" => Some(StepKeyword::Given),
            "When" => Some(StepKeyword::When),
            "Then" => Some(StepKeyword::Then),
            "And" => Some(StepKeyword::And),
            "But" => Some(StepKeyword::But),
            _ => None,
        }
    }
}

impl fmt::Display for StepKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keyword a statement registers its step with, if it is a registration call.
pub fn step_keyword(text: &str) -> Option<StepKeyword> {
    let cap = STARTS_WITH_KEYWORD_RE.captures(text.trim())?;
    StepKeyword::from_keyword(&cap[1])
}

/// Fast pre-filter: does a method body contain any `Keyword(` call.
pub fn looks_like_step_api_usage(body_text: &str) -> bool {
    KEYWORD_CALL_RE.is_match(body_text)
}

/// Extracts the step text of a registration statement.
///
/// Statements that are not registrations, or whose literal is not directly
/// followed by `,(`, come back trimmed but otherwise untouched.
pub fn normalize(text: &str) -> String {
    let trimmed = text.trim();
    if !STARTS_WITH_KEYWORD_RE.is_match(trimmed) {
        return trimmed.to_string();
    }

    // Greedy per line; with several candidates the last one wins.
    let mut step = None;
    for m in LAMBDA_STEP_RE.find_iter(trimmed) {
        let junk = m.as_str();
        if let Some(inner) = junk
            .strip_prefix(START_QUOTE)
            .and_then(|s| s.strip_suffix(END_QUOTE_COMMA_PARENTHESIS))
        {
            step = Some(inner.replace("\\\\", "\\").trim().to_string());
        }
    }
    step.unwrap_or_else(|| trimmed.to_string())
}
