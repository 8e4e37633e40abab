//! Detection of the lambda step API and its spoken-language dialect.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::model::DialectTag;

/// Prefix shared by every dialect interface of the lambda API.
pub const JAVA8_CUKE_API: &str = "cucumber.api.java8.";

static JAVA8_IMPORT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^cucumber\.api\.java8\.(.+)$").unwrap());

/// Returns the dialect of the first lambda API import, or `None` when the
/// file does not use the lambda API and should be skipped.
pub fn detect_dialect<I, S>(imports: I) -> Option<DialectTag>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut found: Option<DialectTag> = None;
    for import in imports {
        let import = import.as_ref().trim();
        let Some(cap) = JAVA8_IMPORT_RE.captures(import) else {
            continue;
        };
        let tag = DialectTag::from_qualified_name(&cap[1]);
        match &found {
            None => found = Some(tag),
            Some(first) if *first != tag => {
                debug!(ignored = %tag, dialect = %first, "ignoring additional lambda API import");
            }
            Some(_) => {}
        }
    }
    found
}

/// Looser check: does any import mention the lambda API package at all.
pub fn uses_java8_cuke_api<I, S>(imports: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    imports
        .into_iter()
        .any(|import| import.as_ref().contains(JAVA8_CUKE_API))
}
