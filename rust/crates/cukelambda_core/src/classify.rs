//! Separates step registrations from lifecycle hooks.

use crate::model::{MethodBody, StatementNode};

const BEFORE: &str = "Before(";
const AFTER: &str = "After(";

/// True for `Before(...)` / `After(...)` hook registrations.
pub fn is_lifecycle_hook(text: &str) -> bool {
    let text = text.trim_start();
    text.starts_with(BEFORE) || text.starts_with(AFTER)
}

/// Statements of `body` that are not lifecycle hooks, in declaration order.
pub fn classify<S: StatementNode>(body: &MethodBody<S>) -> impl Iterator<Item = &S> + '_ {
    body.statements
        .iter()
        .filter(|stmt| !is_lifecycle_hook(&stmt.source_text()))
}
