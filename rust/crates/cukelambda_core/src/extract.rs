use tracing::{debug, trace};

use crate::classify::classify;
use crate::config::ExtractOptions;
use crate::dialect::detect_dialect;
use crate::model::{CompilationUnit, DialectTag, MethodBody, StatementNode, StepRecord};
use crate::normalize::{looks_like_step_api_usage, normalize, step_keyword};

/// Builds a record for every non-hook statement of `body`.
///
/// Nothing is dropped beyond lifecycle hooks: a statement that is not a
/// registration yields its trimmed text as the step text.
pub fn extract_steps<S: StatementNode>(
    body: &MethodBody<S>,
    dialect: &DialectTag,
    source: &str,
) -> Vec<StepRecord> {
    classify(body)
        .map(|stmt| {
            let record = StepRecord::new(source, normalize(&stmt.source_text()), stmt.line(), dialect);
            trace!(source, line = record.line(), text = record.text(), "lambda step");
            record
        })
        .collect()
}

/// Runs the whole pipeline over one compilation unit.
///
/// Units without a lambda API import produce no records.
pub fn extract_unit(unit: &CompilationUnit, options: &ExtractOptions) -> Vec<StepRecord> {
    // Detected afresh for every unit; never carried over from the previous file.
    let Some(dialect) = detect_dialect(&unit.imports) else {
        debug!(source = %unit.source, "no lambda step API import, skipping");
        return Vec::new();
    };

    let mut out = Vec::new();
    for method in &unit.methods {
        if options.prefilter && !looks_like_step_api_usage(&method.body_text()) {
            debug!(source = %unit.source, method = %method.display_name(), "no step calls, skipping");
            continue;
        }
        if options.strict {
            let registrations = MethodBody::new(
                method.name.clone(),
                method.return_type.clone(),
                method
                    .statements
                    .iter()
                    .filter(|stmt| step_keyword(&stmt.text).is_some())
                    .cloned()
                    .collect(),
            );
            out.extend(extract_steps(&registrations, &dialect, &unit.source));
        } else {
            out.extend(extract_steps(method, &dialect, &unit.source));
        }
    }
    out
}
