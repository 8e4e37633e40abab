use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use cukelambda_core::{CompilationUnit, ExtractOptions, Result};

#[derive(Deserialize)]
struct ExtractRequest {
    units: Vec<CompilationUnit>,
    #[serde(default)]
    options: ExtractOptions,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

fn run(input_json: &str) -> Result<String> {
    let req: ExtractRequest = serde_json::from_str(input_json)?;
    for unit in &req.units {
        unit.validate()?;
    }
    let index = cukelambda_core::extract_step_index(&req.units, &req.options);
    Ok(serde_json::to_string(&index)?)
}

fn error_json(message: String) -> String {
    serde_json::to_string(&ErrorResponse { error: message })
        .unwrap_or_else(|_| String::from(r#"{"error":"unserializable error"}"#))
}

/// Builds a step index from `{ "units": [...], "options": {...} }`.
/// Returns the index as JSON, or `{ "error": "..." }` when the input is invalid.
#[wasm_bindgen]
pub fn extract_step_index(input_json: &str) -> String {
    run(input_json).unwrap_or_else(|e| error_json(e.to_string()))
}

/// Dialect tag for a JSON array of import names, or `undefined`.
#[wasm_bindgen]
pub fn detect_dialect(imports_json: &str) -> Option<String> {
    let imports: Vec<String> = serde_json::from_str(imports_json).ok()?;
    cukelambda_core::detect_dialect(&imports).map(|tag| tag.to_string())
}

#[wasm_bindgen]
pub fn looks_like_step_api_usage(body_text: &str) -> bool {
    cukelambda_core::looks_like_step_api_usage(body_text)
}
