//! cukelambda_core: extraction of Cucumber steps registered through the
//! Java8 lambda API (`Given("...", () -> {...})`) from parsed method bodies.
//! Keep this crate platform-agnostic and free of I/O.

pub mod classify;
pub mod config;
pub mod dialect;
pub mod error;
pub mod extract;
pub mod model;
pub mod normalize;
pub mod step_index;

pub use classify::{classify, is_lifecycle_hook};
pub use config::ExtractOptions;
pub use dialect::{detect_dialect, uses_java8_cuke_api};
pub use error::{Error, Result};
pub use extract::{extract_steps, extract_unit};
pub use model::{CompilationUnit, DialectTag, MethodBody, SourceStatement, StatementNode, StepRecord};
pub use normalize::{looks_like_step_api_usage, normalize, step_keyword, StepKeyword};
pub use step_index::{extract_step_index, StepIndex};

/// Returns the crate version at compile time (useful for debugging).
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
