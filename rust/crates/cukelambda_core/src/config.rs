use serde::{Deserialize, Serialize};

/// Per-request extraction options.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExtractOptions {
    /// Skip method bodies that contain no `Keyword(` call at all.
    #[serde(default = "default_prefilter")]
    pub prefilter: bool,
    /// Keep only statements that start with a step keyword.
    #[serde(default)]
    pub strict: bool,
}

fn default_prefilter() -> bool {
    true
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            prefilter: default_prefilter(),
            strict: false,
        }
    }
}
