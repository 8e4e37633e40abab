use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::config::ExtractOptions;
use crate::extract::extract_unit;
use crate::model::{CompilationUnit, StepRecord};

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub by_lang: BTreeMap<String, usize>,
    pub ambiguous: usize,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StepIndex {
    pub steps: Vec<StepRecord>,
    pub stats: Stats,
}

impl StepIndex {
    pub fn from_steps(mut steps: Vec<StepRecord>) -> Self {
        // Stable, so statements sharing a line keep declaration order
        steps.sort_by(|a, b| a.source().cmp(b.source()).then(a.line().cmp(&b.line())));

        let mut stats = Stats {
            total: steps.len(),
            ..Stats::default()
        };
        for s in &steps {
            *stats.by_lang.entry(s.lang().to_string()).or_insert(0) += 1;
        }
        // Ambiguity: same (lang, text) registered more than once
        let mut seen: HashMap<(&str, &str), usize> = HashMap::new();
        for s in &steps {
            *seen.entry((s.lang(), s.text())).or_insert(0) += 1;
        }
        stats.ambiguous = seen.values().filter(|&&c| c > 1).count();
        StepIndex { steps, stats }
    }
}

pub fn extract_step_index(units: &[CompilationUnit], options: &ExtractOptions) -> StepIndex {
    let steps = units
        .iter()
        .flat_map(|unit| extract_unit(unit, options))
        .collect();
    StepIndex::from_steps(steps)
}
