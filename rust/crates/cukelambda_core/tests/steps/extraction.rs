use cucumber::gherkin::Step;
use cucumber::{given, then, when};
use cukelambda_core::{extract_step_index, CompilationUnit, MethodBody, SourceStatement};
use crate::CoreWorld;

fn current_unit(world: &mut CoreWorld) -> &mut CompilationUnit {
    world.units.last_mut().expect("a Java file was declared first")
}

#[given(regex = r#"^a Java file "([^"]+)" importing "([^"]+)"$"#)]
async fn a_java_file_importing(world: &mut CoreWorld, path: String, import: String) {
    world.units.push(CompilationUnit::new(path).with_import(import));
}

#[given(regex = r#"^a Java file "([^"]+)" without imports$"#)]
async fn a_java_file_without_imports(world: &mut CoreWorld, path: String) {
    world.units.push(CompilationUnit::new(path));
}

// Statements come from a | line | text | table
#[given(regex = r#"^a (?:constructor|method) "([^"]+)" with statements:$"#)]
async fn a_method_with_statements(world: &mut CoreWorld, name: String, step: &Step) {
    let table = step.table.as_ref().expect("statements table");
    let statements = table
        .rows
        .iter()
        .skip(1)
        .map(|row| {
            let line = row[0].parse().expect("line number");
            SourceStatement::new(row[1].clone(), line)
        })
        .collect();
    current_unit(world)
        .methods
        .push(MethodBody::new(name, None, statements));
}

// Multi-line statement via DocString, appended to the last method
#[given(regex = r"^a constructor statement at line (\d+):$")]
async fn a_constructor_statement_at_line(world: &mut CoreWorld, line: u32, step: &Step) {
    let text = step.docstring.clone().unwrap_or_default();
    let unit = current_unit(world);
    if unit.methods.is_empty() {
        let name = unit.source.trim_end_matches(".java").to_string();
        unit.methods.push(MethodBody::new(name, None, Vec::new()));
    }
    if let Some(method) = unit.methods.last_mut() {
        method.statements.push(SourceStatement::new(text, line));
    }
}

#[given("strict extraction")]
async fn strict_extraction(world: &mut CoreWorld) {
    world.options.strict = true;
}

#[given("the pre-filter is disabled")]
async fn prefilter_disabled(world: &mut CoreWorld) {
    world.options.prefilter = false;
}

#[when("we extract the step index")]
async fn we_extract_step_index(world: &mut CoreWorld) {
    world.index = Some(extract_step_index(&world.units, &world.options));
}

#[then(regex = r"^the index contains (\d+) steps?$")]
async fn index_contains(world: &mut CoreWorld, n: usize) {
    let idx = world.index.as_ref().expect("index built");
    assert_eq!(idx.stats.total, n);
    assert_eq!(idx.steps.len(), n);
}

#[then("there are no steps")]
async fn there_are_no_steps(world: &mut CoreWorld) {
    let idx = world.index.as_ref().expect("index built");
    assert_eq!(idx.stats.total, 0);
}

#[then(regex = r#"^step (\d+) has text "(.*)" at line (\d+) in "([^"]+)"$"#)]
async fn step_has_text_line_lang(
    world: &mut CoreWorld,
    n: usize,
    text: String,
    line: u32,
    lang: String,
) {
    let idx = world.index.as_ref().expect("index built");
    let s = idx.steps.get(n - 1).expect("step exists");
    assert_eq!(s.text(), text, "text of step {n}");
    assert_eq!(s.line(), line, "line of step {n}");
    assert_eq!(s.lang(), lang, "lang of step {n}");
}

#[then(regex = r#"^step (\d+) comes from "([^"]+)"$"#)]
async fn step_comes_from(world: &mut CoreWorld, n: usize, source: String) {
    let idx = world.index.as_ref().expect("index built");
    let s = idx.steps.get(n - 1).expect("step exists");
    assert_eq!(s.source(), source);
}

#[then(regex = r"^step (\d+) has exact text:$")]
async fn step_has_exact_text(world: &mut CoreWorld, n: usize, step: &Step) {
    let idx = world.index.as_ref().expect("index built");
    let expected = step.docstring.clone().unwrap_or_default();
    let s = idx.steps.get(n - 1).expect("step exists");
    assert_eq!(s.text(), expected.trim());
}

#[then(regex = r"^the index ambiguous count is (\d+)$")]
async fn ambiguous_count(world: &mut CoreWorld, n: usize) {
    let idx = world.index.as_ref().expect("index built");
    assert_eq!(idx.stats.ambiguous, n);
}

#[then(regex = r"^steps are ordered by file then line$")]
async fn steps_are_ordered(world: &mut CoreWorld) {
    let idx = world.index.as_ref().expect("index built");
    for w in idx.steps.windows(2) {
        let a = &w[0];
        let b = &w[1];
        let ord = a.source().cmp(b.source()).then(a.line().cmp(&b.line()));
        assert!(ord != std::cmp::Ordering::Greater, "steps not ordered by (file, line)");
    }
}

#[then(regex = r"^no step has text starting with (Before|After)$")]
async fn no_hook_steps(world: &mut CoreWorld, hook: String) {
    let idx = world.index.as_ref().expect("index built");
    let prefix = format!("{hook}(");
    assert!(idx.steps.iter().all(|s| !s.text().starts_with(&prefix)));
}
