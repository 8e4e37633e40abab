use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A statement handed over by the Java front end.
///
/// Implementors are opaque AST handles; the extractor only ever needs the
/// rendered source text and the 1-based line the statement starts on.
pub trait StatementNode {
    fn source_text(&self) -> Cow<'_, str>;
    fn line(&self) -> u32;
}

/// A statement already rendered to text, for hosts that ship statements as data.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SourceStatement {
    pub text: String,
    pub line: u32,
}

impl SourceStatement {
    pub fn new(text: impl Into<String>, line: u32) -> Self {
        Self {
            text: text.into(),
            line,
        }
    }
}

impl StatementNode for SourceStatement {
    fn source_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.text)
    }

    fn line(&self) -> u32 {
        self.line
    }
}

/// Body of a method or constructor of a step-definition class.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MethodBody<S = SourceStatement> {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_type: Option<String>,
    pub statements: Vec<S>,
}

impl<S: StatementNode> MethodBody<S> {
    pub fn new(name: impl Into<String>, return_type: Option<String>, statements: Vec<S>) -> Self {
        Self {
            name: name.into(),
            return_type,
            statements,
        }
    }

    /// `name()`, the way method names are shown to users.
    pub fn display_name(&self) -> String {
        format!("{}()", self.name)
    }

    /// All statements rendered and joined by newlines.
    pub fn body_text(&self) -> String {
        let mut out = String::new();
        for (i, stmt) in self.statements.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(&stmt.source_text());
        }
        out
    }
}

impl<S> fmt::Display for MethodBody<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}() -> {} [{} statements]",
            self.name,
            self.return_type.as_deref().unwrap_or("void"),
            self.statements.len()
        )
    }
}

/// Lowercase spoken-language code of the lambda step API in use (`en`, `fr`, ...).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct DialectTag(String);

impl DialectTag {
    /// Derives the tag from the last segment of a fully-qualified name.
    pub fn from_qualified_name(name: &str) -> Self {
        let last = name.rsplit('.').next().unwrap_or(name);
        DialectTag(last.to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DialectTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A step registered through the lambda API.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StepRecord {
    source: String,
    text: String,
    line: u32,
    lang: String,
}

impl StepRecord {
    pub(crate) fn new(source: &str, text: String, line: u32, lang: &DialectTag) -> Self {
        Self {
            source: source.to_string(),
            text,
            line,
            lang: lang.as_str().to_string(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn lang(&self) -> &str {
        &self.lang
    }
}

/// One parsed Java source file as delivered by the front end.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompilationUnit {
    pub source: String,
    #[serde(default)]
    pub imports: Vec<String>,
    #[serde(default)]
    pub methods: Vec<MethodBody>,
}

impl CompilationUnit {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            ..Self::default()
        }
    }

    pub fn with_import(mut self, import: impl Into<String>) -> Self {
        self.imports.push(import.into());
        self
    }

    pub fn with_method(mut self, method: MethodBody) -> Self {
        self.methods.push(method);
        self
    }

    /// Decodes a unit from JSON and checks that statement lines are 1-based.
    pub fn from_json(json: &str) -> Result<Self> {
        let unit: CompilationUnit = serde_json::from_str(json)?;
        unit.validate()?;
        Ok(unit)
    }

    /// Checks that every statement line is 1-based.
    pub fn validate(&self) -> Result<()> {
        for method in &self.methods {
            if let Some(stmt) = method.statements.iter().find(|s| s.line == 0) {
                return Err(Error::InvalidLine {
                    method: method.display_name(),
                    line: stmt.line,
                });
            }
        }
        Ok(())
    }
}
