//! Extractor capability surface and shared tree-sitter helpers.
//!
//! Every language extractor exposes the same contract: file content in, a
//! flat [`FileFacts`] out. No extractor exposes language-specific surface to
//! the rest of the engine.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tree_sitter::{Query, QueryCursor, StreamingIterator};

use super::Language;
use crate::types::{ArchError, Result};

// =============================================================================
// Facts
// =============================================================================

/// Declared names collected from one file, deduplicated, in declaration
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifiers {
    pub variables: Vec<String>,
    pub functions: Vec<String>,
    pub classes: Vec<String>,
    pub components: Vec<String>,
}

impl Identifiers {
    fn push_unique(list: &mut Vec<String>, name: &str) {
        if !name.is_empty() && !list.iter().any(|n| n == name) {
            list.push(name.to_string());
        }
    }

    pub fn add_variable(&mut self, name: &str) {
        Self::push_unique(&mut self.variables, name);
    }

    pub fn add_function(&mut self, name: &str) {
        Self::push_unique(&mut self.functions, name);
    }

    pub fn add_class(&mut self, name: &str) {
        Self::push_unique(&mut self.classes, name);
    }

    pub fn add_component(&mut self, name: &str) {
        Self::push_unique(&mut self.components, name);
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
            && self.functions.is_empty()
            && self.classes.is_empty()
            && self.components.is_empty()
    }
}

/// How an import reference should be resolved against the project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImportKind {
    /// Path relative to the importing file's directory (`./x`, `../y`).
    Relative,
    /// Path anchored at the project source root (Rust `crate::` paths).
    Anchored,
    /// Package outside the project; becomes an unexpanded leaf node.
    External,
}

/// One import/require reference, already normalized to slash-separated form
/// by the emitting extractor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportRef {
    pub source: String,
    pub kind: ImportKind,
}

impl ImportRef {
    pub fn relative(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            kind: ImportKind::Relative,
        }
    }

    pub fn anchored(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            kind: ImportKind::Anchored,
        }
    }

    pub fn external(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            kind: ImportKind::External,
        }
    }

    pub fn is_relative(&self) -> bool {
        !matches!(self.kind, ImportKind::External)
    }
}

/// Everything one extractor learned about one file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileFacts {
    pub identifiers: Identifiers,
    pub imports: Vec<ImportRef>,
    /// Detected idioms (framework imports); seeds the report's
    /// `code_patterns`.
    pub tags: Vec<String>,
}

impl FileFacts {
    pub fn add_import(&mut self, import: ImportRef) {
        if !self.imports.contains(&import) {
            self.imports.push(import);
        }
    }

    pub fn add_tag(&mut self, tag: &str) {
        if !self.tags.iter().any(|t| t == tag) {
            self.tags.push(tag.to_string());
        }
    }
}

// =============================================================================
// Extractor Trait
// =============================================================================

pub trait Extractor: Send + Sync {
    /// Extract identifiers, imports, and idiom tags from one file.
    ///
    /// A `Parse` error here is absorbed by the extraction batch and degrades
    /// to empty facts for the file.
    fn extract(&self, path: &str, content: &str) -> Result<FileFacts>;

    fn language(&self) -> Language;
}

// =============================================================================
// Tree-sitter Helpers
// =============================================================================

/// Create a tree-sitter parser configured for `language`.
pub fn create_ts_parser<L: Into<tree_sitter::Language>>(
    language: L,
    lang_name: &str,
    path: &str,
) -> Result<tree_sitter::Parser> {
    let mut parser = tree_sitter::Parser::new();
    parser
        .set_language(&language.into())
        .map_err(|e| ArchError::Parse {
            message: format!("failed to set {} language: {}", lang_name, e),
            path: path.to_string(),
        })?;
    Ok(parser)
}

/// Parse `content`, or fail with a `Parse` error carrying the file path.
pub fn parse_tree(
    parser: &mut tree_sitter::Parser,
    content: &str,
    lang_name: &str,
    path: &str,
) -> Result<tree_sitter::Tree> {
    parser.parse(content, None).ok_or_else(|| ArchError::Parse {
        message: format!("failed to parse {} file", lang_name),
        path: path.to_string(),
    })
}

/// Run a query and collect, per match, a map of capture name to captured
/// text. Invalid query strings yield no matches.
pub fn match_captures(
    language: &tree_sitter::Language,
    query_str: &str,
    root: tree_sitter::Node,
    content: &[u8],
) -> Vec<BTreeMap<String, String>> {
    let mut results = Vec::new();

    let Ok(query) = Query::new(language, query_str) else {
        tracing::debug!("invalid tree-sitter query: {}", query_str);
        return results;
    };
    let names: Vec<String> = query
        .capture_names()
        .iter()
        .map(|n| n.to_string())
        .collect();

    let mut cursor = QueryCursor::new();
    let mut matches = cursor.matches(&query, root, content);
    while let Some(m) = matches.next() {
        let mut captured: BTreeMap<String, String> = BTreeMap::new();
        for cap in m.captures.iter() {
            let name = names.get(cap.index as usize).cloned().unwrap_or_default();
            let text = cap.node.utf8_text(content).unwrap_or("").to_string();
            captured.insert(name, text);
        }
        results.push(captured);
    }
    results
}

/// Convenience for single-capture queries: the captured texts, in match
/// order.
pub fn capture_texts(
    language: &tree_sitter::Language,
    query_str: &str,
    root: tree_sitter::Node,
    content: &[u8],
) -> Vec<String> {
    match_captures(language, query_str, root, content)
        .into_iter()
        .flat_map(|m| m.into_values())
        .collect()
}
