//! Rust fact extractor.
//!
//! `use` paths and bodiless `mod` declarations become import references;
//! `crate::` paths resolve against the source root, `self::`/`super::`
//! against the importing file's directory.

use super::traits::{
    Extractor, FileFacts, ImportRef, create_ts_parser, match_captures, parse_tree,
};
use super::Language;
use crate::types::Result;

const FRAMEWORK_TAGS: &[(&str, &str)] = &[
    ("tokio", "tokio"),
    ("axum", "axum"),
    ("actix_web", "actix"),
    ("rocket", "rocket"),
    ("diesel", "diesel"),
    ("sqlx", "sqlx"),
    ("serde", "serde"),
];

const IMPORT_QUERY: &str = r#"
    (use_declaration argument: (_) @use)
    (mod_item name: (identifier) @module !body)
"#;

const IDENTIFIER_QUERY: &str = r#"
    (function_item name: (identifier) @function)
    (struct_item name: (type_identifier) @class)
    (enum_item name: (type_identifier) @class)
    (trait_item name: (type_identifier) @class)
    (let_declaration pattern: (identifier) @variable)
    (const_item name: (identifier) @variable)
    (static_item name: (identifier) @variable)
"#;

pub struct RustExtractor;

impl Extractor for RustExtractor {
    fn extract(&self, path: &str, content: &str) -> Result<FileFacts> {
        let grammar: tree_sitter::Language = tree_sitter_rust::LANGUAGE.into();
        let mut parser = create_ts_parser(grammar.clone(), "Rust", path)?;
        let tree = parse_tree(&mut parser, content, "Rust", path)?;
        let root = tree.root_node();
        let bytes = content.as_bytes();

        let mut facts = FileFacts::default();

        for m in match_captures(&grammar, IMPORT_QUERY, root, bytes) {
            if let Some(name) = m.get("module") {
                facts.add_import(ImportRef::relative(format!("./{}", name)));
            }
            if let Some(use_path) = m.get("use")
                && let Some(import) = normalize_use_path(use_path)
            {
                if !import.is_relative() {
                    for (pkg, tag) in FRAMEWORK_TAGS {
                        if import.source == *pkg {
                            facts.add_tag(tag);
                        }
                    }
                }
                facts.add_import(import);
            }
        }

        for m in match_captures(&grammar, IDENTIFIER_QUERY, root, bytes) {
            if let Some(name) = m.get("function") {
                facts.identifiers.add_function(name);
            }
            if let Some(name) = m.get("class") {
                facts.identifiers.add_class(name);
            }
            if let Some(name) = m.get("variable") {
                facts.identifiers.add_variable(name);
            }
        }

        Ok(facts)
    }

    fn language(&self) -> Language {
        Language::Rust
    }
}

/// Reduce a `use` path to a module reference.
///
/// Group imports keep the segments before the brace; the trailing segment of
/// a multi-segment path is assumed to be an item name and trimmed.
fn normalize_use_path(use_path: &str) -> Option<ImportRef> {
    let trimmed = match use_path.find('{') {
        Some(idx) => use_path[..idx].trim_end_matches("::"),
        None => use_path,
    };
    let segments: Vec<&str> = trimmed
        .split("::")
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != "*")
        .collect();
    let first = *segments.first()?;

    match first {
        "crate" => Some(ImportRef::anchored(module_path(&segments[1..]))).filter(non_empty),
        "self" => {
            Some(ImportRef::relative(format!("./{}", module_path(&segments[1..]))))
                .filter(|i| i.source != "./")
        }
        "super" => {
            let supers = segments.iter().take_while(|s| **s == "super").count();
            let rest = module_path(&segments[supers..]);
            if rest.is_empty() {
                None
            } else {
                Some(ImportRef::relative(format!(
                    "{}{}",
                    "../".repeat(supers),
                    rest
                )))
            }
        }
        _ => Some(ImportRef::external(first.to_string())),
    }
}

fn non_empty(import: &ImportRef) -> bool {
    !import.source.is_empty()
}

/// Join path segments, dropping the trailing item name when the path is
/// deep enough to carry one.
fn module_path(segments: &[&str]) -> String {
    match segments.len() {
        0 => String::new(),
        1 => segments[0].to_string(),
        n => segments[..n - 1].join("/"),
    }
}
