//! Go fact extractor.
//!
//! Go imports are module paths; only explicit `./` prefixes resolve inside
//! the project. Domain-style paths are keyed by their final segment so the
//! external node carries the package name, not the host.

use super::traits::{
    Extractor, FileFacts, ImportRef, create_ts_parser, match_captures, parse_tree,
};
use super::Language;
use crate::types::Result;

/// Matched as substrings of the full import path.
const FRAMEWORK_TAGS: &[(&str, &str)] = &[
    ("gin-gonic/gin", "gin"),
    ("labstack/echo", "echo"),
    ("gorilla/mux", "gorilla"),
    ("spf13/cobra", "cobra"),
    ("google.golang.org/grpc", "grpc"),
];

const IMPORT_QUERY: &str = r#"
    (import_spec path: (interpreted_string_literal) @source)
"#;

const IDENTIFIER_QUERY: &str = r#"
    (function_declaration name: (identifier) @function)
    (method_declaration name: (field_identifier) @function)
    (type_declaration (type_spec name: (type_identifier) @class))
    (var_spec name: (identifier) @variable)
    (const_spec name: (identifier) @variable)
    (short_var_declaration left: (expression_list (identifier) @variable))
"#;

pub struct GoExtractor;

impl Extractor for GoExtractor {
    fn extract(&self, path: &str, content: &str) -> Result<FileFacts> {
        let grammar: tree_sitter::Language = tree_sitter_go::LANGUAGE.into();
        let mut parser = create_ts_parser(grammar.clone(), "Go", path)?;
        let tree = parse_tree(&mut parser, content, "Go", path)?;
        let root = tree.root_node();
        let bytes = content.as_bytes();

        let mut facts = FileFacts::default();

        for m in match_captures(&grammar, IMPORT_QUERY, root, bytes) {
            let Some(raw) = m.get("source") else { continue };
            let source = raw.trim_matches('"');
            if source.is_empty() {
                continue;
            }

            if source.starts_with("./") || source.starts_with("../") {
                facts.add_import(ImportRef::relative(source));
            } else {
                for (needle, tag) in FRAMEWORK_TAGS {
                    if source.contains(needle) {
                        facts.add_tag(tag);
                    }
                }
                facts.add_import(ImportRef::external(external_key(source)));
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
        Language::Go
    }
}

/// Package key for an external import path. Hosted paths
/// (`github.com/user/pkg`) use the final segment; bare stdlib paths
/// (`net/http`) keep the full path.
fn external_key(source: &str) -> String {
    if source
        .split('/')
        .next()
        .is_some_and(|host| host.contains('.'))
    {
        source.rsplit('/').next().unwrap_or(source).to_string()
    } else {
        source.to_string()
    }
}
