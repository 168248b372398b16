//! Python fact extractor.

use super::traits::{
    Extractor, FileFacts, ImportRef, create_ts_parser, match_captures, parse_tree,
};
use super::Language;
use crate::types::Result;

const FRAMEWORK_TAGS: &[(&str, &str)] = &[
    ("django", "django"),
    ("flask", "flask"),
    ("fastapi", "fastapi"),
    ("celery", "celery"),
    ("sqlalchemy", "sqlalchemy"),
    ("pydantic", "pydantic"),
];

const IMPORT_QUERY: &str = r#"
    (import_statement name: (dotted_name) @module)
    (import_statement name: (aliased_import name: (dotted_name) @module))
    (import_from_statement module_name: (dotted_name) @module)
    (import_from_statement module_name: (relative_import) @module)
"#;

const IDENTIFIER_QUERY: &str = r#"
    (function_definition name: (identifier) @function)
    (class_definition name: (identifier) @class)
    (assignment left: (identifier) @variable)
"#;

pub struct PythonExtractor;

impl Extractor for PythonExtractor {
    fn extract(&self, path: &str, content: &str) -> Result<FileFacts> {
        let grammar: tree_sitter::Language = tree_sitter_python::LANGUAGE.into();
        let mut parser = create_ts_parser(grammar.clone(), "Python", path)?;
        let tree = parse_tree(&mut parser, content, "Python", path)?;
        let root = tree.root_node();
        let bytes = content.as_bytes();

        let mut facts = FileFacts::default();

        for m in match_captures(&grammar, IMPORT_QUERY, root, bytes) {
            let Some(module) = m.get("module") else { continue };
            if let Some(import) = normalize_module(module) {
                if !import.is_relative() {
                    for (pkg, tag) in FRAMEWORK_TAGS {
                        if first_segment(module) == *pkg {
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
        Language::Python
    }
}

/// Turn a dotted module reference into a slash-separated import.
///
/// `os.path` stays external (keyed by `os`); `.models` and `..core.utils`
/// become paths relative to the importing file's directory. A bare package
/// self-import (`from . import x`) carries no resolvable target and is
/// dropped.
fn normalize_module(module: &str) -> Option<ImportRef> {
    let dots = module.chars().take_while(|c| *c == '.').count();
    let rest = &module[dots..];

    if dots == 0 {
        return Some(ImportRef::external(first_segment(module).to_string()));
    }
    if rest.is_empty() {
        return None;
    }

    let path = rest.replace('.', "/");
    let prefix = if dots == 1 {
        "./".to_string()
    } else {
        "../".repeat(dots - 1)
    };
    Some(ImportRef::relative(format!("{}{}", prefix, path)))
}

fn first_segment(module: &str) -> &str {
    module.split('.').next().unwrap_or(module)
}
