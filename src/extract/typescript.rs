//! TypeScript/JavaScript/TSX/JSX fact extractor.
//!
//! One extractor covers all four dialects; TSX/JSX files use the TSX grammar
//! and additionally classify PascalCase declarations as UI components.

use tree_sitter::Language as TsLanguage;

use super::traits::{
    Extractor, FileFacts, ImportRef, create_ts_parser, match_captures, parse_tree,
};
use super::Language;
use crate::naming;
use crate::types::{NamingConvention, Result};

/// Framework idioms recognized in external import paths.
const FRAMEWORK_TAGS: &[(&str, &str)] = &[
    ("react", "react"),
    ("next", "nextjs"),
    ("vue", "vue"),
    ("@angular", "angular"),
    ("svelte", "svelte"),
    ("express", "express"),
    ("@nestjs", "nestjs"),
    ("redux", "redux"),
    ("@reduxjs", "redux"),
];

const IMPORT_QUERY: &str = r#"
    (import_statement source: (string) @source)
    (export_statement source: (string) @source)
    (call_expression
        function: (identifier) @callee
        arguments: (arguments (string) @source))
"#;

const IDENTIFIER_QUERY: &str = r#"
    (variable_declarator name: (identifier) @variable)
    (function_declaration name: (identifier) @function)
    (method_definition name: (property_identifier) @function)
    (class_declaration name: (type_identifier) @class)
    (interface_declaration name: (type_identifier) @class)
    (enum_declaration name: (identifier) @class)
    (type_alias_declaration name: (type_identifier) @class)
"#;

pub struct TypeScriptExtractor {
    dialect: Language,
}

impl TypeScriptExtractor {
    pub fn new(dialect: Language) -> Self {
        Self { dialect }
    }

    fn grammar(&self) -> TsLanguage {
        match self.dialect {
            Language::Tsx | Language::Jsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
            _ => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
        }
    }

    fn is_component_dialect(&self) -> bool {
        matches!(self.dialect, Language::Tsx | Language::Jsx)
    }
}

impl Extractor for TypeScriptExtractor {
    fn extract(&self, path: &str, content: &str) -> Result<FileFacts> {
        let grammar = self.grammar();
        let mut parser = create_ts_parser(grammar.clone(), "TypeScript", path)?;
        let tree = parse_tree(&mut parser, content, "TypeScript", path)?;
        let root = tree.root_node();
        let bytes = content.as_bytes();

        let mut facts = FileFacts::default();

        for m in match_captures(&grammar, IMPORT_QUERY, root, bytes) {
            // Bare call matches are only imports when the callee is require()
            if let Some(callee) = m.get("callee")
                && callee != "require"
            {
                continue;
            }
            let Some(raw) = m.get("source") else { continue };
            let source = raw.trim_matches(|c| c == '"' || c == '\'' || c == '`');
            if source.is_empty() {
                continue;
            }

            if source.starts_with("./") || source.starts_with("../") {
                facts.add_import(ImportRef::relative(source));
            } else {
                let key = external_key(source);
                for (prefix, tag) in FRAMEWORK_TAGS {
                    if source == *prefix || source.starts_with(&format!("{}/", prefix)) {
                        facts.add_tag(tag);
                    }
                }
                facts.add_import(ImportRef::external(key));
            }
        }

        for m in match_captures(&grammar, IDENTIFIER_QUERY, root, bytes) {
            if let Some(name) = m.get("variable") {
                if self.is_component_dialect() && is_pascal(name) {
                    facts.identifiers.add_component(name);
                } else {
                    facts.identifiers.add_variable(name);
                }
            }
            if let Some(name) = m.get("function") {
                if self.is_component_dialect() && is_pascal(name) {
                    facts.identifiers.add_component(name);
                } else {
                    facts.identifiers.add_function(name);
                }
            }
            if let Some(name) = m.get("class") {
                facts.identifiers.add_class(name);
            }
        }

        Ok(facts)
    }

    fn language(&self) -> Language {
        self.dialect
    }
}

/// Package name for an external import: `@scope/pkg` keeps two segments,
/// everything else keeps the first.
fn external_key(source: &str) -> String {
    let mut parts = source.split('/');
    match parts.next() {
        Some(scope) if scope.starts_with('@') => match parts.next() {
            Some(pkg) => format!("{}/{}", scope, pkg),
            None => scope.to_string(),
        },
        Some(first) => first.to_string(),
        None => source.to_string(),
    }
}

fn is_pascal(name: &str) -> bool {
    naming::classify(name) == NamingConvention::PascalCase
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::traits::ImportKind;

    fn extract(dialect: Language, content: &str) -> FileFacts {
        TypeScriptExtractor::new(dialect)
            .extract("src/app.ts", content)
            .unwrap()
    }

    #[test]
    fn test_imports_and_requires() {
        let facts = extract(
            Language::TypeScript,
            r#"
import { User } from './models/user';
import express from 'express';
const fs = require('fs');
"#,
        );

        assert!(facts
            .imports
            .contains(&ImportRef::relative("./models/user")));
        assert!(facts.imports.contains(&ImportRef::external("express")));
        assert!(facts.imports.contains(&ImportRef::external("fs")));
        assert!(facts.tags.contains(&"express".to_string()));
    }

    #[test]
    fn test_scoped_package_key() {
        let facts = extract(
            Language::TypeScript,
            "import { Controller } from '@nestjs/common';\n",
        );
        assert!(facts
            .imports
            .contains(&ImportRef::external("@nestjs/common")));
        assert!(facts.tags.contains(&"nestjs".to_string()));
    }

    #[test]
    fn test_identifiers() {
        let facts = extract(
            Language::TypeScript,
            r#"
const userCount = 1;
function fetchData() {}
class UserModel {}
interface UserRepo {}
"#,
        );

        assert_eq!(facts.identifiers.variables, vec!["userCount"]);
        assert_eq!(facts.identifiers.functions, vec!["fetchData"]);
        assert_eq!(facts.identifiers.classes, vec!["UserModel", "UserRepo"]);
        assert!(facts.identifiers.components.is_empty());
    }

    #[test]
    fn test_tsx_components() {
        let facts = extract(
            Language::Tsx,
            r#"
import React from 'react';
function UserCard() { return <div />; }
const Page = () => <UserCard />;
const helperValue = 1;
"#,
        );

        assert!(facts.identifiers.components.contains(&"UserCard".to_string()));
        assert!(facts.identifiers.components.contains(&"Page".to_string()));
        assert!(facts.identifiers.variables.contains(&"helperValue".to_string()));
        assert!(facts.tags.contains(&"react".to_string()));
    }

    #[test]
    fn test_deduplication_preserves_order() {
        let facts = extract(
            Language::TypeScript,
            "const a = 1;\nconst b = 2;\nfunction f() { const a = 3; }\n",
        );
        assert_eq!(facts.identifiers.variables, vec!["a", "b"]);
    }

    #[test]
    fn test_import_kind_flags() {
        let rel = ImportRef::relative("./x");
        let ext = ImportRef::external("react");
        assert!(rel.is_relative());
        assert!(!ext.is_relative());
        assert_eq!(ext.kind, ImportKind::External);
    }
}
