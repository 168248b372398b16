//! Java fact extractor.
//!
//! Java imports are package-qualified and never resolve to project files
//! here; each becomes an external node keyed by its leading two package
//! segments (`org.springframework`, `java.util`).

use super::traits::{
    Extractor, FileFacts, ImportRef, create_ts_parser, match_captures, parse_tree,
};
use super::Language;
use crate::types::Result;

const FRAMEWORK_TAGS: &[(&str, &str)] = &[
    ("org.springframework", "spring"),
    ("jakarta.persistence", "jpa"),
    ("javax.persistence", "jpa"),
    ("io.micronaut", "micronaut"),
    ("io.quarkus", "quarkus"),
];

const IMPORT_QUERY: &str = r#"
    (import_declaration (scoped_identifier) @import)
"#;

const IDENTIFIER_QUERY: &str = r#"
    (class_declaration name: (identifier) @class)
    (interface_declaration name: (identifier) @class)
    (enum_declaration name: (identifier) @class)
    (record_declaration name: (identifier) @class)
    (method_declaration name: (identifier) @function)
    (local_variable_declaration declarator: (variable_declarator name: (identifier) @variable))
    (field_declaration declarator: (variable_declarator name: (identifier) @variable))
"#;

pub struct JavaExtractor;

impl Extractor for JavaExtractor {
    fn extract(&self, path: &str, content: &str) -> Result<FileFacts> {
        let grammar: tree_sitter::Language = tree_sitter_java::LANGUAGE.into();
        let mut parser = create_ts_parser(grammar.clone(), "Java", path)?;
        let tree = parse_tree(&mut parser, content, "Java", path)?;
        let root = tree.root_node();
        let bytes = content.as_bytes();

        let mut facts = FileFacts::default();

        for m in match_captures(&grammar, IMPORT_QUERY, root, bytes) {
            let Some(import) = m.get("import") else { continue };
            for (prefix, tag) in FRAMEWORK_TAGS {
                if import.starts_with(prefix) {
                    facts.add_tag(tag);
                }
            }
            facts.add_import(ImportRef::external(package_key(import)));
        }

        for m in match_captures(&grammar, IDENTIFIER_QUERY, root, bytes) {
            if let Some(name) = m.get("class") {
                facts.identifiers.add_class(name);
            }
            if let Some(name) = m.get("function") {
                facts.identifiers.add_function(name);
            }
            if let Some(name) = m.get("variable") {
                facts.identifiers.add_variable(name);
            }
        }

        Ok(facts)
    }

    fn language(&self) -> Language {
        Language::Java
    }
}

fn package_key(import: &str) -> String {
    let segments: Vec<&str> = import.split('.').collect();
    if segments.len() >= 2 {
        format!("{}.{}", segments[0], segments[1])
    } else {
        import.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(content: &str) -> FileFacts {
        JavaExtractor
            .extract("src/main/java/App.java", content)
            .unwrap()
    }

    #[test]
    fn test_imports_and_tags() {
        let facts = extract(
            "import java.util.List;\nimport org.springframework.web.bind.annotation.RestController;\n\nclass App {}\n",
        );
        assert!(facts.imports.contains(&ImportRef::external("java.util")));
        assert!(facts
            .imports
            .contains(&ImportRef::external("org.springframework")));
        assert!(facts.tags.contains(&"spring".to_string()));
    }

    #[test]
    fn test_identifiers() {
        let facts = extract(
            r#"
public class UserService {
    private int retryCount;

    public void fetchData() {
        int localTotal = 0;
    }
}

interface UserRepository {}
"#,
        );
        assert!(facts.identifiers.classes.contains(&"UserService".to_string()));
        assert!(facts.identifiers.classes.contains(&"UserRepository".to_string()));
        assert_eq!(facts.identifiers.functions, vec!["fetchData"]);
        assert!(facts.identifiers.variables.contains(&"retryCount".to_string()));
        assert!(facts.identifiers.variables.contains(&"localTotal".to_string()));
    }
}
