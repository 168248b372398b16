//! Language detection: single source of truth for mapping file extensions to
//! the closed set of languages the extractors understand.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

struct LanguageMeta {
    display_name: &'static str,
    extensions: &'static [&'static str],
    /// Whether a dedicated fact extractor exists for this language.
    has_extractor: bool,
}

macro_rules! lang_meta {
    ($display:literal, [$($ext:literal),*], $extractor:literal) => {
        LanguageMeta {
            display_name: $display,
            extensions: &[$($ext),*],
            has_extractor: $extractor,
        }
    };
}

/// Languages recognized by the fact-extraction layer.
///
/// A closed enum keyed strategy table: dispatch from a `Language` value to an
/// extractor happens in [`super::extractor_for`], never by string matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum Language {
    TypeScript,
    JavaScript,
    Tsx,
    Jsx,
    Python,
    Rust,
    Go,
    Java,
    Kotlin,
    Ruby,
    Php,
    CSharp,
    Swift,
    #[default]
    Unknown,
}

impl Language {
    fn meta(&self) -> LanguageMeta {
        match self {
            Language::TypeScript => lang_meta!("TypeScript", ["ts", "mts", "cts"], true),
            Language::JavaScript => lang_meta!("JavaScript", ["js", "mjs", "cjs"], true),
            Language::Tsx => lang_meta!("TSX", ["tsx"], true),
            Language::Jsx => lang_meta!("JSX", ["jsx"], true),
            Language::Python => lang_meta!("Python", ["py", "pyi", "pyw"], true),
            Language::Rust => lang_meta!("Rust", ["rs"], true),
            Language::Go => lang_meta!("Go", ["go"], true),
            Language::Java => lang_meta!("Java", ["java"], true),
            Language::Kotlin => lang_meta!("Kotlin", ["kt", "kts"], false),
            Language::Ruby => lang_meta!("Ruby", ["rb", "rake"], false),
            Language::Php => lang_meta!("PHP", ["php", "phtml"], false),
            Language::CSharp => lang_meta!("C#", ["cs"], false),
            Language::Swift => lang_meta!("Swift", ["swift"], false),
            Language::Unknown => lang_meta!("Unknown", [], false),
        }
    }

    pub const ALL: [Language; 14] = [
        Language::TypeScript,
        Language::JavaScript,
        Language::Tsx,
        Language::Jsx,
        Language::Python,
        Language::Rust,
        Language::Go,
        Language::Java,
        Language::Kotlin,
        Language::Ruby,
        Language::Php,
        Language::CSharp,
        Language::Swift,
        Language::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        self.meta().display_name
    }

    pub fn from_extension(ext: &str) -> Self {
        let lower = ext.to_lowercase();
        for lang in Self::ALL {
            if lang.meta().extensions.contains(&lower.as_str()) {
                return lang;
            }
        }
        Language::Unknown
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        path.as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(Self::from_extension)
            .unwrap_or(Language::Unknown)
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Language::Unknown)
    }

    /// Whether a dedicated extractor exists. Languages without one fall back
    /// to an empty result during extraction.
    pub fn has_extractor(&self) -> bool {
        self.meta().has_extractor
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(Language::from_extension("rs"), Language::Rust);
        assert_eq!(Language::from_extension("RS"), Language::Rust);
        assert_eq!(Language::from_extension("tsx"), Language::Tsx);
        assert_eq!(Language::from_extension("py"), Language::Python);
        assert_eq!(Language::from_extension("xyz"), Language::Unknown);
    }

    #[test]
    fn test_from_path() {
        assert_eq!(Language::from_path("src/main.rs"), Language::Rust);
        assert_eq!(Language::from_path("Component.tsx"), Language::Tsx);
        assert_eq!(Language::from_path("no_extension"), Language::Unknown);
    }

    #[test]
    fn test_extractor_support() {
        assert!(Language::TypeScript.has_extractor());
        assert!(Language::Go.has_extractor());
        assert!(!Language::Swift.has_extractor());
        assert!(!Language::Unknown.has_extractor());
    }

    #[test]
    fn test_metadata_consistency() {
        for lang in Language::ALL {
            assert!(!lang.as_str().is_empty(), "empty display name for {:?}", lang);
        }
    }
}
