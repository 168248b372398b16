//! Ignore-pattern composition.
//!
//! Caller-supplied globs are unioned with patterns translated from the
//! project's own `.gitignore`. The result is an explicit ordered list of
//! compiled glob predicates evaluated left to right, so precedence stays
//! auditable. Negation (`!`) entries are not honored; they are skipped with a
//! debug log.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

/// Directories that are never worth walking regardless of ignore files.
const ALWAYS_SKIP: &[&str] = &[".git", "node_modules", "target", "__pycache__", ".venv"];

pub struct IgnoreRules {
    predicates: Vec<glob::Pattern>,
}

impl IgnoreRules {
    /// Build rules from caller globs plus the root's `.gitignore`, if any.
    pub fn for_root(root: &Path, extra: &[String]) -> Self {
        let mut raw: Vec<String> = Vec::new();

        for dir in ALWAYS_SKIP {
            raw.push(format!("**/{}", dir));
            raw.push(format!("**/{}/**", dir));
        }

        raw.extend(extra.iter().cloned());

        let gitignore = root.join(".gitignore");
        if let Ok(content) = fs::read_to_string(&gitignore) {
            for line in content.lines() {
                raw.extend(translate_gitignore_line(line));
            }
        }

        let predicates = raw
            .iter()
            .filter_map(|p| match glob::Pattern::new(p) {
                Ok(pattern) => Some(pattern),
                Err(e) => {
                    warn!("invalid ignore glob {:?}: {}", p, e);
                    None
                }
            })
            .collect();

        Self { predicates }
    }

    /// Whether a root-relative, slash-normalized path matches any rule.
    pub fn matches(&self, relative: &str) -> bool {
        self.predicates.iter().any(|p| p.matches(relative))
    }
}

/// Translate one `.gitignore` entry into glob patterns over root-relative
/// paths:
///
/// - leading slash: root-anchored entry
/// - trailing slash: the directory and all of its descendants
/// - unanchored: match anywhere in the tree
pub fn translate_gitignore_line(line: &str) -> Vec<String> {
    let entry = line.trim();
    if entry.is_empty() || entry.starts_with('#') {
        return Vec::new();
    }
    if entry.starts_with('!') {
        debug!("skipping gitignore negation entry {:?}", entry);
        return Vec::new();
    }

    let anchored = entry.starts_with('/');
    let directory = entry.ends_with('/');
    let core = entry.trim_start_matches('/').trim_end_matches('/');
    if core.is_empty() {
        return Vec::new();
    }

    let mut patterns = Vec::new();
    if anchored {
        patterns.push(core.to_string());
        patterns.push(format!("{}/**", core));
    } else if directory {
        patterns.push(core.to_string());
        patterns.push(format!("{}/**", core));
        patterns.push(format!("**/{}", core));
        patterns.push(format!("**/{}/**", core));
    } else {
        patterns.push(core.to_string());
        patterns.push(format!("{}/**", core));
        patterns.push(format!("**/{}", core));
        patterns.push(format!("**/{}/**", core));
    }
    patterns
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_translate_anchored() {
        let patterns = translate_gitignore_line("/dist");
        assert_eq!(patterns, vec!["dist".to_string(), "dist/**".to_string()]);
    }

    #[test]
    fn test_translate_directory() {
        let patterns = translate_gitignore_line("build/");
        assert!(patterns.contains(&"**/build/**".to_string()));
        assert!(patterns.contains(&"build/**".to_string()));
    }

    #[test]
    fn test_translate_skips_comments_and_negations() {
        assert!(translate_gitignore_line("# a comment").is_empty());
        assert!(translate_gitignore_line("").is_empty());
        assert!(translate_gitignore_line("!keep.me").is_empty());
    }

    #[test]
    fn test_rules_from_gitignore_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".gitignore"), "/dist\ncoverage/\n*.log\n").unwrap();

        let rules = IgnoreRules::for_root(dir.path(), &[]);
        assert!(rules.matches("dist"));
        assert!(rules.matches("dist/bundle.js"));
        assert!(rules.matches("packages/a/coverage/lcov.info"));
        assert!(rules.matches("server/debug.log"));
        assert!(!rules.matches("src/main.ts"));
    }

    #[test]
    fn test_caller_patterns_apply() {
        let dir = TempDir::new().unwrap();
        let rules = IgnoreRules::for_root(dir.path(), &["generated/**".to_string()]);
        assert!(rules.matches("generated/api.ts"));
        assert!(!rules.matches("src/api.ts"));
    }

    #[test]
    fn test_always_skip_dirs() {
        let dir = TempDir::new().unwrap();
        let rules = IgnoreRules::for_root(dir.path(), &[]);
        assert!(rules.matches("node_modules"));
        assert!(rules.matches("a/b/node_modules/pkg/index.js"));
        assert!(rules.matches(".git/HEAD"));
    }
}
