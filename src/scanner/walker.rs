//! Filesystem model builder.
//!
//! Walks a root directory into an immutable [`ProjectStructure`]. A missing
//! or unreadable root is the only fatal failure; unreadable entries inside
//! the tree are logged and skipped so that one bad file never aborts a scan.

use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use ignore::WalkBuilder;
use tracing::{debug, warn};

use super::ignore_rules::IgnoreRules;
use crate::config::AnalyzerConfig;
use crate::deadline::{self, Deadline};
use crate::types::{ArchError, DirectoryRecord, FileRecord, FileType, ProjectStructure, Result};

/// Walk `root` and build the filesystem model.
///
/// Entries matching the composed ignore rules (caller globs plus translated
/// `.gitignore` entries) are pruned before descent. Output ordering is
/// deterministic: records are sorted by relative path.
pub fn scan(
    root: &Path,
    config: &AnalyzerConfig,
    deadline: Option<&Deadline>,
) -> Result<ProjectStructure> {
    let meta = std::fs::metadata(root).map_err(|_| ArchError::RootNotFound {
        path: root.to_path_buf(),
    })?;
    if !meta.is_dir() {
        return Err(ArchError::RootNotFound {
            path: root.to_path_buf(),
        });
    }

    let rules = Arc::new(IgnoreRules::for_root(root, &config.ignore));
    let mut structure = ProjectStructure::new(root.to_path_buf());

    let filter_root = root.to_path_buf();
    let filter_rules = Arc::clone(&rules);
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .hidden(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(move |entry| match relative_of(entry.path(), &filter_root) {
            Some(rel) if !rel.is_empty() => !filter_rules.matches(&rel),
            _ => true,
        })
        .build();

    for entry in walker {
        deadline::check(deadline)?;

        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!("skipping unreadable entry: {}", e);
                continue;
            }
        };
        let path = entry.path();
        if path == root {
            continue;
        }
        let Some(relative_path) = relative_of(path, root) else {
            continue;
        };
        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(n) => n.to_string(),
            None => continue,
        };
        let parent = match relative_path.rsplit_once('/') {
            Some((dir, _)) => dir.to_string(),
            None => String::new(),
        };

        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        if is_dir {
            structure.directories.push(DirectoryRecord {
                path: path.to_path_buf(),
                depth: relative_path.matches('/').count() + 1,
                relative_path,
                name,
                parent,
            });
            continue;
        }

        let metadata = match path.metadata() {
            Ok(m) => m,
            Err(e) => {
                warn!("skipping unreadable file {}: {}", path.display(), e);
                continue;
            }
        };
        if !metadata.is_file() {
            continue;
        }

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_string());
        let file_type = FileType::classify(&name, extension.as_deref());
        let modified = metadata.modified().ok().map(DateTime::<Utc>::from);

        *structure.file_type_counts.entry(file_type).or_default() += 1;
        if let Some(ext) = &extension {
            structure.extensions.insert(ext.to_lowercase());
        }
        structure.files.push(FileRecord {
            path: path.to_path_buf(),
            relative_path,
            name,
            extension,
            size: metadata.len(),
            file_type,
            modified,
            parent,
        });
    }

    structure
        .files
        .sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
    structure
        .directories
        .sort_by(|a, b| a.relative_path.cmp(&b.relative_path));

    debug!(
        "scanned {}: {} files, {} directories",
        root.display(),
        structure.files.len(),
        structure.directories.len()
    );
    Ok(structure)
}

/// Slash-normalized path relative to the scan root.
fn relative_of(path: &Path, root: &Path) -> Option<String> {
    path.strip_prefix(root)
        .ok()
        .map(|p| p.to_string_lossy().replace('\\', "/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_missing_root_is_fatal() {
        let err = scan(
            Path::new("/definitely/not/here"),
            &AnalyzerConfig::default(),
            None,
        )
        .unwrap_err();
        assert!(matches!(err, ArchError::RootNotFound { .. }));
    }

    #[test]
    fn test_scan_builds_records() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "src/models/user.ts", "export class User {}");
        write(dir.path(), "src/index.ts", "import './models/user';");
        write(dir.path(), "README.md", "# hi");

        let structure = scan(dir.path(), &AnalyzerConfig::default(), None).unwrap();

        assert_eq!(structure.files.len(), 3);
        assert_eq!(structure.directories.len(), 2);
        assert_eq!(
            structure.file_type_counts.get(&FileType::TypeScript),
            Some(&2)
        );
        assert_eq!(
            structure.file_type_counts.get(&FileType::Documentation),
            Some(&1)
        );
        assert!(structure.extensions.contains("ts"));

        // parent invariant
        for file in &structure.files {
            assert!(
                file.parent.is_empty()
                    || structure
                        .directories
                        .iter()
                        .any(|d| d.relative_path == file.parent)
            );
        }
    }

    #[test]
    fn test_gitignore_entries_are_honored() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), ".gitignore", "/dist\ngenerated/\n");
        write(dir.path(), "dist/bundle.js", "x");
        write(dir.path(), "src/generated/api.ts", "x");
        write(dir.path(), "src/app.ts", "x");

        let structure = scan(dir.path(), &AnalyzerConfig::default(), None).unwrap();
        let paths: Vec<&str> = structure
            .files
            .iter()
            .map(|f| f.relative_path.as_str())
            .collect();

        assert!(paths.contains(&"src/app.ts"));
        assert!(!paths.iter().any(|p| p.starts_with("dist/")));
        assert!(!paths.iter().any(|p| p.contains("generated")));
    }

    #[test]
    fn test_caller_ignores_are_honored() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "vendor/lib.js", "x");
        write(dir.path(), "src/app.js", "x");

        let config = AnalyzerConfig {
            ignore: vec!["vendor/**".to_string(), "vendor".to_string()],
            ..Default::default()
        };
        let structure = scan(dir.path(), &config, None).unwrap();
        assert_eq!(structure.files.len(), 1);
        assert_eq!(structure.files[0].relative_path, "src/app.js");
    }

    #[test]
    fn test_deterministic_order() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "b.ts", "x");
        write(dir.path(), "a.ts", "x");
        write(dir.path(), "c/d.ts", "x");

        let first = scan(dir.path(), &AnalyzerConfig::default(), None).unwrap();
        let second = scan(dir.path(), &AnalyzerConfig::default(), None).unwrap();
        let rel =
            |s: &ProjectStructure| s.files.iter().map(|f| f.relative_path.clone()).collect::<Vec<_>>();
        assert_eq!(rel(&first), rel(&second));
        assert_eq!(rel(&first), vec!["a.ts", "b.ts", "c/d.ts"]);
    }

    #[test]
    fn test_empty_root() {
        let dir = TempDir::new().unwrap();
        let structure = scan(dir.path(), &AnalyzerConfig::default(), None).unwrap();
        assert!(structure.is_empty());
    }
}
