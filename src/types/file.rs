//! Filesystem model: file/directory records and the file-type taxonomy.
//!
//! `FileType` is a stable enumeration with compatibility weight: downstream
//! consumers key template selection off the serialized tag, so variants must
//! not be renamed. Classification is a pure function of filename/extension.

use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// File Type Taxonomy
// =============================================================================

/// Fixed file-type classification used across the report.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "kebab-case")]
pub enum FileType {
    Config,
    Documentation,
    Lockfile,
    // Source languages
    JavaScript,
    TypeScript,
    React,
    Python,
    Rust,
    Go,
    Java,
    Kotlin,
    Ruby,
    Php,
    CSharp,
    Swift,
    C,
    Cpp,
    Scala,
    Shell,
    Sql,
    // Web assets
    Html,
    Stylesheet,
    Image,
    Font,
    Audio,
    Video,
    // Data formats
    Json,
    Yaml,
    Toml,
    Xml,
    Csv,
    #[default]
    Unknown,
}

impl FileType {
    /// Stable serialized tag (matches the serde representation).
    pub fn as_str(&self) -> &'static str {
        match self {
            FileType::Config => "config",
            FileType::Documentation => "documentation",
            FileType::Lockfile => "lockfile",
            FileType::JavaScript => "javascript",
            FileType::TypeScript => "typescript",
            FileType::React => "react",
            FileType::Python => "python",
            FileType::Rust => "rust",
            FileType::Go => "go",
            FileType::Java => "java",
            FileType::Kotlin => "kotlin",
            FileType::Ruby => "ruby",
            FileType::Php => "php",
            FileType::CSharp => "c-sharp",
            FileType::Swift => "swift",
            FileType::C => "c",
            FileType::Cpp => "cpp",
            FileType::Scala => "scala",
            FileType::Shell => "shell",
            FileType::Sql => "sql",
            FileType::Html => "html",
            FileType::Stylesheet => "stylesheet",
            FileType::Image => "image",
            FileType::Font => "font",
            FileType::Audio => "audio",
            FileType::Video => "video",
            FileType::Json => "json",
            FileType::Yaml => "yaml",
            FileType::Toml => "toml",
            FileType::Xml => "xml",
            FileType::Csv => "csv",
            FileType::Unknown => "unknown",
        }
    }

    /// Classify a file by name and extension.
    ///
    /// Special filenames (manifests, lockfiles, dotfiles) are checked before
    /// the extension table. Unknown extensions classify as `Unknown`.
    pub fn classify(name: &str, extension: Option<&str>) -> FileType {
        let lower = name.to_lowercase();

        match lower.as_str() {
            "dockerfile" | "makefile" | "gnumakefile" | "justfile" | ".gitignore"
            | ".gitattributes" | ".editorconfig" | ".env" | ".env.example" | ".npmrc"
            | ".babelrc" | ".eslintrc" | ".prettierrc" | ".dockerignore" => {
                return FileType::Config;
            }
            "cargo.lock" | "package-lock.json" | "yarn.lock" | "pnpm-lock.yaml" | "gemfile.lock"
            | "poetry.lock" | "go.sum" => return FileType::Lockfile,
            "license" | "licence" | "copying" | "notice" | "authors" | "changelog" => {
                return FileType::Documentation;
            }
            _ => {}
        }
        if lower.starts_with("dockerfile.") {
            return FileType::Config;
        }
        if lower.starts_with("readme") {
            return FileType::Documentation;
        }

        let Some(ext) = extension else {
            return FileType::Unknown;
        };

        match ext.to_lowercase().as_str() {
            "js" | "mjs" | "cjs" => FileType::JavaScript,
            "ts" | "mts" | "cts" => FileType::TypeScript,
            "jsx" | "tsx" => FileType::React,
            "py" | "pyi" | "pyw" => FileType::Python,
            "rs" => FileType::Rust,
            "go" => FileType::Go,
            "java" => FileType::Java,
            "kt" | "kts" => FileType::Kotlin,
            "rb" | "rake" | "gemspec" => FileType::Ruby,
            "php" | "phtml" => FileType::Php,
            "cs" => FileType::CSharp,
            "swift" => FileType::Swift,
            "c" | "h" => FileType::C,
            "cpp" | "cc" | "cxx" | "hpp" | "hh" | "hxx" => FileType::Cpp,
            "scala" | "sc" => FileType::Scala,
            "sh" | "bash" | "zsh" | "fish" => FileType::Shell,
            "sql" => FileType::Sql,
            "html" | "htm" => FileType::Html,
            "css" | "scss" | "sass" | "less" => FileType::Stylesheet,
            "png" | "jpg" | "jpeg" | "gif" | "svg" | "webp" | "ico" | "bmp" => FileType::Image,
            "woff" | "woff2" | "ttf" | "otf" | "eot" => FileType::Font,
            "mp3" | "wav" | "ogg" | "flac" => FileType::Audio,
            "mp4" | "webm" | "mov" | "avi" => FileType::Video,
            "json" | "jsonc" => FileType::Json,
            "yaml" | "yml" => FileType::Yaml,
            "toml" => FileType::Toml,
            "xml" | "xsd" | "xsl" => FileType::Xml,
            "csv" | "tsv" => FileType::Csv,
            "md" | "markdown" | "rst" | "txt" | "adoc" => FileType::Documentation,
            "ini" | "cfg" | "conf" | "properties" => FileType::Config,
            _ => FileType::Unknown,
        }
    }
}

impl std::fmt::Display for FileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Records
// =============================================================================

/// One file observed during the walk. Immutable after the scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileRecord {
    /// Absolute path on disk.
    pub path: PathBuf,
    /// Slash-normalized path relative to the scan root.
    pub relative_path: String,
    /// File name including extension.
    pub name: String,
    pub extension: Option<String>,
    pub size: u64,
    pub file_type: FileType,
    pub modified: Option<DateTime<Utc>>,
    /// Relative path of the containing directory; empty string for the root.
    pub parent: String,
}

impl FileRecord {
    /// File name without its final extension, used for naming profiling.
    pub fn stem(&self) -> &str {
        match &self.extension {
            Some(ext) if self.name.len() > ext.len() + 1 => {
                &self.name[..self.name.len() - ext.len() - 1]
            }
            _ => &self.name,
        }
    }
}

/// One directory observed during the walk. Immutable after the scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryRecord {
    pub path: PathBuf,
    pub relative_path: String,
    pub name: String,
    /// Number of path components below the root.
    pub depth: usize,
    pub parent: String,
}

// =============================================================================
// Project Structure
// =============================================================================

/// Aggregate output of the filesystem walk.
///
/// Invariant: every `FileRecord.parent` is either empty (the root) or the
/// `relative_path` of some `DirectoryRecord`. Files and directories are kept
/// in sorted relative-path order so that downstream tallies are deterministic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectStructure {
    pub root: PathBuf,
    pub files: Vec<FileRecord>,
    pub directories: Vec<DirectoryRecord>,
    pub file_type_counts: BTreeMap<FileType, usize>,
    pub extensions: BTreeSet<String>,
}

impl ProjectStructure {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            files: Vec::new(),
            directories: Vec::new(),
            file_type_counts: BTreeMap::new(),
            extensions: BTreeSet::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.directories.is_empty()
    }

    /// Lowercased directory names, for structure heuristics.
    pub fn directory_names(&self) -> BTreeSet<String> {
        self.directories
            .iter()
            .map(|d| d.name.to_lowercase())
            .collect()
    }

    /// Direct subdirectories of the directory at `relative_path`.
    pub fn subdirectories_of(&self, relative_path: &str) -> Vec<&DirectoryRecord> {
        self.directories
            .iter()
            .filter(|d| d.parent == relative_path)
            .collect()
    }

    /// Files whose parent directory is `relative_path`.
    pub fn files_in(&self, relative_path: &str) -> Vec<&FileRecord> {
        self.files
            .iter()
            .filter(|f| f.parent == relative_path)
            .collect()
    }
}
