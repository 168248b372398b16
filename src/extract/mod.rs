//! Language fact extraction.
//!
//! Dispatch from a file's language to its extractor is a closed strategy
//! table ([`extractor_for`]); there is no string-keyed duck typing. Per-file
//! failures degrade to empty facts so one malformed file never aborts a
//! batch. Cost is bounded by per-language sampling: files beyond the sample
//! are excluded from the run, not misclassified.

pub mod go;
pub mod java;
pub mod language;
pub mod python;
pub mod rust_lang;
pub mod traits;
pub mod typescript;

use std::collections::BTreeMap;

use tracing::{debug, warn};

pub use go::GoExtractor;
pub use java::JavaExtractor;
pub use language::Language;
pub use python::PythonExtractor;
pub use rust_lang::RustExtractor;
pub use traits::{Extractor, FileFacts, Identifiers, ImportKind, ImportRef};
pub use typescript::TypeScriptExtractor;

use crate::config::AnalyzerConfig;
use crate::deadline::{self, Deadline};
use crate::types::{FileRecord, ProjectStructure, Result};

/// The strategy table: language tag to extractor.
pub fn extractor_for(language: Language) -> Option<Box<dyn Extractor>> {
    match language {
        Language::TypeScript | Language::JavaScript | Language::Tsx | Language::Jsx => {
            Some(Box::new(TypeScriptExtractor::new(language)))
        }
        Language::Python => Some(Box::new(PythonExtractor)),
        Language::Rust => Some(Box::new(RustExtractor)),
        Language::Go => Some(Box::new(GoExtractor)),
        Language::Java => Some(Box::new(JavaExtractor)),
        _ => None,
    }
}

/// Facts for every sampled file, keyed by project-relative path.
#[derive(Debug, Default)]
pub struct ExtractionOutcome {
    pub per_file: Vec<(String, FileFacts)>,
    /// Files actually read and analyzed.
    pub sampled: usize,
    /// Files excluded by the per-language sample cap.
    pub beyond_sample: usize,
}

/// Read and analyze up to `sample_size` files per language, sequentially and
/// in deterministic path order.
pub async fn extract_facts(
    structure: &ProjectStructure,
    config: &AnalyzerConfig,
    deadline: Option<&Deadline>,
) -> Result<ExtractionOutcome> {
    let mut per_language: BTreeMap<Language, Vec<&FileRecord>> = BTreeMap::new();
    for file in &structure.files {
        let lang = file
            .extension
            .as_deref()
            .map(Language::from_extension)
            .unwrap_or_default();
        if lang.has_extractor() {
            per_language.entry(lang).or_default().push(file);
        }
    }

    let mut outcome = ExtractionOutcome::default();
    for (lang, files) in per_language {
        let Some(extractor) = extractor_for(lang) else {
            continue;
        };
        let cut = files.len().min(config.sample_size);
        outcome.beyond_sample += files.len() - cut;

        for file in &files[..cut] {
            deadline::check(deadline)?;

            if file.size > config.max_file_size {
                debug!(
                    "skipping oversized file {} ({} bytes)",
                    file.relative_path, file.size
                );
                continue;
            }
            let content = match tokio::fs::read_to_string(&file.path).await {
                Ok(c) => c,
                Err(e) => {
                    warn!("skipping unreadable file {}: {}", file.relative_path, e);
                    continue;
                }
            };
            let facts = match extractor.extract(&file.relative_path, &content) {
                Ok(f) => f,
                Err(e) => {
                    warn!("extraction failed for {}: {}", file.relative_path, e);
                    FileFacts::default()
                }
            };
            outcome.per_file.push((file.relative_path.clone(), facts));
            outcome.sampled += 1;
        }
    }

    outcome.per_file.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(outcome)
}
