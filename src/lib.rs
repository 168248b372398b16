//! archlens: structural pattern detection for source trees.
//!
//! Walks a project, samples its source files, and produces an
//! [`AnalysisReport`] describing naming conventions, dependency topology,
//! and architectural style with confidence scores and supporting evidence.
//!
//! ```no_run
//! use archlens::{Analyzer, AnalyzerConfig};
//!
//! # async fn run() -> archlens::Result<()> {
//! let analyzer = Analyzer::new(AnalyzerConfig::default());
//! let report = analyzer.analyze("/path/to/project").await?;
//! if let Some(top) = report.top_pattern() {
//!     println!("{} ({}%)", top.name, top.confidence);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Analysis is deterministic: an unchanged tree yields a byte-identical
//! serialized report across runs. Only a missing root, a bad configuration,
//! or an expired deadline fail an analysis; per-file and per-detector
//! problems are logged via `tracing` and absorbed.

pub mod config;
pub mod consistency;
pub mod constants;
pub mod deadline;
pub mod detect;
pub mod extract;
pub mod graph;
pub mod naming;
pub mod pipeline;
pub mod scanner;
pub mod types;

pub use config::{AnalyzerConfig, ConfigLoader};
pub use deadline::Deadline;
pub use extract::{Extractor, FileFacts, Identifiers, ImportKind, ImportRef, Language};
pub use graph::DependencyGraph;
pub use pipeline::Analyzer;
pub use scanner::scan;
pub use types::{
    AnalysisReport, ArchError, ArchitecturalPatternResult, ConsistencyMetrics, DependencyInsights,
    DirectoryRecord, Dominant, FileRecord, FileType, NamingCategory, NamingConvention, NamingStat,
    ProjectStructure, Result,
};
