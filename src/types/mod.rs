pub mod convention;
pub mod error;
pub mod file;
pub mod report;

pub use convention::{Dominant, NamingCategory, NamingConvention, NamingStat};
pub use error::{ArchError, Result};
pub use file::{DirectoryRecord, FileRecord, FileType, ProjectStructure};
pub use report::{
    AnalysisReport, ArchitecturalPatternResult, ConsistencyMetrics, DependencyInsights,
};
