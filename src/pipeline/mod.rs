// Pipeline orchestration and result aggregation.

pub mod aggregate;
pub mod run;

pub use aggregate::{
    AnalysisRecord, ComparativeReport, DocumentTopics, Reports, RunManifest, TopicsReport,
};
pub use run::{run, run_with, DocumentAnalysis};
