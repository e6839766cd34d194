//! Core domain logic for the YYC3-Menu documentation scaffolder.
//! This crate is the single source of truth for taxonomy and naming rules.

pub mod logging;
pub mod model;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::artifact::DocArtifact;
pub use model::taxonomy::{
    total_document_count, Category, Stage, PROJECT_PREFIX, ROOT_DIR, STAGES, STANDARDS_LABEL,
    VERSION_LABEL,
};
pub use service::scaffold_service::{
    run, ScaffoldError, ScaffoldReport, ScaffoldResult, Scaffolder,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
