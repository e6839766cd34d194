//! Document artifact naming and templating.
//!
//! # Responsibility
//! - Derive the deterministic file name for a (stage, category, title) triple.
//! - Render the fixed markdown header every new document starts with.
//!
//! # Invariants
//! - `index` is the 1-based position of the title within its category list,
//!   zero-padded to two digits.
//! - The same triple always renders byte-identical name and content.

use crate::model::taxonomy::{PROJECT_PREFIX, STANDARDS_LABEL, VERSION_LABEL};
use std::path::PathBuf;

/// One generated markdown document, addressed by its taxonomy triple.
///
/// Borrowed fields keep this a cheap view over the static taxonomy; the
/// scaffold service constructs one per title during traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocArtifact<'a> {
    /// Stage directory name.
    pub stage: &'a str,
    /// Category directory name, repeated inside the file name.
    pub category: &'a str,
    /// Human-readable document title.
    pub title: &'a str,
    /// 1-based position of `title` within its category list.
    pub index: usize,
}

impl DocArtifact<'_> {
    /// Returns the file name `NN-YYC3-Menu-<category>-<title>.md`.
    pub fn file_name(&self) -> String {
        format!(
            "{:02}-{}-{}-{}.md",
            self.index, PROJECT_PREFIX, self.category, self.title
        )
    }

    /// Returns the path of this document relative to the docs root.
    pub fn relative_path(&self) -> PathBuf {
        PathBuf::from(self.stage)
            .join(self.category)
            .join(self.file_name())
    }

    /// Renders the initial document content.
    ///
    /// # Contract
    /// - Title heading first, no blank line before the metadata heading.
    /// - Metadata block carries category, stage, standards label and version.
    /// - Ends with an empty `## 核心内容` section and a trailing newline.
    pub fn render(&self) -> String {
        format!(
            "# {}\n\
             ## 文档信息\n\
             - 文档类型：{}\n\
             - 所属阶段：{}\n\
             - 遵循规范：{}\n\
             - 版本号：{}\n\
             \n\
             ## 核心内容\n",
            self.title, self.category, self.stage, STANDARDS_LABEL, VERSION_LABEL
        )
    }
}
