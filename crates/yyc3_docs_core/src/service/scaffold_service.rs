//! Documentation tree scaffold service.
//!
//! # Responsibility
//! - Walk the constant taxonomy and materialize it as directories and
//!   templated markdown files under the docs root.
//! - Report per-resource progress on the console stream and as log events.
//!
//! # Invariants
//! - Existing directories and files are never overwritten or deleted.
//! - Traversal order follows taxonomy order; the first failure aborts the
//!   run and leaves already-created structure in place.
//! - A second run over the same tree is a no-op apart from skip reporting.

use crate::model::artifact::DocArtifact;
use crate::model::taxonomy::{Stage, ROOT_DIR, STAGES};
use log::{debug, error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub type ScaffoldResult<T> = Result<T, ScaffoldError>;

/// Failure kinds for a scaffold run.
///
/// Each variant keeps the offending path and the underlying I/O error so the
/// console message can name the cause. The process exit code does not
/// distinguish the kinds; the message does.
#[derive(Debug)]
pub enum ScaffoldError {
    /// Filesystem refused the operation for lack of permission.
    PermissionDenied { path: PathBuf, source: io::Error },
    /// A required path component was missing or invalid.
    PathNotFound { path: PathBuf, source: io::Error },
    /// Any other filesystem or stream failure.
    Unknown { path: PathBuf, source: io::Error },
}

impl ScaffoldError {
    /// Maps an I/O error at `path` onto the three-kind taxonomy.
    fn classify(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path, source },
            io::ErrorKind::NotFound => Self::PathNotFound { path, source },
            _ => Self::Unknown { path, source },
        }
    }

    /// Stable lowercase label used in log events.
    pub fn kind_label(&self) -> &'static str {
        match self {
            Self::PermissionDenied { .. } => "permission_denied",
            Self::PathNotFound { .. } => "path_not_found",
            Self::Unknown { .. } => "unknown",
        }
    }

    /// Path the failing operation targeted.
    pub fn path(&self) -> &Path {
        match self {
            Self::PermissionDenied { path, .. }
            | Self::PathNotFound { path, .. }
            | Self::Unknown { path, .. } => path,
        }
    }
}

impl Display for ScaffoldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PermissionDenied { path, .. } => write!(
                f,
                "权限不足！无法创建目录/文件，请检查当前用户对运行目录的读写权限。（路径：{}）",
                path.display()
            ),
            Self::PathNotFound { path, source } => write!(
                f,
                "文件路径不存在！错误信息：{source}（路径：{}）",
                path.display()
            ),
            Self::Unknown { path, source } => write!(
                f,
                "未知错误！错误信息：{source}（路径：{}）",
                path.display()
            ),
        }
    }
}

impl Error for ScaffoldError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::PermissionDenied { source, .. }
            | Self::PathNotFound { source, .. }
            | Self::Unknown { source, .. } => Some(source),
        }
    }
}

/// Outcome summary of a completed scaffold run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    /// Directories created this run (root + stage + category).
    pub created_dirs: usize,
    /// Directories that already existed.
    pub skipped_dirs: usize,
    /// Documents created this run.
    pub created_files: usize,
    /// Documents that already existed and were left untouched.
    pub skipped_files: usize,
    /// Absolute path of the docs root.
    pub root: PathBuf,
}

/// Walks a taxonomy and materializes it under a docs root.
///
/// The product surface uses the compiled-in [`STAGES`] table through
/// [`run`]; tests construct a `Scaffolder` against temporary roots and
/// reduced taxonomies.
pub struct Scaffolder<'a> {
    root: PathBuf,
    stages: &'a [Stage],
}

impl<'a> Scaffolder<'a> {
    /// Creates a scaffolder for the given root directory and taxonomy.
    pub fn new(root: impl Into<PathBuf>, stages: &'a [Stage]) -> Self {
        Self {
            root: root.into(),
            stages,
        }
    }

    /// Runs the scaffold, writing progress lines to `out`.
    ///
    /// # Contract
    /// - Creates missing directories and files in taxonomy order.
    /// - Skips anything that already exists without touching it.
    /// - Stops at the first failure; no rollback of earlier creations.
    ///
    /// # Errors
    /// - [`ScaffoldError::PermissionDenied`] when the filesystem refuses a
    ///   create for lack of permission.
    /// - [`ScaffoldError::PathNotFound`] when a required path component is
    ///   missing at the filesystem level.
    /// - [`ScaffoldError::Unknown`] for every other failure, including
    ///   failures of the output stream itself.
    pub fn run_to(&self, out: &mut dyn Write) -> ScaffoldResult<ScaffoldReport> {
        info!(
            "event=scaffold_start module=core status=ok root={} stages={}",
            self.root.display(),
            self.stages.len()
        );
        self.console(out, "🚀 开始执行YYC3-Menu项目文档架构创建脚本...")?;

        let mut report = ScaffoldReport {
            created_dirs: 0,
            skipped_dirs: 0,
            created_files: 0,
            skipped_files: 0,
            root: PathBuf::new(),
        };

        if self.ensure_dir(&self.root)? {
            report.created_dirs += 1;
            self.console(out, &format!("✅ 成功创建根目录：{}", self.root.display()))?;
        } else {
            report.skipped_dirs += 1;
            self.console(
                out,
                &format!("ℹ️  根目录 {} 已存在，跳过创建", self.root.display()),
            )?;
        }

        for stage in self.stages {
            let stage_dir = self.root.join(stage.name);
            if self.ensure_dir(&stage_dir)? {
                report.created_dirs += 1;
                self.console(
                    out,
                    &format!("\n✅ 成功创建阶段目录：{}", stage_dir.display()),
                )?;
            } else {
                report.skipped_dirs += 1;
            }

            for category in stage.categories {
                let category_dir = stage_dir.join(category.name);
                if self.ensure_dir(&category_dir)? {
                    report.created_dirs += 1;
                    self.console(
                        out,
                        &format!("✅ 成功创建文档类型目录：{}", category_dir.display()),
                    )?;
                } else {
                    report.skipped_dirs += 1;
                }

                for (position, title) in category.titles.iter().enumerate() {
                    let artifact = DocArtifact {
                        stage: stage.name,
                        category: category.name,
                        title,
                        index: position + 1,
                    };
                    let file_path = category_dir.join(artifact.file_name());
                    if self.create_document(&file_path, &artifact)? {
                        report.created_files += 1;
                        self.console(
                            out,
                            &format!("✅ 成功创建文档：{}", file_path.display()),
                        )?;
                    } else {
                        report.skipped_files += 1;
                        self.console(
                            out,
                            &format!("ℹ️  文档 {} 已存在，跳过创建", file_path.display()),
                        )?;
                    }
                }
            }
        }

        report.root = fs::canonicalize(&self.root)
            .map_err(|err| self.fail(&self.root, err))?;

        self.console(out, "\n🎉 全量文档架构创建完成！")?;
        self.console(out, &format!("📁 文档根目录：{}", report.root.display()))?;
        self.console(
            out,
            "💡 后续可直接在对应.md文件中填充具体内容，所有文件已预设基础格式",
        )?;

        info!(
            "event=scaffold_complete module=core status=ok root={} created_dirs={} skipped_dirs={} created_files={} skipped_files={}",
            report.root.display(),
            report.created_dirs,
            report.skipped_dirs,
            report.created_files,
            report.skipped_files
        );
        Ok(report)
    }

    /// Creates `path` if absent. Returns whether a directory was created.
    fn ensure_dir(&self, path: &Path) -> ScaffoldResult<bool> {
        if path.is_dir() {
            debug!("event=dir_skipped module=core status=ok path={}", path.display());
            return Ok(false);
        }
        fs::create_dir_all(path).map_err(|err| self.fail(path, err))?;
        debug!("event=dir_created module=core status=ok path={}", path.display());
        Ok(true)
    }

    /// Creates the document at `path` if absent. Returns whether it was
    /// created.
    ///
    /// Uses `create_new` so a lost existence-check race surfaces as
    /// `AlreadyExists` and degrades to a skip instead of clobbering content.
    fn create_document(&self, path: &Path, artifact: &DocArtifact<'_>) -> ScaffoldResult<bool> {
        if path.exists() {
            debug!("event=doc_skipped module=core status=ok path={}", path.display());
            return Ok(false);
        }
        let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
                debug!("event=doc_skipped module=core status=ok path={}", path.display());
                return Ok(false);
            }
            Err(err) => return Err(self.fail(path, err)),
        };
        file.write_all(artifact.render().as_bytes())
            .map_err(|err| self.fail(path, err))?;
        debug!("event=doc_created module=core status=ok path={}", path.display());
        Ok(true)
    }

    /// Writes one console progress line through the output sink.
    fn console(&self, out: &mut dyn Write, line: &str) -> ScaffoldResult<()> {
        writeln!(out, "{line}").map_err(|err| self.fail(&self.root, err))
    }

    /// Classifies and logs a failure before it aborts the run.
    fn fail(&self, path: &Path, source: io::Error) -> ScaffoldError {
        let error = ScaffoldError::classify(path, source);
        error!(
            "event=scaffold_failed module=core status=error kind={} path={}",
            error.kind_label(),
            error.path().display()
        );
        error
    }
}

/// Runs the scaffold with the compiled-in taxonomy against [`ROOT_DIR`],
/// reporting progress on stdout.
///
/// This is the single product operation; there are no parameters by design.
pub fn run() -> ScaffoldResult<ScaffoldReport> {
    let scaffolder = Scaffolder::new(ROOT_DIR, STAGES);
    let stdout = io::stdout();
    scaffolder.run_to(&mut stdout.lock())
}
