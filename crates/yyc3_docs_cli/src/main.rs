//! Scaffold CLI entry point.
//!
//! # Responsibility
//! - Run the one product operation: materialize the YYC3-Menu docs tree
//!   under the working directory.
//! - Map the run outcome to a process exit code (0 success, 1 failure).

use std::process::ExitCode;

fn main() -> ExitCode {
    // Why: diagnostics go to stderr so scaffold progress on stdout stays
    // clean; a logging failure must not block the scaffold itself.
    if let Err(message) = yyc3_docs_core::init_logging(yyc3_docs_core::default_log_level()) {
        eprintln!("logging disabled: {message}");
    }

    match yyc3_docs_core::run() {
        Ok(_report) => ExitCode::SUCCESS,
        Err(err) => {
            println!("\n❌ 执行失败：{err}");
            ExitCode::FAILURE
        }
    }
}
