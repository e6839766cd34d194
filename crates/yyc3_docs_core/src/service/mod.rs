//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate the model layer into the one product operation: the
//!   scaffold run.
//! - Keep the CLI layer decoupled from filesystem traversal details.

pub mod scaffold_service;
