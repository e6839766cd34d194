//! Domain model for the documentation scaffold.
//!
//! # Responsibility
//! - Define the fixed taxonomy the scaffold walks.
//! - Define how a taxonomy triple maps to a file artifact.
//!
//! # Invariants
//! - Model types carry no runtime-mutable state; the taxonomy is constant.
//! - Artifact naming is a pure function of the (stage, category, title,
//!   position) tuple.

pub mod artifact;
pub mod taxonomy;
