//! Mediatriage - media library triage and remediation planning
//!
//! Classifies catalog entries into remediation actions (remux for unknown
//! language tags, re-encode for oversized or unsupported-container files)
//! and builds immutable remediation plans for one-time execution by an
//! external remuxer.

pub mod catalog;
pub mod config;
pub mod error;
pub mod executor;
pub mod handoff;
pub mod inspector;
pub mod pending;
pub mod planner;

pub use error::{Error, Result};
