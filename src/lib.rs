// Production-quality lints
#![warn(
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
// Deny truly dangerous patterns
#![deny(clippy::mem_forget)]
// Allow common patterns in library code
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! # triage — a two-flag symptom decision table
//!
//! Given whether a patient has a fever and whether they have a persistent
//! cough, pick one of four canned diagnoses. Not medical advice; the point is
//! a total decision function whose partition property can be checked.
//!
//! ## Quick Start
//!
//! ```rust
//! use triage::{diagnose, Diagnosis, DiagnosisReport, SymptomInput};
//!
//! assert_eq!(diagnose(true, false), Diagnosis::PossibleInfection);
//!
//! let report = DiagnosisReport::new(SymptomInput::new(false, true));
//! assert!(report.to_text(30).ends_with("Cold/Allergies - Recommend over-the-counter medication."));
//! ```
//!
//! ## Layout
//!
//! ```text
//! (fever, cough) ──► diagnose ──► Diagnosis ──► DiagnosisReport ──► text / JSON
//!                        ▲
//!  DECISION_TABLE ──► check_table ──► TableCheck (gaps, overlaps, mismatches)
//! ```

pub mod config;
pub mod diagnosis;
pub mod error;
pub mod report;
pub mod table;

// Re-exports
pub use config::{LoggingConfig, OutputConfig, OutputFormat, TriageConfig};
pub use diagnosis::{diagnose, Diagnosis, SymptomInput};
pub use error::{Error, Result};
pub use report::{yes_no, DiagnosisReport, DEFAULT_SEPARATOR_WIDTH};
pub use table::{check_rules, check_table, first_match, RowCheck, Rule, TableCheck, DECISION_TABLE};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
