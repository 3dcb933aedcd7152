//! Console rendering of a diagnosis

use crate::diagnosis::{Diagnosis, SymptomInput};
use schemars::JsonSchema;
use serde::Serialize;

/// Width of the dashed separator when no config overrides it
pub const DEFAULT_SEPARATOR_WIDTH: usize = 30;

pub fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

/// Symptoms together with the diagnosis they produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct DiagnosisReport {
    pub symptoms: SymptomInput,
    pub diagnosis: Diagnosis,
    pub advice: String,
}

impl DiagnosisReport {
    pub fn new(symptoms: SymptomInput) -> Self {
        let diagnosis = symptoms.diagnose();
        Self {
            symptoms,
            diagnosis,
            advice: diagnosis.advice().to_string(),
        }
    }

    /// Three-line block: separator, symptoms, diagnosis. No trailing newline.
    pub fn to_text(&self, separator_width: usize) -> String {
        format!(
            "{}\nPatient Symptoms: Fever ({}), Persistent Cough ({})\nDiagnosis: {}",
            "-".repeat(separator_width),
            yes_no(self.symptoms.has_fever),
            yes_no(self.symptoms.has_cough),
            self.advice
        )
    }
}
