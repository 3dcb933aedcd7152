//! Diagnosis types and the decision function
//!
//! Two symptom flags map onto exactly one of four diagnoses:
//!
//! | fever | cough | diagnosis           |
//! |-------|-------|---------------------|
//! | yes   | yes   | `Flu`               |
//! | yes   | no    | `PossibleInfection` |
//! | no    | yes   | `ColdOrAllergies`   |
//! | no    | no    | `GeneralCheckup`    |

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The pair of symptom flags consumed by [`diagnose`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
pub struct SymptomInput {
    /// Patient reports a fever
    pub has_fever: bool,

    /// Patient reports a persistent cough
    pub has_cough: bool,
}

impl SymptomInput {
    pub fn new(has_fever: bool, has_cough: bool) -> Self {
        Self {
            has_fever,
            has_cough,
        }
    }

    /// Every representable input, fever-major with `true` first
    pub fn all() -> [SymptomInput; 4] {
        [
            SymptomInput::new(true, true),
            SymptomInput::new(true, false),
            SymptomInput::new(false, true),
            SymptomInput::new(false, false),
        ]
    }

    pub fn diagnose(self) -> Diagnosis {
        diagnose(self.has_fever, self.has_cough)
    }
}

/// One of the four fixed outcomes of the decision table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Diagnosis {
    Flu,
    PossibleInfection,
    ColdOrAllergies,
    GeneralCheckup,
}

impl Diagnosis {
    pub const ALL: [Diagnosis; 4] = [
        Diagnosis::Flu,
        Diagnosis::PossibleInfection,
        Diagnosis::ColdOrAllergies,
        Diagnosis::GeneralCheckup,
    ];

    /// Short machine-friendly name (matches the serde representation)
    pub fn label(self) -> &'static str {
        match self {
            Diagnosis::Flu => "Flu",
            Diagnosis::PossibleInfection => "PossibleInfection",
            Diagnosis::ColdOrAllergies => "ColdOrAllergies",
            Diagnosis::GeneralCheckup => "GeneralCheckup",
        }
    }

    /// The sentence shown to the user
    pub fn advice(self) -> &'static str {
        match self {
            Diagnosis::Flu => "Flu - Recommend rest and hydration.",
            Diagnosis::PossibleInfection => {
                "Possible Infection - Recommend primary care physician visit."
            }
            Diagnosis::ColdOrAllergies => "Cold/Allergies - Recommend over-the-counter medication.",
            Diagnosis::GeneralCheckup => "General Check-up - Patient appears healthy.",
        }
    }
}

impl fmt::Display for Diagnosis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.advice())
    }
}

/// Map the two symptom flags to a diagnosis. Total over its domain.
pub fn diagnose(has_fever: bool, has_cough: bool) -> Diagnosis {
    match (has_fever, has_cough) {
        (true, true) => Diagnosis::Flu,
        (true, false) => Diagnosis::PossibleInfection,
        (false, true) => Diagnosis::ColdOrAllergies,
        (false, false) => Diagnosis::GeneralCheckup,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(true, true, Diagnosis::Flu)]
    #[case(true, false, Diagnosis::PossibleInfection)]
    #[case(false, true, Diagnosis::ColdOrAllergies)]
    #[case(false, false, Diagnosis::GeneralCheckup)]
    fn test_decision_table(#[case] fever: bool, #[case] cough: bool, #[case] expected: Diagnosis) {
        assert_eq!(diagnose(fever, cough), expected);
        assert_eq!(SymptomInput::new(fever, cough).diagnose(), expected);
    }

    #[test]
    fn test_every_diagnosis_is_reachable() {
        let reached: Vec<Diagnosis> = SymptomInput::all().iter().map(|i| i.diagnose()).collect();
        assert_eq!(reached, Diagnosis::ALL.to_vec());
    }

    #[test]
    fn test_display_uses_advice() {
        assert_eq!(
            Diagnosis::ColdOrAllergies.to_string(),
            "Cold/Allergies - Recommend over-the-counter medication."
        );
    }

    #[test]
    fn test_label_matches_serde_name() {
        for d in Diagnosis::ALL {
            let json = serde_json::to_string(&d).unwrap();
            assert_eq!(json, format!("\"{}\"", d.label()));
        }
    }
}
