//! The decision table as data, and a soundness check over it
//!
//! [`diagnose`](crate::diagnose) is a plain `match`; this module keeps the
//! same four rows in priority order so the partition property can be
//! checked by enumeration instead of trusted.

use crate::diagnosis::{diagnose, Diagnosis, SymptomInput};
use schemars::JsonSchema;
use serde::Serialize;

/// A single row of the decision table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
pub struct Rule {
    /// Rule identifier
    pub id: &'static str,

    /// Required fever flag
    pub has_fever: bool,

    /// Required cough flag
    pub has_cough: bool,

    /// Outcome when both literals hold
    pub then: Diagnosis,
}

impl Rule {
    pub fn matches(&self, input: SymptomInput) -> bool {
        self.has_fever == input.has_fever && self.has_cough == input.has_cough
    }

    /// Condition rendered as a boolean expression, e.g. `fever && !cough`
    pub fn condition(&self) -> String {
        let lit = |value: bool, name: &str| {
            if value {
                name.to_string()
            } else {
                format!("!{}", name)
            }
        };
        format!(
            "{} && {}",
            lit(self.has_fever, "fever"),
            lit(self.has_cough, "cough")
        )
    }
}

/// Rows in the order they are evaluated
pub const DECISION_TABLE: [Rule; 4] = [
    Rule {
        id: "flu",
        has_fever: true,
        has_cough: true,
        then: Diagnosis::Flu,
    },
    Rule {
        id: "possible_infection",
        has_fever: true,
        has_cough: false,
        then: Diagnosis::PossibleInfection,
    },
    Rule {
        id: "cold_or_allergies",
        has_fever: false,
        has_cough: true,
        then: Diagnosis::ColdOrAllergies,
    },
    Rule {
        id: "general_checkup",
        has_fever: false,
        has_cough: false,
        then: Diagnosis::GeneralCheckup,
    },
];

/// First rule (in priority order) whose condition holds
pub fn first_match(rules: &[Rule], input: SymptomInput) -> Option<&Rule> {
    rules.iter().find(|r| r.matches(input))
}

/// Outcome of checking one input against the table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct RowCheck {
    pub input: SymptomInput,

    /// Ids of every rule whose condition holds
    pub matched: Vec<&'static str>,

    /// What the table yields (first match), if anything
    pub table: Option<Diagnosis>,

    /// What `diagnose` yields
    pub expected: Diagnosis,
}

impl RowCheck {
    pub fn is_gap(&self) -> bool {
        self.matched.is_empty()
    }

    pub fn is_overlap(&self) -> bool {
        self.matched.len() > 1
    }

    pub fn agrees(&self) -> bool {
        self.table == Some(self.expected)
    }
}

/// Result of enumerating every input against a rule list
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct TableCheck {
    pub rows: Vec<RowCheck>,
    pub gaps: usize,
    pub overlaps: usize,
    pub disagreements: usize,
}

impl TableCheck {
    /// No gaps, no overlaps, and every row agrees with `diagnose`
    pub fn is_sound(&self) -> bool {
        self.gaps == 0 && self.overlaps == 0 && self.disagreements == 0
    }

    pub fn to_report(&self) -> String {
        let mut out = String::new();

        let status = if self.is_sound() {
            "✓ SOUND"
        } else {
            "✗ UNSOUND"
        };
        out.push_str(&format!("Decision table: {}\n", status));
        out.push_str(&format!(
            "Inputs checked: {}, gaps: {}, overlaps: {}, disagreements: {}\n",
            self.rows.len(),
            self.gaps,
            self.overlaps,
            self.disagreements
        ));

        let problems: Vec<&RowCheck> = self
            .rows
            .iter()
            .filter(|r| r.is_gap() || r.is_overlap() || !r.agrees())
            .collect();
        if !problems.is_empty() {
            out.push_str("\nProblems:\n");
            for row in problems {
                let kind = if row.is_gap() {
                    "GAP"
                } else if row.is_overlap() {
                    "OVERLAP"
                } else {
                    "MISMATCH"
                };
                out.push_str(&format!(
                    "  fever={} cough={} [{}]: matched [{}] → expected {}\n",
                    row.input.has_fever,
                    row.input.has_cough,
                    kind,
                    row.matched.join(", "),
                    row.expected.label()
                ));
            }
        }

        out
    }
}

/// Check an arbitrary rule list against `diagnose`
pub fn check_rules(rules: &[Rule]) -> TableCheck {
    let rows: Vec<RowCheck> = SymptomInput::all()
        .into_iter()
        .map(|input| RowCheck {
            input,
            matched: rules
                .iter()
                .filter(|r| r.matches(input))
                .map(|r| r.id)
                .collect(),
            table: first_match(rules, input).map(|r| r.then),
            expected: diagnose(input.has_fever, input.has_cough),
        })
        .collect();

    let gaps = rows.iter().filter(|r| r.is_gap()).count();
    let overlaps = rows.iter().filter(|r| r.is_overlap()).count();
    let disagreements = rows.iter().filter(|r| !r.is_gap() && !r.agrees()).count();

    tracing::debug!(gaps, overlaps, disagreements, "checked decision table");

    TableCheck {
        rows,
        gaps,
        overlaps,
        disagreements,
    }
}

/// Check the built-in table
pub fn check_table() -> TableCheck {
    check_rules(&DECISION_TABLE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_is_sound() {
        let check = check_table();
        assert!(check.is_sound(), "{}", check.to_report());
        assert_eq!(check.rows.len(), 4);
    }

    #[test]
    fn test_condition_rendering() {
        assert_eq!(DECISION_TABLE[0].condition(), "fever && cough");
        assert_eq!(DECISION_TABLE[1].condition(), "fever && !cough");
        assert_eq!(DECISION_TABLE[3].condition(), "!fever && !cough");
    }

    #[test]
    fn test_missing_row_is_a_gap() {
        let rules = &DECISION_TABLE[..3];
        let check = check_rules(rules);
        assert!(!check.is_sound());
        assert_eq!(check.gaps, 1);
        assert_eq!(check.disagreements, 0);
        assert!(check.to_report().contains("[GAP]"));
    }

    #[test]
    fn test_duplicate_row_is_an_overlap() {
        let mut rules = DECISION_TABLE.to_vec();
        rules.push(Rule {
            id: "flu_again",
            ..DECISION_TABLE[0]
        });
        let check = check_rules(&rules);
        assert_eq!(check.overlaps, 1);
        assert_eq!(check.gaps, 0);
        // first match still wins, so the outcome agrees
        assert_eq!(check.disagreements, 0);
    }

    #[test]
    fn test_wrong_outcome_is_a_disagreement() {
        let mut rules = DECISION_TABLE;
        rules[2].then = Diagnosis::Flu;
        let check = check_rules(&rules);
        assert_eq!(check.disagreements, 1);
        assert!(check.to_report().contains("[MISMATCH]"));
    }
}
