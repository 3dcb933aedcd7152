//! Simple CLI commands: diagnose, demo, table, selfcheck

use super::util::{parse_flag, positionals, wants_json};
use triage::*;

/// Scenarios run by `demo` without `--all`
const DEMO_SCENARIOS: [SymptomInput; 2] = [
    SymptomInput {
        has_fever: true,
        has_cough: true,
    },
    SymptomInput {
        has_fever: false,
        has_cough: true,
    },
];

pub fn cmd_diagnose(args: &[String], config: &TriageConfig) -> Result<()> {
    let flags = positionals(args);
    if flags.len() != 2 {
        return Err(Error::Usage(
            "Usage: triage diagnose <fever> <cough> [--json]".into(),
        ));
    }

    let input = SymptomInput::new(parse_flag(flags[0])?, parse_flag(flags[1])?);
    let report = DiagnosisReport::new(input);
    tracing::info!(
        fever = input.has_fever,
        cough = input.has_cough,
        diagnosis = report.diagnosis.label(),
        "diagnosed"
    );

    if wants_json(args, config) {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.to_text(config.output.separator_width));
    }
    Ok(())
}

pub fn cmd_demo(args: &[String], config: &TriageConfig) -> Result<()> {
    let inputs: Vec<SymptomInput> = if args.iter().any(|a| a == "--all") {
        SymptomInput::all().to_vec()
    } else {
        DEMO_SCENARIOS.to_vec()
    };

    let reports: Vec<DiagnosisReport> = inputs.into_iter().map(DiagnosisReport::new).collect();
    tracing::debug!(count = reports.len(), "running demo scenarios");

    if wants_json(args, config) {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            println!("{}", report.to_text(config.output.separator_width));
        }
    }
    Ok(())
}

pub fn cmd_table(args: &[String], config: &TriageConfig) -> Result<()> {
    if wants_json(args, config) {
        println!("{}", serde_json::to_string_pretty(&DECISION_TABLE)?);
        return Ok(());
    }

    println!("{:<20} {:<18} {}", "RULE", "WHEN", "THEN");
    for rule in &DECISION_TABLE {
        println!(
            "{:<20} {:<18} {}",
            rule.id,
            rule.condition(),
            rule.then.advice()
        );
    }
    Ok(())
}

pub fn cmd_selfcheck(args: &[String], config: &TriageConfig) -> Result<()> {
    print_check(&check_table(), wants_json(args, config))
}

/// Print a table check and fail if it found anything
fn print_check(check: &TableCheck, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(check)?);
    } else {
        print!("{}", check.to_report());
    }

    if check.is_sound() {
        Ok(())
    } else {
        tracing::warn!(
            gaps = check.gaps,
            overlaps = check.overlaps,
            disagreements = check.disagreements,
            "decision table is unsound"
        );
        Err("Self-check failed".into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selfcheck_fails_on_gap() {
        let check = check_rules(&DECISION_TABLE[1..]);
        let err = print_check(&check, false).unwrap_err();
        assert_eq!(err.to_string(), "Self-check failed");
    }

    #[test]
    fn test_selfcheck_fails_on_mismatch_json() {
        let mut rules = DECISION_TABLE;
        rules[0].then = Diagnosis::GeneralCheckup;
        assert!(print_check(&check_rules(&rules), true).is_err());
    }

    #[test]
    fn test_selfcheck_passes_builtin_table() {
        assert!(print_check(&check_table(), false).is_ok());
    }

    #[test]
    fn test_diagnose_rejects_wrong_arity() {
        let args = vec!["yes".to_string()];
        let err = cmd_diagnose(&args, &TriageConfig::default()).unwrap_err();
        assert!(matches!(err, Error::Usage(_)));
    }

    #[test]
    fn test_diagnose_rejects_bad_flag() {
        let args = vec!["yes".to_string(), "maybe".to_string()];
        let err = cmd_diagnose(&args, &TriageConfig::default()).unwrap_err();
        assert!(matches!(err, Error::InvalidFlag(_)));
    }
}
