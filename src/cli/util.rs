//! CLI utility helpers

use std::path::PathBuf;
use triage::{Error, OutputFormat, Result, TriageConfig};

/// Parse a symptom flag as typed on the command line
pub fn parse_flag(raw: &str) -> Result<bool> {
    match raw.trim().to_lowercase().as_str() {
        "yes" | "y" | "true" | "t" | "1" => Ok(true),
        "no" | "n" | "false" | "f" | "0" => Ok(false),
        _ => Err(Error::InvalidFlag(raw.to_string())),
    }
}

/// Find `--config <path>` anywhere in the argument list
pub fn parse_config_arg(args: &[String]) -> Result<Option<PathBuf>> {
    for (i, arg) in args.iter().enumerate() {
        if arg == "--config" || arg == "-c" {
            return match args.get(i + 1) {
                Some(path) => Ok(Some(PathBuf::from(path))),
                None => Err(Error::Usage("--config requires a path".into())),
            };
        }
    }
    Ok(None)
}

/// Drop global options so commands only see their own arguments
pub fn strip_global_args(args: &[String]) -> Vec<String> {
    let mut out = Vec::with_capacity(args.len());
    let mut skip_next = false;
    for arg in args {
        if skip_next {
            skip_next = false;
            continue;
        }
        if arg == "--config" || arg == "-c" {
            skip_next = true;
            continue;
        }
        out.push(arg.clone());
    }
    out
}

/// `--json` on the command line, or `output.format: json` in config
pub fn wants_json(args: &[String], config: &TriageConfig) -> bool {
    args.iter().any(|a| a == "--json") || config.output.format == OutputFormat::Json
}

/// Positional arguments (anything not starting with `--`)
pub fn positionals(args: &[String]) -> Vec<&str> {
    args.iter()
        .map(String::as_str)
        .filter(|a| !a.starts_with("--"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[rstest]
    #[case("yes", true)]
    #[case("Y", true)]
    #[case("TRUE", true)]
    #[case("1", true)]
    #[case("no", false)]
    #[case("n", false)]
    #[case("False", false)]
    #[case(" 0 ", false)]
    fn test_parse_flag_accepts(#[case] raw: &str, #[case] expected: bool) {
        assert_eq!(parse_flag(raw).unwrap(), expected);
    }

    #[rstest]
    #[case("maybe")]
    #[case("")]
    #[case("2")]
    fn test_parse_flag_rejects(#[case] raw: &str) {
        assert!(matches!(parse_flag(raw), Err(Error::InvalidFlag(_))));
    }

    #[test]
    fn test_config_arg_and_strip() {
        let args = strings(&["--config", "custom.yaml", "diagnose", "yes", "no"]);
        assert_eq!(
            parse_config_arg(&args).unwrap(),
            Some(PathBuf::from("custom.yaml"))
        );
        assert_eq!(strip_global_args(&args), strings(&["diagnose", "yes", "no"]));
    }

    #[test]
    fn test_config_arg_missing_path() {
        let args = strings(&["diagnose", "--config"]);
        assert!(matches!(parse_config_arg(&args), Err(Error::Usage(_))));
    }

    #[test]
    fn test_wants_json_from_config() {
        let mut config = TriageConfig::default();
        assert!(!wants_json(&[], &config));
        assert!(wants_json(&strings(&["--json"]), &config));
        config.output.format = OutputFormat::Json;
        assert!(wants_json(&[], &config));
    }

    #[test]
    fn test_positionals_skip_options() {
        let args = strings(&["yes", "--json", "no"]);
        assert_eq!(positionals(&args), vec!["yes", "no"]);
    }
}
