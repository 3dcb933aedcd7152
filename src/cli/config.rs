//! Schema CLI command

use triage::*;

pub fn cmd_schema(args: &[String]) -> Result<()> {
    let schema_name = args.first().map(|s| s.as_str()).unwrap_or("list");

    match schema_name {
        "list" => {
            println!("Available schemas: report, table, check, config");
            Ok(())
        }
        "report" => print_schema::<DiagnosisReport>(),
        "table" => print_schema::<Rule>(),
        "check" => print_schema::<TableCheck>(),
        "config" => print_schema::<TriageConfig>(),
        _ => Err(Error::Usage(format!("Unknown schema: {}", schema_name))),
    }
}

fn print_schema<T: schemars::JsonSchema>() -> Result<()> {
    let schema = schemars::schema_for!(T);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
