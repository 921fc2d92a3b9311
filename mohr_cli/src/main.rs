//! # Mohr CLI Application
//!
//! Terminal interface for Mohr's circle of stress.
//!
//! ```text
//! mohr_cli [SIGMA_X SIGMA_Z TAU_XZ THETA] [--json] [--samples N] [--decimals N] [--settings FILE]
//! ```
//!
//! With no positional values the four inputs are prompted for. Input that
//! does not parse is reported, never replaced by a default.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use serde::Serialize;
use tracing::{debug, info};

use mohr_core::calculations::mohr_circle::{calculate_with, MohrInput, MohrResult};
use mohr_core::input::{InputField, StressInputForm, DEFAULT_FIELD_VALUE};
use mohr_core::report::ResultsReport;
use mohr_core::settings::MohrSettings;
use mohr_core::{CalcError, CalcResult};

const USAGE: &str = "\
Usage: mohr_cli [SIGMA_X SIGMA_Z TAU_XZ THETA] [OPTIONS]

Without positional values, each input is prompted for.

Options:
  --json             Print the full result as JSON
  --samples N        Number of circle samples (default 101)
  --decimals N       Decimal places in the report (default 2)
  --settings FILE    Load settings from a JSON file
  -h, --help         Show this help";

/// Parsed command line.
#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    values: Vec<String>,
    json: bool,
    samples: Option<usize>,
    decimals: Option<usize>,
    settings_path: Option<String>,
    help: bool,
}

/// JSON output: the parsed input next to the result
#[derive(Serialize)]
struct JsonOutput<'a> {
    input: &'a MohrInput,
    result: &'a MohrResult,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> CalcResult<CliArgs> {
    let mut parsed = CliArgs::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--json" => parsed.json = true,
            "-h" | "--help" => parsed.help = true,
            "--samples" => parsed.samples = Some(parse_count("samples", args.next())?),
            "--decimals" => parsed.decimals = Some(parse_count("decimals", args.next())?),
            "--settings" => {
                parsed.settings_path = Some(args.next().ok_or_else(|| CalcError::missing_field("settings"))?);
            }
            // Negative numbers are values, not flags
            flag if flag.starts_with("--") => {
                return Err(CalcError::invalid_input("argument", flag, "Unknown option"));
            }
            _ => parsed.values.push(arg),
        }
    }

    if !parsed.help && !parsed.values.is_empty() && parsed.values.len() != InputField::ALL.len() {
        return Err(CalcError::invalid_input(
            "arguments",
            parsed.values.join(" "),
            "Expected SIGMA_X SIGMA_Z TAU_XZ THETA",
        ));
    }

    Ok(parsed)
}

fn parse_count(option: &str, value: Option<String>) -> CalcResult<usize> {
    let value = value.ok_or_else(|| CalcError::missing_field(option))?;
    value
        .trim()
        .parse()
        .map_err(|_| CalcError::invalid_input(option, value.as_str(), "Expected a non-negative integer"))
}

fn load_settings(args: &CliArgs) -> CalcResult<MohrSettings> {
    let mut settings = match &args.settings_path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .map_err(|e| CalcError::invalid_input("settings", path.as_str(), e.to_string()))?;
            MohrSettings::from_json(&json)?
        }
        None => MohrSettings::default(),
    };

    if let Some(samples) = args.samples {
        settings.plot.circle_samples = samples;
    }
    if let Some(decimals) = args.decimals {
        settings.report.decimal_places = decimals;
    }
    settings.validate()?;
    Ok(settings)
}

fn prompt_field(field: InputField) -> String {
    print!("{} ({}) [{}]: ", field.label(), field.symbol(), DEFAULT_FIELD_VALUE);
    if io::stdout().flush().is_err() {
        return DEFAULT_FIELD_VALUE.to_string();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return DEFAULT_FIELD_VALUE.to_string();
    }

    // An empty answer takes the shown default; anything else goes to the parser as typed
    let input = input.trim();
    if input.is_empty() {
        DEFAULT_FIELD_VALUE.to_string()
    } else {
        input.to_string()
    }
}

fn collect_form(values: &[String]) -> StressInputForm {
    let mut form = StressInputForm::default();
    if values.is_empty() {
        for field in InputField::ALL {
            form.set(field, prompt_field(field));
        }
    } else {
        for (field, value) in InputField::ALL.iter().zip(values) {
            form.set(*field, value.as_str());
        }
    }
    form
}

fn print_report(input: &MohrInput, result: &MohrResult, settings: &MohrSettings) {
    println!("═══════════════════════════════════════");
    println!("  MOHR'S CIRCLE OF STRESSES");
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    for field in InputField::ALL {
        println!("  {:<18} {} = {}", field.label(), field.symbol(), input.value(field));
    }
    println!();
    print!("{}", ResultsReport::from_result(result, &settings.report));
    if result.circle.is_degenerate() {
        println!();
        println!("Isotropic stress state: the circle is a single point.");
    }
    println!("═══════════════════════════════════════");
}

fn report_error(error: &CalcError) -> ExitCode {
    eprintln!("Error: {}", error);
    if let Ok(json) = serde_json::to_string_pretty(error) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
    ExitCode::FAILURE
}

fn run(args: CliArgs) -> CalcResult<()> {
    let settings = load_settings(&args)?;
    let form = collect_form(&args.values);
    let input = form.parse()?;
    debug!(?input, "parsed input");

    let result = calculate_with(&input, &settings.plot)?;

    if args.json {
        let output = JsonOutput {
            input: &input,
            result: &result,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_report(&input, &result, &settings);
    }
    Ok(())
}

fn main() -> ExitCode {
    let _ = mohr_core::telemetry::init_tracing(mohr_core::telemetry::CLI_DEFAULT_FILTER);

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{}", USAGE);
            eprintln!();
            return report_error(&e);
        }
    };

    if args.help {
        println!("{}", USAGE);
        return ExitCode::SUCCESS;
    }

    info!(json = args.json, "running Mohr's circle calculation");
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report_error(&e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> CalcResult<CliArgs> {
        parse_args(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_positional_values_and_flags() {
        let parsed = args(&["100", "-50", "40", "45", "--json", "--samples", "361"]).unwrap();
        assert_eq!(parsed.values, ["100", "-50", "40", "45"]);
        assert!(parsed.json);
        assert_eq!(parsed.samples, Some(361));
    }

    #[test]
    fn test_no_values_means_prompt() {
        let parsed = args(&["--decimals", "3"]).unwrap();
        assert!(parsed.values.is_empty());
        assert_eq!(parsed.decimals, Some(3));
    }

    #[test]
    fn test_wrong_value_count() {
        let err = args(&["1", "2"]).unwrap_err();
        assert_eq!(err.field(), Some("arguments"));
    }

    #[test]
    fn test_unknown_option() {
        assert!(args(&["--verbose"]).is_err());
    }

    #[test]
    fn test_missing_option_value() {
        assert_eq!(args(&["--samples"]).unwrap_err(), CalcError::missing_field("samples"));
        assert!(args(&["--samples", "many"]).is_err());
    }

    #[test]
    fn test_settings_overrides() {
        let parsed = args(&["--samples", "11", "--decimals", "4"]).unwrap();
        let settings = load_settings(&parsed).unwrap();
        assert_eq!(settings.plot.circle_samples, 11);
        assert_eq!(settings.report.decimal_places, 4);

        let parsed = args(&["--samples", "1"]).unwrap();
        assert!(load_settings(&parsed).is_err());

        let parsed = args(&["1", "0", "0", "0", "--samples", "18446744073709551615"]).unwrap();
        assert_eq!(run(parsed).unwrap_err().field(), Some("circle_samples"));
    }

    #[test]
    fn test_collect_form_from_values() {
        let values: Vec<String> = ["100", "-50", "abc", "45"].iter().map(|s| s.to_string()).collect();
        let form = collect_form(&values);
        assert_eq!(form.parse().unwrap_err().field(), Some("tau_xz"));
    }

    #[test]
    fn test_run_rejects_bad_input() {
        let parsed = args(&["100", "x", "40", "45"]).unwrap();
        assert_eq!(run(parsed).unwrap_err().field(), Some("sigma_z"));
    }
}
