mod cli;
mod dispatch;
mod output;

use std::io::{self, Write};
use std::process::ExitCode;

use clap::{Parser, error::ErrorKind};
use finscore_core::ScoreError;

const ROOT_HELP: &str = "FinScore - mobile-money credit scoring engine

Usage:
  finscore <command>

Start here:
  finscore demo
  finscore schema
  finscore score --help
";

const TOP_LEVEL_HELP: &str = "FinScore — mobile-money credit scoring engine

USAGE: finscore <command>

Try it:
  finscore demo                                  Score a bundled sample statement
  finscore demo --json                           Same analysis as machine-readable JSON

Score your own statement:
  1. finscore schema                             Review the accepted statement columns
  2. finscore score <path>                       Score a CSV or JSON statement file
     cat statement.csv | finscore score -        Or pipe the statement through stdin

Narrow the scored window:
  finscore score --from 2026-01-01 --to 2026-03-31 <path>

Need machine-readable output?
  Add --json to score or demo for a structured result envelope.

Having issues or errors?
  Run `finscore score --help` for the statement schema walkthrough,
  or `finscore <command> --help` for command usage.
";

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(code) => code,
    }
}

fn run() -> Result<ExitCode, ExitCode> {
    let raw_args = std::env::args().collect::<Vec<String>>();
    if raw_args.len() == 1 {
        if write_stdout(ROOT_HELP).is_err() {
            return Err(ExitCode::from(2));
        }
        return Ok(ExitCode::SUCCESS);
    }

    let parsed = cli::Cli::try_parse();
    let cli = match parsed {
        Ok(value) => value,
        Err(err) => {
            if matches!(
                err.kind(),
                ErrorKind::DisplayHelp
                    | ErrorKind::DisplayVersion
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            ) {
                if is_top_level_help_request(&raw_args) {
                    if write_stdout(TOP_LEVEL_HELP).is_err() {
                        return Err(ExitCode::from(2));
                    }
                } else if write_stdout(&err.to_string()).is_err() {
                    return Err(ExitCode::from(2));
                }
                return Ok(ExitCode::SUCCESS);
            }

            let command_hint = if matches!(
                err.kind(),
                ErrorKind::MissingRequiredArgument
                    | ErrorKind::InvalidValue
                    | ErrorKind::ValueValidation
                    | ErrorKind::WrongNumberOfValues
                    | ErrorKind::UnknownArgument
                    | ErrorKind::InvalidSubcommand
            ) {
                command_path_from_args(&raw_args)
            } else {
                None
            };
            let clean_message = strip_clap_boilerplate(&err.to_string());
            let parse_error =
                ScoreError::invalid_argument_for_command(&clean_message, command_hint.as_deref());
            let mode = infer_requested_output_mode(&raw_args);
            if output::print_failure(&parse_error, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            return Err(ExitCode::from(1));
        }
    };
    let mode = output::mode_for_command(&cli.command);

    let dispatched = dispatch::dispatch(&cli);
    match dispatched {
        Ok(success) => {
            if output::print_success(&success, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            if output::print_failure(&error, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            Err(exit_code_for_error(&error))
        }
    }
}

fn is_top_level_help_request(raw_args: &[String]) -> bool {
    raw_args.len() == 2 && matches!(raw_args[1].as_str(), "--help" | "-h")
}

/// Strips clap's trailing boilerplate (Usage line, "For more information"
/// hint) so the guided "What to do next" section is the single source of
/// recovery guidance.
fn strip_clap_boilerplate(message: &str) -> String {
    let trimmed = if let Some(pos) = message.find("\n\nUsage:") {
        &message[..pos]
    } else if let Some(pos) = message.find("\nFor more information") {
        &message[..pos]
    } else {
        message
    };
    trimmed.trim_end().to_string()
}

fn command_path_from_args(raw_args: &[String]) -> Option<String> {
    let non_flags: Vec<&str> = raw_args
        .iter()
        .skip(1)
        .filter(|value| !value.starts_with('-'))
        .map(String::as_str)
        .collect();
    if non_flags.is_empty() {
        return None;
    }

    let hint = match non_flags.as_slice() {
        ["score", ..] => Some("score"),
        ["demo", ..] => Some("demo"),
        ["schema", ..] => Some("schema"),
        _ => None,
    };
    hint.map(std::string::ToString::to_string)
}

fn exit_code_for_error(error: &ScoreError) -> ExitCode {
    if error.code.starts_with("internal_") {
        ExitCode::from(2)
    } else {
        ExitCode::from(1)
    }
}

fn infer_requested_output_mode(raw_args: &[String]) -> output::OutputMode {
    if raw_args.iter().skip(1).any(|value| value == "--json") {
        return output::OutputMode::Json;
    }
    output::OutputMode::Text
}

fn write_stdout(text: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    let written = stdout.write_all(text.as_bytes()).and_then(|()| stdout.flush());
    match written {
        Ok(()) => Ok(()),
        // A closed pager or head(1) downstream is not a failure.
        Err(error) if error.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        Err(error) => Err(error),
    }
}

#[cfg(test)]
mod tests {
    use super::{command_path_from_args, infer_requested_output_mode, strip_clap_boilerplate};

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn command_hints_follow_the_first_subcommand_token() {
        assert_eq!(
            command_path_from_args(&args(&["finscore", "score", "--from", "junk"])),
            Some("score".to_string())
        );
        assert_eq!(
            command_path_from_args(&args(&["finscore", "demo", "--nope"])),
            Some("demo".to_string())
        );
        assert_eq!(command_path_from_args(&args(&["finscore", "--json"])), None);
        assert_eq!(
            command_path_from_args(&args(&["finscore", "frob"])),
            None
        );
    }

    #[test]
    fn clap_boilerplate_is_stripped_from_parse_errors() {
        let message = "error: invalid value\n\nUsage: finscore score [OPTIONS]\n";
        assert_eq!(strip_clap_boilerplate(message), "error: invalid value");
    }

    #[test]
    fn json_flag_anywhere_requests_json_error_output() {
        let json_mode = infer_requested_output_mode(&args(&["finscore", "score", "--json", "x"]));
        assert_eq!(json_mode, super::output::OutputMode::Json);

        let text_mode = infer_requested_output_mode(&args(&["finscore", "score", "x"]));
        assert_eq!(text_mode, super::output::OutputMode::Text);
    }
}
