use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsoDate(pub String);

impl IsoDate {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub fn parse_iso_date(value: &str) -> Result<IsoDate, String> {
    if value.len() != 10 {
        return Err("date must use YYYY-MM-DD format".to_string());
    }

    let bytes = value.as_bytes();
    if bytes[4] != b'-' || bytes[7] != b'-' {
        return Err("date must use YYYY-MM-DD format".to_string());
    }

    for index in [0usize, 1, 2, 3, 5, 6, 8, 9] {
        if !bytes[index].is_ascii_digit() {
            return Err("date must use YYYY-MM-DD format".to_string());
        }
    }

    if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() {
        return Err("date must use valid calendar values".to_string());
    }

    Ok(IsoDate(value.to_string()))
}

/// Extended help shown after `finscore score --help`.
/// Contains workflow guidance, the statement schema, and scoring notes.
pub const SCORE_AFTER_HELP: &str = "\
How scoring works:
  FinScore does not parse raw provider PDFs. You extract each statement
  into a plain table first, then score it.

  Accepted formats:
    JSON — one top-level array of transaction objects
    CSV  — one header row with the statement column names

  <path> is a local file path.
  To read stdin explicitly, use `-` as the path.
  Example: cat statement.csv | finscore score -

Statement schema:
  CSV example (header + rows):
  date,time,amount,balance,description
  2026-01-02,09:15,\"KSh 35,000\",\"KSh 52,340\",ACME LTD SALARY
  2026-01-03,12:40,-1450,\"KSh 50,890\",Till payment NAIVAS

  JSON example (one top-level array):
  [
    {
      \"date\": \"2026-01-02\",
      \"time\": \"09:15\",
      \"amount\": \"KSh 35,000\",
      \"balance\": \"KSh 52,340\",
      \"description\": \"ACME LTD SALARY\"
    }
  ]

Column rules (very explicit):
  date (required):
    `YYYY-MM-DD` or `DD/MM/YYYY`. Any row with an unparseable date fails
    the whole analysis — dates anchor every time-based feature.

  time (optional):
    `HH:MM`. Rows without a usable time count as midday activity.

  amount (optional):
    Signed value; negative = money out, positive = money in. Currency
    formatting like `KSh 1,200` is cleaned up automatically. Values that
    still fail to parse are treated as missing, not as errors.

  balance (optional):
    Account balance after the transaction. Same cleanup rules as amount.

  category (optional):
    One of: Airtime, Send, Withdraw, Payment, Income. Anything else
    counts as Unknown.

  description (optional):
    Raw transaction text. Used to infer the category when no category
    column exists (run `finscore schema` for the keyword rules).

Decision bands:
  score >= 80   APPROVE      KES 50,000 at 8%
  score >= 65   APPROVE      KES 25,000 at 12%
  score >= 50   APPROVE      KES 10,000 at 15%
  score >= 35   CONDITIONAL  KES 3,000 at 20%
  below 35      DECLINE      KES 0
";

#[derive(Debug, Parser)]
#[command(
    name = "finscore",
    version,
    about = "mobile-money credit scoring engine",
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Score a mobile-money statement and get a loan recommendation
    #[command(after_long_help = SCORE_AFTER_HELP)]
    Score {
        /// Only score rows on or after this date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_iso_date)]
        from: Option<IsoDate>,
        /// Only score rows on or before this date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_iso_date)]
        to: Option<IsoDate>,
        /// Emit structured JSON object output for machine parsing
        #[arg(long)]
        json: bool,
        /// Path to a statement CSV or JSON file (use `-` for stdin)
        path: Option<String>,
    },
    /// Preview a full credit analysis using a bundled sample statement
    Demo {
        /// Emit structured JSON object output for machine parsing
        #[arg(long)]
        json: bool,
    },
    /// Show the accepted statement schema, category rules, and decision bands
    Schema,
}

#[cfg(test)]
pub fn parse_from<I, T>(itr: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(itr)
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;

    use super::{Commands, parse_from};

    #[test]
    fn parse_command_paths() {
        let cases: [Vec<&str>; 10] = [
            vec!["finscore", "score", "statement.csv"],
            vec!["finscore", "score", "statement.csv", "--json"],
            vec!["finscore", "score", "-"],
            vec!["finscore", "score"],
            vec!["finscore", "score", "--from", "2026-01-01", "statement.csv"],
            vec![
                "finscore",
                "score",
                "--from",
                "2026-01-01",
                "--to",
                "2026-02-01",
                "statement.csv",
            ],
            vec!["finscore", "demo"],
            vec!["finscore", "demo", "--json"],
            vec!["finscore", "schema"],
            vec!["finscore", "score", "--json"],
        ];

        for case in cases {
            let parsed = parse_from(case.clone());
            assert!(parsed.is_ok(), "failed to parse: {case:?}");
        }
    }

    #[test]
    fn invalid_date_is_rejected() {
        let parsed = parse_from(["finscore", "score", "--from", "2026-99-01", "x.csv"]);
        assert!(parsed.is_err());

        let malformed = parse_from(["finscore", "score", "--to", "01-01-2026", "x.csv"]);
        assert!(malformed.is_err());
    }

    #[test]
    fn score_flags_land_in_the_command() {
        let parsed = parse_from([
            "finscore",
            "score",
            "--from",
            "2026-01-01",
            "statement.csv",
            "--json",
        ]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            assert!(matches!(
                cli.command,
                Commands::Score {
                    json: true,
                    path: Some(_),
                    from: Some(_),
                    to: None,
                }
            ));
        }
    }

    #[test]
    fn schema_rejects_json_flag() {
        let parsed = parse_from(["finscore", "schema", "--json"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn help_command_is_rejected() {
        let parsed = parse_from(["finscore", "help"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn score_help_uses_clap_display_help() {
        let parsed = parse_from(["finscore", "score", "--help"]);
        assert!(parsed.is_err());
        if let Err(err) = parsed {
            assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        }
    }
}
