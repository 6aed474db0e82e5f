use clap::{Parser, ValueHint};
use std::path::PathBuf;

use crate::cmd::config::Config;
use crate::csv_parse::LoadOptions;
use crate::fit::ScorePolicy;
use crate::report::OutputFormat;

fn parse_delimiter(s: &str) -> Result<u8, String> {
    match s {
        "\\t" | "tab" => Ok(b'\t'),
        _ if s.len() == 1 && s.is_ascii() => Ok(s.as_bytes()[0]),
        _ => Err(format!("delimiter must be a single ASCII character, got '{s}'")),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "fitrs",
    about = "Fit linear, exponential and logarithmic models to (x, y) samples from a CSV file",
    version
)]
pub struct Cli {
    /// CSV file with x in the first column and y in the second
    #[arg(value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub input: PathBuf,

    /// Report format (text, json)
    #[arg(short = 'f', long = "format", default_value = "text")]
    pub format: OutputFormat,

    /// Samples ECM and R² are computed over for filtered models (all, fitted)
    #[arg(long = "score-on", default_value = "all")]
    pub score_on: ScorePolicy,

    /// Field delimiter
    #[arg(short = 'd', long, default_value = ",", value_parser = parse_delimiter)]
    pub delimiter: u8,

    /// First line is a header row
    #[arg(long)]
    pub header: bool,

    /// Only report skipped models and fatal errors on stderr
    #[arg(short = 'q', long)]
    pub quiet: bool,
}

// -------- Map CLI -> Config --------

impl Cli {
    pub fn into_config(self) -> Config {
        Config {
            input: self.input,
            load: LoadOptions { delimiter: self.delimiter, has_headers: self.header },
            score_policy: self.score_on,
            format: self.format,
            quiet: self.quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_defaults() {
        let cfg = Cli::try_parse_from(["fitrs", "data.csv"]).unwrap().into_config();

        assert_eq!(cfg.input, PathBuf::from("data.csv"));
        assert_eq!(cfg.load, LoadOptions::default());
        assert_eq!(cfg.score_policy, ScorePolicy::AllSamples);
        assert_eq!(cfg.format, OutputFormat::Text);
        assert!(!cfg.quiet);
    }

    #[test]
    fn test_options() {
        let cli = Cli::try_parse_from([
            "fitrs", "-d", "tab", "--header", "--score-on", "fitted", "-f", "json", "-q", "in.tsv",
        ])
        .unwrap();
        let cfg = cli.into_config();

        assert_eq!(cfg.load, LoadOptions { delimiter: b'\t', has_headers: true });
        assert_eq!(cfg.score_policy, ScorePolicy::FittedSamples);
        assert_eq!(cfg.format, OutputFormat::Json);
        assert!(cfg.quiet);
    }

    #[test]
    fn test_argument_count_errors() {
        let missing = Cli::try_parse_from(["fitrs"]).unwrap_err();
        assert_eq!(missing.kind(), ErrorKind::MissingRequiredArgument);

        let extra = Cli::try_parse_from(["fitrs", "a.csv", "b.csv"]).unwrap_err();
        assert_eq!(extra.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_bad_delimiter() {
        assert!(Cli::try_parse_from(["fitrs", "-d", ";;", "a.csv"]).is_err());
        assert_eq!(parse_delimiter(";"), Ok(b';'));
    }
}
