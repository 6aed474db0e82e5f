use fitrs_core::cmd::cli::Cli;
use fitrs_core::cmd::config::Config;

use clap::error::ErrorKind;
use clap::Parser;
use std::process;

/// Exit status for a wrong command line, distinct from load failures.
const USAGE_EXIT: i32 = 2;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                print!("{}", e.render());
                process::exit(USAGE_EXIT);
            },
        },
    };

    let cfg: Config = cli.into_config();
    if let Err(e) = cfg.run() {
        // already reported on stderr by the console sink
        process::exit(e.exit_code());
    }
}
