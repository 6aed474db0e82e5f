use crate::csv_parse::{read_samples, LoadError, LoadOptions};
use crate::fit::ScorePolicy;
use crate::pipeline::run_models;
use crate::processevent::{FitEvent, ProcessEventSink, ReadEvent};
use crate::report::{OutputFormat, Report};

use std::io::{self, Write};
use std::path::PathBuf;

/* =================== Public configuration types =================== */

#[derive(Debug, Clone)]
pub struct Config {
    pub input: PathBuf,
    pub load: LoadOptions,
    pub score_policy: ScorePolicy,
    pub format: OutputFormat,
    pub quiet: bool,
}

/* =================== Error type (no process::exit) =================== */

#[derive(thiserror::Error, Debug)]
pub enum CmdError {
    #[error("{0}")]
    Load(#[from] LoadError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

impl CmdError {
    /// Process exit status for this error. Usage errors are handled before a
    /// `Config` exists and use their own status.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

/* =================== Diagnostics =================== */

/// Writes diagnostics to a stream, stderr for the command line.
pub struct ConsoleSink<W: Write> {
    out: W,
    quiet: bool,
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W, quiet: bool) -> Self {
        Self { out, quiet }
    }
}

impl<W: Write> ProcessEventSink for ConsoleSink<W> {
    fn on_read_event(&mut self, ev: &ReadEvent) {
        match ev {
            ReadEvent::RowFail { .. } if !self.quiet => {
                let _ = writeln!(self.out, "{}", ev);
            },
            // progress chatter stays out of the way of the report
            ReadEvent::RowFail { .. } | ReadEvent::File(_) | ReadEvent::FileRows { .. } => {},
        }
    }
    fn on_fit_event(&mut self, ev: &FitEvent) {
        match ev {
            FitEvent::Skipped { .. } => {
                let _ = writeln!(self.out, "{}", ev);
            },
            FitEvent::SampleOmitted { .. } if !self.quiet => {
                let _ = writeln!(self.out, "{}", ev);
            },
            FitEvent::SampleOmitted { .. } | FitEvent::Started(_) | FitEvent::Fitted(_) => {},
        }
    }
    fn on_done(&mut self, res: &Result<(), String>) {
        if let Err(e) = res {
            let _ = writeln!(self.out, "{}", e);
        }
    }
}

/* =================== Entry point =================== */

impl Config {
    pub fn run(&self) -> Result<Report, CmdError> {
        let stdout = io::stdout();
        let mut sink = ConsoleSink::new(io::stderr(), self.quiet);
        self.run_with(&mut stdout.lock(), &mut sink)
    }

    /// Loads the samples, fits every model and writes the report to `out`.
    ///
    /// Only load failures and write failures are errors; models that cannot
    /// be fitted show up as skip entries in the returned report. The outcome
    /// is also reported to `sink` as a done event.
    pub fn run_with<W: Write>(
        &self,
        out: &mut W,
        sink: &mut dyn ProcessEventSink,
    ) -> Result<Report, CmdError> {
        let res = self.execute(out, sink);
        match &res {
            Ok(_) => sink.on_done(&Ok(())),
            Err(e) => sink.on_done(&Err(e.to_string())),
        }
        res
    }

    fn execute<W: Write>(
        &self,
        out: &mut W,
        sink: &mut dyn ProcessEventSink,
    ) -> Result<Report, CmdError> {
        let samples = read_samples(&self.input, &self.load, sink)?;

        let report = run_models(&samples, self.score_policy, sink);
        out.write_all(report.render(self.format)?.as_bytes())?;
        out.flush()?;

        Ok(report)
    }
}
