use crate::processevent::{ProcessEventSink, ReadEvent};
use crate::samples::Samples;

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    pub delimiter: u8,
    /// Skip the first line as a header row.
    pub has_headers: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { delimiter: b',', has_headers: false }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("could not open file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("error while reading: {0}")]
    Read(#[from] csv::Error),
    #[error("no valid data read")]
    NoValidData,
}

pub fn mk_rdr<R: io::Read>(reader: R, opts: &LoadOptions) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .delimiter(opts.delimiter)
        .has_headers(opts.has_headers)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader)
}

fn parse_field(record: &csv::StringRecord, idx: usize, name: &str) -> Result<f64, String> {
    let field = record.get(idx).ok_or_else(|| format!("missing {name} field"))?;
    let value: f64 = field.parse().map_err(|_| format!("could not parse {name} value '{field}'"))?;
    if !value.is_finite() {
        return Err(format!("non-finite {name} value '{field}'"));
    }
    Ok(value)
}

/// Reads (x, y) samples from the first two columns of CSV data.
///
/// Rows that cannot be used are reported to `sink` and skipped. Only I/O
/// failures and an empty result are errors.
pub fn read_samples_from<R: io::Read>(
    reader: R,
    opts: &LoadOptions,
    sink: &mut dyn ProcessEventSink,
) -> Result<(Samples, usize), LoadError> {
    let mut rdr = mk_rdr(reader, opts);
    let mut samples = Samples::new();
    let mut skipped = 0;

    for result in rdr.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) if e.is_io_error() => return Err(LoadError::Read(e)),
            Err(e) => {
                let line = e.position().map(|p| p.line()).unwrap_or(0);
                sink.on_read_event(&ReadEvent::row_fail(line, e.to_string()));
                skipped += 1;
                continue;
            },
        };
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let parsed = parse_field(&record, 0, "x")
            .and_then(|x| parse_field(&record, 1, "y").map(|y| (x, y)));
        match parsed {
            Ok((x, y)) => samples.push(x, y, line),
            Err(reason) => {
                sink.on_read_event(&ReadEvent::row_fail(line, reason));
                skipped += 1;
            },
        }
    }

    if samples.is_empty() {
        return Err(LoadError::NoValidData);
    }
    Ok((samples, skipped))
}

pub fn read_samples<P: AsRef<Path>>(
    path: P,
    opts: &LoadOptions,
    sink: &mut dyn ProcessEventSink,
) -> Result<Samples, LoadError> {
    let path = path.as_ref();
    let name = path.display().to_string();
    let file =
        File::open(path).map_err(|source| LoadError::Open { path: path.to_path_buf(), source })?;

    sink.on_read_event(&ReadEvent::File(name.clone()));
    let (samples, skipped) = read_samples_from(file, opts, sink)?;
    sink.on_read_event(&ReadEvent::FileRows { file: name, rows: samples.len(), skipped });

    Ok(samples)
}
