use crate::fit::fiterror::FitError;
use crate::fit::fitkind::ModelKind;

#[derive(Debug, Clone, PartialEq)]
pub enum ProcessEvent {
    Read(ReadEvent),
    Fit(FitEvent),
    Done(Result<(), String>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReadEvent {
    File(String),
    RowFail { line: u64, reason: String },
    FileRows { file: String, rows: usize, skipped: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub enum FitEvent {
    Started(ModelKind),
    SampleOmitted { kind: ModelKind, index: usize, line: Option<u64>, reason: FitError },
    Skipped { kind: ModelKind, reason: FitError },
    Fitted(ModelKind),
}

pub trait ProcessEventSink {
    fn on_read_event(&mut self, ev: &ReadEvent);
    fn on_fit_event(&mut self, ev: &FitEvent);
    fn on_done(&mut self, res: &Result<(), String>);

    fn emit(&mut self, ev: ProcessEvent) {
        match ev {
            ProcessEvent::Read(ev) => self.on_read_event(&ev),
            ProcessEvent::Fit(ev) => self.on_fit_event(&ev),
            ProcessEvent::Done(res) => self.on_done(&res),
        }
    }
}

impl ReadEvent {
    pub fn row_fail(line: u64, reason: impl Into<String>) -> Self {
        Self::RowFail { line, reason: reason.into() }
    }
}

impl std::fmt::Display for ReadEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReadEvent::File(file) => write!(f, "Reading {}", file),
            ReadEvent::RowFail { line, reason } => write!(f, "Skipping line {}: {}", line, reason),
            ReadEvent::FileRows { file, rows, skipped } => {
                write!(f, "Read {} samples from {} ({} lines skipped)", rows, file, skipped)
            },
        }
    }
}

impl std::fmt::Display for FitEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FitEvent::Started(kind) => write!(f, "Fitting {} model", kind.as_str()),
            FitEvent::SampleOmitted { kind, index, line, reason } => {
                write!(f, "{} model: omitting sample at index {}", kind, index)?;
                if let Some(line) = line {
                    write!(f, " (line {})", line)?;
                }
                write!(f, ", {}", reason)
            },
            FitEvent::Skipped { kind, reason } => {
                write!(f, "{} model skipped: {}", kind, reason)
            },
            FitEvent::Fitted(kind) => write!(f, "{} model fitted", kind),
        }
    }
}

/// Sink that keeps every event, in arrival order.
#[derive(Debug, Default)]
pub struct EventLog {
    pub events: Vec<ProcessEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fit_events(&self) -> impl Iterator<Item = &FitEvent> {
        self.events.iter().filter_map(|ev| match ev {
            ProcessEvent::Fit(ev) => Some(ev),
            _ => None,
        })
    }

    pub fn read_events(&self) -> impl Iterator<Item = &ReadEvent> {
        self.events.iter().filter_map(|ev| match ev {
            ProcessEvent::Read(ev) => Some(ev),
            _ => None,
        })
    }
}

impl ProcessEventSink for EventLog {
    fn on_read_event(&mut self, ev: &ReadEvent) {
        self.events.push(ProcessEvent::Read(ev.clone()));
    }
    fn on_fit_event(&mut self, ev: &FitEvent) {
        self.events.push(ProcessEvent::Fit(ev.clone()));
    }
    fn on_done(&mut self, res: &Result<(), String>) {
        self.events.push(ProcessEvent::Done(res.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_omitted_message() {
        let ev = FitEvent::SampleOmitted {
            kind: ModelKind::Exponential,
            index: 2,
            line: Some(3),
            reason: FitError::NonPositiveY,
        };
        assert_eq!(
            ev.to_string(),
            "Exponential model: omitting sample at index 2 (line 3), logarithm undefined for y <= 0"
        );
    }

    #[test]
    fn test_event_log_dispatch() {
        let mut log = EventLog::new();
        log.emit(ProcessEvent::Read(ReadEvent::row_fail(4, "bad")));
        log.emit(ProcessEvent::Fit(FitEvent::Started(ModelKind::Linear)));
        log.emit(ProcessEvent::Done(Ok(())));

        assert_eq!(log.events.len(), 3);
        assert_eq!(log.read_events().count(), 1);
        assert_eq!(log.fit_events().next(), Some(&FitEvent::Started(ModelKind::Linear)));
    }
}
