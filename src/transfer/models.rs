use std::fmt;
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NotFound,
}

/// What happened to one manifest entry. Reported, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferOutcome {
    Uploaded { bytes: u64 },
    Skipped(SkipReason),
    Failed(String),
}

impl TransferOutcome {
    pub fn status(&self) -> &'static str {
        match self {
            TransferOutcome::Uploaded { .. } => "UPLOADED",
            TransferOutcome::Skipped(_) => "SKIPPED",
            TransferOutcome::Failed(_) => "FAILED",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRecord {
    pub local_path: PathBuf,
    pub remote_path: String,
    pub outcome: TransferOutcome,
}

#[derive(Debug, Clone)]
pub struct BatchReport {
    pub run_id: Uuid,
    pub records: Vec<TransferRecord>,
}

impl BatchReport {
    pub fn new(run_id: Uuid) -> Self {
        Self {
            run_id,
            records: Vec::new(),
        }
    }

    pub fn push(&mut self, record: TransferRecord) {
        self.records.push(record);
    }

    pub fn outcomes(&self) -> Vec<&TransferOutcome> {
        self.records.iter().map(|r| &r.outcome).collect()
    }

    pub fn uploaded(&self) -> usize {
        self.count(|o| matches!(o, TransferOutcome::Uploaded { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, TransferOutcome::Skipped(_)))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, TransferOutcome::Failed(_)))
    }

    fn count(&self, pred: impl Fn(&TransferOutcome) -> bool) -> usize {
        self.records.iter().filter(|r| pred(&r.outcome)).count()
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} file(s): {} uploaded, {} skipped, {} failed",
            self.records.len(),
            self.uploaded(),
            self.skipped(),
            self.failed()
        )
    }
}
