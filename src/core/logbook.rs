//! Log store: attendance events, newest first.

use crate::models::LogEntry;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogBook {
    entries: Vec<LogEntry>,
}

/// First phase of a clear-all. Only the log book hands these out and
/// `commit_clear` consumes it, so a clear cannot happen without a request.
#[derive(Debug)]
#[must_use = "a clear request does nothing until it is committed"]
pub struct ClearRequest {
    pending: usize,
}

impl ClearRequest {
    /// Number of entries that will be removed.
    pub fn pending(&self) -> usize {
        self.pending
    }
}

impl LogBook {
    pub fn new(entries: Vec<LogEntry>) -> Self {
        Self { entries }
    }

    /// Insert at the head of the sequence.
    pub fn append(&mut self, entry: LogEntry) {
        self.entries.insert(0, entry);
    }

    pub fn request_clear(&self) -> ClearRequest {
        ClearRequest {
            pending: self.entries.len(),
        }
    }

    /// Irreversibly empty the log. Returns how many entries were dropped.
    pub fn commit_clear(&mut self, _request: ClearRequest) -> usize {
        let removed = self.entries.len();
        self.entries.clear();
        removed
    }

    pub fn list(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recently appended entry.
    pub fn head(&self) -> Option<&LogEntry> {
        self.entries.first()
    }

    pub fn latest_for(&self, staff_id: &str) -> Option<&LogEntry> {
        self.entries.iter().find(|e| e.staff_id == staff_id)
    }

    /// The `n` most recent entries, newest first.
    pub fn recent(&self, n: usize) -> &[LogEntry] {
        &self.entries[..n.min(self.entries.len())]
    }

    pub fn for_staff<'a>(&'a self, staff_id: &'a str) -> impl Iterator<Item = &'a LogEntry> + 'a {
        self.entries.iter().filter(move |e| e.staff_id == staff_id)
    }
}
