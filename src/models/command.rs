//! Control command types for the restart/stop flow.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Destructive action that can be dispatched to a service.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandKind {
    Restart,
    Stop,
}

impl CommandKind {
    /// Wire value sent to the command API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Restart => "restart",
            Self::Stop => "stop",
        }
    }

    /// Button label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Restart => "Restart",
            Self::Stop => "Stop",
        }
    }

    /// Question shown in the confirmation panel.
    pub fn confirm_text(&self) -> &'static str {
        match self {
            Self::Restart => "This service will be restarted. Do you want to continue?",
            Self::Stop => "This service will be stopped. Do you want to continue?",
        }
    }
}

/// Lifecycle of a dispatched command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandStatus {
    /// Accepted locally, request in flight.
    Queued,
    Succeeded,
    Failed,
    TimedOut,
}

impl CommandStatus {
    /// Label shown next to the status icon in the feed.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Queued => "Queued",
            Self::Succeeded => "Succeeded",
            Self::Failed => "Failed",
            Self::TimedOut => "Timed out",
        }
    }

    /// Whether the command is still awaiting its outcome.
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Queued)
    }
}

// Feed ids only key the rendered list, so a process-wide counter is enough.
static COMMAND_RECORD_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// One entry in the command history feed.
#[derive(Clone, Debug)]
pub struct CommandRecord {
    /// Unique ID for efficient keying in For loops.
    pub id: usize,
    /// Client-generated command identifier, shown truncated in the feed.
    pub command_id: String,
    /// Target service.
    pub service_id: String,
    pub kind: CommandKind,
    pub status: CommandStatus,
    /// Epoch milliseconds when the command was queued.
    pub queued_at_ms: f64,
    /// Round-trip duration, set once the command resolves.
    pub duration_ms: Option<f64>,
}

impl CommandRecord {
    /// Create a freshly queued record.
    pub fn queued(
        command_id: impl Into<String>,
        service_id: impl Into<String>,
        kind: CommandKind,
        queued_at_ms: f64,
    ) -> Self {
        Self {
            id: COMMAND_RECORD_COUNTER.fetch_add(1, Ordering::Relaxed),
            command_id: command_id.into(),
            service_id: service_id.into(),
            kind,
            status: CommandStatus::Queued,
            queued_at_ms,
            duration_ms: None,
        }
    }
}

/// Bounded, newest-first feed of command records.
///
/// Pure data structure so the push/resolve rules stay testable off the
/// reactive graph; components hold it inside an `RwSignal`.
#[derive(Clone, Debug)]
pub struct CommandLog {
    entries: Vec<CommandRecord>,
    capacity: usize,
}

impl CommandLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    /// Prepend a record, dropping the oldest entry past capacity.
    pub fn push(&mut self, record: CommandRecord) {
        self.entries.insert(0, record);
        self.entries.truncate(self.capacity);
    }

    /// Resolve a queued record. Records resolve at most once: a record
    /// that already carries an outcome is left untouched.
    pub fn resolve(&mut self, id: usize, status: CommandStatus, duration_ms: f64) {
        if let Some(record) = self.entries.iter_mut().find(|r| r.id == id)
            && record.status.is_pending()
        {
            record.status = status;
            record.duration_ms = Some(duration_ms);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Newest-first view of the feed.
    pub fn entries(&self) -> &[CommandRecord] {
        &self.entries
    }

    /// Entries targeting one service, newest first.
    pub fn for_service(&self, service_id: &str) -> Vec<CommandRecord> {
        self.entries
            .iter()
            .filter(|r| r.service_id == service_id)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(kind: CommandKind) -> CommandRecord {
        CommandRecord::queued("cmd-0001", "svc-1", kind, 1_000.0)
    }

    #[test]
    fn test_kind_strings() {
        assert_eq!(CommandKind::Restart.as_str(), "restart");
        assert_eq!(CommandKind::Stop.as_str(), "stop");
        assert_eq!(CommandKind::Restart.label(), "Restart");
        assert!(CommandKind::Stop.confirm_text().contains("stopped"));
    }

    #[test]
    fn test_status_pending() {
        assert!(CommandStatus::Queued.is_pending());
        assert!(!CommandStatus::Succeeded.is_pending());
        assert!(!CommandStatus::Failed.is_pending());
        assert!(!CommandStatus::TimedOut.is_pending());
    }

    #[test]
    fn test_unique_record_ids() {
        let a = record(CommandKind::Restart);
        let b = record(CommandKind::Restart);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_log_is_newest_first() {
        let mut log = CommandLog::new(10);
        let first = record(CommandKind::Restart);
        let second = record(CommandKind::Stop);
        log.push(first);
        log.push(second);
        assert_eq!(log.entries()[0].kind, CommandKind::Stop);
        assert_eq!(log.entries()[1].kind, CommandKind::Restart);
    }

    #[test]
    fn test_log_capacity_bound() {
        let mut log = CommandLog::new(3);
        for _ in 0..5 {
            log.push(record(CommandKind::Restart));
        }
        assert_eq!(log.len(), 3);
    }

    #[test]
    fn test_resolve_once() {
        let mut log = CommandLog::new(10);
        let rec = record(CommandKind::Restart);
        let id = rec.id;
        log.push(rec);

        log.resolve(id, CommandStatus::Succeeded, 42.0);
        assert_eq!(log.entries()[0].status, CommandStatus::Succeeded);
        assert_eq!(log.entries()[0].duration_ms, Some(42.0));

        // A second resolution must not overwrite the outcome
        log.resolve(id, CommandStatus::Failed, 99.0);
        assert_eq!(log.entries()[0].status, CommandStatus::Succeeded);
        assert_eq!(log.entries()[0].duration_ms, Some(42.0));
    }

    #[test]
    fn test_resolve_unknown_id_is_noop() {
        let mut log = CommandLog::new(10);
        log.push(record(CommandKind::Stop));
        log.resolve(usize::MAX, CommandStatus::Failed, 1.0);
        assert_eq!(log.entries()[0].status, CommandStatus::Queued);
    }

    #[test]
    fn test_for_service_filter() {
        let mut log = CommandLog::new(10);
        log.push(CommandRecord::queued("c1", "svc-1", CommandKind::Restart, 0.0));
        log.push(CommandRecord::queued("c2", "svc-2", CommandKind::Stop, 0.0));
        log.push(CommandRecord::queued("c3", "svc-1", CommandKind::Stop, 0.0));

        let filtered = log.for_service("svc-1");
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].command_id, "c3");
        assert_eq!(filtered[1].command_id, "c1");
    }
}
