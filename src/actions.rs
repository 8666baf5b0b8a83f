//! Bulk actions over the current selection.
//!
//! The dispatcher resolves selected ids against the store (stale ids are
//! dropped, never an error), runs the action, then clears the selection.
//! Delete mutates the store directly; tag, email and export only hand the
//! resolved records to an [`ActionSink`] — what "send an email" actually
//! means belongs to the client, not to this crate.

use crate::error::Result;
use crate::model::Record;
use crate::selection::Selection;
use crate::store::RecordStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Delete,
    Tag,
    Email,
    Export,
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionKind::Delete => write!(f, "delete"),
            ActionKind::Tag => write!(f, "tag"),
            ActionKind::Email => write!(f, "email"),
            ActionKind::Export => write!(f, "export"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A presentation-free notice for the client to render (toast, stderr, ...).
#[derive(Debug, Clone)]
pub struct Message {
    pub level: MessageLevel,
    pub content: String,
}

impl Message {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// What a bulk action did, for the client to report.
#[derive(Debug, Clone)]
pub struct BulkOutcome {
    pub kind: ActionKind,
    /// Records actually touched. Zero for a no-op on an empty selection.
    pub affected: usize,
    pub messages: Vec<Message>,
}

impl BulkOutcome {
    fn new(kind: ActionKind) -> Self {
        Self {
            kind,
            affected: 0,
            messages: Vec::new(),
        }
    }

    fn with_affected(mut self, affected: usize) -> Self {
        self.affected = affected;
        self
    }

    fn with_message(mut self, message: Message) -> Self {
        self.messages.push(message);
        self
    }

    pub fn is_noop(&self) -> bool {
        self.affected == 0
    }
}

/// Side-effect collaborator for the non-delete actions. Implementations own
/// any I/O and may fail; the dispatcher propagates their errors untouched.
pub trait ActionSink<T: Record> {
    fn tag(&mut self, records: &[T]) -> Result<()>;
    fn email(&mut self, records: &[T]) -> Result<()>;
    fn export(&mut self, records: &[T]) -> Result<()>;
}

/// A sink that ignores every hand-off. Useful for delete-only pages and
/// for tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl<T: Record> ActionSink<T> for NullSink {
    fn tag(&mut self, _records: &[T]) -> Result<()> {
        Ok(())
    }

    fn email(&mut self, _records: &[T]) -> Result<()> {
        Ok(())
    }

    fn export(&mut self, _records: &[T]) -> Result<()> {
        Ok(())
    }
}

/// Runs `kind` against the records the selection names.
///
/// Targets are resolved in store order. The selection is cleared on every
/// path, including the empty no-op, so a completed action always leaves a
/// clean slate for the next one.
pub fn dispatch<T: Record, S: ActionSink<T>>(
    kind: ActionKind,
    selection: &mut Selection,
    store: &mut RecordStore<T>,
    sink: &mut S,
) -> Result<BulkOutcome> {
    let targets: Vec<T> = store
        .records()
        .iter()
        .filter(|r| selection.is_selected(&r.id()))
        .cloned()
        .collect();
    selection.clear();

    if targets.is_empty() {
        return Ok(BulkOutcome::new(kind)
            .with_message(Message::warning(format!("No records selected to {}", kind))));
    }

    let outcome = match kind {
        ActionKind::Delete => {
            let mut removed = 0;
            for target in &targets {
                if store.delete(&target.id()) {
                    removed += 1;
                }
            }
            BulkOutcome::new(kind)
                .with_affected(removed)
                .with_message(Message::success(format!("Deleted {} records", removed)))
        }
        ActionKind::Tag => {
            sink.tag(&targets)?;
            BulkOutcome::new(kind)
                .with_affected(targets.len())
                .with_message(Message::success(format!("Tagged {} records", targets.len())))
        }
        ActionKind::Email => {
            sink.email(&targets)?;
            BulkOutcome::new(kind)
                .with_affected(targets.len())
                .with_message(Message::success(format!(
                    "Queued email for {} records",
                    targets.len()
                )))
        }
        ActionKind::Export => {
            sink.export(&targets)?;
            BulkOutcome::new(kind)
                .with_affected(targets.len())
                .with_message(Message::success(format!(
                    "Exported {} records",
                    targets.len()
                )))
        }
    };

    Ok(outcome)
}
