//! Delayed, cancellable task operations.
//!
//! Adding and removing a task are not applied immediately: each intent is
//! submitted to an [`OperationQueue`], waits for its [`Latency`], and is then
//! reported back as an [`OperationEvent`]. The queue never touches the task
//! store; whoever owns the store drains the events and applies them, which
//! keeps every mutation on one logical actor.
//!
//! # Commit order
//!
//! - [`CommitOrder::Submission`] runs operations one after the other on a
//!   single worker, so commits always follow submission order.
//! - [`CommitOrder::Resolve`] gives each operation its own timer, so a short
//!   delay submitted late can commit before a long one submitted early.

pub mod latency;

pub use latency::{Latency, NoLatency, SimulatedLatency};

use crate::entities::TaskId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::Instant;

pub type OperationId = u64;

/// A delayed mutation of the task list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Add { title: String, description: String },
    Remove { task_id: TaskId },
}

impl Operation {
    pub fn kind(&self) -> OperationKind {
        match self {
            Self::Add { .. } => OperationKind::Add,
            Self::Remove { .. } => OperationKind::Remove,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add { title, .. } => write!(f, "add '{}'", title),
            Self::Remove { task_id } => write!(f, "remove #{}", task_id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Add,
    Remove,
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => write!(f, "add"),
            Self::Remove => write!(f, "remove"),
        }
    }
}

/// How concurrently pending operations are ordered when they commit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommitOrder {
    /// Single FIFO worker, commits follow submission order
    #[default]
    Submission,
    /// Independent timers, commits follow delay expiry
    Resolve,
}

/// Outcome of a submitted operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationEvent {
    Committed { id: OperationId, operation: Operation },
    Cancelled { id: OperationId, operation: Operation },
}

impl OperationEvent {
    pub fn id(&self) -> OperationId {
        match self {
            Self::Committed { id, .. } | Self::Cancelled { id, .. } => *id,
        }
    }

    pub fn operation(&self) -> &Operation {
        match self {
            Self::Committed { operation, .. } | Self::Cancelled { operation, .. } => operation,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OperationError {
    #[error("operation queue is closed")]
    QueueClosed,

    #[error("an {0} operation is already pending for this target")]
    AlreadyPending(OperationKind),

    #[error("no pending operation with id {0}")]
    UnknownOperation(OperationId),
}

struct QueuedOperation {
    id: OperationId,
    operation: Operation,
    cancel_rx: oneshot::Receiver<()>,
}

struct PendingOperation {
    operation: Operation,
    cancel_tx: oneshot::Sender<()>,
    handle: Option<JoinHandle<()>>,
    submitted_at: Instant,
}

pub struct OperationQueue {
    order: CommitOrder,
    latency: Arc<dyn Latency>,
    pending: HashMap<OperationId, PendingOperation>,
    next_operation_id: OperationId,
    event_sender: mpsc::UnboundedSender<OperationEvent>,
    queue_sender: Option<mpsc::UnboundedSender<QueuedOperation>>,
    worker: Option<JoinHandle<()>>,
}

impl OperationQueue {
    /// Create a queue and the receiver its events are delivered on.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(order: CommitOrder, latency: Arc<dyn Latency>) -> (Self, mpsc::UnboundedReceiver<OperationEvent>) {
        let (event_sender, event_rx) = mpsc::unbounded_channel();

        let (queue_sender, worker) = match order {
            CommitOrder::Submission => {
                let (tx, rx) = mpsc::unbounded_channel();
                let worker = tokio::spawn(run_worker(rx, Arc::clone(&latency), event_sender.clone()));
                (Some(tx), Some(worker))
            }
            CommitOrder::Resolve => (None, None),
        };

        (
            Self {
                order,
                latency,
                pending: HashMap::new(),
                next_operation_id: 1,
                event_sender,
                queue_sender,
                worker,
            },
            event_rx,
        )
    }

    /// Schedule `operation` and return its id.
    ///
    /// A second add while one is pending, or a second removal of the same
    /// task, is rejected with [`OperationError::AlreadyPending`].
    pub fn submit(&mut self, operation: Operation) -> Result<OperationId, OperationError> {
        self.check_duplicate(&operation)?;

        let id = self.next_operation_id;
        self.next_operation_id += 1;
        let (cancel_tx, cancel_rx) = oneshot::channel();

        let handle = match self.order {
            CommitOrder::Submission => {
                let sender = self.queue_sender.as_ref().ok_or(OperationError::QueueClosed)?;
                sender
                    .send(QueuedOperation {
                        id,
                        operation: operation.clone(),
                        cancel_rx,
                    })
                    .map_err(|_| OperationError::QueueClosed)?;
                None
            }
            CommitOrder::Resolve => {
                if self.event_sender.is_closed() {
                    return Err(OperationError::QueueClosed);
                }
                let latency = Arc::clone(&self.latency);
                let events = self.event_sender.clone();
                let queued = operation.clone();
                Some(tokio::spawn(async move {
                    let event = resolve(id, queued, cancel_rx, latency.as_ref()).await;
                    let _ = events.send(event);
                }))
            }
        };

        log::debug!("Operation {}: submitted {} ({:?} order)", id, operation, self.order);
        self.pending.insert(
            id,
            PendingOperation {
                operation,
                cancel_tx,
                handle,
                submitted_at: Instant::now(),
            },
        );
        Ok(id)
    }

    /// Cancel a pending operation.
    ///
    /// The operation stops counting as pending right away. Its
    /// [`OperationEvent::Cancelled`] arrives once the worker reaches it.
    pub fn cancel(&mut self, id: OperationId) -> Result<(), OperationError> {
        let pending = self.pending.remove(&id).ok_or(OperationError::UnknownOperation(id))?;
        log::debug!(
            "Operation {}: cancelled {} after {:?}",
            id,
            pending.operation,
            pending.submitted_at.elapsed()
        );
        let _ = pending.cancel_tx.send(());
        Ok(())
    }

    /// Cancel every pending operation and return their ids
    pub fn cancel_all(&mut self) -> Vec<OperationId> {
        let mut ids: Vec<OperationId> = self.pending.keys().copied().collect();
        ids.sort_unstable();
        for id in &ids {
            let _ = self.cancel(*id);
        }
        ids
    }

    /// Forget a pending operation once its commit has been applied.
    ///
    /// Returns `false` when the operation was not pending anymore, in which
    /// case the commit must be discarded.
    pub fn acknowledge(&mut self, id: OperationId) -> bool {
        match self.pending.remove(&id) {
            Some(pending) => {
                log::debug!(
                    "Operation {}: acknowledged {} after {:?}",
                    id,
                    pending.operation,
                    pending.submitted_at.elapsed()
                );
                true
            }
            None => false,
        }
    }

    pub fn order(&self) -> CommitOrder {
        self.order
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn is_busy(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn is_pending(&self, id: OperationId) -> bool {
        self.pending.contains_key(&id)
    }

    pub fn pending_operation(&self, id: OperationId) -> Option<&Operation> {
        self.pending.get(&id).map(|pending| &pending.operation)
    }

    pub fn has_pending_add(&self) -> bool {
        self.pending
            .values()
            .any(|pending| pending.operation.kind() == OperationKind::Add)
    }

    pub fn has_pending_remove(&self, task_id: TaskId) -> bool {
        self.pending
            .values()
            .any(|pending| pending.operation == Operation::Remove { task_id })
    }

    fn check_duplicate(&self, operation: &Operation) -> Result<(), OperationError> {
        let duplicate = match operation {
            Operation::Add { .. } => self.has_pending_add(),
            Operation::Remove { task_id } => self.has_pending_remove(*task_id),
        };

        if duplicate {
            Err(OperationError::AlreadyPending(operation.kind()))
        } else {
            Ok(())
        }
    }
}

impl Drop for OperationQueue {
    fn drop(&mut self) {
        for (_, pending) in self.pending.drain() {
            let _ = pending.cancel_tx.send(());
            if let Some(handle) = pending.handle {
                handle.abort();
            }
        }
        if let Some(worker) = self.worker.take() {
            worker.abort();
        }
    }
}

async fn run_worker(
    mut queue_rx: mpsc::UnboundedReceiver<QueuedOperation>,
    latency: Arc<dyn Latency>,
    events: mpsc::UnboundedSender<OperationEvent>,
) {
    while let Some(queued) = queue_rx.recv().await {
        let event = resolve(queued.id, queued.operation, queued.cancel_rx, latency.as_ref()).await;
        if events.send(event).is_err() {
            break;
        }
    }
}

async fn resolve(
    id: OperationId,
    operation: Operation,
    mut cancel_rx: oneshot::Receiver<()>,
    latency: &dyn Latency,
) -> OperationEvent {
    let kind = operation.kind();
    tokio::select! {
        biased;
        _ = &mut cancel_rx => OperationEvent::Cancelled { id, operation },
        _ = latency.wait(kind) => OperationEvent::Committed { id, operation },
    }
}
