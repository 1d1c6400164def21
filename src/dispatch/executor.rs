//! Scheduling contexts for monitor callbacks.

use tokio::runtime::Handle;
use tokio::sync::mpsc;

/// A task handed to an executor.
type Task = Box<dyn FnOnce() + Send>;

/// A scheduling context on which monitor sinks run.
///
/// Dispatch is fire-and-forget: `execute` must not block the caller on the
/// task completing, and no return value is consumed. Implementations that
/// want per-monitor ordering must run tasks in submission order (see
/// [`SerialExecutor`]).
pub trait Executor: Send + Sync {
    /// Schedule a task for execution.
    fn execute(&self, task: Task);
}

/// Executor that runs tasks synchronously on the calling thread.
///
/// Mostly useful in tests and for sinks that only forward into a channel.
/// Sinks run on whatever thread the device delivers events on, so slow
/// consumers will stall the dispatcher.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineExecutor;

impl Executor for InlineExecutor {
    fn execute(&self, task: Task) {
        task();
    }
}

/// Executor backed by a dedicated worker task on a tokio runtime.
///
/// Tasks are queued on an unbounded channel and drained in submission
/// order by a single worker, so readings dispatched through one
/// `SerialExecutor` reach the sink in the order they were produced. The
/// worker exits when every clone of the executor has been dropped.
#[derive(Clone)]
pub struct SerialExecutor {
    tx: mpsc::UnboundedSender<Task>,
}

impl SerialExecutor {
    /// Spawn a worker on the given runtime handle.
    pub fn spawn(handle: &Handle) -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel::<Task>();
        handle.spawn(async move {
            while let Some(task) = rx.recv().await {
                task();
            }
        });
        Self { tx }
    }

    /// Spawn a worker on the current runtime.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime context.
    pub fn current() -> Self {
        Self::spawn(&Handle::current())
    }
}

impl Executor for SerialExecutor {
    fn execute(&self, task: Task) {
        // Send fails only once the worker is gone; nothing to deliver to then
        let _ = self.tx.send(task);
    }
}
