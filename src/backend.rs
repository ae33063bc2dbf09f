//! Dispatch backends: where submitted files get processed.
//!
//! [`SyncBackend`] runs the processor on the walking thread. [`PoolBackend`]
//! hands items to a fixed set of workers through a FIFO queue. Both sit
//! behind [`Backend`], so the walker never knows which one it feeds.

use std::collections::VecDeque;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};

use tracing::{debug, error, warn};

use crate::config::{BackendChoice, Config};
use crate::error::{LocError, Result};
use crate::faults;
use crate::processor::Processor;
use crate::walker::WorkItem;

/// Upper bound on pool threads for each logical CPU.
const MAX_WORKERS_PER_CPU: usize = 64;

pub trait Backend: Send {
    fn name(&self) -> &'static str;

    /// Threads processing submissions; the walking thread for `sync`.
    fn worker_count(&self) -> usize;

    /// Accept one item for processing. Directory items are dropped.
    fn submit(&mut self, item: WorkItem) -> Result<()>;

    /// Finish every accepted item and release the backend's resources.
    fn drain_and_shutdown(self: Box<Self>) -> Result<()>;
}

/// Pick and start the backend named by `config`.
///
/// `auto` and `threadpool` both try the pool first. When no worker can be
/// started the run continues synchronously.
pub fn select(config: &Config, processor: Processor) -> Box<dyn Backend> {
    start_backend(config.backend, config.worker_count(), processor)
}

fn start_backend(choice: BackendChoice, workers: usize, processor: Processor) -> Box<dyn Backend> {
    match choice {
        BackendChoice::Sync => Box::new(SyncBackend::new(processor)),
        BackendChoice::Auto | BackendChoice::ThreadPool => {
            match PoolBackend::start(processor.clone(), workers) {
                Ok(pool) => Box::new(pool),
                Err(err) => {
                    warn!(error = %err, "falling back to synchronous processing");
                    Box::new(SyncBackend::new(processor))
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Synchronous
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct SyncBackend {
    processor: Processor,
}

impl SyncBackend {
    pub fn new(processor: Processor) -> Self {
        SyncBackend { processor }
    }
}

impl Backend for SyncBackend {
    fn name(&self) -> &'static str {
        "sync"
    }

    fn worker_count(&self) -> usize {
        1
    }

    fn submit(&mut self, item: WorkItem) -> Result<()> {
        if !item.is_dir {
            self.processor.process(&item.path);
        }
        Ok(())
    }

    fn drain_and_shutdown(self: Box<Self>) -> Result<()> {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Pool
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QueueState {
    Accepting,
    Draining,
    Terminated,
}

#[derive(Debug)]
struct Queue {
    items: VecDeque<WorkItem>,
    state: QueueState,
    /// Workers currently processing an item outside the lock.
    active: usize,
}

impl Queue {
    fn is_drained(&self) -> bool {
        self.items.is_empty() && self.active == 0
    }
}

#[derive(Debug)]
struct Shared {
    queue: Mutex<Queue>,
    not_empty: Condvar,
    drained: Condvar,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, Queue> {
        self.queue.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[derive(Debug)]
pub struct PoolBackend {
    shared: Arc<Shared>,
    workers: Vec<JoinHandle<()>>,
}

impl PoolBackend {
    /// Spawn up to `requested` workers, capped per logical CPU. Spawning
    /// stops at the first failure; fails only when no worker started.
    pub fn start(processor: Processor, requested: usize) -> Result<Self> {
        Self::start_with_limit(processor, requested, None)
    }

    fn start_with_limit(
        processor: Processor,
        requested: usize,
        spawn_limit: Option<usize>,
    ) -> Result<Self> {
        let shared = Arc::new(Shared {
            queue: Mutex::new(Queue {
                items: VecDeque::new(),
                state: QueueState::Accepting,
                active: 0,
            }),
            not_empty: Condvar::new(),
            drained: Condvar::new(),
        });

        let cap = num_cpus::get().saturating_mul(MAX_WORKERS_PER_CPU).max(1);
        let target = if requested > cap {
            warn!(requested, cap, "limiting thread pool size");
            cap
        } else {
            requested
        };

        let mut workers = Vec::new();
        let mut last_error = None;
        for index in 0..target {
            let shared = Arc::clone(&shared);
            let processor = processor.clone();
            let spawned = faults::check_spawn(index, spawn_limit).and_then(|()| {
                thread::Builder::new()
                    .name(format!("loctally-worker-{index}"))
                    .spawn(move || worker_loop(&shared, &processor))
            });
            match spawned {
                Ok(handle) => workers.push(handle),
                Err(err) => {
                    warn!(worker = index, error = %err, "failed to spawn worker thread");
                    last_error = Some(err);
                    break;
                }
            }
        }

        if workers.is_empty() {
            let detail = last_error
                .map(|err| err.to_string())
                .unwrap_or_else(|| "no workers requested".to_string());
            return Err(LocError::Backend(format!(
                "thread pool could not start: {detail}"
            )));
        }
        if workers.len() < target {
            warn!(
                started = workers.len(),
                requested = target,
                "continuing with a partial thread pool"
            );
        }
        debug!(workers = workers.len(), "thread pool started");
        Ok(PoolBackend { shared, workers })
    }

    fn join_workers(&mut self) -> Result<()> {
        let mut panicked = 0;
        for handle in self.workers.drain(..) {
            if handle.join().is_err() {
                panicked += 1;
            }
        }
        if panicked > 0 {
            return Err(LocError::Backend(format!(
                "{panicked} worker thread(s) panicked"
            )));
        }
        Ok(())
    }
}

fn worker_loop(shared: &Shared, processor: &Processor) {
    let mut queue = shared.lock();
    loop {
        if let Some(item) = queue.items.pop_front() {
            queue.active += 1;
            drop(queue);

            if !item.is_dir {
                let outcome =
                    panic::catch_unwind(AssertUnwindSafe(|| processor.process(&item.path)));
                if outcome.is_err() {
                    error!(path = %item.path.display(), "worker panicked while processing file");
                }
            }

            queue = shared.lock();
            queue.active -= 1;
            if queue.state != QueueState::Accepting && queue.is_drained() {
                shared.drained.notify_all();
            }
            continue;
        }
        if queue.state != QueueState::Accepting {
            break;
        }
        queue = shared
            .not_empty
            .wait(queue)
            .unwrap_or_else(PoisonError::into_inner);
    }
}

impl Backend for PoolBackend {
    fn name(&self) -> &'static str {
        "threadpool"
    }

    fn worker_count(&self) -> usize {
        self.workers.len()
    }

    fn submit(&mut self, item: WorkItem) -> Result<()> {
        let mut queue = self.shared.lock();
        if queue.state != QueueState::Accepting {
            return Err(LocError::Backend(format!(
                "pool is no longer accepting work: {}",
                item.path.display()
            )));
        }
        queue.items.push_back(item);
        drop(queue);
        self.shared.not_empty.notify_one();
        Ok(())
    }

    fn drain_and_shutdown(mut self: Box<Self>) -> Result<()> {
        {
            let mut queue = self.shared.lock();
            queue.state = QueueState::Draining;
            self.shared.not_empty.notify_all();
            while !queue.is_drained() {
                queue = self
                    .shared
                    .drained
                    .wait(queue)
                    .unwrap_or_else(PoisonError::into_inner);
            }
            queue.state = QueueState::Terminated;
        }
        let joined = self.join_workers();

        let residue = {
            let mut queue = self.shared.lock();
            let count = queue.items.len();
            queue.items.clear();
            count
        };
        if residue > 0 {
            warn!(items = residue, "discarded unprocessed work items");
        }
        debug!("thread pool stopped");
        joined
    }
}

impl Drop for PoolBackend {
    fn drop(&mut self) {
        if self.workers.is_empty() {
            return;
        }
        {
            let mut queue = self.shared.lock();
            if queue.state == QueueState::Accepting {
                queue.state = QueueState::Draining;
            }
        }
        self.shared.not_empty.notify_all();
        if let Err(err) = self.join_workers() {
            error!(error = %err, "thread pool shut down uncleanly");
        }
    }
}
