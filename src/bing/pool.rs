//! Bounded worker pool for fetch jobs.
//!
//! A fixed set of worker tasks pulls jobs from one bounded queue. Submitting
//! never waits: when the queue is full the job is rejected with
//! [`BingWallpaperError::PoolFull`].

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tokio::sync::mpsc::error::TrySendError;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use crate::{BingWallpaperError, Result};

type Job = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

/// Named pool of worker tasks.
///
/// Must be created inside a Tokio runtime.
pub struct WorkerPool {
    name: String,
    sender: mpsc::Sender<Job>,
    workers: Vec<JoinHandle<()>>,
}

impl WorkerPool {
    /// Spawn `workers` tasks sharing a queue of `capacity` jobs.
    ///
    /// Both counts are raised to at least one.
    pub fn new(workers: usize, capacity: usize, name: impl Into<String>) -> Self {
        let name = name.into();
        let (sender, receiver) = mpsc::channel::<Job>(capacity.max(1));
        let receiver = Arc::new(Mutex::new(receiver));

        let workers = (0..workers.max(1))
            .map(|i| {
                let worker_name = format!("{}-{}", name, i + 1);
                let receiver = Arc::clone(&receiver);
                tokio::spawn(async move {
                    debug!(worker = %worker_name, "Worker started");
                    loop {
                        let job = receiver.lock().await.recv().await;
                        let Some(job) = job else { break };
                        // A panicking job must not take the worker down with it.
                        if let Err(e) = tokio::spawn(job).await {
                            error!(worker = %worker_name, "Job failed: {}", e);
                        }
                    }
                    debug!(worker = %worker_name, "Worker stopped");
                })
            })
            .collect::<Vec<_>>();

        info!(
            pool = %name,
            workers = workers.len(),
            capacity = capacity.max(1),
            "Worker pool started"
        );

        Self {
            name,
            sender,
            workers,
        }
    }

    /// Pool name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of worker tasks.
    pub fn workers(&self) -> usize {
        self.workers.len()
    }

    /// Number of jobs waiting in the queue.
    pub fn queued(&self) -> usize {
        self.sender.max_capacity() - self.sender.capacity()
    }

    /// Queue a job without waiting.
    ///
    /// Fails with `PoolFull` only when the queue holds `capacity` jobs.
    pub fn submit<F>(&self, job: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.sender.try_send(Box::pin(job)).map_err(|e| match e {
            TrySendError::Full(_) => BingWallpaperError::PoolFull(self.name.clone()),
            TrySendError::Closed(_) => BingWallpaperError::PoolClosed(self.name.clone()),
        })
    }

    /// Stop accepting jobs and wait until every queued job has run.
    pub async fn shutdown(self) {
        drop(self.sender);
        for worker in self.workers {
            let _ = worker.await;
        }
        info!(pool = %self.name, "Worker pool stopped");
    }
}

impl std::fmt::Debug for WorkerPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkerPool")
            .field("name", &self.name)
            .field("workers", &self.workers.len())
            .finish()
    }
}
