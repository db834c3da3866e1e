//! Background execution of pipeline invocations.
//!
//! The pipeline is synchronous; on large datasets running it on the UI
//! thread stalls interaction. [`PlotWorker`] moves whole invocations onto a
//! named background thread with a message-passing contract: requests go in
//! tagged with a generation number, outputs come back tagged with the
//! generation that produced them, and anything older than the latest
//! submission is discarded on receipt. Submitting also supersedes the
//! in-flight invocation, which stops at its next cooperative yield point.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crate::error::PlotResult;
use crate::pipeline::{CancelSource, CancelToken, Pipeline, PlotOutput};
use crate::request::PlotRequest;

struct Job {
    generation: u64,
    request: PlotRequest,
    token: CancelToken,
}

/// One completed invocation, tagged with the submission that produced it.
#[derive(Debug)]
pub struct WorkerOutput {
    pub generation: u64,
    pub result: PlotResult<PlotOutput>,
}

/// A single background thread running pipeline invocations.
///
/// # Example
///
/// ```ignore
/// let worker = PlotWorker::spawn();
/// let generation = worker.submit(request);
/// // ... later, e.g. once per UI frame:
/// if let Some(output) = worker.try_recv() {
///     debug_assert_eq!(output.generation, generation);
/// }
/// ```
pub struct PlotWorker {
    jobs: Option<mpsc::Sender<Job>>,
    results: mpsc::Receiver<WorkerOutput>,
    cancel: CancelSource,
    latest: Arc<AtomicU64>,
    handle: Option<thread::JoinHandle<()>>,
}

impl PlotWorker {
    /// Spawn the worker thread.
    pub fn spawn() -> Self {
        let (job_tx, job_rx) = mpsc::channel::<Job>();
        let (result_tx, result_rx) = mpsc::channel::<WorkerOutput>();

        let handle = thread::Builder::new()
            .name("skyline-plot-worker".into())
            .spawn(move || {
                while let Ok(job) = job_rx.recv() {
                    let result = Pipeline::run_cancellable(&job.request, &job.token);
                    if result_tx
                        .send(WorkerOutput {
                            generation: job.generation,
                            result,
                        })
                        .is_err()
                    {
                        break;
                    }
                }
                tracing::debug!("plot worker thread exiting");
            })
            .expect("Failed to spawn plot worker thread");

        tracing::debug!("plot worker spawned");
        Self {
            jobs: Some(job_tx),
            results: result_rx,
            cancel: CancelSource::new(),
            latest: Arc::new(AtomicU64::new(0)),
            handle: Some(handle),
        }
    }

    /// Submit an invocation, superseding any in-flight one.
    ///
    /// Returns the generation number whose output to wait for.
    pub fn submit(&self, request: PlotRequest) -> u64 {
        self.cancel.supersede();
        let generation = self.latest.fetch_add(1, Ordering::AcqRel) + 1;
        let job = Job {
            generation,
            request,
            token: self.cancel.token(),
        };
        if let Some(jobs) = &self.jobs {
            // Only fails after shutdown, when there is nobody to notify.
            let _ = jobs.send(job);
        }
        generation
    }

    fn is_current(&self, output: &WorkerOutput) -> bool {
        output.generation == self.latest.load(Ordering::Acquire)
    }

    /// Non-blocking poll for the latest submission's output.
    ///
    /// Outputs from superseded submissions are dropped silently.
    pub fn try_recv(&self) -> Option<WorkerOutput> {
        while let Ok(output) = self.results.try_recv() {
            if self.is_current(&output) {
                return Some(output);
            }
            tracing::trace!(generation = output.generation, "discarding stale plot output");
        }
        None
    }

    /// Block up to `timeout` for the latest submission's output.
    pub fn wait(&self, timeout: Duration) -> Option<WorkerOutput> {
        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.checked_duration_since(Instant::now())?;
            match self.results.recv_timeout(remaining) {
                Ok(output) if self.is_current(&output) => return Some(output),
                Ok(output) => {
                    tracing::trace!(generation = output.generation, "discarding stale plot output");
                }
                Err(_) => return None,
            }
        }
    }

    /// Shut the worker down and wait for the thread to finish.
    pub fn shutdown(mut self) {
        self.shutdown_inner();
    }

    fn shutdown_inner(&mut self) {
        self.cancel.supersede();
        // Closing the job channel ends the worker loop.
        self.jobs.take();
        if let Some(handle) = self.handle.take()
            && let Err(e) = handle.join()
        {
            tracing::error!("plot worker thread panicked: {:?}", e);
        }
        tracing::debug!("plot worker shutdown complete");
    }
}

impl Drop for PlotWorker {
    fn drop(&mut self) {
        self.shutdown_inner();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::PlotRequestBuilder;
    use crate::record::Record;

    fn request(n: usize) -> PlotRequest {
        let records = (0..n)
            .map(|i| {
                Record::new()
                    .with("a", i as f64)
                    .with("b", (i % 10) as f64)
                    .with("c", (i % 7) as f64)
            })
            .collect();
        PlotRequestBuilder::scatter3d()
            .x_field("a")
            .y_field("b")
            .z_field("c")
            .records(records)
            .build()
            .unwrap()
    }

    #[test]
    fn test_worker_round_trip() {
        let worker = PlotWorker::spawn();
        let generation = worker.submit(request(100));
        let output = worker.wait(Duration::from_secs(5)).expect("worker output");
        assert_eq!(output.generation, generation);
        let plot = output.result.unwrap();
        assert_eq!(plot.summary.original_point_count, 100);
        worker.shutdown();
    }

    #[test]
    fn test_stale_generation_discarded() {
        let worker = PlotWorker::spawn();
        worker.submit(request(20_000));
        let generation = worker.submit(request(50));
        // Whatever happened to the first job (finished or cancelled), only
        // the second generation's output may surface.
        let output = worker.wait(Duration::from_secs(5)).expect("worker output");
        assert_eq!(output.generation, generation);
        assert_eq!(output.result.unwrap().summary.original_point_count, 50);
    }
}
