//! Background search worker.
//!
//! Submissions run on a small tokio runtime so the simulated extraction and
//! population delays never block the interactive event loop. Completion is
//! delivered over a channel the caller polls; each submission gets a fresh
//! channel, so dropping the receiver is all it takes to discard a run.

use std::time::Duration;

use crossbeam_channel::{Receiver, unbounded};
use tracing::debug;

use crate::config::Config;
use crate::error::Result;
use crate::extract::KeywordExtractor;
use crate::model::Candidate;
use crate::roster::Roster;

/// Completion events for one submission, in delivery order.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkerEvent {
    /// Extraction finished.
    Keywords(Vec<String>),
    /// Candidate population finished.
    Candidates(Vec<Candidate>),
    /// The submission was rejected or the run failed.
    Failed(String),
}

/// Runs submissions in the background and reports completion events.
pub struct SearchWorker {
    runtime: tokio::runtime::Runtime,
    extractor: KeywordExtractor,
    populate_latency: Duration,
    roster: Roster,
}

impl SearchWorker {
    pub fn new(config: &Config, roster: Roster) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_time()
            .thread_name("scout-search")
            .build()?;
        Ok(Self {
            runtime,
            extractor: KeywordExtractor::new(
                config.extraction.latency(),
                config.extraction.max_keywords,
            ),
            populate_latency: config.search.populate_latency(),
            roster,
        })
    }

    /// Starts one submission. Events arrive on the returned channel:
    /// `Keywords` after the extraction delay, then `Candidates` after the
    /// population delay, or a single `Failed` if the input is rejected.
    pub fn submit(&self, text: &str) -> Receiver<WorkerEvent> {
        let (tx, rx) = unbounded();
        let extractor = self.extractor.clone();
        let populate_latency = self.populate_latency;
        let candidates: Vec<Candidate> = self.roster.candidates().to_vec();
        let text = text.to_string();

        self.runtime.spawn(async move {
            match extractor.extract(&text).await {
                Ok(keywords) => {
                    debug!(count = keywords.len(), "extraction complete");
                    if tx.send(WorkerEvent::Keywords(keywords)).is_err() {
                        return;
                    }
                    tokio::time::sleep(populate_latency).await;
                    debug!(count = candidates.len(), "population complete");
                    let _ = tx.send(WorkerEvent::Candidates(candidates));
                }
                Err(err) => {
                    let _ = tx.send(WorkerEvent::Failed(err.to_string()));
                }
            }
        });

        rx
    }
}
