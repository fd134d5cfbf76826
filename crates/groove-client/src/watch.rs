//! Job polling state machine.
//!
//! Watches a job through `queued → processing → {done | error}` by polling
//! `GET /jobs/{id}` on a fixed interval. Terminal states stop the loop
//! exactly once; a poll failure becomes an error outcome and also stops it.
//! Dropping the watch future cancels polling, so no updates are delivered
//! after teardown.

use std::time::Duration;

use tracing::{debug, warn};

use groove_models::{Job, JobStatus};

use crate::client::GrooveClient;
use crate::error::ClientResult;

/// Terminal outcome of a watched job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobOutcome {
    /// The job finished; the video URL may be absent ("no result").
    Done { video_url: Option<String> },
    /// The job failed, or polling itself failed.
    Error { message: String },
}

impl JobOutcome {
    pub fn video_url(&self) -> Option<&str> {
        match self {
            JobOutcome::Done { video_url } => video_url.as_deref(),
            JobOutcome::Error { .. } => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, JobOutcome::Error { .. })
    }
}

/// Polls a job until it reaches a terminal state.
pub struct JobWatcher {
    client: GrooveClient,
    interval: Duration,
}

impl JobWatcher {
    /// Create a watcher using the client's configured poll interval.
    pub fn new(client: GrooveClient) -> Self {
        let interval = client.config().poll_interval;
        Self { client, interval }
    }

    /// Override the poll interval.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Watch a freshly created job until a terminal state.
    ///
    /// The job's current status is reported first, so a successful creation
    /// is always observed as `queued` before any terminal state. Each later
    /// status change is reported once via `on_transition`.
    pub async fn watch<F>(&self, job: &Job, mut on_transition: F) -> JobOutcome
    where
        F: FnMut(JobStatus),
    {
        let mut status = job.status;
        on_transition(status);

        if status.is_terminal() {
            return Self::outcome(job);
        }

        loop {
            tokio::time::sleep(self.interval).await;

            let current = match self.client.get_job(&job.id).await {
                Ok(current) => current,
                Err(e) => {
                    // No automatic retry: surface the failure and stop.
                    warn!("Poll failed for job {}: {}", job.id, e);
                    on_transition(JobStatus::Error);
                    return JobOutcome::Error {
                        message: e.to_string(),
                    };
                }
            };

            if current.status != status {
                debug!("Job {} moved {} -> {}", job.id, status, current.status);
                status = current.status;
                on_transition(status);
            }

            if status.is_terminal() {
                return Self::outcome(&current);
            }
        }
    }

    /// Fetch an existing job by id and watch it until a terminal state.
    pub async fn watch_id<F>(&self, job_id: &str, on_transition: F) -> ClientResult<JobOutcome>
    where
        F: FnMut(JobStatus),
    {
        let job = self.client.get_job(job_id).await?;
        Ok(self.watch(&job, on_transition).await)
    }

    fn outcome(job: &Job) -> JobOutcome {
        match job.status {
            JobStatus::Error => JobOutcome::Error {
                message: job
                    .error
                    .clone()
                    .unwrap_or_else(|| "job failed without a message".to_string()),
            },
            _ => JobOutcome::Done {
                video_url: job.video_url.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_done_without_url() {
        let job = Job {
            id: "j1".to_string(),
            status: JobStatus::Done,
            video_url: None,
            error: None,
        };
        let outcome = JobWatcher::outcome(&job);
        assert_eq!(outcome, JobOutcome::Done { video_url: None });
        assert!(outcome.video_url().is_none());
    }

    #[test]
    fn test_outcome_error_carries_message() {
        let job = Job {
            id: "j1".to_string(),
            status: JobStatus::Error,
            video_url: None,
            error: Some("render exploded".to_string()),
        };
        match JobWatcher::outcome(&job) {
            JobOutcome::Error { message } => assert_eq!(message, "render exploded"),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }
}
