//! Job types as exchanged with the PetGroove API.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Style applied by the backend when none is given.
pub const DEFAULT_STYLE: &str = "photoreal";

/// Observed status of a render job.
///
/// Transitions are driven by the backend; the client only reads them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    /// Job is waiting for a worker
    #[default]
    Queued,
    /// Job is being rendered
    Processing,
    /// Render finished
    Done,
    /// Render failed
    Error,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Queued => "queued",
            JobStatus::Processing => "processing",
            JobStatus::Done => "done",
            JobStatus::Error => "error",
        }
    }

    /// Terminal statuses stop the poll loop.
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Done | JobStatus::Error)
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A render job as reported by `POST /jobs` and `GET /jobs/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    /// Opaque job identifier minted by the backend
    pub id: String,

    /// Current status
    pub status: JobStatus,

    /// Result video URL, present once the job is done
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,

    /// Error message, present once the job has failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Request body for `POST /jobs`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateJobRequest {
    /// Source pet image URL
    pub image_url: String,
    /// Motion preset identifier
    pub motion_id: String,
    /// Render style
    pub style: String,
}

impl CreateJobRequest {
    pub fn new(image_url: impl Into<String>, motion_id: impl Into<String>) -> Self {
        Self {
            image_url: image_url.into(),
            motion_id: motion_id.into(),
            style: DEFAULT_STYLE.to_string(),
        }
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }
}

/// Response body for `POST /upload`.
///
/// The returned URL substitutes for the image URL field, after which normal
/// submission proceeds unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResult {
    /// Public URL of the uploaded file
    pub url: String,
}
