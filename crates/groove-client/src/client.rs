//! PetGroove API HTTP client.

use std::path::Path;

use futures_util::StreamExt;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

use groove_models::{validate_image_url, CreateJobRequest, Job, UploadResult};

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// Health check response.
#[derive(Debug, Deserialize)]
struct HealthResponse {
    ok: bool,
}

/// Client for the PetGroove rendering API.
#[derive(Clone)]
pub struct GrooveClient {
    http: Client,
    config: ClientConfig,
}

impl GrooveClient {
    /// Create a new client.
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let http = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(ClientError::Network)?;

        Ok(Self { http, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> ClientResult<Self> {
        Self::new(ClientConfig::from_env())
    }

    /// Client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Submit a render job.
    ///
    /// The image URL is validated locally first; invalid input fails without
    /// any request being issued.
    pub async fn create_job(&self, request: &CreateJobRequest) -> ClientResult<Job> {
        validate_image_url(&request.image_url)?;

        let url = format!("{}/jobs", self.config.base_url);
        debug!("Creating job at {}", url);

        let response = self.http.post(&url).json(request).send().await?;
        let job: Job = Self::check(response).await?.json().await?;

        debug!("Created job {} with status {}", job.id, job.status);
        Ok(job)
    }

    /// Fetch the current state of a job.
    pub async fn get_job(&self, job_id: &str) -> ClientResult<Job> {
        let url = format!("{}/jobs/{}", self.config.base_url, job_id);

        let response = self.http.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound(job_id.to_string()));
        }

        let job: Job = Self::check(response).await?.json().await?;
        Ok(job)
    }

    /// Upload a local file, returning the public URL to use as the image
    /// source.
    pub async fn upload_file(&self, path: impl AsRef<Path>) -> ClientResult<UploadResult> {
        let path = path.as_ref();
        let data = tokio::fs::read(path).await?;

        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        let mime = mime_guess::from_path(path).first_or_octet_stream();

        debug!("Uploading {} ({} bytes)", path.display(), data.len());

        let part = Part::bytes(data)
            .file_name(filename)
            .mime_str(mime.essence_str())?;
        let form = Form::new().part("file", part);

        let url = format!("{}/upload", self.config.base_url);
        let response = self.http.post(&url).multipart(form).send().await?;
        let result: UploadResult = Self::check(response).await?.json().await?;

        debug!("Uploaded to {}", result.url);
        Ok(result)
    }

    /// Download a result video to a local file. Returns the bytes written.
    pub async fn download_video(
        &self,
        video_url: &str,
        path: impl AsRef<Path>,
    ) -> ClientResult<u64> {
        let path = path.as_ref();
        debug!("Downloading {} to {}", video_url, path.display());

        let response = self.http.get(video_url).send().await?;
        let response = Self::check(response).await?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let mut file = tokio::fs::File::create(path).await?;
        let mut stream = response.bytes_stream();
        let mut written = 0u64;

        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            file.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }
        file.flush().await?;

        debug!("Wrote {} bytes to {}", written, path.display());
        Ok(written)
    }

    /// Check if the remote service reports itself healthy.
    pub async fn health_check(&self) -> ClientResult<bool> {
        let url = format!("{}/health", self.config.base_url);

        match self.http.get(&url).send().await {
            Ok(response) if response.status().is_success() => {
                let health: HealthResponse = response.json().await?;
                Ok(health.ok)
            }
            Ok(response) => {
                warn!("Health check failed: {}", response.status());
                Ok(false)
            }
            Err(e) => {
                warn!("Health check error: {}", e);
                Ok(false)
            }
        }
    }

    /// Map a non-2xx response to a typed error carrying the body.
    async fn check(response: Response) -> ClientResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let detail = response.text().await.unwrap_or_default();
        Err(ClientError::request_failed(status.as_u16(), detail))
    }
}
