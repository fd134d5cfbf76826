//! Client for the PetGroove rendering API.
//!
//! This crate provides:
//! - Typed wrappers around `POST /jobs`, `GET /jobs/{id}` and `POST /upload`
//! - A job-polling state machine that watches a job to a terminal state
//! - Result video download
//! - Service health probe

pub mod client;
pub mod config;
pub mod error;
pub mod watch;

pub use client::GrooveClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use watch::{JobOutcome, JobWatcher};
