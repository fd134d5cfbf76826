//! Shared data models for the PetGroove client.
//!
//! This crate provides Serde-serializable types for:
//! - Jobs and their observed statuses
//! - Job creation requests
//! - Upload results
//! - Client-side input validation

pub mod job;
pub mod validate;

// Re-export common types
pub use job::{CreateJobRequest, Job, JobStatus, UploadResult, DEFAULT_STYLE};
pub use validate::{validate_image_url, ValidationError};
