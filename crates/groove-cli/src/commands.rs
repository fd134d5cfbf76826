//! Command implementations.

use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use groove_client::{GrooveClient, JobOutcome, JobWatcher};
use groove_models::{CreateJobRequest, Job};

use crate::SubmitArgs;

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}").expect("valid spinner template"),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Submit a render job, optionally uploading a local file first.
pub async fn submit(client: &GrooveClient, args: SubmitArgs) -> Result<()> {
    let image_url = match (args.image_url, args.file) {
        (Some(url), None) => url,
        (None, Some(path)) => {
            let pb = spinner("Uploading image...");
            let result = client.upload_file(&path).await;
            pb.finish_and_clear();
            let uploaded = result?;
            println!("{} {}", style("Uploaded:").green(), uploaded.url);
            uploaded.url
        }
        // clap enforces exactly one source
        _ => unreachable!(),
    };

    let request = CreateJobRequest::new(image_url, args.motion).with_style(args.style);
    let job = client.create_job(&request).await?;
    println!("{} {}", style("Job created:").green(), job.id);

    if args.no_wait {
        return Ok(());
    }

    watch_job(client, &job, args.output.as_deref()).await
}

/// One-shot job status.
pub async fn status(client: &GrooveClient, job_id: &str) -> Result<()> {
    let job = client.get_job(job_id).await?;

    println!("id:     {}", job.id);
    println!("status: {}", job.status);
    if let Some(url) = &job.video_url {
        println!("video:  {}", url);
    }
    if let Some(error) = &job.error {
        println!("error:  {}", style(error).red());
    }

    Ok(())
}

/// Poll an existing job until it reaches a terminal state.
pub async fn watch(client: &GrooveClient, job_id: &str, output: Option<&Path>) -> Result<()> {
    let job = client.get_job(job_id).await?;
    watch_job(client, &job, output).await
}

/// Probe service health; the exit code reflects the result.
pub async fn health(client: &GrooveClient) -> Result<()> {
    if client.health_check().await? {
        println!("{}", style("service is healthy").green());
        Ok(())
    } else {
        bail!("service is unhealthy or unreachable");
    }
}

async fn watch_job(client: &GrooveClient, job: &Job, output: Option<&Path>) -> Result<()> {
    let pb = spinner(&format!("status: {}", job.status));
    let outcome = JobWatcher::new(client.clone())
        .watch(job, |status| pb.set_message(format!("status: {}", status)))
        .await;
    pb.finish_and_clear();

    match outcome {
        JobOutcome::Done {
            video_url: Some(url),
        } => {
            println!("{} {}", style("Done:").green().bold(), url);
            if let Some(path) = output {
                let pb = spinner("Downloading video...");
                let result = client.download_video(&url, path).await;
                pb.finish_and_clear();
                let written = result?;
                println!("Saved {} ({} bytes)", path.display(), written);
            }
            Ok(())
        }
        JobOutcome::Done { video_url: None } => {
            println!(
                "{}",
                style("Job finished, but no result video was returned.").yellow()
            );
            Ok(())
        }
        JobOutcome::Error { message } => bail!(message),
    }
}
