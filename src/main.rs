//! Directory export runner - main entry point
//!
//! One-shot binary: load the tenant's contact snapshot from the directory
//! service and write the default-criteria view as a dated CSV export.

use anyhow::{Context, Result};
use chrono::Utc;
use directory_reports::repositories::{ContactDirectory, HttpContactDirectory};
use directory_reports::{export_file_name, Config, DirectoryClient, DirectoryService};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize logging (stderr only; stdout is reserved for output paths)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Exporting contacts for tenant {} from {}",
        config.tenant_id, config.directory_api_url
    );

    // Initialize the directory client and service
    let client = DirectoryClient::new(&config);
    let directory = Arc::new(HttpContactDirectory::new(client)) as Arc<dyn ContactDirectory>;
    let service = DirectoryService::new(directory, config.tenant_id.clone());

    // Load the snapshot; a failure here leaves nothing to export
    service
        .refresh()
        .await
        .context("failed to load the contact directory")?;

    let summary = service.summary();
    info!(
        total = summary.total,
        active = summary.active_count,
        blocked = summary.blocked_count,
        distinct_tags = summary.distinct_tag_count,
        "directory loaded"
    );

    // Serialize the default-criteria view and write the dated artifact
    let document = service.export_csv();
    let file_name = export_file_name(Utc::now().date_naive());
    let path = config.export_dir.join(file_name);

    std::fs::write(&path, document)
        .with_context(|| format!("failed to write export to {}", path.display()))?;

    info!("Export written to {}", path.display());
    println!("{}", path.display());

    Ok(())
}
