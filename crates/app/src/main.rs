//! Postman Template Generator - Main Entry Point
//!
//! Writes `template-postman-collection.json` and
//! `template-postman-environment.json` for the template backend.

mod summary;

use postman_template_application::GenerateTemplateFiles;
use postman_template_infrastructure::{FileDocumentStore, GeneratorConfig, SystemClock};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout only carries the summary
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!(
        "Generating Postman template files (postman-template v{})",
        env!("CARGO_PKG_VERSION")
    );

    let config = GeneratorConfig::from_env()?;
    tracing::debug!(output_dir = %config.output_dir.display(), "configuration loaded");

    let use_case = GenerateTemplateFiles::new(
        FileDocumentStore::new(&config.output_dir),
        SystemClock::new(),
    );
    let summary = use_case.execute(&config.profile)?;

    print!("{}", summary::render(&summary));
    Ok(())
}
