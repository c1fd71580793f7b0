use anyhow::{Context, Result};
use clap::Parser;
use directive_tuner::config::SessionConfig;
use directive_tuner::delivery;
use directive_tuner::directive::{ActionRecord, DirectiveBundle, DirectiveConfig};
use serde::Serialize;
use std::path::PathBuf;

/// Directive Tuner - apply directive actions and preview the resulting CDN request
#[derive(Parser, Debug)]
#[command(name = "directive-tuner")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to session configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// YAML file holding the list of actions to apply in order
    #[arg(short, long)]
    actions: Option<PathBuf>,

    /// Test configuration and exit
    #[arg(long)]
    test: bool,

    /// Also print the delivery URL (requires a delivery section)
    #[arg(long)]
    url: bool,
}

#[derive(Serialize)]
struct Output<'a> {
    snapshot: &'a DirectiveConfig,
    bundle: DirectiveBundle,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => SessionConfig::from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => SessionConfig::default(),
    };
    config.validate().context("Invalid configuration")?;

    directive_tuner::logging::init_subscriber(&config.logging)
        .map_err(|e| anyhow::anyhow!(e))
        .context("Failed to initialize logging subsystem")?;

    tracing::info!(
        config_file = %args.config.as_ref().map(|p| p.display().to_string()).unwrap_or_default(),
        error_policy = ?config.store.error_policy,
        allow_video_output = config.store.allow_video_output,
        delivery = config.delivery.is_some(),
        "Configuration loaded successfully"
    );

    if args.test {
        println!("configuration OK");
        return Ok(());
    }

    let records: Vec<ActionRecord> = match &args.actions {
        Some(path) => {
            let yaml = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read actions file {}", path.display()))?;
            serde_yaml::from_str(&yaml).context("Failed to parse actions file")?
        }
        None => Vec::new(),
    };

    let mut store = config.build_store();
    for record in &records {
        store.dispatch_record(record);
    }

    let rejected: Vec<&str> = store
        .snapshot()
        .error
        .iter()
        .filter(|(_, flagged)| *flagged)
        .map(|(field, _)| field.as_str())
        .collect();
    tracing::info!(
        actions = records.len(),
        applied = store.generation(),
        rejected = ?rejected,
        "Session replay finished"
    );

    let bundle = store.bundle();
    let url = if args.url {
        let delivery_config = config
            .delivery
            .as_ref()
            .context("--url requires a delivery section in the configuration")?;
        Some(delivery::image_url(delivery_config, &bundle)?)
    } else {
        None
    };

    let output = Output {
        snapshot: store.snapshot(),
        bundle,
        url,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
