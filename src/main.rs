// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use vcluster_argocd_exporter::cli::Cli;
use vcluster_argocd_exporter::error::fatal_message;
use vcluster_argocd_exporter::export::Exporter;
use vcluster_argocd_exporter::kubernetes::{create_client, ResourceClient};
use vcluster_argocd_exporter::vcluster::VclusterCommand;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let default_level = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_file(cli.debug)
        .with_line_number(cli.debug)
        .init();

    if let Err(e) = run(cli).await {
        error!("{}", fatal_message(&e));
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = cli.export_config();
    info!(
        target_namespace = %config.target_namespace,
        clusters = ?config.clusters,
        named_clusters = ?config.named_clusters,
        auto_discover = config.auto_discover,
        "Processing..."
    );
    config.validate()?;

    let client = create_client(cli.kube_timeout()).await?;
    info!("Kubernetes client created");

    let exporter = Exporter::new(
        ResourceClient::new(client),
        VclusterCommand::new(cli.vcluster_options()),
    );
    let exported = exporter.run(&config).await?;

    info!("Clusters exported successfully: {:?}", exported);
    Ok(())
}
