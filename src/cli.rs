// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Command line interface

use crate::config::ExportConfig;
use crate::constants::{vcluster, DEFAULT_TARGET_NAMESPACE};
use crate::vcluster::VclusterOptions;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Export vcluster credentials as Argo CD cluster secrets
#[derive(Parser, Debug)]
#[command(name = "vcluster-argocd-exporter")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Clusters to export, registered under their own name
    #[arg(short = 'c', long = "clusters", value_delimiter = ',')]
    pub clusters: Vec<String>,

    /// Clusters to export under a different name, as `cluster=name`
    #[arg(long = "named-cluster", value_delimiter = ',', value_parser = parse_named_cluster)]
    pub named_clusters: Vec<(String, String)>,

    /// Namespace where Argo CD is installed
    #[arg(
        short = 'n',
        long = "namespace",
        visible_alias = "target-namespace",
        short_alias = 't',
        env = "TARGET_NAMESPACE",
        default_value = DEFAULT_TARGET_NAMESPACE
    )]
    pub namespace: String,

    /// Auto discover clusters (overrides all other cluster flags)
    #[arg(long)]
    pub auto_discover: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Path to the vcluster binary
    #[arg(long, env = "VCLUSTER_BIN", default_value = vcluster::DEFAULT_BINARY)]
    pub vcluster_bin: PathBuf,

    /// Service account created inside each virtual cluster on connect
    #[arg(long, default_value = vcluster::DEFAULT_SERVICE_ACCOUNT)]
    pub service_account: String,

    /// Cluster role bound to the connect service account
    #[arg(long, default_value = vcluster::DEFAULT_CLUSTER_ROLE)]
    pub cluster_role: String,

    /// Kubernetes API timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,
}

fn parse_named_cluster(s: &str) -> Result<(String, String), String> {
    let (cluster, name) = s
        .split_once('=')
        .ok_or_else(|| format!("expected `cluster=name`, got `{}`", s))?;
    if cluster.is_empty() {
        return Err(format!("missing cluster in `{}`", s));
    }
    Ok((cluster.to_string(), name.to_string()))
}

impl Cli {
    pub fn export_config(&self) -> ExportConfig {
        ExportConfig {
            target_namespace: self.namespace.clone(),
            clusters: self.clusters.clone(),
            named_clusters: self.named_clusters.iter().cloned().collect(),
            auto_discover: self.auto_discover,
        }
    }

    pub fn vcluster_options(&self) -> VclusterOptions {
        VclusterOptions {
            binary: self.vcluster_bin.clone(),
            service_account: self.service_account.clone(),
            cluster_role: self.cluster_role.clone(),
        }
    }

    pub fn kube_timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }
}
