// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! `VirtualClusterCli` backed by the `vcluster` binary.
//!
//! Output is read from stdout: `list --output json` must print a JSON array of
//! objects carrying a `name`, and `connect --print` must print a kubeconfig.
//! Anything else is a parse error; a non-zero exit carries the command line and stderr.

use super::VirtualClusterCli;
use crate::constants::vcluster::{DEFAULT_BINARY, DEFAULT_CLUSTER_ROLE, DEFAULT_SERVICE_ACCOUNT};
use crate::error::{ExporterError, Result};
use crate::types::VirtualKubeconfig;
use async_trait::async_trait;
use serde::Deserialize;
use std::path::PathBuf;
use tokio::process::Command;
use tracing::{debug, instrument};

#[derive(Debug, Clone)]
pub struct VclusterOptions {
    pub binary: PathBuf,
    /// `namespace/name` of the service account created inside the virtual cluster
    pub service_account: String,
    pub cluster_role: String,
}

impl Default for VclusterOptions {
    fn default() -> Self {
        Self {
            binary: PathBuf::from(DEFAULT_BINARY),
            service_account: DEFAULT_SERVICE_ACCOUNT.to_string(),
            cluster_role: DEFAULT_CLUSTER_ROLE.to_string(),
        }
    }
}

pub struct VclusterCommand {
    options: VclusterOptions,
}

impl VclusterCommand {
    pub fn new(options: VclusterOptions) -> Self {
        Self { options }
    }

    fn connect_args<'a>(&'a self, cluster: &'a str) -> Vec<&'a str> {
        vec![
            "connect",
            cluster,
            "--print",
            "--service-account",
            self.options.service_account.as_str(),
            "--cluster-role",
            self.options.cluster_role.as_str(),
        ]
    }

    /// Run the binary and return its stdout
    async fn run(&self, args: &[&str]) -> Result<String> {
        let command = format!("{} {}", self.options.binary.display(), args.join(" "));
        debug!("Executing {}", command);

        let output = Command::new(&self.options.binary)
            .args(args)
            .output()
            .await
            .map_err(|source| ExporterError::Spawn {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(ExporterError::Command {
                command,
                message: if stderr.is_empty() {
                    format!("exited with {}", output.status)
                } else {
                    stderr
                },
            });
        }

        String::from_utf8(output.stdout)
            .map_err(|source| ExporterError::InvalidOutput { command, source })
    }
}

#[async_trait]
impl VirtualClusterCli for VclusterCommand {
    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<String>> {
        let stdout = self.run(&["list", "--output", "json"]).await?;
        parse_cluster_list(&stdout)
    }

    #[instrument(skip(self))]
    async fn connect(&self, cluster: &str) -> Result<VirtualKubeconfig> {
        let stdout = self.run(&self.connect_args(cluster)).await?;
        VirtualKubeconfig::parse(&stdout)
    }
}

#[derive(Deserialize)]
struct ListedCluster {
    #[serde(alias = "Name")]
    name: String,
}

/// Names from the JSON output of `vcluster list`, in document order
pub fn parse_cluster_list(json: &str) -> Result<Vec<String>> {
    let clusters: Option<Vec<ListedCluster>> =
        serde_json::from_str(json).map_err(ExporterError::ClusterListParse)?;

    let names: Vec<String> = clusters
        .unwrap_or_default()
        .into_iter()
        .map(|c| c.name)
        .collect();
    debug!("Parsed virtual cluster list: {:?}", names);
    Ok(names)
}
