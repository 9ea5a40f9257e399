// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Client creation for the host cluster Argo CD runs in

use crate::error::{ExporterError, Result};
use kube::{Client, Config as KConfig};
use std::time::Duration;
use tracing::{debug, instrument};

/// Create a client from the in-cluster service account, or the local kubeconfig
/// when not running inside a pod.
#[instrument]
pub async fn create_client(timeout: Option<Duration>) -> Result<Client> {
    let mut config = KConfig::infer()
        .await
        .map_err(|e| ExporterError::KubeClient(format!("Failed to infer config: {}", e)))?;

    apply_timeout(&mut config, timeout);
    debug!("Using API server {}", config.cluster_url);

    Client::try_from(config)
        .map_err(|e| ExporterError::KubeClient(format!("Failed to create client: {}", e)))
}

fn apply_timeout(config: &mut KConfig, timeout: Option<Duration>) {
    if let Some(timeout) = timeout {
        config.connect_timeout = Some(timeout);
        config.read_timeout = Some(timeout);
        config.write_timeout = Some(timeout);
    }
}
