// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Turns virtual cluster credentials into Argo CD cluster secrets

use crate::config::ExportConfig;
use crate::constants::{labels, secret_keys, EXPORTER_NAME, SECRET_NAME_PREFIX};
use crate::error::{ExporterError, Result};
use crate::kubernetes::ResourceClient;
use crate::types::{ArgoSecretConfig, ClusterTargets, VirtualKubeconfig};
use crate::vcluster::VirtualClusterCli;
use k8s_openapi::api::core::v1::Secret;
use kube::api::ObjectMeta;
use std::collections::BTreeMap;
use tracing::{debug, info, instrument};

pub fn secret_name(cluster: &str) -> String {
    format!("{}{}", SECRET_NAME_PREFIX, cluster)
}

/// Build the Argo CD cluster secret for one virtual cluster
pub fn build_cluster_secret(
    cluster: &str,
    display_name: &str,
    namespace: &str,
    kubeconfig: &VirtualKubeconfig,
) -> Result<Secret> {
    let config = ArgoSecretConfig::from(kubeconfig).to_json()?;

    Ok(Secret {
        metadata: ObjectMeta {
            name: Some(secret_name(cluster)),
            namespace: Some(namespace.to_string()),
            labels: Some(BTreeMap::from([
                (
                    labels::ARGOCD_SECRET_TYPE.to_string(),
                    labels::ARGOCD_SECRET_TYPE_CLUSTER.to_string(),
                ),
                (labels::MANAGED_BY.to_string(), EXPORTER_NAME.to_string()),
            ])),
            ..Default::default()
        },
        type_: Some("Opaque".to_string()),
        string_data: Some(BTreeMap::from([
            (secret_keys::NAME.to_string(), display_name.to_string()),
            (secret_keys::SERVER.to_string(), kubeconfig.server.clone()),
            (secret_keys::CONFIG.to_string(), config),
        ])),
        ..Default::default()
    })
}

pub struct Exporter<C> {
    resources: ResourceClient,
    vcluster: C,
}

impl<C: VirtualClusterCli> Exporter<C> {
    pub fn new(resources: ResourceClient, vcluster: C) -> Self {
        Self {
            resources,
            vcluster,
        }
    }

    /// Work out which clusters to export, running discovery when asked to.
    ///
    /// Discovery replaces every explicitly configured cluster.
    pub async fn resolve_targets(&self, config: &ExportConfig) -> Result<ClusterTargets> {
        config.validate()?;

        if config.auto_discover {
            info!("Auto discovering clusters...");
            let discovered = self
                .vcluster
                .list()
                .await
                .map_err(|e| ExporterError::Discovery(Box::new(e)))?;
            if discovered.is_empty() {
                return Err(ExporterError::NoClustersDiscovered);
            }
            info!(
                "Discovered [{}] clusters: {:?}",
                discovered.len(),
                discovered
            );
            return Ok(ClusterTargets::identity(discovered));
        }

        Ok(config.explicit_targets())
    }

    /// Export every target, stopping at the first failure.
    ///
    /// Returns the names of the secrets written, in processing order.
    #[instrument(skip(self, config), fields(namespace = %config.target_namespace))]
    pub async fn run(&self, config: &ExportConfig) -> Result<Vec<String>> {
        let targets = self.resolve_targets(config).await?;
        info!("Exporting clusters {}", targets);

        let mut exported = Vec::with_capacity(targets.len());
        for (cluster, display_name) in targets.iter() {
            let name = self
                .export_cluster(&config.target_namespace, cluster, display_name)
                .await?;
            exported.push(name);
        }
        Ok(exported)
    }

    #[instrument(skip(self))]
    async fn export_cluster(
        &self,
        namespace: &str,
        cluster: &str,
        display_name: &str,
    ) -> Result<String> {
        debug!("Connecting to virtual cluster...");
        let kubeconfig = self.vcluster.connect(cluster).await?;

        let secret = build_cluster_secret(cluster, display_name, namespace, &kubeconfig)?;
        let name = secret_name(cluster);
        debug!("Writing secret {}/{}", namespace, name);
        self.resources.create_secret(namespace, &secret).await?;

        info!("Exported cluster {} as secret {}/{}", cluster, namespace, name);
        Ok(name)
    }
}
