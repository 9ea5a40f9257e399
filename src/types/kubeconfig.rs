// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Parsing of the kubeconfig printed by `vcluster connect --print`

use crate::error::{ExporterError, Result};
use serde::Deserialize;
use tracing::debug;

#[derive(Deserialize, Debug)]
struct RawKubeconfig {
    clusters: Vec<RawNamedCluster>,
    users: Vec<RawNamedUser>,
}

#[derive(Deserialize, Debug)]
struct RawNamedCluster {
    cluster: RawCluster,
}

#[derive(Deserialize, Debug, Default)]
struct RawCluster {
    #[serde(default)]
    server: String,
    #[serde(default, rename = "certificate-authority-data")]
    certificate_authority_data: String,
}

#[derive(Deserialize, Debug)]
struct RawNamedUser {
    #[serde(default)]
    user: RawUser,
}

#[derive(Deserialize, Debug, Default)]
struct RawUser {
    #[serde(default)]
    token: String,
}

/// Credentials of a single virtual cluster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualKubeconfig {
    pub server: String,
    /// Base64 encoded CA bundle, as found in the kubeconfig
    pub certificate_authority_data: String,
    pub token: String,
}

impl VirtualKubeconfig {
    /// Parse a kubeconfig document.
    ///
    /// Only the first cluster and the first user are read; any further
    /// entries are ignored.
    pub fn parse(yaml: &str) -> Result<Self> {
        debug!("Unmarshalling virtual kubeconfig...");
        let raw: RawKubeconfig = serde_yaml::from_str(yaml)?;

        let cluster = raw
            .clusters
            .into_iter()
            .next()
            .ok_or(ExporterError::IncompleteKubeconfig("cluster"))?;
        let user = raw
            .users
            .into_iter()
            .next()
            .ok_or(ExporterError::IncompleteKubeconfig("user"))?;

        Ok(VirtualKubeconfig {
            server: cluster.cluster.server,
            certificate_authority_data: cluster.cluster.certificate_authority_data,
            token: user.user.token,
        })
    }
}
