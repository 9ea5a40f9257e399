// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! The `config` payload of an Argo CD cluster secret

use crate::error::{ExporterError, Result};
use crate::types::kubeconfig::VirtualKubeconfig;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ArgoSecretConfig {
    pub bearer_token: String,
    pub tls_client_config: TlsClientConfig,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TlsClientConfig {
    pub ca_data: String,
    pub insecure: bool,
}

impl From<&VirtualKubeconfig> for ArgoSecretConfig {
    fn from(kubeconfig: &VirtualKubeconfig) -> Self {
        ArgoSecretConfig {
            bearer_token: kubeconfig.token.clone(),
            tls_client_config: TlsClientConfig {
                ca_data: kubeconfig.certificate_authority_data.clone(),
                insecure: false,
            },
        }
    }
}

impl ArgoSecretConfig {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|source| ExporterError::Serialization {
            what: "argo secret config",
            source,
        })
    }
}
