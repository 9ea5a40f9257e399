// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! GroupVersionKind to REST resource resolution, backed by API discovery

use crate::error::{ExporterError, Result};
use kube::{
    api::{ApiResource, GroupVersionKind, TypeMeta},
    discovery, Client,
};
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

type CacheKey = (String, String, String);

fn cache_key(gvk: &GroupVersionKind) -> CacheKey {
    (gvk.group.clone(), gvk.version.clone(), gvk.kind.clone())
}

/// Split an object's `apiVersion`/`kind` into a GroupVersionKind
pub fn gvk_from_type_meta(types: Option<&TypeMeta>) -> Result<GroupVersionKind> {
    let Some(types) = types else {
        return Err(ExporterError::Mapping {
            gvk: "<unknown>".to_string(),
            message: "object has no apiVersion/kind".to_string(),
        });
    };
    let (group, version) = match types.api_version.split_once('/') {
        Some((g, v)) => (g, v),
        None => ("", types.api_version.as_str()),
    };
    let gvk = GroupVersionKind::gvk(group, version, &types.kind);
    validate_gvk(&gvk)?;
    Ok(gvk)
}

fn validate_gvk(gvk: &GroupVersionKind) -> Result<()> {
    if gvk.version.is_empty() || gvk.kind.is_empty() {
        return Err(ExporterError::Mapping {
            gvk: format!("{}/{}/{}", gvk.group, gvk.version, gvk.kind),
            message: "version and kind must be set".to_string(),
        });
    }
    Ok(())
}

/// Resolves kinds through discovery and keeps the results in memory.
///
/// Entries never expire; a kind that is not cached yet triggers a discovery
/// call for its group version.
pub struct RestMapper {
    client: Client,
    cache: RwLock<HashMap<CacheKey, ApiResource>>,
}

impl RestMapper {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            cache: RwLock::new(HashMap::new()),
        }
    }

    pub async fn resolve(&self, gvk: &GroupVersionKind) -> Result<ApiResource> {
        validate_gvk(gvk)?;
        let key = cache_key(gvk);

        if let Some(ar) = self.cache.read().await.get(&key) {
            return Ok(ar.clone());
        }

        debug!(
            "REST mapping for {}/{}/{} not cached, running discovery",
            gvk.group, gvk.version, gvk.kind
        );
        let (ar, _caps) = discovery::pinned_kind(&self.client, gvk)
            .await
            .map_err(|e| ExporterError::Mapping {
                gvk: format!("{}/{}/{}", gvk.group, gvk.version, gvk.kind),
                message: e.to_string(),
            })?;

        self.cache.write().await.insert(key, ar.clone());
        Ok(ar)
    }
}
