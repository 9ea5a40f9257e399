// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::error::{ExporterError, Result};
use crate::types::ClusterTargets;
use std::collections::BTreeMap;

/// What to export and where to
#[derive(Debug, Clone, Default)]
pub struct ExportConfig {
    /// Namespace Argo CD watches for cluster secrets
    pub target_namespace: String,
    pub clusters: Vec<String>,
    pub named_clusters: BTreeMap<String, String>,
    /// Replace `clusters` and `named_clusters` with whatever `vcluster list` returns
    pub auto_discover: bool,
}

impl ExportConfig {
    /// Checks that need no I/O
    pub fn validate(&self) -> Result<()> {
        if self.target_namespace.is_empty() {
            return Err(ExporterError::Config(
                "no target namespace specified".to_string(),
            ));
        }
        if !self.auto_discover && self.explicit_targets().is_empty() {
            return Err(ExporterError::Config("no clusters specified".to_string()));
        }
        Ok(())
    }

    /// Targets from the explicit flags: named pairs first, then `clusters` as identity pairs
    pub fn explicit_targets(&self) -> ClusterTargets {
        let mut targets = ClusterTargets::named(self.named_clusters.clone());
        targets.merge_identity(self.clusters.iter().cloned());
        targets
    }
}
