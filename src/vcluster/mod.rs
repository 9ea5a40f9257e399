// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Integration with the vcluster CLI.

pub mod command;

pub use command::{parse_cluster_list, VclusterCommand, VclusterOptions};

use crate::error::Result;
use crate::types::VirtualKubeconfig;
use async_trait::async_trait;

/// Listing and connecting to virtual clusters
#[async_trait]
pub trait VirtualClusterCli: Send + Sync {
    /// Names of all virtual clusters visible from the current context, in the
    /// order the CLI reports them
    async fn list(&self) -> Result<Vec<String>>;

    /// Credentials for a single virtual cluster
    async fn connect(&self, cluster: &str) -> Result<VirtualKubeconfig>;
}
