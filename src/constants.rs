// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Labels put on every exported cluster secret
pub mod labels {
    /// Marks a secret as an Argo CD cluster registration
    pub const ARGOCD_SECRET_TYPE: &str = "argocd.argoproj.io/secret-type";
    pub const ARGOCD_SECRET_TYPE_CLUSTER: &str = "cluster";
    pub const MANAGED_BY: &str = "managed-by";
}

/// The tool name, used as the `managed-by` label value
pub const EXPORTER_NAME: &str = "vcluster-argocd-exporter";

/// Prefix of the secret name, followed by the source cluster id
pub const SECRET_NAME_PREFIX: &str = "vcluster-";

/// Keys of the secret's `stringData`
pub mod secret_keys {
    pub const NAME: &str = "name";
    pub const SERVER: &str = "server";
    pub const CONFIG: &str = "config";
}

/// Defaults for the vcluster CLI integration
pub mod vcluster {
    pub const DEFAULT_BINARY: &str = "vcluster";
    /// Service account provisioned inside the virtual cluster on connect
    pub const DEFAULT_SERVICE_ACCOUNT: &str = "kube-system/my-user";
    /// Role bound to the provisioned service account
    pub const DEFAULT_CLUSTER_ROLE: &str = "cluster-admin";
}

/// Namespace Argo CD is usually installed in
pub const DEFAULT_TARGET_NAMESPACE: &str = "argocd";
