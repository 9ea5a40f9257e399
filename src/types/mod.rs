// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Plain data types moved between the vcluster CLI and the Kubernetes API.

pub mod argocd;
pub mod kubeconfig;
pub mod target;

pub use argocd::ArgoSecretConfig;
pub use kubeconfig::VirtualKubeconfig;
pub use target::ClusterTargets;
