// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::collections::BTreeMap;

/// Source cluster id to the display name registered in Argo CD
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClusterTargets(BTreeMap<String, String>);

impl ClusterTargets {
    /// Every cluster is registered under its own name
    pub fn identity<I, S>(clusters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ClusterTargets(
            clusters
                .into_iter()
                .map(|c| {
                    let c = c.into();
                    (c.clone(), c)
                })
                .collect(),
        )
    }

    pub fn named(named: BTreeMap<String, String>) -> Self {
        ClusterTargets(named)
    }

    /// Add identity pairs for clusters that have no explicit display name yet
    pub fn merge_identity<I, S>(&mut self, clusters: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for cluster in clusters {
            let cluster = cluster.into();
            self.0.entry(cluster.clone()).or_insert(cluster);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl std::fmt::Display for ClusterTargets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let pairs: Vec<String> = self.0.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
        write!(f, "[{}]", pairs.join(","))
    }
}
