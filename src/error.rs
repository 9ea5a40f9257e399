// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExporterError {
    #[error("{0}")]
    Config(String),

    #[error("failed to discover clusters: {0}")]
    Discovery(#[source] Box<ExporterError>),

    #[error("no clusters discovered")]
    NoClustersDiscovered,

    #[error("failed to execute `{command}`: {message}")]
    Command { command: String, message: String },

    #[error("failed to spawn `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` printed invalid UTF-8: {source}")]
    InvalidOutput {
        command: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("failed to parse virtual kubeconfig: {0}")]
    KubeconfigParse(#[from] serde_yaml::Error),

    #[error("failed to parse virtual cluster list: {0}")]
    ClusterListParse(#[source] serde_json::Error),

    #[error("virtual kubeconfig has no {0} entries")]
    IncompleteKubeconfig(&'static str),

    #[error("failed to get REST mapping for {gvk}: {message}")]
    Mapping { gvk: String, message: String },

    #[error("failed to {verb} resource: {source}")]
    Resource {
        verb: &'static str,
        #[source]
        source: kube::Error,
    },

    #[error("failed to create Kubernetes client: {0}")]
    KubeClient(String),

    #[error("Kubernetes API error: {0}")]
    Kube(#[from] kube::Error),

    #[error("failed to serialize {what}: {source}")]
    Serialization {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl ExporterError {
    /// True when the underlying API call answered 404.
    pub fn is_not_found(&self) -> bool {
        match self {
            ExporterError::Resource {
                source: kube::Error::Api(err),
                ..
            }
            | ExporterError::Kube(kube::Error::Api(err)) => err.code == 404,
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, ExporterError>;

/// The line logged when a run fails.
///
/// Every `ExporterError` variant already renders its cause, so the chain is
/// printed with `{}` and not walked again.
pub fn fatal_message(err: &anyhow::Error) -> String {
    format!("failed to export cluster(s). error: {}", err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kube::error::ErrorResponse;
    use std::collections::BTreeMap;

    fn api_error(code: u16) -> kube::Error {
        kube::Error::Api(ErrorResponse {
            status: "Failure".to_string(),
            message: "boom".to_string(),
            reason: "Whatever".to_string(),
            code,
        })
    }

    #[test]
    fn test_is_not_found_on_wrapped_404() {
        let err = ExporterError::Resource {
            verb: "get",
            source: api_error(404),
        };
        assert!(err.is_not_found());
    }

    #[test]
    fn test_is_not_found_false_for_other_codes() {
        let err = ExporterError::Resource {
            verb: "get",
            source: api_error(403),
        };
        assert!(!err.is_not_found());
        assert!(!ExporterError::NoClustersDiscovered.is_not_found());
    }

    #[test]
    fn test_fatal_message_prints_each_cause_once() {
        let err = anyhow::Error::from(ExporterError::Discovery(Box::new(
            ExporterError::Command {
                command: "vcluster list --output json".to_string(),
                message: "boom".to_string(),
            },
        )));

        assert_eq!(
            fatal_message(&err),
            "failed to export cluster(s). error: failed to discover clusters: \
             failed to execute `vcluster list --output json`: boom"
        );
    }

    #[test]
    fn test_fatal_message_for_kubeconfig_parse() {
        let yaml_err = serde_yaml::from_str::<BTreeMap<String, Vec<String>>>("clusters: 1")
            .unwrap_err();
        let cause = yaml_err.to_string();
        let err = anyhow::Error::from(ExporterError::KubeconfigParse(yaml_err));

        let message = fatal_message(&err);
        assert_eq!(message.matches(cause.as_str()).count(), 1);
        assert!(message.starts_with(
            "failed to export cluster(s). error: failed to parse virtual kubeconfig: "
        ));
    }

    #[test]
    fn test_resource_error_has_static_prefix() {
        let err = ExporterError::Resource {
            verb: "update",
            source: api_error(500),
        };
        assert!(err.to_string().starts_with("failed to update resource"));
    }
}
