// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Schema-agnostic get/create/update on top of `Api<DynamicObject>`

use crate::error::{ExporterError, Result};
use crate::kubernetes::mapper::{gvk_from_type_meta, RestMapper};
use k8s_openapi::api::core::v1::Secret;
use kube::{
    api::{ApiResource, DynamicObject, GroupVersionKind, ObjectMeta, PostParams, TypeMeta},
    Api, Client, ResourceExt,
};
use serde_json::json;
use tracing::{debug, instrument};

pub struct ResourceClient {
    client: Client,
    mapper: RestMapper,
}

impl ResourceClient {
    pub fn new(client: Client) -> Self {
        Self {
            mapper: RestMapper::new(client.clone()),
            client,
        }
    }

    fn namespaced(&self, namespace: &str, ar: &ApiResource) -> Api<DynamicObject> {
        Api::namespaced_with(self.client.clone(), namespace, ar)
    }

    fn cluster_scoped(&self, ar: &ApiResource) -> Api<DynamicObject> {
        Api::all_with(self.client.clone(), ar)
    }

    /// Fetch an object, trying the namespaced endpoint before the cluster-scoped one
    #[instrument(skip(self, gvk), fields(kind = %gvk.kind))]
    pub async fn get(
        &self,
        namespace: &str,
        name: &str,
        gvk: &GroupVersionKind,
    ) -> Result<DynamicObject> {
        let ar = self.mapper.resolve(gvk).await?;

        match self.namespaced(namespace, &ar).get(name).await {
            Ok(obj) => Ok(obj),
            Err(e) => {
                debug!("Namespaced get failed ({}), trying cluster scope", e);
                self.cluster_scoped(&ar)
                    .get(name)
                    .await
                    .map_err(|source| ExporterError::Resource { verb: "get", source })
            }
        }
    }

    /// Create an object, or update it in place when it already exists.
    ///
    /// Costs one extra read per call for the existence probe.
    #[instrument(skip(self, resource), fields(name = %resource.name_any()))]
    pub async fn create(&self, namespace: &str, resource: &DynamicObject) -> Result<DynamicObject> {
        let gvk = gvk_from_type_meta(resource.types.as_ref())?;

        if self
            .get(namespace, &resource.name_any(), &gvk)
            .await
            .is_ok()
        {
            debug!("Resource already exists, updating");
            return self.update(namespace, resource).await;
        }

        let ar = self.mapper.resolve(&gvk).await?;
        let pp = PostParams::default();
        match self.namespaced(namespace, &ar).create(&pp, resource).await {
            Ok(obj) => Ok(obj),
            Err(e) => {
                debug!("Namespaced create failed ({}), trying cluster scope", e);
                self.cluster_scoped(&ar)
                    .create(&pp, resource)
                    .await
                    .map_err(|source| ExporterError::Resource {
                        verb: "create",
                        source,
                    })
            }
        }
    }

    /// Replace an object entirely
    #[instrument(skip(self, resource), fields(name = %resource.name_any()))]
    pub async fn update(&self, namespace: &str, resource: &DynamicObject) -> Result<DynamicObject> {
        let gvk = gvk_from_type_meta(resource.types.as_ref())?;
        let ar = self.mapper.resolve(&gvk).await?;
        let name = resource.name_any();
        let pp = PostParams::default();

        match self.namespaced(namespace, &ar).replace(&name, &pp, resource).await {
            Ok(obj) => Ok(obj),
            Err(e) => {
                debug!("Namespaced update failed ({}), trying cluster scope", e);
                self.cluster_scoped(&ar)
                    .replace(&name, &pp, resource)
                    .await
                    .map_err(|source| ExporterError::Resource {
                        verb: "update",
                        source,
                    })
            }
        }
    }

    /// Create or update a typed Secret through the dynamic client
    pub async fn create_secret(&self, namespace: &str, secret: &Secret) -> Result<DynamicObject> {
        self.create(namespace, &secret_to_dynamic(namespace, secret))
            .await
    }
}

fn secret_to_dynamic(namespace: &str, secret: &Secret) -> DynamicObject {
    let mut data = json!({ "stringData": secret.string_data.clone().unwrap_or_default() });
    if let Some(type_) = &secret.type_ {
        data["type"] = json!(type_);
    }

    DynamicObject {
        types: Some(TypeMeta {
            api_version: "v1".to_string(),
            kind: "Secret".to_string(),
        }),
        metadata: ObjectMeta {
            name: secret.metadata.name.clone(),
            namespace: Some(namespace.to_string()),
            labels: secret.metadata.labels.clone(),
            annotations: secret.metadata.annotations.clone(),
            ..Default::default()
        },
        data,
    }
}
