// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use super::object::RuntimeObject;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ListMeta;
use kube::core::{ObjectList, TypeMeta};
use kube::{CustomResource, Resource};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::any::Any;

#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
#[kube(group = "crew.example.com", version = "v1", kind = "FirstMate")]
#[kube(namespaced)]
#[kube(status = "FirstMateStatus")]
#[kube(derive = "PartialEq")]
#[serde(rename_all = "camelCase")]
pub struct FirstMateSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FirstMateStatus {}

/// An ordered collection of FirstMates.
///
/// Serializes with `apiVersion` and `kind`; both are ignored when deserializing.
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct FirstMateList {
    #[serde(default)]
    pub metadata: ListMeta,
    #[serde(default)]
    pub items: Vec<FirstMate>,
}

impl Serialize for FirstMateList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let types = self.type_meta();
        let mut state = serializer.serialize_struct("FirstMateList", 4)?;
        state.serialize_field("apiVersion", &types.api_version)?;
        state.serialize_field("kind", &types.kind)?;
        state.serialize_field("metadata", &self.metadata)?;
        state.serialize_field("items", &self.items)?;
        state.end()
    }
}

impl From<ObjectList<FirstMate>> for FirstMateList {
    fn from(list: ObjectList<FirstMate>) -> Self {
        Self {
            metadata: list.metadata,
            items: list.items,
        }
    }
}

impl RuntimeObject for FirstMate {
    fn type_meta(&self) -> TypeMeta {
        TypeMeta {
            api_version: FirstMate::api_version(&()).into_owned(),
            kind: FirstMate::kind(&()).into_owned(),
        }
    }

    fn deep_copy_object(&self) -> Box<dyn RuntimeObject> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl RuntimeObject for FirstMateList {
    fn type_meta(&self) -> TypeMeta {
        TypeMeta {
            api_version: FirstMate::api_version(&()).into_owned(),
            kind: format!("{}List", FirstMate::kind(&())),
        }
    }

    fn deep_copy_object(&self) -> Box<dyn RuntimeObject> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
