// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Reading CRD manifests from disk

use crate::constants::manifests::EXTENSIONS;
use crate::error::{Error, Result};
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinition;
use serde::Deserialize;
use serde_yaml::Value;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Read every CRD manifest in `dir`, in file name order.
///
/// Only `.yaml` and `.json` files are parsed. Documents without both a
/// `spec.group` and a `spec.names.kind` are not CRDs and are skipped.
pub fn read_crds_from_dir(dir: &Path) -> Result<Vec<CustomResourceDefinition>> {
    let read_dir_error = |source| Error::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = fs::read_dir(dir)
        .map_err(read_dir_error)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<PathBuf>>>()
        .map_err(read_dir_error)?;
    files.sort();

    let mut crds = Vec::new();
    for file in files.into_iter().filter(|f| is_manifest_file(f)) {
        let content = fs::read(&file).map_err(|source| Error::ReadFile {
            path: file.clone(),
            source,
        })?;
        let parsed = parse_crds(&content).map_err(|source| Error::Parse {
            path: file.clone(),
            source,
        })?;
        debug!("Read {} CRD(s) from {}", parsed.len(), file.display());
        crds.extend(parsed);
    }

    Ok(crds)
}

/// Check if a path's file name ends in one of the manifest extensions
pub fn is_manifest_file(path: &Path) -> bool {
    path.file_name()
        .and_then(OsStr::to_str)
        .is_some_and(|name| EXTENSIONS.iter().any(|ext| name.ends_with(*ext)))
}

/// Parse all CRDs out of a (possibly multi-document) YAML or JSON manifest
pub fn parse_crds(content: &[u8]) -> serde_yaml::Result<Vec<CustomResourceDefinition>> {
    let mut crds = Vec::new();

    for document in serde_yaml::Deserializer::from_slice(content) {
        let value = Value::deserialize(document)?;
        if !is_crd_manifest(&value) {
            debug!("Skipping document without spec.group or spec.names.kind");
            continue;
        }
        crds.push(serde_yaml::from_value(value)?);
    }

    Ok(crds)
}

/// A manifest counts as a CRD when both `spec.group` and `spec.names.kind` are non-empty
fn is_crd_manifest(value: &Value) -> bool {
    let non_empty = |v: &Value| v.as_str().is_some_and(|s| !s.is_empty());
    let spec = &value["spec"];

    non_empty(&spec["group"]) && non_empty(&spec["names"]["kind"])
}
