// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read CRD directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read CRD file {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse CRD file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to create Kubernetes client: {0}")]
    Client(#[source] kube::Error),

    #[error("Kubernetes API error: {0}")]
    Kube(#[from] kube::Error),

    #[error("Failed to parse kubeconfig: {0}")]
    Kubeconfig(String),

    #[error(
        "CRD not established: {name}{}",
        .last_error.as_ref().map(|e| format!(" (last error: {})", e)).unwrap_or_default()
    )]
    CrdNotEstablished {
        name: String,
        #[source]
        last_error: Option<kube::Error>,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
