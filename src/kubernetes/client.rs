// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Client creation and kubeconfig utilities

use crate::error::{Error, Result};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config as KConfig};
use tracing::debug;

/// Create a Kubernetes client from a connection configuration
pub fn create_client(config: KConfig) -> Result<Client> {
    debug!("Creating client for {}", config.cluster_url);
    Client::try_from(config).map_err(Error::Client)
}

/// Build a connection configuration from a kubeconfig document, such as the one
/// handed out by a throwaway test cluster
pub async fn config_from_kubeconfig(kubeconfig: &str) -> Result<KConfig> {
    let kubeconfig_parsed: Kubeconfig = serde_yaml::from_str(kubeconfig)
        .map_err(|e| Error::Kubeconfig(format!("Failed to parse kubeconfig: {}", e)))?;

    KConfig::from_custom_kubeconfig(kubeconfig_parsed, &KubeConfigOptions::default())
        .await
        .map_err(|e| Error::Kubeconfig(format!("Failed to create config: {}", e)))
}
