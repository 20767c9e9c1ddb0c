// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use tracing::info;

use firstmate::config::Config;
use firstmate::kubernetes::{
    create_client, install_crds, read_crds_from_dir, wait_for_crds_established,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    info!(
        "Configuration loaded: crd_dir={}, wait_for_established={}",
        config.crd_dir.display(),
        config.wait_for_established
    );

    let kube_config = kube::Config::infer()
        .await
        .context("Failed to infer Kubernetes configuration")?;

    let installed = install_crds(kube_config.clone(), &config.crd_dir).await?;
    info!("Installed {} CRD(s) from {}", installed, config.crd_dir.display());

    if config.wait_for_established {
        info!("Waiting for CRDs to become established...");
        let crds = read_crds_from_dir(&config.crd_dir)?;
        let client = create_client(kube_config)?;
        wait_for_crds_established(&client, &crds, config.establish_timeout).await?;
        info!("All CRDs are established");
    }

    Ok(())
}
