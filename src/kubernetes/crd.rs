// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Installing CRDs and waiting for them to be served

use crate::constants::crd::{POLL_INTERVAL_MS, POLL_MAX_INTERVAL_MS};
use crate::constants::manifests::DEFAULT_DIR;
use crate::error::{Error, Result};
use crate::kubernetes::client::create_client;
use crate::kubernetes::manifests::read_crds_from_dir;
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinition;
use kube::runtime::wait::{conditions, Condition};
use kube::{api::PostParams, Api, Client, Config as KConfig, ResourceExt};
use std::path::Path;
use std::time::Duration;
use tokio::time::{sleep, timeout_at, Instant};
use tracing::{debug, info, instrument, warn};

/// Install every CRD manifest found in `path` into the cluster described by `config`.
///
/// An empty `path` means the current directory. Manifests are read before the
/// client is built, and CRDs are created one at a time. The first failure is
/// returned as-is; CRDs created before it are left in place.
///
/// Returns the number of CRDs submitted. They are not necessarily established yet,
/// see [`wait_for_crds_established`].
pub async fn install_crds(config: KConfig, path: impl AsRef<Path>) -> Result<usize> {
    install_crds_with(path.as_ref(), || create_client(config)).await
}

/// Read manifests from `path`, then connect and create them. `connect` is only
/// called after every manifest has been read and parsed.
pub(crate) async fn install_crds_with(
    path: &Path,
    connect: impl FnOnce() -> Result<Client>,
) -> Result<usize> {
    let dir = manifest_dir(path);
    info!("Installing CRDs from {}", dir.display());

    let crds = read_crds_from_dir(dir)?;
    let client = connect()?;

    create_crds(&client, &crds).await
}

fn manifest_dir(path: &Path) -> &Path {
    if path.as_os_str().is_empty() {
        Path::new(DEFAULT_DIR)
    } else {
        path
    }
}

/// Create the given CRDs in order, stopping at the first error
#[instrument(skip_all, fields(count = crds.len()))]
pub async fn create_crds(client: &Client, crds: &[CustomResourceDefinition]) -> Result<usize> {
    let api: Api<CustomResourceDefinition> = Api::all(client.clone());

    for crd in crds {
        debug!("Creating CRD {}", crd.name_any());
        api.create(&PostParams::default(), crd).await?;
        info!("CRD {} created", crd.name_any());
    }

    Ok(crds.len())
}

/// Check if a CRD reports the `Established` condition
pub fn is_crd_established(crd: &CustomResourceDefinition) -> bool {
    conditions::is_crd_established().matches_object(Some(crd))
}

/// Wait until every given CRD is established, or fail once `timeout` has passed.
#[instrument(skip_all, fields(count = crds.len()))]
pub async fn wait_for_crds_established(
    client: &Client,
    crds: &[CustomResourceDefinition],
    timeout: Duration,
) -> Result<()> {
    let api: Api<CustomResourceDefinition> = Api::all(client.clone());
    let deadline = Instant::now() + timeout;

    for crd in crds {
        let name = crd.name_any();
        let mut last_error = None;
        let established =
            timeout_at(deadline, wait_for_crd_established(&api, &name, &mut last_error)).await;
        if established.is_err() {
            return Err(Error::CrdNotEstablished { name, last_error });
        }
    }

    Ok(())
}

/// Poll a single CRD with exponential backoff until it is established.
/// The error of the most recent failed poll is left in `last_error`.
async fn wait_for_crd_established(
    api: &Api<CustomResourceDefinition>,
    name: &str,
    last_error: &mut Option<kube::Error>,
) {
    let mut interval = POLL_INTERVAL_MS;

    loop {
        match api.get_opt(name).await {
            Ok(Some(crd)) if is_crd_established(&crd) => {
                info!("CRD {} is established", name);
                return;
            }
            Ok(_) => {
                debug!("CRD {} not yet established, waiting {} ms...", name, interval);
                *last_error = None;
            }
            Err(e) => {
                warn!(
                    "Error checking CRD {}: {}, retrying in {} ms...",
                    name, e, interval
                );
                *last_error = Some(e);
            }
        }

        sleep(Duration::from_millis(interval)).await;

        interval = (interval * 2).min(POLL_MAX_INTERVAL_MS);
    }
}
