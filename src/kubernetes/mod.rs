// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for client creation, CRD manifest loading and installation.

pub mod client;
pub mod crd;
pub mod manifests;

pub use client::{config_from_kubeconfig, create_client};
pub use crd::{create_crds, install_crds, is_crd_established, wait_for_crds_established};
pub use manifests::read_crds_from_dir;
