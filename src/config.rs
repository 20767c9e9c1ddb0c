// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{crd::ESTABLISH_TIMEOUT_SECS, manifests::DEFAULT_DIR};
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Installer configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the CRD manifests
    pub crd_dir: PathBuf,
    pub wait_for_established: bool,
    pub establish_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let crd_dir = lookup("CRD_DIR")
            .filter(|dir| !dir.is_empty())
            .unwrap_or_else(|| DEFAULT_DIR.to_string());
        let wait_for_established: bool = lookup("WAIT_FOR_ESTABLISHED")
            .unwrap_or("false".to_string())
            .parse()
            .unwrap_or(false);
        let establish_timeout = match lookup("ESTABLISH_TIMEOUT_SECS") {
            Some(secs) => secs
                .parse()
                .context("ESTABLISH_TIMEOUT_SECS must be a whole number of seconds")?,
            None => ESTABLISH_TIMEOUT_SECS,
        };

        Ok(Config {
            crd_dir: PathBuf::from(crd_dir),
            wait_for_established,
            establish_timeout: Duration::from_secs(establish_timeout),
        })
    }
}
