// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use kube::CustomResourceExt;

use firstmate::types::FirstMate;

fn main() -> Result<()> {
    print!("{}", serde_yaml::to_string(&FirstMate::crd())?);
    Ok(())
}
