// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// CRD manifest discovery
pub mod manifests {
    /// File name suffixes that are parsed as manifests. Matched case-sensitively,
    /// so a file named just `.yaml` counts too.
    pub const EXTENSIONS: [&str; 2] = [".yaml", ".json"];
    /// Directory scanned when no path is given
    pub const DEFAULT_DIR: &str = ".";
}

/// CRD establishment polling configuration
pub mod crd {
    /// Initial polling interval in milliseconds when waiting for a CRD
    pub const POLL_INTERVAL_MS: u64 = 100;
    /// Maximum polling interval in milliseconds (exponential backoff cap)
    pub const POLL_MAX_INTERVAL_MS: u64 = 2_000;
    /// Default time to wait for all installed CRDs to become established
    pub const ESTABLISH_TIMEOUT_SECS: u64 = 60;
}
