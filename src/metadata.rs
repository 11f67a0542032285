use serde::Serialize;

mod build_info {
    #![allow(dead_code)]
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

/// Firmware build information.
#[derive(Copy, Clone, Debug, Serialize)]
pub struct ApplicationMetadata {
    pub firmware_version: &'static str,
    pub rust_version: &'static str,
    pub profile: &'static str,
    pub target: &'static str,
    pub features: &'static str,
}

impl ApplicationMetadata {
    pub fn new() -> Self {
        Self {
            firmware_version: build_info::PKG_VERSION,
            rust_version: build_info::RUSTC_VERSION,
            profile: build_info::PROFILE,
            target: build_info::TARGET,
            features: build_info::FEATURES_STR,
        }
    }
}

impl Default for ApplicationMetadata {
    fn default() -> Self {
        Self::new()
    }
}
