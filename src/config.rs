// In: src/config.rs

//! The single source of truth for all zcomp backend configuration.
//!
//! This module defines the unified `ZcompConfig` struct, which is designed to
//! be created once at the application boundary (the block-device layer) and
//! then passed down through the system via a shared, read-only
//! `Arc<ZcompConfig>`. Both engine workspaces are sized exactly once from
//! this configuration; nothing is recomputed or resized per call.

use serde::{Deserialize, Serialize};

use crate::error::ZcompError;
use zstd::zstd_safe;

/// The unified configuration for one family of backend instances.
///
/// The defaults reproduce the fixed parameters of the classic compressed
/// RAM-disk setup: 4 KiB pages at zstd level 3, with the algorithm's default
/// window and search parameters (no per-call tuning).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct ZcompConfig {
    /// The fixed page size in bytes. Every `compress` input and every
    /// successful `decompress` output is exactly this long.
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// The zstd compression level applied to every page.
    #[serde(default = "default_level")]
    pub level: i32,
}

impl Default for ZcompConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            level: default_level(),
        }
    }
}

/// Helper for `serde` to provide the default page size.
fn default_page_size() -> usize {
    4096
}

/// Helper for `serde` to provide the default compression level.
fn default_level() -> i32 {
    3
}

impl ZcompConfig {
    /// Rejects parameter sets the engines cannot honor. Called by
    /// `ZcompBackend::create` before any workspace is acquired.
    pub fn validate(&self) -> Result<(), ZcompError> {
        if self.page_size == 0 || !self.page_size.is_power_of_two() {
            return Err(ZcompError::EngineRejected(format!(
                "page_size must be a non-zero power of two, got {}",
                self.page_size
            )));
        }
        let max_level = zstd_safe::max_c_level();
        if self.level < 1 || self.level > max_level {
            return Err(ZcompError::EngineRejected(format!(
                "compression level must be in 1..={}, got {}",
                max_level, self.level
            )));
        }
        Ok(())
    }

    /// Worst-case compressed length for one page. Incompressible input may
    /// expand up to this bound; the caller sizes raw-copy destinations with
    /// it when deciding to store a page uncompressed.
    pub fn max_compressed_len(&self) -> usize {
        zstd_safe::compress_bound(self.page_size)
    }
}

//==================================================================================
// Unit Tests
//==================================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_fixed_backend_parameters() {
        let config = ZcompConfig::default();
        assert_eq!(config.page_size, 4096);
        assert_eq!(config.level, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_json_yields_defaults() {
        let config: ZcompConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ZcompConfig::default());
    }

    #[test]
    fn test_validate_rejects_bad_page_sizes() {
        for page_size in [0usize, 3000, 4097] {
            let config = ZcompConfig {
                page_size,
                ..ZcompConfig::default()
            };
            assert!(
                matches!(config.validate(), Err(ZcompError::EngineRejected(_))),
                "page_size {} should be rejected",
                page_size
            );
        }
    }

    #[test]
    fn test_validate_rejects_out_of_range_levels() {
        for level in [0, -5, 9999] {
            let config = ZcompConfig {
                level,
                ..ZcompConfig::default()
            };
            assert!(config.validate().is_err(), "level {} should be rejected", level);
        }
    }

    #[test]
    fn test_compressed_bound_covers_the_page() {
        let config = ZcompConfig::default();
        assert!(config.max_compressed_len() >= config.page_size);
    }
}
