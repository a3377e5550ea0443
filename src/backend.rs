// In: src/backend.rs

//! The backend facade consumed by the block-device layer.
//!
//! A `ZcompBackend` is the lifecycle-managed pairing of one compression and
//! one decompression engine, each bound to its own workspace. The device
//! layer creates one instance per concurrent compression stream, threads the
//! handle through every call, and destroys it when the stream slot is torn
//! down. There is no module-level singleton: every operation is routed
//! through an explicit instance, so independent instances run fully in
//! parallel with disjoint workspace memory.
//!
//! The transform methods take `&mut self`. That is the whole concurrency
//! contract: at most one in-flight `compress`/`decompress` per instance,
//! enforced at compile time instead of with a lock on the hot path. The
//! remaining lifecycle states are equally structural — an instance cannot be
//! used before `create` returns it, and `destroy` consumes it, so
//! use-after-destroy does not compile.

use std::sync::Arc;

use log::debug;

use crate::config::ZcompConfig;
use crate::engine::{CompressEngine, DecompressEngine};
use crate::error::ZcompError;
use crate::workspace::Workspace;

/// Static identifier of the wrapped algorithm.
pub const NAME: &str = "zstd";

/// One backend instance: two engines, two workspaces, no shared state.
pub struct ZcompBackend {
    comp: CompressEngine,
    decomp: DecompressEngine,
    config: Arc<ZcompConfig>,
}

impl ZcompBackend {
    /// Builds both engines, compression first.
    ///
    /// Construction is all-or-nothing: if decompression init fails after the
    /// compression engine came up, dropping the half-built compression
    /// engine releases its workspace before the error returns. There is no
    /// half-created state to observe.
    pub fn create(config: Arc<ZcompConfig>) -> Result<Self, ZcompError> {
        config.validate()?;

        let cws = Workspace::acquire(CompressEngine::required_workspace(&config))?;
        let comp = CompressEngine::init(cws, &config)?;

        let dws = Workspace::acquire(DecompressEngine::required_workspace(&config))?;
        let decomp = DecompressEngine::init(dws, &config)?;

        debug!(
            "zcomp backend created: algorithm = {}, page_size = {}, level = {}",
            NAME, config.page_size, config.level
        );
        Ok(Self {
            comp,
            decomp,
            config,
        })
    }

    /// Compresses exactly one page.
    ///
    /// `page` must be exactly `page_size()` bytes; anything else fails fast
    /// as a `ContractViolation`. The returned blob borrows this instance and
    /// stays valid until the next `compress` call on it. For incompressible
    /// input the blob may be longer than the page — deciding to store the
    /// page raw in that case is the caller's length check, not a
    /// distinguished status from this backend.
    pub fn compress(&mut self, page: &[u8]) -> Result<&[u8], ZcompError> {
        if page.len() != self.config.page_size {
            return Err(ZcompError::ContractViolation(format!(
                "compress input must be one {}-byte page, got {} bytes",
                self.config.page_size,
                page.len()
            )));
        }
        self.comp.compress(page)
    }

    /// Decompresses one blob back into exactly one page.
    ///
    /// The returned page borrows this instance until the next `decompress`
    /// call. Corrupt input is an expected, recoverable error, never a panic;
    /// the caller surfaces it as an I/O error for that page.
    pub fn decompress(&mut self, blob: &[u8]) -> Result<&[u8], ZcompError> {
        self.decomp.decompress(blob)
    }

    /// Static algorithm identifier, e.g. `"zstd"`.
    pub fn name(&self) -> &'static str {
        NAME
    }

    /// The fixed page size this instance was created with.
    pub fn page_size(&self) -> usize {
        self.config.page_size
    }

    /// Worst-case compressed length for one page.
    pub fn max_compressed_len(&self) -> usize {
        self.config.max_compressed_len()
    }

    /// Tears down both engines and releases both workspaces. Always
    /// succeeds; equivalent to dropping the instance.
    pub fn destroy(self) {
        debug!("zcomp backend destroyed: algorithm = {}", NAME);
    }
}
