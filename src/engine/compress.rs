//! Single-shot page compression bound to one pre-sized workspace.
//!
//! The engine pairs a long-lived zstd compression context with a workspace
//! sized once, at init, to the worst-case compressed length of one page
//! (`compress_bound`). Because the destination always covers the bound, a
//! "destination too small" fault from the algorithm can only mean the caller
//! broke the fixed-page contract upstream; the engine surfaces it verbatim
//! and never retries.
//!
//! Output for incompressible input may be larger than the page itself. The
//! engine deliberately does not flag that case — the layer above compares
//! the returned length against the page size and stores the page raw when
//! compression did not pay off.

use log::trace;
use zstd::zstd_safe::{self, CCtx, CompressionLevel};

use crate::config::ZcompConfig;
use crate::error::ZcompError;
use crate::workspace::Workspace;

/// Stateful compressor for exactly one backend instance.
///
/// Compressing the same bytes at the same level always produces identical
/// output: the context carries no randomized seeding and no cross-call
/// streaming state survives a transform.
pub struct CompressEngine {
    cctx: CCtx<'static>,
    workspace: Workspace,
    level: CompressionLevel,
}

impl CompressEngine {
    /// Worst-case workspace requirement for the given configuration,
    /// computed with the algorithm's own sizing function.
    pub fn required_workspace(config: &ZcompConfig) -> usize {
        zstd_safe::compress_bound(config.page_size)
    }

    /// Binds a workspace to a fresh compression context.
    ///
    /// The workspace must cover `required_workspace(config)`; anything less
    /// is a sizing bug reported as `InsufficientWorkspace`. A refused
    /// context construction surfaces as `EngineRejected`.
    pub fn init(workspace: Workspace, config: &ZcompConfig) -> Result<Self, ZcompError> {
        let required = Self::required_workspace(config);
        if workspace.len() < required {
            return Err(ZcompError::InsufficientWorkspace {
                required,
                provided: workspace.len(),
            });
        }
        let cctx = CCtx::try_create().ok_or_else(|| {
            ZcompError::EngineRejected("zstd compression context allocation refused".to_string())
        })?;
        Ok(Self {
            cctx,
            workspace,
            level: config.level,
        })
    }

    /// Compresses one page in a single shot into the engine's workspace and
    /// returns the written prefix.
    ///
    /// The returned slice borrows the workspace and is valid until the next
    /// transform on this engine; no reference to `page` is retained after
    /// return. Teardown is `Drop`: the context and the workspace binding go
    /// away together.
    pub fn compress(&mut self, page: &[u8]) -> Result<&[u8], ZcompError> {
        let written = self
            .cctx
            .compress(self.workspace.as_mut_slice(), page, self.level)
            .map_err(|code| {
                ZcompError::CompressFailed(zstd_safe::get_error_name(code).to_string())
            })?;
        trace!("zcomp: compress in_len = {}, out_len = {}", page.len(), written);
        Ok(&self.workspace.as_slice()[..written])
    }
}
