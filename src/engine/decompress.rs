//! Single-shot page decompression bound to one pre-sized workspace.
//!
//! Sizing here is independent of the compression level: the destination only
//! ever needs to hold one plaintext page, so the workspace is exactly
//! `page_size` bytes. A corrupt or truncated frame fails deterministically
//! with the algorithm's diagnostic name; a frame whose decoded size would
//! exceed the page is refused by the bounded destination rather than
//! overflowing it. The engine never writes past the page boundary and never
//! attempts self-repair.

use log::trace;
use zstd::zstd_safe::{self, DCtx};

use crate::config::ZcompConfig;
use crate::error::ZcompError;
use crate::workspace::Workspace;

/// Stateful decompressor for exactly one backend instance.
pub struct DecompressEngine {
    dctx: DCtx<'static>,
    workspace: Workspace,
    page_size: usize,
}

impl DecompressEngine {
    /// Workspace requirement: one plaintext page, regardless of level.
    pub fn required_workspace(config: &ZcompConfig) -> usize {
        config.page_size
    }

    /// Binds a workspace to a fresh decompression context. Mirrors
    /// `CompressEngine::init`, including the failure taxonomy.
    pub fn init(workspace: Workspace, config: &ZcompConfig) -> Result<Self, ZcompError> {
        let required = Self::required_workspace(config);
        if workspace.len() < required {
            return Err(ZcompError::InsufficientWorkspace {
                required,
                provided: workspace.len(),
            });
        }
        let dctx = DCtx::try_create().ok_or_else(|| {
            ZcompError::EngineRejected("zstd decompression context allocation refused".to_string())
        })?;
        Ok(Self {
            dctx,
            workspace,
            page_size: config.page_size,
        })
    }

    /// Inverts one compressed blob in a single shot and returns the page.
    ///
    /// On success the returned slice is exactly one page long and borrows
    /// the workspace until the next transform on this engine. A clean parse
    /// that decodes to any other length is reported as `LengthMismatch`
    /// rather than handed to the caller as a short page.
    pub fn decompress(&mut self, blob: &[u8]) -> Result<&[u8], ZcompError> {
        let page_size = self.page_size;
        let written = self
            .dctx
            .decompress(&mut self.workspace.as_mut_slice()[..page_size], blob)
            .map_err(|code| {
                ZcompError::DecompressFailed(zstd_safe::get_error_name(code).to_string())
            })?;
        trace!("zcomp: decompress in_len = {}, out_len = {}", blob.len(), written);
        if written != page_size {
            return Err(ZcompError::LengthMismatch {
                expected: page_size,
                actual: written,
            });
        }
        Ok(&self.workspace.as_slice()[..page_size])
    }
}
