// In: src/error.rs

//! This module defines the single, unified error type for the entire zcomp library.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZcompError {
    // =========================================================================
    // === Allocation & Initialization Errors (fatal to `create`)
    // =========================================================================
    /// The workspace allocator could not obtain the requested region. The
    /// allocation policy is best-effort with no retry, so this is surfaced
    /// immediately as a backend-creation failure.
    #[error("workspace allocation of {0} bytes failed: out of memory")]
    OutOfMemory(usize),

    /// The provided workspace is smaller than the engine's computed
    /// worst-case requirement. This is a sizing/configuration bug, not a
    /// runtime condition to recover from by growing memory.
    #[error("workspace too small: engine requires {required} bytes, got {provided}")]
    InsufficientWorkspace { required: usize, provided: usize },

    /// The underlying algorithm's initializer rejected the parameter set.
    #[error("engine rejected configuration: {0}")]
    EngineRejected(String),

    // =========================================================================
    // === Transform Errors (surfaced verbatim, never retried here)
    // =========================================================================
    /// The compression engine reported an internal fault. The payload is the
    /// algorithm's own diagnostic name for the error code.
    #[error("zstd compression failed: {0}")]
    CompressFailed(String),

    /// The decompression engine rejected the input (malformed, truncated, or
    /// corrupt frame). The caller must treat the corresponding page as
    /// unreadable; there is no redundancy at this layer.
    #[error("zstd decompression failed: {0}")]
    DecompressFailed(String),

    /// A frame parsed cleanly but did not decode to exactly one page.
    #[error("decompressed length mismatch: expected {expected} bytes, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    // =========================================================================
    // === Caller Contract Violations (fail fast, never undefined)
    // =========================================================================
    #[error("contract violation: {0}")]
    ContractViolation(String),
}
