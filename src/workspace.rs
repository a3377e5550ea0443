// In: src/workspace.rs

//! Bounded scratch memory for the compression and decompression engines.
//!
//! A `Workspace` is an opaque, contiguous, pre-sized region acquired exactly
//! once per engine and bound to it for the engine's whole lifetime. It is
//! sized from static configuration (fixed page size, fixed level) and never
//! grows: a call that would need more space than provisioned is a
//! configuration bug, not a condition to recover from.
//!
//! The allocation policy is best-effort with no retry. The caller may be
//! sitting inside a low-memory reclaim path, so `acquire` must fail fast
//! rather than stall or recurse into the I/O stack; `try_reserve_exact`
//! gives exactly that behavior without aborting the process.
//!
//! Release is `Drop`: ownership makes releasing a workspace twice (or using
//! one after release) unrepresentable. A process-wide byte counter tracks
//! live workspace memory so lifecycle tests can prove the backend leaks
//! nothing across create/destroy cycles.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::ZcompError;

static BYTES_IN_USE: AtomicUsize = AtomicUsize::new(0);

/// Total bytes currently held by live workspaces across the process.
pub fn bytes_in_use() -> usize {
    BYTES_IN_USE.load(Ordering::SeqCst)
}

/// An owned, zeroed, fixed-capacity scratch buffer. No public API resizes it.
#[derive(Debug)]
pub struct Workspace {
    buf: Vec<u8>,
}

impl Workspace {
    /// Acquires a zeroed region of exactly `byte_size` bytes, or fails fast
    /// with `OutOfMemory`. Side effects: memory accounting only.
    pub fn acquire(byte_size: usize) -> Result<Self, ZcompError> {
        let mut buf = Vec::new();
        if buf.try_reserve_exact(byte_size).is_err() {
            return Err(ZcompError::OutOfMemory(byte_size));
        }
        buf.resize(byte_size, 0);
        BYTES_IN_USE.fetch_add(byte_size, Ordering::SeqCst);
        Ok(Self { buf })
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.buf
    }
}

impl Drop for Workspace {
    fn drop(&mut self) {
        BYTES_IN_USE.fetch_sub(self.buf.len(), Ordering::SeqCst);
    }
}

//==================================================================================
// Unit Tests
//==================================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acquire_returns_zeroed_memory_of_exact_size() {
        let ws = Workspace::acquire(1024).unwrap();
        assert_eq!(ws.len(), 1024);
        assert!(ws.as_slice().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_live_workspace_is_accounted() {
        // Other tests acquire workspaces concurrently, so only monotonic
        // claims are safe here; exact balance is proven by the isolated
        // lifecycle integration test.
        let ws = Workspace::acquire(2048).unwrap();
        assert!(bytes_in_use() >= ws.len());
    }

    #[test]
    fn test_absurd_acquire_fails_fast_without_abort() {
        let result = Workspace::acquire(usize::MAX / 2);
        assert!(matches!(result, Err(ZcompError::OutOfMemory(_))));
    }

    #[test]
    fn test_zero_byte_workspace_is_permitted() {
        let ws = Workspace::acquire(0).unwrap();
        assert!(ws.is_empty());
    }
}
