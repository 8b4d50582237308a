//! # Storage Traits
//!
//! The core talks to persistence through a synchronous key-value surface
//! shaped like browser `localStorage`. Implementations can back it with
//! memory, files, or anything else without the domain layer changing.

use anyhow::Result;
use std::sync::Arc;

/// Synchronous key-value persistence surface.
///
/// `get` returns `None` for a missing key. Both operations may fail when
/// the underlying surface is unavailable; callers in the core treat such
/// failures as recoverable (an in-memory-only session) rather than fatal.
pub trait KvStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, overwriting any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

impl<S: KvStore + ?Sized> KvStore for Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}
