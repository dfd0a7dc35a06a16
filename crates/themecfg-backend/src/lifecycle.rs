//! Lifecycle seam between the settings framework and value backends.
//!
//! The framework drives a value through two hook points: `before_save` runs
//! immediately before the value is written to persistent storage, and
//! `after_load` runs immediately after it is read back, before the value is
//! handed to the UI layer. Backends supply behavior through this trait
//! instead of inheriting from a framework base class.

use crate::BackendResult;
use async_trait::async_trait;

#[async_trait]
pub trait ValueBackend {
    /// Hook invoked immediately before the value is persisted. May mutate
    /// the value in place.
    async fn before_save(&mut self) -> BackendResult<()>;

    /// Hook invoked immediately after the value is loaded from storage.
    /// May mutate the value in place.
    async fn after_load(&mut self) -> BackendResult<()>;
}
