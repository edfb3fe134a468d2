//! Process-wide engine for the default configuration.
//!
//! Building the static schema walks the whole API registry, so hosts that
//! only need the shell defaults share one engine instead of building their
//! own.

use std::sync::LazyLock;

use super::config::EngineConfig;
use crate::ide::CompletionEngine;

/// Built on first access.
static SHARED_ENGINE: LazyLock<CompletionEngine> =
    LazyLock::new(|| CompletionEngine::new(&EngineConfig::default()));

impl CompletionEngine {
    /// The engine for [`EngineConfig::default`].
    ///
    /// Read-only; session state lives in the caller's dynamic schema table.
    pub fn shared() -> &'static CompletionEngine {
        &SHARED_ENGINE
    }
}
