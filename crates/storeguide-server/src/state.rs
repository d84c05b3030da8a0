//! Shared application state for the HTTP server.
//!
//! The store graph and catalog are immutable after construction, so they
//! are shared behind plain `Arc`s. Per-conversation sessions live in a
//! `DashMap` keyed by UUID; handlers take a session entry out of the map
//! for the duration of a turn instead of holding a map guard across
//! awaits.

use std::sync::Arc;

use dashmap::DashMap;
use uuid::Uuid;

use storeguide_core::{layout, StoreGraph, ZoneCatalog};

use crate::llm::LlmConfig;
use crate::sessions::SessionEntry;

#[derive(Clone)]
pub struct AppState {
    pub graph: Arc<StoreGraph>,
    pub catalog: Arc<ZoneCatalog>,
    /// Provider settings; `None` runs the offline extractor and
    /// deterministic sequencing only.
    pub llm: Option<Arc<LlmConfig>>,
    pub sessions: Arc<DashMap<Uuid, SessionEntry>>,
}

impl AppState {
    pub fn new(llm: Option<LlmConfig>) -> AppState {
        AppState {
            graph: Arc::new(layout::standard()),
            catalog: Arc::new(layout::standard_catalog()),
            llm: llm.map(Arc::new),
            sessions: Arc::new(DashMap::new()),
        }
    }
}
