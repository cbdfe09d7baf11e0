//! Catalog matching service for manually entered products
//!
//! Wraps the pure similarity scorer and candidate ranker with configured
//! thresholds. Operators confirm suggestions by hand; nothing here is
//! authoritative.

use std::sync::Arc;

use shared::models::{rank_candidates, score_match, CatalogItem, ManualEntry, MatchCandidate};
use uuid::Uuid;

use crate::config::MatchingConfig;
use crate::error::{AppError, AppResult};
use crate::store::MemStore;

/// Matching service backed by the in-memory catalog
#[derive(Clone)]
pub struct MatchingService {
    store: Arc<MemStore>,
    config: MatchingConfig,
}

impl MatchingService {
    pub fn new(store: Arc<MemStore>, config: MatchingConfig) -> Self {
        Self { store, config }
    }

    /// Similarity score for one (manual entry, catalog item) pair
    pub fn score(&self, manual: &ManualEntry, candidate: &CatalogItem) -> i32 {
        score_match(manual, candidate, self.config.price_tolerance())
    }

    /// Rank catalog candidates for a manual entry
    ///
    /// Candidates are filtered by the search text, scored, and returned
    /// best-first, capped at the configured result limit. The catalog is
    /// walked in name order so equal scores come back deterministically.
    pub fn search_candidates(
        &self,
        manual_entry_id: Uuid,
        search_text: &str,
    ) -> AppResult<Vec<MatchCandidate>> {
        let manual = self
            .store
            .manual_entries
            .get(&manual_entry_id)
            .ok_or_else(|| AppError::NotFound("Manual entry".to_string()))?;

        let mut catalog = self.store.catalog_items.all();
        catalog.sort_by(|a, b| a.name.cmp(&b.name));

        let mut ranked = rank_candidates(
            &manual,
            &catalog,
            search_text,
            self.config.price_tolerance(),
            self.config.high_match_threshold,
            self.config.possible_match_threshold,
        );
        ranked.truncate(self.config.max_results);

        tracing::debug!(
            manual_entry = %manual_entry_id,
            search = search_text,
            candidates = ranked.len(),
            top_score = ranked.first().map(|c| c.score).unwrap_or(0),
            "ranked catalog candidates"
        );

        Ok(ranked)
    }
}
