//! Product similarity scoring and candidate ranking
//!
//! A cheap, explainable heuristic used to suggest catalog links for manually
//! entered products. Scores feed a human-in-the-loop confirmation screen and
//! are never authoritative.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{CatalogItem, ManualEntry};

/// Default relative price tolerance for the price similarity term (20%)
pub fn default_price_tolerance() -> Decimal {
    Decimal::new(20, 2)
}

/// Score awarded when one name contains the other
pub const NAME_MATCH_POINTS: i32 = 50;
/// Score awarded when prices are within tolerance
pub const PRICE_MATCH_POINTS: i32 = 30;
/// Score awarded when one description contains the other
pub const DESCRIPTION_MATCH_POINTS: i32 = 20;

/// A scored catalog candidate for a manual entry
///
/// Ephemeral: recomputed on every search, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct MatchCandidate {
    pub item: CatalogItem,
    pub score: i32,
    pub label: Option<MatchLabel>,
}

/// Presentation label for a match score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MatchLabel {
    High,
    Possible,
}

impl std::fmt::Display for MatchLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchLabel::High => write!(f, "High Match"),
            MatchLabel::Possible => write!(f, "Possible Match"),
        }
    }
}

/// Classify a score into a presentation label
///
/// Thresholds are exclusive lower bounds: a score of exactly `high` is still
/// only a possible match.
pub fn match_label(score: i32, high: i32, possible: i32) -> Option<MatchLabel> {
    if score > high {
        Some(MatchLabel::High)
    } else if score > possible {
        Some(MatchLabel::Possible)
    } else {
        None
    }
}

/// Compute the similarity score between a manual entry and a catalog item
///
/// Additive over three independent terms, bounded to 0..=100 by construction:
/// - name containment either direction (case-insensitive): +50
/// - price within `price_tolerance` of the manual price: +30
/// - description containment either direction, both present: +20
///
/// The price term is skipped when the manual price is zero so the relative
/// difference is always defined.
pub fn score_match(manual: &ManualEntry, candidate: &CatalogItem, price_tolerance: Decimal) -> i32 {
    score_fields(
        &manual.name,
        manual.price,
        manual.description.as_deref(),
        &candidate.name,
        candidate.price,
        candidate.description.as_deref(),
        price_tolerance,
    )
}

/// Field-level scoring used by [`score_match`] and the WASM bindings
#[allow(clippy::too_many_arguments)]
pub fn score_fields(
    manual_name: &str,
    manual_price: Decimal,
    manual_description: Option<&str>,
    candidate_name: &str,
    candidate_price: Decimal,
    candidate_description: Option<&str>,
    price_tolerance: Decimal,
) -> i32 {
    let mut score = 0;

    if contains_either(manual_name, candidate_name) {
        score += NAME_MATCH_POINTS;
    }

    if manual_price != Decimal::ZERO {
        let relative_diff = (candidate_price - manual_price).abs() / manual_price;
        if relative_diff <= price_tolerance {
            score += PRICE_MATCH_POINTS;
        }
    }

    if let (Some(manual_desc), Some(candidate_desc)) = (manual_description, candidate_description) {
        if contains_either(manual_desc, candidate_desc) {
            score += DESCRIPTION_MATCH_POINTS;
        }
    }

    score
}

/// Filter catalog candidates by search text, score them, and sort best-first
///
/// The filter is an OR-combined case-insensitive substring match over name,
/// description, sku, brand, and category; an empty search matches everything.
/// The sort is stable so equal scores keep their input order.
pub fn rank_candidates(
    manual: &ManualEntry,
    candidates: &[CatalogItem],
    search_text: &str,
    price_tolerance: Decimal,
    high_threshold: i32,
    possible_threshold: i32,
) -> Vec<MatchCandidate> {
    let needle = search_text.trim().to_lowercase();

    let mut ranked: Vec<MatchCandidate> = candidates
        .iter()
        .filter(|item| needle.is_empty() || candidate_matches_search(item, &needle))
        .map(|item| {
            let score = score_match(manual, item, price_tolerance);
            MatchCandidate {
                item: item.clone(),
                score,
                label: match_label(score, high_threshold, possible_threshold),
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}

fn candidate_matches_search(item: &CatalogItem, needle: &str) -> bool {
    let fields = [
        Some(item.name.as_str()),
        item.description.as_deref(),
        item.sku.as_deref(),
        item.brand.as_deref(),
        item.category.as_deref(),
    ];
    fields
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(needle))
}

fn contains_either(a: &str, b: &str) -> bool {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    a.contains(&b) || b.contains(&a)
}
