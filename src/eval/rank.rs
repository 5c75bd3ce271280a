//! Batch ranking of analyzed slices.
//!
//! Analyzes each slice independently, tags it with its 1-based input
//! position, and orders the batch best-to-worst with a stable four-key
//! comparator.

use rayon::prelude::*;
use serde::Serialize;

use crate::eval::slice::{analyze_slice, SliceAnalysis};
use crate::galaxy::catalog::TileCatalog;
use crate::galaxy::slice::{Slice, SliceError};

/// One analyzed slice tagged with its 1-based batch position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexedAnalysis {
    pub slice_index: usize,
    #[serde(flatten)]
    pub analysis: SliceAnalysis,
}

/// One entry of the best-to-worst ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankEntry {
    pub slice_index: usize,
    pub optimal_value: u32,
    pub summary: String,
}

/// Full response for a batch analysis request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DraftAnalysis {
    pub slices: Vec<IndexedAnalysis>,
    pub ranking: Vec<RankEntry>,
}

/// Analyzes a batch of slices and ranks them best-to-worst.
///
/// Slice analyses are independent and run in parallel; results keep
/// input order. The ranking comparator is descending on optimal value,
/// tech-skip count, planet count, then wormhole count, and is stable:
/// slices equal on all four keys keep their relative input order.
pub fn rank_slices(slices: &[Slice], catalog: &TileCatalog) -> Result<DraftAnalysis, SliceError> {
    if slices.is_empty() {
        return Err(SliceError::EmptyBatch);
    }

    let analyses: Vec<IndexedAnalysis> = slices
        .par_iter()
        .enumerate()
        .map(|(i, slice)| IndexedAnalysis {
            slice_index: i + 1,
            analysis: analyze_slice(slice, catalog),
        })
        .collect();

    let mut ranked: Vec<&IndexedAnalysis> = analyses.iter().collect();
    ranked.sort_by(|a, b| {
        let (a, b) = (&a.analysis, &b.analysis);
        b.optimal_value
            .cmp(&a.optimal_value)
            .then_with(|| b.tech_skips.len().cmp(&a.tech_skips.len()))
            .then_with(|| b.planet_count.cmp(&a.planet_count))
            .then_with(|| b.wormholes.len().cmp(&a.wormholes.len()))
    });

    let ranking = ranked
        .into_iter()
        .map(|entry| RankEntry {
            slice_index: entry.slice_index,
            optimal_value: entry.analysis.optimal_value,
            summary: summarize(&entry.analysis),
        })
        .collect();

    Ok(DraftAnalysis {
        slices: analyses,
        ranking,
    })
}

/// Builds the one-line ranking summary for a slice. Optional segments
/// appear only when their lists are non-empty.
fn summarize(analysis: &SliceAnalysis) -> String {
    let mut summary = format!(
        "{}R/{}I, {} skip(s)",
        analysis.total_resources,
        analysis.total_influence,
        analysis.tech_skips.len()
    );
    if !analysis.tech_skips.is_empty() {
        summary.push_str(&format!(" [{}]", analysis.tech_skips.join(", ")));
    }
    summary.push_str(&format!(", {} planet(s)", analysis.planet_count));
    if !analysis.wormholes.is_empty() {
        summary.push_str(&format!(", {} wormhole(s)", analysis.wormholes.join("+")));
    }
    if !analysis.legendary_planets.is_empty() {
        summary.push_str(", LEGENDARY");
    }

    let mecatol = &analysis.mecatol_path;
    let status = if mecatol.mecatol_blocked {
        "BLOCKED"
    } else {
        mecatol.best_path.status.as_str()
    };
    summary.push_str(&format!(
        " | Mecatol: {} (score: {})",
        status, mecatol.mecatol_path_score
    ));
    summary
}
