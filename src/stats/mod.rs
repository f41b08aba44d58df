//! Shot statistics: raw backend counts to display-ready derived values.

use serde::Serialize;

use crate::api::types::ShotsPayload;


/// One plotted shot in court-space units (feet, origin at mid-court
/// baseline center).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shot {
    pub id: String,
    pub loc_x: f64,
    pub loc_y: f64,
    pub shot_made: bool,
    pub shot_type: String,
}

/// Aggregate make/miss statistics with derived totals and percentages.
///
/// Derived, never input: recomputed wholesale from every response by
/// [`reduce`]. Percentages are round-half-up integers and an empty result
/// set yields zeros, never NaN.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShotStatistics {
    pub total_made: u32,
    pub total_missed: u32,
    pub total_shots: u32,
    pub pct_total: u32,
    pub made_2pt: u32,
    pub missed_2pt: u32,
    pub total_2pt: u32,
    pub pct_2pt: u32,
    pub made_3pt: u32,
    pub missed_3pt: u32,
    pub total_3pt: u32,
    pub pct_3pt: u32,
    pub shots: Vec<Shot>,
}

/// Integer percentage of `made` over `total`, 0 when `total` is 0.
fn percentage(made: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (f64::from(made) / f64::from(total) * 100.0).round() as u32
}

/// Reduce a raw `/shots` response into display statistics.
///
/// The overall percentage uses the returned shot list's length as its
/// denominator, matching what the chart actually plots.
pub fn reduce(payload: &ShotsPayload) -> ShotStatistics {
    let total_2pt = payload.made_2pt_shots + payload.missed_2pt_shots;
    let total_3pt = payload.made_3pt_shots + payload.missed_3pt_shots;
    let total_shots = payload.shots.len() as u32;

    ShotStatistics {
        total_made: payload.total_made_shots,
        total_missed: payload.total_missed_shots,
        total_shots,
        pct_total: percentage(payload.total_made_shots, total_shots),
        made_2pt: payload.made_2pt_shots,
        missed_2pt: payload.missed_2pt_shots,
        total_2pt,
        pct_2pt: percentage(payload.made_2pt_shots, total_2pt),
        made_3pt: payload.made_3pt_shots,
        missed_3pt: payload.missed_3pt_shots,
        total_3pt,
        pct_3pt: percentage(payload.made_3pt_shots, total_3pt),
        shots: payload
            .shots
            .iter()
            .map(|row| Shot {
                id: row.id.to_string(),
                loc_x: row.loc_x,
                loc_y: row.loc_y,
                shot_made: row.shot_made,
                shot_type: row.shot_type.clone(),
            })
            .collect(),
    }
}
