// ABOUTME: Constructor standings derived from driver standings.
// ABOUTME: Stable group-by-team point sums, sorted descending with first-encounter tie-break.

use std::collections::HashMap;

use crate::error::SeasonError;
use crate::models::{ConstructorRecord, StandingRecord};

/// Derive constructor standings by summing driver points per canonical team.
///
/// Teams appear grouped in first-encounter order before the sort; the sort is
/// stable, so teams with equal points keep that relative order. Fails with a
/// Parse error if any standings row carries non-numeric points.
///
/// Pure reduction, no I/O.
pub fn aggregate(
    standings: &[StandingRecord],
    season: &str,
) -> Result<Vec<ConstructorRecord>, SeasonError> {
    let mut order: Vec<String> = Vec::new();
    let mut totals: HashMap<String, f64> = HashMap::new();

    for record in standings {
        let points = record.points_value().map_err(|e| {
            SeasonError::parse(
                season,
                "standings",
                Some(anyhow::anyhow!(
                    "points {:?} for driver {:?} is not numeric: {}",
                    record.points,
                    record.driver,
                    e
                )),
            )
        })?;

        if !totals.contains_key(&record.team) {
            order.push(record.team.clone());
        }
        *totals.entry(record.team.clone()).or_insert(0.0) += points;
    }

    let mut constructors: Vec<ConstructorRecord> = order
        .into_iter()
        .map(|team| {
            let points = totals[&team];
            ConstructorRecord { team, points }
        })
        .collect();

    // Vec::sort_by is stable; equal-point teams keep first-encounter order
    constructors.sort_by(|a, b| b.points.total_cmp(&a.points));

    Ok(constructors)
}
