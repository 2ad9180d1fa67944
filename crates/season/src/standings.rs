// ABOUTME: Normalizer for the drivers' championship standings table.
// ABOUTME: Maps 6-cell rows into StandingRecords, recomputing rank from row order.

use crate::error::SeasonError;
use crate::extract::STANDINGS;
use crate::models::StandingRecord;
use crate::teams::canonical_team;

// Column layout: 0 position index (ignored), 1 marker (ignored), 2 driver,
// 3 marker (ignored), 4 team, 5 points.
const DRIVER: usize = 2;
const TEAM: usize = 4;
const POINTS: usize = 5;

/// Normalize extracted standings rows into records.
///
/// Precondition: the source page lists standings pre-sorted by points
/// descending; `rank` is assigned 1-based from row order, not read from the
/// scraped position cell, so it is only meaningful if that holds.
///
/// Fails with a Schema error if any row does not have exactly 6 cells.
pub fn normalize_standings(
    rows: &[Vec<String>],
    season: &str,
) -> Result<Vec<StandingRecord>, SeasonError> {
    let mut records = Vec::with_capacity(rows.len());

    for (idx, row) in rows.iter().enumerate() {
        if row.len() != STANDINGS.columns {
            return Err(SeasonError::schema(
                season,
                STANDINGS.table,
                Some(anyhow::anyhow!(
                    "row {} has {} cells, expected {}",
                    idx + 1,
                    row.len(),
                    STANDINGS.columns
                )),
            ));
        }

        records.push(StandingRecord {
            rank: (idx + 1) as u32,
            driver: row[DRIVER].clone(),
            team: canonical_team(&row[TEAM]),
            points: row[POINTS].clone(),
        });
    }

    Ok(records)
}
