// ABOUTME: Normalizer for the grand-prix results table.
// ABOUTME: Maps 9-cell rows into RaceResultRecords with canonical team names.

use crate::error::SeasonError;
use crate::extract::RESULTS;
use crate::models::RaceResultRecord;
use crate::teams::canonical_team;

// Column layout: 0 marker (ignored), 1 race date, 2 grand prix, 3 circuit,
// 4 marker (ignored), 5 driver, 6 team, 7 lap count, 8 lap time.
const RACE_DATE: usize = 1;
const GRAND_PRIX: usize = 2;
const CIRCUIT: usize = 3;
const DRIVER: usize = 5;
const TEAM: usize = 6;
const LAP_COUNT: usize = 7;
const LAP_TIME: usize = 8;

/// Normalize extracted results rows into records.
///
/// Dates, lap counts and lap times stay as published. Fails with a Schema
/// error if any row does not have exactly 9 cells.
pub fn normalize_results(
    rows: &[Vec<String>],
    season: &str,
) -> Result<Vec<RaceResultRecord>, SeasonError> {
    let mut records = Vec::with_capacity(rows.len());

    for (idx, row) in rows.iter().enumerate() {
        if row.len() != RESULTS.columns {
            return Err(SeasonError::schema(
                season,
                RESULTS.table,
                Some(anyhow::anyhow!(
                    "row {} has {} cells, expected {}",
                    idx + 1,
                    row.len(),
                    RESULTS.columns
                )),
            ));
        }

        records.push(RaceResultRecord {
            race_date: row[RACE_DATE].clone(),
            grand_prix: row[GRAND_PRIX].clone(),
            circuit: row[CIRCUIT].clone(),
            driver: row[DRIVER].clone(),
            team: canonical_team(&row[TEAM]),
            lap_count: row[LAP_COUNT].clone(),
            lap_time: row[LAP_TIME].clone(),
        });
    }

    Ok(records)
}
