// ABOUTME: Record types for season data: standings, race results, constructors, circuits.
// ABOUTME: All records are built once per season load and are immutable afterwards.

use serde::{Deserialize, Serialize};

/// One row of the drivers' championship standings.
///
/// `rank` is recomputed from row order during normalization, not taken from
/// the scraped position cell. `points` stays textual as scraped; use
/// [`StandingRecord::points_value`] when a number is needed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StandingRecord {
    pub rank: u32,
    pub driver: String,
    pub team: String,
    pub points: String,
}

impl StandingRecord {
    /// Parse the scraped points text as a number.
    ///
    /// Points are `f64` because racing series can award half points.
    pub fn points_value(&self) -> Result<f64, std::num::ParseFloatError> {
        self.points.trim().parse::<f64>()
    }
}

/// One grand-prix result row: the race winner and winning time.
///
/// `race_date`, `lap_count` and `lap_time` are kept as published; the source
/// imposes no format on them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RaceResultRecord {
    pub race_date: String,
    pub grand_prix: String,
    pub circuit: String,
    pub driver: String,
    pub team: String,
    pub lap_count: String,
    pub lap_time: String,
}

/// Derived constructor standing: driver points summed per canonical team.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConstructorRecord {
    pub team: String,
    pub points: f64,
}

/// Static circuit metadata, loaded from the reference file rather than scraped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CircuitRecord {
    pub name: String,
    pub grand_prix: String,
    pub date: String,
    pub circuit_length: f64,
    pub number_of_turns: u32,
    pub number_of_laps: u32,
    pub lat: f64,
    pub lon: f64,
}

/// Everything one season load produces: the three record collections the
/// presentation layer consumes, plus the season identifier they belong to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeasonData {
    pub season: String,
    pub standings: Vec<StandingRecord>,
    pub results: Vec<RaceResultRecord>,
    pub constructors: Vec<ConstructorRecord>,
}
