// ABOUTME: Core season-data library for gridstats.
// ABOUTME: Fetches a season page, extracts and normalizes its tables, and derives constructor standings.

pub mod circuits;
pub mod client;
pub mod constructors;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod models;
pub mod options;
pub mod results;
pub mod standings;
pub mod teams;

pub use circuits::{load_circuits, CircuitStats};
pub use client::SeasonClient;
pub use constructors::aggregate;
pub use error::{ErrorCode, SeasonError};
pub use extract::{extract_table, TableLayout, RESULTS, STANDINGS};
pub use fetch::{season_url, DEFAULT_BASE_URL};
pub use models::{
    CircuitRecord, ConstructorRecord, RaceResultRecord, SeasonData, StandingRecord,
};
pub use options::{ClientBuilder, Options};
pub use results::normalize_results;
pub use standings::normalize_standings;
pub use teams::canonical_team;
