// ABOUTME: Error types for season loading including ErrorCode enum and SeasonError struct.
// ABOUTME: Every error carries the season and table identifier so callers can tell outage from layout drift.

use std::fmt;

/// Error codes representing different categories of season-load failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// The season identifier is not a plausible year.
    InvalidSeason,
    /// Network or HTTP failure (transport error, timeout, non-2xx status).
    Fetch,
    /// An expected markup block or nested table was not found — the source
    /// page layout has drifted from the layout contract.
    Extract,
    /// A row's cell count does not match the table's expected column layout.
    Schema,
    /// A value expected to be numeric could not be parsed.
    Parse,
    /// The circuit reference file could not be read or deserialized.
    Reference,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::InvalidSeason => "invalid season",
            ErrorCode::Fetch => "fetch error",
            ErrorCode::Extract => "extraction error",
            ErrorCode::Schema => "schema mismatch",
            ErrorCode::Parse => "parse error",
            ErrorCode::Reference => "reference data error",
        };
        write!(f, "{}", s)
    }
}

/// The main error type for season-load operations.
#[derive(Debug, thiserror::Error)]
pub struct SeasonError {
    pub code: ErrorCode,
    pub season: String,
    pub table: String,
    #[source]
    pub source: Option<anyhow::Error>,
}

impl fmt::Display for SeasonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gridstats: {} {}: {}", self.table, self.season, self.code)?;
        if let Some(ref src) = self.source {
            write!(f, ": {}", src)?;
        }
        Ok(())
    }
}

impl SeasonError {
    /// Create an InvalidSeason error.
    pub fn invalid_season(season: impl Into<String>, source: Option<anyhow::Error>) -> Self {
        Self {
            code: ErrorCode::InvalidSeason,
            season: season.into(),
            table: "season".to_string(),
            source,
        }
    }

    /// Create a Fetch error.
    pub fn fetch(
        season: impl Into<String>,
        table: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self {
            code: ErrorCode::Fetch,
            season: season.into(),
            table: table.into(),
            source,
        }
    }

    /// Create an Extract error.
    pub fn extract(
        season: impl Into<String>,
        table: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self {
            code: ErrorCode::Extract,
            season: season.into(),
            table: table.into(),
            source,
        }
    }

    /// Create a Schema error.
    pub fn schema(
        season: impl Into<String>,
        table: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self {
            code: ErrorCode::Schema,
            season: season.into(),
            table: table.into(),
            source,
        }
    }

    /// Create a Parse error.
    pub fn parse(
        season: impl Into<String>,
        table: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self {
            code: ErrorCode::Parse,
            season: season.into(),
            table: table.into(),
            source,
        }
    }

    /// Create a Reference error. Circuit metadata is season-independent,
    /// so the season field is left empty.
    pub fn reference(table: impl Into<String>, source: Option<anyhow::Error>) -> Self {
        Self {
            code: ErrorCode::Reference,
            season: String::new(),
            table: table.into(),
            source,
        }
    }

    /// Returns true if this is an InvalidSeason error.
    pub fn is_invalid_season(&self) -> bool {
        self.code == ErrorCode::InvalidSeason
    }

    /// Returns true if this is a Fetch error.
    pub fn is_fetch(&self) -> bool {
        self.code == ErrorCode::Fetch
    }

    /// Returns true if this is an Extract error.
    pub fn is_extract(&self) -> bool {
        self.code == ErrorCode::Extract
    }

    /// Returns true if this is a Schema error.
    pub fn is_schema(&self) -> bool {
        self.code == ErrorCode::Schema
    }

    /// Returns true if this is a Parse error.
    pub fn is_parse(&self) -> bool {
        self.code == ErrorCode::Parse
    }

    /// Returns true if this is a Reference error.
    pub fn is_reference(&self) -> bool {
        self.code == ErrorCode::Reference
    }
}
