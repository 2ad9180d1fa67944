// ABOUTME: Table extraction from the season page markup via the layout contract.
// ABOUTME: Locates a block by selector, takes its first table, and yields trimmed cell text per row.

use std::collections::HashMap;
use std::sync::RwLock;

use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use crate::error::SeasonError;

/// Layout contract for one table on the season page: which markup block holds
/// it and how many cells each row is expected to have.
///
/// The source page's structure is assumed, not verified, so any drift from
/// this contract must surface as an Extract or Schema error rather than
/// silent misalignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableLayout {
    /// Table identifier used in error context ("standings", "results").
    pub table: &'static str,
    /// Selector for the block wrapping the table. The source marks its blocks
    /// by exact class attribute value, so these are exact-attribute selectors.
    pub block_selector: &'static str,
    /// Expected cell count per data row.
    pub columns: usize,
}

/// Championship standings block: position, marker, driver, marker, team, points.
pub const STANDINGS: TableLayout = TableLayout {
    table: "standings",
    block_selector: r#"div[class="blocks blocks2"]"#,
    columns: 6,
};

/// Grand-prix results block: marker, date, grand prix, circuit, marker,
/// driver, team, laps, time.
pub const RESULTS: TableLayout = TableLayout {
    table: "results",
    block_selector: r#"div[class="blocks blocks"]"#,
    columns: 9,
};

/// Cache of compiled CSS selectors. Selector parsing is expensive relative to
/// matching, and the same handful of selectors is used on every season load.
static SELECTOR_CACHE: Lazy<RwLock<HashMap<String, Option<Selector>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Gets or compiles a CSS selector, caching the result.
///
/// Returns `Some(Selector)` if the selector is valid, `None` if invalid.
fn get_or_compile(css: &str) -> Option<Selector> {
    {
        let cache = SELECTOR_CACHE.read().unwrap();
        if let Some(cached) = cache.get(css) {
            return cached.clone();
        }
    }

    let compiled = Selector::parse(css).ok();
    let mut cache = SELECTOR_CACHE.write().unwrap();
    // Another thread may have inserted while we compiled
    if let Some(cached) = cache.get(css) {
        return cached.clone();
    }
    cache.insert(css.to_string(), compiled.clone());
    compiled
}

/// Normalizes whitespace in a string by collapsing runs of whitespace into single spaces.
fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Extract the rows of the table described by `layout` from the season page.
///
/// Finds the first block matching the layout's selector, then the first
/// nested `<table>`, skips its header row, and returns the text content of
/// every `<td>` in the remaining rows (whitespace-normalized, embedded markup
/// discarded). Fails with an Extract error if the block or the table is
/// absent; a matched table with no data rows yields an empty sequence.
///
/// Pure function: no I/O, same input gives same output.
pub fn extract_table(
    html: &str,
    layout: &TableLayout,
    season: &str,
) -> Result<Vec<Vec<String>>, SeasonError> {
    let compile = |css: &str| {
        get_or_compile(css).ok_or_else(|| {
            SeasonError::extract(
                season,
                layout.table,
                Some(anyhow::anyhow!("invalid selector {:?}", css)),
            )
        })
    };

    let block_selector = compile(layout.block_selector)?;
    let table_selector = compile("table")?;
    let row_selector = compile("tr")?;
    let cell_selector = compile("td")?;

    let doc = Html::parse_document(html);

    let block = doc.select(&block_selector).next().ok_or_else(|| {
        SeasonError::extract(
            season,
            layout.table,
            Some(anyhow::anyhow!(
                "block {:?} not found in page",
                layout.block_selector
            )),
        )
    })?;

    let table = block.select(&table_selector).next().ok_or_else(|| {
        SeasonError::extract(
            season,
            layout.table,
            Some(anyhow::anyhow!(
                "no table inside block {:?}",
                layout.block_selector
            )),
        )
    })?;

    // First row is the header
    let mut rows = Vec::new();
    for row in table.select(&row_selector).skip(1) {
        let cells: Vec<String> = row
            .select(&cell_selector)
            .map(|td| normalize_whitespace(&td.text().collect::<String>()))
            .collect();
        rows.push(cells);
    }

    Ok(rows)
}
