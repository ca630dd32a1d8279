//! Field extraction from the forecast page markup
//!
//! Locates the today-weather block and probes a fixed set of leaf
//! selectors inside it. Each probe is independent: a missing node
//! substitutes a sentinel and never blocks the other fields. Only a
//! missing today block is terminal.

use scraper::{ElementRef, Html, Selector};

use crate::{
    client::ScrapeError,
    models::{TodayForecast, UNKNOWN_VALUE},
};

/// Selector for the current day's forecast block
const TODAY_SECTION: &str = ".forecast-days-wrap .today-weather";

/// Selector for the precipitation table rows inside the today block
const PRECIPITATION_ROWS: &str = ".precip-table tbody tr";

/// One scalar field probe: where to look and what to substitute
struct FieldProbe {
    /// Selector relative to the today block
    selector: &'static str,
    /// Sentinel used when no node matches
    fallback: &'static str,
}

const WEATHER_PROBE: FieldProbe = FieldProbe {
    selector: ".weather-telop",
    fallback: UNKNOWN_VALUE,
};

const HIGH_TEMP_PROBE: FieldProbe = FieldProbe {
    selector: ".high-temp .value",
    fallback: UNKNOWN_VALUE,
};

const LOW_TEMP_PROBE: FieldProbe = FieldProbe {
    selector: ".low-temp .value",
    fallback: UNKNOWN_VALUE,
};

/// Extract today's forecast fields from the page HTML
///
/// Returns `ScrapeError::StructureNotFound` when the today block is
/// absent; no partial extraction is attempted in that case.
pub fn extract_today(html: &str) -> Result<TodayForecast, ScrapeError> {
    let document = Html::parse_document(html);
    let today = parse_selector(TODAY_SECTION)?;

    let Some(section) = document.select(&today).next() else {
        return Err(ScrapeError::StructureNotFound);
    };

    Ok(TodayForecast {
        weather: probe_text(section, &WEATHER_PROBE)?,
        temperature_max: probe_text(section, &HIGH_TEMP_PROBE)?,
        temperature_min: probe_text(section, &LOW_TEMP_PROBE)?,
        precipitation_probability: probe_precipitation(section)?,
    })
}

/// Probe one scalar field inside the today block
///
/// A present node yields its trimmed text, even when empty; only an
/// absent node substitutes the fallback sentinel.
fn probe_text(section: ElementRef<'_>, probe: &FieldProbe) -> Result<String, ScrapeError> {
    let selector = parse_selector(probe.selector)?;
    Ok(section
        .select(&selector)
        .next()
        .map_or_else(|| probe.fallback.to_string(), collect_text))
}

/// Collect the precipitation probability cells
///
/// The table's first row carries time-slot labels; the second row (index
/// 1) carries the values. Cells are taken in document order. When nothing
/// was collected the four-dash placeholder stands in.
fn probe_precipitation(section: ElementRef<'_>) -> Result<Vec<String>, ScrapeError> {
    let rows = parse_selector(PRECIPITATION_ROWS)?;
    let cells = parse_selector("td")?;

    let mut values = Vec::new();
    if let Some(value_row) = section.select(&rows).nth(1) {
        for cell in value_row.select(&cells) {
            values.push(collect_text(cell));
        }
    }

    if values.is_empty() {
        Ok(TodayForecast::missing_precipitation())
    } else {
        Ok(values)
    }
}

/// Trimmed text content of a node, including nested text
fn collect_text(node: ElementRef<'_>) -> String {
    node.text().collect::<String>().trim().to_string()
}

/// Compile a selector, converting engine errors into scrape errors
fn parse_selector(css: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(css).map_err(|e| ScrapeError::Parse(e.to_string()))
}
