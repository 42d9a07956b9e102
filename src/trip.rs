//! Trip query validation
//!
//! Turns a raw form submission into a validated [`QueryContext`] or a
//! validation error whose `user_message` is shown to the traveler as a
//! blocking notice. Validation always runs before any fare computation;
//! a failed check means no quotes are produced at all.

use chrono::NaiveDate;

use crate::error::FareError;
use crate::Result;

/// A raw submission, exactly as the form sent it.
#[derive(Debug, Clone)]
pub struct TripQuery {
    pub source: String,
    pub destination: String,
    pub depart: Option<String>,
    pub return_date: Option<String>,
    pub travelers: i64,
    pub flex_days: i64,
}

/// A validated query, alive for one submission only.
#[derive(Debug, Clone)]
pub struct QueryContext {
    pub source: String,
    pub destination: String,
    pub travelers: u32,
    pub flex_days: u32,
    /// "2026-09-01 → 2026-09-05", used in the best-option context line
    pub round_trip_label: String,
}

const DATE_FORMAT: &str = "%Y-%m-%d";

fn parse_date(raw: &Option<String>) -> Result<Option<NaiveDate>> {
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map(Some)
            .map_err(|_| FareError::validation("Dates must be in YYYY-MM-DD format.")),
    }
}

/// Validate a submission and build its [`QueryContext`].
///
/// Validation is agnostic to the city pair; the estimate layer short-circuits
/// a same-city submission to the no-data view before calling in, so the pair
/// never rejects here.
pub fn validate(query: &TripQuery) -> Result<QueryContext> {
    let depart = parse_date(&query.depart)?;
    let return_date = parse_date(&query.return_date)?;

    let (Some(depart), Some(return_date)) = (depart, return_date) else {
        return Err(FareError::validation(
            "Please select both depart and return dates.",
        ));
    };

    if return_date <= depart {
        return Err(FareError::validation(
            "Return date must be later than depart date.",
        ));
    }

    if query.travelers < 1 {
        return Err(FareError::validation("Traveler count must be at least 1."));
    }

    if query.flex_days < 0 {
        return Err(FareError::validation("Flex days cannot be negative."));
    }

    // Bounds keep the arithmetic comfortably inside f64 integer precision.
    let travelers = u32::try_from(query.travelers)
        .map_err(|_| FareError::validation("Traveler count is too large."))?;
    let flex_days = u32::try_from(query.flex_days)
        .map_err(|_| FareError::validation("Flex days value is too large."))?;

    Ok(QueryContext {
        source: query.source.clone(),
        destination: query.destination.clone(),
        travelers,
        flex_days,
        round_trip_label: format!(
            "{} → {}",
            depart.format(DATE_FORMAT),
            return_date.format(DATE_FORMAT)
        ),
    })
}
