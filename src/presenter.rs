//! View-model construction for estimate results
//!
//! Ranks fare quotes, picks the best option, and formats money with the
//! Indian grouping convention (₹1,17,600) at zero fractional digits. The
//! frontend renders these models verbatim; all presentation decisions apart
//! from layout live here.

use serde::{Deserialize, Serialize};

use crate::pricing::FareQuote;
use crate::trip::QueryContext;

/// One ranked fare in the result list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FareCard {
    pub title: String,
    pub color: String,
    pub total: i64,
    pub per_person: i64,
    pub total_display: String,
    pub per_person_display: String,
    /// Share of the highest fare, 1-100
    pub percent_of_highest: u32,
}

/// The highlighted cheapest option
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BestOption {
    pub headline: String,
    pub title: String,
    pub total_display: String,
    /// "3 travellers · 2026-09-01 → 2026-09-05"
    pub context_line: String,
}

/// Everything the results region needs for one submission
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EstimateView {
    /// The pair has no distance data (or source and destination are equal)
    NoRoute { message: String },
    /// Ranked fares, cheapest first
    Ranked {
        best: BestOption,
        fares: Vec<FareCard>,
    },
}

/// Format whole rupees with en-IN digit grouping and no fraction.
///
/// The last three digits form one group; every group above that has two
/// digits: 4200 -> "₹4,200", 117600 -> "₹1,17,600".
#[must_use]
pub fn format_inr(amount: i64) -> String {
    let negative = amount < 0;
    let digits = amount.unsigned_abs().to_string();

    let mut grouped = String::new();
    let len = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 {
            let remaining = len - i;
            if remaining == 3 || (remaining > 3 && (remaining - 3) % 2 == 0) {
                grouped.push(',');
            }
        }
        grouped.push(ch);
    }

    if negative {
        format!("-₹{grouped}")
    } else {
        format!("₹{grouped}")
    }
}

/// Build the no-data view for a pair we cannot price.
///
/// Both city names appear verbatim; a same-city submission lands here with
/// the two names equal.
#[must_use]
pub fn present_no_route(source: &str, destination: &str) -> EstimateView {
    EstimateView::NoRoute {
        message: format!(
            "Sorry, we do not have pricing data for {source} ↔ {destination} yet."
        ),
    }
}

/// Rank quotes and build the renderable view.
///
/// Sorting is stable and ascending on `total`, so ties keep the quoting
/// order of the mode table. Percentages are relative to the highest total.
#[must_use]
pub fn present(mut quotes: Vec<FareQuote>, ctx: &QueryContext) -> EstimateView {
    quotes.sort_by_key(|q| q.total);

    // compute_fares never returns an empty list; treat one like a pair
    // without data rather than panic.
    let Some(cheapest) = quotes.first() else {
        return present_no_route(&ctx.source, &ctx.destination);
    };
    let highest = quotes.last().map_or(1, |q| q.total).max(1);

    let traveller_word = if ctx.travelers == 1 {
        "traveller"
    } else {
        "travellers"
    };

    let best = BestOption {
        headline: format!("Best option · {} → {}", ctx.source, ctx.destination),
        title: cheapest.title.clone(),
        total_display: format_inr(cheapest.total),
        context_line: format!(
            "{} {traveller_word} · {}",
            ctx.travelers, ctx.round_trip_label
        ),
    };

    let fares = quotes
        .iter()
        .map(|q| FareCard {
            title: q.title.clone(),
            color: q.color.clone(),
            total: q.total,
            per_person: q.per_person,
            total_display: format_inr(q.total),
            per_person_display: format_inr(q.per_person),
            percent_of_highest: ((q.total as f64 / highest as f64) * 100.0).round() as u32,
        })
        .collect();

    EstimateView::Ranked { best, fares }
}
