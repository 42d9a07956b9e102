//! HTTP API for the fare estimator
//!
//! Two endpoints back the static form: `GET /api/cities` feeds the city
//! selects, `POST /api/estimate` runs one submission end to end. Validation
//! failures come back as 422 with a user-facing message; the frontend shows
//! that message as a blocking notice instead of rendering results.

use axum::{
    Router,
    response::Json,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::FareError;
use crate::presenter::{self, EstimateView};
use crate::pricing;
use crate::routes::CITIES;
use crate::trip::{self, TripQuery};

/// One form submission, as posted by the frontend.
#[derive(Debug, Serialize, Deserialize)]
pub struct EstimateParams {
    pub source: String,
    pub destination: String,
    #[serde(default)]
    pub depart: Option<String>,
    #[serde(default, rename = "return")]
    pub return_date: Option<String>,
    pub travelers: i64,
    #[serde(default)]
    pub flex_days: i64,
}

impl From<EstimateParams> for TripQuery {
    fn from(params: EstimateParams) -> Self {
        Self {
            source: params.source,
            destination: params.destination,
            depart: params.depart,
            return_date: params.return_date,
            travelers: params.travelers,
            flex_days: params.flex_days,
        }
    }
}

pub fn router() -> Router {
    Router::new()
        .route("/cities", get(get_cities))
        .route("/estimate", post(post_estimate))
}

/// The supported cities in display order.
async fn get_cities() -> Json<Vec<&'static str>> {
    Json(CITIES.to_vec())
}

#[instrument(skip(params), fields(source = %params.source, destination = %params.destination))]
async fn post_estimate(
    Json(params): Json<EstimateParams>,
) -> Result<Json<EstimateView>, FareError> {
    let query: TripQuery = params.into();

    // A same-city pair is presented like any other pair without data,
    // whatever the rest of the form says; dates are never consulted.
    if query.source == query.destination {
        tracing::debug!("same source and destination selected");
        return Ok(Json(presenter::present_no_route(
            &query.source,
            &query.destination,
        )));
    }

    let ctx = trip::validate(&query)?;

    let view = match pricing::compute_fares(
        &ctx.source,
        &ctx.destination,
        ctx.travelers,
        ctx.flex_days,
    ) {
        Some(quotes) => presenter::present(quotes, &ctx),
        None => {
            tracing::debug!("no distance data for pair");
            presenter::present_no_route(&ctx.source, &ctx.destination)
        }
    };

    Ok(Json(view))
}
