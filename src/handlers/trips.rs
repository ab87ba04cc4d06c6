// src/handlers/trips.rs
// DOCUMENTATION: HTTP handlers for trip operations
// PURPOSE: Parse query strings, call the trip service, return JSON

use crate::errors::TripError;
use crate::models::{CalculateParams, CalculateResponse, SearchParams};
use crate::services::{CostEstimator, TripService};
use actix_web::{web, HttpResponse, Responder};

/// GET /search
/// Geocode a place and return attractions with cost, climate and timing hints
///
/// DOCUMENTATION: Always answers 200; upstream failures show up as empty
/// sections and malformed budget/days are silently defaulted. The query is
/// taken as raw pairs so a repeated key cannot fail extraction.
pub async fn search(
    service: web::Data<TripService>,
    query: web::Query<Vec<(String, String)>>,
) -> impl Responder {
    let params = SearchParams::from_pairs(&query);
    let (budget, days) = params.budget_and_days();
    let response = service.search(params.place(), budget, days).await;
    HttpResponse::Ok().json(response)
}

/// GET /calculate
/// Daily activity allowance (20% of the per-day budget)
pub async fn calculate(
    query: web::Query<Vec<(String, String)>>,
) -> Result<impl Responder, TripError> {
    let (budget, days) = CalculateParams::from_pairs(&query).budget_and_days()?;

    if days <= 0 {
        return Err(TripError::NonPositiveDays);
    }

    Ok(HttpResponse::Ok().json(CalculateResponse {
        activities: CostEstimator::daily_activity_allowance(budget, days),
    }))
}

/// Configuration for trip routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/search", web::get().to(search))
        .route("/calculate", web::get().to(calculate));
}
