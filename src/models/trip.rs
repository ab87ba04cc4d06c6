// src/models/trip.rs
// DOCUMENTATION: Derived trip insights and request/response DTOs
// PURPOSE: Serialization models for /search and /calculate

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::Attraction;
use crate::errors::TripError;

/// Climate category derived from latitude (and country)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClimateType {
    Tropical,
    Temperate,
    Polar,
    Desert,
}

/// Mock climate summary for a destination
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClimateInfo {
    pub climate_type: ClimateType,
    pub best_months: String,
    pub peak_season: bool,
    pub description: String,
}

/// Whether the estimated trip cost fits the stated budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BudgetStatus {
    #[serde(rename = "Within Budget")]
    WithinBudget,
    #[serde(rename = "Over Budget")]
    OverBudget,
}

/// Food/activity cost breakdown against the traveller's budget
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostSummary {
    pub total_food: f64,
    pub total_activity: f64,
    pub total_trip: f64,
    pub remaining_budget: f64,
    #[serde(rename = "budget_status")]
    pub budget_status: BudgetStatus,
}

/// Crowd windows and daylight estimate
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitPlan {
    pub peak_times: Vec<String>,
    pub off_peak_times: Vec<String>,
    pub sunrise: String,
    pub sunset: String,
    pub notes: String,
}

/// Serialize `None` as `{}` instead of `null`
fn some_or_empty_object<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    match value {
        Some(inner) => inner.serialize(serializer),
        None => serializer.serialize_map(Some(0))?.end(),
    }
}

/// First value of `key` among raw query pairs; later repeats are ignored
fn first_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.clone())
}

/// Query string for GET /search
/// DOCUMENTATION: Built from raw query pairs so that repeated keys and
/// malformed numbers are absorbed instead of rejected by the extractor
#[derive(Debug, Default)]
pub struct SearchParams {
    pub place: Option<String>,
    pub budget: Option<String>,
    pub days: Option<String>,
}

impl SearchParams {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            place: first_value(pairs, "place"),
            budget: first_value(pairs, "budget"),
            days: first_value(pairs, "days"),
        }
    }

    /// Trimmed place name, empty when absent
    pub fn place(&self) -> &str {
        self.place.as_deref().map(str::trim).unwrap_or("")
    }

    /// Budget and trip length; both reset to (0.0, 1) if either is malformed
    pub fn budget_and_days(&self) -> (f64, i64) {
        match parse_budget_and_days(self.budget.as_deref(), self.days.as_deref(), 1) {
            Some(pair) => pair,
            None => {
                log::debug!(
                    "Ignoring malformed budget/days: {:?}/{:?}",
                    self.budget,
                    self.days
                );
                (0.0, 1)
            }
        }
    }
}

/// Query string for GET /calculate
#[derive(Debug, Default)]
pub struct CalculateParams {
    pub budget: Option<String>,
    pub days: Option<String>,
}

impl CalculateParams {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            budget: first_value(pairs, "budget"),
            days: first_value(pairs, "days"),
        }
    }

    /// Budget and trip length; days defaults to 0 so a missing value is rejected
    pub fn budget_and_days(&self) -> Result<(f64, i64), TripError> {
        parse_budget_and_days(self.budget.as_deref(), self.days.as_deref(), 0)
            .ok_or(TripError::InvalidNumbers)
    }
}

fn parse_budget_and_days(
    budget: Option<&str>,
    days: Option<&str>,
    default_days: i64,
) -> Option<(f64, i64)> {
    let budget = match budget {
        Some(raw) => raw.trim().parse::<f64>().ok()?,
        None => 0.0,
    };
    let days = match days {
        Some(raw) => raw.trim().parse::<i64>().ok()?,
        None => default_days,
    };
    Some((budget, days))
}

/// Response body for GET /search
/// DOCUMENTATION: `visit_plan` is only absent on the missing-place
/// short-circuit
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub attractions: Vec<Attraction>,

    #[serde(serialize_with = "some_or_empty_object")]
    pub cost_summary: Option<CostSummary>,

    #[serde(serialize_with = "some_or_empty_object")]
    pub climate: Option<ClimateInfo>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub visit_plan: Option<VisitPlan>,
}

impl SearchResponse {
    /// Response for a request without a place name
    pub fn without_place() -> Self {
        Self {
            attractions: Vec::new(),
            cost_summary: None,
            climate: None,
            visit_plan: None,
        }
    }
}

/// Response body for GET /calculate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculateResponse {
    /// Share of the daily budget allotted to activities, rounded to cents
    pub activities: f64,
}
