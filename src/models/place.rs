// src/models/place.rs
// DOCUMENTATION: Location and point-of-interest data structures
// PURPOSE: Shapes produced by the geocoding and geosearch stages

use serde::Serialize;
use validator::Validate;

/// Free-text place name as typed by the user
/// DOCUMENTATION: Lookups only run for names of at least three characters
#[derive(Debug, Clone, Validate)]
pub struct PlaceQuery {
    #[validate(length(min = 3))]
    pub name: String,
}

impl PlaceQuery {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Whether the name is long enough to be sent upstream
    pub fn is_searchable(&self) -> bool {
        self.validate().is_ok()
    }
}

/// Result of geocoding a place name
/// DOCUMENTATION: Coordinates are kept as the numeric strings the geocoder
/// returns. `GeoResult::default()` is the "unresolved" value and
/// serializes as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GeoResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub lon: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Full display address from the geocoder
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl GeoResult {
    /// Both coordinates present and non-empty
    pub fn is_resolved(&self) -> bool {
        let present = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.is_empty());
        present(&self.lat) && present(&self.lon)
    }

    /// Latitude as a finite number, if it parses
    pub fn latitude(&self) -> Option<f64> {
        parse_coordinate(self.lat.as_deref()?)
    }
}

/// Parse a coordinate string, rejecting NaN and infinities
pub fn parse_coordinate(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Nearby named point of interest
/// DOCUMENTATION: Order is whatever the geosearch service returned
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attraction {
    pub name: String,
    pub distance_meters: f64,
}

/// Combined output of the geocode and landmark stages
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlaceLookup {
    pub attractions: Vec<Attraction>,
    pub geo: GeoResult,
}

impl PlaceLookup {
    /// Fully degraded lookup: no attractions, unresolved location
    pub fn empty() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_query_length() {
        assert!(!PlaceQuery::new("").is_searchable());
        assert!(!PlaceQuery::new("Ro").is_searchable());
        assert!(PlaceQuery::new("Rome").is_searchable());
        assert!(PlaceQuery::new("Åre").is_searchable());
    }

    #[test]
    fn test_geo_result_resolution() {
        assert!(!GeoResult::default().is_resolved());

        let geo = GeoResult {
            lat: Some("48.8566".to_string()),
            lon: Some(String::new()),
            ..GeoResult::default()
        };
        assert!(!geo.is_resolved());

        let geo = GeoResult {
            lat: Some("48.8566".to_string()),
            lon: Some("2.3522".to_string()),
            ..GeoResult::default()
        };
        assert!(geo.is_resolved());
        assert_eq!(geo.latitude(), Some(48.8566));
    }

    #[test]
    fn test_parse_coordinate_rejects_non_finite() {
        assert_eq!(parse_coordinate(" -33.9 "), Some(-33.9));
        assert_eq!(parse_coordinate("north"), None);
        assert_eq!(parse_coordinate("nan"), None);
        assert_eq!(parse_coordinate("inf"), None);
    }

    #[test]
    fn test_empty_lookup_serializes_empty_geo() {
        let value = serde_json::to_value(PlaceLookup::empty()).unwrap();
        assert_eq!(value, serde_json::json!({"attractions": [], "geo": {}}));
    }
}
