// src/services/visit_planner.rs
// DOCUMENTATION: Crowd flow and ideal timing heuristic
// PURPOSE: Estimate daylight and pick peak/off-peak visiting windows

use crate::models::{Attraction, ClimateInfo, GeoResult, VisitPlan};

const DEFAULT_SUNRISE_HOUR: i64 = 6;
const DEFAULT_SUNSET_HOUR: i64 = 18;

/// Largest daylight shift applied at the poles, in hours
const MAX_DAYLIGHT_SHIFT_HOURS: f64 = 2.0;

const PEAK_SEASON_PEAK: &[&str] = &["12:00", "13:00", "14:00"];
const PEAK_SEASON_OFF_PEAK: &[&str] = &["09:00", "17:00"];
const QUIET_SEASON_PEAK: &[&str] = &["10:00", "11:00"];
const QUIET_SEASON_OFF_PEAK: &[&str] = &["14:00", "15:00"];

const VISIT_NOTES: &str = "Avoid peak hours if you want fewer crowds.";

pub struct VisitPlanner;

impl VisitPlanner {
    /// Build a visit plan for the destination.
    ///
    /// The attraction list does not influence the plan yet; it is part of the
    /// signature so callers hand over the full lookup.
    pub fn plan(
        _attractions: &[Attraction],
        climate: Option<&ClimateInfo>,
        geo: &GeoResult,
    ) -> VisitPlan {
        let (sunrise, sunset) = Self::daylight(geo.latitude());

        let peak_season = climate.is_some_and(|c| c.peak_season);
        let (peak, off_peak) = if peak_season {
            (PEAK_SEASON_PEAK, PEAK_SEASON_OFF_PEAK)
        } else {
            (QUIET_SEASON_PEAK, QUIET_SEASON_OFF_PEAK)
        };

        VisitPlan {
            peak_times: to_strings(peak),
            off_peak_times: to_strings(off_peak),
            sunrise,
            sunset,
            notes: VISIT_NOTES.to_string(),
        }
    }

    /// Sunrise/sunset estimate: up to two hours more daylight toward the poles
    fn daylight(lat: Option<f64>) -> (String, String) {
        let offset = lat
            .map(|lat| ((lat.abs() / 90.0) * MAX_DAYLIGHT_SHIFT_HOURS).floor() as i64)
            .unwrap_or(0);

        let sunrise_hour = (DEFAULT_SUNRISE_HOUR - offset).max(0);
        let sunset_hour = (DEFAULT_SUNSET_HOUR + offset).min(23);

        (format_hour(sunrise_hour), format_hour(sunset_hour))
    }
}

fn format_hour(hour: i64) -> String {
    format!("{:02}:00", hour)
}

fn to_strings(times: &[&str]) -> Vec<String> {
    times.iter().map(|t| t.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ClimateClassifier;

    fn geo_at(lat: &str) -> GeoResult {
        GeoResult {
            lat: Some(lat.to_string()),
            lon: Some("0".to_string()),
            ..GeoResult::default()
        }
    }

    #[test]
    fn test_daylight_by_latitude() {
        let plan = VisitPlanner::plan(&[], None, &geo_at("10.0"));
        assert_eq!((plan.sunrise.as_str(), plan.sunset.as_str()), ("06:00", "18:00"));

        let plan = VisitPlanner::plan(&[], None, &geo_at("-48.8566"));
        assert_eq!((plan.sunrise.as_str(), plan.sunset.as_str()), ("05:00", "19:00"));

        let plan = VisitPlanner::plan(&[], None, &geo_at("90"));
        assert_eq!((plan.sunrise.as_str(), plan.sunset.as_str()), ("04:00", "20:00"));
    }

    #[test]
    fn test_daylight_stays_within_bounds() {
        let mut lat = -90.0_f64;
        while lat <= 90.0 {
            let (sunrise, sunset) = VisitPlanner::daylight(Some(lat));
            assert!(("04:00"..="06:00").contains(&sunrise.as_str()), "{}", sunrise);
            assert!(("18:00"..="20:00").contains(&sunset.as_str()), "{}", sunset);
            lat += 0.5;
        }
    }

    #[test]
    fn test_unparseable_latitude_falls_back() {
        let plan = VisitPlanner::plan(&[], None, &geo_at("somewhere"));
        assert_eq!(plan.sunrise, "06:00");
        assert_eq!(plan.sunset, "18:00");

        let plan = VisitPlanner::plan(&[], None, &GeoResult::default());
        assert_eq!(plan.sunrise, "06:00");
        assert_eq!(plan.sunset, "18:00");
    }

    #[test]
    fn test_peak_season_windows() {
        let climate = ClimateClassifier::classify(48.8566, Some("France"));
        let plan = VisitPlanner::plan(&[], Some(&climate), &geo_at("48.8566"));

        assert_eq!(plan.peak_times, vec!["12:00", "13:00", "14:00"]);
        assert_eq!(plan.off_peak_times, vec!["09:00", "17:00"]);
        assert_eq!(plan.notes, "Avoid peak hours if you want fewer crowds.");
    }

    #[test]
    fn test_quiet_season_windows() {
        let climate = ClimateClassifier::classify(1.35, Some("Singapore"));
        let plan = VisitPlanner::plan(&[], Some(&climate), &geo_at("1.35"));
        assert_eq!(plan.peak_times, vec!["10:00", "11:00"]);
        assert_eq!(plan.off_peak_times, vec!["14:00", "15:00"]);

        // No climate at all behaves like off season
        let plan = VisitPlanner::plan(&[], None, &GeoResult::default());
        assert_eq!(plan.peak_times, vec!["10:00", "11:00"]);
    }

    #[test]
    fn test_attractions_do_not_change_plan() {
        let attractions = vec![Attraction {
            name: "Louvre".to_string(),
            distance_meters: 1200.0,
        }];
        let geo = geo_at("48.8566");
        assert_eq!(
            VisitPlanner::plan(&attractions, None, &geo),
            VisitPlanner::plan(&[], None, &geo)
        );
    }
}
