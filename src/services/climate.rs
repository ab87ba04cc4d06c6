// src/services/climate.rs
// DOCUMENTATION: Mock climate classification
// PURPOSE: Map latitude (and country) to a climate category

use crate::models::{ClimateInfo, ClimateType};

/// Upper bound of the tropical band (absolute latitude)
pub const TROPIC_LATITUDE: f64 = 23.5;

/// Lower bound of the polar band (absolute latitude)
pub const POLAR_CIRCLE_LATITUDE: f64 = 66.5;

/// Countries classified as desert regardless of latitude (lowercase)
const DESERT_COUNTRIES: &[&str] = &["egypt", "saudi arabia", "uae"];

pub struct ClimateClassifier;

impl ClimateClassifier {
    /// Classify a destination by latitude band, with a desert override by country
    pub fn classify(lat: f64, country: Option<&str>) -> ClimateInfo {
        if country.is_some_and(Self::is_desert_country) {
            return Self::info(ClimateType::Desert);
        }

        let band = lat.abs();
        let climate_type = if band < TROPIC_LATITUDE {
            ClimateType::Tropical
        } else if band < POLAR_CIRCLE_LATITUDE {
            ClimateType::Temperate
        } else {
            ClimateType::Polar
        };

        Self::info(climate_type)
    }

    /// Same as `classify`, taking the raw latitude string from the geocoder.
    /// Returns None when the latitude is not a number. NaN and infinities
    /// parse and land in the polar band.
    pub fn classify_raw(lat: &str, country: Option<&str>) -> Option<ClimateInfo> {
        match lat.trim().parse::<f64>().ok() {
            Some(lat) => Some(Self::classify(lat, country)),
            None => {
                log::debug!("Cannot classify climate for latitude {:?}", lat);
                None
            }
        }
    }

    fn is_desert_country(country: &str) -> bool {
        let country = country.to_lowercase();
        DESERT_COUNTRIES.contains(&country.as_str())
    }

    fn info(climate_type: ClimateType) -> ClimateInfo {
        let (best_months, peak_season, description) = match climate_type {
            ClimateType::Tropical => (
                "November–March",
                false,
                "Warm temperatures year-round with wet/dry seasons.",
            ),
            ClimateType::Temperate => (
                "April–June, September–October",
                true,
                "Mild summers and cool winters; shoulder seasons ideal.",
            ),
            ClimateType::Polar => (
                "June–August",
                true,
                "Short summers; extremely cold winters.",
            ),
            ClimateType::Desert => (
                "November–March",
                false,
                "Hot and dry; winter months are most comfortable.",
            ),
        };

        ClimateInfo {
            climate_type,
            best_months: best_months.to_string(),
            peak_season,
            description: description.to_string(),
        }
    }
}
