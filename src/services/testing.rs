// src/services/testing.rs
// DOCUMENTATION: In-process stand-ins for the upstream clients
// PURPOSE: Drive the trip service and handlers without network access

use crate::errors::TripError;
use crate::models::{Attraction, GeoResult};
use crate::services::{Geocoder, LandmarkSearch};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Shared call count, readable after the stub moved into a service
#[derive(Clone, Default)]
pub struct CallCounter(Arc<AtomicUsize>);

impl CallCounter {
    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    fn hit(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

pub fn paris() -> GeoResult {
    GeoResult {
        lat: Some("48.8566".to_string()),
        lon: Some("2.3522".to_string()),
        country: Some("France".to_string()),
        display_name: Some("Paris, Île-de-France, France".to_string()),
    }
}

pub struct StubGeocoder {
    result: Result<GeoResult, TripError>,
    calls: CallCounter,
}

impl StubGeocoder {
    pub fn resolving(geo: GeoResult) -> Self {
        Self {
            result: Ok(geo),
            calls: CallCounter::default(),
        }
    }

    pub fn failing(error: TripError) -> Self {
        Self {
            result: Err(error),
            calls: CallCounter::default(),
        }
    }

    pub fn calls(&self) -> CallCounter {
        self.calls.clone()
    }
}

#[async_trait]
impl Geocoder for StubGeocoder {
    async fn resolve(&self, _place: &str) -> Result<GeoResult, TripError> {
        self.calls.hit();
        self.result.clone()
    }
}

pub struct StubLandmarks {
    result: Result<Vec<Attraction>, TripError>,
    calls: CallCounter,
}

impl StubLandmarks {
    pub fn returning(attractions: Vec<Attraction>) -> Self {
        Self {
            result: Ok(attractions),
            calls: CallCounter::default(),
        }
    }

    pub fn failing(error: TripError) -> Self {
        Self {
            result: Err(error),
            calls: CallCounter::default(),
        }
    }

    pub fn calls(&self) -> CallCounter {
        self.calls.clone()
    }
}

#[async_trait]
impl LandmarkSearch for StubLandmarks {
    async fn nearby(&self, _lat: &str, _lon: &str) -> Result<Vec<Attraction>, TripError> {
        self.calls.hit();
        self.result.clone()
    }
}
