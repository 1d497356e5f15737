use serde::{Deserialize, Serialize};

/// A latitude/longitude pair attached to a clock event.
/// Stored as `{ "lat": .., "lng": .. }`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GeoPoint {
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lng")]
    pub longitude: f64,
}

impl GeoPoint {
    /// Build a point, rejecting values outside the WGS84 ranges.
    pub fn new(latitude: f64, longitude: f64) -> Option<Self> {
        let lat_ok = latitude.is_finite() && (-90.0..=90.0).contains(&latitude);
        let lng_ok = longitude.is_finite() && (-180.0..=180.0).contains(&longitude);
        if lat_ok && lng_ok {
            Some(Self {
                latitude,
                longitude,
            })
        } else {
            None
        }
    }

    pub fn describe(&self) -> String {
        format!("{:.5}, {:.5}", self.latitude, self.longitude)
    }
}
