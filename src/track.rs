use serde::Serialize;

/// A single recorded track point.
#[derive(Debug, Clone, Serialize)]
pub struct TrackPoint {
    pub lat: f64,
    pub lon: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ele: Option<f64>,
}

impl TrackPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            lat,
            lon,
            ele: None,
        }
    }
}

/// Summary statistics derived from a track.
///
/// Every field is optional: an absent field means the corresponding value
/// could not be measured (too few points, no elevation data, unreadable
/// document), which is distinct from a measured zero. Absent fields are
/// omitted entirely when serialized.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackStatistics {
    /// Total path length in kilometers, rounded to 2 decimals.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,

    /// Gross ascent in meters, rounded to the nearest meter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elevation_gain_m: Option<f64>,

    /// The middle point of the sequence, used to seed geocoding lookups.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center_point: Option<TrackPoint>,

    /// The parsed point sequence, coordinates rounded for map rendering.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<Vec<TrackPoint>>,
}
