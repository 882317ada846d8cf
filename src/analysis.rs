use crate::options::AnalyzeOptions;
use crate::track::{TrackPoint, TrackStatistics};

/// Spherical-Earth radius used by the haversine formula, in meters.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Width of the centered moving-average window applied to elevation
/// samples before ascent is accumulated. The window shrinks at the
/// sequence boundaries instead of wrapping or padding.
const SMOOTHING_WINDOW: usize = 5;

/// Assemble the statistics record for a parsed point sequence.
///
/// Unit conversion and rounding happen here, at the output boundary:
/// distance becomes kilometers with 2 decimals, gain whole meters.
pub fn to_track_statistics(points: &[TrackPoint], opts: &AnalyzeOptions) -> TrackStatistics {
    TrackStatistics {
        distance_km: total_distance_m(points).map(|m| round_to(m / 1000.0, 2)),
        elevation_gain_m: elevation_gain_m(points).map(f64::round),
        center_point: center_point(points).cloned(),
        points: opts
            .include_points
            .then(|| points.iter().map(|pt| export_point(pt, opts)).collect()),
    }
}

/// Total path length in meters: the sum of great-circle distances between
/// consecutive points. Fewer than 2 points means there is no segment to
/// measure, so the result is absent rather than zero.
pub fn total_distance_m(points: &[TrackPoint]) -> Option<f64> {
    if points.len() < 2 {
        return None;
    }
    Some(points.windows(2).map(|w| haversine_m(&w[0], &w[1])).sum())
}

/// Gross ascent in meters over the smoothed elevation profile.
///
/// Points without an elevation are excluded from the profile, not
/// zero-filled. Returns `None` when fewer than 2 elevation samples exist
/// or when no climb was accumulated at all, so callers can distinguish
/// "no meaningful climb" from a measured value.
pub fn elevation_gain_m(points: &[TrackPoint]) -> Option<f64> {
    let elevations: Vec<f64> = points.iter().filter_map(|pt| pt.ele).collect();
    if elevations.len() < 2 {
        return None;
    }

    let smoothed = moving_average(&elevations, SMOOTHING_WINDOW);

    let mut gain = 0.0;
    for w in smoothed.windows(2) {
        let delta = w[1] - w[0];
        if delta > 0.0 {
            gain += delta;
        }
    }

    (gain > 0.0).then_some(gain)
}

/// The sequence's middle point, a cheap representative location for
/// seeding geocoding. Not a centroid.
pub fn center_point(points: &[TrackPoint]) -> Option<&TrackPoint> {
    points.get(points.len() / 2)
}

/// Great-circle distance between two points in meters (haversine).
fn haversine_m(a: &TrackPoint, b: &TrackPoint) -> f64 {
    let phi1 = a.lat.to_radians();
    let phi2 = b.lat.to_radians();
    let dphi = (b.lat - a.lat).to_radians();
    let dlambda = (b.lon - a.lon).to_radians();

    let h = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    // float error can push h a hair outside [0, 1] for antipodal or
    // near-identical points
    let h = h.clamp(0.0, 1.0);

    EARTH_RADIUS_M * 2.0 * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Centered moving average with the window clipped at both ends of the
/// sequence, so edge windows average fewer samples.
fn moving_average(values: &[f64], window: usize) -> Vec<f64> {
    let half = window / 2;
    (0..values.len())
        .map(|i| {
            let start = i.saturating_sub(half);
            let end = (i + half + 1).min(values.len());
            let sum: f64 = values[start..end].iter().sum();
            sum / (end - start) as f64
        })
        .collect()
}

/// Build the exported copy of a point: coordinates rounded to 6 decimals,
/// elevation to 1, to keep the serialized list compact.
fn export_point(pt: &TrackPoint, opts: &AnalyzeOptions) -> TrackPoint {
    TrackPoint {
        lat: round_to(pt.lat, 6),
        lon: round_to(pt.lon, 6),
        ele: opts
            .include_elevation
            .then_some(pt.ele.map(|e| round_to(e, 1)))
            .flatten(),
    }
}

fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
