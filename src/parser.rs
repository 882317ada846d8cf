use std::borrow::Cow;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::Gpx2StatsError;
use crate::track::TrackPoint;

type Result<T> = std::result::Result<T, Gpx2StatsError>;

/// Parse the track-point sequence out of a GPX XML string.
///
/// Collects every `trkpt` in document order, flattening across tracks and
/// segments. If the document holds no `trkpt` at all, falls back to the
/// `rtept` route points instead. Element names are matched by local name,
/// so the namespace declared on the root (GPX 1.0, 1.1, or none) is
/// irrelevant. Points with missing or unparseable coordinates are dropped;
/// a point with an unreadable elevation is kept without one.
pub fn parse_track_points(xml: &str) -> Result<Vec<TrackPoint>> {
    let mut reader = Reader::from_str(xml);
    let mut track_points = Vec::new();
    let mut route_points = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.local_name().as_ref() {
                b"trkpt" => {
                    if let Some(pt) = parse_point(&e, &mut reader)? {
                        track_points.push(pt);
                    }
                }
                b"rtept" => {
                    if let Some(pt) = parse_point(&e, &mut reader)? {
                        route_points.push(pt);
                    }
                }
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.local_name().as_ref() {
                b"trkpt" => {
                    if let Ok((lat, lon)) = parse_lat_lon(&e) {
                        track_points.push(TrackPoint::new(lat, lon));
                    }
                }
                b"rtept" => {
                    if let Ok((lat, lon)) = parse_lat_lon(&e) {
                        route_points.push(TrackPoint::new(lat, lon));
                    }
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(Gpx2StatsError::XmlParse(e)),
            _ => {}
        }
    }

    if track_points.is_empty() {
        Ok(route_points)
    } else {
        Ok(track_points)
    }
}

/// Decode raw document bytes as UTF-8, falling back to Latin-1 for
/// legacy exports whose bytes are not valid UTF-8.
pub fn decode_document(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(s) => Cow::Borrowed(s),
        Err(_) => Cow::Owned(bytes.iter().map(|&b| b as char).collect()),
    }
}

/// Parse lat/lon attributes from a point element's start tag.
fn parse_lat_lon(e: &BytesStart<'_>) -> Result<(f64, f64)> {
    let mut lat: Option<f64> = None;
    let mut lon: Option<f64> = None;

    for attr_result in e.attributes() {
        let attr = attr_result.map_err(|e| Gpx2StatsError::XmlParse(e.into()))?;
        let key = attr.key.local_name();
        let val = std::str::from_utf8(&attr.value).unwrap_or_default();
        match key.as_ref() {
            b"lat" => {
                lat = Some(parse_coordinate(val, "lat", 90.0)?);
            }
            b"lon" => {
                lon = Some(parse_coordinate(val, "lon", 180.0)?);
            }
            _ => {}
        }
    }

    let lat = lat.ok_or(Gpx2StatsError::MissingAttribute {
        element: "point",
        attribute: "lat",
    })?;
    let lon = lon.ok_or(Gpx2StatsError::MissingAttribute {
        element: "point",
        attribute: "lon",
    })?;

    Ok((lat, lon))
}

/// Parse one coordinate attribute, rejecting values outside ±limit degrees.
fn parse_coordinate(val: &str, attribute: &'static str, limit: f64) -> Result<f64> {
    match val.trim().parse::<f64>() {
        Ok(v) if v.abs() <= limit => Ok(v),
        _ => Err(Gpx2StatsError::InvalidAttribute {
            element: "point",
            attribute,
            value: val.to_string(),
        }),
    }
}

/// Parse a point element (trkpt, rtept) and its children.
/// Called after receiving Event::Start for the point element.
fn parse_point<'a>(
    start: &BytesStart<'a>,
    reader: &mut Reader<&'a [u8]>,
) -> Result<Option<TrackPoint>> {
    let (lat, lon) = match parse_lat_lon(start) {
        Ok(coords) => coords,
        Err(_) => {
            // Skip this point if lat/lon are missing or invalid
            reader
                .read_to_end(start.name())
                .map_err(Gpx2StatsError::XmlParse)?;
            return Ok(None);
        }
    };

    let mut point = TrackPoint::new(lat, lon);
    let end_name = start.name().0.to_vec(); // own the end tag name for comparison

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.local_name().as_ref() {
                b"ele" => {
                    let text = reader
                        .read_text(e.name())
                        .map_err(Gpx2StatsError::XmlParse)?;
                    point.ele = text.trim().parse::<f64>().ok();
                }
                _ => {
                    // Skip time/extensions/anything else
                    reader
                        .read_to_end(e.name())
                        .map_err(Gpx2StatsError::XmlParse)?;
                }
            },
            Ok(Event::End(e)) if e.name().0 == end_name.as_slice() => break,
            Ok(Event::Eof) => break,
            Err(e) => return Err(Gpx2StatsError::XmlParse(e)),
            _ => {}
        }
    }

    Ok(Some(point))
}
