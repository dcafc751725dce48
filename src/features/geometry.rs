//! GeoJSON geometry → `geo` conversion for polygonal features.

use geo::{Coord, LineString, MultiPolygon, Polygon};
use serde_json::Value;

/// Parse a GeoJSON geometry object.
/// Returns `Ok(None)` for null and non-polygonal geometry types.
pub(super) fn parse_geometry(geometry: &Value) -> Result<Option<MultiPolygon<f64>>, String> {
    if geometry.is_null() { return Ok(None) }

    let coords = geometry.get("coordinates");
    match geometry.get("type").and_then(Value::as_str) {
        Some("Polygon") => {
            let rings = coords.and_then(Value::as_array)
                .ok_or("Polygon without coordinate array")?;
            Ok(Some(MultiPolygon(vec![parse_polygon(rings)?])))
        }
        Some("MultiPolygon") => {
            let polygons = coords.and_then(Value::as_array)
                .ok_or("MultiPolygon without coordinate array")?;
            let polygons = polygons.iter()
                .map(|polygon| parse_polygon(polygon.as_array().ok_or("polygon is not an array")?))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Some(MultiPolygon(polygons)))
        }
        Some(_) => Ok(None),
        None => Err("geometry without type".into()),
    }
}

/// Parse `[exterior, hole, hole, ...]` into a polygon.
fn parse_polygon(rings: &[Value]) -> Result<Polygon<f64>, String> {
    let mut rings = rings.iter()
        .map(|ring| parse_ring(ring.as_array().ok_or("ring is not an array")?));
    let exterior = rings.next().ok_or("polygon without exterior ring")??;
    let interiors = rings.collect::<Result<Vec<_>, _>>()?;
    Ok(Polygon::new(exterior, interiors))
}

/// Parse `[[x, y], ...]`, closing the ring if needed.
fn parse_ring(coords: &[Value]) -> Result<LineString<f64>, String> {
    let mut points = coords.iter()
        .map(|pair| {
            let pair = pair.as_array().ok_or("position is not an array")?;
            match (pair.first().and_then(Value::as_f64), pair.get(1).and_then(Value::as_f64)) {
                (Some(x), Some(y)) => Ok(Coord { x, y }),
                _ => Err(String::from("position without numeric x/y")),
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
        if first != last { points.push(first) }
    }

    Ok(LineString(points))
}
