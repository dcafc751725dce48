use geo::{CoordsIter, LineString, MultiPolygon};

/// Build a compact SVG path string for a MultiPolygon (exteriors + holes).
pub(super) fn multipolygon_to_path(shape: &MultiPolygon<f64>, project: &impl Fn(&geo::Coord<f64>) -> (f64, f64)) -> String {
    let mut out = String::new();

    for polygon in &shape.0 {
        out.push_str(&ring_to_path(polygon.exterior(), project));
        for interior in polygon.interiors() {
            out.push_str(&ring_to_path(interior, project));
        }
    }

    out.trim_start().to_string()
}

fn ring_to_path(ring: &LineString<f64>, project: &impl Fn(&geo::Coord<f64>) -> (f64, f64)) -> String {
    let mut out = String::new();

    let mut coords = ring.coords_iter().map(|coord| project(&coord));
    if let Some((x, y)) = coords.next() {
        out.push_str(&format!(" M{x:.3},{y:.3}"));
        for (x, y) in coords {
            out.push_str(&format!(" L{x:.3},{y:.3}"));
        }
        out.push('Z');
    }

    out
}

/// Escape text for use inside XML content or attribute values.
pub(super) fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}
