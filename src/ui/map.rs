//! Leaflet map document with a single marker, embedded through an iframe.

use crate::domain::{Coordinates, MapArtifact};

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
const ATTRIBUTION: &str = "&copy; OpenStreetMap contributors";

pub fn render_map(center: Coordinates, label: &str, zoom: u8) -> MapArtifact {
    let popup = script_string(&escape_html(label));
    let html = format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<link rel="stylesheet" href="{LEAFLET_CSS}">
<script src="{LEAFLET_JS}"></script>
<style>html, body, #map {{ height: 100%; margin: 0; }}</style>
</head>
<body>
<div id="map"></div>
<script>
var map = L.map("map").setView([{lat}, {lng}], {zoom});
L.tileLayer("{TILE_URL}", {{ maxZoom: 19, attribution: "{ATTRIBUTION}" }}).addTo(map);
L.marker([{lat}, {lng}]).addTo(map).bindPopup({popup});
</script>
</body>
</html>
"#,
        lat = center.latitude,
        lng = center.longitude,
    );

    MapArtifact {
        html,
        center,
        zoom,
        label: label.to_string(),
    }
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// JSON string literal that cannot terminate the surrounding script tag.
fn script_string(value: &str) -> String {
    serde_json::Value::from(value)
        .to_string()
        .replace("</", "<\\/")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SF: Coordinates = Coordinates {
        latitude: 37.7936,
        longitude: -122.3958,
    };

    #[test]
    fn centers_and_marks_the_coordinates() {
        let artifact = render_map(SF, "123 MAIN ST, SAN FRANCISCO, CA", 15);

        assert_eq!(artifact.zoom, 15);
        assert_eq!(artifact.center, SF);
        assert!(artifact.html.contains("setView([37.7936, -122.3958], 15)"));
        assert!(artifact.html.contains("L.marker([37.7936, -122.3958])"));
        assert!(artifact
            .html
            .contains(r#"bindPopup("123 MAIN ST, SAN FRANCISCO, CA")"#));
    }

    #[test]
    fn label_cannot_inject_markup() {
        let artifact = render_map(SF, "</script><b>\"x\" & 'y'", 12);

        assert!(!artifact.html.contains("</script><b>"));
        assert!(artifact.html.contains("&lt;/script&gt;&lt;b&gt;"));
        assert!(artifact.html.contains("&amp;"));
        assert_eq!(artifact.label, "</script><b>\"x\" & 'y'");
    }
}
