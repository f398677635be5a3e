//! Serde mirrors of the three JSON API payloads the backend serves.

use serde::{Deserialize, Serialize};

use crate::core::geo::LatLng;

/// Runtime configuration handed to the client by `GET /api/config`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ClientConfig {
    #[serde(rename = "googleMapsApiKey", default)]
    pub google_maps_api_key: String,
}

impl ClientConfig {
    /// The no-credential configuration used when the config fetch fails.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether a usable mapping-provider credential was obtained.
    pub fn has_credential(&self) -> bool {
        !self.google_maps_api_key.is_empty()
    }
}

/// One point of interest from `GET /api/locations`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub id: i64,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(rename = "type")]
    pub category: String,
    pub description: String,
}

impl LocationRecord {
    pub fn position(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }
}

/// One polygonal zone from `GET /api/zones`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneRecord {
    pub id: i64,
    pub name: String,
    /// Ordered `[lat, lng]` vertex pairs forming a closed polygon.
    pub coordinates: Vec<[f64; 2]>,
    pub color: String,
    pub description: String,
}

impl ZoneRecord {
    pub fn vertices(&self) -> Vec<LatLng> {
        self.coordinates
            .iter()
            .map(|pair| LatLng::new(pair[0], pair[1]))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_parses_wire_name() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"googleMapsApiKey": "abc123"}"#).unwrap();
        assert_eq!(config.google_maps_api_key, "abc123");
        assert!(config.has_credential());
    }

    #[test]
    fn test_config_defaults_to_no_credential() {
        let config: ClientConfig = serde_json::from_str("{}").unwrap();
        assert!(!config.has_credential());
        assert_eq!(config, ClientConfig::empty());
    }

    #[test]
    fn test_location_record_parses() {
        let json = r#"{
            "id": 1,
            "name": "Icesi Universidad",
            "lat": 3.3421,
            "lng": -76.5308,
            "type": "university",
            "description": "Universidad Icesi - Cali, Colombia"
        }"#;
        let record: LocationRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.category, "university");
        assert_eq!(record.position(), LatLng::new(3.3421, -76.5308));
    }

    #[test]
    fn test_zone_record_vertices() {
        let json = r##"{
            "id": 1,
            "name": "Centro Histórico",
            "coordinates": [[3.4516, -76.5319], [3.4516, -76.5250], [3.4380, -76.5250]],
            "color": "#FF6B6B",
            "description": "Centro histórico de Cali"
        }"##;
        let record: ZoneRecord = serde_json::from_str(json).unwrap();
        let vertices = record.vertices();
        assert_eq!(vertices.len(), 3);
        assert_eq!(vertices[0], LatLng::new(3.4516, -76.5319));
    }
}
