//! Provider seams for runtime configuration and geo-data.
//!
//! The controller only ever talks to these traits; the HTTP client below is
//! the production implementation and [`SampleGeoData`] carries the bundled
//! city dataset so the engine works without a backend.

use async_trait::async_trait;

use crate::data::models::{ClientConfig, LocationRecord, ZoneRecord};
use crate::Result;

/// Source of the client runtime configuration (mapping-provider credential).
#[async_trait]
pub trait ConfigProvider: Send + Sync {
    async fn fetch_config(&self) -> Result<ClientConfig>;
}

/// Read-only source of the two geo-data collections.
#[async_trait]
pub trait GeoDataProvider: Send + Sync {
    async fn locations(&self) -> Result<Vec<LocationRecord>>;
    async fn zones(&self) -> Result<Vec<ZoneRecord>>;
}

/// HTTP client for the backend's JSON API.
///
/// All three endpoints are plain request/response: no query parameters, no
/// pagination, no auth. Non-2xx statuses and malformed bodies surface as
/// errors for the controller to degrade on.
pub struct HttpApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("GET {}", url);
        let response = self.client.get(&url).send().await?.error_for_status()?;
        Ok(response.json().await?)
    }
}

#[async_trait]
impl ConfigProvider for HttpApi {
    async fn fetch_config(&self) -> Result<ClientConfig> {
        self.get_json("/api/config").await
    }
}

#[async_trait]
impl GeoDataProvider for HttpApi {
    async fn locations(&self) -> Result<Vec<LocationRecord>> {
        self.get_json("/api/locations").await
    }

    async fn zones(&self) -> Result<Vec<ZoneRecord>> {
        self.get_json("/api/zones").await
    }
}

/// The bundled Cali dataset: five points of interest and two zones.
pub struct SampleGeoData;

impl SampleGeoData {
    fn location(
        id: i64,
        name: &str,
        lat: f64,
        lng: f64,
        category: &str,
        description: &str,
    ) -> LocationRecord {
        LocationRecord {
            id,
            name: name.to_string(),
            lat,
            lng,
            category: category.to_string(),
            description: description.to_string(),
        }
    }
}

#[async_trait]
impl GeoDataProvider for SampleGeoData {
    async fn locations(&self) -> Result<Vec<LocationRecord>> {
        Ok(vec![
            Self::location(
                1,
                "Icesi Universidad",
                3.3421,
                -76.5308,
                "university",
                "Universidad Icesi - Cali, Colombia",
            ),
            Self::location(
                2,
                "Torre de Cali",
                3.4372,
                -76.5225,
                "landmark",
                "Edificio emblemático de Cali",
            ),
            Self::location(
                3,
                "Parque del Perro",
                3.3778,
                -76.5330,
                "park",
                "Zona gastronómica y recreativa",
            ),
            Self::location(
                4,
                "Cristo Rey",
                3.4212,
                -76.5562,
                "monument",
                "Monumento icónico de Cali",
            ),
            Self::location(5, "Zoológico de Cali", 3.4448, -76.5372, "zoo", "Zoológico de Cali"),
        ])
    }

    async fn zones(&self) -> Result<Vec<ZoneRecord>> {
        Ok(vec![
            ZoneRecord {
                id: 1,
                name: "Centro Histórico".to_string(),
                coordinates: vec![
                    [3.4516, -76.5319],
                    [3.4516, -76.5250],
                    [3.4380, -76.5250],
                    [3.4380, -76.5319],
                ],
                color: "#FF6B6B".to_string(),
                description: "Centro histórico de Cali".to_string(),
            },
            ZoneRecord {
                id: 2,
                name: "Zona Universitaria".to_string(),
                coordinates: vec![
                    [3.3500, -76.5350],
                    [3.3500, -76.5250],
                    [3.3350, -76.5250],
                    [3.3350, -76.5350],
                ],
                color: "#4ECDC4".to_string(),
                description: "Área universitaria".to_string(),
            },
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_api_normalizes_trailing_slash() {
        let api = HttpApi::new("http://localhost:3001/");
        assert_eq!(api.base_url, "http://localhost:3001");
    }

    #[tokio::test]
    async fn test_sample_dataset_shape() {
        let locations = SampleGeoData.locations().await.unwrap();
        assert_eq!(locations.len(), 5);
        assert_eq!(locations[0].category, "university");

        let zones = SampleGeoData.zones().await.unwrap();
        assert_eq!(zones.len(), 2);
        assert_eq!(zones[0].name, "Centro Histórico");
        assert_eq!(zones[1].color, "#4ECDC4");
        assert!(zones.iter().all(|z| z.coordinates.len() >= 3));
    }
}
