use crate::core::constants::{OSM_MAX_ZOOM, TILE_SIZE};
use crate::core::geo::TileCoord;

/// Trait representing anything that can produce tile URLs for a given coordinate.
pub trait TileSource: Send + Sync {
    /// Build a URL for the requested `coord`.
    fn url(&self, coord: TileCoord) -> String;

    /// Attribution line the renderer must display for this source.
    fn attribution(&self) -> &str;

    /// Highest zoom level this source serves.
    fn max_zoom(&self) -> u8 {
        OSM_MAX_ZOOM
    }

    /// Square tile edge in pixels.
    fn tile_size(&self) -> u32 {
        TILE_SIZE
    }
}

/// Simple implementation that hits the default OpenStreetMap tile server.
pub struct OpenStreetMapSource {
    subdomains: Vec<&'static str>,
}

impl OpenStreetMapSource {
    pub fn new() -> Self {
        Self {
            subdomains: vec!["a", "b", "c"],
        }
    }
}

impl Default for OpenStreetMapSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TileSource for OpenStreetMapSource {
    fn url(&self, coord: TileCoord) -> String {
        // Guard against empty subdomain list (should not happen, but be safe)
        if self.subdomains.is_empty() {
            return format!(
                "https://tile.openstreetmap.org/{}/{}/{}.png",
                coord.z, coord.x, coord.y
            );
        }

        let idx = ((coord.x + coord.y) % self.subdomains.len() as u32) as usize;
        let sub = self.subdomains[idx];
        format!(
            "https://{}.tile.openstreetmap.org/{}/{}/{}.png",
            sub, coord.z, coord.x, coord.y
        )
    }

    fn attribution(&self) -> &str {
        "© OpenStreetMap contributors"
    }
}

/// Google map flavors available through the mutant-style bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GoogleMapType {
    Roadmap,
    Satellite,
    Hybrid,
    Terrain,
}

impl GoogleMapType {
    /// The `lyrs` code Google's tile endpoint expects for this flavor.
    fn lyrs(&self) -> &'static str {
        match self {
            GoogleMapType::Roadmap => "m",
            GoogleMapType::Satellite => "s",
            GoogleMapType::Hybrid => "y",
            GoogleMapType::Terrain => "p",
        }
    }
}

/// Tile source that delegates to the Google Maps SDK the same way
/// Leaflet's `gridLayer.googleMutant` does. Only constructible once the
/// SDK bridge has negotiated a credential.
pub struct GoogleMutantSource {
    map_type: GoogleMapType,
}

impl GoogleMutantSource {
    pub fn new(map_type: GoogleMapType) -> Self {
        Self { map_type }
    }

    pub fn map_type(&self) -> GoogleMapType {
        self.map_type
    }
}

impl TileSource for GoogleMutantSource {
    fn url(&self, coord: TileCoord) -> String {
        let server = (coord.x + coord.y) % 4;
        format!(
            "https://mt{}.google.com/vt/lyrs={}&x={}&y={}&z={}",
            server,
            self.map_type.lyrs(),
            coord.x,
            coord.y,
            coord.z
        )
    }

    fn attribution(&self) -> &str {
        "Map data © Google"
    }

    fn max_zoom(&self) -> u8 {
        21
    }
}
