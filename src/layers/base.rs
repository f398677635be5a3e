use std::str::FromStr;

use crate::tiles::source::TileSource;

/// Closed set of base-layer identifiers the viewer knows about.
///
/// `Osm` is always registered; the Google variants exist in the registry
/// only when startup negotiation obtained a credential and the provider
/// bridge is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseLayerId {
    Osm,
    GoogleRoadmap,
    GoogleSatellite,
    GoogleHybrid,
    GoogleTerrain,
}

impl BaseLayerId {
    pub const ALL: [BaseLayerId; 5] = [
        BaseLayerId::Osm,
        BaseLayerId::GoogleRoadmap,
        BaseLayerId::GoogleSatellite,
        BaseLayerId::GoogleHybrid,
        BaseLayerId::GoogleTerrain,
    ];

    /// Whether this id belongs to the credential-gated Google family.
    pub fn is_google(&self) -> bool {
        !matches!(self, BaseLayerId::Osm)
    }
}

impl std::fmt::Display for BaseLayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BaseLayerId::Osm => write!(f, "osm"),
            BaseLayerId::GoogleRoadmap => write!(f, "google-roadmap"),
            BaseLayerId::GoogleSatellite => write!(f, "google-satellite"),
            BaseLayerId::GoogleHybrid => write!(f, "google-hybrid"),
            BaseLayerId::GoogleTerrain => write!(f, "google-terrain"),
        }
    }
}

impl FromStr for BaseLayerId {
    type Err = crate::MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "osm" => Ok(BaseLayerId::Osm),
            "google-roadmap" => Ok(BaseLayerId::GoogleRoadmap),
            "google-satellite" => Ok(BaseLayerId::GoogleSatellite),
            "google-hybrid" => Ok(BaseLayerId::GoogleHybrid),
            "google-terrain" => Ok(BaseLayerId::GoogleTerrain),
            other => Err(crate::MapError::LayerUnavailable(other.to_string())),
        }
    }
}

/// A registered background layer: an id plus the tile source that feeds it.
pub struct BaseLayer {
    id: BaseLayerId,
    source: Box<dyn TileSource>,
}

impl BaseLayer {
    pub fn new(id: BaseLayerId, source: Box<dyn TileSource>) -> Self {
        Self { id, source }
    }

    pub fn id(&self) -> BaseLayerId {
        self.id
    }

    pub fn source(&self) -> &dyn TileSource {
        self.source.as_ref()
    }
}
