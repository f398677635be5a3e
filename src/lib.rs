//! # Citymap
//!
//! A Rust-native city-map viewer engine inspired by Leaflet.
//!
//! The heart of the crate is [`MapController`]: it owns the single map
//! viewport, the base-layer registry, the marker and zone overlay groups,
//! and the info panel, and it coordinates the asynchronous loading of
//! runtime configuration, the optional premium tile SDK, and geo-data.

pub mod bridge;
pub mod core;
pub mod data;
pub mod input;
pub mod layers;
pub mod panel;
pub mod tiles;
pub mod prelude;
pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    controller::{MapController, MapOptions},
    geo::LatLng,
    viewport::Viewport,
};

pub use layers::{
    base::{BaseLayer, BaseLayerId},
    icons::{Category, DivIcon, IconRegistry},
    marker::MarkerOverlay,
    overlay::OverlayGroup,
    registry::{BaseLayerRegistry, SwitchOutcome},
    zone::ZoneOverlay,
};

pub use input::events::{MapEvent, UiCommand};

pub use panel::{DataKind, Fact, InfoPanel, InfoPanelSink};

pub use data::{
    models::{ClientConfig, LocationRecord, ZoneRecord},
    provider::{ConfigProvider, GeoDataProvider, HttpApi, SampleGeoData},
};

pub use bridge::{NullBridge, ProviderBridge, SdkBridge};

pub use tiles::source::{GoogleMapType, GoogleMutantSource, OpenStreetMapSource, TileSource};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration unavailable: {0}")]
    ConfigUnavailable(String),

    #[error("Provider SDK failed to load: {0}")]
    SdkLoadFailed(String),

    #[error("Base layer unavailable: {0}")]
    LayerUnavailable(String),

    #[error("Geo-data load failed: {0}")]
    DataLoadFailed(String),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),
}

/// Error type alias for convenience
pub type Error = MapError;
