//! Prelude module for common citymap types and traits
//!
//! Re-exports the most commonly used types for easy importing with
//! `use citymap::prelude::*;`

pub use crate::core::{
    constants::{DEFAULT_CENTER, DEFAULT_ZOOM, MARKER_JITTER_DEG},
    controller::{MapController, MapOptions},
    geo::{LatLng, TileCoord},
    viewport::{ScaleControl, Viewport},
};

pub use crate::layers::{
    base::{BaseLayer, BaseLayerId},
    icons::{Category, DivIcon, IconRegistry},
    marker::MarkerOverlay,
    overlay::OverlayGroup,
    registry::{BaseLayerRegistry, SwitchOutcome},
    zone::{ZoneOverlay, ZoneStyle},
};

pub use crate::data::{
    models::{ClientConfig, LocationRecord, ZoneRecord},
    provider::{ConfigProvider, GeoDataProvider, HttpApi, SampleGeoData},
};

pub use crate::bridge::{NullBridge, ProviderBridge, SdkBridge};

pub use crate::input::events::{MapEvent, UiCommand};

pub use crate::panel::{DataKind, Fact, InfoPanel, InfoPanelSink};

pub use crate::tiles::source::{
    GoogleMapType, GoogleMutantSource, OpenStreetMapSource, TileSource,
};

pub use crate::{Error as MapError, Result};

pub use std::sync::Arc;

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
