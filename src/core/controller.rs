use std::sync::Arc;

use rand::Rng;

use crate::{
    bridge::ProviderBridge,
    core::{
        constants::{DEFAULT_CENTER, DEFAULT_ZOOM, MARKER_JITTER_DEG},
        geo::LatLng,
        viewport::{ScaleControl, Viewport},
    },
    data::{
        models::ClientConfig,
        provider::{ConfigProvider, GeoDataProvider},
    },
    input::events::{MapEvent, UiCommand},
    layers::{
        base::{BaseLayer, BaseLayerId},
        marker::MarkerOverlay,
        overlay::OverlayGroup,
        registry::{BaseLayerRegistry, SwitchOutcome},
        zone::ZoneOverlay,
    },
    panel::{DataKind, Fact, InfoPanelSink},
    tiles::source::{GoogleMapType, GoogleMutantSource, OpenStreetMapSource},
};

#[derive(Debug, Clone)]
pub struct MapOptions {
    pub center: LatLng,
    pub zoom: f64,
    pub scale_control: ScaleControl,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            scale_control: ScaleControl::default(),
        }
    }
}

/// The map-state controller: single owner of the viewport, the base-layer
/// registry, both overlay groups and the info panel wiring.
///
/// A controller only exists after [`MapController::start`] has run the full
/// startup negotiation, so every method can rely on an initialized
/// viewport. All mutation goes through `&mut self`; only network-bound
/// operations are async.
pub struct MapController {
    viewport: Viewport,
    base_layers: BaseLayerRegistry,
    markers: OverlayGroup<MarkerOverlay>,
    zones: OverlayGroup<ZoneOverlay>,
    config: ClientConfig,
    data: Arc<dyn GeoDataProvider>,
    panel: Arc<dyn InfoPanelSink>,
}

impl MapController {
    /// Runs the strictly ordered startup sequence and returns the ready
    /// controller. Never fails: a lost config fetch or SDK load degrades to
    /// the default tile layer instead of aborting.
    pub async fn start(
        config_provider: Arc<dyn ConfigProvider>,
        data: Arc<dyn GeoDataProvider>,
        bridge: Arc<dyn ProviderBridge>,
        panel: Arc<dyn InfoPanelSink>,
    ) -> Self {
        Self::start_with_options(config_provider, data, bridge, panel, MapOptions::default())
            .await
    }

    pub async fn start_with_options(
        config_provider: Arc<dyn ConfigProvider>,
        data: Arc<dyn GeoDataProvider>,
        bridge: Arc<dyn ProviderBridge>,
        panel: Arc<dyn InfoPanelSink>,
        options: MapOptions,
    ) -> Self {
        // 1. Runtime configuration. A failed fetch means no credential,
        //    not a failed startup.
        let config = match config_provider.fetch_config().await {
            Ok(config) => config,
            Err(e) => {
                log::error!("config fetch failed: {}; continuing without credential", e);
                ClientConfig::empty()
            }
        };

        // 2. The always-available default layer.
        let mut base_layers = BaseLayerRegistry::new();
        base_layers.register(BaseLayer::new(
            BaseLayerId::Osm,
            Box::new(OpenStreetMapSource::new()),
        ));

        // 3. Premium layers, gated on both the credential and the bridge
        //    capability. An SDK load failure leaves only the default layer.
        if config.has_credential() && bridge.is_available() {
            match bridge.load_sdk(&config.google_maps_api_key).await {
                Ok(()) => {
                    base_layers.register(BaseLayer::new(
                        BaseLayerId::GoogleRoadmap,
                        Box::new(GoogleMutantSource::new(GoogleMapType::Roadmap)),
                    ));
                    base_layers.register(BaseLayer::new(
                        BaseLayerId::GoogleSatellite,
                        Box::new(GoogleMutantSource::new(GoogleMapType::Satellite)),
                    ));
                    base_layers.register(BaseLayer::new(
                        BaseLayerId::GoogleHybrid,
                        Box::new(GoogleMutantSource::new(GoogleMapType::Hybrid)),
                    ));
                    base_layers.register(BaseLayer::new(
                        BaseLayerId::GoogleTerrain,
                        Box::new(GoogleMutantSource::new(GoogleMapType::Terrain)),
                    ));
                    log::info!("premium base layers configured");
                }
                Err(e) => {
                    log::warn!("provider SDK load failed: {}; default layer only", e);
                }
            }
        }

        // 4. Viewport at the default view, default layer mounted, both
        //    overlay groups empty, scale control attached.
        let viewport =
            Viewport::new(options.center, options.zoom).with_scale_control(options.scale_control);
        base_layers.switch(BaseLayerId::Osm);
        log::info!("map initialized at {} zoom {}", viewport.center(), viewport.zoom());

        Self {
            viewport,
            base_layers,
            markers: OverlayGroup::new(),
            zones: OverlayGroup::new(),
            config,
            data,
            panel,
        }
    }

    /// Dispatches one UI command to its state transition.
    pub async fn handle_command(&mut self, command: UiCommand) {
        match command {
            UiCommand::SelectBaseLayer(id) => self.switch_base_layer(id),
            UiCommand::LoadLocations => self.load_markers().await,
            UiCommand::LoadZones => self.load_zones().await,
            UiCommand::AddCustomMarker => self.add_custom_marker(),
            UiCommand::ClearMap => self.clear_map(),
        }
    }

    /// Handles an event coming back from the map surface. Overlay clicks
    /// publish the clicked item's full detail to the info panel; an index
    /// for an overlay that no longer exists (e.g. cleared since the render)
    /// is logged and ignored.
    pub fn handle_event(&mut self, event: MapEvent) {
        match event {
            MapEvent::Click { position } => {
                self.panel.publish(Fact::Click { position });
            }
            MapEvent::MarkerClick { index } => match self.markers.get(index) {
                Some(marker) => self.panel.publish(marker.on_click()),
                None => log::warn!("click on missing marker overlay {}", index),
            },
            MapEvent::ZoneClick { index } => match self.zones.get(index) {
                Some(zone) => self.panel.publish(zone.on_click()),
                None => log::warn!("click on missing zone overlay {}", index),
            },
        }
    }

    /// Switches the mounted base layer. An unavailable id detaches the
    /// current layer and surfaces a warning rather than leaving stale
    /// tiles visible.
    pub fn switch_base_layer(&mut self, requested: BaseLayerId) {
        match self.base_layers.switch(requested) {
            SwitchOutcome::Mounted(_) => {}
            SwitchOutcome::Unavailable(_) => {
                self.panel.publish(Fact::LayerUnavailable);
            }
        }
    }

    /// Fetches the location collection and renders one marker per valid
    /// record. Transport and parse failures leave the group untouched;
    /// individually malformed records are skipped with a warning and do not
    /// count toward the confirmation.
    pub async fn load_markers(&mut self) {
        let records = match self.data.locations().await {
            Ok(records) => records,
            Err(e) => {
                log::error!("locations fetch failed: {}", e);
                self.panel.publish(Fact::LoadFailed(DataKind::Locations));
                return;
            }
        };

        let mut loaded = 0;
        for record in &records {
            match MarkerOverlay::from_record(record) {
                Ok(marker) => {
                    self.markers.add(marker);
                    loaded += 1;
                }
                Err(e) => log::warn!("skipping malformed location: {}", e),
            }
        }

        self.panel.publish(Fact::MarkersLoaded(loaded));
    }

    /// Fetches the zone collection; structurally identical to
    /// [`load_markers`](Self::load_markers) with polygon construction.
    pub async fn load_zones(&mut self) {
        let records = match self.data.zones().await {
            Ok(records) => records,
            Err(e) => {
                log::error!("zones fetch failed: {}", e);
                self.panel.publish(Fact::LoadFailed(DataKind::Zones));
                return;
            }
        };

        let mut loaded = 0;
        for record in &records {
            match ZoneOverlay::from_record(record) {
                Ok(zone) => {
                    self.zones.add(zone);
                    loaded += 1;
                }
                Err(e) => log::warn!("skipping malformed zone: {}", e),
            }
        }

        self.panel.publish(Fact::ZonesLoaded(loaded));
    }

    /// Drops a `Custom` marker at a random offset within
    /// [`MARKER_JITTER_DEG`] of the current viewport center.
    pub fn add_custom_marker(&mut self) {
        let center = self.viewport.center();
        let mut rng = rand::thread_rng();
        // Jitter near the antimeridian or the poles must still yield a
        // renderable position.
        let position = LatLng::new(
            LatLng::clamp_lat(center.lat + rng.gen_range(-MARKER_JITTER_DEG..=MARKER_JITTER_DEG)),
            LatLng::wrap_lng(center.lng + rng.gen_range(-MARKER_JITTER_DEG..=MARKER_JITTER_DEG)),
        );

        self.markers.add(MarkerOverlay::custom(position));
        self.panel.publish(Fact::MarkerAdded { position });
    }

    /// Clears both overlay groups. Base-layer state is untouched.
    pub fn clear_map(&mut self) {
        self.markers.clear();
        self.zones.clear();
        self.panel.publish(Fact::Cleared);
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn markers(&self) -> &OverlayGroup<MarkerOverlay> {
        &self.markers
    }

    pub fn zones(&self) -> &OverlayGroup<ZoneOverlay> {
        &self.zones
    }

    pub fn active_base_layer(&self) -> Option<BaseLayerId> {
        self.base_layers.active()
    }

    pub fn available_base_layers(&self) -> Vec<BaseLayerId> {
        self.base_layers.available()
    }

    pub fn base_layers(&self) -> &BaseLayerRegistry {
        &self.base_layers
    }

    pub fn has_credential(&self) -> bool {
        self.config.has_credential()
    }
}
