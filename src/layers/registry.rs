use crate::layers::base::{BaseLayer, BaseLayerId};
use crate::prelude::HashMap;

/// What a switch request did to the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchOutcome {
    /// The requested layer was available and is now the only mounted layer.
    Mounted(BaseLayerId),
    /// The requested layer is not registered; nothing is mounted now.
    Unavailable(BaseLayerId),
}

/// Holds the registered base layers and tracks which one is mounted.
///
/// The registry is fixed after startup negotiation: `register` is only
/// called during [`MapController::start`](crate::MapController::start).
/// At most one layer is mounted at any time; a request for an unregistered
/// id detaches the current layer and leaves the viewport in the degraded
/// `none` state rather than showing stale tiles.
pub struct BaseLayerRegistry {
    layers: HashMap<BaseLayerId, BaseLayer>,
    active: Option<BaseLayerId>,
}

impl BaseLayerRegistry {
    pub fn new() -> Self {
        Self {
            layers: HashMap::default(),
            active: None,
        }
    }

    /// Adds a layer to the set of selectable base layers.
    pub fn register(&mut self, layer: BaseLayer) {
        log::debug!("registered base layer {}", layer.id());
        self.layers.insert(layer.id(), layer);
    }

    /// Whether `id` can currently be mounted.
    pub fn is_available(&self, id: BaseLayerId) -> bool {
        self.layers.contains_key(&id)
    }

    /// Ids that can currently be mounted.
    pub fn available(&self) -> Vec<BaseLayerId> {
        BaseLayerId::ALL
            .into_iter()
            .filter(|id| self.layers.contains_key(id))
            .collect()
    }

    /// The currently mounted layer id, if any.
    pub fn active(&self) -> Option<BaseLayerId> {
        self.active
    }

    /// The currently mounted layer, if any.
    pub fn active_layer(&self) -> Option<&BaseLayer> {
        self.active.and_then(|id| self.layers.get(&id))
    }

    /// Switches the mounted base layer.
    ///
    /// The current layer is detached unconditionally (a no-op when nothing
    /// is mounted). If `requested` is registered it becomes the active
    /// layer; otherwise the registry enters the degraded `none` state and
    /// reports [`SwitchOutcome::Unavailable`].
    pub fn switch(&mut self, requested: BaseLayerId) -> SwitchOutcome {
        if let Some(previous) = self.active.take() {
            log::debug!("detached base layer {}", previous);
        }

        if self.layers.contains_key(&requested) {
            self.active = Some(requested);
            log::info!("mounted base layer {}", requested);
            SwitchOutcome::Mounted(requested)
        } else {
            log::warn!("base layer {} requested but not registered", requested);
            SwitchOutcome::Unavailable(requested)
        }
    }
}

impl Default for BaseLayerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::source::{GoogleMapType, GoogleMutantSource, OpenStreetMapSource};

    fn osm_only() -> BaseLayerRegistry {
        let mut registry = BaseLayerRegistry::new();
        registry.register(BaseLayer::new(
            BaseLayerId::Osm,
            Box::new(OpenStreetMapSource::new()),
        ));
        registry
    }

    #[test]
    fn test_switch_mounts_registered_layer() {
        let mut registry = osm_only();
        assert_eq!(registry.active(), None);

        let outcome = registry.switch(BaseLayerId::Osm);
        assert_eq!(outcome, SwitchOutcome::Mounted(BaseLayerId::Osm));
        assert_eq!(registry.active(), Some(BaseLayerId::Osm));
    }

    #[test]
    fn test_unavailable_switch_detaches_current_layer() {
        let mut registry = osm_only();
        registry.switch(BaseLayerId::Osm);

        let outcome = registry.switch(BaseLayerId::GoogleSatellite);
        assert_eq!(
            outcome,
            SwitchOutcome::Unavailable(BaseLayerId::GoogleSatellite)
        );
        // Degraded state: no stale layer left mounted.
        assert_eq!(registry.active(), None);
    }

    #[test]
    fn test_at_most_one_layer_mounted() {
        let mut registry = osm_only();
        registry.register(BaseLayer::new(
            BaseLayerId::GoogleRoadmap,
            Box::new(GoogleMutantSource::new(GoogleMapType::Roadmap)),
        ));

        registry.switch(BaseLayerId::Osm);
        registry.switch(BaseLayerId::GoogleRoadmap);
        assert_eq!(registry.active(), Some(BaseLayerId::GoogleRoadmap));
        assert_eq!(
            registry.available(),
            vec![BaseLayerId::Osm, BaseLayerId::GoogleRoadmap]
        );
    }

    #[test]
    fn test_switch_from_degraded_state_recovers() {
        let mut registry = osm_only();
        registry.switch(BaseLayerId::GoogleTerrain);
        assert_eq!(registry.active(), None);

        let outcome = registry.switch(BaseLayerId::Osm);
        assert_eq!(outcome, SwitchOutcome::Mounted(BaseLayerId::Osm));
    }
}
