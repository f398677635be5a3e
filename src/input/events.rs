use crate::core::geo::LatLng;
use crate::layers::base::BaseLayerId;

/// Named command triggers the surrounding UI produces.
///
/// One command maps to one state transition on the controller; the concrete
/// input widgets live outside the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiCommand {
    /// Switch the mounted base layer.
    SelectBaseLayer(BaseLayerId),
    /// Fetch the point-of-interest collection and render it.
    LoadLocations,
    /// Fetch the zone collection and render it.
    LoadZones,
    /// Drop an ad-hoc marker near the viewport center.
    AddCustomMarker,
    /// Remove every marker and zone overlay.
    ClearMap,
}

/// Events the map surface emits back to the controller.
///
/// Overlay clicks carry the item's index within its group: overlays have
/// no unique key (duplicate loads are allowed), so the renderer reports
/// which rendering was hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MapEvent {
    /// The user clicked the map at this geographic position.
    Click { position: LatLng },
    /// The user clicked a marker overlay.
    MarkerClick { index: usize },
    /// The user clicked a zone overlay.
    ZoneClick { index: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_are_comparable() {
        assert_eq!(
            UiCommand::SelectBaseLayer(BaseLayerId::Osm),
            UiCommand::SelectBaseLayer(BaseLayerId::Osm)
        );
        assert_ne!(UiCommand::LoadLocations, UiCommand::LoadZones);
    }

    #[test]
    fn test_click_event_carries_position() {
        let event = MapEvent::Click {
            position: LatLng::new(3.4516, -76.532),
        };
        match event {
            MapEvent::Click { position } => assert!(position.is_valid()),
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn test_overlay_clicks_carry_their_index() {
        assert_eq!(
            MapEvent::MarkerClick { index: 3 },
            MapEvent::MarkerClick { index: 3 }
        );
        assert_ne!(
            MapEvent::MarkerClick { index: 0 },
            MapEvent::ZoneClick { index: 0 }
        );
    }
}
