use crate::core::geo::LatLng;

/// Configuration for the on-map scale control.
///
/// The city viewer ships with a metric-only scale, matching Leaflet's
/// `L.control.scale({ imperial: false, metric: true })`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleControl {
    pub metric: bool,
    pub imperial: bool,
}

impl Default for ScaleControl {
    fn default() -> Self {
        Self {
            metric: true,
            imperial: false,
        }
    }
}

/// The single map viewport: where the camera looks and how far it is zoomed.
///
/// The renderer owns pixel-space concerns; this type only tracks the
/// geographic view state the controller mutates and reads back.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    pub center: LatLng,
    pub zoom: f64,
    pub scale_control: Option<ScaleControl>,
}

impl Viewport {
    pub fn new(center: LatLng, zoom: f64) -> Self {
        Self {
            center,
            zoom,
            scale_control: None,
        }
    }

    /// Attaches a scale control to the viewport.
    pub fn with_scale_control(mut self, control: ScaleControl) -> Self {
        self.scale_control = Some(control);
        self
    }

    pub fn center(&self) -> LatLng {
        self.center
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::{DEFAULT_CENTER, DEFAULT_ZOOM};

    #[test]
    fn test_viewport_creation() {
        let viewport = Viewport::new(DEFAULT_CENTER, DEFAULT_ZOOM);
        assert_eq!(viewport.center(), DEFAULT_CENTER);
        assert_eq!(viewport.zoom(), DEFAULT_ZOOM);
        assert!(viewport.scale_control.is_none());
    }

    #[test]
    fn test_scale_control_defaults_to_metric_only() {
        let control = ScaleControl::default();
        assert!(control.metric);
        assert!(!control.imperial);
    }

    #[test]
    fn test_scale_control_attachment() {
        let viewport =
            Viewport::new(DEFAULT_CENTER, DEFAULT_ZOOM).with_scale_control(ScaleControl::default());
        assert!(viewport.scale_control.is_some());
    }
}
