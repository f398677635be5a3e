//! Engine-wide constants derived from Leaflet defaults and the defaults of
//! the city viewer this engine drives. Keeping them in a single place makes
//! it easier to tweak engine-wide magic numbers.

use crate::core::geo::LatLng;

/// Default square tile size in pixels.
pub const TILE_SIZE: u32 = 256;

/// Where the viewport opens: Cali, Colombia.
pub const DEFAULT_CENTER: LatLng = LatLng {
    lat: 3.4516,
    lng: -76.532,
};

/// Default zoom level for the city view.
pub const DEFAULT_ZOOM: f64 = 12.0;

/// Maximum zoom served by the default OSM tile source.
pub const OSM_MAX_ZOOM: u8 = 19;

/// Ad-hoc markers are scattered within this many degrees of the viewport
/// center, per axis.
pub const MARKER_JITTER_DEG: f64 = 0.01;

/// Decimal places used whenever coordinates are shown to the user.
pub const COORD_DECIMALS: usize = 6;

/// Zone polygons are filled with their own color at this opacity.
pub const ZONE_FILL_OPACITY: f32 = 0.3;

/// Stroke weight for zone polygon outlines, in pixels.
pub const ZONE_STROKE_WEIGHT: f32 = 2.0;

/// Div-icon marker size in pixels.
pub const MARKER_ICON_SIZE: (u32, u32) = (32, 32);

/// Anchor inside the icon (hot-spot) in pixel coords.
pub const MARKER_ICON_ANCHOR: (u32, u32) = (16, 16);
