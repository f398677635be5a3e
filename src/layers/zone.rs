use crate::{
    core::constants::{ZONE_FILL_OPACITY, ZONE_STROKE_WEIGHT},
    core::geo::LatLng,
    data::models::ZoneRecord,
    panel::{escape_html, Fact},
    MapError, Result,
};

/// Polygon styling derived from the zone's own color, matching the
/// Leaflet defaults the viewer has always used.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneStyle {
    pub color: String,
    pub fill_color: String,
    pub fill_opacity: f32,
    pub weight: f32,
}

impl ZoneStyle {
    pub fn from_color(color: &str) -> Self {
        Self {
            color: color.to_string(),
            fill_color: color.to_string(),
            fill_opacity: ZONE_FILL_OPACITY,
            weight: ZONE_STROKE_WEIGHT,
        }
    }
}

/// A fully-wired polygonal overlay with its popup and click-detail fact.
#[derive(Debug, Clone)]
pub struct ZoneOverlay {
    id: i64,
    name: String,
    description: String,
    vertices: Vec<LatLng>,
    style: ZoneStyle,
    popup_html: String,
}

impl ZoneOverlay {
    /// Builds a zone from a provider record. Fails when the polygon has
    /// fewer than 3 vertices or any vertex is out of range.
    pub fn from_record(record: &ZoneRecord) -> Result<Self> {
        let vertices = record.vertices();
        if vertices.len() < 3 {
            return Err(MapError::InvalidCoordinates(format!(
                "zone {} ({}): {} vertices, need at least 3",
                record.id,
                record.name,
                vertices.len()
            )));
        }
        if let Some(bad) = vertices.iter().find(|v| !v.is_valid()) {
            return Err(MapError::InvalidCoordinates(format!(
                "zone {} ({}): vertex out of range: {:?}",
                record.id, record.name, bad
            )));
        }

        let popup_html = format!(
            "<div class=\"popup-title\">{}</div>\
             <div class=\"popup-description\">{}</div>",
            escape_html(&record.name),
            escape_html(&record.description)
        );

        Ok(Self {
            id: record.id,
            name: record.name.clone(),
            description: record.description.clone(),
            vertices,
            style: ZoneStyle::from_color(&record.color),
            popup_html,
        })
    }

    /// The fact a click on this zone publishes to the info panel.
    pub fn on_click(&self) -> Fact {
        Fact::ZoneDetail {
            name: self.name.clone(),
            description: self.description.clone(),
            color: self.style.color.clone(),
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vertices(&self) -> &[LatLng] {
        &self.vertices
    }

    pub fn style(&self) -> &ZoneStyle {
        &self.style
    }

    pub fn popup_html(&self) -> &str {
        &self.popup_html
    }
}
