use crate::{
    core::geo::LatLng,
    data::models::LocationRecord,
    layers::icons::{Category, DivIcon, IconRegistry},
    panel::{escape_html, Fact},
    MapError, Result,
};

/// A fully-wired point overlay: position, resolved icon, bound popup and
/// the detail fact its click handler publishes.
///
/// Construction validates the record first, so a `MarkerOverlay` is never
/// partially built by the time it enters an overlay group.
#[derive(Debug, Clone)]
pub struct MarkerOverlay {
    id: Option<i64>,
    name: String,
    description: String,
    category: Category,
    position: LatLng,
    icon: &'static DivIcon,
    popup_html: String,
}

impl MarkerOverlay {
    /// Builds a marker from a provider record. Fails if the coordinates are
    /// not finite and in range; the icon lookup itself cannot fail.
    pub fn from_record(record: &LocationRecord) -> Result<Self> {
        let position = record.position();
        if !position.is_valid() {
            return Err(MapError::InvalidCoordinates(format!(
                "location {} ({}): lat={} lng={}",
                record.id, record.name, record.lat, record.lng
            )));
        }

        let category = Category::from_wire(&record.category);
        let popup_html = format!(
            "<div class=\"popup-title\">{}</div>\
             <div class=\"popup-description\">{}</div>\
             <div class=\"popup-coords\">Lat: {}, Lng: {}</div>",
            escape_html(&record.name),
            escape_html(&record.description),
            record.lat,
            record.lng
        );

        Ok(Self {
            id: Some(record.id),
            name: record.name.clone(),
            description: record.description.clone(),
            category,
            position,
            icon: IconRegistry::resolve(category),
            popup_html,
        })
    }

    /// Synthesizes a user-added marker at `position`. Always `Custom`.
    pub fn custom(position: LatLng) -> Self {
        let popup_html = format!(
            "<div class=\"popup-title\">Custom Marker</div>\
             <div class=\"popup-description\">This marker was created manually</div>\
             <div class=\"popup-coords\">Lat: {:.6}, Lng: {:.6}</div>",
            position.lat, position.lng
        );

        Self {
            id: None,
            name: "Custom Marker".to_string(),
            description: "This marker was created manually".to_string(),
            category: Category::Custom,
            position,
            icon: IconRegistry::resolve(Category::Custom),
            popup_html,
        }
    }

    /// The fact a click on this marker publishes to the info panel.
    pub fn on_click(&self) -> Fact {
        Fact::MarkerDetail {
            name: self.name.clone(),
            description: self.description.clone(),
            category: self.category,
            position: self.position,
        }
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn position(&self) -> LatLng {
        self.position
    }

    pub fn icon(&self) -> &'static DivIcon {
        self.icon
    }

    pub fn popup_html(&self) -> &str {
        &self.popup_html
    }
}
