//! The info panel: a single write-target showing the latest user-relevant
//! fact. Last write wins; there is no history.

use std::sync::Mutex;

use crate::core::geo::LatLng;
use crate::layers::icons::Category;

/// Escapes text destined for the info panel or a popup so that provider
/// data can never smuggle markup into the page.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Which overlay collection a failed load was feeding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataKind {
    Locations,
    Zones,
}

impl std::fmt::Display for DataKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataKind::Locations => write!(f, "locations"),
            DataKind::Zones => write!(f, "zones"),
        }
    }
}

/// The latest thing the user should see. Each variant renders to one
/// self-contained HTML fragment.
#[derive(Debug, Clone, PartialEq)]
pub enum Fact {
    /// Coordinates of the most recent map click.
    Click { position: LatLng },
    /// Full detail of a clicked marker.
    MarkerDetail {
        name: String,
        description: String,
        category: Category,
        position: LatLng,
    },
    /// Full detail of a clicked zone.
    ZoneDetail {
        name: String,
        description: String,
        color: String,
    },
    /// Confirmation that a batch of markers landed on the map.
    MarkersLoaded(usize),
    /// Confirmation that a batch of zones landed on the map.
    ZonesLoaded(usize),
    /// Confirmation for a freshly synthesized ad-hoc marker.
    MarkerAdded { position: LatLng },
    /// Both overlay groups were cleared.
    Cleared,
    /// The requested base layer is not registered.
    LayerUnavailable,
    /// A geo-data fetch failed; the overlay group was left untouched.
    LoadFailed(DataKind),
}

impl Fact {
    /// Renders the fact as an HTML-safe fragment for the panel.
    pub fn to_html(&self) -> String {
        match self {
            Fact::Click { position } => format!(
                "<p><strong>Click coordinates:</strong></p>\
                 <p>Latitude: {:.6}</p><p>Longitude: {:.6}</p>",
                position.lat, position.lng
            ),
            Fact::MarkerDetail {
                name,
                description,
                category,
                position,
            } => format!(
                "<p><strong>{}</strong></p><p>{}</p>\
                 <p>Category: {}</p><p>Coordinates: {}, {}</p>",
                escape_html(name),
                escape_html(description),
                category,
                position.lat,
                position.lng
            ),
            Fact::ZoneDetail {
                name,
                description,
                color,
            } => format!(
                "<p><strong>Zone: {}</strong></p><p>{}</p><p>Color: {}</p>",
                escape_html(name),
                escape_html(description),
                escape_html(color)
            ),
            Fact::MarkersLoaded(count) => {
                format!("<p>✅ Loaded {} locations onto the map.</p>", count)
            }
            Fact::ZonesLoaded(count) => {
                format!("<p>✅ Loaded {} zones onto the map.</p>", count)
            }
            Fact::MarkerAdded { position } => {
                format!("<p>✅ Custom marker added at: {}</p>", position.fixed())
            }
            Fact::Cleared => {
                "<p>🗑️ Map cleared. All markers and zones have been removed.</p>".to_string()
            }
            Fact::LayerUnavailable => {
                "<p>⚠️ This base layer is unavailable. Check your API key configuration.</p>"
                    .to_string()
            }
            Fact::LoadFailed(kind) => format!("<p>❌ Failed to load the {}.</p>", kind),
        }
    }
}

/// Write-target for the latest fact. Implementations are expected to fully
/// replace their content on every publish.
pub trait InfoPanelSink: Send + Sync {
    fn publish(&self, fact: Fact);
}

/// Default sink: holds the rendered HTML of the most recent fact.
#[derive(Debug, Default)]
pub struct InfoPanel {
    content: Mutex<String>,
    last_fact: Mutex<Option<Fact>>,
}

impl InfoPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current panel HTML (empty before the first publish).
    pub fn content(&self) -> String {
        self.content.lock().expect("panel lock poisoned").clone()
    }

    /// The most recently published fact, if any.
    pub fn last_fact(&self) -> Option<Fact> {
        self.last_fact.lock().expect("panel lock poisoned").clone()
    }
}

impl InfoPanelSink for InfoPanel {
    fn publish(&self, fact: Fact) {
        let html = fact.to_html();
        log::debug!("info panel update: {:?}", fact);
        *self.content.lock().expect("panel lock poisoned") = html;
        *self.last_fact.lock().expect("panel lock poisoned") = Some(fact);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<b>\"a\" & 'b'</b>"),
            "&lt;b&gt;&quot;a&quot; &amp; &#39;b&#39;&lt;/b&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_click_fact_uses_six_decimals() {
        let fact = Fact::Click {
            position: LatLng::new(3.4516, -76.532),
        };
        let html = fact.to_html();
        assert!(html.contains("Latitude: 3.451600"));
        assert!(html.contains("Longitude: -76.532000"));
    }

    #[test]
    fn test_zone_count_fact_mentions_count() {
        let html = Fact::ZonesLoaded(2).to_html();
        assert!(html.contains('2'));
        assert!(html.contains("zones"));
    }

    #[test]
    fn test_panel_is_last_write_wins() {
        let panel = InfoPanel::new();
        assert!(panel.content().is_empty());

        panel.publish(Fact::MarkersLoaded(5));
        panel.publish(Fact::Cleared);

        assert_eq!(panel.content(), Fact::Cleared.to_html());
        assert_eq!(panel.last_fact(), Some(Fact::Cleared));
    }

    #[test]
    fn test_marker_detail_escapes_provider_text() {
        let fact = Fact::MarkerDetail {
            name: "<script>x</script>".to_string(),
            description: "a & b".to_string(),
            category: Category::Landmark,
            position: LatLng::new(1.0, 2.0),
        };
        let html = fact.to_html();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("a &amp; b"));
    }
}
