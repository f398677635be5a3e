use serde::{Deserialize, Serialize};

use crate::core::constants::{MARKER_ICON_ANCHOR, MARKER_ICON_SIZE};
use crate::prelude::HashMap;
use once_cell::sync::Lazy;

/// Closed set of marker categories understood by the viewer.
///
/// Wire data carries free-form category strings; anything outside the known
/// set collapses to [`Category::Custom`], so icon resolution is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    University,
    Landmark,
    Park,
    Monument,
    Zoo,
    Custom,
}

impl Category {
    /// Parses a wire category string, falling back to `Custom` for anything
    /// unrecognized. Never fails.
    pub fn from_wire(raw: &str) -> Self {
        match raw {
            "university" => Category::University,
            "landmark" => Category::Landmark,
            "park" => Category::Park,
            "monument" => Category::Monument,
            "zoo" => Category::Zoo,
            _ => Category::Custom,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::University => write!(f, "university"),
            Category::Landmark => write!(f, "landmark"),
            Category::Park => write!(f, "park"),
            Category::Monument => write!(f, "monument"),
            Category::Zoo => write!(f, "zoo"),
            Category::Custom => write!(f, "custom"),
        }
    }
}

/// A Leaflet-style div icon: a small HTML badge rendered at a fixed size
/// with its hot-spot anchored at the marker position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DivIcon {
    pub class_name: &'static str,
    pub background: &'static str,
    pub glyph: &'static str,
    pub icon_size: (u32, u32),
    pub icon_anchor: (u32, u32),
}

impl DivIcon {
    fn badge(background: &'static str, glyph: &'static str) -> Self {
        Self {
            class_name: "custom-marker",
            background,
            glyph,
            icon_size: MARKER_ICON_SIZE,
            icon_anchor: MARKER_ICON_ANCHOR,
        }
    }

    /// Expands the icon into the HTML fragment the renderer mounts.
    pub fn html(&self) -> String {
        format!(
            "<div style=\"background-color: {}; width: {}px; height: {}px; \
             border-radius: 50%; display: flex; align-items: center; \
             justify-content: center; border: 3px solid white; \
             box-shadow: 0 2px 8px rgba(0,0,0,0.3);\">\
             <span style=\"color: white; font-size: 18px;\">{}</span></div>",
            self.background, self.icon_size.0, self.icon_size.1, self.glyph
        )
    }
}

static ICONS: Lazy<HashMap<Category, DivIcon>> = Lazy::new(|| {
    let mut icons = HashMap::default();
    icons.insert(Category::University, DivIcon::badge("#FF6B6B", "🎓"));
    icons.insert(Category::Landmark, DivIcon::badge("#4ECDC4", "🏛️"));
    icons.insert(Category::Park, DivIcon::badge("#45B7D1", "🌳"));
    icons.insert(Category::Monument, DivIcon::badge("#FFA07A", "⛪"));
    icons.insert(Category::Zoo, DivIcon::badge("#96CEB4", "🦁"));
    icons.insert(Category::Custom, DivIcon::badge("#9B59B6", "📍"));
    icons
});

/// Fixed category → icon table. Pure lookup, no state.
pub struct IconRegistry;

impl IconRegistry {
    /// Resolves the icon for a category. Total: every category, including
    /// `Custom`, has an entry.
    pub fn resolve(category: Category) -> &'static DivIcon {
        ICONS
            .get(&category)
            .unwrap_or_else(|| &ICONS[&Category::Custom])
    }

    /// Resolves straight from a wire category string.
    pub fn resolve_wire(raw: &str) -> &'static DivIcon {
        Self::resolve(Category::from_wire(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_categories_parse() {
        assert_eq!(Category::from_wire("university"), Category::University);
        assert_eq!(Category::from_wire("landmark"), Category::Landmark);
        assert_eq!(Category::from_wire("park"), Category::Park);
        assert_eq!(Category::from_wire("monument"), Category::Monument);
        assert_eq!(Category::from_wire("zoo"), Category::Zoo);
    }

    #[test]
    fn test_unknown_category_falls_back_to_custom() {
        assert_eq!(Category::from_wire("museum"), Category::Custom);
        assert_eq!(Category::from_wire(""), Category::Custom);
        assert_eq!(Category::from_wire("UNIVERSITY"), Category::Custom);
    }

    #[test]
    fn test_icon_lookup_is_total() {
        for raw in ["university", "landmark", "park", "monument", "zoo", "???"] {
            let icon = IconRegistry::resolve_wire(raw);
            assert_eq!(icon.icon_size, MARKER_ICON_SIZE);
        }
        assert_eq!(
            IconRegistry::resolve_wire("not-a-category"),
            IconRegistry::resolve(Category::Custom)
        );
    }

    #[test]
    fn test_icon_html_contains_glyph_and_color() {
        let icon = IconRegistry::resolve(Category::University);
        let html = icon.html();
        assert!(html.contains("#FF6B6B"));
        assert!(html.contains("🎓"));
        assert!(html.contains("32px"));
    }
}
