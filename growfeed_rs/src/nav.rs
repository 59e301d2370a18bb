//! Page sections and the navigation header rules.

use crate::config::NavConfig;

/// Anchored sections of the page, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    Features,
    WaterStats,
    Benefits,
    Testimonials,
    Pricing,
    Contact,
}

/// Sections listed in the header and the mobile menu.
pub const NAV_SECTIONS: [Section; 6] = [
    Section::Home,
    Section::Features,
    Section::Benefits,
    Section::Testimonials,
    Section::Pricing,
    Section::Contact,
];

impl Section {
    /// Element id, without the leading `#`.
    pub fn anchor(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Features => "features",
            Section::WaterStats => "water-stats",
            Section::Benefits => "benefits",
            Section::Testimonials => "testimonials",
            Section::Pricing => "pricing",
            Section::Contact => "contact",
        }
    }

    /// CSS selector, e.g. `#pricing`.
    pub fn selector(self) -> String {
        format!("#{}", self.anchor())
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Features => "Features",
            Section::WaterStats => "Water Quality Dashboard",
            Section::Benefits => "Benefits",
            Section::Testimonials => "Testimonials",
            Section::Pricing => "Pricing",
            Section::Contact => "Contact",
        }
    }
}

/// Document-space y coordinate to scroll to so that an element whose top is
/// `element_top` pixels below the viewport top lands just under the fixed
/// header.
pub fn scroll_offset(element_top: f64, scroll_y: f64, header_height: f64) -> f64 {
    element_top + scroll_y - header_height
}

/// Whether the header renders opaque at `scroll_y`.
///
/// Two bands: near the top (`<= top_band`) and past `opaque_after`. In
/// between the header is transparent.
pub fn header_is_opaque(scroll_y: f64, nav: &NavConfig) -> bool {
    scroll_y <= nav.top_band || scroll_y > nav.opaque_after
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_lists_six_sections_without_dashboard() {
        let anchors: Vec<_> = NAV_SECTIONS.iter().map(|s| s.anchor()).collect();
        assert_eq!(
            anchors,
            [
                "home",
                "features",
                "benefits",
                "testimonials",
                "pricing",
                "contact",
            ]
        );
        assert!(!NAV_SECTIONS.contains(&Section::WaterStats));
    }

    #[test]
    fn dashboard_section_heading() {
        assert_eq!(Section::WaterStats.label(), "Water Quality Dashboard");
        assert_eq!(Section::WaterStats.anchor(), "water-stats");
    }

    #[test]
    fn selector_has_hash_prefix() {
        assert_eq!(Section::Pricing.selector(), "#pricing");
        assert_eq!(Section::WaterStats.selector(), "#water-stats");
    }

    #[test]
    fn scroll_offset_subtracts_header() {
        // element 500px below viewport top, page already scrolled 1000px
        assert_eq!(scroll_offset(500.0, 1000.0, 64.0), 1436.0);
        // element above the viewport
        assert_eq!(scroll_offset(-200.0, 1000.0, 64.0), 736.0);
    }

    #[test]
    fn header_dual_band() {
        let nav = NavConfig::default();
        assert!(header_is_opaque(0.0, &nav));
        assert!(header_is_opaque(20.0, &nav));
        assert!(!header_is_opaque(20.5, &nav));
        assert!(!header_is_opaque(60.0, &nav));
        assert!(!header_is_opaque(100.0, &nav));
        assert!(header_is_opaque(100.5, &nav));
        assert!(header_is_opaque(5000.0, &nav));
    }
}
