// Scroll-driven decisions: navbar chrome, active-section scan, parallax.
// Everything is a pure function of the current offset; nothing here stores
// the previous scroll position.

use crate::types::{ScrollSettings, Section};

/// Navbar chrome for the current scroll offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavChrome {
    Default,
    Compact,
}

impl NavChrome {
    pub fn padding(&self) -> &'static str {
        match self {
            NavChrome::Default => "20px 0",
            NavChrome::Compact => "12px 0",
        }
    }

    pub fn box_shadow(&self) -> &'static str {
        match self {
            NavChrome::Default => "none",
            NavChrome::Compact => "0 4px 30px rgba(0, 0, 0, 0.3)",
        }
    }
}

/// Recomputes scroll-dependent state per event.
pub struct ScrollTracker {
    settings: ScrollSettings,
    sections: Vec<Section>,
}

impl ScrollTracker {
    pub fn new(settings: ScrollSettings, sections: Vec<Section>) -> Self {
        ScrollTracker { settings, sections }
    }

    /// Compact chrome strictly past the threshold; exactly at it stays
    /// default. Idempotent, no hysteresis.
    pub fn chrome(&self, offset: f32) -> NavChrome {
        if offset > self.settings.chrome_threshold_px {
            NavChrome::Compact
        } else {
            NavChrome::Default
        }
    }

    /// Scan sections in document order; the last one whose top (minus the
    /// lookahead margin) has been passed wins, so later sections overwrite
    /// earlier ones when several qualify.
    pub fn active_section(&self, offset: f32) -> Option<&str> {
        let mut current = None;
        for section in &self.sections {
            if offset >= section.top - self.settings.lookahead_px {
                current = Some(section.id.as_str());
            }
        }
        current
    }

    /// Vertical translate for the decorative background.
    pub fn parallax_shift(&self, offset: f32) -> f32 {
        offset * self.settings.parallax_factor
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> ScrollTracker {
        ScrollTracker::new(
            ScrollSettings::default(),
            vec![
                Section {
                    id: "hero".to_string(),
                    top: 0.0,
                },
                Section {
                    id: "about".to_string(),
                    top: 500.0,
                },
                Section {
                    id: "projects".to_string(),
                    top: 1200.0,
                },
            ],
        )
    }

    #[test]
    fn chrome_threshold_boundary() {
        let tracker = tracker();
        assert_eq!(tracker.chrome(99.0), NavChrome::Default);
        assert_eq!(tracker.chrome(100.0), NavChrome::Default);
        assert_eq!(tracker.chrome(101.0), NavChrome::Compact);
    }

    #[test]
    fn chrome_styles() {
        assert_eq!(NavChrome::Default.padding(), "20px 0");
        assert_eq!(NavChrome::Compact.padding(), "12px 0");
        assert_eq!(NavChrome::Default.box_shadow(), "none");
        assert_eq!(NavChrome::Compact.box_shadow(), "0 4px 30px rgba(0, 0, 0, 0.3)");
    }

    #[test]
    fn active_section_scan() {
        let tracker = tracker();
        // Tops [0, 500, 1200] with lookahead 200.
        assert_eq!(tracker.active_section(650.0), Some("about"));
        assert_eq!(tracker.active_section(1450.0), Some("projects"));
    }

    #[test]
    fn later_section_wins_ties() {
        // Two sections both passed: document order decides.
        let tracker = ScrollTracker::new(
            ScrollSettings::default(),
            vec![
                Section {
                    id: "a".to_string(),
                    top: 100.0,
                },
                Section {
                    id: "b".to_string(),
                    top: 100.0,
                },
            ],
        );
        assert_eq!(tracker.active_section(300.0), Some("b"));
    }

    #[test]
    fn no_section_qualifies_above_all() {
        let tracker = ScrollTracker::new(
            ScrollSettings::default(),
            vec![Section {
                id: "about".to_string(),
                top: 500.0,
            }],
        );
        assert_eq!(tracker.active_section(0.0), None);
        // Lookahead boundary: qualifies exactly at top - 200.
        assert_eq!(tracker.active_section(300.0), Some("about"));
        assert_eq!(tracker.active_section(299.0), None);
    }

    #[test]
    fn parallax_scales_offset() {
        let tracker = tracker();
        assert!((tracker.parallax_shift(1000.0) - 300.0).abs() < 0.001);
        assert_eq!(tracker.parallax_shift(0.0), 0.0);
    }
}
