// Same-page anchor resolution: "#id" → smooth-scroll target below the
// fixed header. Unresolvable hrefs yield nothing; the page has already
// suppressed default navigation, so the click dies silently.

use crate::types::{AnchorSettings, Section};

pub struct AnchorResolver {
    settings: AnchorSettings,
    sections: Vec<Section>,
}

impl AnchorResolver {
    pub fn new(settings: AnchorSettings, sections: Vec<Section>) -> Self {
        AnchorResolver { settings, sections }
    }

    /// Absolute scroll target for a same-page href, or `None` when the id
    /// does not resolve (or the href is not an in-page anchor).
    pub fn resolve(&self, href: &str) -> Option<f32> {
        let id = href.strip_prefix('#')?;
        if id.is_empty() {
            return None;
        }
        let section = self.sections.iter().find(|s| s.id == id)?;
        Some(section.top - self.settings.header_offset_px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> AnchorResolver {
        AnchorResolver::new(
            AnchorSettings::default(),
            vec![
                Section {
                    id: "about".to_string(),
                    top: 500.0,
                },
                Section {
                    id: "contact".to_string(),
                    top: 2400.0,
                },
            ],
        )
    }

    #[test]
    fn resolves_below_fixed_header() {
        let resolver = resolver();
        assert_eq!(resolver.resolve("#about"), Some(420.0));
        assert_eq!(resolver.resolve("#contact"), Some(2320.0));
    }

    #[test]
    fn missing_target_is_a_silent_no_op() {
        let resolver = resolver();
        assert_eq!(resolver.resolve("#nope"), None);
        assert_eq!(resolver.resolve("#"), None);
    }

    #[test]
    fn non_anchor_hrefs_do_not_resolve() {
        let resolver = resolver();
        assert_eq!(resolver.resolve("https://example.com"), None);
        assert_eq!(resolver.resolve("about"), None);
    }
}
