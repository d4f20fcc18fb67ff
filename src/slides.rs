use crate::catalog::{self, ServiceItem, SlideKind};
use crate::settings::{AppSettings, ContentOverride};

/// A catalog entry with the device's media overrides applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveSlide {
    pub item: &'static ServiceItem,
    pub background: Option<String>,
    pub custom_image: Option<String>,
    pub video_url: Option<String>,
}

impl ActiveSlide {
    pub fn merge(item: &'static ServiceItem, overrides: Option<&ContentOverride>) -> Self {
        // Override wins only when present and non-empty
        let pick = |over: Option<&String>, base: Option<&'static str>| {
            over.filter(|v| !v.is_empty())
                .cloned()
                .or_else(|| base.map(str::to_string))
        };
        let o = overrides.cloned().unwrap_or_default();
        Self {
            item,
            background: pick(o.background.as_ref(), item.background),
            custom_image: pick(o.custom_image.as_ref(), item.custom_image),
            video_url: pick(o.video_url.as_ref(), item.video_url),
        }
    }

    pub fn id(&self) -> &'static str {
        self.item.id
    }

    pub fn kind(&self) -> SlideKind {
        self.item.kind
    }

    /// Background image: background, then custom image, then a keyword placeholder.
    pub fn background_source(&self) -> String {
        self.background
            .clone()
            .or_else(|| self.custom_image.clone())
            .unwrap_or_else(|| placeholder_image(self.item.image_keyword, 1920, 1080))
    }

    /// Foreground image used by templates that show a picture next to the text.
    pub fn feature_image(&self) -> String {
        self.custom_image
            .clone()
            .unwrap_or_else(|| placeholder_image(self.item.image_keyword, 800, 600))
    }
}

pub fn placeholder_image(keyword: &str, width: u32, height: u32) -> String {
    format!("https://picsum.photos/seed/{}/{}/{}", keyword, width, height)
}

/// Catalog order filtered to the enabled ids, overrides merged in.
pub fn active_slides(settings: &AppSettings) -> Vec<ActiveSlide> {
    catalog::SERVICES
        .iter()
        .filter(|item| settings.is_enabled(item.id))
        .map(|item| ActiveSlide::merge(item, settings.content_overrides.get(item.id)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flights() -> &'static ServiceItem {
        catalog::find("flights").unwrap()
    }

    #[test]
    fn override_background_wins() {
        let over = ContentOverride {
            background: Some("https://b.example/override.jpg".to_string()),
            ..Default::default()
        };
        let slide = ActiveSlide::merge(flights(), Some(&over));
        assert_eq!(slide.background.as_deref(), Some("https://b.example/override.jpg"));
    }

    #[test]
    fn empty_override_falls_back_to_catalog() {
        let over = ContentOverride {
            background: Some(String::new()),
            ..Default::default()
        };
        let slide = ActiveSlide::merge(flights(), Some(&over));
        assert_eq!(slide.background.as_deref(), flights().background);
    }

    #[test]
    fn background_source_order() {
        let item = catalog::find("emirates-id").unwrap();
        let mut slide = ActiveSlide::merge(item, None);
        assert_eq!(slide.background_source(), item.background.unwrap());

        slide.background = None;
        assert_eq!(slide.background_source(), item.custom_image.unwrap());

        slide.custom_image = None;
        assert_eq!(
            slide.background_source(),
            "https://picsum.photos/seed/technology,fingerprint/1920/1080"
        );
    }

    #[test]
    fn active_list_follows_catalog_order() {
        let mut settings = AppSettings::default();
        settings.enabled_services = vec!["contact".into(), "hero".into(), "customs".into()];
        let ids: Vec<_> = active_slides(&settings).iter().map(|s| s.id()).collect();
        assert_eq!(ids, vec!["hero", "customs", "contact"]);
    }

    #[test]
    fn unknown_enabled_ids_are_ignored() {
        let mut settings = AppSettings::default();
        settings.enabled_services = vec!["hero".into(), "retired-service".into()];
        assert_eq!(active_slides(&settings).len(), 1);
    }
}
