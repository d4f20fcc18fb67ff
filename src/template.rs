use crate::catalog::SlideKind;

/// Visual layout used to draw a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    Hero,
    GoldenPackage,
    IdentityCard,
    PartnerGrid,
    Contact,
    ReviewsCarousel,
    Standard,
}

const IDENTITY_CARD_SERVICE: &str = "emirates-id";

impl Template {
    pub fn select(id: &str, kind: SlideKind) -> Self {
        if id == IDENTITY_CARD_SERVICE {
            return Self::IdentityCard;
        }
        match kind {
            SlideKind::Hero => Self::Hero,
            SlideKind::Golden => Self::GoldenPackage,
            SlideKind::Partners => Self::PartnerGrid,
            SlideKind::Contact => Self::Contact,
            SlideKind::Reviews => Self::ReviewsCarousel,
            SlideKind::Standard | SlideKind::Kids => Self::Standard,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SERVICES;

    fn for_tag(id: &str, tag: &str) -> Template {
        Template::select(id, SlideKind::from_tag(tag))
    }

    #[test]
    fn kinds_map_to_templates() {
        assert_eq!(for_tag("hero", "hero"), Template::Hero);
        assert_eq!(for_tag("golden-visa", "golden"), Template::GoldenPackage);
        assert_eq!(for_tag("partners", "partners"), Template::PartnerGrid);
        assert_eq!(for_tag("contact", "contact"), Template::Contact);
        assert_eq!(for_tag("reviews", "reviews"), Template::ReviewsCarousel);
        assert_eq!(for_tag("family-visa", "kids"), Template::Standard);
        assert_eq!(for_tag("customs", "standard"), Template::Standard);
    }

    #[test]
    fn identity_card_overrides_the_tag() {
        assert_eq!(for_tag("emirates-id", "standard"), Template::IdentityCard);
        assert_eq!(for_tag("emirates-id", "hero"), Template::IdentityCard);
    }

    #[test]
    fn unknown_tags_fall_back_to_standard() {
        assert_eq!(for_tag("x", "billboard"), Template::Standard);
    }

    #[test]
    fn one_catalog_entry_uses_the_identity_card() {
        let count = SERVICES
            .iter()
            .filter(|item| Template::select(item.id, item.kind) == Template::IdentityCard)
            .count();
        assert_eq!(count, 1);
    }
}
