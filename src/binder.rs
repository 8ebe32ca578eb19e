//! One-shot binding of a [`PartnerView`] into the named display regions of the page.
//!
//! Regions are addressed through the [`Page`] trait. Implementations skip
//! regions the current layout does not contain, so the binder itself writes
//! every field unconditionally.

use log::{debug, info};

use crate::partners::Step;
use crate::resolve::ReferralContext;
use crate::view_model::{BenefitCard, PartnerView};
use crate::visibility::{ConditionalField, FieldState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextRegion {
    HeroHeadline,
    HeroSubtext,
    EarningsExample,
    SecondaryHeadline,
    SecondarySubtext,
}

impl TextRegion {
    pub fn selector(self) -> &'static str {
        match self {
            TextRegion::HeroHeadline => "#heroHeadline",
            TextRegion::HeroSubtext => "#heroSubtext",
            TextRegion::EarningsExample => "#earningsExample",
            TextRegion::SecondaryHeadline => "#secondaryHeadline",
            TextRegion::SecondarySubtext => "#secondarySubtext",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackgroundRegion {
    Hero,
    SecondaryCta,
    ThankYouHero,
}

impl BackgroundRegion {
    pub fn selector(self) -> &'static str {
        match self {
            BackgroundRegion::Hero => ".hero",
            BackgroundRegion::SecondaryCta => ".secondary-cta",
            BackgroundRegion::ThankYouHero => ".thank-you-hero",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelField {
    Name,
    Organization,
    Phone,
}

impl LabelField {
    pub fn selector(self) -> &'static str {
        match self {
            LabelField::Name => "label[for=\"name\"]",
            LabelField::Organization => "label[for=\"organization\"]",
            LabelField::Phone => "label[for=\"phone\"]",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetaTag {
    OgTitle,
    Description,
    OgDescription,
    OgImage,
    OgUrl,
    Canonical,
}

impl MetaTag {
    pub fn selector(self) -> &'static str {
        match self {
            MetaTag::OgTitle => "meta[property=\"og:title\"]",
            MetaTag::Description => "meta[name=\"description\"]",
            MetaTag::OgDescription => "meta[property=\"og:description\"]",
            MetaTag::OgImage => "meta[property=\"og:image\"]",
            MetaTag::OgUrl => "meta[property=\"og:url\"]",
            MetaTag::Canonical => "link[rel=\"canonical\"]",
        }
    }

    /// Attribute holding the value: `href` for the canonical link, `content` otherwise.
    pub fn attribute(self) -> &'static str {
        match self {
            MetaTag::Canonical => "href",
            _ => "content",
        }
    }
}

/// Named display regions of a rendered microsite page.
///
/// Every setter is a silent no-op when the region is missing from the layout.
pub trait Page {
    fn set_text(&mut self, region: TextRegion, text: &str);
    fn set_background(&mut self, region: BackgroundRegion, css: &str);
    /// Number of step blocks the layout exposes.
    fn step_slots(&self) -> usize;
    /// Writes `step` into slot `slot` (0-based); the slot is numbered `slot + 1`.
    fn set_step(&mut self, slot: usize, step: &Step);
    /// Clears the benefits grid and appends one card per entry.
    fn rebuild_benefits(&mut self, cards: &[BenefitCard]);
    /// Clears the hero collage and appends one image per entry.
    fn rebuild_collage(&mut self, images: &[&str]);
    fn set_label(&mut self, field: LabelField, text: &str);
    fn set_niche_placeholder(&mut self, text: &str);
    fn set_field_state(&mut self, field: ConditionalField, state: FieldState);
    fn set_referral_link(&mut self, url: &str);
    fn set_title(&mut self, title: &str);
    fn set_meta(&mut self, tag: MetaTag, value: &str);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BindState {
    #[default]
    Unbound,
    Bound,
}

#[derive(Debug, Default)]
pub struct Binder {
    state: BindState,
}

impl Binder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> BindState {
        self.state
    }

    /// Writes `view` into `page`. Only the first call has any effect; returns
    /// whether this call performed the binding.
    pub fn bind(&mut self, page: &mut impl Page, view: &PartnerView, referral: &ReferralContext) -> bool {
        if self.state == BindState::Bound {
            debug!("Page already bound, skipping");
            return false;
        }

        page.set_title(view.title);
        page.set_text(TextRegion::HeroHeadline, view.headline);
        page.set_text(TextRegion::HeroSubtext, view.subtext);
        page.set_background(BackgroundRegion::Hero, &view.hero_background);
        page.rebuild_collage(view.collage);

        let slots = page.step_slots();
        for (slot, step) in view.steps.iter().take(slots).enumerate() {
            page.set_step(slot, step);
        }

        page.set_text(TextRegion::EarningsExample, view.example);
        page.rebuild_benefits(&view.benefits);

        page.set_label(LabelField::Name, view.labels.name);
        page.set_label(LabelField::Organization, view.labels.organization);
        page.set_label(LabelField::Phone, view.labels.phone);
        page.set_niche_placeholder(view.labels.experience_placeholder);
        for (field, state) in view.fields {
            page.set_field_state(field, state);
        }

        page.set_text(TextRegion::SecondaryHeadline, view.secondary_headline);
        page.set_text(TextRegion::SecondarySubtext, view.secondary_subtext);
        page.set_background(BackgroundRegion::SecondaryCta, &view.cta_background);
        page.set_background(BackgroundRegion::ThankYouHero, &view.thank_you_background);
        page.set_referral_link(&referral.referral_url());

        page.set_meta(MetaTag::OgTitle, view.meta.title);
        page.set_meta(MetaTag::Description, view.meta.description);
        page.set_meta(MetaTag::OgDescription, view.meta.description);
        page.set_meta(MetaTag::OgImage, &view.meta.image);
        page.set_meta(MetaTag::OgUrl, &view.meta.url);
        page.set_meta(MetaTag::Canonical, &view.meta.url);

        self.state = BindState::Bound;
        info!(
            "Bound {} page ({} of {} steps placed)",
            view.partner,
            view.steps.len().min(slots),
            view.steps.len()
        );
        true
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::partners::PartnerType;

    /// In-memory page with a configurable number of step slots. Selectors
    /// listed in `missing` behave like regions absent from the layout.
    #[derive(Default)]
    struct FakePage {
        missing: Vec<&'static str>,
        slots: Vec<Option<(usize, String, String)>>,
        text: HashMap<&'static str, String>,
        backgrounds: HashMap<&'static str, String>,
        labels: HashMap<&'static str, String>,
        fields: HashMap<&'static str, FieldState>,
        meta: HashMap<&'static str, String>,
        benefits: Vec<String>,
        collage: Vec<String>,
        benefit_rebuilds: usize,
        placeholder: Option<String>,
        referral_link: Option<String>,
        title: Option<String>,
    }

    impl FakePage {
        fn with_slots(n: usize) -> Self {
            Self {
                slots: vec![None; n],
                benefits: vec!["stale card".to_string()],
                ..Default::default()
            }
        }

        fn without(missing: &[&'static str]) -> Self {
            Self {
                missing: missing.to_vec(),
                ..Self::with_slots(3)
            }
        }

        fn has(&self, selector: &str) -> bool {
            !self.missing.contains(&selector)
        }
    }

    impl Page for FakePage {
        fn set_text(&mut self, region: TextRegion, text: &str) {
            if self.has(region.selector()) {
                self.text.insert(region.selector(), text.to_string());
            }
        }
        fn set_background(&mut self, region: BackgroundRegion, css: &str) {
            if self.has(region.selector()) {
                self.backgrounds.insert(region.selector(), css.to_string());
            }
        }
        fn step_slots(&self) -> usize {
            self.slots.len()
        }
        fn set_step(&mut self, slot: usize, step: &Step) {
            self.slots[slot] = Some((slot + 1, step.title.to_string(), step.description.to_string()));
        }
        fn rebuild_benefits(&mut self, cards: &[BenefitCard]) {
            self.benefit_rebuilds += 1;
            self.benefits = cards.iter().map(|c| c.heading.to_string()).collect();
        }
        fn rebuild_collage(&mut self, images: &[&str]) {
            self.collage = images.iter().map(|i| i.to_string()).collect();
        }
        fn set_label(&mut self, field: LabelField, text: &str) {
            if self.has(field.selector()) {
                self.labels.insert(field.selector(), text.to_string());
            }
        }
        fn set_niche_placeholder(&mut self, text: &str) {
            self.placeholder = Some(text.to_string());
        }
        fn set_field_state(&mut self, field: ConditionalField, state: FieldState) {
            self.fields.insert(field.element_id(), state);
        }
        fn set_referral_link(&mut self, url: &str) {
            self.referral_link = Some(url.to_string());
        }
        fn set_title(&mut self, title: &str) {
            self.title = Some(title.to_string());
        }
        fn set_meta(&mut self, tag: MetaTag, value: &str) {
            if self.has(tag.selector()) {
                self.meta.insert(tag.selector(), value.to_string());
            }
        }
    }

    fn bind(partner: PartnerType, page: &mut FakePage) -> bool {
        let view = PartnerView::new(partner);
        let referral = ReferralContext::new(partner, Some("ABC123"));
        Binder::new().bind(page, &view, &referral)
    }

    #[test]
    fn writes_hero_and_secondary_copy() {
        let mut page = FakePage::with_slots(3);
        assert!(bind(PartnerType::Hotel, &mut page));
        let profile = PartnerType::Hotel.profile();
        assert_eq!(page.text["#heroHeadline"], profile.headline);
        assert_eq!(page.text["#heroSubtext"], profile.subtext);
        assert_eq!(page.text["#earningsExample"], profile.example);
        assert_eq!(page.text["#secondaryHeadline"], profile.secondary_headline);
        assert_eq!(page.backgrounds[".thank-you-hero"], "url('assets/hotel_hero.jpg')");
        assert_eq!(page.labels["label[for=\"organization\"]"], "Hotel Name");
        assert_eq!(page.placeholder.as_deref(), Some("e.g. Tours, Activities, Nightlife"));
    }

    static FOUR_STEPS: &[Step] = &[
        Step { title: "One", description: "First." },
        Step { title: "Two", description: "Second." },
        Step { title: "Three", description: "Third." },
        Step { title: "Four", description: "Fourth." },
    ];

    #[test]
    fn more_steps_than_slots_fills_every_slot() {
        let view = PartnerView {
            steps: FOUR_STEPS,
            ..PartnerView::new(PartnerType::Nightlife)
        };
        let referral = ReferralContext::new(PartnerType::Nightlife, None);
        let mut page = FakePage::with_slots(3);
        assert!(Binder::new().bind(&mut page, &view, &referral));
        assert!(page.slots.iter().all(Option::is_some));
        assert_eq!(
            page.slots[2],
            Some((3, "Three".to_string(), "Third.".to_string()))
        );
    }

    #[test]
    fn missing_regions_are_skipped() {
        let mut page = FakePage::without(&[
            "#heroSubtext",
            ".thank-you-hero",
            "label[for=\"organization\"]",
            "meta[property=\"og:image\"]",
        ]);
        assert!(bind(PartnerType::Hotel, &mut page));
        assert!(!page.text.contains_key("#heroSubtext"));
        assert!(!page.backgrounds.contains_key(".thank-you-hero"));
        assert!(!page.labels.contains_key("label[for=\"organization\"]"));
        assert!(!page.meta.contains_key("meta[property=\"og:image\"]"));
        assert_eq!(page.text["#heroHeadline"], PartnerType::Hotel.profile().headline);
        assert!(page.meta.contains_key("meta[property=\"og:title\"]"));
        assert!(page.slots.iter().all(Option::is_some));
    }

    #[test]
    fn fewer_steps_than_slots_leaves_extra_slots_untouched() {
        let mut page = FakePage::with_slots(5);
        bind(PartnerType::Hotel, &mut page);
        let filled = page.slots.iter().filter(|s| s.is_some()).count();
        assert_eq!(filled, 3);
        assert!(page.slots[3].is_none() && page.slots[4].is_none());
        assert_eq!(
            page.slots[0],
            Some((1, "Place QR Codes".to_string(), "Place QR codes in your hotel rooms and lobbies.".to_string()))
        );
    }

    #[test]
    fn layout_without_steps_is_tolerated() {
        let mut page = FakePage::with_slots(0);
        assert!(bind(PartnerType::Influencer, &mut page));
        assert!(page.slots.is_empty());
    }

    #[test]
    fn benefits_grid_is_rebuilt_in_order() {
        let mut page = FakePage::with_slots(3);
        bind(PartnerType::Venue, &mut page);
        assert_eq!(page.benefit_rebuilds, 1);
        assert_eq!(page.benefits.len(), 4);
        assert_eq!(page.benefits[0], "Fill empty tables and time slots with high‑value bookings");
        assert!(!page.benefits.contains(&"stale card".to_string()));
    }

    #[test]
    fn applies_visibility_rules_for_partner() {
        let mut page = FakePage::with_slots(3);
        bind(PartnerType::Influencer, &mut page);
        assert_eq!(page.fields["platform"], FieldState { visible: true, required: true });
        assert_eq!(page.fields["location"], FieldState::default());
        assert_eq!(page.fields.len(), 4);
    }

    #[test]
    fn rewrites_social_meta_and_referral_link() {
        let mut page = FakePage::with_slots(3);
        bind(PartnerType::Influencer, &mut page);
        let title = PartnerType::Influencer.profile().title;
        assert_eq!(page.meta["meta[property=\"og:title\"]"].as_str(), title.unwrap());
        assert_eq!(page.title.as_deref(), title);
        assert!(page.meta["link[rel=\"canonical\"]"].ends_with("?type=influencer"));
        assert_eq!(page.referral_link.as_deref(), Some("https://traaple.com/signup?ref=ABC123"));
        assert_eq!(page.collage.len(), 3);
    }

    #[test]
    fn binds_only_once() {
        let view = PartnerView::new(PartnerType::Hotel);
        let referral = ReferralContext::new(PartnerType::Hotel, None);
        let mut binder = Binder::new();
        assert_eq!(binder.state(), BindState::Unbound);

        let mut first = FakePage::with_slots(3);
        assert!(binder.bind(&mut first, &view, &referral));
        assert_eq!(binder.state(), BindState::Bound);

        let mut second = FakePage::with_slots(3);
        assert!(!binder.bind(&mut second, &view, &referral));
        assert!(second.text.is_empty());
        assert_eq!(second.benefit_rebuilds, 0);
    }
}
