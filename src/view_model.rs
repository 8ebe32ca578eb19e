//! Normalises a partner profile into a fully populated view, so the binder
//! and components never have to check for optional fields.

use crate::config;
use crate::partners::{self, FormLabels, PartnerType, Step};
use crate::visibility::{self, ConditionalField, FieldState};

const DEFAULT_TITLE: &str = "Partner with Traaple";
const DEFAULT_PROBLEM_HEADING: &str = "The problem";
const DEFAULT_PROBLEM_CONTENT: &str = "Your audience is already looking for things to do, and someone else earns when they book.";
const DEFAULT_SOLUTION_HEADING: &str = "The Traaple solution";
const DEFAULT_SOLUTION_CONTENT: &str = "Share curated local experiences through your own link and earn a commission on every booking.";

const HERO_OVERLAY: &str = "linear-gradient(to bottom, rgba(0, 0, 0, 0.45), rgba(0, 0, 0, 0.25))";

#[derive(Clone, Debug, PartialEq)]
pub struct BenefitCard {
    pub heading: &'static str,
    pub body: &'static str,
}

impl BenefitCard {
    /// The heading is the benefit up to its first full stop.
    fn from_benefit(benefit: &'static str) -> Self {
        let heading = benefit.split('.').next().unwrap_or(benefit).trim();
        Self {
            heading,
            body: benefit,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SocialMeta {
    pub title: &'static str,
    pub description: &'static str,
    pub image: String,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PartnerView {
    pub partner: PartnerType,
    pub title: &'static str,
    pub headline: &'static str,
    pub subtext: &'static str,
    pub hero_background: String,
    pub steps: &'static [Step],
    pub example: &'static str,
    pub benefits: Vec<BenefitCard>,
    pub labels: &'static FormLabels,
    pub secondary_headline: &'static str,
    pub secondary_subtext: &'static str,
    pub cta_background: String,
    pub thank_you_background: String,
    pub problem_heading: &'static str,
    pub problem_content: &'static str,
    pub problem_background: String,
    pub solution_heading: &'static str,
    pub solution_content: &'static str,
    pub solution_image: &'static str,
    pub collage: &'static [&'static str],
    pub fields: [(ConditionalField, FieldState); 4],
    pub meta: SocialMeta,
}

fn css_url(path: &str) -> String {
    format!("url('{}')", path)
}

fn absolute_url(path: &str) -> String {
    format!("{}/{}", config::SITE_URL, path.trim_start_matches('/'))
}

impl PartnerView {
    pub fn new(partner: PartnerType) -> Self {
        let p = partners::lookup(partner.as_str());
        let title = p.title.unwrap_or(DEFAULT_TITLE);

        Self {
            partner,
            title,
            headline: p.headline,
            subtext: p.subtext,
            hero_background: format!("{}, {}", HERO_OVERLAY, css_url(p.hero_image)),
            steps: p.steps,
            example: p.example,
            benefits: p.benefits.iter().copied().map(BenefitCard::from_benefit).collect(),
            labels: &p.form_labels,
            secondary_headline: p.secondary_headline,
            secondary_subtext: p.secondary_subtext,
            cta_background: css_url(p.cta_background),
            thank_you_background: css_url(p.thank_you_image),
            problem_heading: p.problem_heading.unwrap_or(DEFAULT_PROBLEM_HEADING),
            problem_content: p.problem_content.unwrap_or(DEFAULT_PROBLEM_CONTENT),
            problem_background: css_url(p.problem_background_image.unwrap_or(p.hero_image)),
            solution_heading: p.solution_heading.unwrap_or(DEFAULT_SOLUTION_HEADING),
            solution_content: p.solution_content.unwrap_or(DEFAULT_SOLUTION_CONTENT),
            solution_image: p.solution_image.unwrap_or(p.hero_image),
            collage: p.collage.unwrap_or(&[]),
            fields: visibility::field_states(partner),
            meta: SocialMeta {
                title,
                description: p.subtext,
                image: absolute_url(p.hero_image),
                url: format!("{}/?type={}", config::SITE_URL, partner),
            },
        }
    }
}
