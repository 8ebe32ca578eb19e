//! Resolves the active partner type and referral code from the page URL.

use crate::config;
use crate::partners::PartnerType;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolutionPolicy {
    /// Unknown or missing types silently use the default profile.
    Permissive,
    /// Missing types render "not found", unsupported ones "coming soon".
    Strict,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageState {
    Ready(PartnerType),
    NotFound,
    ComingSoon,
}

/// Picks the partner type from the `type` query parameter, then the
/// `partner-type` meta tag. Blank values count as absent.
pub fn resolve(query: Option<&str>, meta: Option<&str>, policy: ResolutionPolicy) -> PageState {
    let supplied = [query, meta]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|value| !value.is_empty());

    let Some(key) = supplied else {
        return match policy {
            ResolutionPolicy::Permissive => PageState::Ready(PartnerType::DEFAULT),
            ResolutionPolicy::Strict => PageState::NotFound,
        };
    };

    match (PartnerType::from_key(key), policy) {
        (Some(partner), _) => PageState::Ready(partner),
        (None, ResolutionPolicy::Permissive) => PageState::Ready(PartnerType::DEFAULT),
        (None, ResolutionPolicy::Strict) => PageState::ComingSoon,
    }
}

/// Per-load referral state threaded into the signup link and the lead payload.
#[derive(Clone, Debug, PartialEq)]
pub struct ReferralContext {
    pub partner_type: PartnerType,
    pub referral_code: String,
}

impl ReferralContext {
    pub fn new(partner_type: PartnerType, referral_code: Option<&str>) -> Self {
        let referral_code = referral_code
            .filter(|code| !code.is_empty())
            .unwrap_or(config::DEFAULT_REFERRAL_CODE)
            .to_string();
        Self {
            partner_type,
            referral_code,
        }
    }

    pub fn referral_url(&self) -> String {
        format!(
            "https://{}/signup?ref={}",
            config::SIGNUP_HOST,
            urlencoding::encode(&self.referral_code)
        )
    }
}
