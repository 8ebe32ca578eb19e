use log::Level;

use crate::resolve::ResolutionPolicy;

#[cfg(debug_assertions)]
pub fn get_registration_url() -> &'static str {
    "http://localhost:3001/api/partners/register"  // Development API when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_registration_url() -> &'static str {
    "https://api.traaple.com/api/partners/register"
}

/// Public origin of the microsite, used for canonical and og:url/og:image.
pub const SITE_URL: &str = "https://partners.traaple.com";

/// Host the referral signup link points at.
pub const SIGNUP_HOST: &str = "traaple.com";

pub const DEFAULT_REFERRAL_CODE: &str = "YOUR_REF_CODE";

/// How unknown or missing partner types are handled for this deployment.
pub const RESOLUTION_POLICY: ResolutionPolicy = ResolutionPolicy::Strict;

/// Number of step blocks the page skeleton renders.
pub const STEP_SLOTS: usize = 3;

pub const LOG_LEVEL: Level = Level::Info;
