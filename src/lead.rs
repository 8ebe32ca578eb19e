//! Lead capture: field state, validation, the registration payload and the
//! request to the partner registration API.

use gloo_net::http::Request;
use log::{error, info, warn};
use serde::Serialize;
use thiserror::Error;

use crate::overlay::Overlay;
use crate::partners::PartnerType;
use crate::resolve::ReferralContext;

pub const SUBMIT_LABEL: &str = "Submit Application";
pub const BUSY_LABEL: &str = "Submitting...";
pub const ERROR_NOTICE: &str =
    "There was an error submitting your application. Please try again or contact support.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeadField {
    Name,
    Email,
    Organization,
    Location,
    Phone,
    Platform,
    PropertyType,
    Niche,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeadFields {
    pub name: String,
    pub email: String,
    pub organization: String,
    pub location: String,
    pub phone: String,
    pub platform: String,
    pub property_type: String,
    pub niche: String,
}

impl LeadFields {
    pub fn get(&self, field: LeadField) -> &str {
        match field {
            LeadField::Name => &self.name,
            LeadField::Email => &self.email,
            LeadField::Organization => &self.organization,
            LeadField::Location => &self.location,
            LeadField::Phone => &self.phone,
            LeadField::Platform => &self.platform,
            LeadField::PropertyType => &self.property_type,
            LeadField::Niche => &self.niche,
        }
    }

    pub fn set(&mut self, field: LeadField, value: String) {
        let slot = match field {
            LeadField::Name => &mut self.name,
            LeadField::Email => &mut self.email,
            LeadField::Organization => &mut self.organization,
            LeadField::Location => &mut self.location,
            LeadField::Phone => &mut self.phone,
            LeadField::Platform => &mut self.platform,
            LeadField::PropertyType => &mut self.property_type,
            LeadField::Niche => &mut self.niche,
        };
        *slot = value;
    }
}

/// Body of `POST /api/partners/register`. Blank optional fields serialize as `null`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationPayload {
    pub name: String,
    pub email: String,
    pub organization: Option<String>,
    pub location: Option<String>,
    pub phone: Option<String>,
    pub platform: Option<String>,
    pub property_type: Option<String>,
    pub niche: Option<String>,
    pub partner_type: PartnerType,
    pub referral_code: String,
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

impl RegistrationPayload {
    pub fn new(fields: &LeadFields, referral: &ReferralContext) -> Self {
        Self {
            name: fields.name.trim().to_string(),
            email: fields.email.trim().to_string(),
            organization: optional(&fields.organization),
            location: optional(&fields.location),
            phone: optional(&fields.phone),
            platform: optional(&fields.platform),
            property_type: optional(&fields.property_type),
            niche: optional(&fields.niche),
            partner_type: referral.partner_type,
            referral_code: referral.referral_code.clone(),
        }
    }
}

/// `local@domain.tld`: one `@`, a non-empty local part, and a domain of at
/// least two non-empty dot-separated labels. No whitespace anywhere.
pub fn is_plausible_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.split('.').count() >= 2
        && domain.split('.').all(|label| !label.is_empty())
}

#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("request failed: {0}")]
    Network(#[from] gloo_net::Error),

    #[error("registration rejected with status {0}")]
    Status(u16),
}

/// Why a submit was refused before any request was made.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum Rejection {
    #[error("Please enter a valid email address.")]
    InvalidEmail,

    #[error("a registration request is already in flight")]
    InFlight,
}

/// Sends a registration to the partner API.
#[allow(async_fn_in_trait)]
pub trait Registrar {
    async fn register(&self, payload: &RegistrationPayload) -> Result<(), RegistrationError>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpRegistrar {
    endpoint: String,
}

impl HttpRegistrar {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl Registrar for HttpRegistrar {
    async fn register(&self, payload: &RegistrationPayload) -> Result<(), RegistrationError> {
        let response = Request::post(&self.endpoint).json(payload)?.send().await?;
        if response.ok() {
            Ok(())
        } else {
            Err(RegistrationError::Status(response.status()))
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    Failed { notice: &'static str },
}

/// State behind the lead form: entered values, the in-flight guard, the
/// inline warning and the thank-you overlay.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LeadFormState {
    pub fields: LeadFields,
    pub overlay: Overlay,
    pub warning: Option<Rejection>,
    in_flight: bool,
}

impl LeadFormState {
    pub fn is_busy(&self) -> bool {
        self.in_flight
    }

    pub fn submit_label(&self) -> &'static str {
        if self.in_flight {
            BUSY_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    pub fn set_field(&mut self, field: LeadField, value: String) {
        if field == LeadField::Email {
            self.warning = None;
        }
        self.fields.set(field, value);
    }

    /// Validates the form and, if it may be sent, marks a request in flight
    /// and returns the payload to post.
    pub fn begin_submit(&mut self, referral: &ReferralContext) -> Result<RegistrationPayload, Rejection> {
        if self.in_flight {
            warn!("Submit ignored, registration already in flight");
            return Err(Rejection::InFlight);
        }
        if !is_plausible_email(&self.fields.email) {
            self.warning = Some(Rejection::InvalidEmail);
            return Err(Rejection::InvalidEmail);
        }
        self.warning = None;
        self.in_flight = true;
        Ok(RegistrationPayload::new(&self.fields, referral))
    }

    /// Applies the result of the request. The in-flight guard is released on
    /// every path; fields are only cleared on success.
    pub fn finish_submit(&mut self, result: Result<(), RegistrationError>) -> SubmitOutcome {
        self.in_flight = false;
        match result {
            Ok(()) => {
                info!("Partner registration accepted");
                self.overlay.show();
                self.fields = LeadFields::default();
                SubmitOutcome::Accepted
            }
            Err(e) => {
                error!("Form submission error: {}", e);
                SubmitOutcome::Failed {
                    notice: ERROR_NOTICE,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;

    /// Answers every registration with a fixed HTTP status.
    struct FakeRegistrar {
        status: u16,
        calls: Cell<usize>,
        last: RefCell<Option<RegistrationPayload>>,
    }

    impl FakeRegistrar {
        fn responding(status: u16) -> Self {
            Self {
                status,
                calls: Cell::new(0),
                last: RefCell::new(None),
            }
        }
    }

    impl Registrar for FakeRegistrar {
        async fn register(&self, payload: &RegistrationPayload) -> Result<(), RegistrationError> {
            self.calls.set(self.calls.get() + 1);
            *self.last.borrow_mut() = Some(payload.clone());
            if (200..300).contains(&self.status) {
                Ok(())
            } else {
                Err(RegistrationError::Status(self.status))
            }
        }
    }

    async fn submit(
        state: &mut LeadFormState,
        registrar: &FakeRegistrar,
        referral: &ReferralContext,
    ) -> Result<SubmitOutcome, Rejection> {
        let payload = state.begin_submit(referral)?;
        assert_eq!(state.submit_label(), BUSY_LABEL);
        let result = registrar.register(&payload).await;
        Ok(state.finish_submit(result))
    }

    fn filled(email: &str) -> LeadFormState {
        let mut state = LeadFormState::default();
        state.set_field(LeadField::Name, "Ama Mensah".to_string());
        state.set_field(LeadField::Email, email.to_string());
        state.set_field(LeadField::Organization, "Labadi Beach Hotel".to_string());
        state.set_field(LeadField::Location, "Accra".to_string());
        state
    }

    fn hotel_referral() -> ReferralContext {
        ReferralContext::new(PartnerType::Hotel, Some("ABC123"))
    }

    #[test]
    fn email_validation() {
        assert!(is_plausible_email("a@b.com"));
        assert!(is_plausible_email(" ama@mail.traaple.com "));
        assert!(!is_plausible_email("a@b"));
        assert!(!is_plausible_email("@b.com"));
        assert!(!is_plausible_email("a@.com"));
        assert!(!is_plausible_email("a@b."));
        assert!(!is_plausible_email("a@@b.com"));
        assert!(!is_plausible_email("a b@c.com"));
        assert!(!is_plausible_email(""));
    }

    #[test]
    fn payload_carries_partner_type_and_referral_code() {
        let state = filled("ama@example.com");
        let payload = RegistrationPayload::new(&state.fields, &hotel_referral());
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["referralCode"], "ABC123");
        assert_eq!(json["partnerType"], "hotel");
        assert_eq!(json["organization"], "Labadi Beach Hotel");
        assert!(json["platform"].is_null());
        assert!(json["propertyType"].is_null());
        assert_eq!(json.as_object().unwrap().len(), 10);
    }

    #[tokio::test]
    async fn invalid_email_is_rejected_before_any_request() {
        let registrar = FakeRegistrar::responding(200);
        let mut state = filled("a@b");
        let result = submit(&mut state, &registrar, &hotel_referral()).await;
        assert_eq!(result, Err(Rejection::InvalidEmail));
        assert_eq!(state.warning, Some(Rejection::InvalidEmail));
        assert_eq!(registrar.calls.get(), 0);
        assert!(!state.is_busy());
    }

    #[tokio::test]
    async fn valid_email_sends_exactly_one_request() {
        let registrar = FakeRegistrar::responding(200);
        let mut state = filled("a@b.com");
        submit(&mut state, &registrar, &hotel_referral()).await.unwrap();
        assert_eq!(registrar.calls.get(), 1);
        let sent = registrar.last.borrow().clone().unwrap();
        assert_eq!(sent.partner_type, PartnerType::Hotel);
        assert_eq!(sent.referral_code, "ABC123");
    }

    #[tokio::test]
    async fn success_shows_overlay_and_clears_fields() {
        let registrar = FakeRegistrar::responding(200);
        let mut state = filled("a@b.com");
        let outcome = submit(&mut state, &registrar, &hotel_referral()).await;
        assert_eq!(outcome, Ok(SubmitOutcome::Accepted));
        assert!(state.overlay.is_visible());
        assert_eq!(state.fields, LeadFields::default());
        assert_eq!(state.submit_label(), SUBMIT_LABEL);
    }

    #[tokio::test]
    async fn server_error_keeps_fields_and_restores_button() {
        let registrar = FakeRegistrar::responding(500);
        let mut state = filled("a@b.com");
        let outcome = submit(&mut state, &registrar, &hotel_referral()).await;
        assert_eq!(outcome, Ok(SubmitOutcome::Failed { notice: ERROR_NOTICE }));
        assert!(!state.overlay.is_visible());
        assert_eq!(state.fields.email, "a@b.com");
        assert!(!state.is_busy());
        assert_eq!(state.submit_label(), SUBMIT_LABEL);
    }

    #[test]
    fn second_submit_while_in_flight_is_refused() {
        let mut state = filled("a@b.com");
        assert!(state.begin_submit(&hotel_referral()).is_ok());
        assert_eq!(state.begin_submit(&hotel_referral()), Err(Rejection::InFlight));
        state.finish_submit(Err(RegistrationError::Status(502)));
        assert!(state.begin_submit(&hotel_referral()).is_ok());
    }

    #[test]
    fn editing_email_clears_warning() {
        let mut state = filled("nope");
        let _ = state.begin_submit(&hotel_referral());
        assert!(state.warning.is_some());
        state.set_field(LeadField::Email, "a@b.com".to_string());
        assert!(state.warning.is_none());
    }
}
