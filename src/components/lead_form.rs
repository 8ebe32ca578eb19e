use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::config;
use crate::dom::{self, FORM_ID};
use crate::lead::{
    HttpRegistrar, LeadField, LeadFormState, Registrar, RegistrationError, Rejection,
    SubmitOutcome,
};
use crate::resolve::ReferralContext;

#[derive(Properties, PartialEq)]
pub struct LeadFormProps {
    pub referral: ReferralContext,
}

pub enum LeadFormMsg {
    SetField(LeadField, String),
    Submit,
    Finished(Result<(), RegistrationError>),
    CloseOverlay,
    OverlayClick { on_backdrop: bool },
}

pub struct LeadForm {
    state: LeadFormState,
    registrar: HttpRegistrar,
}

/// Reads the value of the input or select that fired `e`.
fn event_value(e: &Event) -> String {
    let Some(target) = e.target() else {
        return String::new();
    };
    match target.dyn_into::<HtmlInputElement>() {
        Ok(input) => input.value(),
        Err(target) => target
            .dyn_into::<HtmlSelectElement>()
            .map(|select| select.value())
            .unwrap_or_default(),
    }
}

impl Component for LeadForm {
    type Message = LeadFormMsg;
    type Properties = LeadFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            state: LeadFormState::default(),
            registrar: HttpRegistrar::new(config::get_registration_url()),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            LeadFormMsg::SetField(field, value) => {
                self.state.set_field(field, value);
                true
            }
            LeadFormMsg::Submit => match self.state.begin_submit(&ctx.props().referral) {
                Ok(payload) => {
                    debug!(
                        "Submitting partner registration: {}",
                        serde_json::to_string(&payload).unwrap_or_default()
                    );
                    let registrar = self.registrar.clone();
                    ctx.link().send_future(async move {
                        LeadFormMsg::Finished(registrar.register(&payload).await)
                    });
                    true
                }
                Err(Rejection::InvalidEmail) => true,
                Err(Rejection::InFlight) => false,
            },
            LeadFormMsg::Finished(result) => {
                if let SubmitOutcome::Failed { notice } = self.state.finish_submit(result) {
                    dom::alert(notice);
                }
                true
            }
            LeadFormMsg::CloseOverlay => {
                self.state.overlay.close();
                true
            }
            LeadFormMsg::OverlayClick { on_backdrop } => {
                self.state.overlay.click(on_backdrop);
                on_backdrop
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            LeadFormMsg::Submit
        });
        let on_overlay_click = link.callback(|e: MouseEvent| LeadFormMsg::OverlayClick {
            on_backdrop: e.target() == e.current_target(),
        });
        let overlay_hidden = !self.state.overlay.is_visible();

        html! {
            <>
                <form id={FORM_ID} class="partner-form" onsubmit={onsubmit}>
                    <label for="name">{"Name"}</label>
                    { self.input(ctx, LeadField::Name, "name", "text", true) }

                    <label for="email">{"Email"}</label>
                    { self.input(ctx, LeadField::Email, "email", "email", true) }
                    if let Some(warning) = self.state.warning {
                        <p class="form-warning" role="alert">{warning.to_string()}</p>
                    }

                    <label for="organization">{"Organization"}</label>
                    { self.input(ctx, LeadField::Organization, "organization", "text", false) }

                    <label for="location">{"Location"}</label>
                    { self.input(ctx, LeadField::Location, "location", "text", false) }

                    <label for="propertyType">{"Property Type"}</label>
                    { self.select(ctx, LeadField::PropertyType, "propertyType", &[
                        ("", "Select property type"),
                        ("hotel", "Hotel"),
                        ("guesthouse", "Guesthouse"),
                        ("apartment", "Serviced Apartment"),
                        ("restaurant", "Restaurant"),
                        ("club", "Bar / Club"),
                        ("event-space", "Event Space"),
                    ]) }

                    <label for="phone">{"Phone Number"}</label>
                    { self.input(ctx, LeadField::Phone, "phone", "tel", false) }

                    <label for="platform">{"Main Platform"}</label>
                    { self.select(ctx, LeadField::Platform, "platform", &[
                        ("", "Select platform"),
                        ("instagram", "Instagram"),
                        ("tiktok", "TikTok"),
                        ("youtube", "YouTube"),
                        ("x", "X / Twitter"),
                        ("other", "Other"),
                    ]) }

                    <label for="niche">{"Niche"}</label>
                    { self.input(ctx, LeadField::Niche, "niche", "text", false) }

                    <button type="submit" class="cta-button" disabled={self.state.is_busy()}>
                        {self.state.submit_label()}
                    </button>
                </form>

                <div
                    id="thankYouOverlay"
                    class={classes!("thank-you-overlay", overlay_hidden.then(|| "hidden"))}
                    onclick={on_overlay_click}
                >
                    <div class="thank-you-content">
                        <div class="thank-you-hero"></div>
                        <h2>{"Thank you!"}</h2>
                        <p>{"We've received your application. The Traaple partnerships team will be in touch shortly."}</p>
                        <button
                            id="closeThankYou"
                            class="cta-button"
                            onclick={link.callback(|_: MouseEvent| LeadFormMsg::CloseOverlay)}
                        >
                            {"Close"}
                        </button>
                    </div>
                </div>
            </>
        }
    }
}

impl LeadForm {
    fn input(&self, ctx: &Context<Self>, field: LeadField, id: &'static str, kind: &'static str, required: bool) -> Html {
        html! {
            <input
                id={id}
                name={id}
                type={kind}
                required={required}
                value={self.state.fields.get(field).to_string()}
                oninput={ctx.link().callback(move |e: InputEvent| {
                    LeadFormMsg::SetField(field, event_value(&e))
                })}
            />
        }
    }

    fn select(&self, ctx: &Context<Self>, field: LeadField, id: &'static str, options: &[(&'static str, &'static str)]) -> Html {
        let current = self.state.fields.get(field);
        html! {
            <select
                id={id}
                name={id}
                onchange={ctx.link().callback(move |e: Event| {
                    LeadFormMsg::SetField(field, event_value(&e))
                })}
            >
                { for options.iter().map(|&(value, label)| html! {
                    <option value={value} selected={value == current}>{label}</option>
                }) }
            </select>
        }
    }
}
