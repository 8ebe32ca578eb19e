use std::rc::Rc;

use chrono::Datelike;
use log::{debug, info, warn};
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::binder::Binder;
use crate::components::lead_form::LeadForm;
use crate::components::tabs::Tabs;
use crate::config;
use crate::dom::{self, DomPage};
use crate::pages::placeholder::{ComingSoon, NotFound};
use crate::partners::PartnerType;
use crate::resolve::{resolve, PageState, ReferralContext};
use crate::view_model::PartnerView;

/// Resolves the partner type for this load and renders either the
/// microsite or one of the terminal placeholder pages.
#[function_component(Microsite)]
pub fn microsite() -> Html {
    let type_param = use_search_param("type".to_string());
    let ref_param = use_search_param("ref".to_string());
    let meta_type = dom::partner_type_meta();

    match resolve(type_param.as_deref(), meta_type.as_deref(), config::RESOLUTION_POLICY) {
        PageState::Ready(partner) => {
            let referral = ReferralContext::new(partner, ref_param.as_deref());
            html! { <PartnerPage referral={referral} /> }
        }
        PageState::NotFound => {
            info!("No partner type supplied");
            html! { <NotFound /> }
        }
        PageState::ComingSoon => {
            let requested = type_param
                .filter(|value| !value.trim().is_empty())
                .or(meta_type)
                .unwrap_or_default()
                .trim()
                .to_lowercase();
            info!("Partner type {:?} is not supported yet", requested);
            html! { <ComingSoon requested={requested} /> }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct PartnerPageProps {
    pub referral: ReferralContext,
}

fn scroll_to_form() -> Callback<MouseEvent> {
    Callback::from(|e: MouseEvent| {
        e.prevent_default();
        dom::scroll_to_form();
    })
}

#[function_component(PartnerPage)]
pub fn partner_page(props: &PartnerPageProps) -> Html {
    let partner: PartnerType = props.referral.partner_type;
    let view = Rc::new(PartnerView::new(partner));
    let binder = use_mut_ref(Binder::new);

    // Bind profile content into the rendered regions once the page is in the DOM
    {
        let view = view.clone();
        let referral = props.referral.clone();
        use_effect_with_deps(
            move |_| {
                match DomPage::current() {
                    Some(mut page) => {
                        binder.borrow_mut().bind(&mut page, &view, &referral);
                        debug!("Binder state after page-ready: {:?}", binder.borrow().state());
                    }
                    None => warn!("No document available, page left unbound"),
                }
                || ()
            },
            (),
        );
    }

    let year = chrono::Local::now().year();

    html! {
        <div class="partner-page">
            <style>{PAGE_STYLE}</style>
            <header class="site-header">
                <a href="https://traaple.com" class="logo">{"Traaple"}</a>
                <button id="ctaHeader" class="cta-button small" onclick={scroll_to_form()}>
                    {"Become a Partner"}
                </button>
            </header>

            <section class="hero">
                <div class="hero-content">
                    <h1 id="heroHeadline"></h1>
                    <p id="heroSubtext"></p>
                    <button id="heroCTA" class="cta-button" onclick={scroll_to_form()}>
                        {"Get Started"}
                    </button>
                </div>
                <div class="hero-collage"></div>
            </section>

            <section class="story">
                <Tabs view={view.clone()} />
            </section>

            <section class="steps-section">
                <h2>{"How It Works"}</h2>
                <div class="steps">
                    { for (0..config::STEP_SLOTS).map(|_| html! {
                        <div class="step">
                            <div class="step-icon"></div>
                            <h3></h3>
                            <p></p>
                        </div>
                    }) }
                </div>
                <div class="earnings">
                    <h3>{"Example earnings"}</h3>
                    <p id="earningsExample"></p>
                </div>
            </section>

            <section class="benefits-section">
                <h2>{"Why Partner With Traaple"}</h2>
                <div class="benefits-grid"></div>
            </section>

            <section class="secondary-cta">
                <h2 id="secondaryHeadline"></h2>
                <p id="secondarySubtext"></p>
                <button id="secondaryCTA" class="cta-button" onclick={scroll_to_form()}>
                    {"Apply Now"}
                </button>
                <p class="referral">
                    {"Your signup link: "}
                    <a class="referral-link"></a>
                </p>
            </section>

            <section class="form-section">
                <h2>{"Become a Traaple Partner"}</h2>
                <LeadForm referral={props.referral.clone()} />
            </section>

            <footer class="site-footer">
                {"© "}<span id="year">{year.to_string()}</span>{" Traaple. All rights reserved."}
            </footer>
        </div>
    }
}

const PAGE_STYLE: &str = r#"
.partner-page {
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    color: #1b1b1b;
}
.site-header {
    position: sticky;
    top: 0;
    z-index: 10;
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 1rem 2rem;
    background: rgba(255, 255, 255, 0.95);
}
.logo {
    font-weight: 700;
    font-size: 1.4rem;
    color: #14532d;
    text-decoration: none;
}
.hero {
    min-height: 80vh;
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 2rem;
    padding: 4rem 2rem;
    background-size: cover;
    background-position: center;
    color: #ffffff;
}
.hero-content {
    max-width: 640px;
}
.hero h1 {
    font-size: 3rem;
    margin-bottom: 1rem;
}
.hero-collage {
    display: grid;
    grid-template-columns: repeat(2, 160px);
    gap: 0.75rem;
}
.collage-item {
    width: 160px;
    height: 160px;
    object-fit: cover;
    border-radius: 12px;
}
.cta-button {
    padding: 0.9rem 1.8rem;
    border: none;
    border-radius: 8px;
    background: #16a34a;
    color: #ffffff;
    font-size: 1rem;
    cursor: pointer;
}
.cta-button.small {
    padding: 0.5rem 1rem;
}
.cta-button:disabled {
    opacity: 0.6;
    cursor: wait;
}
.story, .steps-section, .benefits-section, .form-section {
    padding: 4rem 2rem;
    max-width: 1100px;
    margin: 0 auto;
}
.tab-buttons {
    display: flex;
    gap: 0.5rem;
    margin-bottom: 1.5rem;
}
.tab-button {
    padding: 0.6rem 1.2rem;
    border: 1px solid #16a34a;
    border-radius: 999px;
    background: transparent;
    cursor: pointer;
}
.tab-button.active {
    background: #16a34a;
    color: #ffffff;
}
.tab-panel {
    display: none;
    padding: 2rem;
    border-radius: 16px;
    background-size: cover;
}
.tab-panel.active {
    display: block;
}
.tab-panel img {
    max-width: 100%;
    border-radius: 12px;
}
.steps {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
    gap: 1.5rem;
}
.step-icon {
    width: 40px;
    height: 40px;
    border-radius: 50%;
    background: #16a34a;
    color: #ffffff;
    display: flex;
    align-items: center;
    justify-content: center;
    font-weight: 700;
}
.earnings {
    margin-top: 2rem;
    padding: 1.5rem;
    border-radius: 12px;
    background: #f0fdf4;
}
.benefits-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
    gap: 1.5rem;
}
.benefit-card {
    display: flex;
    gap: 1rem;
    padding: 1.5rem;
    border-radius: 12px;
    box-shadow: 0 4px 16px rgba(0, 0, 0, 0.08);
}
.benefit-icon {
    flex: 0 0 32px;
    height: 32px;
    border-radius: 8px;
    background: #bbf7d0;
}
.secondary-cta {
    padding: 5rem 2rem;
    text-align: center;
    color: #ffffff;
    background-size: cover;
    background-position: center;
}
.referral-link {
    color: #bbf7d0;
}
.partner-form {
    display: grid;
    gap: 1rem;
    max-width: 560px;
}
.partner-form label {
    font-weight: 600;
}
.partner-form input, .partner-form select {
    padding: 0.7rem;
    border: 1px solid #d4d4d4;
    border-radius: 8px;
}
.form-warning {
    color: #b91c1c;
}
.hidden {
    display: none !important;
}
.thank-you-overlay {
    position: fixed;
    inset: 0;
    z-index: 100;
    display: flex;
    align-items: center;
    justify-content: center;
    background: rgba(0, 0, 0, 0.6);
}
.thank-you-content {
    width: min(480px, 90vw);
    border-radius: 16px;
    overflow: hidden;
    background: #ffffff;
    text-align: center;
}
.thank-you-hero {
    height: 180px;
    background-size: cover;
    background-position: center;
}
.site-footer {
    padding: 2rem;
    text-align: center;
    color: #737373;
}
@media (max-width: 768px) {
    .hero {
        flex-direction: column;
        padding: 3rem 1rem;
    }
    .hero h1 {
        font-size: 2.2rem;
    }
}
"#;
