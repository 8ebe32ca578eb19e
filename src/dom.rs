use log::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    window, Document, Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition,
};

use crate::binder::{BackgroundRegion, LabelField, MetaTag, Page, TextRegion};
use crate::partners::Step;
use crate::view_model::BenefitCard;
use crate::visibility::{ConditionalField, FieldState};

pub const FORM_ID: &str = "partnerForm";

/// The live browser document seen through the [`Page`] regions.
pub struct DomPage {
    document: Document,
}

impl DomPage {
    pub fn current() -> Option<Self> {
        window()?.document().map(|document| Self { document })
    }

    fn find(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    fn find_html(&self, selector: &str) -> Option<HtmlElement> {
        self.find(selector)?.dyn_into::<HtmlElement>().ok()
    }

    fn step_elements(&self) -> Vec<Element> {
        let Ok(nodes) = self.document.query_selector_all(".step") else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn element(&self, tag: &str, class: &str) -> Result<Element, JsValue> {
        let el = self.document.create_element(tag)?;
        if !class.is_empty() {
            el.set_class_name(class);
        }
        Ok(el)
    }

    fn benefit_card(&self, card: &BenefitCard) -> Result<Element, JsValue> {
        let root = self.element("div", "benefit-card")?;
        let icon = self.element("div", "benefit-icon")?;
        let text = self.element("div", "")?;
        let heading = self.element("h3", "")?;
        heading.set_text_content(Some(card.heading));
        let body = self.element("p", "")?;
        body.set_text_content(Some(card.body));
        text.append_child(&heading)?;
        text.append_child(&body)?;
        root.append_child(&icon)?;
        root.append_child(&text)?;
        Ok(root)
    }

    fn collage_image(&self, src: &str) -> Result<Element, JsValue> {
        let img = self.element("img", "collage-item")?;
        img.set_attribute("src", src)?;
        img.set_attribute("alt", "")?;
        img.set_attribute("loading", "lazy")?;
        Ok(img)
    }
}

impl Page for DomPage {
    fn set_text(&mut self, region: TextRegion, text: &str) {
        if let Some(el) = self.find(region.selector()) {
            el.set_text_content(Some(text));
        }
    }

    fn set_background(&mut self, region: BackgroundRegion, css: &str) {
        if let Some(el) = self.find_html(region.selector()) {
            let _ = el.style().set_property("background-image", css);
        }
    }

    fn step_slots(&self) -> usize {
        self.step_elements().len()
    }

    fn set_step(&mut self, slot: usize, step: &Step) {
        let Some(container) = self.step_elements().into_iter().nth(slot) else {
            return;
        };
        let child = |selector: &str| container.query_selector(selector).ok().flatten();
        if let Some(icon) = child(".step-icon") {
            icon.set_text_content(Some((slot + 1).to_string().as_str()));
        }
        if let Some(title) = child("h3") {
            title.set_text_content(Some(step.title));
        }
        if let Some(description) = child("p") {
            description.set_text_content(Some(step.description));
        }
    }

    fn rebuild_benefits(&mut self, cards: &[BenefitCard]) {
        let Some(grid) = self.find(".benefits-grid") else {
            return;
        };
        grid.set_inner_html("");
        for card in cards {
            if let Err(e) = self.benefit_card(card).and_then(|el| grid.append_child(&el)) {
                warn!("Failed to add benefit card: {:?}", e);
            }
        }
    }

    fn rebuild_collage(&mut self, images: &[&str]) {
        let Some(collage) = self.find(".hero-collage") else {
            return;
        };
        collage.set_inner_html("");
        for src in images {
            if let Err(e) = self.collage_image(src).and_then(|el| collage.append_child(&el)) {
                warn!("Failed to add collage image {}: {:?}", src, e);
            }
        }
    }

    fn set_label(&mut self, field: LabelField, text: &str) {
        if let Some(label) = self.find(field.selector()) {
            label.set_text_content(Some(text));
        }
    }

    fn set_niche_placeholder(&mut self, text: &str) {
        if let Some(input) = self.document.get_element_by_id(ConditionalField::Niche.element_id()) {
            let _ = input.set_attribute("placeholder", text);
        }
    }

    fn set_field_state(&mut self, field: ConditionalField, state: FieldState) {
        let id = field.element_id();
        if let Some(input) = self.document.get_element_by_id(id) {
            let _ = input.class_list().toggle_with_force("hidden", !state.visible);
            let _ = if state.required {
                input.set_attribute("required", "")
            } else {
                input.remove_attribute("required")
            };
        }
        if let Some(label) = self.find(&format!("label[for=\"{}\"]", id)) {
            let _ = label.class_list().toggle_with_force("hidden", !state.visible);
        }
    }

    fn set_referral_link(&mut self, url: &str) {
        if let Some(link) = self.find(".referral-link") {
            let _ = link.set_attribute("href", url);
            link.set_text_content(Some(url));
        }
    }

    fn set_title(&mut self, title: &str) {
        self.document.set_title(title);
    }

    fn set_meta(&mut self, tag: MetaTag, value: &str) {
        if let Some(el) = self.find(tag.selector()) {
            let _ = el.set_attribute(tag.attribute(), value);
        }
    }
}

/// Content of `<meta name="partner-type">`, if the page declares one.
pub fn partner_type_meta() -> Option<String> {
    DomPage::current()?
        .find("meta[name=\"partner-type\"]")?
        .get_attribute("content")
}

/// Smoothly scrolls the lead form into view. Does nothing when the form is absent.
pub fn scroll_to_form() {
    let Some(form) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(FORM_ID))
    else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    form.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Blocking notice for failures the user has to acknowledge.
pub fn alert(message: &str) {
    if let Some(window) = window() {
        let _ = window.alert_with_message(message);
    }
}
