use std::rc::Rc;

use yew::prelude::*;

use crate::tabs::TabController;
use crate::view_model::PartnerView;

#[derive(Properties, PartialEq)]
pub struct TabsProps {
    pub view: Rc<PartnerView>,
}

fn tab_label(panel: &str) -> &'static str {
    match panel {
        "problem" => "The Problem",
        "solution" => "The Solution",
        "how-it-works" => "How It Works",
        _ => "",
    }
}

#[function_component(Tabs)]
pub fn tabs(props: &TabsProps) -> Html {
    let controller = use_state(TabController::default);
    let view = &props.view;

    let activate = {
        let controller = controller.clone();
        Callback::from(move |name: &'static str| {
            let mut next = (*controller).clone();
            if next.activate(name) {
                controller.set(next);
            }
        })
    };

    let panel_body = |panel: &str| -> Html {
        match panel {
            "problem" => html! {
                <>
                    <h2>{view.problem_heading}</h2>
                    <p>{view.problem_content}</p>
                </>
            },
            "solution" => html! {
                <>
                    <h2>{view.solution_heading}</h2>
                    <p>{view.solution_content}</p>
                    <img src={view.solution_image} alt={view.solution_heading} loading="lazy" />
                </>
            },
            "how-it-works" => html! {
                <ol class="tab-steps">
                    { for view.steps.iter().map(|step| html! {
                        <li>
                            <strong>{step.title}</strong>
                            {" – "}
                            {step.description}
                        </li>
                    }) }
                </ol>
            },
            _ => html! {},
        }
    };

    html! {
        <div class="tabs">
            <div class="tab-buttons">
                { for controller.panels().iter().map(|&panel| {
                    let activate = activate.clone();
                    html! {
                        <button
                            class={classes!("tab-button", controller.is_active(panel).then(|| "active"))}
                            data-tab={panel}
                            onclick={Callback::from(move |_: MouseEvent| activate.emit(panel))}
                        >
                            {tab_label(panel)}
                        </button>
                    }
                }) }
            </div>
            { for controller.panels().iter().map(|&panel| {
                let style = (panel == "problem")
                    .then(|| format!("background-image: {};", view.problem_background));
                html! {
                    <div
                        id={format!("{}-panel", panel)}
                        class={classes!("tab-panel", controller.is_active(panel).then(|| "active"))}
                        style={style}
                    >
                        {panel_body(panel)}
                        if let Some(next) = controller.next_of(panel) {
                            <button
                                class="tab-next"
                                onclick={
                                    let activate = activate.clone();
                                    Callback::from(move |_: MouseEvent| activate.emit(next))
                                }
                            >
                                {format!("Next: {} →", tab_label(next))}
                            </button>
                        }
                    </div>
                }
            }) }
        </div>
    }
}
