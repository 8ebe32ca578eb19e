use yew::prelude::*;

const PLACEHOLDER_STYLE: &str = r#"
.placeholder-page {
    min-height: 100vh;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    padding: 2rem;
    text-align: center;
    background: #0f1f17;
    color: #ffffff;
}
.placeholder-page h1 {
    font-size: 2.5rem;
    margin-bottom: 1rem;
}
.placeholder-page p {
    color: rgba(255, 255, 255, 0.75);
    max-width: 520px;
    line-height: 1.6;
}
.placeholder-page a {
    margin-top: 2rem;
    color: #7ed6a5;
}
"#;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="placeholder-page">
            <style>{PLACEHOLDER_STYLE}</style>
            <h1>{"Page not found"}</h1>
            <p>{"This partner page needs a partner type. Check the link you were given or reach out to the Traaple partnerships team."}</p>
            <a href="https://traaple.com">{"Go to traaple.com"}</a>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ComingSoonProps {
    pub requested: String,
}

#[function_component(ComingSoon)]
pub fn coming_soon(props: &ComingSoonProps) -> Html {
    html! {
        <div class="placeholder-page">
            <style>{PLACEHOLDER_STYLE}</style>
            <h1>{"Coming soon"}</h1>
            <p>
                {format!("Partnerships for \"{}\" are not open yet. We're working on it, check back soon.", props.requested)}
            </p>
            <a href="https://traaple.com">{"Go to traaple.com"}</a>
        </div>
    }
}
