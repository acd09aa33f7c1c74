use yew::prelude::*;

use crate::mailto;

#[derive(Properties, PartialEq)]
pub struct MailtoButtonProps {
    pub subject: String,
    #[prop_or(String::from("Get the $99 Trial"))]
    pub label: String,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(MailtoButton)]
pub fn mailto_button(props: &MailtoButtonProps) -> Html {
    html! {
        <a
            href={mailto::href(&props.subject)}
            class={classes!("btn", "btn-gradient", props.class.clone())}
            aria-label="Email Kinetic Clips"
        >
            <span class="btn-label">{&props.label}</span>
            <span aria-hidden="true" class="btn-sheen"></span>
        </a>
    }
}
