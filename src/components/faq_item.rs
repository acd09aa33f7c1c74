use yew::prelude::*;
use web_sys::MouseEvent;

use crate::components::icons::Chevron;

#[derive(Properties, PartialEq)]
pub struct FaqItemProps {
    pub question: String,
    pub answer: String,
}

#[function_component(FaqItem)]
pub fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", (*is_open).then(|| "open"))}>
            <button class="faq-question" onclick={toggle} aria-expanded={(*is_open).to_string()}>
                <span>{&props.question}</span>
                <Chevron />
            </button>
            if *is_open {
                <p class="faq-answer">{&props.answer}</p>
            }
            <span aria-hidden="true" class="faq-glow"></span>
        </div>
    }
}
