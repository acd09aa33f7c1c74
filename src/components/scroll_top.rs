use stylist::css;
use yew::prelude::*;

use crate::components::icons::ArrowUp;
use crate::hooks::use_scroll_top_visible;
use crate::viewport::scroll_to_top;

#[function_component(ScrollTopButton)]
pub fn scroll_top_button() -> Html {
    let visible = use_scroll_top_visible();

    if !visible {
        return html! {};
    }

    let onclick = Callback::from(|_: MouseEvent| scroll_to_top());

    let style = css!(
        r#"
        position: fixed;
        right: 1.5rem;
        bottom: 1.5rem;
        z-index: 50;
        padding: 0.75rem;
        border: 0;
        border-radius: 9999px;
        cursor: pointer;
        color: rgb(var(--kc-bg));
        background: linear-gradient(90deg, rgb(var(--kc-accent)), rgb(var(--kc-cta)));
        box-shadow: 0 10px 30px rgba(0,0,0,0.35), 0 0 22px rgba(56,189,248,0.45);
        transition: transform 150ms ease;

        &:hover {
            transform: translateY(-2px);
        }
        "#
    );

    html! {
        <button aria-label="Back to top" class={style} {onclick}>
            <ArrowUp />
        </button>
    }
}
