use yew::prelude::*;

use crate::content::ServiceIcon;

#[derive(Properties, PartialEq)]
pub struct IconProps {
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(LogoSpark)]
pub fn logo_spark(props: &IconProps) -> Html {
    html! {
        <svg viewBox="0 0 24 24" class={props.class.clone()} aria-hidden="true">
            <defs>
                <linearGradient id="logo-gradient" x1="0" y1="0" x2="1" y2="1">
                    <stop offset="0" stop-color="rgb(var(--kc-accent))" />
                    <stop offset="1" stop-color="rgb(var(--kc-cta))" />
                </linearGradient>
            </defs>
            <circle cx="12" cy="12" r="10" fill="url(#logo-gradient)" opacity="0.25" />
            <path
                d="M12 4l1.6 3.8L18 9.2l-3.6 2 1 4.1L12 13.7 8.6 15.3l1-4.1L6 9.2l4.4-1.4L12 4z"
                fill="url(#logo-gradient)"
            />
        </svg>
    }
}

#[function_component(Hamburger)]
pub fn hamburger() -> Html {
    html! {
        <svg width="20" height="20" viewBox="0 0 24 24" aria-hidden="true">
            <path d="M4 6h16M4 12h16M4 18h16" stroke="currentColor" stroke-width="1.8" stroke-linecap="round" />
        </svg>
    }
}

#[function_component(ArrowUp)]
pub fn arrow_up() -> Html {
    html! {
        <svg width="18" height="18" viewBox="0 0 24 24" aria-hidden="true">
            <path d="M12 5l7 7m-7-7L5 12" stroke="currentColor" stroke-width="2" fill="none" />
        </svg>
    }
}

#[function_component(Chevron)]
pub fn chevron() -> Html {
    html! {
        <svg width="18" height="18" viewBox="0 0 24 24" class="chevron" aria-hidden="true">
            <path d="M6 9l6 6 6-6" stroke="currentColor" stroke-width="1.8" stroke-linecap="round" fill="none" />
        </svg>
    }
}

#[function_component(Play)]
pub fn play() -> Html {
    html! {
        <svg width="22" height="22" viewBox="0 0 24 24" aria-hidden="true">
            <path d="M8 5v14l11-7-11-7z" fill="currentColor" />
        </svg>
    }
}

pub fn service_icon(icon: ServiceIcon) -> Html {
    match icon {
        ServiceIcon::Camera => html! {
            <svg width="22" height="22" viewBox="0 0 24 24" aria-hidden="true" class="icon icon-accent">
                <path
                    d="M4 7h3l1.2-2.4A1 1 0 0 1 9.1 4h5.8a1 1 0 0 1 .9.6L17 7h3a2 2 0 0 1 2 2v8a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V9a2 2 0 0 1 2-2Z"
                    stroke="currentColor" fill="none" stroke-width="1.6" stroke-linecap="round" stroke-linejoin="round"
                />
                <circle cx="12" cy="13" r="4" stroke="currentColor" fill="none" stroke-width="1.6" />
            </svg>
        },
        ServiceIcon::Funnel => html! {
            <svg width="22" height="22" viewBox="0 0 24 24" aria-hidden="true" class="icon icon-accent-2">
                <path
                    d="M3 5h18l-7 8v5l-4 2v-7L3 5Z"
                    stroke="currentColor" fill="none" stroke-width="1.6" stroke-linecap="round" stroke-linejoin="round"
                />
            </svg>
        },
        ServiceIcon::Scissors => html! {
            <svg width="22" height="22" viewBox="0 0 24 24" aria-hidden="true" class="icon icon-cta">
                <path d="M14 7l7 7" stroke="currentColor" stroke-width="1.6" stroke-linecap="round" />
                <circle cx="6.5" cy="6.5" r="2.5" stroke="currentColor" fill="none" stroke-width="1.6" />
                <circle cx="6.5" cy="17.5" r="2.5" stroke="currentColor" fill="none" stroke-width="1.6" />
                <path d="M12 12L9 9m3 3l-3 3" stroke="currentColor" stroke-width="1.6" stroke-linecap="round" />
            </svg>
        },
    }
}
