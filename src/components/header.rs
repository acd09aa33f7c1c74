use yew::prelude::*;
use web_sys::MouseEvent;

use crate::components::icons::{Hamburger, LogoSpark};
use crate::components::mailto_button::MailtoButton;
use crate::content::NavLink;
use crate::hooks::{use_header_scroll, use_menu};
use crate::interaction::menu::MenuEvent;

#[derive(Properties, PartialEq)]
pub struct SiteHeaderProps {
    pub brand: String,
    pub nav: Vec<NavLink>,
    /// Section id highlighted by the scrollspy, without `#`.
    pub active: Option<String>,
    pub trial_subject: String,
}

#[function_component(SiteHeader)]
pub fn site_header(props: &SiteHeaderProps) -> Html {
    let scroll = use_header_scroll();
    let (menu, dispatch) = use_menu();

    let toggle_menu = {
        let dispatch = dispatch.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            dispatch.emit(MenuEvent::Toggle);
        })
    };

    // No prevent_default here: the anchor still has to jump to its section.
    let close_menu = Callback::from(move |_: MouseEvent| dispatch.emit(MenuEvent::LinkSelected));

    let progress_style = format!(
        "width: {:.2}%; opacity: {};",
        scroll.progress,
        if scroll.progress > 0.0 { 1 } else { 0 }
    );

    html! {
        <header class={classes!("site-header", scroll.scrolled.then(|| "scrolled"))}>
            <div aria-hidden="true" class="progress-track"></div>
            <div aria-hidden="true" class="progress-bar" style={progress_style}></div>

            <nav class="section nav-content">
                <a href="#" class="nav-logo" aria-label={format!("{} home", props.brand)}>
                    <LogoSpark class={classes!("logo-spark")} />
                    <span>{&props.brand}</span>
                </a>

                <button
                    class="btn btn-secondary burger-menu"
                    aria-label="Toggle navigation"
                    aria-controls="mobile-menu"
                    aria-expanded={menu.open.to_string()}
                    onclick={toggle_menu}
                >
                    <Hamburger />
                </button>

                <div class="nav-right">
                    <ul class="nav-links">
                        { for props.nav.iter().map(|link| {
                            let is_active = props.active.as_deref() == Some(link.target.as_str());
                            html! {
                                <li key={link.target.clone()}>
                                    <a href={link.href()} class={classes!("nav-link", is_active.then(|| "active"))}>
                                        <span class="nav-label">{&link.label}</span>
                                        <span aria-hidden="true" class="nav-glow"></span>
                                        <span aria-hidden="true" class="nav-underline"></span>
                                    </a>
                                </li>
                            }
                        }) }
                    </ul>
                    <MailtoButton subject={props.trial_subject.clone()} />
                </div>
            </nav>

            if menu.open {
                <div id="mobile-menu" class="mobile-menu">
                    <div class="section">
                        <ul class="mobile-links">
                            { for props.nav.iter().map(|link| html! {
                                <li key={link.target.clone()}>
                                    <a href={link.href()} class="mobile-link" onclick={close_menu.clone()}>
                                        {&link.label}
                                    </a>
                                </li>
                            }) }
                        </ul>
                        <MailtoButton subject={props.trial_subject.clone()} class={classes!("full-width")} />
                    </div>
                </div>
            }
        </header>
    }
}
